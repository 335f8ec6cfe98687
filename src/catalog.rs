//! The card-ledger asset set.

use crate::models::{AspectRatio, AssetRequest};

pub const DEFAULT_OUTPUT_DIR: &str = "public/assets";

const CARD_LEDGER: &[(&str, AspectRatio, &str)] = &[
    (
        "hero-bg.png",
        AspectRatio::Wide,
        "Futuristic dark scene with holographic Pokemon trading cards floating in 3D space, glass panels with glowing blue data visualizations, deep navy and purple gradient background, volumetric lighting rays, bokeh particles, cinematic composition, ultra high quality",
    ),
    (
        "feature-track.png",
        AspectRatio::Square,
        "Glass display case with holographic trading cards arranged in a grid, each card glowing with iridescent rainbow edges, dark background with blue ambient light, museum-quality presentation, ultra realistic, professional product photography",
    ),
    (
        "feature-price.png",
        AspectRatio::Square,
        "Futuristic holographic price dashboard floating in dark space, glowing blue and purple charts and numbers, glass panels with market data, trading card silhouettes in background, cinematic lighting, high tech financial interface aesthetic",
    ),
    (
        "feature-scan.png",
        AspectRatio::Square,
        "Smartphone scanning a holographic Pokemon card with AR augmented reality overlay, blue scanning laser lines, card data floating in glass panels around the phone, dark background, futuristic tech aesthetic, professional",
    ),
    (
        "feature-profit.png",
        AspectRatio::Square,
        "Holographic portfolio analytics dashboard floating in dark space, glowing green profit chart trending upward, glass panels with card thumbnails, blue and purple ambient light, futuristic financial visualization, cinematic",
    ),
    (
        "empty-inventory.png",
        AspectRatio::Square,
        "Single holographic trading card floating in dark void, soft blue glow emanating from the card, minimalist, particles of light, ethereal and calm, centered composition, clean negative space",
    ),
    (
        "empty-search.png",
        AspectRatio::Square,
        "Glass magnifying lens floating in dark space, blue light refracting through the lens, scattered light particles, minimalist futuristic aesthetic, clean and elegant",
    ),
    (
        "empty-sales.png",
        AspectRatio::Square,
        "Holographic receipt transforming into a glowing chart, blue and green light, glass effect, dark background, futuristic financial transformation concept, minimalist",
    ),
    (
        "onboard-welcome.png",
        AspectRatio::Tall,
        "Single holographic Pokemon card bursting with prismatic light rays, dark background, epic and dramatic, card emerging from darkness into brilliant blue and purple light, cinematic vertical composition",
    ),
    (
        "onboard-scan.png",
        AspectRatio::Tall,
        "Hands holding smartphone scanning a trading card, AR overlay with blue holographic data, card identification interface, dark background, futuristic mobile technology, vertical composition",
    ),
    (
        "onboard-track.png",
        AspectRatio::Tall,
        "Beautiful glass dashboard showing trading card collection grid, holographic cards organized in rows, portfolio value displayed prominently, dark background with blue glow, vertical composition",
    ),
    (
        "onboard-price.png",
        AspectRatio::Tall,
        "Futuristic price ticker display with holographic numbers and charts, trading cards with price tags floating, market data visualization, blue and green accents on dark background, vertical composition",
    ),
    (
        "onboard-profit.png",
        AspectRatio::Tall,
        "Portfolio growth visualization, glowing green upward trending line chart, holographic coins and trading cards, celebration energy, dark background with blue and green light, vertical composition",
    ),
    (
        "og-share.png",
        AspectRatio::Wide,
        "Premium dark banner with holographic trading cards fanned out, glass panel overlay, blue and purple gradient, professional and sleek, wide cinematic composition, card collection showcase",
    ),
    (
        "empty-watchlist.png",
        AspectRatio::Square,
        "Futuristic eye icon with blue radar pulse rings emanating outward, dark background, holographic glass effect, surveillance and monitoring aesthetic, minimalist and clean",
    ),
];

pub fn card_ledger_assets() -> Vec<AssetRequest> {
    CARD_LEDGER
        .iter()
        .map(|(filename, ratio, prompt)| AssetRequest::new(*filename, *ratio, *prompt))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_filenames_are_unique_pngs() {
        let assets = card_ledger_assets();
        assert_eq!(assets.len(), 15);
        let names: HashSet<_> = assets.iter().map(|a| a.filename.as_str()).collect();
        assert_eq!(names.len(), assets.len());
        assert!(assets.iter().all(|a| a.filename.ends_with(".png")));
        assert!(assets.iter().all(|a| !a.prompt.is_empty()));
    }

    #[test]
    fn test_order_is_preserved() {
        let assets = card_ledger_assets();
        assert_eq!(assets[0].filename, "hero-bg.png");
        assert_eq!(assets[0].aspect_ratio, AspectRatio::Wide);
        assert_eq!(assets[14].filename, "empty-watchlist.png");
    }
}
