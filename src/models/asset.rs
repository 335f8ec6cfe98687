use crate::error::AssetGenError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Aspect ratios accepted by the Flux 1.1 Pro model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AspectRatio {
    #[serde(rename = "1:1")]
    Square,
    #[serde(rename = "16:9")]
    Wide,
    #[serde(rename = "9:16")]
    Tall,
    #[serde(rename = "21:9")]
    UltraWide,
    #[serde(rename = "9:21")]
    UltraTall,
    #[serde(rename = "3:2")]
    Landscape3x2,
    #[serde(rename = "2:3")]
    Portrait2x3,
    #[serde(rename = "4:3")]
    Landscape4x3,
    #[serde(rename = "3:4")]
    Portrait3x4,
    #[serde(rename = "5:4")]
    Landscape5x4,
    #[serde(rename = "4:5")]
    Portrait4x5,
}

impl AspectRatio {
    pub const ALL: [AspectRatio; 11] = [
        AspectRatio::Square,
        AspectRatio::Wide,
        AspectRatio::Tall,
        AspectRatio::UltraWide,
        AspectRatio::UltraTall,
        AspectRatio::Landscape3x2,
        AspectRatio::Portrait2x3,
        AspectRatio::Landscape4x3,
        AspectRatio::Portrait3x4,
        AspectRatio::Landscape5x4,
        AspectRatio::Portrait4x5,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AspectRatio::Square => "1:1",
            AspectRatio::Wide => "16:9",
            AspectRatio::Tall => "9:16",
            AspectRatio::UltraWide => "21:9",
            AspectRatio::UltraTall => "9:21",
            AspectRatio::Landscape3x2 => "3:2",
            AspectRatio::Portrait2x3 => "2:3",
            AspectRatio::Landscape4x3 => "4:3",
            AspectRatio::Portrait3x4 => "3:4",
            AspectRatio::Landscape5x4 => "5:4",
            AspectRatio::Portrait4x5 => "4:5",
        }
    }
}

impl fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AspectRatio {
    type Err = AssetGenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AspectRatio::ALL
            .iter()
            .copied()
            .find(|ratio| ratio.as_str() == s.trim())
            .ok_or_else(|| AssetGenError::ConfigError(format!("Unsupported aspect ratio: {}", s)))
    }
}

/// One (filename, aspect ratio, prompt) record of the batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetRequest {
    pub filename: String,
    pub aspect_ratio: AspectRatio,
    pub prompt: String,
}

impl AssetRequest {
    pub fn new(
        filename: impl Into<String>,
        aspect_ratio: AspectRatio,
        prompt: impl Into<String>,
    ) -> Self {
        Self {
            filename: filename.into(),
            aspect_ratio,
            prompt: prompt.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aspect_ratio_parse() {
        assert_eq!("16:9".parse::<AspectRatio>().unwrap(), AspectRatio::Wide);
        assert_eq!(" 9:16 ".parse::<AspectRatio>().unwrap(), AspectRatio::Tall);
        assert!("7:3".parse::<AspectRatio>().is_err());
    }

    #[test]
    fn test_aspect_ratio_serializes_verbatim() {
        for ratio in AspectRatio::ALL {
            let value = serde_json::to_value(ratio).unwrap();
            assert_eq!(value, ratio.as_str());
        }
    }

    #[test]
    fn test_asset_request_new() {
        let asset = AssetRequest::new("a.png", AspectRatio::Square, "x");
        assert_eq!(asset.filename, "a.png");
        assert_eq!(asset.aspect_ratio.to_string(), "1:1");
        assert_eq!(asset.prompt, "x");
    }
}
