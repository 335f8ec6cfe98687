//! Sequential generate → download → persist loop with a summary pass.
//!
//! The report lines written to `out` are the user-facing output of a run:
//! one progress line per asset, one outcome line, an optional pacing line,
//! then a summary section ending in `DONE`.

use crate::{
    config::BatchConfig,
    error::{AssetGenError, Result},
    fetch::ImageFetcher,
    logger,
    models::{
        kib, AssetRequest, BatchReport, GenerationRequest, ItemOutcome, ItemResult, SummaryEntry,
    },
    pacing::Pacer,
    replicate::ImageGenerator,
};
use std::io::Write;
use std::path::Path;
use std::sync::Arc;

const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];
const RULE_WIDTH: usize = 50;

pub struct AssetBatch {
    config: BatchConfig,
    generator: Arc<dyn ImageGenerator>,
    fetcher: Arc<dyn ImageFetcher>,
    pacer: Arc<dyn Pacer>,
}

impl AssetBatch {
    pub fn new(
        config: BatchConfig,
        generator: Arc<dyn ImageGenerator>,
        fetcher: Arc<dyn ImageFetcher>,
        pacer: Arc<dyn Pacer>,
    ) -> Self {
        Self {
            config,
            generator,
            fetcher,
            pacer,
        }
    }

    pub fn config(&self) -> &BatchConfig {
        &self.config
    }

    /// Runs every asset in order, then the summary pass.
    ///
    /// Only output-directory preparation and writes to `out` are fatal; a
    /// failing asset is reported and the loop moves on.
    pub async fn run<W: Write>(&self, out: &mut W) -> Result<BatchReport> {
        prepare_output_dir(&self.config.output_dir).await?;

        let total = self.config.assets.len();
        let mut report = BatchReport::default();

        for (index, asset) in self.config.assets.iter().enumerate() {
            writeln!(
                out,
                "\n[{}/{}] Generating {} ({})...",
                index + 1,
                total,
                asset.filename,
                asset.aspect_ratio
            )?;
            out.flush()?;

            let result = match self.process(asset).await {
                Ok(bytes) => {
                    writeln!(out, "  OK Saved: {} ({} KB)", asset.filename, kib(bytes))?;
                    ItemResult::Saved { bytes }
                }
                Err(e) => {
                    log::warn!("{} failed: {}", asset.filename, e);
                    writeln!(out, "  FAIL: {} - {}", asset.filename, e)?;
                    ItemResult::Failed {
                        reason: e.to_string(),
                    }
                }
            };
            out.flush()?;

            report.outcomes.push(ItemOutcome {
                filename: asset.filename.clone(),
                result,
            });

            if index + 1 < total {
                writeln!(
                    out,
                    "  Waiting {}s...",
                    self.config.pacing_interval.as_secs()
                )?;
                out.flush()?;
                self.pacer.pause(self.config.pacing_interval).await;
                report.pauses += 1;
            }
        }

        report.summary = self.summarize().await;
        write_summary(out, &report.summary)?;

        log::info!(
            "Batch finished: {} saved, {} failed",
            report.saved(),
            report.failed()
        );
        Ok(report)
    }

    async fn process(&self, asset: &AssetRequest) -> Result<u64> {
        let _timer = logger::timer(&asset.filename);

        let request = GenerationRequest {
            prompt: asset.prompt.clone(),
            aspect_ratio: asset.aspect_ratio,
            output_format: self.config.output_format,
            safety_tolerance: self.config.safety_tolerance,
        };

        let locator = self.generator.generate(&request).await?;
        log::debug!("{} -> {}", asset.filename, preview(&locator));

        let bytes = self.fetcher.fetch(&locator).await?;
        if self.config.verify_png {
            verify_png_signature(&bytes)?;
        }

        let path = self.config.output_dir.join(&asset.filename);
        tokio::fs::write(&path, &bytes).await?;
        let size = tokio::fs::metadata(&path).await?.len();
        Ok(size)
    }

    /// On-disk size of every asset, in list order.
    pub async fn summarize(&self) -> Vec<SummaryEntry> {
        let mut entries = Vec::with_capacity(self.config.assets.len());
        for asset in &self.config.assets {
            let size = file_size(&self.config.output_dir.join(&asset.filename)).await;
            entries.push(SummaryEntry {
                filename: asset.filename.clone(),
                size,
            });
        }
        entries
    }
}

/// Creates `dir` and any missing parents. Succeeds if it already exists.
pub async fn prepare_output_dir(dir: &Path) -> Result<()> {
    tokio::fs::create_dir_all(dir).await?;
    Ok(())
}

pub fn verify_png_signature(bytes: &[u8]) -> Result<()> {
    if bytes.starts_with(&PNG_SIGNATURE) {
        Ok(())
    } else {
        Err(AssetGenError::ValidationError(format!(
            "downloaded {} bytes without a PNG signature",
            bytes.len()
        )))
    }
}

async fn file_size(path: &Path) -> Option<u64> {
    tokio::fs::metadata(path).await.ok().map(|meta| meta.len())
}

fn write_summary<W: Write>(out: &mut W, summary: &[SummaryEntry]) -> Result<()> {
    let rule = "=".repeat(RULE_WIDTH);
    writeln!(out, "\n{}", rule)?;
    writeln!(out, "SUMMARY")?;
    writeln!(out, "{}", rule)?;
    for entry in summary {
        match entry.size {
            Some(size) => writeln!(out, "  OK {}: {} KB", entry.filename, kib(size))?,
            None => writeln!(out, "  MISSING {}", entry.filename)?,
        }
    }
    writeln!(out, "DONE")?;
    out.flush()?;
    Ok(())
}

// data: URIs can run to megabytes
fn preview(locator: &str) -> &str {
    match locator.char_indices().nth(120) {
        Some((idx, _)) => &locator[..idx],
        None => locator,
    }
}
