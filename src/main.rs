use assetgen::{
    catalog, logger, AssetBatch, BatchConfig, HttpFetcher, ImageClient, ReplicateConfig,
    TokioPacer,
};
use std::io;
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let dotenv_loaded = dotenv::dotenv().is_ok();

    logger::init_with_config(logger::LoggerConfig::from_env())?;

    if dotenv_loaded {
        log::debug!("✅ .env file loaded");
    } else {
        log::debug!("No .env file found, using system environment variables");
    }

    let client = match ImageClient::new(ReplicateConfig::from_env()) {
        Ok(client) => client,
        Err(e) => {
            log::error!("❌ Failed to initialize Replicate client: {}", e);
            return Err(e.into());
        }
    };

    log::debug!("🖼️  Known image models:");
    for (id, name, provider) in ImageClient::supported_models() {
        log::debug!("  {} - {} ({})", id, name, provider);
    }

    let model = client.model().to_string();
    let config = BatchConfig::new(catalog::DEFAULT_OUTPUT_DIR, catalog::card_ledger_assets());

    let batch = AssetBatch::new(
        config,
        Arc::new(client),
        Arc::new(HttpFetcher::new()),
        Arc::new(TokioPacer),
    );
    logger::log_batch_info(batch.config(), &model);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let report = batch.run(&mut out).await?;

    if report.failed() > 0 {
        log::warn!(
            "⚠️  {} of {} assets failed",
            report.failed(),
            report.outcomes.len()
        );
    }

    Ok(())
}
