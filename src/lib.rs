pub mod batch;
pub mod catalog;
pub mod config;
pub mod error;
pub mod fetch;
pub mod logger;
pub mod models;
pub mod pacing;
pub mod replicate;

#[cfg(test)]
mod test_support;

pub use batch::{prepare_output_dir, AssetBatch};
pub use config::{BatchConfig, ReplicateConfig};
pub use error::{AssetGenError, Result};
pub use fetch::{HttpFetcher, ImageFetcher};
pub use models::*;
pub use pacing::{NoopPacer, Pacer, TokioPacer};
pub use replicate::{ImageClient, ImageGenerator};
