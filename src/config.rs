use crate::models::{AssetRequest, OutputFormat};
use std::env;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_API_BASE: &str = "https://api.replicate.com/v1";
pub const DEFAULT_MODEL: &str = "black-forest-labs/flux-1.1-pro";
pub const DEFAULT_PACING_INTERVAL: Duration = Duration::from_secs(65);
pub const DEFAULT_SAFETY_TOLERANCE: u8 = 5;

#[derive(Debug, Clone)]
pub struct ReplicateConfig {
    pub api_token: Option<String>,
    pub api_base: String,
    pub model: String,
    pub poll_interval: Duration,
    pub poll_timeout: Duration,
}

#[derive(Debug, Clone)]
pub struct BatchConfig {
    pub output_dir: PathBuf,
    pub assets: Vec<AssetRequest>,
    pub pacing_interval: Duration,
    pub output_format: OutputFormat,
    pub safety_tolerance: u8,
    pub verify_png: bool,
}

impl Default for ReplicateConfig {
    fn default() -> Self {
        ReplicateConfig {
            api_token: None,
            api_base: DEFAULT_API_BASE.to_string(),
            model: DEFAULT_MODEL.to_string(),
            poll_interval: Duration::from_secs(1),
            poll_timeout: Duration::from_secs(300),
        }
    }
}

impl ReplicateConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_env() -> Self {
        let api_token =
            non_empty_env("REPLICATE_API_TOKEN").or_else(|| non_empty_env("REPLICATE_API_KEY"));
        let api_base = non_empty_env("REPLICATE_API_BASE")
            .map(|base| base.trim_end_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string());

        ReplicateConfig {
            api_token,
            api_base,
            ..Default::default()
        }
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.api_token = Some(token.into());
        self
    }

    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_polling(mut self, interval: Duration, timeout: Duration) -> Self {
        self.poll_interval = interval;
        self.poll_timeout = timeout;
        self
    }
}

impl Default for BatchConfig {
    fn default() -> Self {
        BatchConfig {
            output_dir: PathBuf::from(crate::catalog::DEFAULT_OUTPUT_DIR),
            assets: Vec::new(),
            pacing_interval: DEFAULT_PACING_INTERVAL,
            output_format: OutputFormat::Png,
            safety_tolerance: DEFAULT_SAFETY_TOLERANCE,
            verify_png: false,
        }
    }
}

impl BatchConfig {
    pub fn new(output_dir: impl Into<PathBuf>, assets: Vec<AssetRequest>) -> Self {
        Self {
            output_dir: output_dir.into(),
            assets,
            ..Default::default()
        }
    }

    pub fn with_pacing_interval(mut self, interval: Duration) -> Self {
        self.pacing_interval = interval;
        self
    }

    pub fn with_safety_tolerance(mut self, tolerance: u8) -> Self {
        self.safety_tolerance = tolerance;
        self
    }

    pub fn with_png_verification(mut self, enabled: bool) -> Self {
        self.verify_png = enabled;
        self
    }
}

fn non_empty_env(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}
