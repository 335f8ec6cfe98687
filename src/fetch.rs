use crate::error::{AssetGenError, Result};
use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use reqwest::Client;

/// Resolves an image locator to its bytes.
#[async_trait]
pub trait ImageFetcher: Send + Sync {
    async fn fetch(&self, locator: &str) -> Result<Vec<u8>>;
}

#[derive(Clone, Default)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ImageFetcher for HttpFetcher {
    async fn fetch(&self, locator: &str) -> Result<Vec<u8>> {
        if let Some(rest) = locator.strip_prefix("data:") {
            return decode_data_uri(rest);
        }

        if !(locator.starts_with("http://") || locator.starts_with("https://")) {
            return Err(AssetGenError::DownloadError(format!(
                "unsupported locator: {}",
                locator
            )));
        }

        let response = self
            .client
            .get(locator)
            .send()
            .await
            .map_err(|e| AssetGenError::DownloadError(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AssetGenError::DownloadError(format!(
                "HTTP {} for {}",
                status, locator
            )));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| AssetGenError::DownloadError(format!("Failed to read image data: {}", e)))?;
        Ok(bytes.to_vec())
    }
}

fn decode_data_uri(rest: &str) -> Result<Vec<u8>> {
    let (meta, payload) = rest
        .split_once(',')
        .ok_or_else(|| AssetGenError::DownloadError("malformed data URI".into()))?;

    if meta.ends_with(";base64") {
        STANDARD
            .decode(payload.trim())
            .map_err(|e| AssetGenError::DownloadError(format!("invalid base64 payload: {}", e)))
    } else {
        Ok(payload.as_bytes().to_vec())
    }
}
