use thiserror::Error;

#[derive(Debug, Error)]
pub enum AssetGenError {
    #[error("Configuration error: {0}")]
    ConfigError(String),
    #[error("Request error: {0}")]
    RequestError(String),
    #[error("Response error: {0}")]
    ResponseError(String),
    #[error("Prediction failed: {0}")]
    PredictionFailed(String),
    #[error("Download error: {0}")]
    DownloadError(String),
    #[error("Validation error: {0}")]
    ValidationError(String),
    #[error("Serialization error: {0}")]
    SerializationError(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<reqwest::Error> for AssetGenError {
    fn from(err: reqwest::Error) -> Self {
        AssetGenError::RequestError(err.to_string())
    }
}

impl From<serde_json::Error> for AssetGenError {
    fn from(err: serde_json::Error) -> Self {
        AssetGenError::SerializationError(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AssetGenError>;
