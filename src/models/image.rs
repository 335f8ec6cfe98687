use crate::models::{AspectRatio, OutputFormat};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Input sent to the generation service for one asset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub prompt: String,
    pub aspect_ratio: AspectRatio,
    pub output_format: OutputFormat,
    pub safety_tolerance: u8,
}

#[derive(Debug, Serialize)]
pub struct PredictionInput<'a> {
    pub input: &'a GenerationRequest,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PredictionStatus {
    Starting,
    Processing,
    Succeeded,
    Failed,
    Canceled,
    #[serde(other)]
    Unknown,
}

impl PredictionStatus {
    pub fn is_pending(&self) -> bool {
        matches!(self, PredictionStatus::Starting | PredictionStatus::Processing)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PredictionUrls {
    pub get: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Prediction {
    pub id: Option<String>,
    pub status: PredictionStatus,
    #[serde(default)]
    pub output: Option<Value>,
    #[serde(default)]
    pub error: Option<Value>,
    #[serde(default)]
    pub urls: Option<PredictionUrls>,
}

impl Prediction {
    /// First image locator found in `output`.
    pub fn locator(&self) -> Option<String> {
        self.output.as_ref().and_then(first_locator)
    }

    pub fn poll_url(&self) -> Option<&str> {
        self.urls
            .as_ref()
            .and_then(|urls| urls.get.as_deref())
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }

    pub fn error_message(&self) -> String {
        match &self.error {
            Some(Value::String(msg)) => msg.clone(),
            Some(Value::Null) | None => format!("prediction ended with status {:?}", self.status),
            Some(other) => other.to_string(),
        }
    }
}

fn first_locator(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => {
            let trimmed = s.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        }
        Value::Array(items) => items.iter().find_map(first_locator),
        Value::Object(obj) => obj.get("url").and_then(first_locator),
        _ => None,
    }
}
