use crate::{
    config::ReplicateConfig,
    error::{AssetGenError, Result},
    models::{GenerationRequest, Prediction, PredictionInput, PredictionStatus},
    replicate::ImageGenerator,
};
use async_trait::async_trait;
use reqwest::{Client, Response};
use std::time::Instant;

const ERROR_BODY_LIMIT: usize = 512;

#[derive(Clone)]
pub struct ImageClient {
    client: Client,
    config: ReplicateConfig,
    token: String,
}

impl ImageClient {
    pub fn new(config: ReplicateConfig) -> Result<Self> {
        let token = config
            .api_token
            .clone()
            .ok_or_else(|| AssetGenError::ConfigError("REPLICATE_API_TOKEN is required".into()))?;

        Ok(Self {
            client: Client::new(),
            config,
            token,
        })
    }

    pub fn supported_models() -> Vec<(&'static str, &'static str, &'static str)> {
        vec![
            ("black-forest-labs/flux-1.1-pro", "FLUX1.1 [pro]", "Black Forest Labs"),
            ("black-forest-labs/flux-pro", "FLUX.1 [pro]", "Black Forest Labs"),
            ("black-forest-labs/flux-schnell", "FLUX.1 [schnell]", "Black Forest Labs"),
        ]
    }

    pub fn model(&self) -> &str {
        &self.config.model
    }

    fn predictions_endpoint(&self) -> String {
        format!("{}/models/{}/predictions", self.config.api_base, self.config.model)
    }

    async fn create_prediction(&self, request: &GenerationRequest) -> Result<Prediction> {
        let response = self
            .client
            .post(self.predictions_endpoint())
            .bearer_auth(&self.token)
            .header("Prefer", "wait")
            .json(&PredictionInput { input: request })
            .send()
            .await
            .map_err(|e| AssetGenError::RequestError(format!("Replicate request failed: {}", e)))?;

        read_prediction(response).await
    }

    async fn wait_for(&self, mut prediction: Prediction) -> Result<Prediction> {
        let started = Instant::now();

        while prediction.status.is_pending() {
            if started.elapsed() >= self.config.poll_timeout {
                return Err(AssetGenError::PredictionFailed(format!(
                    "polling timed out after {}s",
                    self.config.poll_timeout.as_secs()
                )));
            }

            let poll_url = prediction
                .poll_url()
                .ok_or_else(|| {
                    AssetGenError::ResponseError("Replicate prediction missing poll URL".into())
                })?
                .to_string();

            log::debug!(
                "Prediction {} is {:?}, polling again",
                prediction.id.as_deref().unwrap_or("?"),
                prediction.status
            );
            tokio::time::sleep(self.config.poll_interval).await;

            let response = self
                .client
                .get(&poll_url)
                .bearer_auth(&self.token)
                .send()
                .await
                .map_err(|e| {
                    AssetGenError::RequestError(format!("Replicate poll request failed: {}", e))
                })?;
            prediction = read_prediction(response).await?;
        }

        Ok(prediction)
    }
}

#[async_trait]
impl ImageGenerator for ImageClient {
    async fn generate(&self, request: &GenerationRequest) -> Result<String> {
        log::info!("Generating image with model: {}", self.config.model);

        let prediction = self.create_prediction(request).await?;
        let prediction = self.wait_for(prediction).await?;

        match prediction.status {
            PredictionStatus::Succeeded => prediction.locator().ok_or_else(|| {
                AssetGenError::ResponseError("Replicate response returned no image URL".into())
            }),
            _ => Err(AssetGenError::PredictionFailed(prediction.error_message())),
        }
    }
}

async fn read_prediction(response: Response) -> Result<Prediction> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(AssetGenError::RequestError(format!(
            "Replicate returned {}: {}",
            status,
            truncate(&body, ERROR_BODY_LIMIT)
        )));
    }

    let body = response.text().await?;
    serde_json::from_str(&body).map_err(|e| AssetGenError::ResponseError(e.to_string()))
}

fn truncate(text: &str, limit: usize) -> &str {
    match text.char_indices().nth(limit) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AspectRatio, OutputFormat};
    use crate::test_support::StubServer;
    use std::time::Duration;

    fn request() -> GenerationRequest {
        GenerationRequest {
            prompt: "glass card".into(),
            aspect_ratio: AspectRatio::Tall,
            output_format: OutputFormat::Png,
            safety_tolerance: 5,
        }
    }

    fn client_for(base: &str) -> ImageClient {
        let config = ReplicateConfig::new()
            .with_token("r8_test")
            .with_api_base(base)
            .with_polling(Duration::from_millis(10), Duration::from_secs(5));
        ImageClient::new(config).unwrap()
    }

    #[test]
    fn test_missing_token_is_config_error() {
        let err = ImageClient::new(ReplicateConfig::new()).err().unwrap();
        assert!(matches!(err, AssetGenError::ConfigError(_)));
    }

    #[test]
    fn test_predictions_endpoint() {
        let client = client_for("https://api.replicate.com/v1");
        assert_eq!(
            client.predictions_endpoint(),
            "https://api.replicate.com/v1/models/black-forest-labs/flux-1.1-pro/predictions"
        );
    }

    #[test]
    fn test_truncate_on_char_boundary() {
        assert_eq!(truncate("héllo", 2), "hé");
        assert_eq!(truncate("ok", 10), "ok");
    }

    #[tokio::test]
    async fn test_sync_prediction_returns_locator() {
        let server = StubServer::bind().await;
        let requests = server.serve(vec![(
            201,
            br#"{"id":"p1","status":"succeeded","output":"https://replicate.delivery/p1.png"}"#
                .to_vec(),
        )]);
        let client = client_for(&server.base);

        let locator = client.generate(&request()).await.unwrap();
        assert_eq!(locator, "https://replicate.delivery/p1.png");

        let seen = requests.lock().unwrap();
        assert_eq!(seen.len(), 1);
        let raw = seen[0].to_lowercase();
        assert!(raw.starts_with("post /models/black-forest-labs/flux-1.1-pro/predictions"));
        assert!(raw.contains("authorization: bearer r8_test"));
        assert!(raw.contains("prefer: wait"));
        assert!(seen[0].contains(r#""aspect_ratio":"9:16""#));
        assert!(seen[0].contains(r#""safety_tolerance":5"#));
        assert!(seen[0].contains(r#""output_format":"png""#));
    }

    #[tokio::test]
    async fn test_pending_prediction_is_polled() {
        let server = StubServer::bind().await;
        let pending = format!(
            r#"{{"id":"p2","status":"processing","urls":{{"get":"{}/predictions/p2"}}}}"#,
            server.base
        );
        let requests = server.serve(vec![
            (201, pending.clone().into_bytes()),
            (200, pending.into_bytes()),
            (
                200,
                br#"{"id":"p2","status":"succeeded","output":["https://replicate.delivery/p2.png"]}"#
                    .to_vec(),
            ),
        ]);
        let client = client_for(&server.base);

        let locator = client.generate(&request()).await.unwrap();
        assert_eq!(locator, "https://replicate.delivery/p2.png");

        let seen = requests.lock().unwrap();
        assert_eq!(seen.len(), 3);
        assert!(seen[1].starts_with("GET /predictions/p2"));
        assert!(seen[2].starts_with("GET /predictions/p2"));
    }

    #[tokio::test]
    async fn test_failed_prediction_carries_error() {
        let server = StubServer::bind().await;
        server.serve(vec![(
            201,
            br#"{"id":"p3","status":"failed","error":"NSFW content detected"}"#.to_vec(),
        )]);
        let client = client_for(&server.base);

        let err = client.generate(&request()).await.unwrap_err();
        assert!(matches!(err, AssetGenError::PredictionFailed(_)));
        assert!(err.to_string().contains("NSFW content detected"));
    }

    #[tokio::test]
    async fn test_http_error_status() {
        let server = StubServer::bind().await;
        server.serve(vec![(429, br#"{"detail":"Request was throttled"}"#.to_vec())]);
        let client = client_for(&server.base);

        let err = client.generate(&request()).await.unwrap_err();
        assert!(matches!(err, AssetGenError::RequestError(_)));
        assert!(err.to_string().contains("429"));
        assert!(err.to_string().contains("throttled"));
    }

    #[tokio::test]
    async fn test_success_without_output_is_response_error() {
        let server = StubServer::bind().await;
        server.serve(vec![(201, br#"{"id":"p4","status":"succeeded","output":null}"#.to_vec())]);
        let client = client_for(&server.base);

        let err = client.generate(&request()).await.unwrap_err();
        assert!(matches!(err, AssetGenError::ResponseError(_)));
    }
}
