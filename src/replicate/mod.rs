pub mod image_client;

use crate::{error::Result, models::GenerationRequest};
use async_trait::async_trait;

pub use image_client::ImageClient;

/// Turns a prompt and its parameters into a locator for the generated image.
#[async_trait]
pub trait ImageGenerator: Send + Sync {
    async fn generate(&self, request: &GenerationRequest) -> Result<String>;
}
