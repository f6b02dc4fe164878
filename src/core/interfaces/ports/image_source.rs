use anyhow::Result;
use async_trait::async_trait;

use crate::core::models::ImageUpload;

#[async_trait]
pub trait ImageSource: Send + Sync {
    async fn capture_image(&self) -> Result<ImageUpload>;
}
