use async_trait::async_trait;

use crate::core::models::{ImageUpload, LookupOutcome};

#[async_trait]
pub trait LookalikeService: Send + Sync {
    async fn find_lookalikes(&self, upload: ImageUpload, top_k: u32) -> LookupOutcome;
}
