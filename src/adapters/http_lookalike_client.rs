use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use std::sync::Arc;
use tokio::task::JoinHandle;

use crate::core::interfaces::adapters::{LookalikeService, LookupNotificationSink};
use crate::core::models::{
    notify, CaptureBuffer, ClientConfig, ImageUpload, LookupError, LookupErrorKind, LookupOutcome,
    LookupResponse,
};
use crate::global_constants;

/// HTTP client for the look-alike recognition service.
///
/// Holds nothing but its configuration and a connection pool, so one instance
/// can serve any number of submissions. Each submission is a single multipart
/// POST with no retry and no timeout beyond reqwest's defaults. When
/// submissions overlap, the order in which their outcomes arrive is undefined.
pub struct LookalikeClient {
    http_client: reqwest::Client,
    config: ClientConfig,
}

impl LookalikeClient {
    pub fn new(config: ClientConfig) -> Self {
        log::debug!("[LOOKALIKE_CLIENT] Using API at {}", config.base_url);

        Self {
            http_client: reqwest::Client::new(),
            config,
        }
    }

    fn upload_url(&self) -> String {
        format!(
            "{}/{}",
            self.config.base_url.trim_end_matches('/'),
            global_constants::UPLOAD_LOOKALIKE_ENDPOINT
        )
    }

    /// Uploads an already JPEG-encoded image and returns the ranked matches.
    pub async fn submit(&self, image_bytes: Vec<u8>, file_name: &str, top_k: u32) -> LookupOutcome {
        if image_bytes.is_empty() {
            return Err(LookupError::InvalidRequest(
                global_constants::MESSAGE_EMPTY_IMAGE.to_string(),
            ));
        }
        if top_k == 0 {
            return Err(LookupError::InvalidRequest(
                global_constants::MESSAGE_INVALID_TOP_K.to_string(),
            ));
        }

        let body = match self.upload_image(image_bytes, file_name, top_k).await {
            Ok(body) => body,
            Err(error) => {
                log::error!("[LOOKALIKE_CLIENT] API Error: {}", error);
                return Err(error);
            }
        };

        if self.config.log_responses {
            log::info!("[LOOKALIKE_CLIENT] API Response: {}", body);
        }

        let outcome = LookupResponse::parse(&body).and_then(|response| {
            if let Some(search_time) = response.search_time_seconds() {
                log::debug!("[LOOKALIKE_CLIENT] Service search took {:.3}s", search_time);
            }
            response.into_matches()
        });

        match &outcome {
            Ok(matches) => {
                log::info!("[LOOKALIKE_CLIENT] Received {} matches", matches.len());
            }
            Err(error) if error.kind() == LookupErrorKind::Decode => {
                log::error!("[LOOKALIKE_CLIENT] {}", error);
            }
            Err(error) => {
                log::warn!("[LOOKALIKE_CLIENT] {:?}: {}", error.kind(), error);
            }
        }

        outcome
    }

    /// Encodes a raw frame as a maximum-quality JPEG, then submits it.
    pub async fn submit_capture(&self, buffer: &CaptureBuffer, top_k: u32) -> LookupOutcome {
        let image_bytes = buffer
            .encode_to_jpeg(global_constants::CAPTURE_JPEG_QUALITY)
            .map_err(|error| LookupError::InvalidRequest(error.to_string()))?;

        self.submit(image_bytes, global_constants::CAPTURE_FILE_NAME, top_k)
            .await
    }

    /// Fire-and-forget submission. The sink is told about the outcome exactly
    /// once, from the spawned task.
    pub fn spawn_submit(
        self: &Arc<Self>,
        upload: ImageUpload,
        top_k: u32,
        sink: Arc<dyn LookupNotificationSink>,
    ) -> JoinHandle<()> {
        let client = Arc::clone(self);

        tokio::spawn(async move {
            let outcome = client.find_lookalikes(upload, top_k).await;
            notify(outcome, sink.as_ref());
        })
    }

    async fn upload_image(
        &self,
        image_bytes: Vec<u8>,
        file_name: &str,
        top_k: u32,
    ) -> Result<String, LookupError> {
        let upload_url = self.upload_url();
        log::info!(
            "[LOOKALIKE_CLIENT] Uploading {} bytes to {} (top_k={})",
            image_bytes.len(),
            upload_url,
            top_k
        );

        let file_part = Part::bytes(image_bytes)
            .file_name(file_name.to_string())
            .mime_str(global_constants::UPLOAD_CONTENT_TYPE)?;
        let form = Form::new()
            .part(global_constants::FORM_FIELD_FILE, file_part)
            .text(global_constants::FORM_FIELD_TOP_K, top_k.to_string());

        let response = self
            .http_client
            .post(&upload_url)
            .multipart(form)
            .send()
            .await?
            .error_for_status()?;

        let body = response.text().await?;
        Ok(body)
    }
}

#[async_trait]
impl LookalikeService for LookalikeClient {
    async fn find_lookalikes(&self, upload: ImageUpload, top_k: u32) -> LookupOutcome {
        match upload {
            ImageUpload::Jpeg { bytes, file_name } => self.submit(bytes, &file_name, top_k).await,
            ImageUpload::Raw(buffer) => self.submit_capture(&buffer, top_k).await,
        }
    }
}
