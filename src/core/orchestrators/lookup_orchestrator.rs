use std::sync::Arc;

use crate::core::interfaces::adapters::{LookalikeService, LookupNotificationSink};
use crate::core::interfaces::ports::ImageSource;
use crate::core::models::{notify, LookupError, LookupErrorKind, LookupOutcome};

/// Wires one image source, one lookalike service and one sink together.
/// Each call to [`LookupOrchestrator::run_lookup`] is one submission.
pub struct LookupOrchestrator {
    image_source: Arc<dyn ImageSource>,
    lookalike_service: Arc<dyn LookalikeService>,
    notification_sink: Arc<dyn LookupNotificationSink>,
    top_k: u32,
}

impl LookupOrchestrator {
    pub fn build(
        image_source: Arc<dyn ImageSource>,
        lookalike_service: Arc<dyn LookalikeService>,
        notification_sink: Arc<dyn LookupNotificationSink>,
        top_k: u32,
    ) -> Self {
        Self {
            image_source,
            lookalike_service,
            notification_sink,
            top_k,
        }
    }

    /// Returns the error kind the sink was told about, or `None` when it got
    /// results, so the caller can leave any busy state either way.
    pub async fn run_lookup(&self) -> Option<LookupErrorKind> {
        log::info!("[ORCHESTRATOR] Starting lookup (top_k={})", self.top_k);

        let outcome = self.capture_and_submit().await;
        let error_kind = outcome.as_ref().err().map(LookupError::kind);

        match &outcome {
            Ok(matches) => {
                log::info!("[ORCHESTRATOR] Lookup completed with {} matches", matches.len())
            }
            Err(error) => log::error!("[ORCHESTRATOR] Lookup failed: {}", error),
        }

        notify(outcome, self.notification_sink.as_ref());
        error_kind
    }

    async fn capture_and_submit(&self) -> LookupOutcome {
        let upload = self.image_source.capture_image().await.map_err(|error| {
            LookupError::InvalidRequest(format!("Failed to capture image: {:#}", error))
        })?;

        self.lookalike_service
            .find_lookalikes(upload, self.top_k)
            .await
    }
}
