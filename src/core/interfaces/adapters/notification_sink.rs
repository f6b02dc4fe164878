use crate::core::models::{LookupError, MatchResult};

/// Receives the outcome of a submission, typically a UI layer.
pub trait LookupNotificationSink: Send + Sync {
    fn on_results_received(&self, matches: Vec<MatchResult>);
    fn on_error(&self, error: LookupError);
}
