use crate::core::interfaces::adapters::LookupNotificationSink;
use crate::core::models::{LookupError, MatchResult};

/// Result of one submission. `Ok` may hold an empty list when the service
/// succeeded without finding anyone.
pub type LookupOutcome = Result<Vec<MatchResult>, LookupError>;

/// Hands the outcome to exactly one of the sink's two channels.
pub fn notify(outcome: LookupOutcome, sink: &dyn LookupNotificationSink) {
    match outcome {
        Ok(matches) => sink.on_results_received(matches),
        Err(error) => sink.on_error(error),
    }
}
