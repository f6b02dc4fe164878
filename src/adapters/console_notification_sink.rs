use crate::core::interfaces::adapters::LookupNotificationSink;
use crate::core::models::{LookupError, MatchResult};

/// Prints outcomes to the terminal.
pub struct ConsoleNotificationSink;

impl ConsoleNotificationSink {
    pub fn new() -> Self {
        Self
    }

    fn format_match_line(rank: usize, result: &MatchResult) -> String {
        format!(
            "{}. {} - {} ({})",
            rank,
            result.display_name(),
            result.similarity_percent_label(),
            result.image_path
        )
    }
}

impl Default for ConsoleNotificationSink {
    fn default() -> Self {
        Self::new()
    }
}

impl LookupNotificationSink for ConsoleNotificationSink {
    fn on_results_received(&self, matches: Vec<MatchResult>) {
        if matches.is_empty() {
            println!("No look-alikes returned.");
            return;
        }

        for (index, result) in matches.iter().enumerate() {
            println!("{}", Self::format_match_line(index + 1, result));
        }
    }

    fn on_error(&self, error: LookupError) {
        eprintln!("[ERROR] {}", error);
    }
}
