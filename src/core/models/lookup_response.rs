use serde::Deserialize;

use crate::core::models::{LookupError, MatchResult, SemanticFailure};

/// One raw match record as sent by the service.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct WireMatch {
    pub name: String,
    pub similarity: f32,
    pub image_path: String,
}

/// Decoded `/upload_lookalike` response body.
///
/// `success` must be present and boolean. `results` may be absent or null,
/// which is reported as a semantic failure rather than a decode failure.
/// Diagnostic fields are kept as raw JSON and never interpreted here.
#[derive(Debug, Clone, Deserialize)]
pub struct LookupResponse {
    pub success: bool,
    #[serde(default)]
    pub results: Option<Vec<WireMatch>>,
    #[serde(default)]
    pub search_time: Option<serde_json::Value>,
    #[serde(default)]
    pub face_detected: Option<serde_json::Value>,
}

impl LookupResponse {
    pub fn parse(body: &str) -> Result<Self, LookupError> {
        let response: LookupResponse = serde_json::from_str(body)?;
        Ok(response)
    }

    pub fn search_time_seconds(&self) -> Option<f64> {
        self.search_time.as_ref().and_then(|value| value.as_f64())
    }

    pub fn into_matches(self) -> Result<Vec<MatchResult>, LookupError> {
        if !self.success {
            return Err(LookupError::Semantic(SemanticFailure::ServiceReportedFailure));
        }

        let records = self
            .results
            .ok_or(LookupError::Semantic(SemanticFailure::MissingResults))?;

        let matches = records
            .into_iter()
            .enumerate()
            .filter_map(|(position, record)| {
                if record.name.trim().is_empty() {
                    log::warn!(
                        "[LOOKUP_RESPONSE] Skipping match record {} with an empty name",
                        position
                    );
                    return None;
                }
                Some(MatchResult::from_wire(record))
            })
            .collect();

        Ok(matches)
    }
}
