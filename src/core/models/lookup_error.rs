use thiserror::Error;

use crate::global_constants;

/// Why a well-formed response still carried no usable matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SemanticFailure {
    /// The service answered with `"success": false`.
    ServiceReportedFailure,
    /// `"success": true` but `results` was absent or null.
    MissingResults,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupErrorKind {
    InvalidRequest,
    Transport,
    Decode,
    Semantic,
}

/// Failure outcome of a single submission.
///
/// Both semantic failures render the same user-facing message so callers that
/// only display `to_string()` get one stable message for both.
/// Code that needs to tell them apart matches on [`SemanticFailure`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LookupError {
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("{0}")]
    Transport(String),

    #[error("Error parsing response: {0}")]
    Decode(String),

    #[error("{}", global_constants::MESSAGE_NO_MATCHES)]
    Semantic(SemanticFailure),
}

impl LookupError {
    pub fn kind(&self) -> LookupErrorKind {
        match self {
            LookupError::InvalidRequest(_) => LookupErrorKind::InvalidRequest,
            LookupError::Transport(_) => LookupErrorKind::Transport,
            LookupError::Decode(_) => LookupErrorKind::Decode,
            LookupError::Semantic(_) => LookupErrorKind::Semantic,
        }
    }
}

/// Joins an error and every `source()` below it with `": "`.
pub fn describe_error_chain(error: &dyn std::error::Error) -> String {
    let mut description = error.to_string();
    let mut source = error.source();

    while let Some(cause) = source {
        let cause_text = cause.to_string();
        if !description.ends_with(&cause_text) {
            description.push_str(": ");
            description.push_str(&cause_text);
        }
        source = cause.source();
    }

    description
}

impl From<reqwest::Error> for LookupError {
    fn from(error: reqwest::Error) -> Self {
        LookupError::Transport(describe_error_chain(&error))
    }
}

impl From<serde_json::Error> for LookupError {
    fn from(error: serde_json::Error) -> Self {
        LookupError::Decode(error.to_string())
    }
}
