mod capture_buffer;
mod image_upload;
mod lookup_error;
mod lookup_outcome;
mod lookup_response;
mod match_result;
mod user_settings;

pub use capture_buffer::CaptureBuffer;
pub use image_upload::ImageUpload;
pub use lookup_error::{describe_error_chain, LookupError, LookupErrorKind, SemanticFailure};
pub use lookup_outcome::{notify, LookupOutcome};
pub use lookup_response::{LookupResponse, WireMatch};
pub use match_result::MatchResult;
pub use user_settings::{ClientConfig, ClientSettings};
