pub const APPLICATION_NAME: &str = "Celebrity Lookalike";
pub const CONFIG_DIRECTORY_NAME: &str = "celebrity-lookalike";
pub const SETTINGS_FILE_NAME: &str = "settings.json";

pub const DEFAULT_API_URL: &str = "http://localhost:5000/api";
pub const UPLOAD_LOOKALIKE_ENDPOINT: &str = "upload_lookalike";
pub const DEFAULT_TOP_K: u32 = 5;

pub const FORM_FIELD_FILE: &str = "file";
pub const FORM_FIELD_TOP_K: &str = "top_k";
pub const UPLOAD_CONTENT_TYPE: &str = "image/jpeg";

pub const CAPTURE_FILE_NAME: &str = "webcam.jpg";
pub const CAPTURE_JPEG_QUALITY: u8 = 100;

pub const SIMILARITY_WIRE_SCALE: f32 = 100.0;

pub const MESSAGE_NO_MATCHES: &str = "No matches found or invalid response";
pub const MESSAGE_EMPTY_IMAGE: &str = "image data is empty";
pub const MESSAGE_INVALID_TOP_K: &str = "top_k must be a positive integer";
