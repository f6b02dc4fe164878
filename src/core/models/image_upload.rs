use crate::core::models::CaptureBuffer;

/// What an image source hands to the client: either an already-encoded JPEG
/// or a raw frame that still needs encoding.
#[derive(Debug, Clone)]
pub enum ImageUpload {
    Jpeg { bytes: Vec<u8>, file_name: String },
    Raw(CaptureBuffer),
}

impl ImageUpload {
    pub fn jpeg(bytes: Vec<u8>, file_name: impl Into<String>) -> Self {
        ImageUpload::Jpeg {
            bytes,
            file_name: file_name.into(),
        }
    }
}
