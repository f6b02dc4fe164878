use anyhow::{Context, Result};
use async_trait::async_trait;
use std::path::PathBuf;

use crate::core::interfaces::ports::ImageSource;
use crate::core::models::{CaptureBuffer, ImageUpload};

/// Reads the image to submit from disk. JPEG files are uploaded untouched,
/// anything else `image` can decode is handed over as a raw frame.
pub struct FileImageSource {
    image_path: PathBuf,
}

impl FileImageSource {
    pub fn new(image_path: impl Into<PathBuf>) -> Self {
        Self {
            image_path: image_path.into(),
        }
    }

    fn file_name(&self) -> String {
        self.image_path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| crate::global_constants::CAPTURE_FILE_NAME.to_string())
    }
}

#[async_trait]
impl ImageSource for FileImageSource {
    async fn capture_image(&self) -> Result<ImageUpload> {
        log::debug!("[FILE_SOURCE] Reading image from {:?}", self.image_path);

        let image_data = tokio::fs::read(&self.image_path)
            .await
            .with_context(|| format!("Failed to read image file {:?}", self.image_path))?;

        if image_data.is_empty() {
            anyhow::bail!("Image file {:?} is empty", self.image_path);
        }

        let format = image::guess_format(&image_data)
            .with_context(|| format!("Unrecognised image format in {:?}", self.image_path))?;

        if format == image::ImageFormat::Jpeg {
            log::debug!("[FILE_SOURCE] Forwarding JPEG file as-is");
            return Ok(ImageUpload::jpeg(image_data, self.file_name()));
        }

        log::debug!("[FILE_SOURCE] Decoding {:?} image for re-encoding", format);
        let image = image::load_from_memory_with_format(&image_data, format)
            .with_context(|| format!("Failed to decode image {:?}", self.image_path))?;

        Ok(ImageUpload::Raw(CaptureBuffer::from_dynamic_image(&image)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unique_temp_dir(label: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "celebrity-lookalike-source-{}-{}",
            label,
            std::process::id()
        ));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[tokio::test]
    async fn test_jpeg_file_is_forwarded_without_reencoding() {
        let temp_dir = unique_temp_dir("jpeg");
        let path = temp_dir.join("portrait.jpg");
        let jpeg_bytes = CaptureBuffer::build_from_raw_data(2, 2, vec![10u8; 16])
            .unwrap()
            .encode_to_jpeg(90)
            .unwrap();
        std::fs::write(&path, &jpeg_bytes).unwrap();

        let upload = FileImageSource::new(&path).capture_image().await.unwrap();

        match upload {
            ImageUpload::Jpeg { bytes, file_name } => {
                assert_eq!(bytes, jpeg_bytes);
                assert_eq!(file_name, "portrait.jpg");
            }
            ImageUpload::Raw(_) => panic!("expected JPEG upload"),
        }

        std::fs::remove_dir_all(&temp_dir).ok();
    }

    #[tokio::test]
    async fn test_png_file_is_decoded_into_raw_frame() {
        let temp_dir = unique_temp_dir("png");
        let path = temp_dir.join("portrait.png");
        image::DynamicImage::new_rgba8(5, 4).save(&path).unwrap();

        let upload = FileImageSource::new(&path).capture_image().await.unwrap();

        match upload {
            ImageUpload::Raw(buffer) => {
                assert_eq!(buffer.width, 5);
                assert_eq!(buffer.height, 4);
            }
            ImageUpload::Jpeg { .. } => panic!("expected raw upload"),
        }

        std::fs::remove_dir_all(&temp_dir).ok();
    }

    #[tokio::test]
    async fn test_missing_file_is_an_error() {
        let source = FileImageSource::new("/definitely/not/here.jpg");

        let error = source.capture_image().await.unwrap_err();

        assert!(error.to_string().contains("Failed to read image file"));
    }

    #[tokio::test]
    async fn test_empty_file_is_an_error() {
        let temp_dir = unique_temp_dir("empty");
        let path = temp_dir.join("empty.jpg");
        std::fs::write(&path, b"").unwrap();

        let error = FileImageSource::new(&path).capture_image().await.unwrap_err();

        assert!(error.to_string().contains("is empty"));

        std::fs::remove_dir_all(&temp_dir).ok();
    }
}
