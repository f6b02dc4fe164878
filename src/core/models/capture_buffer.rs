use anyhow::{Context, Result};
use image::codecs::jpeg::JpegEncoder;
use image::{DynamicImage, RgbaImage};

/// A raw RGBA frame held in memory, e.g. a webcam capture.
#[derive(Clone)]
pub struct CaptureBuffer {
    pub width: u32,
    pub height: u32,
    raw_data: Vec<u8>,
}

impl std::fmt::Debug for CaptureBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CaptureBuffer")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish()
    }
}

impl CaptureBuffer {
    pub fn build_from_raw_data(
        width_pixels: u32,
        height_pixels: u32,
        raw_rgba_data: Vec<u8>,
    ) -> Result<Self> {
        if width_pixels == 0 || height_pixels == 0 {
            anyhow::bail!("Capture dimensions must be greater than zero");
        }

        let expected_len = (width_pixels as usize)
            .checked_mul(height_pixels as usize)
            .and_then(|pixels| pixels.checked_mul(4))
            .ok_or_else(|| {
                anyhow::anyhow!(
                    "Capture dimensions {}x{} are too large",
                    width_pixels,
                    height_pixels
                )
            })?;
        if raw_rgba_data.len() != expected_len {
            anyhow::bail!(
                "RGBA buffer has {} bytes, expected {} for {}x{}",
                raw_rgba_data.len(),
                expected_len,
                width_pixels,
                height_pixels
            );
        }

        log::debug!(
            "[CAPTURE_BUFFER] building buffer: {}x{}",
            width_pixels,
            height_pixels
        );

        Ok(Self {
            width: width_pixels,
            height: height_pixels,
            raw_data: raw_rgba_data,
        })
    }

    pub fn from_dynamic_image(image: &DynamicImage) -> Result<Self> {
        let rgba = image.to_rgba8();
        let (width, height) = rgba.dimensions();
        Self::build_from_raw_data(width, height, rgba.into_raw())
    }

    /// JPEG has no alpha channel; it is dropped before encoding.
    pub fn encode_to_jpeg(&self, quality: u8) -> Result<Vec<u8>> {
        let rgba = RgbaImage::from_raw(self.width, self.height, self.raw_data.clone())
            .ok_or_else(|| anyhow::anyhow!("Failed to create image from raw data"))?;
        let rgb = DynamicImage::ImageRgba8(rgba).to_rgb8();

        let mut jpeg_bytes = Vec::new();
        let encoder = JpegEncoder::new_with_quality(&mut jpeg_bytes, quality);
        DynamicImage::ImageRgb8(rgb)
            .write_with_encoder(encoder)
            .context("Failed to encode capture as JPEG")?;

        log::debug!(
            "[CAPTURE_BUFFER] encoded {}x{} capture to {} JPEG bytes at quality {}",
            self.width,
            self.height,
            jpeg_bytes.len(),
            quality
        );

        Ok(jpeg_bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_buffer() -> CaptureBuffer {
        let raw_data = vec![200u8; 16 * 8 * 4];
        CaptureBuffer::build_from_raw_data(16, 8, raw_data).unwrap()
    }

    #[test]
    fn test_build_from_raw_data_rejects_mismatched_length() {
        let result = CaptureBuffer::build_from_raw_data(10, 10, vec![0u8; 10]);

        assert!(result.is_err());
    }

    #[test]
    fn test_build_from_raw_data_rejects_zero_dimensions() {
        assert!(CaptureBuffer::build_from_raw_data(0, 4, vec![]).is_err());
        assert!(CaptureBuffer::build_from_raw_data(4, 0, vec![]).is_err());
    }

    #[test]
    fn test_build_from_raw_data_rejects_overflowing_dimensions() {
        let error = CaptureBuffer::build_from_raw_data(u32::MAX, u32::MAX, vec![0u8; 4]).unwrap_err();

        assert!(error.to_string().contains("too large"));
    }

    #[test]
    fn test_encode_to_jpeg_produces_decodable_jpeg() {
        let buffer = create_test_buffer();

        let jpeg_bytes = buffer.encode_to_jpeg(100).unwrap();

        assert_eq!(&jpeg_bytes[..3], &[0xFF, 0xD8, 0xFF]);
        let decoded = image::load_from_memory_with_format(&jpeg_bytes, image::ImageFormat::Jpeg)
            .unwrap();
        assert_eq!(decoded.width(), 16);
        assert_eq!(decoded.height(), 8);
    }

    #[test]
    fn test_from_dynamic_image_keeps_dimensions() {
        let image = DynamicImage::new_rgb8(7, 3);

        let buffer = CaptureBuffer::from_dynamic_image(&image).unwrap();

        assert_eq!(buffer.width, 7);
        assert_eq!(buffer.height, 3);
    }

    #[test]
    fn test_debug_output_omits_pixel_data() {
        let debug_str = format!("{:?}", create_test_buffer());

        assert!(debug_str.contains("width: 16"));
        assert!(!debug_str.contains("raw_data"));
    }
}
