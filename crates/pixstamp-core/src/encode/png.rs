//! PNG encoding and data-URI generation for the converted stamp.
//!
//! This module provides PNG encoding using the `image` crate's PNG encoder.
//! No compression level or color depth configuration is exposed: the product
//! contract is "always PNG, default settings".

use base64::prelude::*;
use image::codecs::png::PngEncoder;
use image::ExtendedColorType;
use image::ImageEncoder;
use std::io::Cursor;
use thiserror::Error;

/// Errors that can occur during PNG encoding.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// Pixel data length doesn't match expected dimensions
    #[error("Invalid pixel data: expected {expected} bytes (width * height * 4), got {actual}")]
    InvalidPixelData { expected: usize, actual: usize },

    /// Width or height is zero
    #[error("Invalid dimensions: width ({width}) and height ({height}) must be non-zero")]
    InvalidDimensions { width: u32, height: u32 },

    /// PNG encoding failed
    #[error("PNG encoding failed: {0}")]
    EncodingFailed(String),
}

/// Encode RGBA pixel data to PNG bytes.
///
/// # Arguments
///
/// * `pixels` - RGBA pixel data (4 bytes per pixel, row-major order)
/// * `width` - Image width in pixels
/// * `height` - Image height in pixels
///
/// # Returns
///
/// PNG-encoded bytes on success, or an error if encoding fails.
///
/// # Example
///
/// ```
/// use pixstamp_core::encode::encode_png;
///
/// let pixels = vec![128u8; 60 * 60 * 4]; // Gray stamp
/// let png = encode_png(&pixels, 60, 60).unwrap();
///
/// // Verify PNG signature
/// assert_eq!(&png[0..4], &[0x89, 0x50, 0x4E, 0x47]);
/// ```
pub fn encode_png(pixels: &[u8], width: u32, height: u32) -> Result<Vec<u8>, EncodeError> {
    // Validate dimensions
    if width == 0 || height == 0 {
        return Err(EncodeError::InvalidDimensions { width, height });
    }

    // Validate pixel data length
    let expected_len = (width as usize) * (height as usize) * 4;
    if pixels.len() != expected_len {
        return Err(EncodeError::InvalidPixelData {
            expected: expected_len,
            actual: pixels.len(),
        });
    }

    // Create output buffer
    let mut buffer = Cursor::new(Vec::new());

    // Encode the image
    let encoder = PngEncoder::new(&mut buffer);
    encoder
        .write_image(pixels, width, height, ExtendedColorType::Rgba8)
        .map_err(|e| EncodeError::EncodingFailed(e.to_string()))?;

    Ok(buffer.into_inner())
}

/// Wrap PNG bytes in a `data:image/png;base64,...` URI.
///
/// The result is self-contained: it works as an `<img>` source for the
/// preview pane and as the `href` of a download link.
pub fn png_data_uri(png: &[u8]) -> String {
    format!("data:image/png;base64,{}", BASE64_STANDARD.encode(png))
}

/// Wrap arbitrary image bytes in a data URI with an explicit MIME type.
///
/// Used for the original-image preview, where the upload keeps whatever
/// format it arrived in.
pub fn data_uri(bytes: &[u8], mime: &str) -> String {
    format!("data:{};base64,{}", mime, BASE64_STANDARD.encode(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_SIGNATURE: [u8; 8] = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

    #[test]
    fn test_encode_png_basic() {
        let width = 60;
        let height = 60;
        let pixels = vec![128u8; width * height * 4];

        let result = encode_png(&pixels, width as u32, height as u32);
        assert!(result.is_ok());

        let png = result.unwrap();
        assert_eq!(&png[0..8], &PNG_SIGNATURE);
    }

    #[test]
    fn test_encode_png_re_decodes() {
        let pixels = vec![64u8; 60 * 60 * 4];
        let png = encode_png(&pixels, 60, 60).unwrap();

        let decoded = image::load_from_memory(&png).unwrap();
        assert_eq!(decoded.width(), 60);
        assert_eq!(decoded.height(), 60);
    }

    #[test]
    fn test_encode_png_invalid_pixel_data_short() {
        let pixels = vec![128u8; 59 * 60 * 4]; // One row short

        let result = encode_png(&pixels, 60, 60);
        assert!(matches!(result, Err(EncodeError::InvalidPixelData { .. })));
    }

    #[test]
    fn test_encode_png_invalid_pixel_data_long() {
        let pixels = vec![128u8; 61 * 60 * 4]; // One row extra

        let result = encode_png(&pixels, 60, 60);
        assert!(matches!(result, Err(EncodeError::InvalidPixelData { .. })));
    }

    #[test]
    fn test_encode_png_zero_width() {
        let result = encode_png(&[], 0, 60);
        assert!(matches!(result, Err(EncodeError::InvalidDimensions { .. })));
    }

    #[test]
    fn test_encode_png_zero_height() {
        let result = encode_png(&[], 60, 0);
        assert!(matches!(result, Err(EncodeError::InvalidDimensions { .. })));
    }

    #[test]
    fn test_encode_png_single_pixel() {
        let pixels = vec![255, 0, 0, 255]; // Opaque red pixel

        let png = encode_png(&pixels, 1, 1).unwrap();
        assert_eq!(&png[0..8], &PNG_SIGNATURE);
    }

    #[test]
    fn test_encode_png_preserves_transparency() {
        let pixels = vec![0u8, 0, 0, 0]; // Fully transparent pixel
        let png = encode_png(&pixels, 1, 1).unwrap();

        let decoded = image::load_from_memory(&png).unwrap().into_rgba8();
        assert_eq!(decoded.get_pixel(0, 0).0[3], 0);
    }

    #[test]
    fn test_png_data_uri_prefix() {
        let pixels = vec![128u8; 4 * 4 * 4];
        let png = encode_png(&pixels, 4, 4).unwrap();

        let uri = png_data_uri(&png);
        assert!(uri.starts_with("data:image/png;base64,"));
    }

    #[test]
    fn test_png_data_uri_round_trips() {
        let pixels = vec![128u8; 4 * 4 * 4];
        let png = encode_png(&pixels, 4, 4).unwrap();

        let uri = png_data_uri(&png);
        let payload = uri.strip_prefix("data:image/png;base64,").unwrap();
        assert_eq!(BASE64_STANDARD.decode(payload).unwrap(), png);
    }

    #[test]
    fn test_data_uri_custom_mime() {
        let uri = data_uri(&[0xFF, 0xD8], "image/jpeg");
        assert!(uri.starts_with("data:image/jpeg;base64,"));
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================
