//! Byte-level image decoding for any supported container format.

use std::io::Cursor;

use image::ImageReader;

use super::{Bitmap, DecodeError};

/// Decode an image from raw file bytes.
///
/// The container format is sniffed from the bytes themselves, so PNG, JPEG,
/// GIF, and WebP uploads all go through the same entry point. Animated
/// formats decode to their first frame.
///
/// # Arguments
///
/// * `bytes` - Raw image file bytes, exactly as read from the upload
///
/// # Returns
///
/// A `Bitmap` with RGBA pixel data.
///
/// # Errors
///
/// Returns `DecodeError::EmptyInput` if `bytes` is empty.
/// Returns `DecodeError::UnsupportedFormat` if no known container is detected.
/// Returns `DecodeError::CorruptedFile` if the container is recognized but the
/// payload cannot be decoded.
pub fn decode(bytes: &[u8]) -> Result<Bitmap, DecodeError> {
    if bytes.is_empty() {
        return Err(DecodeError::EmptyInput);
    }

    let reader = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| DecodeError::CorruptedFile(e.to_string()))?;

    if reader.format().is_none() {
        return Err(DecodeError::UnsupportedFormat);
    }

    let img = reader
        .decode()
        .map_err(|e| DecodeError::CorruptedFile(e.to_string()))?;

    // Normalize every input to RGBA8 so the rest of the pipeline has a
    // single pixel layout to deal with
    let rgba_img = img.into_rgba8();
    Ok(Bitmap::from_rgba_image(rgba_img))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::codecs::png::PngEncoder;
    use image::{ExtendedColorType, ImageEncoder};

    fn encode_test_png(width: u32, height: u32) -> Vec<u8> {
        let pixels = vec![200u8; (width * height * 4) as usize];
        let mut buffer = Vec::new();
        PngEncoder::new(&mut buffer)
            .write_image(&pixels, width, height, ExtendedColorType::Rgba8)
            .unwrap();
        buffer
    }

    #[test]
    fn test_decode_png() {
        let bytes = encode_test_png(16, 9);
        let bitmap = decode(&bytes).unwrap();

        assert_eq!(bitmap.width, 16);
        assert_eq!(bitmap.height, 9);
        assert_eq!(bitmap.pixels.len(), 16 * 9 * 4);
    }

    #[test]
    fn test_decode_empty_input() {
        assert!(matches!(decode(&[]), Err(DecodeError::EmptyInput)));
    }

    #[test]
    fn test_decode_unrecognized_bytes() {
        // Plain text is not any image container
        let result = decode(b"hello, not an image");
        assert!(matches!(result, Err(DecodeError::UnsupportedFormat)));
    }

    #[test]
    fn test_decode_truncated_png() {
        let mut bytes = encode_test_png(16, 16);
        bytes.truncate(bytes.len() / 2);

        let result = decode(&bytes);
        assert!(matches!(result, Err(DecodeError::CorruptedFile(_))));
    }

    #[test]
    fn test_decode_corrupt_body_with_valid_header() {
        // Valid PNG signature followed by garbage - the ".png with garbage
        // inside" upload case
        let mut bytes = vec![0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];
        bytes.extend_from_slice(&[0xAB; 64]);

        let result = decode(&bytes);
        assert!(matches!(result, Err(DecodeError::CorruptedFile(_))));
    }

    #[test]
    fn test_decode_preserves_pixel_values() {
        // 1x1 PNG with a known RGBA value
        let pixels = vec![12u8, 34, 56, 255];
        let mut buffer = Vec::new();
        PngEncoder::new(&mut buffer)
            .write_image(&pixels, 1, 1, ExtendedColorType::Rgba8)
            .unwrap();

        let bitmap = decode(&buffer).unwrap();
        assert_eq!(bitmap.pixels, pixels);
    }
}
