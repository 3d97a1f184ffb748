//! Lightweight format and dimension probing for the original-image preview.

use std::io::Cursor;

use image::{ImageFormat, ImageReader};
use serde::{Deserialize, Serialize};

use super::DecodeError;

/// Container format of a source image.
///
/// Only formats the enabled codecs can actually decode are represented;
/// anything else is rejected at probe time rather than failing mid-pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceFormat {
    Png,
    Jpeg,
    Gif,
    WebP,
}

impl SourceFormat {
    /// MIME type for this format, as used in data URIs and clipboard items.
    pub fn mime(self) -> &'static str {
        match self {
            SourceFormat::Png => "image/png",
            SourceFormat::Jpeg => "image/jpeg",
            SourceFormat::Gif => "image/gif",
            SourceFormat::WebP => "image/webp",
        }
    }

    fn from_image_format(format: ImageFormat) -> Option<Self> {
        match format {
            ImageFormat::Png => Some(SourceFormat::Png),
            ImageFormat::Jpeg => Some(SourceFormat::Jpeg),
            ImageFormat::Gif => Some(SourceFormat::Gif),
            ImageFormat::WebP => Some(SourceFormat::WebP),
            _ => None,
        }
    }
}

/// Format and dimensions of a source image, extracted without a full decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceInfo {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// Detected container format.
    pub format: SourceFormat,
}

/// Probe raw bytes for their format and pixel dimensions.
///
/// Reads only the image header, so this is cheap enough to run on every
/// upload before committing to a full decode.
///
/// # Errors
///
/// Returns `DecodeError::EmptyInput` if `bytes` is empty.
/// Returns `DecodeError::UnsupportedFormat` if the format is unrecognized or
/// not one of the enabled codecs.
/// Returns `DecodeError::CorruptedFile` if the header cannot be parsed.
pub fn probe(bytes: &[u8]) -> Result<SourceInfo, DecodeError> {
    if bytes.is_empty() {
        return Err(DecodeError::EmptyInput);
    }

    let reader = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| DecodeError::CorruptedFile(e.to_string()))?;

    let format = reader
        .format()
        .and_then(SourceFormat::from_image_format)
        .ok_or(DecodeError::UnsupportedFormat)?;

    let (width, height) = reader
        .into_dimensions()
        .map_err(|e| DecodeError::CorruptedFile(e.to_string()))?;

    Ok(SourceInfo {
        width,
        height,
        format,
    })
}
