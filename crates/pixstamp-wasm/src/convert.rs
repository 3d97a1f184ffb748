//! One-shot conversion WASM bindings.
//!
//! This module exposes the pixstamp-core pipeline to JavaScript for hosts
//! that already hold the upload bytes when their event fires.
//!
//! # Functions
//!
//! - [`convert_image`] - Convert upload bytes to a 60x60 PNG stamp
//! - [`convert_image_with_filter`] - Same, with an explicit resampling filter
//! - [`probe_image`] - Format and dimensions of an upload, without decoding
//! - [`source_data_uri`] - Data URI of the original upload for the preview
//! - [`is_image_mime`] - Clipboard-item filter for the paste surface
//!
//! # Example
//!
//! ```typescript
//! import { convert_image, probe_image, source_data_uri } from '@pixstamp/wasm';
//!
//! const bytes = new Uint8Array(await file.arrayBuffer());
//! const info = probe_image(bytes); // { width, height, format }
//!
//! const stamp = convert_image(bytes, file.name);
//! originalImg.src = source_data_uri(bytes);
//! convertedImg.src = stamp.data_uri();
//! downloadLink.download = stamp.download_name;
//! ```

use pixstamp_core::{decode, encode, Converter, UploadPayload};
use wasm_bindgen::prelude::*;

use crate::types::{filter_from_u8, JsConvertedImage};

pub(crate) fn js_error(err: impl std::fmt::Display) -> JsValue {
    js_sys::Error::new(&err.to_string()).into()
}

fn payload_from(bytes: &[u8], name: Option<String>) -> UploadPayload {
    match name {
        Some(name) => UploadPayload::from_file(name, bytes.to_vec()),
        None => UploadPayload::from_bytes(bytes.to_vec()),
    }
}

/// Convert upload bytes to a 60x60 PNG stamp.
///
/// The format is sniffed from the bytes; PNG, JPEG, GIF, and WebP uploads
/// are all accepted. The source is stretched to fill the square target
/// exactly - aspect ratio is deliberately not preserved.
///
/// # Arguments
///
/// * `bytes` - The raw upload bytes as a `Uint8Array`
/// * `name` - The original file name, or `undefined` for clipboard pastes
///
/// # Returns
///
/// A `JsConvertedImage`, or an error if any pipeline stage fails.
///
/// # Errors
///
/// Returns an error if:
/// - The bytes are empty or not a recognized image format
/// - The image is corrupted or truncated
///
/// # Example
///
/// ```typescript
/// const bytes = new Uint8Array(await file.arrayBuffer());
/// const stamp = convert_image(bytes, file.name);
/// console.log(`${stamp.width}x${stamp.height}, save as ${stamp.download_name}`);
/// ```
#[wasm_bindgen]
pub fn convert_image(bytes: &[u8], name: Option<String>) -> Result<JsConvertedImage, JsValue> {
    let mut converter = Converter::new();
    converter
        .convert(payload_from(bytes, name))
        .map(|converted| JsConvertedImage::from_converted(converted.clone()))
        .map_err(js_error)
}

/// Convert upload bytes to a 60x60 PNG stamp with an explicit filter.
///
/// # Arguments
///
/// * `bytes` - The raw upload bytes as a `Uint8Array`
/// * `name` - The original file name, or `undefined` for clipboard pastes
/// * `filter` - Resize algorithm: 0=Nearest (fastest), 1=Bilinear (default), 2=Lanczos3 (best quality)
///
/// # Errors
///
/// Same failure modes as [`convert_image`].
#[wasm_bindgen]
pub fn convert_image_with_filter(
    bytes: &[u8],
    name: Option<String>,
    filter: u8,
) -> Result<JsConvertedImage, JsValue> {
    let mut converter = Converter::with_filter(filter_from_u8(filter));
    converter
        .convert(payload_from(bytes, name))
        .map(|converted| JsConvertedImage::from_converted(converted.clone()))
        .map_err(js_error)
}

/// Probe upload bytes for their format and dimensions.
///
/// Reads only the image header, so this is cheap to run on every upload
/// before committing to a full conversion.
///
/// # Returns
///
/// A plain object `{ width, height, format }` where `format` is one of
/// `"png"`, `"jpeg"`, `"gif"`, `"webp"`.
///
/// # Errors
///
/// Returns an error if the bytes are empty, unrecognized, or corrupt.
#[wasm_bindgen]
pub fn probe_image(bytes: &[u8]) -> Result<JsValue, JsValue> {
    let info = decode::probe(bytes).map_err(js_error)?;
    serde_wasm_bindgen::to_value(&info).map_err(js_error)
}

/// Build a data URI of the original upload for the preview pane.
///
/// The MIME type comes from the probed format, so the browser renders the
/// bytes in whatever format they arrived in.
///
/// # Errors
///
/// Returns an error if the format cannot be determined.
#[wasm_bindgen]
pub fn source_data_uri(bytes: &[u8]) -> Result<String, JsValue> {
    let info = decode::probe(bytes).map_err(js_error)?;
    Ok(encode::data_uri(bytes, info.format.mime()))
}

/// Check whether a clipboard item's MIME type indicates an image.
///
/// The paste surface uses this to pick the first image item out of a paste
/// event and ignore text/HTML items.
#[wasm_bindgen]
pub fn is_image_mime(mime: &str) -> bool {
    pixstamp_core::is_image_mime(mime)
}


/// WASM-specific tests that require JsValue.
///
/// These tests use functions that return `Result<T, JsValue>` and can only
/// run on wasm32 targets. Use `wasm-pack test` to run these.
#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn test_png(width: u32, height: u32) -> Vec<u8> {
        pixstamp_core::encode::encode_png(
            &vec![128u8; (width * height * 4) as usize],
            width,
            height,
        )
        .unwrap()
    }

    #[wasm_bindgen_test]
    fn test_convert_image_produces_stamp() {
        let bytes = test_png(800, 600);
        let stamp = convert_image(&bytes, Some("photo.png".to_string())).unwrap();

        assert_eq!(stamp.width(), 60);
        assert_eq!(stamp.height(), 60);
        assert_eq!(stamp.download_name(), "photo_60x60.png");
    }

    #[wasm_bindgen_test]
    fn test_convert_image_invalid_bytes() {
        let result = convert_image(&[0, 1, 2, 3], None);
        assert!(result.is_err());
    }

    #[wasm_bindgen_test]
    fn test_convert_image_empty_bytes() {
        let result = convert_image(&[], None);
        assert!(result.is_err());
    }

    #[wasm_bindgen_test]
    fn test_convert_image_with_all_filters() {
        let bytes = test_png(100, 100);

        assert!(convert_image_with_filter(&bytes, None, 0).is_ok()); // Nearest
        assert!(convert_image_with_filter(&bytes, None, 1).is_ok()); // Bilinear
        assert!(convert_image_with_filter(&bytes, None, 2).is_ok()); // Lanczos3
        assert!(convert_image_with_filter(&bytes, None, 99).is_ok()); // Unknown -> Bilinear
    }

    #[wasm_bindgen_test]
    fn test_probe_image_valid() {
        let bytes = test_png(40, 30);
        assert!(probe_image(&bytes).is_ok());
    }

    #[wasm_bindgen_test]
    fn test_probe_image_invalid() {
        assert!(probe_image(b"not an image").is_err());
    }

    #[wasm_bindgen_test]
    fn test_source_data_uri_mime() {
        let bytes = test_png(8, 8);
        let uri = source_data_uri(&bytes).unwrap();
        assert!(uri.starts_with("data:image/png;base64,"));
    }
}
