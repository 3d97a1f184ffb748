//! WASM-compatible wrapper types for converted images.
//!
//! This module provides JavaScript-friendly types that wrap the core Pixstamp
//! types, handling the conversion between Rust and JavaScript data
//! representations.

use pixstamp_core::{ConvertedImage, FilterType};
use wasm_bindgen::prelude::*;

/// A converted 60x60 PNG stamp, wrapped for JavaScript.
///
/// The PNG payload is stored in WASM memory. `png_bytes()` copies it out as a
/// `Uint8Array`; `data_uri()` builds a string that can be assigned directly
/// to an `<img>` source or a download link's `href`.
///
/// The `free()` method can be called to explicitly release WASM memory, but
/// this is optional as wasm-bindgen's finalizer will handle cleanup
/// automatically.
#[wasm_bindgen]
pub struct JsConvertedImage {
    inner: ConvertedImage,
}

#[wasm_bindgen]
impl JsConvertedImage {
    /// Get the stamp width in pixels (always 60)
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.inner.dimensions().0
    }

    /// Get the stamp height in pixels (always 60)
    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.inner.dimensions().1
    }

    /// Get the size of the PNG payload in bytes
    #[wasm_bindgen(getter)]
    pub fn byte_length(&self) -> usize {
        self.inner.png_bytes().len()
    }

    /// Suggested filename for the download
    /// (`<original-base-name>_60x60.png`, or `converted-image.png` for
    /// nameless sources)
    #[wasm_bindgen(getter)]
    pub fn download_name(&self) -> String {
        self.inner.download_name().to_string()
    }

    /// Returns the PNG-encoded bytes as a Uint8Array.
    ///
    /// Note: This creates a copy of the payload, which is necessary for safe
    /// memory management.
    pub fn png_bytes(&self) -> Vec<u8> {
        self.inner.png_bytes().to_vec()
    }

    /// Returns a `data:image/png;base64,...` URI of the stamp.
    pub fn data_uri(&self) -> String {
        self.inner.data_uri()
    }

    /// Explicitly free WASM memory.
    ///
    /// This is optional - wasm-bindgen's finalizer will handle cleanup
    /// automatically. Call this if you want to immediately release memory.
    pub fn free(self) {
        // Dropping self releases the memory
    }
}

impl JsConvertedImage {
    /// Create a JsConvertedImage from a core ConvertedImage.
    ///
    /// This is an internal constructor used by the conversion bindings.
    pub(crate) fn from_converted(inner: ConvertedImage) -> Self {
        Self { inner }
    }
}

/// Convert a u8 filter type value to the core FilterType enum.
///
/// Values:
/// - 0 = Nearest (fastest, lowest quality)
/// - 1 = Bilinear (good balance of speed and quality)
/// - 2 = Lanczos3 (best quality, slowest)
///
/// Any other value defaults to Bilinear.
pub(crate) fn filter_from_u8(value: u8) -> FilterType {
    match value {
        0 => FilterType::Nearest,
        2 => FilterType::Lanczos3,
        _ => FilterType::Bilinear, // Default
    }
}
