//! Pixstamp WASM - WebAssembly bindings for Pixstamp
//!
//! This crate exposes the pixstamp-core conversion pipeline to
//! JavaScript/TypeScript applications.
//!
//! # Module Structure
//!
//! - `types` - WASM-compatible wrapper types for converted images
//! - `convert` - One-shot conversion, probing, and data-URI bindings
//! - `converter` - Stateful `JsConverter` for hosts with an async read gap
//!
//! # Usage
//!
//! ```typescript
//! import init, { convert_image } from '@pixstamp/wasm';
//!
//! // Initialize WASM module (must call first)
//! await init();
//!
//! // Convert an upload to a 60x60 PNG stamp
//! const bytes = new Uint8Array(await file.arrayBuffer());
//! const stamp = convert_image(bytes, file.name);
//! img.src = stamp.data_uri();
//! ```

use wasm_bindgen::prelude::*;

mod convert;
mod converter;
mod types;

// Re-export public types
pub use convert::{
    convert_image, convert_image_with_filter, is_image_mime, probe_image, source_data_uri,
};
pub use converter::JsConverter;
pub use types::JsConvertedImage;

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {
    // Future: Set up panic hook for better error messages in browser console
    // when console_error_panic_hook feature is added
}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Log a diagnostic line to the browser console.
///
/// Available to hosts that want pipeline errors mirrored into the console
/// alongside their own UI message.
#[wasm_bindgen]
pub fn log_to_console(message: &str) {
    web_sys::console::log_1(&JsValue::from_str(message));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!version().is_empty());
    }
}
