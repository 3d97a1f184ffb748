//! Stateful converter WASM binding.
//!
//! [`JsConverter`] carries the core Idle/Converting state machine across the
//! host's asynchronous file-read boundary: call `begin()` when the upload
//! event fires, read the file, then call `complete()` with the bytes. The
//! loading indicator tracks `is_converting` and is guaranteed to clear on
//! both success and failure.
//!
//! # Example
//!
//! ```typescript
//! import { JsConverter } from '@pixstamp/wasm';
//!
//! const converter = new JsConverter();
//!
//! input.addEventListener('change', async (e) => {
//!   const file = e.target.files?.[0];
//!   if (!file) return; // empty selection: silent no-op
//!
//!   converter.begin(); // throws if a conversion is in flight
//!   try {
//!     const bytes = new Uint8Array(await file.arrayBuffer());
//!     const stamp = converter.complete(bytes, file.name);
//!     originalImg.src = converter.source_data_uri();
//!     convertedImg.src = stamp.data_uri();
//!   } catch (err) {
//!     converter.cancel();
//!     showMessage(String(err));
//!   }
//! });
//! ```

use pixstamp_core::{Converter, UploadPayload};
use wasm_bindgen::prelude::*;

use crate::convert::js_error;
use crate::types::{filter_from_u8, JsConvertedImage};

/// The conversion state machine, wrapped for JavaScript.
///
/// Holds the most recent source and converted images so the host can rebuild
/// its preview pane at any time.
#[wasm_bindgen]
pub struct JsConverter {
    inner: Converter,
}

#[wasm_bindgen]
impl JsConverter {
    /// Create an idle converter with the default (bilinear) filter.
    #[wasm_bindgen(constructor)]
    pub fn new() -> JsConverter {
        JsConverter {
            inner: Converter::new(),
        }
    }

    /// Create an idle converter with an explicit resampling filter.
    ///
    /// # Arguments
    ///
    /// * `filter` - 0=Nearest, 1=Bilinear, 2=Lanczos3 (unknown values fall
    ///   back to Bilinear)
    pub fn with_filter(filter: u8) -> JsConverter {
        JsConverter {
            inner: Converter::with_filter(filter_from_u8(filter)),
        }
    }

    /// True while a conversion is in flight (drive the loading indicator
    /// from this)
    #[wasm_bindgen(getter)]
    pub fn is_converting(&self) -> bool {
        self.inner.is_converting()
    }

    /// Accept an upload: move Idle to Converting.
    ///
    /// # Errors
    ///
    /// Throws if a conversion is already in flight. Uploads are serialized,
    /// not queued - disable the input surfaces while `is_converting` is true.
    pub fn begin(&mut self) -> Result<(), JsValue> {
        self.inner.begin().map_err(js_error)
    }

    /// Abandon an in-flight conversion without running the pipeline.
    ///
    /// For host-side failures between `begin` and `complete` (the
    /// `FileReader` itself failing). Previous results are untouched.
    pub fn cancel(&mut self) {
        self.inner.cancel();
    }

    /// Run the pipeline on the upload bytes and return to Idle.
    ///
    /// # Arguments
    ///
    /// * `bytes` - The raw upload bytes as a `Uint8Array`
    /// * `name` - The original file name, or `undefined` for clipboard pastes
    ///
    /// # Errors
    ///
    /// Throws if any pipeline stage fails. The converter is back in the idle
    /// state either way, and the previous preview (if any) survives a
    /// failure.
    pub fn complete(
        &mut self,
        bytes: &[u8],
        name: Option<String>,
    ) -> Result<JsConvertedImage, JsValue> {
        let payload = match name {
            Some(name) => UploadPayload::from_file(name, bytes.to_vec()),
            None => UploadPayload::from_bytes(bytes.to_vec()),
        };
        self.inner
            .complete(payload)
            .map(|converted| JsConvertedImage::from_converted(converted.clone()))
            .map_err(js_error)
    }

    /// Data URI of the most recent source image, or `undefined` before the
    /// first successful conversion.
    pub fn source_data_uri(&self) -> Option<String> {
        self.inner.source().map(|source| source.data_uri())
    }

    /// Data URI of the most recent converted stamp, or `undefined` before
    /// the first successful conversion.
    pub fn converted_data_uri(&self) -> Option<String> {
        self.inner.converted().map(|converted| converted.data_uri())
    }

    /// Suggested download filename of the most recent converted stamp, or
    /// `undefined` before the first successful conversion.
    pub fn download_name(&self) -> Option<String> {
        self.inner
            .converted()
            .map(|converted| converted.download_name().to_string())
    }
}

impl Default for JsConverter {
    fn default() -> Self {
        Self::new()
    }
}
