//! Image decoding pipeline for Pixstamp.
//!
//! This module provides functionality for:
//! - Decoding uploaded images in any supported container format (PNG, JPEG,
//!   GIF, WebP), sniffed from the bytes themselves
//! - Probing format and dimensions without a full decode, for the
//!   original-image preview pane
//!
//! # Architecture
//!
//! The decoding pipeline is designed to be used from the browser via WASM
//! bindings. All operations are synchronous and single-threaded within WASM;
//! the asynchronous file-read boundary lives in the host page.
//!
//! # Examples
//!
//! ```ignore
//! use pixstamp_core::decode::{decode, probe};
//!
//! let bytes = std::fs::read("photo.jpg").unwrap();
//! let info = probe(&bytes).unwrap();
//! println!("{}x{} {}", info.width, info.height, info.format.mime());
//!
//! let bitmap = decode(&bytes).unwrap();
//! println!("Decoded {}x{} image", bitmap.width, bitmap.height);
//! ```

mod probe;
mod reader;
mod types;

pub use probe::{probe, SourceFormat, SourceInfo};
pub use reader::decode;
pub use types::{Bitmap, DecodeError, FilterType};
