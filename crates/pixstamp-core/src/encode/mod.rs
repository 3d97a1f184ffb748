//! Image encoding pipeline for Pixstamp.
//!
//! This module provides functionality for:
//! - Encoding RGBA pixel data to PNG
//! - Wrapping encoded bytes in data URIs for preview and download
//!
//! # Architecture
//!
//! The encoding pipeline is designed to be used from the browser via WASM
//! bindings. All operations are synchronous and single-threaded within WASM.
//!
//! # Examples
//!
//! ```ignore
//! use pixstamp_core::encode::{encode_png, png_data_uri};
//!
//! let pixels = vec![128u8; 60 * 60 * 4]; // Gray stamp
//! let png = encode_png(&pixels, 60, 60).unwrap();
//! let uri = png_data_uri(&png);
//! assert!(uri.starts_with("data:image/png;base64,"));
//! ```

mod png;

pub use png::{data_uri, encode_png, png_data_uri, EncodeError};
