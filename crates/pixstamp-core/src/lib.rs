//! Pixstamp Core - Image conversion library
//!
//! This crate provides the core functionality for Pixstamp: take an uploaded
//! image in any supported format, rasterize it onto a fixed 60x60 target, and
//! re-encode it as PNG for preview and download.
//!
//! The pipeline is linear: decode -> rasterize -> encode -> present/download.
//! [`converter::Converter`] drives it and owns the Idle/Converting state
//! machine; the individual stages live in [`decode`], [`rasterize`], and
//! [`encode`] and can be used on their own.

pub mod converter;
pub mod decode;
pub mod encode;
pub mod input;
pub mod naming;
pub mod rasterize;

pub use converter::{ConvertError, ConvertedImage, Converter, ConverterState, SourceImage};
pub use decode::{Bitmap, DecodeError, FilterType, SourceFormat, SourceInfo};
pub use encode::EncodeError;
pub use input::{first_file, first_image_item, is_image_mime, ClipboardItem, UploadPayload};
pub use naming::download_name;
pub use rasterize::{rasterize, rasterize_with, RasterizeError};

/// Edge length of the output stamp, in pixels.
///
/// Every converted image is exactly `STAMP_SIZE x STAMP_SIZE`, regardless of
/// the source's dimensions or aspect ratio.
pub const STAMP_SIZE: u32 = 60;
