//! The conversion pipeline and its Idle/Converting state machine.
//!
//! A [`Converter`] owns the three pieces of mutable state the feature needs:
//! the most recent source image, the most recent converted stamp, and the
//! loading flag. It is a plain single-writer struct; the host embeds one per
//! page, no global singleton.
//!
//! # State machine
//!
//! Two states, **Idle** and **Converting**. [`Converter::begin`] moves Idle to
//! Converting and rejects a second upload while one is in flight. The
//! Converting window exists because the host's file read is asynchronous; the
//! pipeline itself runs synchronously inside [`Converter::complete`], which
//! returns to Idle on success *and* on failure. A decode error can therefore
//! never leave the loading flag stuck.

use thiserror::Error;

use crate::decode::{self, DecodeError, FilterType, SourceInfo};
use crate::encode::{self, EncodeError};
use crate::input::UploadPayload;
use crate::naming;
use crate::rasterize::{self, RasterizeError};
use crate::STAMP_SIZE;

/// Errors that can occur while running a conversion.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// A second upload arrived while a conversion was in flight.
    #[error("A conversion is already in progress")]
    Busy,

    /// The upload could not be decoded as an image.
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// The decoded bitmap could not be drawn onto the stamp target.
    #[error(transparent)]
    Rasterize(#[from] RasterizeError),

    /// The stamp could not be encoded as PNG.
    #[error(transparent)]
    Encode(#[from] EncodeError),
}

/// The most recent upload, kept for the original-image preview.
#[derive(Debug, Clone)]
pub struct SourceImage {
    name: Option<String>,
    bytes: Vec<u8>,
    info: SourceInfo,
}

impl SourceImage {
    /// Original file name, if the upload surface provided one.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Raw upload bytes, unchanged.
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Format and dimensions of the upload.
    pub fn info(&self) -> SourceInfo {
        self.info
    }

    /// Data URI of the original upload, for the preview pane.
    pub fn data_uri(&self) -> String {
        encode::data_uri(&self.bytes, self.info.format.mime())
    }
}

/// A finished 60x60 PNG stamp.
///
/// Invariant: the PNG payload is always exactly
/// `STAMP_SIZE x STAMP_SIZE` pixels, whatever the source looked like.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertedImage {
    png: Vec<u8>,
    download_name: String,
}

impl ConvertedImage {
    /// PNG-encoded bytes, ready to be saved as a file.
    pub fn png_bytes(&self) -> &[u8] {
        &self.png
    }

    /// Data URI of the stamp, for the preview pane and the download link.
    pub fn data_uri(&self) -> String {
        encode::png_data_uri(&self.png)
    }

    /// Suggested filename for the download
    /// (`<original-base-name>_60x60.png`).
    pub fn download_name(&self) -> &str {
        &self.download_name
    }

    /// Output dimensions. Always `(STAMP_SIZE, STAMP_SIZE)`.
    pub fn dimensions(&self) -> (u32, u32) {
        (STAMP_SIZE, STAMP_SIZE)
    }
}

/// Pipeline state visible to the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConverterState {
    /// No conversion in flight.
    #[default]
    Idle,
    /// An upload was accepted and its conversion has not finished yet.
    Converting,
}

/// Owns the conversion pipeline: decode, rasterize, encode, and the
/// preview/download products of the most recent successful run.
#[derive(Debug, Default)]
pub struct Converter {
    state: ConverterState,
    source: Option<SourceImage>,
    converted: Option<ConvertedImage>,
    filter: FilterType,
}

impl Converter {
    /// Create an idle converter with the default resampling filter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an idle converter with an explicit resampling filter.
    pub fn with_filter(filter: FilterType) -> Self {
        Self {
            filter,
            ..Self::default()
        }
    }

    /// Current pipeline state.
    pub fn state(&self) -> ConverterState {
        self.state
    }

    /// True while a conversion is in flight (the host's loading indicator).
    pub fn is_converting(&self) -> bool {
        self.state == ConverterState::Converting
    }

    /// The most recent successfully converted upload, for the preview pane.
    pub fn source(&self) -> Option<&SourceImage> {
        self.source.as_ref()
    }

    /// The most recent converted stamp, for preview and download.
    pub fn converted(&self) -> Option<&ConvertedImage> {
        self.converted.as_ref()
    }

    /// Accept an upload: move Idle to Converting.
    ///
    /// Call this when the upload event fires, before the host starts its
    /// asynchronous file read, so the loading indicator covers the whole
    /// window.
    ///
    /// # Errors
    ///
    /// Returns `ConvertError::Busy` if a conversion is already in flight.
    /// Uploads are serialized, not queued: the host should disable its input
    /// surfaces while [`Converter::is_converting`] is true.
    pub fn begin(&mut self) -> Result<(), ConvertError> {
        if self.is_converting() {
            return Err(ConvertError::Busy);
        }
        self.state = ConverterState::Converting;
        Ok(())
    }

    /// Abandon an in-flight conversion without running the pipeline.
    ///
    /// For host-side failures between `begin` and `complete` (the file read
    /// itself failing). Previous results are untouched.
    pub fn cancel(&mut self) {
        self.state = ConverterState::Idle;
    }

    /// Run the pipeline on the upload bytes and return to Idle.
    ///
    /// Decodes, rasterizes onto the 60x60 target, and encodes as PNG. On
    /// success the previous source/converted pair is replaced wholesale; on
    /// failure it survives, and the state still returns to Idle so the
    /// loading flag cannot stick.
    ///
    /// # Errors
    ///
    /// Any stage error, wrapped in [`ConvertError`]. The message is suitable
    /// for showing to the user.
    pub fn complete(&mut self, payload: UploadPayload) -> Result<&ConvertedImage, ConvertError> {
        let result = self.run_pipeline(&payload);
        self.state = ConverterState::Idle;

        let (source, converted) = result?;
        self.source = Some(source);
        Ok(self.converted.insert(converted))
    }

    /// Accept and convert an upload in one step.
    ///
    /// Equivalent to [`Converter::begin`] followed by [`Converter::complete`],
    /// for hosts that already hold the bytes when the event fires.
    ///
    /// # Errors
    ///
    /// `ConvertError::Busy` if a conversion is in flight, otherwise any
    /// pipeline error.
    pub fn convert(&mut self, payload: UploadPayload) -> Result<&ConvertedImage, ConvertError> {
        self.begin()?;
        self.complete(payload)
    }

    fn run_pipeline(
        &self,
        payload: &UploadPayload,
    ) -> Result<(SourceImage, ConvertedImage), ConvertError> {
        let info = decode::probe(&payload.bytes)?;
        let bitmap = decode::decode(&payload.bytes)?;
        let stamp = rasterize::rasterize_with(&bitmap, self.filter)?;
        let png = encode::encode_png(&stamp.pixels, stamp.width, stamp.height)?;

        let source = SourceImage {
            name: payload.name.clone(),
            bytes: payload.bytes.clone(),
            info,
        };
        let converted = ConvertedImage {
            png,
            download_name: naming::download_name(payload.name.as_deref()),
        };
        Ok((source, converted))
    }
}
