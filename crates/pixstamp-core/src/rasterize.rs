//! Fixed-size rasterization onto the 60x60 stamp target.
//!
//! The source bitmap is drawn to fill the target exactly, stretching or
//! squashing as needed. No aspect-ratio preservation and no letterboxing:
//! that is the product behavior, not an oversight, and callers must not
//! "fix" it by fitting instead.

use thiserror::Error;

use crate::decode::{Bitmap, FilterType};
use crate::STAMP_SIZE;

/// Errors that can occur during rasterization.
#[derive(Debug, Error)]
pub enum RasterizeError {
    /// The source bitmap has zero dimensions or no pixel data.
    #[error("Cannot rasterize an empty bitmap")]
    EmptyBitmap,

    /// The pixel buffer doesn't match the declared dimensions.
    #[error("Invalid pixel data: expected {expected} bytes (width * height * 4), got {actual}")]
    InvalidPixelData { expected: usize, actual: usize },
}

/// Rasterize a bitmap onto the fixed stamp target with the default filter.
///
/// # Errors
///
/// Returns `RasterizeError::EmptyBitmap` if the source has no pixels.
pub fn rasterize(bitmap: &Bitmap) -> Result<Bitmap, RasterizeError> {
    rasterize_with(bitmap, FilterType::default())
}

/// Rasterize a bitmap onto the fixed stamp target with an explicit filter.
///
/// # Arguments
///
/// * `bitmap` - The decoded source image, any dimensions
/// * `filter` - Interpolation filter for the resample
///
/// # Returns
///
/// A new `Bitmap` that is exactly `STAMP_SIZE x STAMP_SIZE` pixels,
/// regardless of the source's dimensions or aspect ratio. Sources smaller
/// than the target are upscaled.
///
/// # Errors
///
/// Returns `RasterizeError::EmptyBitmap` if the source has no pixels.
/// Returns `RasterizeError::InvalidPixelData` if the buffer length doesn't
/// match the source dimensions.
pub fn rasterize_with(bitmap: &Bitmap, filter: FilterType) -> Result<Bitmap, RasterizeError> {
    if bitmap.is_empty() {
        return Err(RasterizeError::EmptyBitmap);
    }

    let rgba_image = bitmap
        .to_rgba_image()
        .ok_or(RasterizeError::InvalidPixelData {
            expected: (bitmap.width * bitmap.height * 4) as usize,
            actual: bitmap.pixels.len(),
        })?;

    // Fast path: already stamp-sized
    if bitmap.width == STAMP_SIZE && bitmap.height == STAMP_SIZE {
        return Ok(bitmap.clone());
    }

    let resized = image::imageops::resize(
        &rgba_image,
        STAMP_SIZE,
        STAMP_SIZE,
        filter.to_image_filter(),
    );

    Ok(Bitmap::from_rgba_image(resized))
}


// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    /// Strategy for generating source dimensions (keep small for speed).
    fn dimensions_strategy() -> impl Strategy<Value = (u32, u32)> {
        (1u32..=128, 1u32..=128)
    }

    /// Strategy for generating a filter type.
    fn filter_strategy() -> impl Strategy<Value = FilterType> {
        prop_oneof![
            Just(FilterType::Nearest),
            Just(FilterType::Bilinear),
            Just(FilterType::Lanczos3),
        ]
    }

    proptest! {
        /// Property: Every non-empty source rasterizes to exactly 60x60.
        #[test]
        fn prop_output_is_always_stamp_sized(
            (width, height) in dimensions_strategy(),
            filter in filter_strategy(),
        ) {
            let pixels = vec![128u8; (width * height * 4) as usize];
            let img = Bitmap::new(width, height, pixels);

            let stamp = rasterize_with(&img, filter);
            prop_assert!(stamp.is_ok());

            let stamp = stamp.unwrap();
            prop_assert_eq!(stamp.width, STAMP_SIZE);
            prop_assert_eq!(stamp.height, STAMP_SIZE);
            prop_assert_eq!(stamp.pixels.len(), (STAMP_SIZE * STAMP_SIZE * 4) as usize);
        }

        /// Property: Rasterization is deterministic.
        #[test]
        fn prop_deterministic(
            (width, height) in (1u32..=40, 1u32..=40),
            filter in filter_strategy(),
        ) {
            let pixels: Vec<u8> = (0..(width * height * 4) as usize)
                .map(|i| ((i * 31) % 256) as u8)
                .collect();
            let img = Bitmap::new(width, height, pixels);

            let first = rasterize_with(&img, filter).unwrap();
            let second = rasterize_with(&img, filter).unwrap();

            prop_assert_eq!(first, second);
        }

        /// Property: A uniform source stays uniform after resampling.
        #[test]
        fn prop_uniform_source_stays_uniform(
            (width, height) in dimensions_strategy(),
            value in any::<u8>(),
        ) {
            let pixels = vec![value; (width * height * 4) as usize];
            let img = Bitmap::new(width, height, pixels);

            let stamp = rasterize_with(&img, FilterType::Nearest).unwrap();
            prop_assert!(stamp.pixels.iter().all(|&b| b == value));
        }
    }
}
