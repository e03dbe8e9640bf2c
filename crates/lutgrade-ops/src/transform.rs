//! RGBA8 image transform: LUT sampling, intensity blend and grading per pixel.
//!
//! For each pixel the RGB bytes are normalized to `[0, 1]`, sampled through
//! the selected grid (skipped when there is none), blended toward the
//! sample by `intensity`, graded, and rounded back to bytes. Alpha is never
//! touched.
//!
//! Pixels are independent, so with the `parallel` feature scanlines are
//! distributed across the rayon pool. The grid and parameters are only read.
//!
//! # Example
//!
//! ```rust
//! use lutgrade_ops::grading::GradingParams;
//! use lutgrade_ops::transform::{transform, PixelBuffer};
//!
//! let mut bytes = vec![255u8, 255, 255, 255];
//! let mut image = PixelBuffer::new(&mut bytes, 1, 1).unwrap();
//! let params = GradingParams { exposure: -50.0, ..Default::default() };
//! transform(&mut image, None, 1.0, &params);
//! assert_eq!(bytes, [128, 128, 128, 255]);
//! ```

use lutgrade_lut::{sampler, Lut3DGrid};
#[cfg(feature = "parallel")]
use rayon::prelude::*;
#[allow(unused_imports)]
use tracing::{debug, trace};

use crate::composite::blend_with_original;
use crate::grading::{grade, GradingParams};
use crate::{OpsError, OpsResult};

/// Bytes per pixel (R, G, B, A).
pub const CHANNELS: usize = 4;

/// Pixels per work unit when no row width is known.
const CHUNK_PIXELS: usize = 4096;

/// Interleaved RGBA8 pixels borrowed from the host.
#[derive(Debug)]
pub struct PixelBuffer<'a> {
    data: &'a mut [u8],
    width: usize,
    height: usize,
}

impl<'a> PixelBuffer<'a> {
    /// Wraps `data`, which must hold exactly `width * height * 4` bytes.
    pub fn new(data: &'a mut [u8], width: usize, height: usize) -> OpsResult<Self> {
        let expected = width
            .checked_mul(height)
            .and_then(|v| v.checked_mul(CHANNELS))
            .ok_or_else(|| OpsError::InvalidDimensions("image dimensions overflow".into()))?;

        if data.len() != expected {
            return Err(OpsError::InvalidDimensions(format!(
                "{}x{} RGBA needs {} bytes, got {}",
                width,
                height,
                expected,
                data.len()
            )));
        }
        Ok(Self { data, width, height })
    }

    /// Width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// The underlying bytes.
    pub fn as_bytes(&self) -> &[u8] {
        self.data
    }
}

/// Runs the per-pixel pipeline on a normalized color.
///
/// An absent or empty grid skips sampling and blending; grading always runs
/// and clamps the result to `[0, 1]`.
#[inline]
pub fn process_pixel(
    rgb: [f32; 3],
    grid: Option<&Lut3DGrid>,
    intensity: f32,
    params: &GradingParams,
) -> [f32; 3] {
    let rgb = match grid {
        Some(grid) if !grid.is_empty() => {
            blend_with_original(rgb, sampler::sample(grid, rgb), intensity)
        }
        _ => rgb,
    };
    grade(rgb, params)
}

/// Transforms every pixel of `image` in place.
pub fn transform(
    image: &mut PixelBuffer<'_>,
    grid: Option<&Lut3DGrid>,
    intensity: f32,
    params: &GradingParams,
) {
    debug!(
        width = image.width,
        height = image.height,
        lut = ?grid.map(|g| g.size()),
        intensity,
        "Transforming image"
    );
    let row_len = image.width * CHANNELS;
    process_chunks(image.data, row_len, grid, intensity, params);
}

/// Transforms a bare RGBA8 byte slice in place.
///
/// The slice length must be a multiple of 4.
pub fn transform_rgba(
    data: &mut [u8],
    grid: Option<&Lut3DGrid>,
    intensity: f32,
    params: &GradingParams,
) -> OpsResult<()> {
    if data.len() % CHANNELS != 0 {
        return Err(OpsError::InvalidDimensions(format!(
            "RGBA data length {} is not a multiple of {}",
            data.len(),
            CHANNELS
        )));
    }
    debug!(pixels = data.len() / CHANNELS, lut = ?grid.map(|g| g.size()), intensity, "Transforming RGBA");
    process_chunks(data, CHUNK_PIXELS * CHANNELS, grid, intensity, params);
    Ok(())
}

fn process_chunks(
    data: &mut [u8],
    chunk_len: usize,
    grid: Option<&Lut3DGrid>,
    intensity: f32,
    params: &GradingParams,
) {
    if data.is_empty() || chunk_len == 0 {
        return;
    }
    if grid.is_none() && params.is_neutral() {
        trace!("No LUT and neutral grading, skipping");
        return;
    }

    let run = |chunk: &mut [u8]| {
        for px in chunk.chunks_exact_mut(CHANNELS) {
            process_rgba(px, grid, intensity, params);
        }
    };

    #[cfg(feature = "parallel")]
    data.par_chunks_mut(chunk_len).for_each(run);

    #[cfg(not(feature = "parallel"))]
    data.chunks_mut(chunk_len).for_each(run);
}

#[inline]
fn process_rgba(px: &mut [u8], grid: Option<&Lut3DGrid>, intensity: f32, params: &GradingParams) {
    let rgb = [
        px[0] as f32 / 255.0,
        px[1] as f32 / 255.0,
        px[2] as f32 / 255.0,
    ];
    let out = process_pixel(rgb, grid, intensity, params);
    px[0] = to_byte(out[0]);
    px[1] = to_byte(out[1]);
    px[2] = to_byte(out[2]);
}

#[inline]
fn to_byte(v: f32) -> u8 {
    // rounds half away from zero; `as` saturates out-of-range and NaN
    (v * 255.0).round() as u8
}
