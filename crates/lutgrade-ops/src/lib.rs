//! # lutgrade-ops
//!
//! Color grading, LUT compositing and RGBA8 image transforms built on
//! [`lutgrade_lut`] grids.
//!
//! # Modules
//!
//! - [`grading`] - exposure/contrast/saturation/temperature pipeline
//! - [`composite`] - intensity blending of colors and grids
//! - [`transform`] - per-pixel image driver (the hot path)
//!
//! # Example
//!
//! ```rust
//! use lutgrade_lut::cube;
//! use lutgrade_ops::grading::GradingParams;
//! use lutgrade_ops::transform::transform_rgba;
//!
//! let text = "LUT_3D_SIZE 2\n0 0 0\n1 0 0\n0 1 0\n1 1 0\n0 0 1\n1 0 1\n0 1 1\n1 1 1\n";
//! let lut = cube::parse(text).unwrap();
//!
//! let mut pixels = vec![10u8, 20, 30, 255, 200, 150, 100, 128];
//! transform_rgba(&mut pixels, Some(&lut), 1.0, &GradingParams::default()).unwrap();
//! assert_eq!(pixels, [10, 20, 30, 255, 200, 150, 100, 128]);
//! ```
//!
//! # Features
//!
//! - `parallel` (default) - process scanlines on the rayon pool
//! - `serde` - (de)serialize [`GradingParams`]

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
pub mod composite;
pub mod grading;
pub mod transform;

pub use error::{OpsError, OpsResult};
pub use grading::GradingParams;
pub use transform::PixelBuffer;
