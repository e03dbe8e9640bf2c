//! # lutgrade-lut
//!
//! 3D Look-Up Table (LUT) grid, `.cube` codec and trilinear sampling.
//!
//! # Types
//!
//! - [`Lut3DGrid`] - immutable cubic grid of RGB triples plus a title
//! - [`LutLibrary`] - caller-owned collection of grids with a selection
//!
//! # Modules
//!
//! - [`cube`] - `.cube` text parsing and serialization
//! - [`sampler`] - trilinear interpolation
//!
//! # Usage
//!
//! ```rust
//! use lutgrade_lut::{cube, Lut3DGrid};
//!
//! let text = "LUT_3D_SIZE 2\n0 0 0\n1 0 0\n0 1 0\n1 1 0\n0 0 1\n1 0 1\n0 1 1\n1 1 1\n";
//! let lut = cube::parse(text).unwrap();
//! assert_eq!(lut.sample([0.5, 0.5, 0.5]), [0.5, 0.5, 0.5]);
//!
//! let identity = Lut3DGrid::identity(33).unwrap();
//! let out = identity.sample([0.25, 0.5, 0.75]);
//! ```
//!
//! # Dependencies
//!
//! - [`thiserror`] - Error handling
//! - [`regex`] - `.cube` data row matching
//! - [`tracing`] - Diagnostics
//!
//! # Used By
//!
//! - `lutgrade-ops` - grading, compositing and image transforms
//! - `lutgrade-cli` - command-line host

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
mod grid;
mod library;
pub mod cube;
pub mod sampler;

pub use error::{LutError, LutResult};
pub use grid::{Lut3DGrid, DEFAULT_TITLE, IDENTITY_TITLE, MAX_SIZE};
pub use library::{LutEntry, LutId, LutLibrary};
pub use cube::{ParseOptions, ParseReport, ParsedCube, SizeMismatchPolicy};
