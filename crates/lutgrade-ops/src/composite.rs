//! LUT compositing: intensity blending of colors and of whole grids.
//!
//! # Example
//!
//! ```rust
//! use lutgrade_ops::composite::blend_with_original;
//!
//! let original = [0.2, 0.4, 0.6];
//! let graded = [0.6, 0.4, 0.2];
//! assert_eq!(blend_with_original(original, graded, 0.0), original);
//! assert_eq!(blend_with_original(original, graded, 1.0), graded);
//! ```

use lutgrade_lut::Lut3DGrid;
#[allow(unused_imports)]
use tracing::{debug, trace};

use crate::{OpsError, OpsResult};

#[inline]
fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a * (1.0 - t) + b * t
}

/// Moves `original` toward `sampled` by `intensity`.
///
/// Intensity 0 returns `original` and 1 returns `sampled`, bit-exact for
/// finite inputs. Values outside `[0, 1]` extrapolate.
#[inline]
pub fn blend_with_original(original: [f32; 3], sampled: [f32; 3], intensity: f32) -> [f32; 3] {
    [
        lerp(original[0], sampled[0], intensity),
        lerp(original[1], sampled[1], intensity),
        lerp(original[2], sampled[2], intensity),
    ]
}

/// Blends two grids node by node.
///
/// Both grids must have the same dimension and row count. `t` is clamped to
/// `[0, 1]`, so the result stays between the two grids. The result is titled
/// `"<b title> (<t as percent>%)"`.
///
/// # Example
///
/// ```rust
/// use lutgrade_lut::Lut3DGrid;
/// use lutgrade_ops::composite::blend_grids;
///
/// let base = Lut3DGrid::identity(17).unwrap();
/// let look = base.map(|c| [c[0], c[1] * 0.5, c[2]]).with_title("Teal");
/// let half = blend_grids(&base, &look, 0.5).unwrap();
/// assert_eq!(half.title(), "Teal (50%)");
/// ```
pub fn blend_grids(a: &Lut3DGrid, b: &Lut3DGrid, t: f32) -> OpsResult<Lut3DGrid> {
    if a.size() != b.size() {
        return Err(OpsError::SizeMismatch(format!(
            "cannot blend LUT_3D_SIZE {} with LUT_3D_SIZE {}",
            a.size(),
            b.size()
        )));
    }
    if a.len() != b.len() {
        return Err(OpsError::SizeMismatch(format!(
            "cannot blend {} rows with {} rows",
            a.len(),
            b.len()
        )));
    }

    let t = t.clamp(0.0, 1.0);
    debug!(size = a.size(), t, "Blending LUTs");

    let data = a
        .data()
        .iter()
        .zip(b.data())
        .map(|(ca, cb)| blend_with_original(*ca, *cb, t))
        .collect();

    let title = format!("{} ({}%)", b.title(), (t * 100.0).round() as i64);
    Ok(Lut3DGrid::new(a.size(), data)?.with_title(title))
}
