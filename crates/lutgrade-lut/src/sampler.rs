//! Trilinear sampling of a [`Lut3DGrid`].
//!
//! Inputs are normalized colors. Each component is scaled by `size - 1` to a
//! continuous grid coordinate, the 8 surrounding nodes are fetched and the
//! result is interpolated along red, then green, then blue.
//!
//! The sampler does not clamp its output; HDR grids pass through as stored.

use crate::Lut3DGrid;

/// Samples `grid` at `rgb` with trilinear interpolation.
///
/// Inputs outside `[0, 1]` are clamped to the cube boundary. An empty grid
/// returns `rgb` unchanged, and any corner whose flat index falls outside
/// the stored rows (only possible for a grid accepted by the lenient parse
/// policy) is replaced by `rgb`.
///
/// # Example
///
/// ```rust
/// use lutgrade_lut::{sampler, Lut3DGrid};
///
/// let lut = Lut3DGrid::identity(2).unwrap();
/// assert_eq!(sampler::sample(&lut, [0.5, 0.5, 0.5]), [0.5, 0.5, 0.5]);
/// ```
pub fn sample(grid: &Lut3DGrid, rgb: [f32; 3]) -> [f32; 3] {
    if grid.is_empty() {
        return rgb;
    }

    let size = grid.size();
    let (r0, r1, rf) = axis(rgb[0], size);
    let (g0, g1, gf) = axis(rgb[1], size);
    let (b0, b1, bf) = axis(rgb[2], size);

    let corner = |r, g, b| grid.get(r, g, b).unwrap_or(rgb);

    let c000 = corner(r0, g0, b0);
    let c100 = corner(r1, g0, b0);
    let c010 = corner(r0, g1, b0);
    let c110 = corner(r1, g1, b0);
    let c001 = corner(r0, g0, b1);
    let c101 = corner(r1, g0, b1);
    let c011 = corner(r0, g1, b1);
    let c111 = corner(r1, g1, b1);

    let mut result = [0.0f32; 3];
    for i in 0..3 {
        // red axis: 4 edge points
        let c00 = lerp(c000[i], c100[i], rf);
        let c10 = lerp(c010[i], c110[i], rf);
        let c01 = lerp(c001[i], c101[i], rf);
        let c11 = lerp(c011[i], c111[i], rf);

        // green axis: 2 face points
        let c0 = lerp(c00, c10, gf);
        let c1 = lerp(c01, c11, gf);

        // blue axis
        result[i] = lerp(c0, c1, bf);
    }

    result
}

/// Samples an optional grid; `None` means no LUT is selected and the color
/// passes through unchanged.
#[inline]
pub fn sample_or_passthrough(grid: Option<&Lut3DGrid>, rgb: [f32; 3]) -> [f32; 3] {
    match grid {
        Some(grid) => sample(grid, rgb),
        None => rgb,
    }
}

/// Linear interpolation, exact at both endpoints.
#[inline]
pub(crate) fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a * (1.0 - t) + b * t
}

/// Floor index, next index (clamped, never wrapped) and fraction for one axis.
#[inline]
fn axis(v: f32, size: usize) -> (usize, usize, f32) {
    let last = size - 1;
    let v = if v.is_nan() { 0.0 } else { v.clamp(0.0, 1.0) };
    let scaled = v * last as f32;
    let i0 = (scaled.floor() as usize).min(last);
    let i1 = (i0 + 1).min(last);
    (i0, i1, scaled - i0 as f32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn assert_rgb_eq(a: [f32; 3], b: [f32; 3], eps: f32) {
        for i in 0..3 {
            assert_abs_diff_eq!(a[i], b[i], epsilon = eps);
        }
    }

    #[test]
    fn identity_sweep() {
        let lut = Lut3DGrid::identity(33).unwrap();
        let steps = 23;
        for ri in 0..=steps {
            for gi in 0..=steps {
                for bi in 0..=steps {
                    let rgb = [
                        ri as f32 / steps as f32,
                        gi as f32 / steps as f32,
                        bi as f32 / steps as f32,
                    ];
                    assert_rgb_eq(sample(&lut, rgb), rgb, 1e-5);
                }
            }
        }
    }

    #[test]
    fn identity_boundaries() {
        let lut = Lut3DGrid::identity(33).unwrap();
        assert_eq!(sample(&lut, [0.0, 0.0, 0.0]), [0.0, 0.0, 0.0]);
        assert_eq!(sample(&lut, [1.0, 1.0, 1.0]), [1.0, 1.0, 1.0]);
        assert_eq!(sample(&lut, [1.0, 0.0, 1.0]), [1.0, 0.0, 1.0]);
    }

    #[test]
    fn node_exactness() {
        let lut = Lut3DGrid::from_fn(5, |[r, g, b]| [r * r, g.sqrt(), 1.0 - b]).unwrap();
        for k in 0..5 {
            let v = k as f32 / 4.0;
            let expected = lut.get(k, 4 - k, k).unwrap();
            assert_eq!(sample(&lut, [v, 1.0 - v, v]), expected);
        }
    }

    #[test]
    fn multilinear_functions_are_reproduced() {
        // trilinear interpolation is exact for functions linear per axis
        let lut = Lut3DGrid::from_fn(2, |[r, g, b]| [r * g * b, r + g + b, r * g]).unwrap();
        let out = sample(&lut, [0.5, 0.25, 0.75]);
        assert_rgb_eq(out, [0.09375, 1.5, 0.125], 1e-6);
    }

    #[test]
    fn out_of_range_inputs_clamp_to_cube() {
        let lut = Lut3DGrid::identity(9).unwrap();
        assert_rgb_eq(sample(&lut, [-0.5, 1.5, 0.5]), [0.0, 1.0, 0.5], 1e-6);
        assert_rgb_eq(sample(&lut, [f32::NAN, 0.25, 0.25]), [0.0, 0.25, 0.25], 1e-6);
    }

    #[test]
    fn output_is_not_clamped() {
        let lut = Lut3DGrid::from_fn(3, |[r, g, b]| [r * 4.0, g + 1.0, b]).unwrap();
        assert_rgb_eq(sample(&lut, [1.0, 0.0, 0.5]), [4.0, 1.0, 0.5], 1e-6);
    }

    #[test]
    fn missing_rows_fall_back_to_input() {
        // 2^3 cube with only the first 4 rows present (all black)
        let lut = Lut3DGrid::new_lenient(2, vec![[0.0; 3]; 4]).unwrap();
        // b index 0 -> stored rows
        assert_eq!(sample(&lut, [1.0, 1.0, 0.0]), [0.0, 0.0, 0.0]);
        // b index 1 -> every corner missing
        assert_rgb_eq(sample(&lut, [0.2, 0.4, 1.0]), [0.2, 0.4, 1.0], 1e-6);
    }

    #[test]
    fn empty_grid_passes_through() {
        let lut = Lut3DGrid::new_lenient(17, Vec::new()).unwrap();
        assert_eq!(sample(&lut, [0.1, 0.2, 0.3]), [0.1, 0.2, 0.3]);
        assert_eq!(sample_or_passthrough(None, [0.7, 0.8, 0.9]), [0.7, 0.8, 0.9]);
    }
}
