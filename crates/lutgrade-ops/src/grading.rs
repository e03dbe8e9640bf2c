//! Parametric color grading: temperature, exposure, saturation, contrast.
//!
//! The pipeline runs in a fixed order on a normalized RGB triple:
//!
//! 1. Temperature: `r += 0.1 * t/50`, `b -= 0.1 * t/50`
//! 2. Exposure: gain of `2^(e/50)` on all channels
//! 3. Saturation: scale each channel's distance from Rec.709 luma by `1 + s/50`
//! 4. Contrast: scale each channel's distance from 0.5 by `(100 + c)/100`
//!
//! Each stage sees the previous stage's unclamped output. The result is
//! clamped to `[0, 1]` once, after the last stage.
//!
//! Controls use a `[-50, 50]` convention with 0 as neutral; the range is not
//! enforced. [`GradingParams::from_unit`] converts `[-1, 1]` controls.

use lutgrade_lut::Lut3DGrid;
#[allow(unused_imports)]
use tracing::{debug, trace};

use crate::OpsResult;

/// Rec.709 luma coefficient for red.
pub const REC709_LUMA_R: f32 = 0.2126;
/// Rec.709 luma coefficient for green.
pub const REC709_LUMA_G: f32 = 0.7152;
/// Rec.709 luma coefficient for blue.
pub const REC709_LUMA_B: f32 = 0.0722;

/// Control value corresponding to one full unit of adjustment.
pub const CONTROL_SCALE: f32 = 50.0;

/// Red/blue shift at full warm temperature.
const TEMPERATURE_SHIFT: f32 = 0.1;

/// Contrast pivot.
const CONTRAST_PIVOT: f32 = 0.5;

/// The four grading controls. All zero is neutral.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GradingParams {
    /// Exposure; +50 is one stop brighter.
    pub exposure: f32,
    /// Contrast around mid gray; +100 doubles, -100 flattens.
    pub contrast: f32,
    /// Saturation; -50 is grayscale.
    pub saturation: f32,
    /// Warm (+) / cool (-) bias.
    pub temperature: f32,
}

impl GradingParams {
    /// Neutral parameters.
    pub fn neutral() -> Self {
        Self::default()
    }

    /// Builds parameters from controls on a `[-1, 1]` scale.
    pub fn from_unit(exposure: f32, contrast: f32, saturation: f32, temperature: f32) -> Self {
        Self {
            exposure: exposure * CONTROL_SCALE,
            contrast: contrast * CONTROL_SCALE,
            saturation: saturation * CONTROL_SCALE,
            temperature: temperature * CONTROL_SCALE,
        }
    }

    /// True when every control is zero.
    pub fn is_neutral(&self) -> bool {
        self.exposure == 0.0
            && self.contrast == 0.0
            && self.saturation == 0.0
            && self.temperature == 0.0
    }

    /// Applies the pipeline to one color. See [`grade`].
    #[inline]
    pub fn apply(&self, rgb: [f32; 3]) -> [f32; 3] {
        grade(rgb, self)
    }
}

/// Rec.709 luma of a linear triple.
#[inline]
pub fn luma_rec709(rgb: [f32; 3]) -> f32 {
    REC709_LUMA_R * rgb[0] + REC709_LUMA_G * rgb[1] + REC709_LUMA_B * rgb[2]
}

/// Applies temperature, exposure, saturation and contrast, then clamps.
///
/// # Example
///
/// ```rust
/// use lutgrade_ops::grading::{grade, GradingParams};
///
/// let params = GradingParams { exposure: -50.0, ..Default::default() };
/// assert_eq!(grade([1.0, 1.0, 1.0], &params), [0.5, 0.5, 0.5]);
/// ```
pub fn grade(rgb: [f32; 3], params: &GradingParams) -> [f32; 3] {
    let [mut r, mut g, mut b] = rgb;

    if params.temperature != 0.0 {
        let shift = TEMPERATURE_SHIFT * (params.temperature / CONTROL_SCALE);
        r += shift;
        b -= shift;
    }

    if params.exposure != 0.0 {
        let gain = 2.0_f32.powf(params.exposure / CONTROL_SCALE);
        r *= gain;
        g *= gain;
        b *= gain;
    }

    if params.saturation != 0.0 {
        let y = luma_rec709([r, g, b]);
        let k = 1.0 + params.saturation / CONTROL_SCALE;
        r = y + (r - y) * k;
        g = y + (g - y) * k;
        b = y + (b - y) * k;
    }

    if params.contrast != 0.0 {
        let k = (100.0 + params.contrast) / 100.0;
        r = (r - CONTRAST_PIVOT) * k + CONTRAST_PIVOT;
        g = (g - CONTRAST_PIVOT) * k + CONTRAST_PIVOT;
        b = (b - CONTRAST_PIVOT) * k + CONTRAST_PIVOT;
    }

    [r.clamp(0.0, 1.0), g.clamp(0.0, 1.0), b.clamp(0.0, 1.0)]
}

/// Grades every node of `grid`, baking the look into a new grid.
///
/// Size and title are kept; the source grid is not modified.
pub fn grade_grid(grid: &Lut3DGrid, params: &GradingParams) -> Lut3DGrid {
    debug!(size = grid.size(), ?params, "Grading LUT");
    grid.map(|rgb| grade(*rgb, params))
}

/// Bakes `params` into a fresh grid of dimension `size`.
///
/// Equivalent to grading an identity grid.
pub fn bake(size: usize, params: &GradingParams, title: impl Into<String>) -> OpsResult<Lut3DGrid> {
    debug!(size, ?params, "Baking grading LUT");
    let grid = Lut3DGrid::from_fn(size, |rgb| grade(rgb, params))?;
    Ok(grid.with_title(title))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn assert_rgb_eq(a: [f32; 3], b: [f32; 3]) {
        for i in 0..3 {
            assert_abs_diff_eq!(a[i], b[i], epsilon = 1e-6);
        }
    }

    #[test]
    fn neutral_only_clamps() {
        let p = GradingParams::neutral();
        assert!(p.is_neutral());
        assert_eq!(grade([0.2, 0.5, 0.9], &p), [0.2, 0.5, 0.9]);
        assert_eq!(grade([-0.3, 1.4, 1.0], &p), [0.0, 1.0, 1.0]);
    }

    #[test]
    fn temperature_shifts_red_and_blue() {
        let warm = GradingParams { temperature: 50.0, ..Default::default() };
        assert_rgb_eq(grade([0.5, 0.5, 0.5], &warm), [0.6, 0.5, 0.4]);

        let cool = GradingParams { temperature: -25.0, ..Default::default() };
        assert_rgb_eq(grade([0.5, 0.5, 0.5], &cool), [0.45, 0.5, 0.55]);
    }

    #[test]
    fn exposure_is_stop_based() {
        let up = GradingParams { exposure: 50.0, ..Default::default() };
        assert_rgb_eq(grade([0.25, 0.1, 0.4], &up), [0.5, 0.2, 0.8]);

        let down = GradingParams { exposure: -100.0, ..Default::default() };
        assert_rgb_eq(grade([1.0, 0.8, 0.4], &down), [0.25, 0.2, 0.1]);
    }

    #[test]
    fn saturation_pivots_on_rec709_luma() {
        let rgb = [0.8, 0.4, 0.2];
        let y = luma_rec709(rgb);
        assert_abs_diff_eq!(y, 0.2126 * 0.8 + 0.7152 * 0.4 + 0.0722 * 0.2, epsilon = 1e-7);

        let gray = GradingParams { saturation: -50.0, ..Default::default() };
        assert_rgb_eq(grade(rgb, &gray), [y, y, y]);

        let boost = GradingParams { saturation: 25.0, ..Default::default() };
        let out = grade(rgb, &boost);
        assert_abs_diff_eq!(out[0], y + (0.8 - y) * 1.5, epsilon = 1e-6);
        assert_abs_diff_eq!(out[2], y + (0.2 - y) * 1.5, epsilon = 1e-6);
    }

    #[test]
    fn contrast_pivots_on_mid_gray() {
        let p = GradingParams { contrast: 100.0, ..Default::default() };
        assert_rgb_eq(grade([0.5, 0.6, 0.3], &p), [0.5, 0.7, 0.1]);

        let flat = GradingParams { contrast: -100.0, ..Default::default() };
        assert_rgb_eq(grade([0.0, 0.6, 1.0], &flat), [0.5, 0.5, 0.5]);
    }

    #[test]
    fn stage_order_is_fixed() {
        // temperature is applied before the exposure gain
        let p = GradingParams { temperature: 50.0, exposure: 50.0, ..Default::default() };
        assert_rgb_eq(grade([0.2, 0.2, 0.2], &p), [0.6, 0.4, 0.2]);
    }

    #[test]
    fn clamps_once_at_the_end() {
        // 0.6 -> 1.2 (exposure) -> 0.85 (contrast); clamping between stages
        // would give 0.75
        let p = GradingParams { exposure: 50.0, contrast: -50.0, ..Default::default() };
        assert_rgb_eq(grade([0.6, 0.6, 0.6], &p), [0.85, 0.85, 0.85]);
    }

    #[test]
    fn unit_scale_conversion() {
        let p = GradingParams::from_unit(1.0, -0.5, 0.25, 0.0);
        assert_eq!(p.exposure, 50.0);
        assert_eq!(p.contrast, -25.0);
        assert_eq!(p.saturation, 12.5);
        assert_eq!(p.temperature, 0.0);
        assert!(!p.is_neutral());
    }

    #[test]
    fn grade_grid_keeps_shape() {
        let lut = Lut3DGrid::identity(5).unwrap().with_title("Base");
        let p = GradingParams { exposure: -50.0, ..Default::default() };
        let graded = grade_grid(&lut, &p);

        assert_eq!(graded.size(), 5);
        assert_eq!(graded.title(), "Base");
        assert_rgb_eq(graded.data()[graded.len() - 1], [0.5, 0.5, 0.5]);
        assert_eq!(lut.data()[lut.len() - 1], [1.0, 1.0, 1.0]);
    }

    #[test]
    fn bake_matches_graded_identity() {
        let p = GradingParams { saturation: 20.0, contrast: 10.0, ..Default::default() };
        let baked = bake(9, &p, "Custom").unwrap();
        let graded = grade_grid(&Lut3DGrid::identity(9).unwrap(), &p);

        assert_eq!(baked.title(), "Custom");
        assert_eq!(baked.data(), graded.data());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn params_from_yaml_default_missing_keys() {
        let p: GradingParams = serde_yaml::from_str("exposure: 10\ntemperature: -5.5\n").unwrap();
        assert_eq!(p, GradingParams { exposure: 10.0, temperature: -5.5, ..Default::default() });
    }
}
