//! CLI command implementations.

pub mod apply;
pub mod bake;
pub mod blend;
pub mod identity;
pub mod info;
pub mod sample;

use anyhow::{Context, Result};
use clap::Args;
use lutgrade_lut::{cube, Lut3DGrid, ParseOptions, ParsedCube};
use lutgrade_ops::GradingParams;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Grading controls shared by `bake` and `apply`.
///
/// Values from `--preset` are loaded first; explicit flags override them.
#[derive(Args, Debug, Default)]
pub struct GradingArgs {
    /// YAML preset with exposure/contrast/saturation/temperature keys
    #[arg(long)]
    pub preset: Option<PathBuf>,

    /// Exposure, -50..50 (+50 = one stop brighter)
    #[arg(long, allow_negative_numbers = true)]
    pub exposure: Option<f32>,

    /// Contrast around mid gray, -50..50
    #[arg(long, allow_negative_numbers = true)]
    pub contrast: Option<f32>,

    /// Saturation, -50..50 (-50 = grayscale)
    #[arg(long, allow_negative_numbers = true)]
    pub saturation: Option<f32>,

    /// Temperature, -50..50 (+ warm, - cool)
    #[arg(long, allow_negative_numbers = true)]
    pub temperature: Option<f32>,
}

impl GradingArgs {
    /// Merges the preset file (if any) with explicit flags.
    pub fn resolve(&self) -> Result<GradingParams> {
        let mut params = match &self.preset {
            Some(path) => load_preset(path)?,
            None => GradingParams::default(),
        };
        if let Some(v) = self.exposure {
            params.exposure = v;
        }
        if let Some(v) = self.contrast {
            params.contrast = v;
        }
        if let Some(v) = self.saturation {
            params.saturation = v;
        }
        if let Some(v) = self.temperature {
            params.temperature = v;
        }
        debug!(?params, "Resolved grading");
        Ok(params)
    }
}

/// Load grading parameters from a YAML file.
pub fn load_preset(path: &Path) -> Result<GradingParams> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read preset: {}", path.display()))?;
    serde_yaml::from_str(&text).with_context(|| format!("Invalid preset: {}", path.display()))
}

/// Parse options for the `--lenient` flag.
pub fn parse_options(lenient: bool) -> ParseOptions {
    if lenient {
        ParseOptions::lenient()
    } else {
        ParseOptions::default()
    }
}

/// Load a .cube file, reporting skipped lines.
pub fn read_cube(path: &Path, lenient: bool) -> Result<ParsedCube> {
    let parsed = cube::read(path, &parse_options(lenient))
        .with_context(|| format!("Failed to load LUT: {}", path.display()))?;
    if !parsed.report.skipped_lines.is_empty() {
        warn!(
            path = %path.display(),
            skipped = parsed.report.skipped_lines.len(),
            "Ignored unrecognized lines"
        );
    }
    Ok(parsed)
}

/// Load a .cube file as a grid.
pub fn load_cube(path: &Path, lenient: bool) -> Result<Lut3DGrid> {
    read_cube(path, lenient).map(|parsed| parsed.grid)
}

/// Save a grid as a .cube file.
pub fn save_cube(path: &Path, lut: &Lut3DGrid) -> Result<()> {
    cube::write(path, lut).with_context(|| format!("Failed to save: {}", path.display()))?;
    info!(path = %path.display(), size = lut.size(), "Wrote LUT");
    Ok(())
}
