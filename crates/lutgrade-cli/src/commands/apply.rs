//! Apply a LUT and grading to raw RGBA8 pixels.
//!
//! Input and output are headerless interleaved R,G,B,A bytes; the image
//! dimensions come from the command line.

use anyhow::{Context, Result};
use clap::Args;
use lutgrade_ops::transform::{transform, PixelBuffer};
use std::path::PathBuf;
use tracing::info;

use super::GradingArgs;

/// Arguments for the `apply` command.
#[derive(Args)]
pub struct ApplyArgs {
    /// Input raw RGBA8 file
    pub input: PathBuf,

    /// Output raw RGBA8 file
    #[arg(short, long)]
    pub output: PathBuf,

    /// Image width in pixels
    #[arg(short = 'W', long)]
    pub width: usize,

    /// Image height in pixels
    #[arg(short = 'H', long)]
    pub height: usize,

    /// LUT to apply (grading only when omitted)
    #[arg(short, long)]
    pub lut: Option<PathBuf>,

    /// LUT intensity in percent, 0..100
    #[arg(short, long, default_value = "100")]
    pub intensity: f32,

    /// Accept LUTs whose row count does not match LUT_3D_SIZE
    #[arg(long)]
    pub lenient: bool,

    #[command(flatten)]
    pub grading: GradingArgs,
}

pub fn run(args: ApplyArgs) -> Result<()> {
    let params = args.grading.resolve()?;
    let lut = args
        .lut
        .as_deref()
        .map(|path| super::load_cube(path, args.lenient))
        .transpose()?;

    let mut data = std::fs::read(&args.input)
        .with_context(|| format!("Failed to load: {}", args.input.display()))?;

    info!(
        input = %args.input.display(),
        width = args.width,
        height = args.height,
        lut = ?lut.as_ref().map(|l| l.title()),
        "Applying"
    );

    let mut image = PixelBuffer::new(&mut data, args.width, args.height)
        .with_context(|| format!("Bad image size for {}", args.input.display()))?;
    transform(&mut image, lut.as_ref(), args.intensity / 100.0, &params);

    std::fs::write(&args.output, &data)
        .with_context(|| format!("Failed to save: {}", args.output.display()))?;
    Ok(())
}
