//! Sample a LUT at a single color

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

/// Arguments for the `sample` command.
#[derive(Args)]
pub struct SampleArgs {
    /// Input .cube file
    pub input: PathBuf,

    /// Normalized input color
    #[arg(num_args = 3, value_names = ["R", "G", "B"], required = true, allow_negative_numbers = true)]
    pub rgb: Vec<f32>,

    /// Accept LUTs whose row count does not match LUT_3D_SIZE
    #[arg(long)]
    pub lenient: bool,
}

pub fn run(args: SampleArgs) -> Result<()> {
    let lut = super::load_cube(&args.input, args.lenient)?;
    let rgb = match args.rgb[..] {
        [r, g, b] => [r, g, b],
        _ => anyhow::bail!("Expected 3 values (R G B), got {}", args.rgb.len()),
    };
    let out = lut.sample(rgb);
    println!("{:.6} {:.6} {:.6}", out[0], out[1], out[2]);
    Ok(())
}
