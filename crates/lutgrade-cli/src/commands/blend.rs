//! LUT blend command

use anyhow::Result;
use clap::Args;
use lutgrade_ops::composite::blend_grids;
use std::path::PathBuf;
use tracing::info;

/// Arguments for the `blend` command.
#[derive(Args)]
pub struct BlendArgs {
    /// Base LUT (amount 0)
    pub a: PathBuf,

    /// Target LUT (amount 1)
    pub b: PathBuf,

    /// Output .cube file
    #[arg(short, long)]
    pub output: PathBuf,

    /// Blend amount, 0..1
    #[arg(short = 't', long, default_value = "0.5")]
    pub amount: f32,
}

pub fn run(args: BlendArgs) -> Result<()> {
    let a = super::load_cube(&args.a, false)?;
    let b = super::load_cube(&args.b, false)?;
    info!(a = %args.a.display(), b = %args.b.display(), amount = args.amount, "Blending");

    let blended = blend_grids(&a, &b, args.amount)?;
    super::save_cube(&args.output, &blended)
}
