//! Identity LUT command

use anyhow::Result;
use clap::Args;
use lutgrade_lut::Lut3DGrid;
use std::path::PathBuf;

/// Arguments for the `identity` command.
#[derive(Args)]
pub struct IdentityArgs {
    /// Output .cube file
    #[arg(short, long)]
    pub output: PathBuf,

    /// Cube dimension
    #[arg(short, long, default_value = "33")]
    pub size: usize,

    /// Title written to the file
    #[arg(long)]
    pub title: Option<String>,
}

pub fn run(args: IdentityArgs) -> Result<()> {
    let mut lut = Lut3DGrid::identity(args.size)?;
    if let Some(title) = args.title {
        lut = lut.with_title(title);
    }
    super::save_cube(&args.output, &lut)
}
