//! Bake grading into a LUT.
//!
//! Grades every node of an input LUT, or of an identity LUT when none is
//! given, and writes the result as .cube.

use anyhow::Result;
use clap::Args;
use lutgrade_ops::grading::{bake, grade_grid};
use std::path::PathBuf;
use tracing::info;

use super::GradingArgs;

/// Title used when baking from scratch without `--title`.
const DEFAULT_BAKE_TITLE: &str = "Custom LUT";

/// Arguments for the `bake` command.
#[derive(Args)]
pub struct BakeArgs {
    /// Output .cube file
    #[arg(short, long)]
    pub output: PathBuf,

    /// LUT to grade (identity when omitted)
    #[arg(short, long)]
    pub lut: Option<PathBuf>,

    /// Cube dimension when no input LUT is given
    #[arg(short, long, default_value = "17")]
    pub size: usize,

    /// Title written to the file
    #[arg(long)]
    pub title: Option<String>,

    #[command(flatten)]
    pub grading: GradingArgs,
}

pub fn run(args: BakeArgs) -> Result<()> {
    let params = args.grading.resolve()?;

    let lut = match &args.lut {
        Some(path) => {
            info!(path = %path.display(), "Grading LUT");
            let graded = grade_grid(&super::load_cube(path, false)?, &params);
            match args.title {
                Some(title) => graded.with_title(title),
                None => graded,
            }
        }
        None => {
            info!(size = args.size, "Baking grading into identity LUT");
            let title = args.title.unwrap_or_else(|| DEFAULT_BAKE_TITLE.to_string());
            bake(args.size, &params, title)?
        }
    };

    super::save_cube(&args.output, &lut)
}
