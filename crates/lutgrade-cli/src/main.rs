//! lutgrade - 3D LUT and color grading CLI
//!
//! Inspects, generates, blends and bakes `.cube` LUTs, and applies them to
//! raw RGBA8 pixel data.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

use commands::{apply, bake, blend, identity, info, sample};

#[derive(Parser)]
#[command(name = "lutgrade")]
#[command(author, version, about = "3D LUT and color grading tool")]
#[command(long_about = "
Inspect, generate, blend and bake .cube 3D LUTs, and apply them with
color grading to raw interleaved RGBA8 pixel data.

Examples:
  lutgrade info look.cube                      # Show LUT info
  lutgrade identity -s 33 -o identity.cube     # Write an identity LUT
  lutgrade blend identity.cube look.cube -t 0.5 -o half.cube
  lutgrade bake -o warm.cube --temperature 20 --exposure 5
  lutgrade bake -o graded.cube --lut look.cube --preset grade.yaml
  lutgrade sample look.cube 0.5 0.25 0.75
  lutgrade apply frame.rgba -W 1920 -H 1080 -o out.rgba --lut look.cube --intensity 80
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output (-v info, -vv debug, -vvv trace). RUST_LOG overrides.
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Number of threads (0 = auto)
    #[arg(short = 'j', long, global = true, default_value = "0")]
    threads: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Display LUT information
    #[command(visible_alias = "i")]
    Info(info::InfoArgs),

    /// Write an identity LUT
    Identity(identity::IdentityArgs),

    /// Blend two LUTs of the same size
    Blend(blend::BlendArgs),

    /// Bake grading controls into a LUT
    Bake(bake::BakeArgs),

    /// Sample a LUT at one color
    #[command(visible_alias = "s")]
    Sample(sample::SampleArgs),

    /// Apply a LUT and grading to raw RGBA8 pixels
    #[command(visible_alias = "a")]
    Apply(apply::ApplyArgs),
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // Configure thread pool
    if cli.threads > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(cli.threads)
            .build_global()
            .context("Failed to configure thread pool")?;
    }

    match cli.command {
        Commands::Info(args) => info::run(args),
        Commands::Identity(args) => identity::run(args),
        Commands::Blend(args) => blend::run(args),
        Commands::Bake(args) => bake::run(args),
        Commands::Sample(args) => sample::run(args),
        Commands::Apply(args) => apply::run(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_apply_with_negative_grading() {
        let cli = Cli::try_parse_from([
            "lutgrade", "-vv", "apply", "in.rgba", "-o", "out.rgba", "-W", "4", "-H", "2",
            "--exposure", "-20", "--intensity", "75",
        ])
        .expect("parse failed");

        assert_eq!(cli.verbose, 2);
        match cli.command {
            Commands::Apply(args) => {
                assert_eq!(args.width, 4);
                assert_eq!(args.height, 2);
                assert_eq!(args.intensity, 75.0);
                assert_eq!(args.grading.exposure, Some(-20.0));
                assert!(args.lut.is_none());
            }
            _ => panic!("expected apply"),
        }
    }

    #[test]
    fn parses_sample_with_out_of_range_color() {
        let cli = Cli::try_parse_from(["lutgrade", "sample", "look.cube", "-0.5", "0.5", "1.5"])
            .expect("parse failed");
        match cli.command {
            Commands::Sample(args) => assert_eq!(args.rgb, [-0.5, 0.5, 1.5]),
            _ => panic!("expected sample"),
        }
    }

    #[test]
    fn identity_defaults_to_33() {
        let cli = Cli::try_parse_from(["lutgrade", "identity", "-o", "id.cube"]).expect("parse failed");
        match cli.command {
            Commands::Identity(args) => assert_eq!(args.size, 33),
            _ => panic!("expected identity"),
        }
    }
}
