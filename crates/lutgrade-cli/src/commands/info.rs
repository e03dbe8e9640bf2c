//! LUT info command

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

/// Arguments for the `info` command.
#[derive(Args)]
pub struct InfoArgs {
    /// Input .cube file(s)
    #[arg(required = true)]
    pub input: Vec<PathBuf>,

    /// Accept LUTs whose row count does not match LUT_3D_SIZE
    #[arg(long)]
    pub lenient: bool,
}

pub fn run(args: InfoArgs) -> Result<()> {
    for path in &args.input {
        let parsed = super::read_cube(path, args.lenient)?;
        let grid = &parsed.grid;
        let report = &parsed.report;

        println!("{}", path.display());
        println!("  Title:    {}", grid.title());
        let size_note = if report.declared_size.is_none() { " (default)" } else { "" };
        println!("  Size:     {}{}", grid.size(), size_note);
        println!("  Rows:     {}", report.rows);
        println!("  Complete: {}", if grid.is_complete() { "yes" } else { "no" });
        if !report.skipped_lines.is_empty() {
            let lines: Vec<String> = report.skipped_lines.iter().map(|n| n.to_string()).collect();
            println!("  Skipped:  {} line(s): {}", lines.len(), lines.join(", "));
        }
    }
    Ok(())
}
