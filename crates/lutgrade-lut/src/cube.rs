//! Adobe/Resolve .cube LUT format support.
//!
//! # Format
//!
//! ```text
//! # Comment
//! TITLE "LUT Name"
//! LUT_3D_SIZE 33
//!
//! 0.000000 0.000000 0.000000
//! ...
//! 1.000000 1.000000 1.000000
//! ```
//!
//! Rows are stored red-fastest, the same order as [`Lut3DGrid`] memory, so
//! no reordering happens on either path.
//!
//! Parsing is forgiving: comments, blank lines and unknown directives are
//! skipped, and the line numbers of skipped non-blank lines are reported in
//! [`ParseReport`]. A row count that does not fill the cube is handled by
//! [`SizeMismatchPolicy`].
//!
//! # Example
//!
//! ```rust
//! use lutgrade_lut::{cube, Lut3DGrid};
//!
//! let lut = Lut3DGrid::identity(2).unwrap().with_title("Neutral");
//! let text = cube::to_string(&lut);
//! let back = cube::parse(&text).unwrap();
//! assert_eq!(back.title(), "Neutral");
//! ```

use crate::{Lut3DGrid, LutResult};
use regex::Regex;
use std::fmt::Write as _;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::sync::OnceLock;
use tracing::{debug, trace, warn};

/// Cube dimension assumed when no `LUT_3D_SIZE` line is present.
pub const DEFAULT_SIZE: usize = 33;

/// What to do when the row count does not equal `size^3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SizeMismatchPolicy {
    /// Fail with [`LutError::SizeMismatch`](crate::LutError::SizeMismatch).
    #[default]
    Strict,
    /// Keep the rows as read. The resulting grid reports
    /// [`Lut3DGrid::is_complete`] as `false` and the sampler substitutes the
    /// input color for missing nodes.
    Lenient,
}

/// Parser configuration.
#[derive(Debug, Clone, Copy, Default)]
pub struct ParseOptions {
    /// Row count policy.
    pub size_mismatch: SizeMismatchPolicy,
}

impl ParseOptions {
    /// Options that accept size-mismatched grids.
    pub fn lenient() -> Self {
        Self {
            size_mismatch: SizeMismatchPolicy::Lenient,
        }
    }
}

/// Diagnostics gathered while parsing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseReport {
    /// 1-based numbers of non-blank, non-comment lines that matched no
    /// directive or data row pattern.
    pub skipped_lines: Vec<usize>,
    /// Size from the `LUT_3D_SIZE` line, if one was read.
    pub declared_size: Option<usize>,
    /// Number of data rows read.
    pub rows: usize,
}

/// A parsed grid plus its diagnostics.
#[derive(Debug, Clone)]
pub struct ParsedCube {
    /// The grid.
    pub grid: Lut3DGrid,
    /// Parse diagnostics.
    pub report: ParseReport,
}

/// Parses .cube text with the strict size policy.
pub fn parse(text: &str) -> LutResult<Lut3DGrid> {
    parse_str(text, &ParseOptions::default()).map(|parsed| parsed.grid)
}

/// Parses .cube bytes. Invalid UTF-8 sequences are replaced, which turns the
/// affected lines into skipped lines rather than failing the parse.
pub fn parse_bytes(bytes: &[u8], options: &ParseOptions) -> LutResult<ParsedCube> {
    parse_str(&String::from_utf8_lossy(bytes), options)
}

/// Parses .cube text.
pub fn parse_str(text: &str, options: &ParseOptions) -> LutResult<ParsedCube> {
    let mut title: Option<String> = None;
    let mut report = ParseReport::default();
    let mut data: Vec<[f32; 3]> = Vec::new();

    for (idx, line) in text.lines().enumerate() {
        let line_no = idx + 1;
        let line = line.trim();

        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if line.starts_with("TITLE") {
            match parse_title(line) {
                Some(t) => title = Some(t),
                None => skip(&mut report, line_no, line),
            }
        } else if line.starts_with("LUT_3D_SIZE") {
            match parse_size(line) {
                Some(size) => report.declared_size = Some(size),
                None => skip(&mut report, line_no, line),
            }
        } else if let Some(rgb) = parse_row(line) {
            data.push(rgb);
        } else {
            skip(&mut report, line_no, line);
        }
    }

    report.rows = data.len();
    let size = report.declared_size.unwrap_or(DEFAULT_SIZE);

    debug!(
        size,
        rows = report.rows,
        skipped = report.skipped_lines.len(),
        "Parsed cube"
    );

    let grid = match options.size_mismatch {
        SizeMismatchPolicy::Strict => Lut3DGrid::new(size, data)?,
        SizeMismatchPolicy::Lenient => {
            let grid = Lut3DGrid::new_lenient(size, data)?;
            if !grid.is_complete() {
                warn!(size, rows = grid.len(), "Accepting size-mismatched cube");
            }
            grid
        }
    };

    let grid = match title {
        Some(t) => grid.with_title(t),
        None => grid,
    };

    Ok(ParsedCube { grid, report })
}

/// Reads a .cube file.
///
/// # Example
///
/// ```rust,ignore
/// let parsed = cube::read("grade.cube", &ParseOptions::default())?;
/// ```
pub fn read<P: AsRef<Path>>(path: P, options: &ParseOptions) -> LutResult<ParsedCube> {
    let bytes = std::fs::read(path.as_ref())?;
    parse_bytes(&bytes, options)
}

/// Writes a grid to a .cube file.
pub fn write<P: AsRef<Path>>(path: P, lut: &Lut3DGrid) -> LutResult<()> {
    let file = File::create(path.as_ref())?;
    let mut writer = BufWriter::new(file);
    write_to(&mut writer, lut)?;
    writer.flush()?;
    Ok(())
}

/// Writes a grid as .cube text to any writer.
pub fn write_to<W: Write>(writer: &mut W, lut: &Lut3DGrid) -> LutResult<()> {
    writer.write_all(to_string(lut).as_bytes())?;
    Ok(())
}

/// Serializes a grid to .cube text.
///
/// Rows are written in storage order with 6 decimal digits.
pub fn to_string(lut: &Lut3DGrid) -> String {
    debug!(size = lut.size(), rows = lut.len(), "Serializing cube");

    // "0.000000 0.000000 0.000000\n" is 27 bytes
    let mut out = String::with_capacity(64 + lut.len() * 27);
    // writing into a String cannot fail
    let _ = writeln!(out, "TITLE \"{}\"", lut.title());
    let _ = writeln!(out, "LUT_3D_SIZE {}", lut.size());
    out.push('\n');

    for rgb in lut.data() {
        let _ = writeln!(
            out,
            "{:.6} {:.6} {:.6}",
            positive_zero(rgb[0]),
            positive_zero(rgb[1]),
            positive_zero(rgb[2])
        );
    }

    out
}

// Helper functions

fn data_row_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^[\d.]+\s+[\d.]+\s+[\d.]+$").expect("data row pattern is valid")
    })
}

fn title_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        // quoted: everything up to the last quote; unquoted: rest of line
        Regex::new(r#"^TITLE\s+(?:"(.*)"|"?(.*\S))$"#).expect("title pattern is valid")
    })
}

fn parse_title(line: &str) -> Option<String> {
    let caps = title_pattern().captures(line)?;
    caps.get(1).or_else(|| caps.get(2)).map(|m| m.as_str().to_string())
}

fn parse_size(line: &str) -> Option<usize> {
    line.split_whitespace().nth(1)?.parse().ok()
}

fn parse_row(line: &str) -> Option<[f32; 3]> {
    if !data_row_pattern().is_match(line) {
        return None;
    }
    let mut parts = line.split_whitespace().map(|p| p.parse::<f32>().ok());
    Some([parts.next()??, parts.next()??, parts.next()??])
}

fn skip(report: &mut ParseReport, line_no: usize, line: &str) {
    trace!(line_no, line, "Skipping unrecognized cube line");
    report.skipped_lines.push(line_no);
}

#[inline]
fn positive_zero(v: f32) -> f32 {
    // -0.0 + 0.0 == +0.0
    v + 0.0
}
