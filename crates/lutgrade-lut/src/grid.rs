//! 3-dimensional lookup grid.
//!
//! A [`Lut3DGrid`] maps RGB input to RGB output through a cube of color
//! triples. Grids are immutable once built: grading and blending produce a
//! new grid rather than editing one in place.

use crate::{LutError, LutResult};

/// Title used when a grid carries no `TITLE` line.
pub const DEFAULT_TITLE: &str = "Untitled LUT";

/// Title given to grids built by [`Lut3DGrid::identity`].
pub const IDENTITY_TITLE: &str = "Identity LUT";

/// Largest accepted cube dimension (the `.cube` format limit).
pub const MAX_SIZE: usize = 256;

/// A cubic grid of RGB triples plus a display title.
///
/// # Structure
///
/// - `size^3` entries, each an output RGB triple
/// - Flattened R-fastest: `index = r + g*size + b*size²`
/// - Values are finite and non-negative; HDR grids may exceed 1.0
/// - Titles are a single line
///
/// # Example
///
/// ```rust
/// use lutgrade_lut::Lut3DGrid;
///
/// let lut = Lut3DGrid::identity(33).unwrap();
/// let out = lut.sample([0.5, 0.3, 0.2]);
/// assert!((out[0] - 0.5).abs() < 1e-5);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Lut3DGrid {
    size: usize,
    data: Vec<[f32; 3]>,
    title: String,
}

impl Lut3DGrid {
    /// Creates a grid from R-fastest data with exactly `size^3` entries.
    ///
    /// Negative, NaN or infinite components are rejected with
    /// [`LutError::InvalidValue`].
    pub fn new(size: usize, data: Vec<[f32; 3]>) -> LutResult<Self> {
        let expected = entry_count(size)?;
        if data.len() != expected {
            return Err(LutError::SizeMismatch {
                size,
                expected,
                found: data.len(),
            });
        }
        if let Some((idx, rgb)) = data.iter().enumerate().find(|(_, rgb)| !is_valid(rgb)) {
            return Err(LutError::InvalidValue(format!(
                "entry {} is {:?}; components must be finite and non-negative",
                idx, rgb
            )));
        }
        Ok(Self {
            size,
            data,
            title: DEFAULT_TITLE.to_string(),
        })
    }

    /// Creates a grid without checking the row count.
    ///
    /// Only the lenient parse policy builds these; [`is_complete`](Self::is_complete)
    /// reports `false` when the rows do not fill the cube.
    pub(crate) fn new_lenient(size: usize, data: Vec<[f32; 3]>) -> LutResult<Self> {
        entry_count(size)?;
        Ok(Self {
            size,
            data,
            title: DEFAULT_TITLE.to_string(),
        })
    }

    /// Creates a grid by evaluating `f` at every node's normalized coordinate.
    ///
    /// Nodes are visited in storage order (red fastest, then green, then blue).
    /// Negative and NaN outputs are stored as 0.
    pub fn from_fn<F>(size: usize, mut f: F) -> LutResult<Self>
    where
        F: FnMut([f32; 3]) -> [f32; 3],
    {
        let total = entry_count(size)?;
        let scale = (size - 1) as f32;
        let mut data = Vec::new();
        data.try_reserve_exact(total).map_err(|e| {
            LutError::InvalidSize(format!("cannot allocate {} entries: {}", total, e))
        })?;

        for b in 0..size {
            for g in 0..size {
                for r in 0..size {
                    data.push(sanitize(f([r as f32 / scale, g as f32 / scale, b as f32 / scale])));
                }
            }
        }

        Ok(Self {
            size,
            data,
            title: DEFAULT_TITLE.to_string(),
        })
    }

    /// Creates an identity (pass-through) grid.
    ///
    /// ```rust
    /// use lutgrade_lut::Lut3DGrid;
    ///
    /// let lut = Lut3DGrid::identity(17).unwrap();
    /// assert_eq!(lut.data()[1], [1.0 / 16.0, 0.0, 0.0]);
    /// ```
    pub fn identity(size: usize) -> LutResult<Self> {
        Ok(Self::from_fn(size, |rgb| rgb)?.with_title(IDENTITY_TITLE))
    }

    /// Sets the display title. Line breaks are replaced with spaces.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        let title = title.into();
        self.title = if title.contains(['\r', '\n']) {
            title.replace(['\r', '\n'], " ")
        } else {
            title
        };
        self
    }

    /// Cube dimension N.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Flattened color triples in storage order.
    #[inline]
    pub fn data(&self) -> &[[f32; 3]] {
        &self.data
    }

    /// Display title.
    #[inline]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Number of stored triples.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// True when no triples are stored.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// True when the grid holds exactly `size^3` triples.
    pub fn is_complete(&self) -> bool {
        self.size
            .checked_pow(3)
            .is_some_and(|expected| expected == self.data.len())
    }

    /// Flat storage index of grid node (r, g, b).
    #[inline]
    pub fn index(&self, r: usize, g: usize, b: usize) -> usize {
        r + g * self.size + b * self.size * self.size
    }

    /// Triple stored at grid node (r, g, b), if the node exists.
    #[inline]
    pub fn get(&self, r: usize, g: usize, b: usize) -> Option<[f32; 3]> {
        if r >= self.size || g >= self.size || b >= self.size {
            return None;
        }
        self.data.get(self.index(r, g, b)).copied()
    }

    /// Returns a new grid with `f` applied to every stored triple.
    ///
    /// Negative and NaN outputs are stored as 0.
    pub fn map<F>(&self, mut f: F) -> Self
    where
        F: FnMut(&[f32; 3]) -> [f32; 3],
    {
        Self {
            size: self.size,
            data: self.data.iter().map(|rgb| sanitize(f(rgb))).collect(),
            title: self.title.clone(),
        }
    }

    /// Samples the grid with trilinear interpolation.
    ///
    /// See [`crate::sampler::sample`].
    #[inline]
    pub fn sample(&self, rgb: [f32; 3]) -> [f32; 3] {
        crate::sampler::sample(self, rgb)
    }
}

/// Number of entries for a cube of dimension `size`.
fn entry_count(size: usize) -> LutResult<usize> {
    if !(2..=MAX_SIZE).contains(&size) {
        return Err(LutError::InvalidSize(format!(
            "cube dimension must be in 2..={}, got {}",
            MAX_SIZE, size
        )));
    }
    Ok(size * size * size)
}

#[inline]
fn is_valid(rgb: &[f32; 3]) -> bool {
    rgb.iter().all(|v| v.is_finite() && *v >= 0.0)
}

#[inline]
fn sanitize(rgb: [f32; 3]) -> [f32; 3] {
    rgb.map(|v| if v > 0.0 { v.min(f32::MAX) } else { 0.0 })
}
