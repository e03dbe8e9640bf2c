//! Caller-owned collection of named grids with a current selection.
//!
//! The engine keeps no process-wide LUT list; a host builds a
//! [`LutLibrary`], adds parsed grids to it and passes
//! [`LutLibrary::selected`] into the image transformer.

use crate::Lut3DGrid;
#[allow(unused_imports)]
use tracing::{debug, trace};

/// Stable handle for a grid in a [`LutLibrary`].
///
/// Ids increase monotonically and are never reused, even after removal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LutId(u64);

impl LutId {
    /// Raw id value.
    pub fn get(self) -> u64 {
        self.0
    }
}

/// A named grid held by a [`LutLibrary`].
#[derive(Debug, Clone)]
pub struct LutEntry {
    /// Handle of this entry.
    pub id: LutId,
    /// Display name (usually the source file stem).
    pub name: String,
    /// The grid.
    pub grid: Lut3DGrid,
}

/// Ordered collection of grids plus an optional selection.
///
/// # Example
///
/// ```rust
/// use lutgrade_lut::{Lut3DGrid, LutLibrary};
///
/// let mut library = LutLibrary::new();
/// let id = library.add("neutral", Lut3DGrid::identity(17).unwrap());
/// assert_eq!(library.selected_id(), Some(id));
/// ```
#[derive(Debug, Clone, Default)]
pub struct LutLibrary {
    entries: Vec<LutEntry>,
    selected: Option<LutId>,
    next_id: u64,
}

impl LutLibrary {
    /// Creates an empty library.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a grid and returns its id.
    ///
    /// When nothing is selected yet the new grid becomes the selection.
    pub fn add(&mut self, name: impl Into<String>, grid: Lut3DGrid) -> LutId {
        let id = LutId(self.next_id);
        self.next_id += 1;

        let name = name.into();
        debug!(id = id.0, name = %name, size = grid.size(), "Adding LUT to library");
        self.entries.push(LutEntry { id, name, grid });

        if self.selected.is_none() {
            self.selected = Some(id);
        }
        id
    }

    /// Removes a grid, clearing the selection if it pointed at it.
    pub fn remove(&mut self, id: LutId) -> Option<Lut3DGrid> {
        let pos = self.entries.iter().position(|e| e.id == id)?;
        if self.selected == Some(id) {
            self.selected = None;
        }
        Some(self.entries.remove(pos).grid)
    }

    /// Selects a grid. Returns `false` (and leaves the selection alone) if
    /// the id is unknown.
    pub fn select(&mut self, id: LutId) -> bool {
        if self.get(id).is_none() {
            return false;
        }
        trace!(id = id.0, "Selecting LUT");
        self.selected = Some(id);
        true
    }

    /// Clears the selection ("no LUT").
    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Id of the selected grid.
    pub fn selected_id(&self) -> Option<LutId> {
        self.selected
    }

    /// The selected grid, or `None` when no LUT is selected.
    pub fn selected(&self) -> Option<&Lut3DGrid> {
        self.selected.and_then(|id| self.get(id))
    }

    /// Looks up a grid by id.
    pub fn get(&self, id: LutId) -> Option<&Lut3DGrid> {
        self.entries.iter().find(|e| e.id == id).map(|e| &e.grid)
    }

    /// Looks up the first grid with the given name.
    pub fn find(&self, name: &str) -> Option<&LutEntry> {
        self.entries.iter().find(|e| e.name == name)
    }

    /// Number of grids.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the library holds no grids.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &LutEntry> {
        self.entries.iter()
    }
}
