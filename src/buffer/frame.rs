//! Frame: One tick's worth of pixels.
//!
//! A frame is a flat, row-major sequence of [`Cell`]s. It carries no
//! dimensions of its own; the simulator sizes it to the current terminal
//! dimensions before every callback invocation, and the renderer trusts
//! whatever length it finds. Helpers that need coordinates take the row
//! width explicitly.

use super::Cell;

/// A row-major grid of cells for one tick.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Frame {
    cells: Vec<Cell>,
}

impl Frame {
    /// Create an empty frame.
    pub const fn new() -> Self {
        Self { cells: Vec::new() }
    }

    /// Create a frame sized for `width * height`, filled with the default
    /// color.
    pub fn sized(width: u16, height: u16) -> Self {
        let mut frame = Self::new();
        frame.resize(width, height);
        frame
    }

    /// Number of cells in the frame.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the frame holds no cells.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The cells, row-major.
    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Mutable access to the cells, row-major.
    #[inline]
    pub fn cells_mut(&mut self) -> &mut [Cell] {
        &mut self.cells
    }

    /// Resize the frame to `width * height` cells.
    ///
    /// Resize policy: flat row-major reinterpretation. The cell sequence is
    /// truncated or extended in place, so indices that survive the resize
    /// keep their values (which shifts their x/y meaning when the width
    /// changes) and newly added cells take the default color. Shrinking
    /// truncates from the tail.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.cells
            .resize(usize::from(width) * usize::from(height), Cell::default());
    }

    /// Fill every cell with `cell`.
    pub fn fill(&mut self, cell: Cell) {
        self.cells.fill(cell);
    }

    /// Get the cell at `(x, y)` for a grid of the given row width.
    ///
    /// Returns `None` when the coordinate falls outside the cell sequence
    /// or past the row width.
    #[inline]
    pub fn get(&self, x: u16, y: u16, width: u16) -> Option<Cell> {
        if x >= width {
            return None;
        }
        self.cells
            .get(usize::from(y) * usize::from(width) + usize::from(x))
            .copied()
    }

    /// Set the cell at `(x, y)` for a grid of the given row width.
    ///
    /// Out-of-bounds coordinates are ignored, so callers can draw without
    /// clamping against a resize that happened mid-tick.
    #[inline]
    pub fn set(&mut self, x: u16, y: u16, width: u16, cell: Cell) {
        if x >= width {
            return;
        }
        let idx = usize::from(y) * usize::from(width) + usize::from(x);
        if let Some(slot) = self.cells.get_mut(idx) {
            *slot = cell;
        }
    }
}
