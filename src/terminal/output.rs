//! `OutputBuffer`: Single-syscall output buffer for ANSI sequences.
//!
//! All of a render pass is accumulated here, then flushed in a single
//! `write()` syscall to prevent terminal flickering. Row 1 is the status
//! line; the pixel grid starts at row 2.

use crate::buffer::Cell;
use std::io::Write;

/// Cursor to the top-left of the pixel grid (row 2, column 1).
const FRAME_HOME: &[u8] = b"\x1b[2;1f";
/// Cursor to the status row plus its black-on-white attributes.
const STATUS_HOME: &[u8] = b"\x1b[1;1f\x1b[30;47m";

/// Pre-allocated buffer for building ANSI escape sequences.
#[derive(Debug)]
pub struct OutputBuffer {
    data: Vec<u8>,
}

impl OutputBuffer {
    /// Create a new output buffer with the given capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
        }
    }

    /// Create a buffer sized for a typical terminal frame (64KB).
    pub fn new() -> Self {
        Self::with_capacity(65536)
    }

    /// Clear the buffer for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Get the buffer contents.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Get the buffer length.
    #[inline]
    pub const fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if buffer is empty.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Write a string.
    #[inline]
    pub fn write_str(&mut self, s: &str) {
        self.data.extend_from_slice(s.as_bytes());
    }

    /// Move the cursor to the top-left of the pixel grid.
    #[inline]
    pub fn frame_home(&mut self) {
        self.data.extend_from_slice(FRAME_HOME);
    }

    /// Move the cursor to the status row and select its attributes.
    #[inline]
    pub fn status_home(&mut self) {
        self.data.extend_from_slice(STATUS_HOME);
    }

    /// Append one pixel: the cell's SGR sequence followed by a space glyph.
    #[inline]
    pub fn push_cell(&mut self, cell: Cell) {
        self.data.extend_from_slice(cell.color.sgr().as_bytes());
        self.data.push(b' ');
    }

    /// Flush to a writer in a single syscall.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying writer fails.
    pub fn flush_to<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        writer.write_all(&self.data)?;
        writer.flush()
    }
}

impl Default for OutputBuffer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::Color;

    #[test]
    fn test_cell_encoding() {
        let mut out = OutputBuffer::new();
        out.push_cell(Cell::new(Color::Red));
        assert_eq!(out.as_bytes(), b"\x1b[31;41m ");
    }

    #[test]
    fn test_frame_layout() {
        let mut out = OutputBuffer::new();
        out.frame_home();
        out.push_cell(Cell::new(Color::Black));
        out.status_home();
        out.write_str("ok");

        let bytes = out.as_bytes();
        assert!(bytes.starts_with(b"\x1b[2;1f\x1b[30;40m "));
        assert!(bytes.ends_with(b"\x1b[1;1f\x1b[30;47mok"));
    }

    #[test]
    fn test_clear_reuses_allocation() {
        let mut out = OutputBuffer::with_capacity(128);
        out.write_str("payload");
        assert!(!out.is_empty());
        out.clear();
        assert!(out.is_empty());
        assert_eq!(out.len(), 0);
    }
}
