//! Scrollback buffer: rows that have scrolled off the live screen.
//!
//! Rows are stored most-recent-first: index 0 is the line adjacent to the
//! top of the live screen, index `len - 1` the oldest retained line. The
//! buffer is a bounded deque of owned fixed-width row buffers; pushing at
//! capacity evicts the oldest line and reuses its storage when the widths
//! match, so steady-state scrolling allocates nothing.
//!
//! A line's width is fixed when it is captured. After a terminal resize
//! the buffer holds lines of mixed widths; the position resolver extends
//! narrow lines at paint time rather than rewriting history.
//!
//! # Examples
//!
//! ```
//! use termsurface::{Cell, ScrollbackBuffer, Style};
//!
//! let mut sb = ScrollbackBuffer::new(100);
//! let row: Vec<Cell> = "hello".chars().map(|c| Cell::new(c, Style::default())).collect();
//! sb.push(&row);
//!
//! assert_eq!(sb.len(), 1);
//! assert_eq!(sb.line(0).unwrap().cells()[0].code, 'h');
//! ```

use std::collections::VecDeque;

use crate::cell::Cell;

/// A single stored scrollback row.
///
/// The cell array is exclusively owned by the buffer slot holding it and
/// its length never changes after creation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScrollbackLine {
    cells: Box<[Cell]>,
}

impl ScrollbackLine {
    /// Create a line of `cols` default cells.
    fn new(cols: usize) -> Self {
        Self {
            cells: vec![Cell::default(); cols].into_boxed_slice(),
        }
    }

    /// Number of columns stored in this line.
    #[must_use]
    pub fn cols(&self) -> usize {
        self.cells.len()
    }

    /// The stored cells.
    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// The last stored cell, used to extend the line past its width.
    #[must_use]
    pub fn last(&self) -> Option<&Cell> {
        self.cells.last()
    }

    /// Overwrite from `cells`, copying at most `min(self.cols, cells.len())`.
    /// Excess destination columns keep their previous contents.
    fn copy_from(&mut self, cells: &[Cell]) -> usize {
        let n = self.cells.len().min(cells.len());
        self.cells[..n].copy_from_slice(&cells[..n]);
        n
    }

    /// Copy out into `out`, at most `min(self.cols, out.len())` cells.
    /// Returns the number copied; the caller blanks the rest.
    fn copy_to(&self, out: &mut [Cell]) -> usize {
        let n = self.cells.len().min(out.len());
        out[..n].copy_from_slice(&self.cells[..n]);
        n
    }
}

/// Bounded most-recent-first collection of [`ScrollbackLine`].
///
/// A capacity of 0 disables scrollback: pushes are dropped and pops always
/// report empty.
#[derive(Clone, Debug)]
pub struct ScrollbackBuffer {
    lines: VecDeque<ScrollbackLine>,
    capacity: usize,
}

impl ScrollbackBuffer {
    /// Create an empty buffer with the given line capacity.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            lines: VecDeque::with_capacity(capacity.min(4096)),
            capacity,
        }
    }

    /// Maximum number of lines this buffer can hold.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Current number of stored lines.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether no lines are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Get a stored line by index (0 = most recent).
    #[must_use]
    pub fn line(&self, index: usize) -> Option<&ScrollbackLine> {
        self.lines.get(index)
    }

    /// Insert a row at index 0.
    ///
    /// At capacity the oldest line is evicted first; its storage is reused
    /// when its width equals `cells.len()`. The recycled path copies only
    /// the overlapping columns, so it is observably identical to a fresh
    /// allocation.
    pub fn push(&mut self, cells: &[Cell]) {
        if self.capacity == 0 {
            return;
        }

        let recycled = if self.lines.len() == self.capacity {
            self.lines
                .pop_back()
                .filter(|line| line.cols() == cells.len())
        } else {
            None
        };

        let mut line = recycled.unwrap_or_else(|| ScrollbackLine::new(cells.len()));
        line.copy_from(cells);
        self.lines.push_front(line);
    }

    /// Remove the most recent row, copying it into `out`.
    ///
    /// Returns `false` without touching `out` when the buffer is empty.
    /// Requested columns beyond the stored width are blanked (code point
    /// 0, width 1) so the engine always receives a clean row; note the
    /// asymmetry with `push`, which leaves excess columns untouched.
    pub fn pop(&mut self, out: &mut [Cell]) -> bool {
        let Some(line) = self.lines.pop_front() else {
            return false;
        };

        let n = line.copy_to(out);
        for cell in &mut out[n..] {
            cell.code = '\0';
            cell.width = 1;
        }
        true
    }

    /// Change capacity, preserving as much history as possible.
    ///
    /// Shrinking discards the oldest lines; growing keeps everything.
    /// Stored cell contents are never touched. A grow followed by a
    /// shrink back to the original capacity, with no pushes or pops in
    /// between, restores the original contents exactly.
    pub fn resize(&mut self, new_capacity: usize) {
        if new_capacity == self.capacity {
            return;
        }
        while self.lines.len() > new_capacity {
            self.lines.pop_back();
        }
        self.capacity = new_capacity;
    }
}
