//! Terminal cell type representing a single character position.
//!
//! A [`Cell`] is one column of one row: a code point, its display width,
//! and a [`Style`]. Cells flow through this crate in three ways: the
//! emulation engine produces them for the live screen, the scrollback
//! buffer stores them for history, and the run encoder reads them back
//! out for painting.
//!
//! # Wide Characters
//!
//! A code point may occupy two display columns (CJK, some symbols). The
//! wide cell is stored once, in its leading column; engines report the
//! trailing column as an empty width-1 cell, which is never stored
//! separately.
//!
//! # Examples
//!
//! ```
//! use termsurface::{Cell, Style};
//!
//! let narrow = Cell::new('a', Style::default());
//! assert_eq!(narrow.width, 1);
//!
//! let wide = Cell::new('漢', Style::default());
//! assert_eq!(wide.width, 2);
//!
//! let empty = Cell::default();
//! assert!(empty.is_empty());
//! ```

use crate::style::Style;
use unicode_width::UnicodeWidthChar;

/// A single terminal cell: code point, display width, and style.
///
/// The code point `'\0'` marks an empty cell (nothing to render, also the
/// end-of-content signal for word scans). Width is always 1 or 2.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cell {
    /// The code point, `'\0'` when empty.
    pub code: char,
    /// Display width in columns (1 or 2).
    pub width: u8,
    /// Visual style.
    pub style: Style,
}

impl Cell {
    /// Create a cell from a code point, deriving its display width.
    ///
    /// Zero-width and control code points are clamped to width 1; anything
    /// wider than 2 columns is clamped to 2.
    #[must_use]
    pub fn new(code: char, style: Style) -> Self {
        let width = UnicodeWidthChar::width(code).unwrap_or(1).clamp(1, 2) as u8;
        Self { code, width, style }
    }

    /// Create a cell with an explicit width, as reported by the engine.
    #[must_use]
    pub const fn with_width(code: char, width: u8, style: Style) -> Self {
        Self { code, width, style }
    }

    /// The filler cell returned for out-of-range positions: empty code
    /// point, width 1, default style.
    #[must_use]
    pub fn filler() -> Self {
        Self::default()
    }

    /// A space cell carrying the given style.
    ///
    /// Used to extend a scrollback line that is narrower than the
    /// requested column, so historical rows paint cleanly at the current
    /// viewport width.
    #[must_use]
    pub const fn space(style: Style) -> Self {
        Self::with_width(' ', 1, style)
    }

    /// Check if this cell is empty (code point 0).
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.code == '\0'
    }

    /// Check if this cell occupies two columns.
    #[must_use]
    pub const fn is_wide(&self) -> bool {
        self.width == 2
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            code: '\0',
            width: 1,
            style: Style::default(),
        }
    }
}
