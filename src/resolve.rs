//! Unified position resolution across history and live screen.
//!
//! The host UI addresses cells with a signed row: negative rows reach into
//! scrollback (`row = -1` is the line just above the live screen), rows in
//! `0..rows` hit the live screen, and everything else is out of range.
//!
//! The UI may ask for cells while the engine is mutating state underneath
//! it, so resolution never fails: every request yields a fully-populated,
//! renderable cell. Out-of-range requests degrade to a filler cell and
//! requests past a narrow history line extend it with styled spaces.

use crate::cell::Cell;
use crate::engine::ScreenEngine;
use crate::scrollback::ScrollbackBuffer;

/// Resolves (row, column) addresses to cells, sourcing from scrollback or
/// the engine's live screen.
///
/// Borrows both stores for the duration of a paint pass; construct one per
/// pass (it is two pointers and a row count).
pub struct PositionResolver<'a, E: ?Sized> {
    scrollback: &'a ScrollbackBuffer,
    engine: &'a E,
    rows: u16,
}

impl<'a, E: ScreenEngine + ?Sized> PositionResolver<'a, E> {
    /// Create a resolver over the given stores.
    ///
    /// `rows` is the current live-screen height; rows at or below it are
    /// out of range.
    pub fn new(scrollback: &'a ScrollbackBuffer, engine: &'a E, rows: u16) -> Self {
        Self {
            scrollback,
            engine,
            rows,
        }
    }

    /// Resolve the cell at (`row`, `col`).
    ///
    /// Sourcing variants:
    /// - `row < 0` within history: the stored cell, or a space styled like
    ///   the line's last cell when `col` is past the line's width
    /// - `row < 0` deeper than history, or `row >= rows`: the filler cell
    /// - otherwise: the engine's live cell, returned unchanged
    #[must_use]
    pub fn resolve(&self, row: i32, col: u16) -> Cell {
        if row < 0 {
            let depth = row.unsigned_abs() as usize;
            if depth > self.scrollback.len() {
                return Cell::filler();
            }
            let Some(line) = self.scrollback.line(depth - 1) else {
                return Cell::filler();
            };
            if let Some(cell) = line.cells().get(usize::from(col)) {
                return *cell;
            }
            // Line narrower than the requested column: extend with the
            // last stored cell's style.
            return match line.last() {
                Some(last) => Cell::space(last.style),
                None => Cell::filler(),
            };
        }

        if row >= i32::from(self.rows) {
            return Cell::filler();
        }

        self.engine.cell(row as u16, col)
    }
}
