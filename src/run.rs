//! Run-length style-merged encoding for painting.
//!
//! Painting cell-by-cell is too slow for a redraw loop; the encoder
//! collapses a maximal span of visually-identical cells into one
//! [`CellRun`]: the code points, their display widths, and a single
//! resolved style the UI applies to the whole span. A row paints as a
//! handful of runs instead of `cols` individual cells.
//!
//! # Examples
//!
//! ```
//! use termsurface::{CellRun, ScrollbackBuffer, RunEncoder};
//! # use termsurface::{Cell, Rgb, Style};
//! # use termsurface::{EngineEvents, KeyCode, KeyModifiers, MouseButton, ScreenEngine};
//! # struct Blank;
//! # impl ScreenEngine for Blank {
//! #     fn write_input(&mut self, b: &[u8], _: &mut dyn EngineEvents) -> usize { b.len() }
//! #     fn set_size(&mut self, _: u16, _: u16, _: &mut dyn EngineEvents) {}
//! #     fn cell(&self, _: u16, _: u16) -> Cell { Cell::new('x', Style::default()) }
//! #     fn palette_color(&self, _: u8) -> Rgb { Rgb::BLACK }
//! #     fn default_colors(&self) -> (Rgb, Rgb) { (Rgb::WHITE, Rgb::BLACK) }
//! #     fn set_default_colors(&mut self, _: Rgb, _: Rgb) {}
//! #     fn key(&mut self, _: KeyCode, _: KeyModifiers, _: &mut dyn EngineEvents) -> bool { true }
//! #     fn character(&mut self, _: char, _: KeyModifiers, _: &mut dyn EngineEvents) -> bool { true }
//! #     fn mouse_move(&mut self, _: u16, _: u16, _: KeyModifiers, _: &mut dyn EngineEvents) {}
//! #     fn mouse_button(&mut self, _: MouseButton, _: bool, _: KeyModifiers, _: &mut dyn EngineEvents) {}
//! # }
//! let scrollback = ScrollbackBuffer::new(10);
//! let engine = Blank;
//! let encoder = RunEncoder::new(&scrollback, &engine, 24, 80);
//!
//! let mut run = CellRun::with_capacity(80);
//! encoder.encode(0, 0, &mut run);
//! assert_eq!(run.len(), 80);
//! assert_eq!(run.cols(), 80);
//! ```

use crate::cell::Cell;
use crate::color::Rgb;
use crate::engine::ScreenEngine;
use crate::resolve::PositionResolver;
use crate::scrollback::ScrollbackBuffer;
use crate::style::{CellAttributes, Style};

/// The resolved style shared by every cell in a run.
///
/// Colors are absolute: reverse video is already applied and indexed
/// colors are resolved against the engine palette at encode time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunStyle {
    /// Effective foreground color.
    pub fg: Rgb,
    /// Effective background color.
    pub bg: Rgb,
    /// Bold/increased intensity.
    pub bold: bool,
    /// Underlined text.
    pub underline: bool,
    /// Strikethrough text.
    pub strike: bool,
}

impl Default for RunStyle {
    fn default() -> Self {
        Self {
            fg: Rgb::WHITE,
            bg: Rgb::BLACK,
            bold: false,
            underline: false,
            strike: false,
        }
    }
}

/// Caller-owned, bounded output of one encode pass.
///
/// The backing arrays are allocated once at construction and reused
/// across passes; encoding never allocates. One slot holds one code
/// point, so a run of wide characters covers more columns than it has
/// slots.
#[derive(Clone, Debug)]
pub struct CellRun {
    codes: Vec<char>,
    widths: Vec<u8>,
    len: usize,
    cols: u16,
    style: RunStyle,
}

impl CellRun {
    /// Create a run buffer able to hold `capacity` code points.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            codes: vec!['\0'; capacity],
            widths: vec![0; capacity],
            len: 0,
            cols: 0,
            style: RunStyle::default(),
        }
    }

    /// Maximum number of code points one encode pass can emit.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.codes.len()
    }

    /// Number of code points emitted by the last encode pass.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the last encode pass emitted nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Total display columns covered by the emitted code points.
    ///
    /// At least [`len`](Self::len); greater exactly when wide characters
    /// were emitted.
    #[must_use]
    pub fn cols(&self) -> u16 {
        self.cols
    }

    /// The emitted code points.
    #[must_use]
    pub fn codes(&self) -> &[char] {
        &self.codes[..self.len]
    }

    /// Display width of each emitted code point, parallel to
    /// [`codes`](Self::codes).
    #[must_use]
    pub fn widths(&self) -> &[u8] {
        &self.widths[..self.len]
    }

    /// The run's resolved style.
    #[must_use]
    pub fn style(&self) -> &RunStyle {
        &self.style
    }

    fn reset(&mut self) {
        self.len = 0;
        self.cols = 0;
    }
}

/// Scans cells via a [`PositionResolver`] and merges them into runs.
pub struct RunEncoder<'a, E: ?Sized> {
    resolver: PositionResolver<'a, E>,
    engine: &'a E,
    cols: u16,
}

impl<'a, E: ScreenEngine + ?Sized> RunEncoder<'a, E> {
    /// Create an encoder over the given stores and screen dimensions.
    pub fn new(scrollback: &'a ScrollbackBuffer, engine: &'a E, rows: u16, cols: u16) -> Self {
        Self {
            resolver: PositionResolver::new(scrollback, engine, rows),
            engine,
            cols,
        }
    }

    /// Encode one run starting at (`row`, `start_col`) into `run`.
    ///
    /// The first cell scanned fixes the run style; scanning stops without
    /// consuming the first cell whose stored style differs, when the
    /// output is full, or at the end of the row. A zero-capacity `run`
    /// yields zero results (the style summary is still that of the first
    /// cell).
    pub fn encode(&self, row: i32, start_col: u16, run: &mut CellRun) {
        run.reset();

        let mut col = start_col;
        let mut reference: Option<Style> = None;

        while col < self.cols {
            let cell = self.resolver.resolve(row, col);

            match reference {
                None => {
                    run.style = self.resolve_style(&cell);
                    reference = Some(cell.style);
                }
                Some(first) => {
                    if cell.style != first {
                        break;
                    }
                }
            }

            if run.len == run.capacity() {
                break;
            }

            let width = cell.width.max(1);
            run.codes[run.len] = cell.code;
            run.widths[run.len] = width;
            run.len += 1;
            run.cols += u16::from(width);
            col += u16::from(width);
        }
    }

    /// Resolve a cell's stored style to the absolute form handed to the
    /// painter: reverse swap first, then palette lookup per color.
    fn resolve_style(&self, cell: &Cell) -> RunStyle {
        let (fg, bg) = cell.style.effective_colors();
        RunStyle {
            fg: fg.resolve(|idx| self.engine.palette_color(idx)),
            bg: bg.resolve(|idx| self.engine.palette_color(idx)),
            bold: cell.style.attrs.contains(CellAttributes::BOLD),
            underline: cell.style.attrs.contains(CellAttributes::UNDERLINE),
            strike: cell.style.attrs.contains(CellAttributes::STRIKE),
        }
    }
}
