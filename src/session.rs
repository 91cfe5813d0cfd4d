//! Terminal session: scrollback plus an engine handle.
//!
//! [`Session`] is what a host front end actually holds. It owns one
//! [`ScrollbackBuffer`] and one emulation engine, wires the engine's
//! scroll callbacks into the buffer, and exposes the read surface the
//! paint path consumes: cell resolution, run encoding, word boundaries,
//! column snapping, and text extraction. Everything else (damage, cursor
//! moves, properties, bell, pty-bound output) passes through to a
//! [`SessionClient`] untouched.
//!
//! # Threading
//!
//! No locking is provided. Engine mutation (via `write_input`, resize,
//! input dispatch) and resolver reads are safe to interleave in the sense
//! that reads always yield defined cells, but callers who need a
//! consistent snapshot must serialize the two themselves.
//!
//! # Examples
//!
//! ```ignore
//! use termsurface::{CellRun, Session, SessionOptions};
//!
//! let mut session = Session::new(engine, SessionOptions::default())?;
//! session.write_input(b"ls\r\n");
//!
//! let mut run = CellRun::with_capacity(session.cols() as usize);
//! let mut col = 0;
//! while col < session.cols() {
//!     session.encode_run(0, col, &mut run);
//!     // paint run.codes() in run.style() ...
//!     col += run.cols().max(1);
//! }
//! ```

use crate::cell::Cell;
use crate::color::Rgb;
use crate::engine::{CursorPos, EngineEvents, Property, Rect, ScreenEngine};
use crate::error::{Error, Result};
use crate::input::{KeyCode, KeyModifiers, MouseButton};
use crate::log::{LogLevel, emit_log};
use crate::resolve::PositionResolver;
use crate::run::{CellRun, RunEncoder};
use crate::scrollback::ScrollbackBuffer;

/// Host-facing callbacks forwarded from the engine.
///
/// All methods default to no-ops; implement only what the front end
/// paints or reacts to.
pub trait SessionClient {
    /// A screen region changed and must be repainted.
    fn on_damage(&mut self, _rect: Rect) {}

    /// A screen region moved.
    fn on_move_rect(&mut self, _dest: Rect, _src: Rect) {}

    /// The cursor moved.
    fn on_move_cursor(&mut self, _pos: CursorPos, _old: CursorPos, _visible: bool) {}

    /// A terminal property changed.
    fn on_property(&mut self, _prop: &Property) {}

    /// The bell rang.
    fn on_bell(&mut self) {}

    /// The engine produced pty-bound bytes; write them to the pty.
    fn on_output(&mut self, _bytes: &[u8]) {}
}

/// Construction options for a [`Session`].
#[derive(Clone, Copy, Debug)]
pub struct SessionOptions {
    /// Live-screen rows.
    pub rows: u16,
    /// Live-screen columns.
    pub cols: u16,
    /// Scrollback capacity in lines (0 disables scrollback).
    pub scrollback_capacity: usize,
    /// Initial default foreground color.
    pub fg: Rgb,
    /// Initial default background color.
    pub bg: Rgb,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            rows: 24,
            cols: 80,
            scrollback_capacity: 1000,
            fg: Rgb::WHITE,
            bg: Rgb::BLACK,
        }
    }
}

/// Direction of a word-boundary scan.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScanDirection {
    /// Toward column 0.
    Backward,
    /// Toward the end of the row.
    Forward,
}

/// One terminal session: a scrollback buffer and an emulation engine.
pub struct Session<E> {
    engine: E,
    scrollback: ScrollbackBuffer,
    client: Option<Box<dyn SessionClient>>,
    rows: u16,
    cols: u16,
    cursor: CursorPos,
    cursor_visible: bool,
    alt_screen: bool,
}

impl<E: ScreenEngine> Session<E> {
    /// Create a session, sizing the engine and setting its default colors.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] when `rows` or `cols` is 0.
    pub fn new(engine: E, options: SessionOptions) -> Result<Self> {
        if options.rows == 0 || options.cols == 0 {
            return Err(Error::InvalidDimensions {
                rows: options.rows,
                cols: options.cols,
            });
        }

        let mut session = Self {
            engine,
            scrollback: ScrollbackBuffer::new(options.scrollback_capacity),
            client: None,
            rows: options.rows,
            cols: options.cols,
            cursor: CursorPos::default(),
            cursor_visible: true,
            alt_screen: false,
        };
        session.engine.set_default_colors(options.fg, options.bg);
        let (engine, mut sink) = session.engine_and_sink();
        engine.set_size(options.rows, options.cols, &mut sink);
        Ok(session)
    }

    /// Attach the host-facing callback surface.
    pub fn set_client(&mut self, client: Box<dyn SessionClient>) {
        self.client = Some(client);
    }

    /// Live-screen rows.
    #[must_use]
    pub fn rows(&self) -> u16 {
        self.rows
    }

    /// Live-screen columns.
    #[must_use]
    pub fn cols(&self) -> u16 {
        self.cols
    }

    /// Number of lines currently held in scrollback.
    #[must_use]
    pub fn scrollback_len(&self) -> usize {
        self.scrollback.len()
    }

    /// Scrollback capacity in lines.
    #[must_use]
    pub fn scrollback_capacity(&self) -> usize {
        self.scrollback.capacity()
    }

    /// Last cursor position reported by the engine.
    #[must_use]
    pub fn cursor(&self) -> CursorPos {
        self.cursor
    }

    /// Last cursor visibility reported by the engine.
    #[must_use]
    pub fn cursor_visible(&self) -> bool {
        self.cursor_visible
    }

    /// Whether the engine is on the alternate screen.
    #[must_use]
    pub fn alt_screen(&self) -> bool {
        self.alt_screen
    }

    /// Current default (foreground, background) colors.
    #[must_use]
    pub fn default_colors(&self) -> (Rgb, Rgb) {
        self.engine.default_colors()
    }

    /// Replace the engine's default colors.
    pub fn set_default_colors(&mut self, fg: Rgb, bg: Rgb) {
        self.engine.set_default_colors(fg, bg);
    }

    /// Feed pty output bytes to the engine. Returns bytes consumed.
    ///
    /// Scroll traffic triggered by the bytes lands in the scrollback
    /// buffer; all other engine events reach the client before this
    /// returns.
    pub fn write_input(&mut self, bytes: &[u8]) -> usize {
        let (engine, mut sink) = self.engine_and_sink();
        engine.write_input(bytes, &mut sink)
    }

    /// Resize the session.
    ///
    /// The scrollback buffer is resized before the engine so that any
    /// lines the engine pushes or pops while resizing its own screen land
    /// in correctly-sized storage.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] when `rows` or `cols` is 0.
    pub fn resize(&mut self, rows: u16, cols: u16, scrollback_capacity: usize) -> Result<()> {
        if rows == 0 || cols == 0 {
            return Err(Error::InvalidDimensions { rows, cols });
        }
        emit_log(
            LogLevel::Debug,
            &format!("resize {rows}x{cols} scrollback {scrollback_capacity}"),
        );

        self.rows = rows;
        self.cols = cols;
        self.scrollback.resize(scrollback_capacity);

        let (engine, mut sink) = self.engine_and_sink();
        engine.set_size(rows, cols, &mut sink);
        Ok(())
    }

    /// Resolve the cell at (`row`, `col`); negative rows address
    /// scrollback. Never fails: out-of-range positions yield filler.
    #[must_use]
    pub fn cell_at(&self, row: i32, col: u16) -> Cell {
        PositionResolver::new(&self.scrollback, &self.engine, self.rows).resolve(row, col)
    }

    /// Encode one style-merged run starting at (`row`, `start_col`).
    pub fn encode_run(&self, row: i32, start_col: u16, run: &mut CellRun) {
        RunEncoder::new(&self.scrollback, &self.engine, self.rows, self.cols)
            .encode(row, start_col, run);
    }

    /// Walk from (`row`, `col`) to the nearest word boundary.
    ///
    /// Scans cell-by-cell until a space (the boundary is before it going
    /// forward, after it going backward) or an empty cell (end of
    /// content; the boundary is at it). Clamps to 0 on the left and to
    /// `cols` on the right.
    #[must_use]
    pub fn word_boundary(&self, row: i32, col: u16, dir: ScanDirection) -> u16 {
        let resolver = PositionResolver::new(&self.scrollback, &self.engine, self.rows);
        let step: i32 = match dir {
            ScanDirection::Forward => 1,
            ScanDirection::Backward => -1,
        };

        let mut col = i32::from(col);
        while col >= 0 && col < i32::from(self.cols) {
            let cell = resolver.resolve(row, col as u16);
            if cell.code == ' ' {
                return if step > 0 { col as u16 } else { (col + 1) as u16 };
            }
            if cell.code == '\0' {
                return col as u16;
            }
            col += step;
        }
        if col < 0 { 0 } else { col as u16 }
    }

    /// Snap `col` out of the interior of a wide cell.
    ///
    /// Walks the row from column 0 summing widths. A hit strictly inside
    /// a wide cell's two-column span snaps to the span's end column;
    /// exact span boundaries come back unchanged.
    #[must_use]
    pub fn valid_column(&self, row: i32, col: u16) -> u16 {
        let resolver = PositionResolver::new(&self.scrollback, &self.engine, self.rows);

        let mut pos = 0u16;
        while pos < self.cols {
            let cell = resolver.resolve(row, pos);
            let end = pos + u16::from(cell.width.max(1));
            if pos < col && col < end {
                return end;
            }
            if end == col {
                return col;
            }
            pos = end;
        }
        col
    }

    /// Collect the code points of row `row` between `start_col` and
    /// `end_col` (half-open), appending to `out`.
    ///
    /// Empty cells (and the trailing halves of wide characters, which
    /// engines report as empty) are skipped; the scan advances by each
    /// cell's display width. Returns the number of code points appended.
    pub fn line_chars(&self, row: i32, start_col: u16, end_col: u16, out: &mut Vec<char>) -> usize {
        let resolver = PositionResolver::new(&self.scrollback, &self.engine, self.rows);
        let before = out.len();

        let mut col = start_col;
        while col < end_col {
            let cell = resolver.resolve(row, col);
            if cell.code != '\0' {
                out.push(cell.code);
            }
            col += u16::from(cell.width.max(1));
        }
        out.len() - before
    }

    /// Extract the text of a rectangular-ish selection as a string.
    ///
    /// Rows are clamped to `[-scrollback_len, rows)` and columns to the
    /// screen width. The first row starts at `start_col`, the last ends
    /// at `end_col`, and rows in between span the full width. A newline
    /// is appended after every row whose window runs to the right edge.
    #[must_use]
    pub fn text(&self, start_row: i32, start_col: u16, end_row: i32, end_col: u16) -> String {
        let deepest = -(self.scrollback.len() as i32);
        let start_row = start_row.max(deepest);
        let end_row = end_row.min(i32::from(self.rows) - 1);
        let end_col = end_col.min(self.cols);

        let mut chars = Vec::new();
        let mut text = String::new();
        for row in start_row..=end_row {
            let col1 = if row == start_row { start_col } else { 0 };
            let col2 = if row == end_row { end_col } else { self.cols };
            if col2 <= col1 {
                continue;
            }

            chars.clear();
            self.line_chars(row, col1, col2, &mut chars);
            text.extend(chars.iter());
            if col2 == self.cols {
                text.push('\n');
            }
        }
        text
    }

    /// Dispatch a non-character key press to the engine.
    pub fn dispatch_key(&mut self, key: KeyCode, mods: KeyModifiers) -> bool {
        let (engine, mut sink) = self.engine_and_sink();
        engine.key(key, mods, &mut sink)
    }

    /// Dispatch a character key press to the engine.
    pub fn dispatch_character(&mut self, ch: char, mods: KeyModifiers) -> bool {
        let (engine, mut sink) = self.engine_and_sink();
        engine.character(ch, mods, &mut sink)
    }

    /// Dispatch a mouse move to the engine.
    pub fn mouse_move(&mut self, row: u16, col: u16, mods: KeyModifiers) {
        let (engine, mut sink) = self.engine_and_sink();
        engine.mouse_move(row, col, mods, &mut sink);
    }

    /// Dispatch a mouse button press or release to the engine.
    pub fn mouse_button(&mut self, button: MouseButton, pressed: bool, mods: KeyModifiers) {
        let (engine, mut sink) = self.engine_and_sink();
        engine.mouse_button(button, pressed, mods, &mut sink);
    }

    /// Borrow the engine.
    #[must_use]
    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Split-borrow the engine alongside the event sink that feeds the
    /// scrollback buffer and tracked state.
    fn engine_and_sink(&mut self) -> (&mut E, EventSink<'_>) {
        (
            &mut self.engine,
            EventSink {
                scrollback: &mut self.scrollback,
                client: self.client.as_deref_mut(),
                cursor: &mut self.cursor,
                cursor_visible: &mut self.cursor_visible,
                alt_screen: &mut self.alt_screen,
            },
        )
    }

    /// Borrow the scrollback buffer.
    #[must_use]
    pub fn scrollback(&self) -> &ScrollbackBuffer {
        &self.scrollback
    }
}

/// The session's internal [`EngineEvents`] sink: scroll traffic feeds the
/// scrollback buffer, cursor/property state is tracked, everything else
/// passes through to the client.
struct EventSink<'a> {
    scrollback: &'a mut ScrollbackBuffer,
    client: Option<&'a mut (dyn SessionClient + 'static)>,
    cursor: &'a mut CursorPos,
    cursor_visible: &'a mut bool,
    alt_screen: &'a mut bool,
}

impl EngineEvents for EventSink<'_> {
    fn damage(&mut self, rect: Rect) {
        if let Some(client) = self.client.as_deref_mut() {
            client.on_damage(rect);
        }
    }

    fn move_rect(&mut self, dest: Rect, src: Rect) {
        if let Some(client) = self.client.as_deref_mut() {
            client.on_move_rect(dest, src);
        }
    }

    fn move_cursor(&mut self, pos: CursorPos, old: CursorPos, visible: bool) {
        *self.cursor = pos;
        if let Some(client) = self.client.as_deref_mut() {
            client.on_move_cursor(pos, old, visible);
        }
    }

    fn property(&mut self, prop: &Property) {
        match prop {
            Property::CursorVisible(visible) => *self.cursor_visible = *visible,
            Property::AltScreen(active) => *self.alt_screen = *active,
            _ => {}
        }
        if let Some(client) = self.client.as_deref_mut() {
            client.on_property(prop);
        }
    }

    fn bell(&mut self) {
        if let Some(client) = self.client.as_deref_mut() {
            client.on_bell();
        }
    }

    fn output(&mut self, bytes: &[u8]) {
        if let Some(client) = self.client.as_deref_mut() {
            client.on_output(bytes);
        }
    }

    fn scroll_push(&mut self, cells: &[Cell]) {
        self.scrollback.push(cells);
    }

    fn scroll_pop(&mut self, cells: &mut [Cell]) -> bool {
        self.scrollback.pop(cells)
    }
}
