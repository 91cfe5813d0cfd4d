//! Shared test engine: an in-memory live screen implementing `ScreenEngine`.
//!
//! `GridEngine` is deliberately dumb: no escape parsing, no cursor
//! addressing. Input bytes fill the bottom row left to right and `\n`
//! scrolls, pushing the top row out through the events sink exactly the
//! way a real emulation engine would. Growing the screen pulls rows back
//! from scrollback via `scroll_pop`, shrinking pushes them out, so the
//! session's full callback plumbing is exercised without a VT
//! implementation.

#![allow(dead_code)] // Shared test helper; not every integration test uses every method

use termsurface::{
    Cell, CursorPos, EngineEvents, KeyCode, KeyModifiers, MouseButton, Property, Rect, Rgb,
    ScreenEngine, Style,
};

/// In-memory grid engine for integration tests.
pub struct GridEngine {
    rows: u16,
    cols: u16,
    grid: Vec<Cell>,
    cursor_col: u16,
    default_fg: Rgb,
    default_bg: Rgb,
}

impl GridEngine {
    /// Create an engine whose live screen is `rows` x `cols` of empty cells.
    #[must_use]
    pub fn new(rows: u16, cols: u16) -> Self {
        Self {
            rows,
            cols,
            grid: vec![Cell::default(); rows as usize * cols as usize],
            cursor_col: 0,
            default_fg: Rgb::WHITE,
            default_bg: Rgb::BLACK,
        }
    }

    fn index(&self, row: u16, col: u16) -> usize {
        row as usize * self.cols as usize + col as usize
    }

    /// Place a single cell on the live screen.
    pub fn set_cell(&mut self, row: u16, col: u16, cell: Cell) {
        let idx = self.index(row, col);
        self.grid[idx] = cell;
    }

    /// Write styled text into a row starting at `col`.
    ///
    /// Wide characters occupy their column and the next; the trailing
    /// column gets an empty width-1 cell, matching the engine contract.
    pub fn set_text(&mut self, row: u16, col: u16, text: &str, style: Style) {
        let mut col = col;
        for ch in text.chars() {
            if col >= self.cols {
                break;
            }
            let cell = Cell::new(ch, style);
            let width = cell.width;
            self.set_cell(row, col, cell);
            if width == 2 && col + 1 < self.cols {
                self.set_cell(row, col + 1, Cell::with_width('\0', 1, style));
            }
            col += u16::from(width);
        }
    }

    /// The full content of a live row, for assertions.
    #[must_use]
    pub fn row(&self, row: u16) -> Vec<Cell> {
        (0..self.cols).map(|col| self.cell(row, col)).collect()
    }

    fn scroll_up(&mut self, events: &mut dyn EngineEvents) {
        let top: Vec<Cell> = self.row(0);
        events.scroll_push(&top);

        let cols = self.cols as usize;
        self.grid.copy_within(cols.., 0);
        let len = self.grid.len();
        self.grid[len - cols..].fill(Cell::default());
        self.cursor_col = 0;

        events.damage(Rect::new(0, self.rows, 0, self.cols));
    }

    fn scroll_down(&mut self, events: &mut dyn EngineEvents) {
        let mut popped = vec![Cell::default(); self.cols as usize];
        if !events.scroll_pop(&mut popped) {
            return;
        }

        let cols = self.cols as usize;
        let len = self.grid.len();
        self.grid.copy_within(..len - cols, cols);
        self.grid[..cols].copy_from_slice(&popped);

        events.damage(Rect::new(0, self.rows, 0, self.cols));
    }
}

impl ScreenEngine for GridEngine {
    fn write_input(&mut self, bytes: &[u8], events: &mut dyn EngineEvents) -> usize {
        for &byte in bytes {
            match byte {
                b'\n' => self.scroll_up(events),
                0x07 => events.bell(),
                // Control hooks so tests can drive property tracking.
                0x0E => events.property(&Property::AltScreen(true)),
                0x0F => events.property(&Property::AltScreen(false)),
                0x10 => events.property(&Property::CursorVisible(false)),
                _ => {
                    if self.cursor_col < self.cols {
                        let row = self.rows - 1;
                        let old = CursorPos {
                            row,
                            col: self.cursor_col,
                        };
                        let cell = Cell::new(
                            byte as char,
                            Style::new(self.default_fg.into(), self.default_bg.into()),
                        );
                        self.set_cell(row, old.col, cell);
                        self.cursor_col += 1;
                        let pos = CursorPos {
                            row,
                            col: self.cursor_col,
                        };
                        events.move_cursor(pos, old, true);
                    }
                }
            }
        }
        bytes.len()
    }

    fn set_size(&mut self, rows: u16, cols: u16, events: &mut dyn EngineEvents) {
        // Shrinking pushes rows off the top; growing pulls history back,
        // the way a scroll-region-aware engine behaves.
        while self.rows > rows {
            let top: Vec<Cell> = self.row(0);
            events.scroll_push(&top);
            let c = self.cols as usize;
            self.grid.drain(..c);
            self.rows -= 1;
        }

        if cols != self.cols {
            let mut grid = vec![Cell::default(); self.rows as usize * cols as usize];
            for row in 0..self.rows {
                for col in 0..cols.min(self.cols) {
                    grid[row as usize * cols as usize + col as usize] =
                        self.grid[self.index(row, col)];
                }
            }
            self.grid = grid;
            self.cols = cols;
        }

        while self.rows < rows {
            let c = self.cols as usize;
            // New space opens at the bottom; scroll_down then reclaims a
            // history line into the top row if any is available.
            self.grid.extend(std::iter::repeat_n(Cell::default(), c));
            self.rows += 1;
            self.scroll_down(events);
        }
    }

    fn cell(&self, row: u16, col: u16) -> Cell {
        if row >= self.rows || col >= self.cols {
            return Cell::default();
        }
        self.grid[self.index(row, col)]
    }

    fn palette_color(&self, index: u8) -> Rgb {
        // Deterministic fake palette: slot n resolves to gray level n.
        Rgb::new(index, index, index)
    }

    fn default_colors(&self) -> (Rgb, Rgb) {
        (self.default_fg, self.default_bg)
    }

    fn set_default_colors(&mut self, fg: Rgb, bg: Rgb) {
        self.default_fg = fg;
        self.default_bg = bg;
    }

    fn key(&mut self, key: KeyCode, _mods: KeyModifiers, events: &mut dyn EngineEvents) -> bool {
        let bytes: &[u8] = match key {
            KeyCode::Enter => b"\r",
            KeyCode::Tab => b"\t",
            KeyCode::Backspace => b"\x7f",
            KeyCode::Escape => b"\x1b",
            KeyCode::Up => b"\x1b[A",
            KeyCode::Down => b"\x1b[B",
            KeyCode::Right => b"\x1b[C",
            KeyCode::Left => b"\x1b[D",
            _ => return false,
        };
        events.output(bytes);
        true
    }

    fn character(&mut self, ch: char, _mods: KeyModifiers, events: &mut dyn EngineEvents) -> bool {
        let mut buf = [0u8; 4];
        events.output(ch.encode_utf8(&mut buf).as_bytes());
        true
    }

    fn mouse_move(
        &mut self,
        _row: u16,
        _col: u16,
        _mods: KeyModifiers,
        _events: &mut dyn EngineEvents,
    ) {
    }

    fn mouse_button(
        &mut self,
        button: MouseButton,
        pressed: bool,
        _mods: KeyModifiers,
        events: &mut dyn EngineEvents,
    ) {
        if pressed {
            events.output(&[b'M', button.number()]);
        }
    }
}

/// Build a row of styled cells from text, for push/pop assertions.
#[must_use]
pub fn styled_row(text: &str, style: Style) -> Vec<Cell> {
    text.chars().map(|c| Cell::new(c, style)).collect()
}

/// Build a row of default-styled cells from text.
#[must_use]
pub fn plain_row(text: &str) -> Vec<Cell> {
    styled_row(text, Style::default())
}
