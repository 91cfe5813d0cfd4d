//! The emulation-engine seam.
//!
//! This crate does not parse escape sequences or move cursors; that work
//! belongs to an external terminal-emulation engine (libvterm behind FFI,
//! a pure-Rust VT implementation, or a test fake). [`ScreenEngine`] is the
//! contract such an engine must satisfy, and [`EngineEvents`] is the sink
//! through which it reports screen changes back while processing input.
//!
//! The engine owns the live screen: cursor position, per-cell attributes,
//! the color palette, and the alternate screen. This crate owns everything
//! that happens once a row leaves the live screen.

use crate::cell::Cell;
use crate::color::Rgb;
use crate::input::{KeyCode, KeyModifiers, MouseButton};

/// A rectangular screen region, rows/columns half-open at the end.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Rect {
    pub start_row: u16,
    pub end_row: u16,
    pub start_col: u16,
    pub end_col: u16,
}

impl Rect {
    /// Create a rect from half-open row and column ranges.
    #[must_use]
    pub const fn new(start_row: u16, end_row: u16, start_col: u16, end_col: u16) -> Self {
        Self {
            start_row,
            end_row,
            start_col,
            end_col,
        }
    }
}

/// A cursor position on the live screen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CursorPos {
    pub row: u16,
    pub col: u16,
}

/// A terminal property reported by the engine.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Property {
    /// Cursor visibility (DECTCEM).
    CursorVisible(bool),
    /// Cursor blink state.
    CursorBlink(bool),
    /// Alternate screen active.
    AltScreen(bool),
    /// Window title (OSC 0/2).
    Title(String),
    /// Icon name (OSC 1).
    IconName(String),
    /// Reverse-video screen mode (DECSCNM).
    ReverseVideo(bool),
    /// Cursor shape code.
    CursorShape(u8),
    /// Mouse tracking mode code.
    Mouse(u8),
}

/// Sink for events the engine emits while processing input or resizing.
///
/// The session implements this internally: the two scroll events feed the
/// scrollback buffer, everything else passes through to the host UI. All
/// methods except the scroll pair default to no-ops so test engines only
/// implement what they exercise.
pub trait EngineEvents {
    /// A screen region changed and must be repainted.
    fn damage(&mut self, _rect: Rect) {}

    /// A screen region moved (scroll optimization hint).
    fn move_rect(&mut self, _dest: Rect, _src: Rect) {}

    /// The cursor moved.
    fn move_cursor(&mut self, _pos: CursorPos, _old: CursorPos, _visible: bool) {}

    /// A terminal property changed.
    fn property(&mut self, _prop: &Property) {}

    /// The bell rang.
    fn bell(&mut self) {}

    /// The engine produced pty-bound output bytes (key responses, queries).
    fn output(&mut self, _bytes: &[u8]) {}

    /// A row scrolled off the top of the live screen.
    ///
    /// `cells` is the full row at its width at the time of the scroll.
    fn scroll_push(&mut self, _cells: &[Cell]) {}

    /// The engine wants the most recent history row back (scrolling down,
    /// or the screen grew taller). Fill `cells` and return `true`, or
    /// return `false` when no history is available.
    fn scroll_pop(&mut self, _cells: &mut [Cell]) -> bool {
        false
    }
}

/// The external terminal-emulation engine.
///
/// Entry points that can cause screen changes or produce output take an
/// [`EngineEvents`] sink; the engine must deliver all resulting events
/// before returning. `cell` must be callable at any time and return a
/// fully-populated cell for every in-range position.
pub trait ScreenEngine {
    /// Feed pty output bytes to the emulator. Returns bytes consumed.
    fn write_input(&mut self, bytes: &[u8], events: &mut dyn EngineEvents) -> usize;

    /// Resize the live screen. Rows pushed to or popped from scrollback
    /// during the resize are delivered through `events`.
    fn set_size(&mut self, rows: u16, cols: u16, events: &mut dyn EngineEvents);

    /// Read the live-screen cell at (row, col), `0 <= row < rows`,
    /// `0 <= col < cols`.
    fn cell(&self, row: u16, col: u16) -> Cell;

    /// Resolve a palette slot to an absolute color.
    fn palette_color(&self, index: u8) -> Rgb;

    /// Current default (foreground, background) colors.
    fn default_colors(&self) -> (Rgb, Rgb);

    /// Replace the default colors.
    fn set_default_colors(&mut self, fg: Rgb, bg: Rgb);

    /// Dispatch a non-character key press.
    fn key(&mut self, key: KeyCode, mods: KeyModifiers, events: &mut dyn EngineEvents) -> bool;

    /// Dispatch a character key press.
    fn character(&mut self, ch: char, mods: KeyModifiers, events: &mut dyn EngineEvents) -> bool;

    /// Dispatch a mouse move.
    fn mouse_move(&mut self, row: u16, col: u16, mods: KeyModifiers, events: &mut dyn EngineEvents);

    /// Dispatch a mouse button press or release.
    fn mouse_button(
        &mut self,
        button: MouseButton,
        pressed: bool,
        mods: KeyModifiers,
        events: &mut dyn EngineEvents,
    );
}
