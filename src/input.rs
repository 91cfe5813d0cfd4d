//! Input forwarding types.
//!
//! Keyboard and mouse events are not interpreted here; the session hands
//! them straight to the emulation engine, which turns them into pty-bound
//! byte sequences. These types exist so hosts dispatch through a typed
//! surface instead of raw engine constants.

use bitflags::bitflags;

bitflags! {
    /// Keyboard modifier flags.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct KeyModifiers: u8 {
        /// Shift key.
        const SHIFT = 0b0000_0001;
        /// Alt/Option key.
        const ALT = 0b0000_0010;
        /// Control key.
        const CTRL = 0b0000_0100;
    }
}

/// A non-character key forwarded to the engine.
///
/// Printable characters go through the session's character dispatch
/// instead, which is why there is no `Char` variant here.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// Enter/Return key.
    Enter,
    /// Tab key.
    Tab,
    /// Backspace key.
    Backspace,
    /// Escape key.
    Escape,
    /// Up arrow key.
    Up,
    /// Down arrow key.
    Down,
    /// Left arrow key.
    Left,
    /// Right arrow key.
    Right,
    /// Insert key.
    Insert,
    /// Delete key.
    Delete,
    /// Home key.
    Home,
    /// End key.
    End,
    /// Page Up key.
    PageUp,
    /// Page Down key.
    PageDown,
    /// Function key (F1-F24).
    F(u8),
    /// Keypad key.
    Keypad(KeypadKey),
}

impl KeyCode {
    /// Check if this is a function key.
    #[must_use]
    pub const fn is_function_key(&self) -> bool {
        matches!(self, Self::F(_))
    }

    /// Check if this is a navigation key (arrows, home, end, page up/down).
    #[must_use]
    pub const fn is_navigation(&self) -> bool {
        matches!(
            self,
            Self::Up
                | Self::Down
                | Self::Left
                | Self::Right
                | Self::Home
                | Self::End
                | Self::PageUp
                | Self::PageDown
        )
    }
}

/// A key on the numeric keypad.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KeypadKey {
    /// Digit key 0-9.
    Digit(u8),
    /// `*` key.
    Multiply,
    /// `+` key.
    Plus,
    /// `,` key.
    Comma,
    /// `-` key.
    Minus,
    /// `.` key.
    Period,
    /// Keypad Enter.
    Enter,
    /// `=` key.
    Equal,
}

/// Mouse button forwarded to the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Left mouse button.
    Left,
    /// Middle mouse button (scroll wheel click).
    Middle,
    /// Right mouse button.
    Right,
    /// Scroll wheel up.
    WheelUp,
    /// Scroll wheel down.
    WheelDown,
}

impl MouseButton {
    /// X10-style button number used on the wire (1-5).
    #[must_use]
    pub const fn number(self) -> u8 {
        match self {
            Self::Left => 1,
            Self::Middle => 2,
            Self::Right => 3,
            Self::WheelUp => 4,
            Self::WheelDown => 5,
        }
    }
}
