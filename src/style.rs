//! Cell styling: attribute flags plus colors.
//!
//! This module provides:
//!
//! - [`CellAttributes`]: bitflags for bold, underline, italic, blink,
//!   reverse video, and strikethrough
//! - [`Style`]: the complete visual style of a cell (colors, attributes,
//!   and alternate-font index)
//!
//! [`Style`] is a structurally-comparable value type: run encoding uses
//! plain `==` on it to decide where a run of visually-identical cells ends.
//!
//! # Examples
//!
//! ```
//! use termsurface::{CellAttributes, Color, Rgb, Style};
//!
//! let plain = Style::default().with_fg(Color::Rgb(Rgb::GREEN));
//! let bold = plain.with_attributes(CellAttributes::BOLD);
//!
//! assert_ne!(plain, bold);
//! assert_eq!(plain, bold.without_attributes(CellAttributes::BOLD));
//! ```

use crate::color::{Color, Rgb};
use bitflags::bitflags;

bitflags! {
    /// Visual attribute flags for a cell.
    ///
    /// Attributes can be combined with bitwise OR. REVERSE swaps the
    /// effective foreground/background at encode time; the stored colors
    /// are left as written.
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
    pub struct CellAttributes: u8 {
        /// Bold/increased intensity.
        const BOLD      = 0x01;
        /// Underlined text.
        const UNDERLINE = 0x02;
        /// Italic (not widely supported).
        const ITALIC    = 0x04;
        /// Blinking text (rarely supported).
        const BLINK     = 0x08;
        /// Swapped foreground/background.
        const REVERSE   = 0x10;
        /// Strikethrough text.
        const STRIKE    = 0x20;
    }
}

/// Complete visual style of a cell.
///
/// Two cells belong to the same run exactly when their styles compare
/// equal. Comparison is structural over the stored values: an indexed
/// color equals the same index, not whatever the palette currently
/// resolves it to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Style {
    /// Foreground color as written by the engine.
    pub fg: Color,
    /// Background color as written by the engine.
    pub bg: Color,
    /// Attribute flags.
    pub attrs: CellAttributes,
    /// Alternate font index (0 = primary font).
    pub font: u8,
}

impl Style {
    /// Create a style with the given colors and no attributes.
    #[must_use]
    pub const fn new(fg: Color, bg: Color) -> Self {
        Self {
            fg,
            bg,
            attrs: CellAttributes::empty(),
            font: 0,
        }
    }

    /// Return a new style with the specified foreground color.
    #[must_use]
    pub const fn with_fg(self, fg: Color) -> Self {
        Self { fg, ..self }
    }

    /// Return a new style with the specified background color.
    #[must_use]
    pub const fn with_bg(self, bg: Color) -> Self {
        Self { bg, ..self }
    }

    /// Return a new style with the given attributes added.
    #[must_use]
    pub const fn with_attributes(self, attrs: CellAttributes) -> Self {
        Self {
            attrs: self.attrs.union(attrs),
            ..self
        }
    }

    /// Return a new style with the given attributes removed.
    #[must_use]
    pub const fn without_attributes(self, attrs: CellAttributes) -> Self {
        Self {
            attrs: self.attrs.difference(attrs),
            ..self
        }
    }

    /// Return a new style with the given alternate-font index.
    #[must_use]
    pub const fn with_font(self, font: u8) -> Self {
        Self { font, ..self }
    }

    /// Effective (foreground, background) pair after applying REVERSE.
    #[must_use]
    pub const fn effective_colors(&self) -> (Color, Color) {
        if self.attrs.contains(CellAttributes::REVERSE) {
            (self.bg, self.fg)
        } else {
            (self.fg, self.bg)
        }
    }
}

impl Default for Style {
    /// White-on-black with no attributes, the filler style used for
    /// out-of-range cells.
    fn default() -> Self {
        Self::new(Color::Rgb(Rgb::WHITE), Color::Rgb(Rgb::BLACK))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_equality_is_structural() {
        let a = Style::new(Color::Indexed(3), Color::Rgb(Rgb::BLACK));
        let b = Style::new(Color::Indexed(3), Color::Rgb(Rgb::BLACK));
        assert_eq!(a, b);

        let c = a.with_fg(Color::Indexed(4));
        assert_ne!(a, c);
    }

    #[test]
    fn test_attribute_difference_breaks_equality() {
        let plain = Style::default();
        assert_ne!(plain, plain.with_attributes(CellAttributes::BLINK));
        assert_ne!(plain, plain.with_font(1));
    }

    #[test]
    fn test_effective_colors_swap_on_reverse() {
        let style = Style::new(Color::Rgb(Rgb::RED), Color::Rgb(Rgb::BLUE));
        assert_eq!(
            style.effective_colors(),
            (Color::Rgb(Rgb::RED), Color::Rgb(Rgb::BLUE))
        );

        let reversed = style.with_attributes(CellAttributes::REVERSE);
        assert_eq!(
            reversed.effective_colors(),
            (Color::Rgb(Rgb::BLUE), Color::Rgb(Rgb::RED))
        );
    }

    #[test]
    fn test_without_attributes() {
        let style = Style::default()
            .with_attributes(CellAttributes::BOLD | CellAttributes::UNDERLINE);
        let stripped = style.without_attributes(CellAttributes::BOLD);
        assert!(!stripped.attrs.contains(CellAttributes::BOLD));
        assert!(stripped.attrs.contains(CellAttributes::UNDERLINE));
    }
}
