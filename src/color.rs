//! Terminal color types.
//!
//! This module provides two types:
//!
//! - [`Rgb`]: an absolute 24-bit color with named constants, hex parsing,
//!   and ARGB packing for host UIs
//! - [`Color`]: either an absolute [`Rgb`] or a palette slot reference,
//!   resolved lazily against the emulation engine's current palette
//!
//! Palette state is owned by the engine and may change between redraws, so
//! indexed colors are stored unresolved and looked up at encode time.
//!
//! # Examples
//!
//! ```
//! use termsurface::{Color, Rgb};
//!
//! let fg = Color::Rgb(Rgb::from_hex("#c0ffee").unwrap());
//! let bg = Color::Indexed(4);
//!
//! assert!(!fg.is_indexed());
//! assert_eq!(fg.resolve(|_| Rgb::BLACK), Rgb::from_hex("c0ffee").unwrap());
//! assert_eq!(bg.resolve(|idx| Rgb::new(0, 0, idx)), Rgb::new(0, 0, 4));
//! ```

use std::fmt;

/// Absolute 24-bit RGB color.
///
/// Stored as u8 components; this layer performs no blending, so there is no
/// alpha channel. Conversion to packed ARGB is provided for host UIs that
/// paint with 32-bit color values.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Black.
    pub const BLACK: Self = Self::new(0, 0, 0);

    /// White.
    pub const WHITE: Self = Self::new(255, 255, 255);

    /// Red.
    pub const RED: Self = Self::new(255, 0, 0);

    /// Green.
    pub const GREEN: Self = Self::new(0, 255, 0);

    /// Blue.
    pub const BLUE: Self = Self::new(0, 0, 255);

    /// Create a color from u8 components.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a hex color string (e.g., "#FF0000" or "FF0000").
    ///
    /// Supports 3-char (#RGB) and 6-char (#RRGGBB) formats.
    #[must_use]
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);

        match hex.len() {
            3 => {
                let r = u8::from_str_radix(&hex[0..1], 16).ok()?;
                let g = u8::from_str_radix(&hex[1..2], 16).ok()?;
                let b = u8::from_str_radix(&hex[2..3], 16).ok()?;
                Some(Self::new(r * 17, g * 17, b * 17))
            }
            6 => {
                let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
                let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
                let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
                Some(Self::new(r, g, b))
            }
            _ => None,
        }
    }

    /// Pack into an opaque 0xAARRGGBB value.
    #[must_use]
    pub const fn to_argb(self) -> u32 {
        0xFF00_0000 | ((self.r as u32) << 16) | ((self.g as u32) << 8) | (self.b as u32)
    }

    /// Unpack from a 0xAARRGGBB value, discarding alpha.
    #[must_use]
    pub const fn from_argb(argb: u32) -> Self {
        Self::new(
            ((argb >> 16) & 0xFF) as u8,
            ((argb >> 8) & 0xFF) as u8,
            (argb & 0xFF) as u8,
        )
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Cell color: absolute RGB or a palette slot reference.
///
/// Indexed colors refer to the engine's 256-color palette and are resolved
/// at encode time via [`Color::resolve`]. Resolved values are never cached
/// here because the palette can change between scans.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    /// Absolute 24-bit color.
    Rgb(Rgb),
    /// 256-color palette slot.
    Indexed(u8),
}

impl Color {
    /// Check if this is a palette reference.
    #[must_use]
    pub const fn is_indexed(&self) -> bool {
        matches!(self, Self::Indexed(_))
    }

    /// Resolve to an absolute color, consulting `palette` for indexed slots.
    #[must_use]
    pub fn resolve<F>(self, palette: F) -> Rgb
    where
        F: FnOnce(u8) -> Rgb,
    {
        match self {
            Self::Rgb(rgb) => rgb,
            Self::Indexed(idx) => palette(idx),
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::Rgb(Rgb::default())
    }
}

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        Self::Rgb(rgb)
    }
}
