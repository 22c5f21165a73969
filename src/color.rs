// src/color.rs

//! Defines color-related enums (`NamedColor`, `Color`) used for LED pixels.
//!
//! The LED matrix only understands 24-bit RGB. Named colors exist so that
//! configuration files and demos can say `"Blue"` instead of spelling out
//! triples; they are resolved to RGB right before a frame is written.

use serde::{Deserialize, Serialize};

/// A small palette of named colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NamedColor {
    Black,
    White,
    Red,
    Green,
    Blue,
    Yellow,
    Magenta,
    Cyan,
    DarkRed,
    DarkBlue,
}

impl NamedColor {
    /// Returns the RGB components of this named color.
    /// Values follow the common web/System.Drawing definitions.
    pub const fn to_rgb(self) -> (u8, u8, u8) {
        match self {
            NamedColor::Black => (0, 0, 0),
            NamedColor::White => (255, 255, 255),
            NamedColor::Red => (255, 0, 0),
            NamedColor::Green => (0, 128, 0),
            NamedColor::Blue => (0, 0, 255),
            NamedColor::Yellow => (255, 255, 0),
            NamedColor::Magenta => (255, 0, 255),
            NamedColor::Cyan => (0, 255, 255),
            NamedColor::DarkRed => (139, 0, 0),
            NamedColor::DarkBlue => (0, 0, 139),
        }
    }
}

/// A single LED color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    /// One of the named palette entries.
    Named(NamedColor),
    /// An RGB true color, with each component from 0 to 255.
    Rgb(u8, u8, u8),
}

impl Color {
    pub const BLACK: Color = Color::Named(NamedColor::Black);
    pub const WHITE: Color = Color::Named(NamedColor::White);

    /// Resolves the color to its `(r, g, b)` components.
    pub const fn to_rgb_tuple(self) -> (u8, u8, u8) {
        match self {
            Color::Named(named) => named.to_rgb(),
            Color::Rgb(r, g, b) => (r, g, b),
        }
    }
}

impl Default for Color {
    /// Black, i.e. an unlit LED.
    fn default() -> Self {
        Color::BLACK
    }
}

impl From<NamedColor> for Color {
    fn from(named: NamedColor) -> Self {
        Color::Named(named)
    }
}

impl From<(u8, u8, u8)> for Color {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Color::Rgb(r, g, b)
    }
}
