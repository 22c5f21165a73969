//! Text and series rendering for small square RGB LED matrices.
//!
//! Characters are looked up as 8x8 bitmap glyphs, expanded into color
//! buffers, rotated in quarter turns and scrolled across the display one
//! column or row at a time. The display itself sits behind the
//! [`display::LedMatrix`] trait.

pub mod color;
pub mod compositor;
pub mod config;
pub mod display;
pub mod font;
pub mod glyph;
pub mod matrix;
pub mod scroll;

pub use color::{Color, NamedColor};
pub use display::{LedMatrix, LedMatrixExt};
pub use glyph::{Glyph, GlyphError};
pub use matrix::Rotation;
pub use scroll::{Direction, MessageOptions, SeriesOptions};
