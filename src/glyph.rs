// src/glyph.rs

//! Defines the `Glyph` type: one 8x8 monochrome character bitmap.
//!
//! A glyph is stored as eight row bytes, top row first. Within a row the
//! most significant bit is the leftmost column (column 0). Font data that
//! ships LSB-first is converted with [`reverse_bits`] on import.

use std::fmt;

/// Width and height of every glyph, in pixels.
pub const GLYPH_EDGE: usize = 8;

/// Number of pixels in one glyph.
pub const GLYPH_PIXELS: usize = GLYPH_EDGE * GLYPH_EDGE;

/// An 8x8 monochrome bitmap, one byte per row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Glyph([u8; GLYPH_EDGE]);

impl Glyph {
    pub const fn new(rows: [u8; GLYPH_EDGE]) -> Self {
        Self(rows)
    }

    /// Builds a glyph from rows whose bit 0 is the leftmost column.
    pub const fn from_lsb_rows(rows: [u8; GLYPH_EDGE]) -> Self {
        let mut out = [0u8; GLYPH_EDGE];
        let mut i = 0;
        while i < GLYPH_EDGE {
            out[i] = reverse_bits(rows[i]);
            i += 1;
        }
        Self(out)
    }

    pub const fn rows(&self) -> &[u8; GLYPH_EDGE] {
        &self.0
    }

    /// Returns true if the pixel at `(row, col)` is lit.
    ///
    /// # Panics
    /// Panics if `row` or `col` is not below [`GLYPH_EDGE`].
    pub fn is_lit(&self, row: usize, col: usize) -> bool {
        assert!(col < GLYPH_EDGE, "glyph column {} out of range", col);
        self.0[row] & (0x80u8 >> col) != 0
    }
}

impl From<[u8; GLYPH_EDGE]> for Glyph {
    fn from(rows: [u8; GLYPH_EDGE]) -> Self {
        Self(rows)
    }
}

impl TryFrom<&[u8]> for Glyph {
    type Error = GlyphError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        let rows: [u8; GLYPH_EDGE] = bytes.try_into().map_err(|_| GlyphError::InvalidLength {
            expected: GLYPH_EDGE,
            actual: bytes.len(),
        })?;
        Ok(Self(rows))
    }
}

impl fmt::Display for Glyph {
    /// Draws the bitmap as eight lines of `#` and `.`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..GLYPH_EDGE {
            for col in 0..GLYPH_EDGE {
                f.write_str(if self.is_lit(row, col) { "#" } else { "." })?;
            }
            if row + 1 < GLYPH_EDGE {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

/// Errors raised when registering glyph data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlyphError {
    /// The bitmap did not contain exactly one byte per row.
    InvalidLength { expected: usize, actual: usize },
}

impl fmt::Display for GlyphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GlyphError::InvalidLength { expected, actual } => write!(
                f,
                "glyph bitmap must be exactly {} bytes, got {}",
                expected, actual
            ),
        }
    }
}

impl std::error::Error for GlyphError {}

/// Reverses the bit order of a byte (bit 0 <-> bit 7, bit 1 <-> bit 6, ...).
pub const fn reverse_bits(value: u8) -> u8 {
    // Spread the byte over five 10-bit groups, mask one bit out of each, then
    // fold the groups back together with a multiply.
    (((value as u64).wrapping_mul(0x8020_0802) & 0x08_8442_2110).wrapping_mul(0x01_0101_0101) >> 32)
        as u8
}
