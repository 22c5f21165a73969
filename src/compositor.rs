// src/compositor.rs

//! Text to pixel composition.
//!
//! A string becomes one linear buffer: each character is expanded into an
//! 8x8 row-major block of foreground/background values, rotated on its own,
//! and appended after the previous character's block.

use crate::font::GlyphTable;
use crate::glyph::{Glyph, GLYPH_EDGE, GLYPH_PIXELS};
use crate::matrix::{self, Rotation};

/// Appends the 64 pixels of `glyph` to `out`, row by row.
pub fn expand_glyph<C: Copy>(glyph: &Glyph, fore: C, back: C, out: &mut Vec<C>) {
    for &row in glyph.rows() {
        for col in 0..GLYPH_EDGE {
            let lit = row & (0x80u8 >> col) != 0;
            out.push(if lit { fore } else { back });
        }
    }
}

impl GlyphTable {
    /// Expands `text` into `GLYPH_PIXELS * char_count` pixels, one rotated
    /// 8x8 block per character in order.
    pub fn get_pixels<C: Copy>(&self, text: &str, fore: C, back: C, rotation: Rotation) -> Vec<C> {
        let mut pixels = Vec::with_capacity(text.chars().count() * GLYPH_PIXELS);
        for ch in text.chars() {
            let start = pixels.len();
            expand_glyph(&self.get_glyph(ch), fore, back, &mut pixels);
            matrix::rotate(&mut pixels, GLYPH_EDGE, start, rotation);
        }
        pixels
    }
}

/// Reverses the character order of `text`.
///
/// Empty and whitespace-only strings are returned unchanged.
pub fn reverse_text(text: &str) -> String {
    if text.trim().is_empty() {
        return text.to_owned();
    }
    text.chars().rev().collect()
}
