// src/font/mod.rs

//! Glyph lookup and registration.
//!
//! `GlyphTable` maps full Unicode code points to 8x8 glyphs. Lookups never
//! fail: characters without an entry resolve to the fallback glyph (`'?'`
//! in the built-in font). Entries can be added or overridden at run time,
//! last write wins.
//!
//! The process-wide table lives in [`FONT`]. It is seeded from the built-in
//! font on first use and guarded by an `RwLock`, so registrations from one
//! thread are visible to lookups on any other.

pub mod font8x8;

#[cfg(test)]
mod tests;

use crate::glyph::{Glyph, GlyphError};
use crate::matrix::Rotation;
use log::{debug, trace};
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

/// Code point the fallback glyph is registered under.
pub const FALLBACK_CHAR: char = '?';

/// Reserved slot in the Greek block.
const UNASSIGNED_GREEK: char = '\u{3A2}';

/// Mapping from character to glyph, with a fallback for unknown characters.
#[derive(Debug, Clone)]
pub struct GlyphTable {
    glyphs: HashMap<char, Glyph>,
    fallback: Glyph,
}

impl GlyphTable {
    /// Creates a table whose only entry is `fallback`, registered as `'?'`.
    pub fn new(fallback: Glyph) -> Self {
        let mut glyphs = HashMap::new();
        glyphs.insert(FALLBACK_CHAR, fallback);
        Self { glyphs, fallback }
    }

    /// Creates a table holding the built-in font.
    pub fn with_default_font() -> Self {
        let ascii = (' '..='~').zip(font8x8::PRINTABLE_ASCII.iter());
        let latin1 = ('\u{A0}'..='\u{FF}').zip(font8x8::LATIN1_SUPPLEMENT.iter());
        let greek = ('\u{390}'..='\u{3C9}')
            .zip(font8x8::GREEK.iter())
            .filter(|&(ch, _)| ch != UNASSIGNED_GREEK);

        let glyphs: HashMap<char, Glyph> = ascii
            .chain(latin1)
            .chain(greek)
            .map(|(ch, rows)| (ch, Glyph::from_lsb_rows(*rows)))
            .collect();
        let fallback = glyphs[&FALLBACK_CHAR];
        debug!("GlyphTable: loaded {} built-in glyphs", glyphs.len());
        Self { glyphs, fallback }
    }

    /// Resolves `ch` to its glyph, or the fallback glyph if it has no entry.
    pub fn get_glyph(&self, ch: char) -> Glyph {
        match self.glyphs.get(&ch) {
            Some(glyph) => *glyph,
            None => {
                trace!("GlyphTable: no glyph for U+{:04X}, using fallback", ch as u32);
                self.fallback
            }
        }
    }

    /// Registers or replaces the glyph for `ch`.
    ///
    /// Overriding `'?'` also replaces the fallback glyph.
    pub fn add_glyph(&mut self, ch: char, glyph: Glyph) {
        if ch == FALLBACK_CHAR {
            self.fallback = glyph;
        }
        if self.glyphs.insert(ch, glyph).is_some() {
            debug!("GlyphTable: replaced glyph for U+{:04X}", ch as u32);
        } else {
            debug!("GlyphTable: added glyph for U+{:04X}", ch as u32);
        }
    }

    /// Registers a glyph from raw row bytes, rejecting anything but 8 bytes.
    pub fn add_glyph_bytes(&mut self, ch: char, rows: &[u8]) -> Result<(), GlyphError> {
        let glyph = Glyph::try_from(rows)?;
        self.add_glyph(ch, glyph);
        Ok(())
    }

    /// True if `ch` has its own entry (the fallback does not count for other characters).
    pub fn contains(&self, ch: char) -> bool {
        self.glyphs.contains_key(&ch)
    }

    pub fn fallback(&self) -> Glyph {
        self.fallback
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }
}

impl Default for GlyphTable {
    fn default() -> Self {
        Self::with_default_font()
    }
}

/// The process-wide glyph table.
pub static FONT: Lazy<RwLock<GlyphTable>> =
    Lazy::new(|| RwLock::new(GlyphTable::with_default_font()));

/// Runs `f` with shared access to the process-wide table.
pub fn with_font<R>(f: impl FnOnce(&GlyphTable) -> R) -> R {
    let table = FONT.read().unwrap_or_else(PoisonError::into_inner);
    f(&table)
}

/// Runs `f` with exclusive access to the process-wide table.
pub fn with_font_mut<R>(f: impl FnOnce(&mut GlyphTable) -> R) -> R {
    let mut table = FONT.write().unwrap_or_else(PoisonError::into_inner);
    f(&mut table)
}

/// Looks `ch` up in the process-wide table.
pub fn get_glyph(ch: char) -> Glyph {
    with_font(|table| table.get_glyph(ch))
}

/// Registers or replaces a glyph in the process-wide table.
pub fn add_glyph(ch: char, glyph: Glyph) {
    with_font_mut(|table| table.add_glyph(ch, glyph))
}

/// Registers raw row bytes in the process-wide table.
pub fn add_glyph_bytes(ch: char, rows: &[u8]) -> Result<(), GlyphError> {
    with_font_mut(|table| table.add_glyph_bytes(ch, rows))
}

/// Composes `text` with the process-wide table. See [`GlyphTable::get_pixels`].
pub fn get_pixels<C: Copy>(text: &str, fore: C, back: C, rotation: Rotation) -> Vec<C> {
    with_font(|table| table.get_pixels(text, fore, back, rotation))
}
