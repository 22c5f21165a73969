// src/font/tests.rs

use super::*;
use test_log::test;

const CLOSE_BRACE: [u8; 8] = [0xE0, 0x30, 0x30, 0x1C, 0x30, 0x30, 0xE0, 0x00];
const QUESTION: [u8; 8] = [0x78, 0xCC, 0x0C, 0x18, 0x30, 0x00, 0x30, 0x00];

#[test]
fn built_in_glyphs_use_msb_left_layout() {
    let table = GlyphTable::with_default_font();
    assert_eq!(table.get_glyph('}').rows(), &CLOSE_BRACE);
    assert_eq!(table.get_glyph('?').rows(), &QUESTION);
    assert_eq!(table.get_glyph(' ').rows(), &[0; 8]);
}

#[test]
fn unknown_code_points_fall_back_to_question_mark() {
    let table = GlyphTable::with_default_font();
    assert_eq!(table.get_glyph('众').rows(), &QUESTION);
    assert_eq!(table.get_glyph('\u{1F600}').rows(), &QUESTION);
    assert_eq!(table.get_glyph('\n').rows(), &QUESTION);
    assert!(!table.contains('众'));
}

#[test]
fn default_font_covers_ascii_latin1_and_greek() {
    let table = GlyphTable::with_default_font();
    for ch in ' '..='~' {
        assert!(table.contains(ch), "missing {:?}", ch);
    }
    for ch in '\u{A0}'..='\u{FF}' {
        assert!(table.contains(ch), "missing {:?}", ch);
    }
    for ch in ('\u{390}'..='\u{3C9}').filter(|&ch| ch != '\u{3A2}') {
        assert!(table.contains(ch), "missing {:?}", ch);
    }
    assert!(!table.contains('\u{3A2}'));
    assert_eq!(table.len(), 95 + 96 + 57);
}

#[test]
fn greek_letters_have_their_own_glyphs() {
    let table = GlyphTable::with_default_font();
    for ch in "ΔΘΠΣΦΨΩαβζ".chars() {
        assert_ne!(table.get_glyph(ch).rows(), &QUESTION, "{:?}", ch);
    }
    // Delta: a triangle with a solid base, widening downwards.
    assert_eq!(
        table.get_glyph('Δ').rows(),
        &[0x10, 0x38, 0x38, 0x6C, 0x6C, 0xC6, 0xFE, 0x00]
    );
    assert_eq!(table.get_glyph('«').rows(), &[0x00, 0x33, 0x66, 0xCC, 0x66, 0x33, 0x00, 0x00]);
}

#[test]
fn added_glyph_is_returned_and_persists() {
    let mut table = GlyphTable::with_default_font();
    let zhong = Glyph::new([0xFF, 0xCC, 0x0C, 0x18, 0xFF, 0x00, 0x30, 0x00]);
    table.add_glyph('中', zhong);
    assert_eq!(table.get_glyph('中'), zhong);

    let _ = table.get_glyph('A');
    let _ = table.get_glyph('众');
    assert_eq!(table.get_glyph('中'), zhong);
}

#[test]
fn adding_twice_keeps_the_last_glyph() {
    let mut table = GlyphTable::with_default_font();
    table.add_glyph('A', Glyph::new([1; 8]));
    table.add_glyph('A', Glyph::new([2; 8]));
    assert_eq!(table.get_glyph('A').rows(), &[2; 8]);
}

#[test]
fn overriding_question_mark_replaces_fallback() {
    let mut table = GlyphTable::with_default_font();
    let boxed = Glyph::new([0xFF, 0x81, 0x81, 0x81, 0x81, 0x81, 0xFF, 0x00]);
    table.add_glyph('?', boxed);
    assert_eq!(table.fallback(), boxed);
    assert_eq!(table.get_glyph('众'), boxed);
}

#[test]
fn add_glyph_bytes_rejects_bad_lengths() {
    let mut table = GlyphTable::with_default_font();
    let err = table.add_glyph_bytes('x', &[0xFF; 7]).unwrap_err();
    assert_eq!(err, GlyphError::InvalidLength { expected: 8, actual: 7 });
    // Rejected registration must not disturb the existing entry.
    assert_eq!(
        table.get_glyph('x'),
        GlyphTable::with_default_font().get_glyph('x')
    );

    table.add_glyph_bytes('x', &[0xAA; 8]).unwrap();
    assert_eq!(table.get_glyph('x').rows(), &[0xAA; 8]);
}

#[test]
fn table_built_from_fallback_only() {
    let fallback = Glyph::new([0x3C; 8]);
    let table = GlyphTable::new(fallback);
    assert_eq!(table.len(), 1);
    assert!(table.contains(FALLBACK_CHAR));
    assert_eq!(table.get_glyph('A'), fallback);
}

#[test]
fn global_registry_round_trip() {
    let glyph = Glyph::new([0xFF, 0xCC, 0x0C, 0x18, 0xFF, 0x00, 0x30, 0x00]);
    add_glyph('中', glyph);
    assert_eq!(get_glyph('中'), glyph);
    assert_eq!(get_glyph('}').rows(), &CLOSE_BRACE);
    assert_eq!(get_glyph('中'), glyph);
}

#[test]
fn global_registry_rejects_short_bitmaps() {
    assert!(add_glyph_bytes('\u{2603}', &[0x01, 0x02]).is_err());
    assert_eq!(get_glyph('\u{2603}').rows(), &QUESTION);
}
