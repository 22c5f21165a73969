//! End-to-end checks of the drawing API against the headless driver.

use sensehat_matrix::color::{Color, NamedColor};
use sensehat_matrix::display::{Delay, HeadlessMatrix, LedMatrix, LedMatrixExt, NoDelay};
use sensehat_matrix::font;
use sensehat_matrix::glyph::{Glyph, GlyphError};
use sensehat_matrix::matrix::Rotation;
use sensehat_matrix::scroll::{Direction, MessageOptions, SeriesOptions};
use test_log::test;

const BLUE: Color = Color::Named(NamedColor::Blue);
const RED: Color = Color::Named(NamedColor::Red);

#[derive(Default)]
struct CountingDelay {
    waits: usize,
    total_ms: u64,
}

impl Delay for CountingDelay {
    fn delay_ms(&mut self, ms: u64) {
        self.waits += 1;
        self.total_ms += ms;
    }
}

fn message(direction: Direction) -> MessageOptions {
    MessageOptions {
        fore: BLUE,
        back: Color::BLACK,
        direction,
        speed_ms: 10,
        ..MessageOptions::default()
    }
}

#[test]
fn scrolling_a_message_writes_one_frame_per_column() {
    for direction in Direction::ALL {
        let mut matrix = HeadlessMatrix::new(8);
        let mut delay = CountingDelay::default();
        matrix
            .show_message(&mut delay, "Hi!", &message(direction))
            .unwrap();
        assert_eq!(matrix.frames().len(), 17, "{:?}", direction);
        assert_eq!(delay.waits, 16);
        assert_eq!(delay.total_ms, 160);
    }
}

#[test]
fn scroll_left_ends_on_the_last_character() {
    let mut matrix = HeadlessMatrix::new(8);
    matrix
        .show_message(&mut NoDelay, "ab", &message(Direction::Left))
        .unwrap();
    let expected_first = font::get_pixels("a", BLUE, Color::BLACK, Rotation::Rotate0);
    let expected_last = font::get_pixels("b", BLUE, Color::BLACK, Rotation::Rotate0);
    assert_eq!(matrix.frames().first(), Some(&expected_first));
    assert_eq!(matrix.frames().last(), Some(&expected_last));
    assert_eq!(matrix.pixels(), &expected_last[..]);
}

#[test]
fn blank_messages_leave_the_display_alone() {
    let mut matrix = HeadlessMatrix::new(8);
    matrix
        .show_message(&mut NoDelay, "   ", &message(Direction::Down))
        .unwrap();
    matrix
        .show_message(&mut NoDelay, "", &message(Direction::Left))
        .unwrap();
    assert!(matrix.frames().is_empty());
}

#[test]
fn text_needs_an_eight_by_eight_matrix() {
    let mut matrix = HeadlessMatrix::new(16);
    let err = matrix
        .show_message(&mut NoDelay, "hello", &MessageOptions::default())
        .unwrap_err();
    assert!(err.to_string().contains("8x8"), "{}", err);
    assert!(matrix
        .show_letter('x', BLUE, Color::BLACK, Rotation::Rotate0)
        .is_err());
    assert!(matrix.frames().is_empty());
}

#[test]
fn show_letter_writes_a_single_rotated_glyph() {
    for rotation in Rotation::ALL {
        let mut matrix = HeadlessMatrix::new(8);
        matrix.show_letter('}', RED, BLUE, rotation).unwrap();
        assert_eq!(
            matrix.frames(),
            &[font::get_pixels("}", RED, BLUE, rotation)][..]
        );
    }
}

#[test]
fn registered_glyphs_show_up_in_later_messages() {
    let mut matrix = HeadlessMatrix::new(8);
    matrix
        .show_letter('Ж', BLUE, Color::BLACK, Rotation::Rotate0)
        .unwrap();
    let fallback = font::get_pixels("?", BLUE, Color::BLACK, Rotation::Rotate0);
    assert_eq!(matrix.frames()[0], fallback);

    let rows = [0x81, 0x42, 0x24, 0x18, 0x18, 0x24, 0x42, 0x81];
    font::add_glyph_bytes('Ж', &rows).unwrap();
    matrix
        .show_message(&mut NoDelay, "Ж", &message(Direction::Right))
        .unwrap();
    let frame = &matrix.frames()[1];
    assert_eq!(frame[0], BLUE);
    assert_eq!(frame[7], BLUE);
    assert_eq!(frame[1], Color::BLACK);
    assert_eq!(frame[3 * 8 + 3], BLUE);
    assert_eq!(font::get_glyph('Ж'), Glyph::new(rows));
}

#[test]
fn malformed_glyph_bytes_are_rejected() {
    let err = font::add_glyph_bytes('Ю', &[0xFF; 7]).unwrap_err();
    assert_eq!(
        err,
        GlyphError::InvalidLength {
            expected: 8,
            actual: 7
        }
    );
    assert_eq!(font::get_glyph('Ю'), font::get_glyph('?'));
}

#[test]
fn series_scrolls_past_the_end() {
    let values: Vec<f32> = (0..20).map(|x| (x as f32 / 3.0).sin()).collect();
    let options = SeriesOptions {
        fore: RED,
        fill: true,
        speed_ms: 5,
        ..SeriesOptions::default()
    };
    let mut matrix = HeadlessMatrix::new(8);
    let mut delay = CountingDelay::default();
    matrix
        .show_series_values(&mut delay, &values, &options)
        .unwrap();
    assert_eq!(matrix.frames().len(), 21);
    assert_eq!(delay.waits, 20);
    assert!(matrix.pixels().iter().all(|&p| p == Color::BLACK));
}

#[test]
fn series_works_on_other_sizes() {
    let mut matrix = HeadlessMatrix::new(4);
    matrix
        .show_series_values(&mut NoDelay, &[1.0, 2.0, 3.0, 4.0, 5.0], &SeriesOptions::default())
        .unwrap();
    assert_eq!(matrix.frames().len(), 6);
    assert!(matrix.frames().iter().all(|f| f.len() == matrix.frame_size()));
}

#[test]
fn flat_series_scrolls_empty_frames() {
    let options = SeriesOptions {
        fore: RED,
        back: BLUE,
        fill: true,
        ..SeriesOptions::default()
    };
    let mut matrix = HeadlessMatrix::new(8);
    matrix
        .show_series_values(&mut NoDelay, &[3.0; 5], &options)
        .unwrap();
    assert_eq!(matrix.frames().len(), 6);
    for frame in matrix.frames() {
        assert!(frame.iter().all(|&p| p == BLUE));
    }
}

#[test]
fn empty_series_draws_nothing() {
    let mut matrix = HeadlessMatrix::new(8);
    matrix
        .show_series_values(&mut NoDelay, &[], &SeriesOptions::default())
        .unwrap();
    assert!(matrix.frames().is_empty());
}

#[test]
fn clear_fills_every_pixel() {
    let mut matrix = HeadlessMatrix::new(8);
    matrix.show_letter('A', BLUE, RED, Rotation::Rotate90).unwrap();
    matrix.clear(Color::Rgb(1, 2, 3)).unwrap();
    assert!(matrix.pixels().iter().all(|&p| p == Color::Rgb(1, 2, 3)));
    assert_eq!(matrix.frames().len(), 1);
}
