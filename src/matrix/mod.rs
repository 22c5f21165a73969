// src/matrix/mod.rs

//! In-place geometric transforms on square matrices stored in linear buffers.
//!
//! Every operation works on one `edge_len x edge_len` window that starts at
//! `start` inside a larger slice and is laid out row-major. Elements outside
//! the window are never touched, which lets a buffer of concatenated glyphs
//! be transformed one glyph at a time.
//!
//! A window that does not fit inside the slice is a caller bug and panics.

use serde::{Deserialize, Serialize};

#[cfg(test)]
mod tests;

/// Clockwise rotation applied to text, series frames or whole images.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Rotation {
    /// Not rotated.
    #[default]
    Rotate0,
    /// Rotate clockwise by 90 degrees.
    Rotate90,
    /// Rotate clockwise by 180 degrees.
    Rotate180,
    /// Rotate clockwise by 270 degrees.
    Rotate270,
}

impl Rotation {
    pub const ALL: [Rotation; 4] = [
        Rotation::Rotate0,
        Rotation::Rotate90,
        Rotation::Rotate180,
        Rotation::Rotate270,
    ];

    /// Number of clockwise quarter turns.
    pub const fn quarter_turns(self) -> u8 {
        match self {
            Rotation::Rotate0 => 0,
            Rotation::Rotate90 => 1,
            Rotation::Rotate180 => 2,
            Rotation::Rotate270 => 3,
        }
    }

    pub const fn from_quarter_turns(turns: u8) -> Self {
        match turns % 4 {
            0 => Rotation::Rotate0,
            1 => Rotation::Rotate90,
            2 => Rotation::Rotate180,
            _ => Rotation::Rotate270,
        }
    }

    /// The rotation equivalent to applying `self` and then `next`.
    pub const fn then(self, next: Rotation) -> Self {
        Self::from_quarter_turns(self.quarter_turns() + next.quarter_turns())
    }
}

fn check_window(len: usize, edge_len: usize, start: usize) {
    let end = edge_len
        .checked_mul(edge_len)
        .and_then(|area| area.checked_add(start));
    match end {
        Some(end) if end <= len => {}
        _ => panic!(
            "{}x{} matrix window at index {} does not fit in a buffer of {} elements",
            edge_len, edge_len, start, len
        ),
    }
}

/// Fills every element of `buf` with `value`.
pub fn populate<T: Clone>(buf: &mut [T], value: T) {
    buf.fill(value);
}

/// Mirrors the window across its main diagonal.
pub fn transpose<T>(buf: &mut [T], edge_len: usize, start: usize) {
    check_window(buf.len(), edge_len, start);
    for i in 1..edge_len {
        for j in 0..i {
            buf.swap(start + j * edge_len + i, start + i * edge_len + j);
        }
    }
}

/// Mirrors the window across its horizontal axis.
pub fn flip_up_down<T>(buf: &mut [T], edge_len: usize, start: usize) {
    check_window(buf.len(), edge_len, start);
    for col in 0..edge_len {
        for row in 0..edge_len / 2 {
            buf.swap(
                start + row * edge_len + col,
                start + (edge_len - 1 - row) * edge_len + col,
            );
        }
    }
}

/// Mirrors the window across its vertical axis.
pub fn flip_left_right<T>(buf: &mut [T], edge_len: usize, start: usize) {
    check_window(buf.len(), edge_len, start);
    for col in 0..edge_len / 2 {
        for row in 0..edge_len {
            buf.swap(
                start + row * edge_len + col,
                start + row * edge_len + (edge_len - 1 - col),
            );
        }
    }
}

/// Rotates the window clockwise.
///
/// 90 degrees is a vertical flip followed by a transpose, 270 degrees is a
/// horizontal flip followed by a transpose, and 180 degrees reverses the
/// window element order.
pub fn rotate<T>(buf: &mut [T], edge_len: usize, start: usize, rotation: Rotation) {
    match rotation {
        Rotation::Rotate0 => {}
        Rotation::Rotate90 => {
            flip_up_down(buf, edge_len, start);
            transpose(buf, edge_len, start);
        }
        Rotation::Rotate180 => {
            check_window(buf.len(), edge_len, start);
            buf[start..start + edge_len * edge_len].reverse();
        }
        Rotation::Rotate270 => {
            flip_left_right(buf, edge_len, start);
            transpose(buf, edge_len, start);
        }
    }
}

/// Applies `transform` to each consecutive `edge_len x edge_len` window of `buf`.
///
/// # Panics
/// Panics if `buf.len()` is not a multiple of `edge_len * edge_len`.
pub fn for_each_window<T>(
    buf: &mut [T],
    edge_len: usize,
    mut transform: impl FnMut(&mut [T], usize, usize),
) {
    let area = edge_len * edge_len;
    if area == 0 {
        return;
    }
    assert!(
        buf.len() % area == 0,
        "buffer of {} elements is not a whole number of {}x{} windows",
        buf.len(),
        edge_len,
        edge_len
    );
    for start in (0..buf.len()).step_by(area) {
        transform(buf, edge_len, start);
    }
}
