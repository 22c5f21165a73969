// src/scroll/message.rs

//! Frame generation for scrolling text.
//!
//! The message is composed into one strip of 8x8 character blocks. For a
//! horizontal scroll every block is transposed first so that one display
//! column is a contiguous run of `edge_len` pixels; a frame is then simply
//! `edge_len * edge_len` consecutive pixels, transposed back before it is
//! handed out. A vertical scroll needs no transposition because rows are
//! already contiguous.

use super::Direction;
use crate::compositor::reverse_text;
use crate::font::GlyphTable;
use crate::glyph::GLYPH_EDGE;
use crate::matrix::{self, Rotation};
use log::debug;

/// Iterator over the frames of one text scroll.
#[derive(Debug, Clone)]
pub struct MessageFrames<C> {
    pixels: Vec<C>,
    edge_len: usize,
    horizontal: bool,
    reversed: bool,
    /// Index of the last step; the iterator yields `last_step + 1` frames.
    last_step: usize,
    step: usize,
}

impl<C: Copy> MessageFrames<C> {
    /// Composes `message` with `table` and prepares the scroll.
    ///
    /// An empty or whitespace-only message yields no frames.
    pub fn new(
        table: &GlyphTable,
        message: &str,
        fore: C,
        back: C,
        rotation: Rotation,
        direction: Direction,
    ) -> Self {
        if message.trim().is_empty() {
            return Self::from_pixels(Vec::new(), GLYPH_EDGE, direction);
        }
        let text = if direction.is_reversed() {
            reverse_text(message)
        } else {
            message.to_owned()
        };
        let pixels = table.get_pixels(&text, fore, back, rotation);
        Self::from_pixels(pixels, GLYPH_EDGE, direction)
    }

    /// Prepares a scroll over an already composed strip of row-major
    /// `edge_len x edge_len` blocks.
    ///
    /// # Panics
    /// Panics if `pixels.len()` is not a whole number of blocks.
    pub fn from_pixels(mut pixels: Vec<C>, edge_len: usize, direction: Direction) -> Self {
        let horizontal = direction.is_horizontal();
        if horizontal {
            matrix::for_each_window(&mut pixels, edge_len, matrix::transpose);
        }
        let frame_size = edge_len * edge_len;
        let (last_step, step) = if frame_size == 0 || pixels.len() < frame_size {
            // Nothing to show: start past the end.
            (0, 1)
        } else {
            ((pixels.len() - frame_size) / edge_len, 0)
        };
        debug!(
            "MessageFrames: {} pixels, {} frames, {:?}",
            pixels.len(),
            if step == 0 { last_step + 1 } else { 0 },
            direction
        );
        Self {
            pixels,
            edge_len,
            horizontal,
            reversed: direction.is_reversed(),
            last_step,
            step,
        }
    }

    pub fn edge_len(&self) -> usize {
        self.edge_len
    }
}

impl<C: Copy> Iterator for MessageFrames<C> {
    type Item = Vec<C>;

    fn next(&mut self) -> Option<Vec<C>> {
        if self.step > self.last_step {
            return None;
        }
        let frame_size = self.edge_len * self.edge_len;
        let offset = self.step * self.edge_len;
        let start = if self.reversed {
            self.pixels.len() - frame_size - offset
        } else {
            offset
        };
        let mut frame = self.pixels[start..start + frame_size].to_vec();
        if self.horizontal {
            matrix::transpose(&mut frame, self.edge_len, 0);
        }
        self.step += 1;
        Some(frame)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.last_step + 1).saturating_sub(self.step);
        (remaining, Some(remaining))
    }
}

impl<C: Copy> ExactSizeIterator for MessageFrames<C> {}
