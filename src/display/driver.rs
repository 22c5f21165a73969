// src/display/driver.rs
//! LedMatrix trait - minimal interface to the physical LED matrix.
//!
//! Everything above this trait (glyph lookup, rotation, scrolling) is plain
//! data processing. Implementations only have to push finished frames.
//!
//! ## Frame layout
//! A frame holds exactly `edge_len() * edge_len()` colors, row-major, top
//! row first. Frames are borrowed for the duration of the call only.

use crate::color::Color;
use anyhow::Result;

/// Minimal square LED matrix interface.
pub trait LedMatrix {
    /// Number of pixels along one side of the matrix.
    fn edge_len(&self) -> usize;

    /// Writes one complete frame to the display.
    ///
    /// `frame.len()` must equal [`LedMatrix::frame_size`].
    fn write_frame(&mut self, frame: &[Color]) -> Result<()>;

    /// Sets every pixel to `color`.
    fn fill(&mut self, color: Color) -> Result<()>;

    /// Number of pixels in one frame.
    fn frame_size(&self) -> usize {
        self.edge_len() * self.edge_len()
    }
}

impl<M: LedMatrix + ?Sized> LedMatrix for &mut M {
    fn edge_len(&self) -> usize {
        (**self).edge_len()
    }

    fn write_frame(&mut self, frame: &[Color]) -> Result<()> {
        (**self).write_frame(frame)
    }

    fn fill(&mut self, color: Color) -> Result<()> {
        (**self).fill(color)
    }
}
