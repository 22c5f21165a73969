//! Headless LED matrix that records every frame it is given.

use crate::color::Color;
use crate::display::driver::LedMatrix;
use anyhow::{bail, Result};
use log::trace;

pub struct HeadlessMatrix {
    edge_len: usize,
    pixels: Vec<Color>,
    frames: Vec<Vec<Color>>,
}

impl HeadlessMatrix {
    pub fn new(edge_len: usize) -> Self {
        Self {
            edge_len,
            pixels: vec![Color::BLACK; edge_len * edge_len],
            frames: Vec::new(),
        }
    }

    /// Every frame written so far, oldest first. Fills are not recorded.
    pub fn frames(&self) -> &[Vec<Color>] {
        &self.frames
    }

    /// Current content of the matrix.
    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    pub fn take_frames(&mut self) -> Vec<Vec<Color>> {
        std::mem::take(&mut self.frames)
    }
}

impl LedMatrix for HeadlessMatrix {
    fn edge_len(&self) -> usize {
        self.edge_len
    }

    fn write_frame(&mut self, frame: &[Color]) -> Result<()> {
        if frame.len() != self.frame_size() {
            bail!(
                "frame has {} pixels, matrix expects {}",
                frame.len(),
                self.frame_size()
            );
        }
        trace!("HeadlessMatrix: frame #{}", self.frames.len());
        self.pixels.copy_from_slice(frame);
        self.frames.push(frame.to_vec());
        Ok(())
    }

    fn fill(&mut self, color: Color) -> Result<()> {
        trace!("HeadlessMatrix: fill {:?}", color);
        self.pixels.fill(color);
        Ok(())
    }
}
