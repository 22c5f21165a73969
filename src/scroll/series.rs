// src/scroll/series.rs

//! Frame generation for scrolling numeric series.
//!
//! Samples are scaled to whole rows `0..=edge_len`. Each frame shows
//! `edge_len` consecutive samples, one per column, counted from the bottom
//! row; the window moves by one sample per frame and runs off the end so the
//! last frame is empty.

use crate::matrix::{self, Rotation};
use log::{debug, warn};

/// Scales `values` linearly onto `0..=edge_len`.
///
/// The smallest sample maps to 0 and the largest to `edge_len`; halfway
/// cases round to even. A series whose samples are all equal has no range
/// to scale over and maps entirely to 0. Non-finite samples also map to 0.
pub fn normalize(values: &[f32], edge_len: usize) -> Vec<usize> {
    if values.is_empty() {
        return Vec::new();
    }
    let min = values.iter().copied().fold(f32::INFINITY, f32::min);
    let max = values.iter().copied().fold(f32::NEG_INFINITY, f32::max);
    let range = max - min;
    if !(range.is_finite() && range > 0.0) {
        warn!(
            "normalize: series range {}..{} is degenerate, drawing all samples at 0",
            min, max
        );
        return vec![0; values.len()];
    }
    let scale = edge_len as f32 / range;
    values
        .iter()
        .map(|&v| {
            let level = (scale * (v - min)).round_ties_even();
            // NaN casts to 0.
            (level as usize).min(edge_len)
        })
        .collect()
}

/// Iterator over the frames of one series scroll.
#[derive(Debug, Clone)]
pub struct SeriesFrames<C> {
    levels: Vec<usize>,
    edge_len: usize,
    fore: C,
    back: C,
    fill: bool,
    rotation: Rotation,
    forward: bool,
    step: usize,
}

impl<C: Copy> SeriesFrames<C> {
    /// Prepares an outline, forward, unrotated scroll of `values`.
    ///
    /// An empty series yields no frames.
    pub fn new(values: &[f32], edge_len: usize, fore: C, back: C) -> Self {
        let levels = normalize(values, edge_len);
        debug!(
            "SeriesFrames: {} samples on a {}x{} matrix",
            levels.len(),
            edge_len,
            edge_len
        );
        Self {
            levels,
            edge_len,
            fore,
            back,
            fill: false,
            rotation: Rotation::Rotate0,
            forward: true,
            step: 0,
        }
    }

    /// Lights every pixel at and below the line instead of only the line.
    pub fn fill(mut self, fill: bool) -> Self {
        self.fill = fill;
        self
    }

    /// Rotates each finished frame clockwise.
    pub fn rotation(mut self, rotation: Rotation) -> Self {
        self.rotation = rotation;
        self
    }

    /// Scrolls from the first sample (true) or from the last (false).
    pub fn forward(mut self, forward: bool) -> Self {
        self.forward = forward;
        self
    }

    /// Normalized sample levels.
    pub fn levels(&self) -> &[usize] {
        &self.levels
    }

    fn total_frames(&self) -> usize {
        if self.levels.is_empty() {
            0
        } else {
            self.levels.len() + 1
        }
    }

    fn render(&self, step: usize) -> Vec<C> {
        let edge = self.edge_len;
        let steps = self.levels.len() as isize;
        let start = if self.forward {
            step as isize
        } else {
            steps - edge as isize - step as isize
        };

        let mut frame = vec![self.back; edge * edge];
        for col in 0..edge {
            let index = start + col as isize;
            let level = usize::try_from(index)
                .ok()
                .and_then(|i| self.levels.get(i).copied())
                .unwrap_or(0);
            for row in 0..edge {
                let height = edge - row;
                let lit = if self.fill {
                    level >= height
                } else {
                    level == height
                };
                if lit {
                    frame[edge * row + col] = self.fore;
                }
            }
        }
        matrix::rotate(&mut frame, edge, 0, self.rotation);
        frame
    }
}

impl<C: Copy> Iterator for SeriesFrames<C> {
    type Item = Vec<C>;

    fn next(&mut self) -> Option<Vec<C>> {
        if self.step >= self.total_frames() {
            return None;
        }
        let frame = self.render(self.step);
        self.step += 1;
        Some(frame)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.total_frames().saturating_sub(self.step);
        (remaining, Some(remaining))
    }
}

impl<C: Copy> ExactSizeIterator for SeriesFrames<C> {}
