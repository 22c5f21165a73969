// src/scroll/mod.rs

//! Scrolling animations.
//!
//! Framing is separated from timing: [`MessageFrames`] and [`SeriesFrames`]
//! are iterators that yield one finished frame per scroll step, and
//! [`play`] pushes any frame iterator to a matrix with a blocking delay
//! between frames. A host with its own scheduler can pull frames from the
//! iterators directly.

pub mod message;
pub mod series;


pub use message::MessageFrames;
pub use series::{normalize, SeriesFrames};

use crate::color::Color;
use crate::display::{Delay, LedMatrix};
use crate::matrix::Rotation;
use anyhow::{Context, Result};
use log::{debug, trace};
use serde::{Deserialize, Serialize};

/// Default pause between frames, in milliseconds.
pub const DEFAULT_SPEED_MS: u64 = 90;

/// Direction the content moves across the display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Direction {
    /// Go toward left.
    #[default]
    Left,
    /// Go toward right.
    Right,
    /// Go toward up.
    Up,
    /// Go toward down.
    Down,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];

    /// Right and Down walk the composed pixels from the back.
    pub const fn is_reversed(self) -> bool {
        matches!(self, Direction::Right | Direction::Down)
    }

    /// Left and Right step one column at a time, Up and Down one row.
    pub const fn is_horizontal(self) -> bool {
        matches!(self, Direction::Left | Direction::Right)
    }
}

/// How a message is drawn and scrolled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MessageOptions {
    /// Text color.
    pub fore: Color,
    /// Background color.
    pub back: Color,
    /// Clockwise rotation of every character.
    pub rotation: Rotation,
    /// Scroll direction when the message is wider than the display.
    pub direction: Direction,
    /// Pause between frames in milliseconds.
    pub speed_ms: u64,
}

impl Default for MessageOptions {
    fn default() -> Self {
        Self {
            fore: Color::WHITE,
            back: Color::BLACK,
            rotation: Rotation::Rotate0,
            direction: Direction::Left,
            speed_ms: DEFAULT_SPEED_MS,
        }
    }
}

/// How a numeric series is drawn and scrolled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeriesOptions {
    /// Line color.
    pub fore: Color,
    /// Background color.
    pub back: Color,
    /// Light every pixel below the line as well.
    pub fill: bool,
    /// Clockwise rotation of every frame.
    pub rotation: Rotation,
    /// Scroll from the first sample towards the last.
    pub forward: bool,
    /// Pause between frames in milliseconds.
    pub speed_ms: u64,
}

impl Default for SeriesOptions {
    fn default() -> Self {
        Self {
            fore: Color::WHITE,
            back: Color::BLACK,
            fill: false,
            rotation: Rotation::Rotate0,
            forward: true,
            speed_ms: DEFAULT_SPEED_MS,
        }
    }
}

/// Writes every frame to `matrix`, waiting `interval_ms` between frames.
///
/// There is no wait after the last frame. Returns the number of frames written.
pub fn play<M, D, I>(matrix: &mut M, delay: &mut D, frames: I, interval_ms: u64) -> Result<usize>
where
    M: LedMatrix + ?Sized,
    D: Delay + ?Sized,
    I: IntoIterator,
    I::Item: AsRef<[Color]>,
{
    play_while(matrix, delay, frames, interval_ms, |_| true)
}

/// Like [`play`], but asks `keep_going` before every frame and stops as soon
/// as it returns false. The argument is the index of the frame about to be written.
pub fn play_while<M, D, I, F>(
    matrix: &mut M,
    delay: &mut D,
    frames: I,
    interval_ms: u64,
    mut keep_going: F,
) -> Result<usize>
where
    M: LedMatrix + ?Sized,
    D: Delay + ?Sized,
    I: IntoIterator,
    I::Item: AsRef<[Color]>,
    F: FnMut(usize) -> bool,
{
    let mut frames = frames.into_iter().peekable();
    let mut written = 0;
    while let Some(frame) = frames.next() {
        if !keep_going(written) {
            debug!("play: stopped after {} frames", written);
            return Ok(written);
        }
        matrix
            .write_frame(frame.as_ref())
            .with_context(|| format!("failed to write frame {}", written))?;
        written += 1;
        trace!("play: frame {} written", written);
        if frames.peek().is_some() {
            delay.delay_ms(interval_ms);
        }
    }
    Ok(written)
}
