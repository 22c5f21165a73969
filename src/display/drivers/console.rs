// src/display/drivers/console.rs

//! LED matrix emulated on an ANSI true-color terminal.
//!
//! Each LED is drawn as two full-block characters so the matrix looks
//! roughly square. Every frame homes the cursor and redraws in place.

use crate::color::Color;
use crate::display::driver::LedMatrix;
use anyhow::{bail, Context, Result};
use log::{debug, trace};
use std::io::Write;

const CURSOR_HIDE: &str = "\x1b[?25l";
const CURSOR_SHOW: &str = "\x1b[?25h";
const CLEAR_SCREEN_AND_HOME: &str = "\x1b[2J\x1b[H";
const CURSOR_HOME: &str = "\x1b[H";
const SGR_RESET: &str = "\x1b[0m";
const LED: &str = "\u{2588}\u{2588}";

pub struct ConsoleMatrix<W: Write> {
    out: W,
    edge_len: usize,
    initialized: bool,
}

impl<W: Write> ConsoleMatrix<W> {
    pub fn new(out: W, edge_len: usize) -> Self {
        debug!("ConsoleMatrix: {}x{}", edge_len, edge_len);
        Self {
            out,
            edge_len,
            initialized: false,
        }
    }

    /// Resets colors and shows the cursor again.
    pub fn finish(&mut self) -> Result<()> {
        if self.initialized {
            self.out
                .write_all(format!("{}{}", SGR_RESET, CURSOR_SHOW).as_bytes())
                .context("ConsoleMatrix: failed to restore terminal")?;
            self.out.flush().context("ConsoleMatrix: failed to flush")?;
            self.initialized = false;
        }
        Ok(())
    }

    /// Runs `f` against the matrix and restores the terminal afterwards,
    /// whether or not `f` succeeded. An error from `f` takes precedence.
    pub fn session<R>(&mut self, f: impl FnOnce(&mut Self) -> Result<R>) -> Result<R> {
        let result = f(self);
        let restored = self.finish();
        let value = result?;
        restored?;
        Ok(value)
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn draw(&mut self, pixels: impl Iterator<Item = Color>) -> Result<()> {
        let mut buf = String::new();
        if !self.initialized {
            buf.push_str(CURSOR_HIDE);
            buf.push_str(CLEAR_SCREEN_AND_HOME);
            self.initialized = true;
        } else {
            buf.push_str(CURSOR_HOME);
        }
        for (i, color) in pixels.enumerate() {
            let (r, g, b) = color.to_rgb_tuple();
            buf.push_str(&format!("\x1b[38;2;{};{};{}m{}", r, g, b, LED));
            if (i + 1) % self.edge_len == 0 {
                buf.push_str(SGR_RESET);
                buf.push_str("\r\n");
            }
        }
        self.out
            .write_all(buf.as_bytes())
            .context("ConsoleMatrix: failed to write frame")?;
        self.out.flush().context("ConsoleMatrix: failed to flush")
    }
}

impl<W: Write> LedMatrix for ConsoleMatrix<W> {
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
        trace!("ConsoleMatrix: write_frame");
        self.draw(frame.iter().copied())
    }

    fn fill(&mut self, color: Color) -> Result<()> {
        let size = self.frame_size();
        self.draw(std::iter::repeat(color).take(size))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_is_rendered_with_true_color_escapes() {
        let mut matrix = ConsoleMatrix::new(Vec::new(), 2);
        let frame = [Color::Rgb(1, 2, 3), Color::BLACK, Color::BLACK, Color::WHITE];
        matrix.write_frame(&frame).unwrap();
        matrix.write_frame(&frame).unwrap();
        matrix.finish().unwrap();
        let out = String::from_utf8(matrix.into_inner()).unwrap();

        assert!(out.starts_with(CURSOR_HIDE));
        assert_eq!(out.matches(CLEAR_SCREEN_AND_HOME).count(), 1);
        assert!(out.contains("\x1b[38;2;1;2;3m"));
        assert!(out.contains("\x1b[38;2;255;255;255m"));
        assert_eq!(out.matches("\r\n").count(), 4);
        assert!(out.ends_with(CURSOR_SHOW));
    }

    #[test]
    fn session_restores_terminal_after_failure() {
        let mut matrix = ConsoleMatrix::new(Vec::new(), 2);
        let err = matrix
            .session(|m| -> Result<()> {
                m.fill(Color::WHITE)?;
                bail!("animation aborted")
            })
            .unwrap_err();
        assert_eq!(err.to_string(), "animation aborted");
        let out = String::from_utf8(matrix.into_inner()).unwrap();
        assert!(out.ends_with(&format!("{}{}", SGR_RESET, CURSOR_SHOW)));
    }

    #[test]
    fn session_passes_value_through() {
        let mut matrix = ConsoleMatrix::new(Vec::new(), 2);
        let drawn = matrix
            .session(|m| {
                m.write_frame(&[Color::BLACK; 4])?;
                Ok(4)
            })
            .unwrap();
        assert_eq!(drawn, 4);
        let out = String::from_utf8(matrix.into_inner()).unwrap();
        assert!(out.ends_with(CURSOR_SHOW));
    }

    #[test]
    fn wrong_frame_size_is_an_error() {
        let mut matrix = ConsoleMatrix::new(Vec::new(), 8);
        assert!(matrix.write_frame(&[Color::BLACK; 10]).is_err());
    }

    #[test]
    fn fill_draws_every_pixel() {
        let mut matrix = ConsoleMatrix::new(Vec::new(), 3);
        matrix.fill(Color::Rgb(9, 9, 9)).unwrap();
        let out = String::from_utf8(matrix.into_inner()).unwrap();
        assert_eq!(out.matches("\x1b[38;2;9;9;9m").count(), 9);
    }
}
