// src/display/ext.rs
//! High-level drawing on top of any [`LedMatrix`].
//!
//! Text is composed with the process-wide glyph table ([`crate::font::FONT`]),
//! so glyphs registered at run time show up in the next message.

use crate::color::Color;
use crate::display::{Delay, LedMatrix};
use crate::font;
use crate::glyph::GLYPH_EDGE;
use crate::matrix::Rotation;
use crate::scroll::{self, MessageFrames, MessageOptions, SeriesFrames, SeriesOptions};
use anyhow::{bail, Context, Result};
use log::debug;

fn ensure_glyph_sized<M: LedMatrix + ?Sized>(matrix: &M) -> Result<()> {
    if matrix.edge_len() != GLYPH_EDGE {
        bail!(
            "text needs an {}x{} matrix, this one is {}x{}",
            GLYPH_EDGE,
            GLYPH_EDGE,
            matrix.edge_len(),
            matrix.edge_len()
        );
    }
    Ok(())
}

/// Text and series animations for LED matrices.
pub trait LedMatrixExt: LedMatrix {
    /// Scrolls `message` across the matrix, blocking until the last frame is shown.
    ///
    /// Empty and whitespace-only messages are ignored.
    fn show_message<D: Delay + ?Sized>(
        &mut self,
        delay: &mut D,
        message: &str,
        options: &MessageOptions,
    ) -> Result<()> {
        if message.trim().is_empty() {
            debug!("show_message: nothing to display");
            return Ok(());
        }
        ensure_glyph_sized(self)?;
        let frames = font::with_font(|table| {
            MessageFrames::new(
                table,
                message,
                options.fore,
                options.back,
                options.rotation,
                options.direction,
            )
        });
        let written = scroll::play(self, delay, frames, options.speed_ms)
            .with_context(|| format!("failed to scroll message {:?}", message))?;
        debug!("show_message: {:?} took {} frames", message, written);
        Ok(())
    }

    /// Shows a single character without scrolling.
    fn show_letter(
        &mut self,
        letter: char,
        fore: Color,
        back: Color,
        rotation: Rotation,
    ) -> Result<()> {
        ensure_glyph_sized(self)?;
        let mut buf = [0u8; 4];
        let frame = font::get_pixels(letter.encode_utf8(&mut buf), fore, back, rotation);
        self.write_frame(&frame)
    }

    /// Turns every LED to `back`.
    fn clear(&mut self, back: Color) -> Result<()> {
        self.fill(back)
    }

    /// Scrolls a line chart of `values` across the matrix, blocking until done.
    ///
    /// An empty series is ignored.
    fn show_series_values<D: Delay + ?Sized>(
        &mut self,
        delay: &mut D,
        values: &[f32],
        options: &SeriesOptions,
    ) -> Result<()> {
        if values.is_empty() {
            debug!("show_series_values: nothing to display");
            return Ok(());
        }
        let frames = SeriesFrames::new(values, self.edge_len(), options.fore, options.back)
            .fill(options.fill)
            .rotation(options.rotation)
            .forward(options.forward);
        let written = scroll::play(self, delay, frames, options.speed_ms)
            .context("failed to scroll series")?;
        debug!("show_series_values: {} samples took {} frames", values.len(), written);
        Ok(())
    }
}

impl<M: LedMatrix + ?Sized> LedMatrixExt for M {}
