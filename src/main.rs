// src/main.rs

//! Demonstration sequence rendered to the terminal.
//!
//! For each configured rotation this shows the sine series in all four
//! fill/direction combinations, the demo letters one at a time, and the demo
//! message scrolled in every direction. Set `SENSEHAT_MATRIX_CONFIG` to a
//! JSON file to change what is shown.

use anyhow::{Context, Result};
use log::info;
use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use sensehat_matrix::color::{Color, NamedColor};
use sensehat_matrix::config::{Config, CONFIG};
use sensehat_matrix::display::{ConsoleMatrix, LedMatrixExt, ThreadDelay};
use sensehat_matrix::matrix::Rotation;
use sensehat_matrix::scroll::{Direction, MessageOptions, SeriesOptions};

const SERIES_COLOR: Color = Color::Named(NamedColor::Blue);

/// Color of the message for each scroll direction.
const MESSAGE_COLORS: [(Direction, NamedColor); 4] = [
    (Direction::Left, NamedColor::Blue),
    (Direction::Right, NamedColor::Red),
    (Direction::Up, NamedColor::Green),
    (Direction::Down, NamedColor::Yellow),
];

/// The configured series settings with the demo color and speed.
fn series_options(config: &Config) -> SeriesOptions {
    SeriesOptions {
        fore: SERIES_COLOR,
        speed_ms: config.demo.speed_ms,
        ..config.series
    }
}

/// The configured message settings with `fore` and the demo speed.
fn message_options(config: &Config, fore: Color) -> MessageOptions {
    MessageOptions {
        fore,
        speed_ms: config.demo.speed_ms,
        ..config.message
    }
}

fn show_series<W: Write>(
    matrix: &mut ConsoleMatrix<W>,
    series: &[f32],
    rotation: Rotation,
) -> Result<()> {
    let back = CONFIG.display.background;
    for (fill, forward) in [(true, true), (true, false), (false, true), (false, false)] {
        info!(
            "Showing series values - {} - {} - {:?}",
            if forward { "forward" } else { "backward" },
            if fill { "fill" } else { "not fill" },
            rotation
        );
        let options = SeriesOptions {
            fill,
            rotation,
            forward,
            ..series_options(&CONFIG)
        };
        matrix.show_series_values(&mut ThreadDelay, series, &options)?;
        matrix.clear(back)?;
    }
    Ok(())
}

fn show_letters<W: Write>(matrix: &mut ConsoleMatrix<W>, rotation: Rotation) -> Result<()> {
    let demo = &CONFIG.demo;
    let back = CONFIG.display.background;
    info!("Showing letters - {:?}", rotation);
    // Even positions go through show_letter, odd ones through a one-character message.
    for (index, letter) in demo.letters.chars().enumerate() {
        if index % 2 == 0 {
            matrix.show_letter(letter, SERIES_COLOR, CONFIG.message.back, rotation)?;
        } else {
            let options = MessageOptions {
                rotation,
                ..message_options(&CONFIG, SERIES_COLOR)
            };
            let mut buf = [0u8; 4];
            matrix.show_message(&mut ThreadDelay, letter.encode_utf8(&mut buf), &options)?;
        }
        thread::sleep(Duration::from_millis(demo.letter_pause_ms));
    }
    matrix.clear(back)
}

fn show_messages<W: Write>(matrix: &mut ConsoleMatrix<W>, rotation: Rotation) -> Result<()> {
    let demo = &CONFIG.demo;
    let back = CONFIG.display.background;
    for (direction, color) in MESSAGE_COLORS {
        info!("Scrolling message {:?} - {:?}", direction, rotation);
        let options = MessageOptions {
            rotation,
            direction,
            ..message_options(&CONFIG, Color::Named(color))
        };
        matrix.show_message(&mut ThreadDelay, &demo.message, &options)?;
        matrix.clear(back)?;
    }
    Ok(())
}

/// Main entry point for the `sensehat-matrix` demo.
fn main() -> Result<()> {
    // Default filter is "info" if RUST_LOG is not set.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_micros()
        .init();

    info!("Starting sensehat-matrix demo...");

    let series = CONFIG.demo.series();
    let stdout = io::stdout();
    let mut matrix = ConsoleMatrix::new(stdout.lock(), CONFIG.display.edge_len);

    matrix.session(|matrix| {
        for &rotation in &CONFIG.demo.rotations {
            show_series(matrix, &series, rotation).context("series demo failed")?;
            show_letters(matrix, rotation).context("letter demo failed")?;
            show_messages(matrix, rotation).context("message demo failed")?;
        }
        Ok(())
    })?;
    info!("sensehat-matrix demo finished.");
    Ok(())
}
