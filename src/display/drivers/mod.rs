// src/display/drivers/mod.rs
//! LED matrix implementations.

pub mod console;
pub mod headless;

pub use console::ConsoleMatrix;
pub use headless::HeadlessMatrix;
