// src/display/mod.rs
//! Display collaborator boundary.
//!
//! - LedMatrix: write a frame, fill the matrix
//! - Delay: block between frames
//! - LedMatrixExt: text and series animations on top of any LedMatrix
//! - drivers: headless recorder and ANSI console emulation

pub mod delay;
pub mod driver;
pub mod drivers;
pub mod ext;

pub use delay::{Delay, NoDelay, ThreadDelay};
pub use driver::LedMatrix;
pub use drivers::{ConsoleMatrix, HeadlessMatrix};
pub use ext::LedMatrixExt;
