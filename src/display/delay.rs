// src/display/delay.rs
//! Blocking delay between animation frames.

use std::thread;
use std::time::Duration;

/// Suspends the caller between frames.
pub trait Delay {
    fn delay_ms(&mut self, ms: u64);
}

/// Sleeps the current thread.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadDelay;

impl Delay for ThreadDelay {
    fn delay_ms(&mut self, ms: u64) {
        thread::sleep(Duration::from_millis(ms));
    }
}

/// Returns immediately. Useful for dry runs and tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDelay;

impl Delay for NoDelay {
    fn delay_ms(&mut self, _ms: u64) {}
}

impl<D: Delay + ?Sized> Delay for &mut D {
    fn delay_ms(&mut self, ms: u64) {
        (**self).delay_ms(ms)
    }
}
