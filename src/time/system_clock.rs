use chrono::{DateTime, Local};

use crate::time::clock::Clock;

/// A [`Clock`] implementation backed by the system clock.
///
/// # Overview
/// `SystemClock` reads the operating system's current time on every call,
/// interpreted in the host's local timezone. It holds no state, so it can be
/// shared freely between threads.
///
/// # Responsibility
/// - Choosing `SystemClock` over a fixed clock is the responsibility of the
///   **composition root** (see [`ClockConfig`](crate::config::clock::ClockConfig)).
/// - Application and domain logic should treat `Clock` as a trusted source.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl SystemClock {
    /// Creates a new [`SystemClock`].
    pub fn new() -> Self {
        Self
    }
}

impl Clock for SystemClock {
    /// Returns the live host instant.
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}
