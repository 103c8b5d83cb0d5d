//! Clock capability.
//!
//! Calendar arithmetic never asks what time it is; code *around* it does.
//! [`Clock`] keeps that question injectable so callers can pin "now" in
//! tests instead of reaching for the system clock.

use std::time::{SystemTime, UNIX_EPOCH};

/// A source of the current UTC time, as seconds since the Unix epoch.
pub trait Clock: Send + Sync {
    /// Current UTC time in seconds since 1970-01-01T00:00:00Z.
    fn now(&self) -> i64;
}

/// The real system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> i64 {
        match SystemTime::now().duration_since(UNIX_EPOCH) {
            Ok(d) => d.as_secs() as i64,
            // Pre-epoch system clocks count backwards.
            Err(e) => -(e.duration().as_secs() as i64),
        }
    }
}
