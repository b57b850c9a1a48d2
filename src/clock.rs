//! Time sources for the limiters.
//!
//! Every limiter reads "now" from a [`Clock`] it was constructed with
//! instead of calling [`Instant::now`] directly, which allows tests to
//! mock the passage of time.

use std::sync::Arc;
use std::time::{Duration, Instant};

use parking_lot::Mutex;

/// A time source consulted once per admission decision.
///
/// Measurements are assumed to be monotonically non-decreasing; reading
/// the clock never fails.
pub trait Clock {
    /// Returns a measurement of the clock.
    fn now(&self) -> Instant;
}

/// The monotonic clock implemented by [`Instant`]. This is the default
/// time source for all limiters.
#[derive(Debug, Clone, Copy, Default)]
pub struct MonotonicClock;

impl Clock for MonotonicClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// A manually advanced clock for tests and benchmarks.
///
/// All it does is keep track of what "now" is, starting from the moment
/// of construction, by letting the program move the current time forward
/// by an arbitrary [`Duration`]. Clones share the underlying instant, so
/// a test can hand one clone to a limiter and advance time through
/// another.
#[derive(Debug, Clone)]
pub struct FakeClock {
    now: Arc<Mutex<Instant>>,
}

impl Default for FakeClock {
    fn default() -> Self {
        FakeClock {
            now: Arc::new(Mutex::new(Instant::now())),
        }
    }
}

impl FakeClock {
    /// Advances the fake clock by the given amount.
    pub fn advance(&mut self, by: Duration) {
        *(self.now.lock()) += by
    }
}

impl Clock for FakeClock {
    fn now(&self) -> Instant {
        *self.now.lock()
    }
}
