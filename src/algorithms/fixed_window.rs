//! Admission counting over a sliding fixed-length window.

use std::num::NonZeroU32;
use std::time::{Duration, Instant};

use tracing::{debug, trace};

use crate::clock::{Clock, MonotonicClock};
use crate::errors::Result;
use crate::RateLimiter;

/// A limiter that admits a bounded number of requests per time window.
///
/// The window is anchored to the most recent call rather than to
/// calendar boundaries: every `acquire` moves the reference point to
/// "now", and the admission count resets once the gap since the previous
/// call exceeds the window length. The call that brings the count to
/// exactly `limit` is itself rejected, so a window yields at most
/// `limit - 1` admissions; a `limit` of one rejects every request.
///
/// # Example
/// ``` rust
/// use std::time::Duration;
/// use nonzero_ext::nonzero;
/// use ratelimit_gate::{FixedWindowLimiter, RateLimiter};
///
/// let mut lim = FixedWindowLimiter::new(Duration::from_secs(1), nonzero!(3u32));
/// assert!(lim.acquire().unwrap());
/// assert!(lim.acquire().unwrap());
/// assert!(!lim.acquire().unwrap());
/// ```
#[derive(Debug, Clone)]
pub struct FixedWindowLimiter<C: Clock = MonotonicClock> {
    window: Duration,
    limit: u32,
    count: u32,
    window_start: Instant,
    clock: C,
}

impl FixedWindowLimiter {
    /// Constructs a limiter over the system clock that admits up to
    /// `limit - 1` requests per `window`.
    pub fn new(window: Duration, limit: NonZeroU32) -> Self {
        Self::with_clock(window, limit, MonotonicClock)
    }
}

impl<C: Clock> FixedWindowLimiter<C> {
    /// Constructs a limiter reading time from `clock`. The first window
    /// starts at the clock's current instant with an admission count of
    /// zero.
    pub fn with_clock(window: Duration, limit: NonZeroU32, clock: C) -> Self {
        let window_start = clock.now();
        FixedWindowLimiter {
            window,
            limit: limit.get(),
            count: 0,
            window_start,
            clock,
        }
    }
}

impl<C: Clock> RateLimiter for FixedWindowLimiter<C> {
    fn acquire(&mut self) -> Result<bool> {
        let now = self.clock.now();
        if now.duration_since(self.window_start) > self.window {
            debug!(count = self.count, "window elapsed, admission count reset");
            self.count = 0;
        }
        self.count = self.count.saturating_add(1);
        self.window_start = now;
        let admitted = self.count < self.limit;
        trace!(count = self.count, limit = self.limit, admitted, "fixed window decision");
        Ok(admitted)
    }
}
