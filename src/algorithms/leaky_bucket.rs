//! A leaky bucket with a per-millisecond budget.

use std::num::NonZeroU32;
use std::time::Instant;

use tracing::{debug, trace};

use crate::clock::{Clock, MonotonicClock};
use crate::errors::Result;
use crate::RateLimiter;

/// A limiter that grants a fresh budget of `rate` units on every
/// observed millisecond tick.
///
/// Ticks are whole milliseconds elapsed since the limiter was
/// constructed. Whenever a call observes a different tick than the
/// previous call did, the budget is replenished in full (not smoothed);
/// within a single tick, all calls drain one shared budget. The
/// decrement for the current request happens before the admission check,
/// so a freshly replenished budget of `rate` admits `rate - 1` further
/// calls within its tick.
#[derive(Debug, Clone)]
pub struct LeakyBucketLimiter<C: Clock = MonotonicClock> {
    rate: i64,
    tokens: i64,
    origin: Instant,
    last_tick: u64,
    clock: C,
}

impl LeakyBucketLimiter {
    /// Constructs a limiter over the system clock with a budget of
    /// `rate` units per millisecond tick.
    pub fn new(rate: NonZeroU32) -> Self {
        Self::with_clock(rate, MonotonicClock)
    }
}

impl<C: Clock> LeakyBucketLimiter<C> {
    /// Constructs a limiter reading time from `clock`. The budget
    /// starts at `rate`, attributed to the construction instant's tick.
    pub fn with_clock(rate: NonZeroU32, clock: C) -> Self {
        let origin = clock.now();
        let rate = i64::from(rate.get());
        LeakyBucketLimiter {
            rate,
            tokens: rate,
            origin,
            last_tick: 0,
            clock,
        }
    }
}

impl<C: Clock> RateLimiter for LeakyBucketLimiter<C> {
    fn acquire(&mut self) -> Result<bool> {
        let now = self.clock.now();
        let tick = now.duration_since(self.origin).as_millis() as u64;
        if tick != self.last_tick {
            debug!(tick, "tick changed, budget replenished");
            self.tokens = self.rate;
        }
        self.tokens -= 1;
        self.last_tick = tick;
        let admitted = self.tokens > 0;
        trace!(tokens = self.tokens, tick, admitted, "leaky bucket decision");
        Ok(admitted)
    }
}
