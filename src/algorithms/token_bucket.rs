//! A token bucket replenished by elapsed time.

use std::num::NonZeroU32;
use std::time::Instant;

use tracing::trace;

use crate::clock::{Clock, MonotonicClock};
use crate::errors::Result;
use crate::RateLimiter;

/// A limiter that consumes one token per request from a bucket refilled
/// at a constant rate.
///
/// # Refill implementation
///
/// Instead of having a background task top up the bucket, this
/// implementation recomputes the fill level on every call to `acquire`:
/// the whole milliseconds elapsed since the previous call, multiplied by
/// the refill rate, are credited and then clamped to `capacity`.
/// Sub-millisecond call bursts therefore generate no refill at all, and
/// a refill rate of zero yields a bucket that never recovers.
///
/// The token balance is signed. Back-to-back rejected requests keep
/// draining it below zero, and the limiter admits again only once
/// accumulated refill has pushed the balance back above zero. A full
/// bucket of capacity `C` admits exactly `C - 1` immediate calls; the
/// decrement for the current request happens before the admission check.
///
/// # Example
/// ``` rust
/// use nonzero_ext::nonzero;
/// use ratelimit_gate::{RateLimiter, TokenBucketLimiter};
///
/// // 5 tokens, one new token per millisecond.
/// let mut lim = TokenBucketLimiter::new(nonzero!(5u32), 1);
/// assert!(lim.acquire().unwrap());
/// ```
#[derive(Debug, Clone)]
pub struct TokenBucketLimiter<C: Clock = MonotonicClock> {
    capacity: i64,
    refill_per_ms: i64,
    tokens: i64,
    last_refill: Instant,
    clock: C,
}

impl TokenBucketLimiter {
    /// Constructs a limiter over the system clock holding `capacity`
    /// tokens, refilled at `refill_per_ms` tokens per millisecond. A
    /// rate of zero is allowed and means the bucket never refills.
    pub fn new(capacity: NonZeroU32, refill_per_ms: u32) -> Self {
        Self::with_clock(capacity, refill_per_ms, MonotonicClock)
    }
}

impl<C: Clock> TokenBucketLimiter<C> {
    /// Constructs a limiter reading time from `clock`. The bucket
    /// starts full.
    pub fn with_clock(capacity: NonZeroU32, refill_per_ms: u32, clock: C) -> Self {
        let last_refill = clock.now();
        let capacity = i64::from(capacity.get());
        TokenBucketLimiter {
            capacity,
            refill_per_ms: i64::from(refill_per_ms),
            tokens: capacity,
            last_refill,
            clock,
        }
    }
}

impl<C: Clock> RateLimiter for TokenBucketLimiter<C> {
    fn acquire(&mut self) -> Result<bool> {
        let now = self.clock.now();
        let elapsed_ms =
            i64::try_from(now.duration_since(self.last_refill).as_millis()).unwrap_or(i64::MAX);
        self.tokens = self
            .tokens
            .saturating_add(elapsed_ms.saturating_mul(self.refill_per_ms));
        if self.tokens > self.capacity {
            self.tokens = self.capacity;
        }
        self.tokens -= 1;
        self.last_refill = now;
        let admitted = self.tokens > 0;
        trace!(tokens = self.tokens, admitted, "token bucket decision");
        Ok(admitted)
    }
}
