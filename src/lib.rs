//! # Admission-Control Rate Limiting in Rust
//!
//! This crate implements three classic admission-control algorithms
//! (fixed-window counting, token-bucket replenishment and leaky-bucket
//! draining) for throttling a stream of discrete requests without
//! queuing or blocking.
//!
//! ## Interface
//!
//! Every limiter exposes the same single operation through the
//! [`RateLimiter`] trait: [`acquire`](RateLimiter::acquire), which reads
//! the limiter's clock once, updates the limiter's state and answers
//! whether the current request may proceed. A `false` answer is final:
//! the limiter never delays, retries or queues a request on the caller's
//! behalf.
//!
//! ``` rust
//! use std::time::Duration;
//! use nonzero_ext::nonzero;
//! use ratelimit_gate::{FixedWindowLimiter, RateLimiter};
//!
//! // Up to 99 admissions per second.
//! let mut lim = FixedWindowLimiter::new(Duration::from_secs(1), nonzero!(100u32));
//! assert!(lim.acquire().unwrap());
//! ```
//!
//! The variant is selected at construction; callers that want to pick one
//! at runtime can hold any of the three as a `Box<dyn RateLimiter>`.
//!
//! ## Choosing an algorithm
//!
//! [`FixedWindowLimiter`] counts admissions against a sliding reference
//! point and forgets everything once a full window elapses between calls.
//! It is the cheapest of the three and a reasonable default for coarse
//! per-second or per-minute caps.
//!
//! [`TokenBucketLimiter`] meters a continuous refill over elapsed time up
//! to a burst capacity. Its token balance is signed and can run into debt
//! under sustained pressure, which makes recovery gradual rather than
//! instantaneous.
//!
//! [`LeakyBucketLimiter`] grants a fresh budget on every observed
//! millisecond tick. It bounds burstiness at millisecond granularity and
//! replenishes in full, not smoothly.
//!
//! ## Clocks and testing
//!
//! Limiters read time from an injected [`clock::Clock`] rather than
//! calling [`std::time::Instant::now`] directly. Production code uses the
//! default [`clock::MonotonicClock`]; tests construct limiters over a
//! [`clock::FakeClock`] and advance time deterministically:
//!
//! ``` rust
//! use std::time::Duration;
//! use nonzero_ext::nonzero;
//! use ratelimit_gate::clock::FakeClock;
//! use ratelimit_gate::{FixedWindowLimiter, RateLimiter};
//!
//! let mut clock = FakeClock::default();
//! let mut lim =
//!     FixedWindowLimiter::with_clock(Duration::from_millis(10), nonzero!(2u32), clock.clone());
//! assert!(lim.acquire().unwrap());
//! assert!(!lim.acquire().unwrap());
//! clock.advance(Duration::from_millis(11));
//! assert!(lim.acquire().unwrap());
//! ```
//!
//! ## Thread safety
//!
//! A limiter is a plain mutable value with no internal locking;
//! `acquire` takes `&mut self`, so exclusive access is enforced by the
//! borrow checker. To share one limiter between concurrent callers, wrap
//! it in a `Mutex` or dedicate a single owning task to it, so that only
//! one acquisition is in flight at a time.

pub mod algorithms;
pub mod clock;
pub mod errors;

pub use crate::algorithms::{FixedWindowLimiter, LeakyBucketLimiter, TokenBucketLimiter};
pub use crate::errors::{AcquireError, Result};

/// The admission decision capability shared by all limiter variants.
///
/// Implementations hold a rate policy fixed at construction and mutable
/// per-instance state; each call to `acquire` consults the clock once and
/// updates that state.
pub trait RateLimiter {
    /// Decides whether the current request is admitted.
    ///
    /// Returns `Ok(true)` when the request may proceed and `Ok(false)`
    /// when it must be rejected. Admission and error are independent
    /// signals: an `Err` means no decision could be made, not that the
    /// request was rejected. None of the in-process limiters in this
    /// crate ever return `Err` (see [`AcquireError`]).
    fn acquire(&mut self) -> Result<bool>;
}
