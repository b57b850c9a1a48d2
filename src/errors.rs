//! Error types for admission decisions.

use thiserror::Error;

/// Result type for admission decisions.
pub type Result<T> = std::result::Result<T, AcquireError>;

/// An error raised while deciding whether to admit a request.
///
/// None of the in-process limiters in this crate ever produce one: their
/// decisions are pure arithmetic over a single clock read. The channel
/// exists so that limiter variants backed by external counters (a shared
/// Redis budget, a sidecar quota service) can fail without changing the
/// [`RateLimiter`](crate::RateLimiter) contract. Callers must not
/// conflate the two signals: an `Err` says the decision could not be
/// made, not that the request was rejected.
#[derive(Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum AcquireError {
    /// The limiter's backing store could not be reached.
    #[error("limiter backend unavailable: {0}")]
    Unavailable(String),
}
