//! The admission-control algorithms.
//!
//! Three independent implementations of the
//! [`RateLimiter`](crate::RateLimiter) capability. They share no state
//! and no behavior beyond the `acquire` signature; an external caller
//! picks one variant at construction time and calls `acquire` on every
//! incoming request.

pub mod fixed_window;
pub mod leaky_bucket;
pub mod token_bucket;

pub use self::fixed_window::FixedWindowLimiter;
pub use self::leaky_bucket::LeakyBucketLimiter;
pub use self::token_bucket::TokenBucketLimiter;
