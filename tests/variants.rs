use std::time::Duration;

use nonzero_ext::nonzero;
use ratelimit_gate::{FixedWindowLimiter, LeakyBucketLimiter, RateLimiter, TokenBucketLimiter};

fn variants() -> Vec<(&'static str, Box<dyn RateLimiter>)> {
    vec![
        (
            "fixed_window",
            Box::new(FixedWindowLimiter::new(Duration::from_secs(1), nonzero!(50u32))),
        ),
        ("token_bucket", Box::new(TokenBucketLimiter::new(nonzero!(50u32), 1))),
        ("leaky_bucket", Box::new(LeakyBucketLimiter::new(nonzero!(50u32)))),
    ]
}

#[test]
fn every_variant_admits_a_first_request() {
    for (name, mut lim) in variants() {
        assert_eq!(Ok(true), lim.acquire(), "variant {}", name);
    }
}

#[test]
fn acquire_never_errors() {
    for (name, mut lim) in variants() {
        for i in 0..1000 {
            assert!(lim.acquire().is_ok(), "variant {} at call {}", name, i);
        }
    }
}
