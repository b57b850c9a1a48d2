use std::time::Duration;

use nonzero_ext::nonzero;
use ratelimit_gate::clock::FakeClock;
use ratelimit_gate::{LeakyBucketLimiter, RateLimiter};

#[test]
fn calls_within_one_tick_share_the_budget() {
    let clock = FakeClock::default();
    let mut lim = LeakyBucketLimiter::with_clock(nonzero!(2u32), clock);
    // Construction already charged the budget to this tick: 2 -> 1 -> 0.
    assert_eq!(Ok(true), lim.acquire());
    assert_eq!(Ok(false), lim.acquire());
}

#[test]
fn budget_replenishes_on_a_new_tick() {
    let mut clock = FakeClock::default();
    let mut lim = LeakyBucketLimiter::with_clock(nonzero!(2u32), clock.clone());
    assert_eq!(Ok(true), lim.acquire());
    assert_eq!(Ok(false), lim.acquire());

    clock.advance(Duration::from_millis(1));
    assert_eq!(Ok(true), lim.acquire());
    assert_eq!(Ok(false), lim.acquire());
}

#[test]
fn replenishment_is_full_regardless_of_the_gap() {
    let mut clock = FakeClock::default();
    let mut lim = LeakyBucketLimiter::with_clock(nonzero!(4u32), clock.clone());
    for _ in 0..3 {
        assert_eq!(Ok(true), lim.acquire());
    }
    assert_eq!(Ok(false), lim.acquire());

    // A long idle stretch grants the same single budget as a 1ms one.
    clock.advance(Duration::from_secs(5));
    for _ in 0..3 {
        assert_eq!(Ok(true), lim.acquire());
    }
    assert_eq!(Ok(false), lim.acquire());
}

#[test]
fn sub_millisecond_advance_stays_in_the_same_tick() {
    let mut clock = FakeClock::default();
    let mut lim = LeakyBucketLimiter::with_clock(nonzero!(2u32), clock.clone());
    assert_eq!(Ok(true), lim.acquire());
    clock.advance(Duration::from_micros(900));
    assert_eq!(Ok(false), lim.acquire());
}

#[test]
fn rate_of_one_rejects_every_call() {
    let mut clock = FakeClock::default();
    let mut lim = LeakyBucketLimiter::with_clock(nonzero!(1u32), clock.clone());
    assert_eq!(Ok(false), lim.acquire());
    clock.advance(Duration::from_millis(1));
    assert_eq!(Ok(false), lim.acquire());
}
