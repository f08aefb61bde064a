//! Tests for the sliding window limiter.
//!
//! Every test runs on tokio's paused clock so the window can be moved with
//! `tokio::time::advance`.

use nationstates_rate_limit::{RateLimitPolicy, SlidingWindowLimiter};
use std::time::Duration;
use tokio::time::advance;

fn policy(max_count: usize, window_secs: u64) -> RateLimitPolicy {
    RateLimitPolicy::new(max_count, Duration::from_secs(window_secs))
}

#[tokio::test(start_paused = true)]
async fn test_window_reopens_after_expiry() {
    let limiter = SlidingWindowLimiter::new();
    limiter.reset();
    let policy = policy(1, 30);

    assert!(limiter.check(&policy));
    limiter.record();
    assert!(!limiter.check(&policy));

    advance(Duration::from_secs(31)).await;
    assert!(limiter.check(&policy));
    // The expired entry was pruned by the check
    assert!(limiter.is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_entry_on_window_edge_still_counts() {
    let limiter = SlidingWindowLimiter::new();
    let policy = policy(1, 30);

    limiter.record();
    advance(Duration::from_secs(30)).await;
    assert!(!limiter.check(&policy));

    advance(Duration::from_millis(1)).await;
    assert!(limiter.check(&policy));
}

#[tokio::test(start_paused = true)]
async fn test_check_matches_in_window_count() {
    let limiter = SlidingWindowLimiter::new();
    let window = 30;

    // Requests at t = 0, 10, 20, 25, 40
    let gaps = [0, 10, 10, 5, 15];
    for gap in gaps {
        advance(Duration::from_secs(gap)).await;
        limiter.record();
    }

    // At t = 40 the window [10, 40] holds the last four requests
    assert!(!limiter.check(&policy(4, window)));
    assert!(limiter.check(&policy(5, window)));
    assert_eq!(limiter.len(), 4);

    // At t = 52 the window [22, 52] holds t = 25 and t = 40
    advance(Duration::from_secs(12)).await;
    assert!(!limiter.check(&policy(2, window)));
    assert!(limiter.check(&policy(3, window)));
    assert_eq!(limiter.len(), 2);
}

#[tokio::test(start_paused = true)]
async fn test_check_is_idempotent() {
    let limiter = SlidingWindowLimiter::new();
    let policy = policy(3, 30);

    for _ in 0..3 {
        limiter.record();
        advance(Duration::from_secs(12)).await;
    }

    let first = limiter.check(&policy);
    let second = limiter.check(&policy);
    assert_eq!(first, second);
    assert!(first, "oldest request expired after 36s");
}

#[tokio::test(start_paused = true)]
async fn test_empty_window_always_admits() {
    let limiter = SlidingWindowLimiter::new();
    assert!(limiter.check(&policy(1, 30)));
    assert!(limiter.is_empty());

    // A zero-sized policy admits nothing
    assert!(!limiter.check(&policy(0, 30)));
}

#[tokio::test(start_paused = true)]
async fn test_try_acquire_records_only_when_admitted() {
    let limiter = SlidingWindowLimiter::new();
    let policy = policy(2, 30);

    assert!(limiter.try_acquire(&policy));
    assert!(limiter.try_acquire(&policy));
    assert!(!limiter.try_acquire(&policy));
    assert_eq!(limiter.len(), 2);

    advance(Duration::from_secs(31)).await;
    assert!(limiter.try_acquire(&policy));
    assert_eq!(limiter.len(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_clones_share_one_window() {
    let limiter = SlidingWindowLimiter::new();
    let other = limiter.clone();
    let policy = policy(2, 30);

    limiter.record();
    other.record();
    assert!(!limiter.check(&policy));
    assert!(!other.check(&policy));

    other.reset();
    assert!(limiter.is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_snapshot_is_newest_first() {
    let limiter = SlidingWindowLimiter::new();
    limiter.record();
    advance(Duration::from_secs(1)).await;
    limiter.record();

    let snapshot = limiter.snapshot();
    assert_eq!(snapshot.len(), 2);
    assert!(snapshot[0] > snapshot[1]);
}

#[test]
fn test_concurrent_acquire_never_exceeds_policy() {
    // Outside a runtime the limiter reads the real clock
    let limiter = SlidingWindowLimiter::new();
    let policy = policy(10, 30);

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let limiter = limiter.clone();
            std::thread::spawn(move || (0..5).filter(|_| limiter.try_acquire(&policy)).count())
        })
        .collect();

    let admitted: usize = handles.into_iter().map(|h| h.join().unwrap()).sum();
    assert_eq!(admitted, 10);
    assert_eq!(limiter.len(), 10);
}
