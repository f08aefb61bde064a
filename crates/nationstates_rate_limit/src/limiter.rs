//! Sliding-window limiter shared by every request entity.
//!
//! The window is a list of accepted-request instants, newest first. Each
//! check drops the entries that fell out of the trailing window (always from
//! the back, the oldest end) and compares what is left against the policy.

use crate::RateLimitPolicy;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::time::Instant;
use tracing::{debug, instrument, trace};

/// Process-wide request window.
///
/// Cloning the limiter clones a handle: all clones observe and mutate the
/// same window. Construct one limiter per process (or per api budget) and
/// hand a clone to every request entity.
///
/// Time is read from [`tokio::time::Instant`], so tests can drive the window
/// with tokio's paused clock.
///
/// # Example
///
/// ```
/// use nationstates_rate_limit::{RateLimitPolicy, SlidingWindowLimiter};
/// use std::time::Duration;
///
/// let limiter = SlidingWindowLimiter::new();
/// let policy = RateLimitPolicy::new(1, Duration::from_secs(30));
///
/// assert!(limiter.check(&policy));
/// limiter.record();
/// assert!(!limiter.check(&policy));
/// ```
#[derive(Debug, Clone, Default)]
pub struct SlidingWindowLimiter {
    // Newest first
    window: Arc<Mutex<VecDeque<Instant>>>,
}

impl SlidingWindowLimiter {
    /// Create a limiter with an empty window.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a request may be issued now under `policy`.
    ///
    /// Expired entries are pruned first, so calling `check` twice without an
    /// intervening [`record`](Self::record) gives the same answer.
    #[instrument(
        skip(self),
        fields(max_count = policy.max_count, window_secs = policy.window.as_secs())
    )]
    pub fn check(&self, policy: &RateLimitPolicy) -> bool {
        let mut window = self.lock();
        Self::admits(&mut window, policy, Instant::now())
    }

    /// Record an accepted request at the current instant.
    ///
    /// Call this immediately before the request is sent, never after.
    pub fn record(&self) {
        let now = Instant::now();
        let mut window = self.lock();
        window.push_front(now);
        trace!(in_window = window.len(), "Recorded request timestamp");
    }

    /// Check and record as one step.
    ///
    /// Returns `true` and records the request if `policy` admits it. Two
    /// concurrent callers can never both take the last slot.
    #[instrument(
        skip(self),
        fields(max_count = policy.max_count, window_secs = policy.window.as_secs())
    )]
    pub fn try_acquire(&self, policy: &RateLimitPolicy) -> bool {
        let now = Instant::now();
        let mut window = self.lock();
        if Self::admits(&mut window, policy, now) {
            window.push_front(now);
            trace!(in_window = window.len(), "Acquired rate limit slot");
            true
        } else {
            false
        }
    }

    /// Forget every recorded request.
    pub fn reset(&self) {
        self.lock().clear();
        debug!("Rate limit window cleared");
    }

    /// Recorded instants, newest first, including ones that have not been
    /// pruned yet.
    pub fn snapshot(&self) -> Vec<Instant> {
        self.lock().iter().copied().collect()
    }

    /// Number of recorded instants, including ones that have not been pruned yet.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// True when no request is recorded.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> MutexGuard<'_, VecDeque<Instant>> {
        // Plain instants, a poisoned window is still valid
        self.window.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn admits(window: &mut VecDeque<Instant>, policy: &RateLimitPolicy, now: Instant) -> bool {
        let before = window.len();
        while let Some(&oldest) = window.back() {
            if now.saturating_duration_since(oldest) > policy.window {
                window.pop_back();
            } else {
                break;
            }
        }

        let pruned = before - window.len();
        if pruned > 0 {
            debug!(pruned, remaining = window.len(), "Pruned expired timestamps");
        }

        window.len() < policy.max_count
    }
}
