//! Loading a request through the shared rate limiter.
//!
//! The limited path asks the limiter for a slot with
//! [`SlidingWindowLimiter::try_acquire`], which checks and records in one
//! critical section, so concurrent loads cannot overshoot the policy.
//!
//! When the window is full the loader sleeps `retry_after` and asks again,
//! at most `max_attempts` times, driven by a fixed-interval `tokio-retry2`
//! strategy. Sleeps run on the tokio timer; dropping the load future cancels
//! them.

use crate::Nationstates;
use nationstates_error::{NationstatesResult, RateLimitError, RateLimitErrorKind};
use nationstates_interface::Transport;
use nationstates_rate_limit::{NationstatesConfig, RateLimitPolicy, SafetyPreset};
use std::time::Duration;
use tokio_retry2::strategy::FixedInterval;
use tokio_retry2::{Retry, RetryError};
use tracing::{debug, info, instrument, warn};

/// How a single [`Nationstates::load`] call treats the rate limiter.
///
/// # Examples
///
/// ```
/// use nationstates::{LoadOptions, SafetyPreset};
/// use std::time::Duration;
///
/// let options = LoadOptions::preset(SafetyPreset::VerySafe)
///     .with_retry_after(Duration::from_secs(5))
///     .with_max_attempts(10);
///
/// assert_eq!(options.policy.max_count, 25);
/// assert!(!options.no_ratelimit);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct LoadOptions {
    /// Policy the request must fit in
    pub policy: RateLimitPolicy,
    /// Skip the limiter entirely (the request is still recorded)
    pub no_ratelimit: bool,
    /// Sleep between limiter re-checks while the window is full
    pub retry_after: Duration,
    /// Sleep/re-check cycles before giving up
    pub max_attempts: u32,
    /// User agent for this call, overriding the request's own
    pub user_agent: Option<String>,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            policy: SafetyPreset::Safe.policy(),
            no_ratelimit: false,
            retry_after: Duration::from_secs(2),
            max_attempts: 3,
            user_agent: None,
        }
    }
}

impl LoadOptions {
    /// Default options with the policy of `preset`.
    pub fn preset(preset: SafetyPreset) -> Self {
        Self {
            policy: preset.policy(),
            ..Self::default()
        }
    }

    /// Options from configuration: default preset (with overrides),
    /// `retry_after` and `max_attempts`.
    pub fn from_config(config: &NationstatesConfig) -> Self {
        Self {
            policy: config.default_policy(),
            retry_after: config.retry_after(),
            max_attempts: config.ratelimit.max_attempts,
            ..Self::default()
        }
    }

    /// Sets the policy.
    pub fn with_policy(mut self, policy: impl Into<RateLimitPolicy>) -> Self {
        self.policy = policy.into();
        self
    }

    /// Bypasses the limiter.
    pub fn with_no_ratelimit(mut self, no_ratelimit: bool) -> Self {
        self.no_ratelimit = no_ratelimit;
        self
    }

    /// Sets the sleep between re-checks.
    pub fn with_retry_after(mut self, retry_after: Duration) -> Self {
        self.retry_after = retry_after;
        self
    }

    /// Sets the number of sleep/re-check cycles.
    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// Sets the user agent for this call.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }
}

impl<T: Transport> Nationstates<T> {
    /// Request (or refresh) the data.
    ///
    /// Waits for the shared limiter as described in [`LoadOptions`]. A
    /// missing user agent is logged as a warning, not an error.
    ///
    /// # Errors
    ///
    /// - [`RateLimitErrorKind::Exhausted`] when the window stayed full for
    ///   every attempt.
    /// - Any error returned by the transport, unchanged and without retry.
    #[instrument(
        skip(self, options),
        fields(request = %self, no_ratelimit = options.no_ratelimit)
    )]
    pub async fn load(&mut self, options: LoadOptions) -> NationstatesResult<&mut Self> {
        let user_agent = self.resolve_user_agent(options.user_agent);
        let policy = options.policy;

        if options.no_ratelimit {
            self.limiter.record();
            return self.attempt(user_agent.as_deref()).await;
        }

        let exhausted = RateLimitError::new(RateLimitErrorKind::Exhausted {
            attempts: options.max_attempts,
            max_count: policy.max_count,
            window_secs: policy.window.as_secs(),
        });

        // First check runs immediately, then one re-check per attempt
        let retry_after = options.retry_after;
        let retry_strategy = FixedInterval::new(retry_after).take(options.max_attempts as usize);
        let acquired = Retry::spawn(retry_strategy, || {
            let limiter = self.limiter.clone();
            let exhausted = exhausted.clone();
            async move {
                if limiter.try_acquire(&policy) {
                    Ok(())
                } else {
                    debug!(?retry_after, "Rate limit window full, waiting");
                    Err(RetryError::Transient {
                        err: exhausted,
                        retry_after: None,
                    })
                }
            }
        })
        .await;

        let exhausted = match acquired {
            Ok(()) => return self.attempt(user_agent.as_deref()).await,
            Err(err) => err,
        };

        // Best effort: this check and the record below are separate steps,
        // another request may take the slot in between.
        match fallback(self.limiter.check(&policy), self.loaded) {
            Fallback::KeepLoaded => {
                debug!("Window reopened after the last attempt, keeping loaded data");
                return Ok(self);
            }
            Fallback::Attempt => {
                self.limiter.record();
                return self.attempt(user_agent.as_deref()).await;
            }
            Fallback::Exhausted => {}
        }

        warn!(
            attempts = options.max_attempts,
            max_count = policy.max_count,
            "Rate limit protection blocked this request"
        );
        Err(exhausted.into())
    }

    /// Picks the user agent for a load call; the request adopts the call's
    /// user agent when it has none of its own.
    fn resolve_user_agent(&mut self, call_user_agent: Option<String>) -> Option<String> {
        match (call_user_agent, self.identity.user_agent().clone()) {
            (None, None) => {
                warn!("No user agent set, the transport default will be used");
                None
            }
            (Some(call), None) => {
                self.set_user_agent(call.clone());
                Some(call)
            }
            (Some(call), Some(_)) => Some(call),
            (None, Some(own)) => Some(own),
        }
    }

    async fn attempt(&mut self, user_agent: Option<&str>) -> NationstatesResult<&mut Self> {
        let obtained = self.transport.load(user_agent).await?;

        self.loaded = obtained;
        if obtained {
            self.data = Some(self.transport.collect());
            info!(request = %self, "Request loaded");
        } else {
            self.data = None;
            warn!(request = %self, "Transport returned no data");
        }

        Ok(self)
    }
}

/// Outcome once the retry budget is spent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Fallback {
    /// Window open, data already loaded
    KeepLoaded,
    /// Window open, nothing loaded yet: one unthrottled attempt
    Attempt,
    /// Window still full
    Exhausted,
}

fn fallback(window_open: bool, loaded: bool) -> Fallback {
    match (window_open, loaded) {
        (true, true) => Fallback::KeepLoaded,
        (true, false) => Fallback::Attempt,
        (false, _) => Fallback::Exhausted,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_keeps_loaded_data_when_window_reopens() {
        assert_eq!(fallback(true, true), Fallback::KeepLoaded);
    }

    #[test]
    fn test_fallback_attempts_unloaded_request_when_window_reopens() {
        assert_eq!(fallback(true, false), Fallback::Attempt);
    }

    #[test]
    fn test_fallback_exhausts_on_full_window() {
        assert_eq!(fallback(false, false), Fallback::Exhausted);
        assert_eq!(fallback(false, true), Fallback::Exhausted);
    }
}
