//! Rate limit policies and their named presets.

use nationstates_error::{RateLimitError, RateLimitErrorKind};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::time::Duration;

/// At most `max_count` requests inside any trailing `window`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RateLimitPolicy {
    /// Requests allowed per window
    pub max_count: usize,
    /// Length of the trailing window
    pub window: Duration,
}

impl RateLimitPolicy {
    /// Create a policy allowing `max_count` requests per `window`.
    pub fn new(max_count: usize, window: Duration) -> Self {
        Self { max_count, window }
    }
}

impl Default for RateLimitPolicy {
    fn default() -> Self {
        SafetyPreset::default().policy()
    }
}

impl From<SafetyPreset> for RateLimitPolicy {
    fn from(preset: SafetyPreset) -> Self {
        preset.policy()
    }
}

/// Named rate limit budgets.
///
/// The remote api allows 50 requests per 30 seconds; every preset stays
/// below that.
///
/// # Examples
///
/// ```
/// use nationstates_rate_limit::SafetyPreset;
/// use std::time::Duration;
///
/// let preset = SafetyPreset::parse("not_safe").unwrap();
/// assert_eq!(preset.policy().max_count, 48);
/// assert_eq!(preset.policy().window, Duration::from_secs(30));
///
/// // Legacy spelling
/// assert_eq!(SafetyPreset::parse("verysafe").unwrap(), SafetyPreset::VerySafe);
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[serde(rename_all = "snake_case")]
pub enum SafetyPreset {
    /// 30 requests per 30 seconds
    #[default]
    #[strum(to_string = "safe")]
    Safe,
    /// 48 requests per 30 seconds
    #[serde(alias = "notsafe")]
    #[strum(to_string = "not_safe", serialize = "notsafe")]
    NotSafe,
    /// 25 requests per 30 seconds
    #[serde(alias = "verysafe")]
    #[strum(to_string = "very_safe", serialize = "verysafe")]
    VerySafe,
}

impl SafetyPreset {
    /// Built-in policy for this preset.
    pub fn policy(self) -> RateLimitPolicy {
        let window = Duration::from_secs(30);
        match self {
            SafetyPreset::Safe => RateLimitPolicy::new(30, window),
            SafetyPreset::NotSafe => RateLimitPolicy::new(48, window),
            SafetyPreset::VerySafe => RateLimitPolicy::new(25, window),
        }
    }

    /// Parse a preset name, failing with
    /// [`RateLimitErrorKind::UnknownPreset`] for unknown names.
    #[track_caller]
    pub fn parse(name: &str) -> Result<Self, RateLimitError> {
        match Self::from_str(name) {
            Ok(preset) => Ok(preset),
            Err(_) => Err(RateLimitError::new(RateLimitErrorKind::UnknownPreset(
                name.to_string(),
            ))),
        }
    }
}
