//! Rate limiting errors.

/// Error kinds for rate limiting operations.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display)]
pub enum RateLimitErrorKind {
    /// The retry loop used its whole attempt budget while the window stayed full.
    #[display(
        "Rate limit protection blocked this request after {} attempts ({} requests per {}s)",
        attempts,
        max_count,
        window_secs
    )]
    Exhausted {
        /// Attempts consumed before giving up
        attempts: u32,
        /// Requests allowed per window by the active policy
        max_count: usize,
        /// Window length of the active policy, in seconds
        window_secs: u64,
    },
    /// Unknown rate limit preset name.
    #[display("Unknown rate limit preset: {}", _0)]
    UnknownPreset(String),
}

/// Rate limiting error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Rate Limit Error: {} at line {} in {}", kind, line, file)]
pub struct RateLimitError {
    kind: RateLimitErrorKind,
    line: u32,
    file: &'static str,
}

impl RateLimitError {
    /// Create a new rate limiting error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: RateLimitErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> &RateLimitErrorKind {
        &self.kind
    }
}
