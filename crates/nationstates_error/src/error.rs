//! Top-level error wrapper types.

use crate::{
    ApiKindError, CollectError, CollectErrorKind, ConfigError, RateLimitError,
    RateLimitErrorKind, TransportError,
};

/// Every error the request client can surface.
///
/// # Examples
///
/// ```
/// use nationstates_error::{NationstatesError, TransportError};
///
/// let err: NationstatesError = TransportError::new("Connection failed").into();
/// assert!(format!("{}", err).contains("Transport Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum NationstatesErrorKind {
    /// Api kind outside the supported set
    #[from(ApiKindError)]
    ApiKind(ApiKindError),
    /// Data access before load, or of a missing field
    #[from(CollectError)]
    Collect(CollectError),
    /// Rate limiter refused the request
    #[from(RateLimitError)]
    RateLimit(RateLimitError),
    /// Error raised by the transport collaborator
    #[from(TransportError)]
    Transport(TransportError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
}

/// Nationstates error with kind discrimination.
///
/// # Examples
///
/// ```
/// use nationstates_error::{ConfigError, NationstatesResult};
///
/// fn might_fail() -> NationstatesResult<()> {
///     Err(ConfigError::new("Missing field"))?
/// }
///
/// match might_fail() {
///     Ok(_) => println!("Success"),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Nationstates Error: {}", _0)]
pub struct NationstatesError(Box<NationstatesErrorKind>);

impl NationstatesError {
    /// Create a new error from a kind.
    pub fn new(kind: NationstatesErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &NationstatesErrorKind {
        &self.0
    }

    /// True when a data accessor ran before the request was loaded.
    pub fn is_not_loaded(&self) -> bool {
        matches!(
            self.kind(),
            NationstatesErrorKind::Collect(e) if *e.kind() == CollectErrorKind::NotLoaded
        )
    }

    /// True when a lookup named a field absent from the collected data.
    pub fn is_no_such_field(&self) -> bool {
        matches!(
            self.kind(),
            NationstatesErrorKind::Collect(e)
                if matches!(e.kind(), CollectErrorKind::NoSuchField(_))
        )
    }

    /// True when the retry loop gave up on a full rate limit window.
    pub fn is_rate_limit_exhausted(&self) -> bool {
        matches!(
            self.kind(),
            NationstatesErrorKind::RateLimit(e)
                if matches!(e.kind(), RateLimitErrorKind::Exhausted { .. })
        )
    }
}

// Generic From implementation for any type that converts to NationstatesErrorKind
impl<T> From<T> for NationstatesError
where
    T: Into<NationstatesErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for nationstates operations.
///
/// # Examples
///
/// ```
/// use nationstates_error::{NationstatesResult, TransportError};
///
/// fn fetch_data() -> NationstatesResult<String> {
///     Err(TransportError::new("404 Not Found"))?
/// }
/// ```
pub type NationstatesResult<T> = std::result::Result<T, NationstatesError>;
