//! Data access errors.

/// Failure modes when reading collected shard data.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum CollectErrorKind {
    /// The request has not been loaded yet
    #[display("Request required to access collected data")]
    NotLoaded,
    /// The collected data has no entry with this name
    #[display("No such field: {}", _0)]
    NoSuchField(String),
}

/// Data access error with location tracking.
///
/// # Examples
///
/// ```
/// use nationstates_error::{CollectError, CollectErrorKind};
///
/// let err = CollectError::new(CollectErrorKind::NoSuchField("fullname".to_string()));
/// assert!(format!("{}", err).contains("No such field: fullname"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Collect Error: {} at line {} in {}", kind, line, file)]
pub struct CollectError {
    kind: CollectErrorKind,
    line: u32,
    file: &'static str,
}

impl CollectError {
    /// Create a new collect error with caller location tracking.
    #[track_caller]
    pub fn new(kind: CollectErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Shorthand for a [`CollectErrorKind::NoSuchField`] error.
    #[track_caller]
    pub fn no_such_field(name: impl Into<String>) -> Self {
        Self::new(CollectErrorKind::NoSuchField(name.into()))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &CollectErrorKind {
        &self.kind
    }
}
