//! Invalid api kind errors.

/// Raised when a request is constructed with an api kind outside the
/// supported set (`nation`, `region`, `world`, `wa`, `verify`).
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Invalid api type: {} at line {} in {}", api, line, file)]
pub struct ApiKindError {
    /// The rejected api kind, as given by the caller
    pub api: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl ApiKindError {
    /// Create a new ApiKindError for the rejected kind at the current location.
    ///
    /// # Examples
    ///
    /// ```
    /// use nationstates_error::ApiKindError;
    ///
    /// let err = ApiKindError::new("not_a_kind");
    /// assert_eq!(err.api, "not_a_kind");
    /// assert!(err.to_string().contains("Invalid api type"));
    /// ```
    #[track_caller]
    pub fn new(api: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            api: api.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}
