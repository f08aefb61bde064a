//! Error types for the nationstates request client.
//!
//! # Error Hierarchy
//!
//! Errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! Every error converts into [`NationstatesError`] so callers can use `?`
//! across crate boundaries.
//!
//! # Examples
//!
//! ```
//! use nationstates_error::{CollectError, CollectErrorKind, NationstatesResult};
//!
//! fn read_shard() -> NationstatesResult<String> {
//!     Err(CollectError::new(CollectErrorKind::NotLoaded))?
//! }
//!
//! let err = read_shard().unwrap_err();
//! assert!(err.is_not_loaded());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod api_kind;
mod collect;
mod config;
mod error;
mod rate_limit;
mod transport;

pub use api_kind::ApiKindError;
pub use collect::{CollectError, CollectErrorKind};
pub use config::ConfigError;
pub use error::{NationstatesError, NationstatesErrorKind, NationstatesResult};
pub use rate_limit::{RateLimitError, RateLimitErrorKind};
pub use transport::TransportError;
