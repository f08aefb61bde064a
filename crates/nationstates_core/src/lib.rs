//! Core data types for the nationstates request client.
//!
//! This crate provides the identity of a request (which api, which target,
//! which shards) and the shape of the data a transport hands back.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod api_kind;
mod identity;
mod logging;

pub use api_kind::ApiKind;
pub use identity::RequestIdentity;
pub use logging::init_logging;

/// Parsed response data, keyed by api kind (`"nation"`, `"region"`, ...).
pub type CollectedData = serde_json::Map<String, serde_json::Value>;

/// Shard values for a single api kind, keyed by shard name.
pub type ShardData = serde_json::Map<String, serde_json::Value>;
