//! Trait definitions for the transport boundary.

use async_trait::async_trait;
use nationstates_core::{CollectedData, RequestIdentity};
use nationstates_error::NationstatesResult;

/// The network side of a request.
///
/// A transport is owned by exactly one request entity. Cloning a request
/// clones its transport, so implementations that are `Clone` must produce an
/// independent instance (no shared response state).
#[async_trait]
pub trait Transport: Send + Sync {
    /// Adopt the request identity (api kind, target, shards, version, user agent).
    ///
    /// Called whenever the owning request changes its identity, so the
    /// transport and the request never disagree about what will be sent.
    fn configure(&mut self, identity: &RequestIdentity);

    /// Perform the request.
    ///
    /// Returns whether data was obtained. Errors are reported as
    /// [`TransportError`](nationstates_error::TransportError) and reach the
    /// caller of `load` unchanged.
    async fn load(&mut self, user_agent: Option<&str>) -> NationstatesResult<bool>;

    /// Full parsed response of the last successful `load`, keyed by api kind.
    fn collect(&self) -> CollectedData;

    /// Metadata about the last request (for example the resolved `"url"`),
    /// `None` before any request was made.
    fn all_data(&self) -> Option<serde_json::Map<String, serde_json::Value>>;

    /// URL the current request would be sent to.
    fn get_url(&self) -> String;
}
