//! The request entity: identity, load state and cached data.

use crate::NationstatesBuilder;
use nationstates_core::{ApiKind, CollectedData, RequestIdentity};
use nationstates_error::NationstatesResult;
use nationstates_interface::Transport;
use nationstates_rate_limit::SlidingWindowLimiter;
use std::collections::BTreeSet;
use std::fmt;
use tracing::debug;

/// One request against the NationStates api.
///
/// Holds what to request ([`RequestIdentity`]), the transport that performs
/// it, a handle on the process-wide [`SlidingWindowLimiter`], and the data of
/// the last successful load.
///
/// Changing the identity through the setters does not reset the load state;
/// call [`load`](Self::load) again to refresh the data.
///
/// Cloning copies the identity, load state and cached data, clones the
/// transport into an independent instance, and shares the limiter.
#[derive(Debug, Clone)]
pub struct Nationstates<T: Transport> {
    pub(crate) identity: RequestIdentity,
    pub(crate) transport: T,
    pub(crate) limiter: SlidingWindowLimiter,
    pub(crate) loaded: bool,
    pub(crate) data: Option<CollectedData>,
}

impl<T: Transport> Nationstates<T> {
    /// Create an unloaded request for `api`.
    ///
    /// # Errors
    ///
    /// Fails with [`ApiKindError`](nationstates_error::ApiKindError) when `api`
    /// is not one of `nation`, `region`, `world`, `wa`, `verify`. The transport
    /// is not touched in that case.
    #[track_caller]
    pub fn new(api: &str, transport: T, limiter: SlidingWindowLimiter) -> NationstatesResult<Self> {
        let api = ApiKind::parse(api)?;
        let identity = RequestIdentity::new(api);

        let mut transport = transport;
        transport.configure(&identity);

        debug!(%api, "Created request");
        Ok(Self {
            identity,
            transport,
            limiter,
            loaded: false,
            data: None,
        })
    }

    /// Start building a request for `api`.
    pub fn builder(api: impl Into<String>) -> NationstatesBuilder {
        NationstatesBuilder::new(api)
    }

    /// Api kind of this request.
    pub fn api(&self) -> ApiKind {
        *self.identity.api()
    }

    /// Target value, if any.
    pub fn value(&self) -> Option<&str> {
        self.identity.value().as_deref()
    }

    /// Requested shards.
    pub fn shard(&self) -> &BTreeSet<String> {
        self.identity.shard()
    }

    /// Requested api version, if any.
    pub fn version(&self) -> Option<&str> {
        self.identity.version().as_deref()
    }

    /// User agent, if one was set.
    pub fn user_agent(&self) -> Option<&str> {
        self.identity.user_agent().as_deref()
    }

    /// Full request identity.
    pub fn identity(&self) -> &RequestIdentity {
        &self.identity
    }

    /// Whether the last load obtained data.
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// The transport performing this request.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Mutable access to the transport.
    ///
    /// Changes made here are not reflected in the request identity.
    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    /// The limiter this request consults.
    pub fn limiter(&self) -> &SlidingWindowLimiter {
        &self.limiter
    }

    /// Change the target value.
    pub fn set_value(&mut self, value: impl Into<String>) -> &mut Self {
        self.identity.set_value(Some(value.into()));
        self.reconfigure()
    }

    /// Replace the requested shards.
    pub fn set_shard<I, S>(&mut self, shard: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.identity.set_shard(shard);
        self.reconfigure()
    }

    /// Change the requested api version.
    pub fn set_version(&mut self, version: impl Into<String>) -> &mut Self {
        self.identity.set_version(Some(version.into()));
        self.reconfigure()
    }

    /// Change the user agent.
    pub fn set_user_agent(&mut self, user_agent: impl Into<String>) -> &mut Self {
        self.identity.set_user_agent(Some(user_agent.into()));
        self.reconfigure()
    }

    fn reconfigure(&mut self) -> &mut Self {
        self.transport.configure(&self.identity);
        debug!(request = %self, loaded = self.loaded, "Request identity changed");
        self
    }
}

impl<T: Transport> fmt::Display for Nationstates<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.api() {
            ApiKind::World => write!(f, "<ns:world:shard({})>", self.shard().len()),
            api => write!(f, "<ns:{}:{}>", api, self.value().unwrap_or_default()),
        }
    }
}
