//! Builder for request entities.

use crate::{LoadOptions, Nationstates};
use nationstates_error::NationstatesResult;
use nationstates_interface::Transport;
use nationstates_rate_limit::{NationstatesConfig, SlidingWindowLimiter};
use tracing::instrument;

/// Builder for [`Nationstates`].
///
/// The api kind is validated by [`build`](Self::build) before the transport is
/// touched. With [`auto_load`](Self::auto_load) the request is loaded as part
/// of `build`.
#[derive(Debug, Clone)]
pub struct NationstatesBuilder {
    api: String,
    value: Option<String>,
    shard: Vec<String>,
    user_agent: Option<String>,
    version: Option<String>,
    auto_load: bool,
    load_options: LoadOptions,
}

impl NationstatesBuilder {
    /// Creates a builder for `api`.
    pub fn new(api: impl Into<String>) -> Self {
        Self {
            api: api.into(),
            value: None,
            shard: Vec::new(),
            user_agent: None,
            version: None,
            auto_load: false,
            load_options: LoadOptions::default(),
        }
    }

    /// Sets the target value.
    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Sets the requested shards.
    pub fn shard<I, S>(mut self, shard: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.shard = shard.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the user agent.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Sets the api version.
    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Load the request while building it.
    pub fn auto_load(mut self, auto_load: bool) -> Self {
        self.auto_load = auto_load;
        self
    }

    /// Options used by [`auto_load`](Self::auto_load).
    pub fn load_options(mut self, options: LoadOptions) -> Self {
        self.load_options = options;
        self
    }

    /// Applies configuration defaults: the configured user agent (unless one
    /// is already set) and load options.
    pub fn config(mut self, config: &NationstatesConfig) -> Self {
        if self.user_agent.is_none() {
            self.user_agent = config.client.user_agent.clone();
        }
        self.load_options = LoadOptions::from_config(config);
        self
    }

    /// Builds the request, loading it first when `auto_load` is set.
    ///
    /// # Errors
    ///
    /// Fails on an invalid api kind, and with any load error when
    /// `auto_load` is set.
    #[instrument(
        skip(self, transport, limiter),
        fields(api = %self.api, auto_load = self.auto_load)
    )]
    pub async fn build<T: Transport>(
        self,
        transport: T,
        limiter: SlidingWindowLimiter,
    ) -> NationstatesResult<Nationstates<T>> {
        let mut request = Nationstates::new(&self.api, transport, limiter)?;

        request.identity.set_value(self.value);
        request.identity.set_shard(self.shard);
        request.identity.set_version(self.version);
        request.identity.set_user_agent(self.user_agent);
        request.transport.configure(&request.identity);

        if self.auto_load {
            request.load(self.load_options).await?;
        }

        Ok(request)
    }
}
