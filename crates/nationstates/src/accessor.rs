//! Read access to loaded data.
//!
//! Every accessor fails until the request has been loaded; there is no
//! partial data.

use crate::Nationstates;
use nationstates_core::{CollectedData, ShardData};
use nationstates_error::{CollectError, CollectErrorKind, NationstatesError, NationstatesResult};
use nationstates_interface::Transport;
use serde_json::{Map, Value};

impl<T: Transport> Nationstates<T> {
    /// Shards collected for this request's api kind.
    ///
    /// # Errors
    ///
    /// [`CollectErrorKind::NotLoaded`] before a successful load, and
    /// [`CollectErrorKind::NoSuchField`] if the response has no entry for the
    /// api kind.
    pub fn collect(&self) -> NationstatesResult<&ShardData> {
        let api = self.api();
        self.full_collect()?
            .get(api.as_str())
            .and_then(Value::as_object)
            .ok_or_else(|| NationstatesError::from(CollectError::no_such_field(api.as_str())))
    }

    /// The whole cached response, for every api kind it contains.
    ///
    /// # Errors
    ///
    /// [`CollectErrorKind::NotLoaded`] before a successful load.
    pub fn full_collect(&self) -> NationstatesResult<&CollectedData> {
        match (&self.data, self.loaded) {
            (Some(data), true) => Ok(data),
            _ => Err(CollectError::new(CollectErrorKind::NotLoaded).into()),
        }
    }

    /// Shard `key` from [`collect`](Self::collect).
    ///
    /// Asking for the api kind itself (`"nation"` on a nation request)
    /// returns the whole collected mapping.
    ///
    /// # Errors
    ///
    /// [`CollectErrorKind::NotLoaded`] before a successful load,
    /// [`CollectErrorKind::NoSuchField`] for a shard missing from the data.
    pub fn get(&self, key: &str) -> NationstatesResult<&Value> {
        let collected = self.collect()?;
        if key == self.api().as_str() {
            return self
                .full_collect()?
                .get(key)
                .ok_or_else(|| NationstatesError::from(CollectError::no_such_field(key)));
        }
        collected
            .get(key)
            .ok_or_else(|| NationstatesError::from(CollectError::no_such_field(key)))
    }

    /// Shard `name`, failing the same way whether the request is unloaded or
    /// simply lacks the shard.
    ///
    /// # Errors
    ///
    /// [`CollectErrorKind::NoSuchField`] in both cases.
    pub fn field(&self, name: &str) -> NationstatesResult<&Value> {
        let value = if self.loaded {
            self.collect().ok().and_then(|collected| collected.get(name))
        } else {
            None
        };
        value.ok_or_else(|| NationstatesError::from(CollectError::no_such_field(name)))
    }

    /// Names of the collected shards, empty before a successful load.
    pub fn field_names(&self) -> Vec<&str> {
        match self.collect() {
            Ok(collected) => collected.keys().map(String::as_str).collect(),
            Err(_) => Vec::new(),
        }
    }

    /// Transport metadata about the last request, `None` before any request.
    pub fn data(&self) -> Option<Map<String, Value>> {
        self.transport.all_data()
    }

    /// URL of the last request, or the URL the next request would use.
    pub fn url(&self) -> String {
        self.data()
            .and_then(|data| data.get("url").and_then(Value::as_str).map(str::to_string))
            .unwrap_or_else(|| self.transport.get_url())
    }
}
