//! What a request asks for.

use crate::ApiKind;
use std::collections::BTreeSet;

/// Identity of a request: api kind, target, shards, version and user agent.
///
/// This is what a transport needs to build and send the request. It carries
/// no load state.
///
/// # Examples
///
/// ```
/// use nationstates_core::{ApiKind, RequestIdentity};
///
/// let mut identity = RequestIdentity::new(ApiKind::Nation);
/// identity.set_value(Some("testlandia".to_string()));
/// identity.set_shard(["fullname", "motto", "fullname"]);
///
/// assert_eq!(identity.value().as_deref(), Some("testlandia"));
/// assert_eq!(identity.shard().len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, derive_getters::Getters)]
pub struct RequestIdentity {
    /// Api kind being requested
    api: ApiKind,
    /// Target of the request (nation name, region name, council id, ...)
    value: Option<String>,
    /// Requested shards
    shard: BTreeSet<String>,
    /// Api version to request
    version: Option<String>,
    /// User agent sent with the request
    user_agent: Option<String>,
}

impl RequestIdentity {
    /// Create an identity for `api` with no target, shards, version or user agent.
    pub fn new(api: ApiKind) -> Self {
        Self {
            api,
            value: None,
            shard: BTreeSet::new(),
            version: None,
            user_agent: None,
        }
    }

    /// Replace the target value.
    pub fn set_value(&mut self, value: Option<String>) {
        self.value = value;
    }

    /// Replace the shard set. Duplicate names collapse into one.
    pub fn set_shard<I, S>(&mut self, shard: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.shard = shard.into_iter().map(Into::into).collect();
    }

    /// Replace the api version.
    pub fn set_version(&mut self, version: Option<String>) {
        self.version = version;
    }

    /// Replace the user agent.
    pub fn set_user_agent(&mut self, user_agent: Option<String>) {
        self.user_agent = user_agent;
    }
}
