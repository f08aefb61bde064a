//! The fixed set of api kinds a request can target.

use nationstates_error::ApiKindError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Category of remote resource being requested.
///
/// # Examples
///
/// ```
/// use nationstates_core::ApiKind;
///
/// let kind = ApiKind::parse("wa").unwrap();
/// assert_eq!(kind, ApiKind::Wa);
/// assert_eq!(kind.as_str(), "wa");
/// assert!(ApiKind::parse("not_a_kind").is_err());
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ApiKind {
    /// A single nation
    Nation,
    /// A region
    Region,
    /// World-wide shards; takes no target value
    World,
    /// The World Assembly council
    Wa,
    /// Identity verification
    Verify,
}

impl ApiKind {
    /// Parse an api kind name, failing with [`ApiKindError`] for anything
    /// outside the supported set.
    #[track_caller]
    pub fn parse(api: &str) -> Result<Self, ApiKindError> {
        match Self::from_str(api) {
            Ok(kind) => Ok(kind),
            Err(_) => Err(ApiKindError::new(api)),
        }
    }

    /// Wire name of this kind, also the key of its data in a response.
    pub fn as_str(&self) -> &'static str {
        match self {
            ApiKind::Nation => "nation",
            ApiKind::Region => "region",
            ApiKind::World => "world",
            ApiKind::Wa => "wa",
            ApiKind::Verify => "verify",
        }
    }
}
