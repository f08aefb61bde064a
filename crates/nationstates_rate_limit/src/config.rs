//! Configuration structures for rate limiting and request defaults.
//!
//! This module provides TOML-based configuration. The configuration system
//! supports:
//! - Bundled defaults (include_str! from nationstates.toml)
//! - User overrides (./nationstates.toml or ~/.config/nationstates/nationstates.toml)
//! - Automatic merging with user values taking precedence

use crate::{RateLimitPolicy, SafetyPreset};
use config::{Config, File, FileFormat};
use nationstates_error::{ConfigError, NationstatesError, NationstatesResult};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::time::Duration;
use tracing::{debug, instrument};

/// Policy values for one preset.
///
/// ```toml
/// [ratelimit.presets.safe]
/// max_count = 30
/// window_secs = 30
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct PolicyConfig {
    /// Requests allowed per window
    pub max_count: usize,

    /// Window length in seconds
    pub window_secs: u64,
}

impl From<PolicyConfig> for RateLimitPolicy {
    fn from(config: PolicyConfig) -> Self {
        RateLimitPolicy::new(config.max_count, Duration::from_secs(config.window_secs))
    }
}

/// Rate limiting and retry settings.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct RateLimitConfig {
    /// Preset used when a load call does not pick one
    #[serde(default)]
    pub default_preset: SafetyPreset,

    /// Seconds to sleep between limiter re-checks
    #[serde(default = "default_retry_after_secs")]
    pub retry_after_secs: u64,

    /// Sleep/re-check cycles before giving up
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,

    /// Preset overrides, keyed by preset name (`safe`, `not_safe`, `very_safe`)
    #[serde(default)]
    pub presets: HashMap<String, PolicyConfig>,
}

fn default_retry_after_secs() -> u64 {
    2
}

fn default_max_attempts() -> u32 {
    3
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            default_preset: SafetyPreset::default(),
            retry_after_secs: default_retry_after_secs(),
            max_attempts: default_max_attempts(),
            presets: HashMap::new(),
        }
    }
}

/// Request defaults applied to every entity built from this configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, Default)]
pub struct ClientConfig {
    /// User agent to send when a request does not set its own
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
}

/// Top-level configuration.
///
/// Loads configuration from TOML files with a precedence system:
/// 1. Bundled defaults (include_str! from nationstates.toml)
/// 2. User override (./nationstates.toml or ~/.config/nationstates/nationstates.toml)
///
/// # Example
///
/// ```no_run
/// use nationstates_rate_limit::{NationstatesConfig, SafetyPreset};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = NationstatesConfig::load()?;
///
/// let policy = config.policy(SafetyPreset::Safe);
/// println!("safe preset: {} requests per {:?}", policy.max_count, policy.window);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Default)]
pub struct NationstatesConfig {
    /// Rate limiting and retry settings
    #[serde(default)]
    pub ratelimit: RateLimitConfig,

    /// Request defaults
    #[serde(default)]
    pub client: ClientConfig,
}

impl NationstatesConfig {
    /// Load configuration from a specific file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<std::path::Path>) -> NationstatesResult<Self> {
        debug!("Loading configuration from file");

        Config::builder()
            .add_source(File::from(path.as_ref()))
            .build()
            .map_err(|e| {
                NationstatesError::from(ConfigError::new(format!(
                    "Failed to read configuration from {}: {}",
                    path.as_ref().display(),
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                NationstatesError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })
    }

    /// Load configuration with precedence: user override > bundled default.
    ///
    /// Configuration sources in order of precedence (later sources override earlier):
    /// 1. Bundled defaults (nationstates.toml shipped with library)
    /// 2. User config in home directory (~/.config/nationstates/nationstates.toml)
    /// 3. User config in current directory (./nationstates.toml)
    ///
    /// User config files are optional and will be silently skipped if not found.
    #[instrument]
    pub fn load() -> NationstatesResult<Self> {
        debug!("Loading configuration with precedence: current dir > home dir > bundled defaults");

        const DEFAULT_CONFIG: &str = include_str!("../../../nationstates.toml");

        let mut builder =
            Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/nationstates/nationstates.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        builder = builder.add_source(File::with_name("nationstates").required(false));

        builder
            .build()
            .map_err(|e| {
                NationstatesError::from(ConfigError::new(format!(
                    "Failed to build configuration: {}",
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                NationstatesError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })
    }

    /// Policy for `preset`: the configured override if present, else the
    /// built-in values.
    #[instrument(skip(self))]
    pub fn policy(&self, preset: SafetyPreset) -> RateLimitPolicy {
        let name: &str = preset.as_ref();
        match self.ratelimit.presets.get(name) {
            Some(policy) => {
                debug!(?policy, "Using configured preset override");
                (*policy).into()
            }
            None => preset.policy(),
        }
    }

    /// Policy for the configured default preset.
    pub fn default_policy(&self) -> RateLimitPolicy {
        self.policy(self.ratelimit.default_preset)
    }

    /// Sleep between limiter re-checks.
    pub fn retry_after(&self) -> Duration {
        Duration::from_secs(self.ratelimit.retry_after_secs)
    }
}
