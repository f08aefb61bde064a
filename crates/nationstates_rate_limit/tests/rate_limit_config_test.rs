//! Tests for rate limit configuration system.

use nationstates_rate_limit::{NationstatesConfig, RateLimitPolicy, SafetyPreset};
use std::time::Duration;

#[test]
fn test_load_bundled_defaults() {
    let config = NationstatesConfig::load().unwrap();

    assert_eq!(config.ratelimit.default_preset, SafetyPreset::Safe);
    assert_eq!(config.ratelimit.retry_after_secs, 2);
    assert_eq!(config.ratelimit.max_attempts, 3);

    // Bundled presets agree with the built-in ones
    for preset in [SafetyPreset::Safe, SafetyPreset::NotSafe, SafetyPreset::VerySafe] {
        assert_eq!(config.policy(preset), preset.policy());
    }
}

#[test]
fn test_builtin_presets() {
    let window = Duration::from_secs(30);
    assert_eq!(SafetyPreset::Safe.policy(), RateLimitPolicy::new(30, window));
    assert_eq!(SafetyPreset::NotSafe.policy(), RateLimitPolicy::new(48, window));
    assert_eq!(SafetyPreset::VerySafe.policy(), RateLimitPolicy::new(25, window));
    assert_eq!(RateLimitPolicy::default(), SafetyPreset::Safe.policy());
}

#[test]
fn test_preset_names() {
    assert_eq!(SafetyPreset::parse("safe").unwrap(), SafetyPreset::Safe);
    assert_eq!(SafetyPreset::parse("not_safe").unwrap(), SafetyPreset::NotSafe);
    assert_eq!(SafetyPreset::parse("notsafe").unwrap(), SafetyPreset::NotSafe);
    assert_eq!(SafetyPreset::parse("very_safe").unwrap(), SafetyPreset::VerySafe);
    assert_eq!(SafetyPreset::NotSafe.to_string(), "not_safe");

    let err = SafetyPreset::parse("reckless").unwrap_err();
    assert!(err.to_string().contains("Unknown rate limit preset: reckless"));
}

#[test]
fn test_default_config_without_files() {
    let config = NationstatesConfig::default();
    assert_eq!(config.default_policy(), SafetyPreset::Safe.policy());
    assert_eq!(config.retry_after(), Duration::from_secs(2));
    assert!(config.client.user_agent.is_none());
}

#[test]
fn test_config_from_file() {
    use std::io::Write;
    use tempfile::Builder;

    let mut temp_file = Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(
        temp_file,
        r#"
[ratelimit]
default_preset = "very_safe"
retry_after_secs = 5
max_attempts = 10

[ratelimit.presets.very_safe]
max_count = 10
window_secs = 60

[client]
user_agent = "Testlandia Census Bot"
"#
    )
    .unwrap();

    let config = NationstatesConfig::from_file(temp_file.path()).unwrap();

    assert_eq!(config.ratelimit.default_preset, SafetyPreset::VerySafe);
    assert_eq!(config.retry_after(), Duration::from_secs(5));
    assert_eq!(config.ratelimit.max_attempts, 10);
    assert_eq!(
        config.default_policy(),
        RateLimitPolicy::new(10, Duration::from_secs(60))
    );
    // Presets without an override keep their built-in values
    assert_eq!(config.policy(SafetyPreset::Safe), SafetyPreset::Safe.policy());
    assert_eq!(
        config.client.user_agent.as_deref(),
        Some("Testlandia Census Bot")
    );
}

#[test]
fn test_config_from_missing_file() {
    let err = NationstatesConfig::from_file("/definitely/not/here/nationstates.toml").unwrap_err();
    assert!(err.to_string().contains("Failed to read configuration"));
}
