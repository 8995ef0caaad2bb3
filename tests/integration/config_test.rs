//! Configuration loading tests over the shipped TOML files.

use filedepot::{AppConfig, MutationPolicyKind};

#[test]
fn test_fixture_config_loads_every_section() {
    let config =
        AppConfig::load("tests/fixtures/test_config.toml").expect("Failed to load test config");

    assert_eq!(config.storage.backend, "local");
    assert_eq!(config.storage.max_upload_size_bytes, 1_048_576);
    assert_eq!(config.storage.local.root_path, "/tmp/filedepot-test-blobs");
    assert_eq!(config.access.policy, MutationPolicyKind::OwnerOrCompany);
    assert_eq!(
        config.links.download_base_url,
        "https://depot.example.com/files/download/"
    );
    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.logging.format, "json");
}

#[test]
fn test_shipped_default_config_matches_serde_defaults() {
    let config = AppConfig::load("config/default.toml").expect("Failed to load default config");
    let defaults = AppConfig::default();

    assert_eq!(config.storage.backend, defaults.storage.backend);
    assert_eq!(
        config.storage.max_upload_size_bytes,
        defaults.storage.max_upload_size_bytes
    );
    assert_eq!(config.storage.local.root_path, defaults.storage.local.root_path);
    assert_eq!(config.access.policy, defaults.access.policy);
    assert_eq!(
        config.links.download_base_url,
        defaults.links.download_base_url
    );
    assert_eq!(config.logging.level, defaults.logging.level);
    assert_eq!(config.logging.format, defaults.logging.format);
}

#[test]
fn test_partial_config_fills_missing_sections_with_defaults() {
    // The fixture sets every section; a missing file is the extreme
    // partial case and must still yield a usable configuration.
    let config = AppConfig::load("tests/fixtures/does_not_exist.toml")
        .expect("Absent config file should fall back to defaults");

    assert_eq!(config.storage.backend, "local");
    assert_eq!(config.access.policy, MutationPolicyKind::Owner);
}
