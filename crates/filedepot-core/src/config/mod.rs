//! Application configuration schemas.
//!
//! All configuration structs are deserialized from TOML files via the
//! `config` crate. Each sub-module represents a logical configuration
//! section. Every section has serde defaults so a partial (or absent)
//! file still yields a usable configuration.

pub mod access;
pub mod links;
pub mod logging;
pub mod storage;

use serde::{Deserialize, Serialize};

use self::access::AccessConfig;
use self::links::LinksConfig;
use self::logging::LoggingConfig;
use self::storage::StorageConfig;

use crate::result::AppResult;

/// Root application configuration.
///
/// This struct is the top-level deserialization target for the merged
/// TOML configuration file plus `FILEDEPOT_*` environment overrides.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Blob storage settings.
    #[serde(default)]
    pub storage: StorageConfig,
    /// Mutation access-control policy.
    #[serde(default)]
    pub access: AccessConfig,
    /// Caller-visible link rendering settings.
    #[serde(default)]
    pub links: LinksConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file, overlaying `FILEDEPOT_*`
    /// environment variables (e.g. `FILEDEPOT_STORAGE__BACKEND=s3`).
    pub fn load(path: &str) -> AppResult<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(path).required(false))
            .add_source(
                config::Environment::with_prefix("FILEDEPOT")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;
        Ok(settings.try_deserialize()?)
    }
}
