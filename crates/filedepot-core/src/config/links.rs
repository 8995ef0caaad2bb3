//! Caller-visible link configuration.

use serde::{Deserialize, Serialize};

/// Settings for rendering download links in listing responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinksConfig {
    /// Base URL that a record id is appended to when shaping the
    /// `download_url` field of a listing row. Output shaping only; has
    /// no effect on stored data.
    #[serde(default = "default_download_base_url")]
    pub download_base_url: String,
}

impl Default for LinksConfig {
    fn default() -> Self {
        Self {
            download_base_url: default_download_base_url(),
        }
    }
}

fn default_download_base_url() -> String {
    "http://localhost:8090/files/download/".to_string()
}
