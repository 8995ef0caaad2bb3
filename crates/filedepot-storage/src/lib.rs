//! # filedepot-storage
//!
//! Blob store implementations for FileDepot: local filesystem and
//! S3-compatible object storage (behind the `s3` feature). Everything
//! above this crate is written against [`BlobStore`] only, so the
//! backend is swappable without caller changes.

pub mod providers;

pub use providers::LocalBlobStore;
#[cfg(feature = "s3")]
pub use providers::S3BlobStore;

use std::sync::Arc;

use filedepot_core::config::storage::StorageConfig;
use filedepot_core::error::AppError;
use filedepot_core::result::AppResult;
use filedepot_core::traits::BlobStore;

/// Build the configured blob store backend.
///
/// The backend is selected once here at startup; no caller branches on
/// which one is active.
pub async fn build_blob_store(config: &StorageConfig) -> AppResult<Arc<dyn BlobStore>> {
    match config.backend.as_str() {
        "local" => Ok(Arc::new(LocalBlobStore::new(&config.local.root_path))),
        #[cfg(feature = "s3")]
        "s3" => Ok(Arc::new(S3BlobStore::new(&config.s3).await?)),
        #[cfg(not(feature = "s3"))]
        "s3" => Err(AppError::configuration(
            "Storage backend 's3' requires the `s3` cargo feature",
        )),
        other => Err(AppError::configuration(format!(
            "Unknown storage backend: {other}"
        ))),
    }
}
