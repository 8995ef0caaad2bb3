//! Local filesystem blob store.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use bytes::Bytes;
use tokio::fs;
use tokio_util::io::ReaderStream;
use tracing::debug;

use filedepot_core::error::{AppError, ErrorKind};
use filedepot_core::result::AppResult;
use filedepot_core::traits::blob::{BlobStore, ByteStream};

/// Local filesystem blob store.
///
/// Locators are keys relative to the root. The directory tree is created
/// lazily on the first write that needs it.
#[derive(Debug, Clone)]
pub struct LocalBlobStore {
    /// Root directory for all stored blobs.
    root: PathBuf,
}

impl LocalBlobStore {
    /// Create a new local blob store rooted at the given path. The root
    /// does not have to exist yet.
    pub fn new(root_path: &str) -> Self {
        Self {
            root: PathBuf::from(root_path),
        }
    }

    /// Resolve a locator to an absolute path within the root.
    fn resolve(&self, locator: &str) -> PathBuf {
        let clean = locator.trim_start_matches('/');
        self.root.join(clean)
    }

    /// Ensure the parent directory of a path exists.
    async fn ensure_parent(&self, path: &Path) -> AppResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await.map_err(|e| {
                AppError::with_source(
                    ErrorKind::Storage,
                    format!("Failed to create parent directory: {}", parent.display()),
                    e,
                )
            })?;
        }
        Ok(())
    }
}

#[async_trait]
impl BlobStore for LocalBlobStore {
    fn provider_type(&self) -> &str {
        "local"
    }

    async fn put(&self, key: &str, data: Bytes) -> AppResult<String> {
        if data.is_empty() {
            return Err(AppError::validation("No file content provided"));
        }

        let locator = key.trim_start_matches('/').to_string();
        let full_path = self.resolve(&locator);
        self.ensure_parent(&full_path).await?;

        // An existing blob at this key is overwritten: retried uploads
        // stay idempotent, and version-qualified keys protect history.
        fs::write(&full_path, &data).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to write blob: {locator}"),
                e,
            )
        })?;

        debug!(locator, bytes = data.len(), "Wrote blob");
        Ok(locator)
    }

    async fn get(&self, locator: &str) -> AppResult<ByteStream> {
        let full_path = self.resolve(locator);
        let file = fs::File::open(&full_path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                AppError::not_found(format!("Blob not found: {locator}"))
            } else {
                AppError::with_source(
                    ErrorKind::Storage,
                    format!("Failed to open blob: {locator}"),
                    e,
                )
            }
        })?;

        Ok(Box::pin(ReaderStream::new(file)))
    }

    async fn get_bytes(&self, locator: &str) -> AppResult<Bytes> {
        let full_path = self.resolve(locator);
        let data = fs::read(&full_path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                AppError::not_found(format!("Blob not found: {locator}"))
            } else {
                AppError::with_source(
                    ErrorKind::Storage,
                    format!("Failed to read blob: {locator}"),
                    e,
                )
            }
        })?;
        Ok(Bytes::from(data))
    }

    async fn delete(&self, locator: &str) -> AppResult<bool> {
        let full_path = self.resolve(locator);
        match fs::remove_file(&full_path).await {
            Ok(()) => {
                debug!(locator, "Deleted blob");
                Ok(true)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to delete blob: {locator}"),
                e,
            )),
        }
    }

    async fn exists(&self, locator: &str) -> AppResult<bool> {
        Ok(self.resolve(locator).exists())
    }
}
