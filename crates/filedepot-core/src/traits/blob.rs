//! Blob store trait for pluggable byte storage backends.

use std::pin::Pin;

use async_trait::async_trait;
use bytes::Bytes;
use futures::Stream;

use crate::result::AppResult;

/// A byte stream type used for reading blob contents.
///
/// Transfers are cancelled by dropping the stream; no partial-read state
/// is held by the provider.
pub type ByteStream = Pin<Box<dyn Stream<Item = Result<Bytes, std::io::Error>> + Send>>;

/// Trait for blob storage backends.
///
/// Implementations exist for the local filesystem and S3-compatible
/// object stores. The [`BlobStore`] trait is defined here in
/// `filedepot-core` and implemented in `filedepot-storage`; callers are
/// written against the trait only, so swapping backends requires no
/// caller change.
#[async_trait]
pub trait BlobStore: Send + Sync + std::fmt::Debug + 'static {
    /// Return the backend type name (e.g., "local", "s3").
    fn provider_type(&self) -> &str;

    /// Store `data` under `key` and return the locator needed to
    /// retrieve it later.
    ///
    /// An empty payload is rejected with a validation error. Writing to
    /// a key that already exists overwrites it, so upload retries are
    /// idempotent; callers must use version-qualified keys when prior
    /// content has to survive.
    async fn put(&self, key: &str, data: Bytes) -> AppResult<String>;

    /// Read the blob at `locator` as a byte stream.
    ///
    /// Fails not-found when no blob exists at the locator.
    async fn get(&self, locator: &str) -> AppResult<ByteStream>;

    /// Read the blob at `locator` into memory as a complete byte vector.
    async fn get_bytes(&self, locator: &str) -> AppResult<Bytes>;

    /// Delete the blob at `locator`. Returns `true` if a blob was
    /// removed, `false` if none existed. Deleting a missing locator is
    /// not an error.
    async fn delete(&self, locator: &str) -> AppResult<bool>;

    /// Check whether a blob exists at the given locator.
    async fn exists(&self, locator: &str) -> AppResult<bool>;
}
