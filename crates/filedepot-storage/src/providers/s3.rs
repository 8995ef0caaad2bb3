//! S3-compatible object storage blob store (requires the `s3` feature).

use async_trait::async_trait;
use aws_config::{BehaviorVersion, Region};
use aws_sdk_s3::config::Credentials;
use aws_sdk_s3::primitives::ByteStream as S3Body;
use aws_sdk_s3::Client;
use bytes::Bytes;
use tokio_util::io::ReaderStream;
use tracing::{debug, info};

use filedepot_core::config::storage::S3StorageConfig;
use filedepot_core::error::{AppError, ErrorKind};
use filedepot_core::result::AppResult;
use filedepot_core::traits::blob::{BlobStore, ByteStream};

/// S3-compatible blob store.
///
/// Locators are object keys within the configured bucket. Endpoint,
/// region, bucket, and credentials are passed opaquely at construction;
/// nothing above this type inspects them.
#[derive(Debug, Clone)]
pub struct S3BlobStore {
    client: Client,
    bucket: String,
}

impl S3BlobStore {
    /// Create a new S3 blob store from pre-supplied configuration.
    ///
    /// Empty credentials fall back to the ambient AWS credential chain;
    /// an empty endpoint means the default endpoint for the region.
    pub async fn new(config: &S3StorageConfig) -> AppResult<Self> {
        if config.bucket.is_empty() {
            return Err(AppError::configuration("S3 bucket must be configured"));
        }

        let mut loader = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(config.region.clone()));
        if !config.access_key.is_empty() {
            loader = loader.credentials_provider(Credentials::new(
                config.access_key.clone(),
                config.secret_key.clone(),
                None,
                None,
                "filedepot-config",
            ));
        }
        let shared = loader.load().await;

        let mut builder = aws_sdk_s3::config::Builder::from(&shared);
        if !config.endpoint.is_empty() {
            builder = builder.endpoint_url(&config.endpoint).force_path_style(true);
        }

        info!(
            region = %config.region,
            bucket = %config.bucket,
            "Initialized S3 blob store"
        );

        Ok(Self {
            client: Client::from_conf(builder.build()),
            bucket: config.bucket.clone(),
        })
    }
}

#[async_trait]
impl BlobStore for S3BlobStore {
    fn provider_type(&self) -> &str {
        "s3"
    }

    async fn put(&self, key: &str, data: Bytes) -> AppResult<String> {
        if data.is_empty() {
            return Err(AppError::validation("No file content provided"));
        }

        let locator = key.trim_start_matches('/').to_string();
        let len = data.len();

        // PutObject replaces any existing object at the key, matching
        // the idempotent-retry contract of the trait.
        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(&locator)
            .body(S3Body::from(data))
            .send()
            .await
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::Storage,
                    format!("S3 put failed: {locator}"),
                    e.into_service_error(),
                )
            })?;

        debug!(locator, bytes = len, "Wrote blob to S3");
        Ok(locator)
    }

    async fn get(&self, locator: &str) -> AppResult<ByteStream> {
        let resp = self
            .client
            .get_object()
            .bucket(&self.bucket)
            .key(locator)
            .send()
            .await
            .map_err(|e| {
                let err = e.into_service_error();
                if err.is_no_such_key() {
                    AppError::not_found(format!("Blob not found: {locator}"))
                } else {
                    AppError::with_source(
                        ErrorKind::Storage,
                        format!("S3 get failed: {locator}"),
                        err,
                    )
                }
            })?;

        Ok(Box::pin(ReaderStream::new(resp.body.into_async_read())))
    }

    async fn get_bytes(&self, locator: &str) -> AppResult<Bytes> {
        let resp = self
            .client
            .get_object()
            .bucket(&self.bucket)
            .key(locator)
            .send()
            .await
            .map_err(|e| {
                let err = e.into_service_error();
                if err.is_no_such_key() {
                    AppError::not_found(format!("Blob not found: {locator}"))
                } else {
                    AppError::with_source(
                        ErrorKind::Storage,
                        format!("S3 get failed: {locator}"),
                        err,
                    )
                }
            })?;

        let data = resp.body.collect().await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("S3 body read failed: {locator}"),
                e,
            )
        })?;
        Ok(data.into_bytes())
    }

    async fn delete(&self, locator: &str) -> AppResult<bool> {
        // Head first so the idempotent boolean can be reported; S3's
        // DeleteObject succeeds on missing keys without telling us.
        match self
            .client
            .head_object()
            .bucket(&self.bucket)
            .key(locator)
            .send()
            .await
        {
            Ok(_) => {}
            Err(e) => {
                let err = e.into_service_error();
                if err.is_not_found() {
                    return Ok(false);
                }
                return Err(AppError::with_source(
                    ErrorKind::Storage,
                    format!("S3 head failed: {locator}"),
                    err,
                ));
            }
        }

        self.client
            .delete_object()
            .bucket(&self.bucket)
            .key(locator)
            .send()
            .await
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::Storage,
                    format!("S3 delete failed: {locator}"),
                    e.into_service_error(),
                )
            })?;

        debug!(locator, "Deleted blob from S3");
        Ok(true)
    }

    async fn exists(&self, locator: &str) -> AppResult<bool> {
        match self
            .client
            .head_object()
            .bucket(&self.bucket)
            .key(locator)
            .send()
            .await
        {
            Ok(_) => Ok(true),
            Err(e) => {
                let err = e.into_service_error();
                if err.is_not_found() {
                    Ok(false)
                } else {
                    Err(AppError::with_source(
                        ErrorKind::Storage,
                        format!("S3 head failed: {locator}"),
                        err,
                    ))
                }
            }
        }
    }
}
