//! FileDepot — versioned file storage with per-owner access control and
//! filterable metadata search.
//!
//! This facade crate re-exports the public surface of the workspace:
//! configuration and core types, the entity model, the metadata store,
//! blob storage providers, and the orchestrating services.

pub mod logging;

pub use filedepot_core::config::access::{AccessConfig, MutationPolicyKind};
pub use filedepot_core::config::links::LinksConfig;
pub use filedepot_core::config::logging::LoggingConfig;
pub use filedepot_core::config::storage::{LocalStorageConfig, S3StorageConfig, StorageConfig};
pub use filedepot_core::config::AppConfig;
pub use filedepot_core::error::{AppError, ErrorKind};
pub use filedepot_core::result::AppResult;
pub use filedepot_core::traits::blob::{BlobStore, ByteStream};
pub use filedepot_core::types::filter::{FileFilter, FileFilterParams};
pub use filedepot_core::types::{LogicalFileId, RecordId, SortDirection, SortKey, UserId};

pub use filedepot_entity::{
    FileVersionRecord, Identity, UpdateRecordRequest, DEFAULT_CONTENT_TYPE,
};

pub use filedepot_metadata::{InMemoryMetadataStore, MetadataStore};

pub use filedepot_storage::{build_blob_store, LocalBlobStore};

pub use filedepot_service::{
    policy_from_config, Disposition, DownloadResult, DownloadService, FileListing, FileService,
    MutationPolicy, OwnerOnlyPolicy, OwnerOrCompanyPolicy, SearchService, UploadParams,
    UploadService, VersionPlan,
};
