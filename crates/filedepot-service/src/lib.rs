//! # filedepot-service
//!
//! Business logic service layer for FileDepot. Each service orchestrates
//! the metadata store, blob store, versioning engine, and access control
//! to implement one slice of the application's use cases.
//!
//! Services follow constructor injection: all dependencies are provided
//! at construction time via `Arc` references. They hold no per-request
//! mutable state, so one instance serves any number of concurrent tasks.

pub mod access;
pub mod file;

pub use access::{policy_from_config, MutationPolicy, OwnerOnlyPolicy, OwnerOrCompanyPolicy};
pub use file::{
    Disposition, DownloadResult, DownloadService, FileListing, FileService, SearchService,
    UploadParams, UploadService, VersionPlan,
};
