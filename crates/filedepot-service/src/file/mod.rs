//! File services — upload, download, listing/search, record CRUD, and
//! version planning.

pub mod download;
pub mod search;
pub mod service;
pub mod upload;
pub mod version;

pub use download::{Disposition, DownloadResult, DownloadService};
pub use search::{FileListing, SearchService};
pub use service::FileService;
pub use upload::{UploadParams, UploadService};
pub use version::VersionPlan;
