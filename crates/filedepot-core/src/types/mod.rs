//! Core type definitions used across the FileDepot workspace.

pub mod filter;
pub mod id;
pub mod sorting;

pub use filter::{FileFilter, FileFilterParams};
pub use id::*;
pub use sorting::{SortDirection, SortKey};
