//! # filedepot-entity
//!
//! Domain entity models for FileDepot. Every struct in this crate
//! represents a persisted metadata record or a domain value object. All
//! entities derive `Debug`, `Clone`, `Serialize`, and `Deserialize`.

pub mod file;
pub mod identity;

pub use file::{FileVersionRecord, UpdateRecordRequest, DEFAULT_CONTENT_TYPE};
pub use identity::Identity;
