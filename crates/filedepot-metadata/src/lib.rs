//! # filedepot-metadata
//!
//! The metadata persistence layer for FileDepot. [`store::MetadataStore`]
//! is the contract every backing document store must satisfy;
//! [`memory::InMemoryMetadataStore`] is the embedded reference engine
//! that executes the core filter predicates directly. The entity is
//! plain serde data and round-trips exactly, so substituting an external
//! store behind the trait changes no caller.

pub mod memory;
pub mod predicate;
pub mod store;

pub use memory::InMemoryMetadataStore;
pub use store::MetadataStore;
