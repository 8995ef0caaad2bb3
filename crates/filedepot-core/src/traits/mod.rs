//! Core traits defined in `filedepot-core` and implemented by other crates.

pub mod blob;

pub use blob::{BlobStore, ByteStream};
