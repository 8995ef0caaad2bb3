//! Integration tests exercising the full service stack over an in-memory
//! metadata store and a tempdir-backed local blob store.

mod helpers;

mod config_test;
mod file_flow_test;
mod query_test;
