//! The metadata store contract.

use async_trait::async_trait;

use filedepot_core::result::AppResult;
use filedepot_core::types::filter::FileFilter;
use filedepot_core::types::{LogicalFileId, RecordId};
use filedepot_entity::FileVersionRecord;

/// Persistence contract for file version records.
///
/// One record per stored blob. Implementations must support lookup by
/// record id, per-logical-file version queries, and execution of a
/// [`FileFilter`] predicate. Consistency guarantees are whatever the
/// backing store natively provides; in particular, the
/// read-latest-then-insert pair used for new-version uploads is **not**
/// atomic across this interface.
#[async_trait]
pub trait MetadataStore: Send + Sync + std::fmt::Debug + 'static {
    /// Persist a new record and return it. The record id must be fresh;
    /// reusing an id is a caller bug and surfaces as an internal error.
    async fn insert(&self, record: FileVersionRecord) -> AppResult<FileVersionRecord>;

    /// Find a record by its id.
    async fn find_by_id(&self, id: RecordId) -> AppResult<Option<FileVersionRecord>>;

    /// Find the highest-version record for a logical file, if any.
    async fn find_latest_version(
        &self,
        logical_file_id: LogicalFileId,
    ) -> AppResult<Option<FileVersionRecord>>;

    /// All records for a logical file, sorted by version descending.
    async fn find_versions(
        &self,
        logical_file_id: LogicalFileId,
    ) -> AppResult<Vec<FileVersionRecord>>;

    /// Replace an existing record. Fails not-found if the id is unknown.
    async fn update(&self, record: &FileVersionRecord) -> AppResult<FileVersionRecord>;

    /// Delete a record by id. Returns `true` if a record was removed.
    async fn delete(&self, id: RecordId) -> AppResult<bool>;

    /// Execute a filter predicate and return the matching records in
    /// creation order (oldest first). Output ordering for callers is the
    /// query engine's job, applied after latest-version reduction.
    async fn query(&self, filter: &FileFilter) -> AppResult<Vec<FileVersionRecord>>;

    /// Count all records.
    async fn count(&self) -> AppResult<u64>;
}
