//! Embedded in-memory metadata store.

use async_trait::async_trait;
use dashmap::DashMap;
use tracing::debug;

use filedepot_core::error::AppError;
use filedepot_core::result::AppResult;
use filedepot_core::types::filter::FileFilter;
use filedepot_core::types::{LogicalFileId, RecordId};
use filedepot_entity::FileVersionRecord;

use crate::predicate;
use crate::store::MetadataStore;

/// Concurrent in-memory [`MetadataStore`].
///
/// Safe to share across request tasks; every method takes `&self` and
/// the map handles interior synchronization. Query results are returned
/// in creation order (uploaded_at, then id) so that the query engine's
/// first-seen tie-break is deterministic.
#[derive(Debug, Default)]
pub struct InMemoryMetadataStore {
    records: DashMap<RecordId, FileVersionRecord>,
}

impl InMemoryMetadataStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn sorted_by_creation(&self, mut records: Vec<FileVersionRecord>) -> Vec<FileVersionRecord> {
        records.sort_by(|a, b| {
            a.uploaded_at
                .cmp(&b.uploaded_at)
                .then_with(|| a.id.to_string().cmp(&b.id.to_string()))
        });
        records
    }
}

#[async_trait]
impl MetadataStore for InMemoryMetadataStore {
    async fn insert(&self, record: FileVersionRecord) -> AppResult<FileVersionRecord> {
        if self.records.contains_key(&record.id) {
            return Err(AppError::internal(format!(
                "Record id already exists: {}",
                record.id
            )));
        }
        self.records.insert(record.id, record.clone());
        debug!(record_id = %record.id, logical_file_id = %record.logical_file_id,
               version = record.version, "Record inserted");
        Ok(record)
    }

    async fn find_by_id(&self, id: RecordId) -> AppResult<Option<FileVersionRecord>> {
        Ok(self.records.get(&id).map(|r| r.clone()))
    }

    async fn find_latest_version(
        &self,
        logical_file_id: LogicalFileId,
    ) -> AppResult<Option<FileVersionRecord>> {
        let versions = self.find_versions(logical_file_id).await?;
        Ok(versions.into_iter().next())
    }

    async fn find_versions(
        &self,
        logical_file_id: LogicalFileId,
    ) -> AppResult<Vec<FileVersionRecord>> {
        let mut versions: Vec<FileVersionRecord> = self
            .records
            .iter()
            .filter(|r| r.logical_file_id == logical_file_id)
            .map(|r| r.clone())
            .collect();
        versions.sort_by(|a, b| b.version.cmp(&a.version));
        Ok(versions)
    }

    async fn update(&self, record: &FileVersionRecord) -> AppResult<FileVersionRecord> {
        match self.records.get_mut(&record.id) {
            Some(mut existing) => {
                *existing = record.clone();
                Ok(record.clone())
            }
            None => Err(AppError::not_found(format!(
                "Record not found: {}",
                record.id
            ))),
        }
    }

    async fn delete(&self, id: RecordId) -> AppResult<bool> {
        Ok(self.records.remove(&id).is_some())
    }

    async fn query(&self, filter: &FileFilter) -> AppResult<Vec<FileVersionRecord>> {
        let matching: Vec<FileVersionRecord> = self
            .records
            .iter()
            .filter(|r| predicate::matches(filter, r))
            .map(|r| r.clone())
            .collect();
        Ok(self.sorted_by_creation(matching))
    }

    async fn count(&self) -> AppResult<u64> {
        Ok(self.records.len() as u64)
    }
}
