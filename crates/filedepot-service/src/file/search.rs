//! Listing and search — the query engine over file metadata.
//!
//! Translates optional filter criteria into a store predicate, collapses
//! the multi-version result set to one representative record per logical
//! file, then applies the requested ordering to the survivors.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use filedepot_core::config::links::LinksConfig;
use filedepot_core::result::AppResult;
use filedepot_core::types::filter::{FileFilter, FileFilterParams};
use filedepot_core::types::{LogicalFileId, RecordId, SortDirection, SortKey};
use filedepot_entity::{FileVersionRecord, Identity};
use filedepot_metadata::MetadataStore;

use crate::access::require_identity;

/// One row of a file listing. A fixed schema rather than a loose
/// key/value map; every field is always present.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileListing {
    /// Record id of the representative (latest) version.
    pub id: RecordId,
    /// The logical file this row represents.
    pub logical_file_id: LogicalFileId,
    /// Display name.
    pub file_name: String,
    /// Size in bytes of the representative version.
    pub size_bytes: i64,
    /// Effective content type.
    pub content_type: String,
    /// When the representative version was uploaded.
    pub uploaded_at: DateTime<Utc>,
    /// Who uploaded the representative version.
    pub uploader_username: String,
    /// Version number of the representative version.
    pub version: i32,
    /// Caller-visible download link: the configured base URL with the
    /// record id appended. Output shaping only.
    pub download_url: String,
}

/// File listing service with filter and sort support.
#[derive(Debug, Clone)]
pub struct SearchService {
    /// Metadata store.
    metadata: Arc<dyn MetadataStore>,
    /// Link rendering configuration.
    links: LinksConfig,
}

impl SearchService {
    /// Creates a new search service.
    pub fn new(metadata: Arc<dyn MetadataStore>, links: LinksConfig) -> Self {
        Self { metadata, links }
    }

    /// List files matching the criteria, one row per logical file at its
    /// highest matching version.
    pub async fn list(
        &self,
        params: FileFilterParams,
        identity: Option<&Identity>,
    ) -> AppResult<Vec<FileListing>> {
        require_identity(identity)?;

        let filter = FileFilter::compile(params);
        let records = self.metadata.query(&filter).await?;

        let mut survivors = reduce_to_latest(records);
        sort_records(&mut survivors, filter.sort_by, filter.order);

        Ok(survivors
            .into_iter()
            .map(|record| self.to_listing(record))
            .collect())
    }

    fn to_listing(&self, record: FileVersionRecord) -> FileListing {
        FileListing {
            download_url: format!("{}{}", self.links.download_base_url, record.id),
            content_type: record.content_type_or_default().to_string(),
            id: record.id,
            logical_file_id: record.logical_file_id,
            file_name: record.file_name,
            size_bytes: record.size_bytes,
            uploaded_at: record.uploaded_at,
            uploader_username: record.uploader_username,
            version: record.version,
        }
    }
}

/// Collapse to the highest-version record per logical file.
///
/// Records arrive in creation order; a tie on equal version numbers
/// (possible under the documented new-version race) keeps the first
/// encountered, which makes the outcome deterministic. Survivors stay in
/// first-encounter order until the caller's sort is applied.
fn reduce_to_latest(records: Vec<FileVersionRecord>) -> Vec<FileVersionRecord> {
    let mut by_logical: HashMap<LogicalFileId, usize> = HashMap::new();
    let mut survivors: Vec<FileVersionRecord> = Vec::new();

    for record in records {
        match by_logical.get(&record.logical_file_id) {
            Some(&slot) => {
                if record.version > survivors[slot].version {
                    survivors[slot] = record;
                }
            }
            None => {
                by_logical.insert(record.logical_file_id, survivors.len());
                survivors.push(record);
            }
        }
    }

    survivors
}

/// Order the surviving representatives. Applied after reduction so the
/// displayed order reflects only the records the caller will see.
fn sort_records(
    records: &mut [FileVersionRecord],
    sort_by: Option<SortKey>,
    order: SortDirection,
) {
    let Some(key) = sort_by else {
        return;
    };

    records.sort_by(|a, b| {
        let ordering = match key {
            SortKey::Date => a.uploaded_at.cmp(&b.uploaded_at),
            SortKey::Size => a.size_bytes.cmp(&b.size_bytes),
        };
        match order {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });
}
