//! Metadata filter types.
//!
//! [`FileFilterParams`] is the raw, all-optional set of criteria a caller
//! supplies (typically straight from a query string). [`FileFilter`] is
//! the compiled form the metadata store executes: empty strings have been
//! normalized to absence and calendar dates parsed into timestamp bounds.

use chrono::{DateTime, Days, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::warn;

use super::sorting::{SortDirection, SortKey};

/// Raw filter criteria. Every field is optional; absence means
/// "no constraint".
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FileFilterParams {
    /// Exact match on the record id.
    pub id: Option<String>,
    /// Case-insensitive substring match on the display file name.
    pub file_name: Option<String>,
    /// Case-insensitive substring match on the uploader's username.
    pub username: Option<String>,
    /// Exact match on the uploader's user id.
    pub user_id: Option<String>,
    /// Exact match on the uploader's company.
    pub company: Option<String>,
    /// Exact match on the content type.
    pub content_type: Option<String>,
    /// Inclusive lower bound on the upload date, `%Y-%m-%d`.
    pub date_from: Option<String>,
    /// Inclusive upper bound on the upload date, `%Y-%m-%d`.
    pub date_to: Option<String>,
    /// Inclusive lower bound on the size in bytes.
    pub min_size: Option<i64>,
    /// Inclusive upper bound on the size in bytes.
    pub max_size: Option<i64>,
    /// Sort key: `"date"` or `"size"`.
    pub sort_by: Option<String>,
    /// Sort order: `"asc"` (default) or `"desc"`.
    pub order: Option<String>,
}

/// Compiled filter executed by the metadata store.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FileFilter {
    /// Record id, compared against the record's rendered id. An unknown
    /// or malformed id matches nothing, never everything.
    pub id: Option<String>,
    /// Lowercased file-name fragment.
    pub file_name: Option<String>,
    /// Lowercased username fragment.
    pub username: Option<String>,
    /// Uploader id, compared against the rendered uploader id.
    pub user_id: Option<String>,
    /// Exact uploader company.
    pub company: Option<String>,
    /// Exact content type.
    pub content_type: Option<String>,
    /// Inclusive lower timestamp bound (midnight UTC of `date_from`).
    pub uploaded_from: Option<DateTime<Utc>>,
    /// Exclusive upper timestamp bound (midnight UTC of the day after
    /// `date_to`, so the named calendar day is fully included).
    pub uploaded_before: Option<DateTime<Utc>>,
    /// Inclusive lower size bound.
    pub min_size: Option<i64>,
    /// Inclusive upper size bound.
    pub max_size: Option<i64>,
    /// Sort key applied to the listing output.
    pub sort_by: Option<SortKey>,
    /// Sort direction applied to the listing output.
    pub order: SortDirection,
}

impl FileFilter {
    /// Compile raw criteria into an executable filter.
    ///
    /// Empty strings are treated as absent. A date that fails to parse is
    /// dropped as if it had not been supplied — long-standing leniency
    /// kept for compatibility, logged at `warn` so it is never invisible.
    pub fn compile(params: FileFilterParams) -> Self {
        Self {
            id: non_empty(params.id),
            file_name: non_empty(params.file_name).map(|s| s.to_lowercase()),
            username: non_empty(params.username).map(|s| s.to_lowercase()),
            user_id: non_empty(params.user_id),
            company: non_empty(params.company),
            content_type: non_empty(params.content_type),
            uploaded_from: non_empty(params.date_from)
                .and_then(|s| parse_day(&s, "date_from"))
                .map(day_start),
            uploaded_before: non_empty(params.date_to)
                .and_then(|s| parse_day(&s, "date_to"))
                .and_then(|d| d.checked_add_days(Days::new(1)))
                .map(day_start),
            min_size: params.min_size,
            max_size: params.max_size,
            sort_by: non_empty(params.sort_by).and_then(|s| SortKey::parse(&s)),
            order: non_empty(params.order)
                .map(|s| SortDirection::parse(&s))
                .unwrap_or_default(),
        }
    }

    /// Whether any record-level constraint is present (sorting aside).
    pub fn is_unconstrained(&self) -> bool {
        self.id.is_none()
            && self.file_name.is_none()
            && self.username.is_none()
            && self.user_id.is_none()
            && self.company.is_none()
            && self.content_type.is_none()
            && self.uploaded_from.is_none()
            && self.uploaded_before.is_none()
            && self.min_size.is_none()
            && self.max_size.is_none()
    }
}

/// Normalize an optional string: empty or whitespace-only means absent.
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

fn parse_day(s: &str, field: &str) -> Option<NaiveDate> {
    match NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        Ok(date) => Some(date),
        Err(err) => {
            warn!(field, value = s, %err, "Ignoring unparseable date filter");
            None
        }
    }
}

fn day_start(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(NaiveTime::MIN).and_utc()
}
