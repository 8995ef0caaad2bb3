//! Sorting types for listing output.

use serde::{Deserialize, Serialize};

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// Ascending order.
    Asc,
    /// Descending order.
    Desc,
}

impl Default for SortDirection {
    fn default() -> Self {
        Self::Asc
    }
}

impl SortDirection {
    /// Parse a direction string; anything other than `"desc"`
    /// (case-insensitive) is ascending.
    pub fn parse(s: &str) -> Self {
        if s.eq_ignore_ascii_case("desc") {
            Self::Desc
        } else {
            Self::Asc
        }
    }
}

/// Which record field a listing is sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Sort by upload timestamp.
    Date,
    /// Sort by size in bytes.
    Size,
}

impl SortKey {
    /// Parse a sort key string (case-insensitive). Unrecognized keys
    /// yield `None` and the listing keeps its unsorted order.
    pub fn parse(s: &str) -> Option<Self> {
        if s.eq_ignore_ascii_case("date") {
            Some(Self::Date)
        } else if s.eq_ignore_ascii_case("size") {
            Some(Self::Size)
        } else {
            None
        }
    }
}
