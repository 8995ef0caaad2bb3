//! The caller's resolved identity.

use serde::{Deserialize, Serialize};

use filedepot_core::types::UserId;

/// The authenticated caller, as resolved by an external collaborator
/// (token verification is out of scope for this crate).
///
/// Resolved once per request and passed by value into the services. It is
/// never persisted as a live reference; only the uploader snapshot fields
/// of a [`crate::FileVersionRecord`] copy from it at upload time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Identity {
    /// The user's id.
    pub user_id: UserId,
    /// The user's username.
    pub username: String,
    /// The user's company.
    pub company: String,
    /// The user's role.
    pub role: String,
}

impl Identity {
    /// Creates a new identity.
    pub fn new(
        user_id: UserId,
        username: impl Into<String>,
        company: impl Into<String>,
        role: impl Into<String>,
    ) -> Self {
        Self {
            user_id,
            username: username.into(),
            company: company.into(),
            role: role.into(),
        }
    }
}
