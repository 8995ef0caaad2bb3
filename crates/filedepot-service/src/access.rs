//! Mutation access-control policies.
//!
//! One predicate decides whether an identity may update or delete a
//! record; update and delete use it identically. The active policy is
//! chosen once at startup from configuration — services hold an
//! `Arc<dyn MutationPolicy>` and never branch on which one is live.

use std::sync::Arc;

use filedepot_core::config::access::{AccessConfig, MutationPolicyKind};
use filedepot_core::error::AppError;
use filedepot_core::result::AppResult;
use filedepot_entity::{FileVersionRecord, Identity};

/// Decides whether an identity may mutate (update or delete) a record.
pub trait MutationPolicy: Send + Sync + std::fmt::Debug + 'static {
    /// Policy name, for logging.
    fn name(&self) -> &'static str;

    /// Whether the identity is permitted to mutate the record.
    fn can_mutate(&self, record: &FileVersionRecord, identity: &Identity) -> bool;
}

/// Only the original uploader may mutate.
#[derive(Debug, Clone, Copy, Default)]
pub struct OwnerOnlyPolicy;

impl MutationPolicy for OwnerOnlyPolicy {
    fn name(&self) -> &'static str {
        "owner"
    }

    fn can_mutate(&self, record: &FileVersionRecord, identity: &Identity) -> bool {
        record.uploader_id == identity.user_id
    }
}

/// The uploader, or anyone in the uploader's company, may mutate.
#[derive(Debug, Clone, Copy, Default)]
pub struct OwnerOrCompanyPolicy;

impl MutationPolicy for OwnerOrCompanyPolicy {
    fn name(&self) -> &'static str {
        "owner-or-company"
    }

    fn can_mutate(&self, record: &FileVersionRecord, identity: &Identity) -> bool {
        record.uploader_id == identity.user_id
            || record.uploader_company == identity.company
    }
}

/// Build the configured mutation policy.
pub fn policy_from_config(config: &AccessConfig) -> Arc<dyn MutationPolicy> {
    match config.policy {
        MutationPolicyKind::Owner => Arc::new(OwnerOnlyPolicy),
        MutationPolicyKind::OwnerOrCompany => Arc::new(OwnerOrCompanyPolicy),
    }
}

/// Reject unauthenticated callers before any policy is consulted.
pub fn require_identity(identity: Option<&Identity>) -> AppResult<&Identity> {
    identity.ok_or_else(|| AppError::authentication("Authentication required"))
}
