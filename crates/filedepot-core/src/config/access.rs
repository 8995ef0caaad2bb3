//! Mutation access-control configuration.

use serde::{Deserialize, Serialize};

/// Which mutation policy is active for the deployment.
///
/// Selected once at startup; services never branch on the variant at
/// call time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MutationPolicyKind {
    /// Only the uploader may update or delete a record.
    Owner,
    /// The uploader, or anyone in the uploader's company, may mutate.
    OwnerOrCompany,
}

impl Default for MutationPolicyKind {
    fn default() -> Self {
        Self::Owner
    }
}

/// Access-control configuration section.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AccessConfig {
    /// The mutation policy: `"owner"` (default) or `"owner-or-company"`.
    #[serde(default)]
    pub policy: MutationPolicyKind,
}
