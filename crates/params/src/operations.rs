//! Parameters that declare which operations are protected and under which quorum policy.

use std::collections::BTreeSet;

use akro_bridge_primitives::{constants::RESERVED_TAGS, policy::QuorumPolicy};
use serde::{Deserialize, Serialize};

use crate::{
    default::{PROTECTED_OPS, TRANSFER_POLICY},
    errors::ParamsError,
};

/// A protected operation: a stable tag and the policy that gates every call to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProtectedOp {
    /// The tag identifying the operation.
    pub tag: String,

    /// The policy that a call to this operation must satisfy before it executes.
    pub policy: QuorumPolicy,
}

/// The parameters of the validator operations engine.
///
/// Differences in these values among the nodes replaying the same calls lead to different
/// decisions about which operations execute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidatorOpsParams {
    /// The policy that gates a validatorship transfer unless a transfer installs an explicit
    /// threshold for its generation.
    #[serde(default = "default_transfer_policy")]
    pub transfer_policy: QuorumPolicy,

    /// The protected operations.
    #[serde(default)]
    pub operations: Vec<ProtectedOp>,
}

fn default_transfer_policy() -> QuorumPolicy {
    TRANSFER_POLICY
}

impl Default for ValidatorOpsParams {
    fn default() -> Self {
        Self {
            transfer_policy: TRANSFER_POLICY,
            operations: PROTECTED_OPS
                .iter()
                .map(|(tag, policy)| ProtectedOp {
                    tag: (*tag).to_string(),
                    policy: *policy,
                })
                .collect(),
        }
    }
}

impl ValidatorOpsParams {
    /// Returns the policy of the operation `tag`, if it is declared.
    pub fn policy_of(&self, tag: &str) -> Option<QuorumPolicy> {
        self.operations
            .iter()
            .find(|op| op.tag == tag)
            .map(|op| op.policy)
    }

    /// Checks that the declared operations are well-formed.
    ///
    /// `Some(k)` upper bounds are not checked here since they depend on the validator set at the
    /// time of the call.
    pub fn validate(&self) -> Result<(), ParamsError> {
        if self.transfer_policy == QuorumPolicy::Some(0) {
            return Err(ParamsError::ZeroThreshold("transfer_policy".to_string()));
        }

        let mut seen = BTreeSet::new();
        for op in &self.operations {
            if op.tag.is_empty() {
                return Err(ParamsError::EmptyTag);
            }

            if RESERVED_TAGS.contains(&op.tag.as_str()) {
                return Err(ParamsError::ReservedTag(op.tag.clone()));
            }

            if op.policy == QuorumPolicy::Some(0) {
                return Err(ParamsError::ZeroThreshold(op.tag.clone()));
            }

            if !seen.insert(op.tag.as_str()) {
                return Err(ParamsError::DuplicateTag(op.tag.clone()));
            }
        }

        Ok(())
    }
}
