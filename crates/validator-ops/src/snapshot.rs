//! Serializable snapshot of the engine state.

use akro_bridge_primitives::{
    constants::MAX_VALIDATORS, policy::QuorumPolicy, types::ValidatorId,
    validator_set::ValidatorSet,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    engine::ValidatorOps,
    errors::{VOResult, ValidatorOpsError},
    registry::{PendingOperation, PendingOperationRegistry},
};

/// Everything needed to restore a [`ValidatorOps`] with identical observable state.
///
/// Undrained notices are not part of the snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidatorOpsSnapshot {
    /// The generation of the validator set.
    pub generation: u64,

    /// The validators in enumeration order.
    pub validators: Vec<ValidatorId>,

    /// The policy gating the next validatorship transfer.
    pub transfer_policy: QuorumPolicy,

    /// The policy a plain validatorship transfer installs.
    pub default_transfer_policy: QuorumPolicy,

    /// The pending operations in creation order.
    pub pending: Vec<PendingOperation>,
}

impl ValidatorOps {
    /// Captures the current state.
    pub fn snapshot(&self) -> ValidatorOpsSnapshot {
        ValidatorOpsSnapshot {
            generation: self.generation,
            validators: self.validators.members().to_vec(),
            transfer_policy: self.transfer_policy,
            default_transfer_policy: self.default_transfer_policy,
            pending: self.registry.iter().cloned().collect(),
        }
    }

    /// Restores an engine from `snapshot`, rejecting snapshots that violate the engine invariants.
    pub fn from_snapshot(snapshot: ValidatorOpsSnapshot) -> VOResult<Self> {
        let validators = ValidatorSet::from_members(snapshot.validators)
            .map_err(|reason| ValidatorOpsError::CorruptSnapshot(reason.to_string()))?;

        let set_size = validators.size();
        let policies = [
            (snapshot.transfer_policy, set_size),
            (snapshot.default_transfer_policy, MAX_VALIDATORS),
        ];
        for (policy, bound) in policies {
            policy
                .validate(bound)
                .map_err(|err| ValidatorOpsError::CorruptSnapshot(err.to_string()))?;
        }

        let registry = PendingOperationRegistry::restore(snapshot.pending, &validators)?;

        debug!(
            generation = snapshot.generation,
            validators = set_size,
            pending = registry.count(),
            "restored validator operations from snapshot"
        );

        Ok(Self {
            validators,
            registry,
            generation: snapshot.generation,
            transfer_policy: snapshot.transfer_policy,
            default_transfer_policy: snapshot.default_transfer_policy,
            notices: Vec::new(),
        })
    }
}
