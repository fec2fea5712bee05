//! Replacement of the validator set.
//!
//! A validatorship transfer is itself a protected operation gated by the current transfer policy.
//! Once it executes, every pending approval belonged to the old set and is discarded.

use akro_bridge_primitives::{
    constants::{TRANSFER_VALIDATOR_SHIP_TAG, TRANSFER_VALIDATOR_SHIP_WITH_THRESHOLD_TAG},
    operation_key::ProtectedCall,
    policy::QuorumPolicy,
    types::ValidatorId,
    validator_set::ValidatorSet,
};
use tracing::info;

use crate::{
    engine::ValidatorOps,
    errors::{VOResult, ValidatorOpsError},
    gate::GateOutcome,
    notices::OperationNotice,
};

impl ValidatorOps {
    /// Proposes or approves replacing the validator set with `new_validators`.
    ///
    /// Once executed, the transfer policy of the new generation is the configured default. The
    /// output of an executed transfer is the number of pending operations that were discarded.
    pub fn transfer_validator_ship(
        &mut self,
        new_validators: Vec<ValidatorId>,
        caller: &ValidatorId,
    ) -> VOResult<GateOutcome<usize>> {
        ValidatorSet::validate(&new_validators)?;

        let next_policy = self.default_transfer_policy;
        next_policy.validate(new_validators.len())?;

        let call = ProtectedCall::new(TRANSFER_VALIDATOR_SHIP_TAG, &new_validators)?;
        let policy = self.transfer_policy;

        self.guard(&call, policy, caller, move |ops| {
            ops.replace_validators(new_validators, next_policy)
        })
    }

    /// Proposes or approves replacing the validator set with `new_validators`, with `threshold`
    /// approvals gating the transfer after that.
    ///
    /// `threshold` is checked against the size of `new_validators` before any approval is
    /// recorded.
    pub fn transfer_validator_ship_with_threshold(
        &mut self,
        new_validators: Vec<ValidatorId>,
        threshold: usize,
        caller: &ValidatorId,
    ) -> VOResult<GateOutcome<usize>> {
        ValidatorSet::validate(&new_validators)?;

        let next_policy = QuorumPolicy::some(threshold, new_validators.len())?;

        let call = ProtectedCall::new(
            TRANSFER_VALIDATOR_SHIP_WITH_THRESHOLD_TAG,
            &(new_validators.clone(), threshold as u64),
        )?;
        let policy = self.transfer_policy;

        self.guard(&call, policy, caller, move |ops| {
            ops.replace_validators(new_validators, next_policy)
        })
    }

    fn replace_validators(
        &mut self,
        new_validators: Vec<ValidatorId>,
        next_policy: QuorumPolicy,
    ) -> VOResult<usize> {
        let previous = self.validators.members().to_vec();
        let size = self
            .validators
            .replace(new_validators)
            .map_err(ValidatorOpsError::InvalidSet)?;

        let cleared = self.registry.clear_all();
        self.generation += 1;
        self.transfer_policy = next_policy;

        info!(
            generation = self.generation,
            size,
            cleared,
            transfer_policy = %next_policy,
            "validatorship transferred"
        );

        self.emit(OperationNotice::ValidatorShipTransferred {
            generation: self.generation,
            previous,
            validators: self.validators.members().to_vec(),
            transfer_policy: next_policy,
            cleared,
        });

        Ok(cleared)
    }
}
