//! The validator operations engine: the validator set, the pending approvals and the read-only
//! surface exposed to collaborators.
//!
//! The gate ([`crate::gate`]) and the validatorship transfer ([`crate::transfer`]) are implemented
//! as further `impl` blocks on [`ValidatorOps`].

use akro_bridge_params::prelude::ValidatorOpsParams;
use akro_bridge_primitives::{
    constants::MAX_VALIDATORS, operation_key::OperationKey, policy::QuorumPolicy,
    types::ValidatorId, validator_set::ValidatorSet,
};
use tracing::{debug, info};

use crate::{
    errors::VOResult,
    notices::OperationNotice,
    registry::{PendingOperation, PendingOperationRegistry},
};

/// The quorum-based authorization engine.
///
/// Owns the validator set and the registry of pending operations exclusively. Collaborators only
/// ever see them through the read-only accessors below.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatorOps {
    pub(crate) validators: ValidatorSet,
    pub(crate) registry: PendingOperationRegistry,
    /// Incremented on every executed validatorship transfer.
    pub(crate) generation: u64,
    /// The policy gating the next validatorship transfer.
    pub(crate) transfer_policy: QuorumPolicy,
    /// The policy a plain validatorship transfer installs for the next generation.
    pub(crate) default_transfer_policy: QuorumPolicy,
    /// Notices not yet drained by collaborators.
    pub(crate) notices: Vec<OperationNotice>,
}

impl ValidatorOps {
    /// Creates an engine whose only validator is the deployer, with validatorship transfers gated
    /// by [`QuorumPolicy::Many`].
    pub fn new(deployer: ValidatorId) -> VOResult<Self> {
        Self::with_transfer_policy(deployer, QuorumPolicy::Many)
    }

    /// Creates an engine whose only validator is the deployer, with validatorship transfers gated
    /// by `transfer_policy`.
    ///
    /// The upper bound of a `Some(k)` policy is checked against every list a plain transfer
    /// installs, not against the deployer. While the deployer is alone, a policy it cannot satisfy
    /// is replaced by [`QuorumPolicy::All`] until the first transfer installs `transfer_policy`.
    pub fn with_transfer_policy(
        deployer: ValidatorId,
        transfer_policy: QuorumPolicy,
    ) -> VOResult<Self> {
        let validators = ValidatorSet::new(deployer)?;
        transfer_policy.validate(MAX_VALIDATORS)?;

        let initial_policy = if transfer_policy.validate(validators.size()).is_ok() {
            transfer_policy
        } else {
            QuorumPolicy::All
        };

        info!(
            %deployer,
            %transfer_policy,
            %initial_policy,
            "validator operations initialized"
        );

        Ok(Self {
            validators,
            registry: PendingOperationRegistry::new(),
            generation: 0,
            transfer_policy: initial_policy,
            default_transfer_policy: transfer_policy,
            notices: Vec::new(),
        })
    }

    /// Creates an engine whose only validator is the deployer, configured from `params`.
    pub fn from_params(deployer: ValidatorId, params: &ValidatorOpsParams) -> VOResult<Self> {
        Self::with_transfer_policy(deployer, params.transfer_policy)
    }

    /// Whether `id` is a current validator.
    pub fn is_validator(&self, id: &ValidatorId) -> bool {
        self.validators.contains(id)
    }

    /// The number of current validators.
    pub fn validator_count(&self) -> usize {
        self.validators.size()
    }

    /// The validator at `index` in enumeration order.
    pub fn validator_at(&self, index: usize) -> Option<&ValidatorId> {
        self.validators.at(index)
    }

    /// The current validator set.
    pub const fn validators(&self) -> &ValidatorSet {
        &self.validators
    }

    /// The number of operations awaiting approvals.
    pub fn pending_operation_count(&self) -> usize {
        self.registry.count()
    }

    /// The key of the pending operation at `index` in creation order.
    pub fn pending_operation_key_at(&self, index: usize) -> Option<&OperationKey> {
        self.registry.key_at(index)
    }

    /// The keys of all pending operations in creation order.
    pub fn pending_operation_keys(&self) -> &[OperationKey] {
        self.registry.keys()
    }

    /// The pending operation for `key`.
    pub fn pending_operation(&self, key: &OperationKey) -> Option<&PendingOperation> {
        self.registry.get(key)
    }

    /// Iterates over the pending operations in creation order.
    pub fn pending_operations(&self) -> impl Iterator<Item = &PendingOperation> {
        self.registry.iter()
    }

    /// The number of approvals collected for `key`; zero if nothing is pending under it.
    pub fn approvals_of(&self, key: &OperationKey) -> usize {
        self.registry.approvals(key)
    }

    /// The generation of the current validator set.
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// The policy gating the next validatorship transfer.
    pub const fn transfer_policy(&self) -> QuorumPolicy {
        self.transfer_policy
    }

    /// The policy a plain validatorship transfer installs for the next generation.
    pub const fn default_transfer_policy(&self) -> QuorumPolicy {
        self.default_transfer_policy
    }

    /// Notices emitted since the last drain.
    pub fn notices(&self) -> &[OperationNotice] {
        &self.notices
    }

    /// Takes every notice emitted since the last drain.
    pub fn drain_notices(&mut self) -> Vec<OperationNotice> {
        std::mem::take(&mut self.notices)
    }

    pub(crate) fn emit(&mut self, notice: OperationNotice) {
        debug!(%notice, "emitting notice");
        self.notices.push(notice);
    }

    /// Captures the full engine state so that a rejected call can be undone.
    pub(crate) fn checkpoint(&self) -> Self {
        self.clone()
    }

    pub(crate) fn restore(&mut self, checkpoint: Self) {
        *self = checkpoint;
    }
}
