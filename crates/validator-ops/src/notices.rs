//! Notices emitted by the engine for collaborators that follow its decisions (e.g. an indexer).

use std::fmt;

use akro_bridge_primitives::{
    operation_key::OperationKey, policy::QuorumPolicy, types::ValidatorId,
};
use serde::{Deserialize, Serialize};

/// Something observable happened to a protected operation or to the validator set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum OperationNotice {
    /// The first approval for a call was recorded.
    Created {
        /// The key of the new pending operation.
        key: OperationKey,
        /// The tag of the protected operation.
        tag: String,
        /// The validator that proposed the call.
        proposer: ValidatorId,
        /// The number of approvals needed under the current set.
        required: usize,
    },

    /// A further approval for a pending call was recorded.
    Upvoted {
        /// The key of the pending operation.
        key: OperationKey,
        /// The validator that approved.
        approver: ValidatorId,
        /// The number of approvals collected so far.
        approvals: usize,
        /// The number of approvals needed under the current set.
        required: usize,
    },

    /// A call satisfied its policy and its effect is being performed.
    Performed {
        /// The key of the call.
        key: OperationKey,
        /// The tag of the protected operation.
        tag: String,
        /// The generation of the validator set that approved the call.
        generation: u64,
        /// The number of approvals that satisfied the policy.
        approvals: usize,
    },

    /// A validator retracted its approval.
    Cancelled {
        /// The key of the pending operation.
        key: OperationKey,
        /// The validator that retracted.
        approver: ValidatorId,
        /// The approvals left; zero means the entry was deleted.
        remaining: usize,
    },

    /// The validator set was replaced.
    ValidatorShipTransferred {
        /// The generation of the new set.
        generation: u64,
        /// The members of the replaced set.
        previous: Vec<ValidatorId>,
        /// The members of the new set.
        validators: Vec<ValidatorId>,
        /// The policy that gates the next transfer.
        transfer_policy: QuorumPolicy,
        /// The number of pending operations that were discarded.
        cleared: usize,
    },
}

impl fmt::Display for OperationNotice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OperationNotice::Created {
                key,
                tag,
                proposer,
                required,
            } => write!(
                f,
                "Created {tag} {key} by {proposer} (1 of {required})"
            ),
            OperationNotice::Upvoted {
                key,
                approver,
                approvals,
                required,
            } => write!(
                f,
                "Upvoted {key} by {approver} ({approvals} of {required})"
            ),
            OperationNotice::Performed {
                key,
                tag,
                generation,
                approvals,
            } => write!(
                f,
                "Performed {tag} {key} with {approvals} approvals in generation {generation}"
            ),
            OperationNotice::Cancelled {
                key,
                approver,
                remaining,
            } => write!(f, "Cancelled {key} by {approver} ({remaining} left)"),
            OperationNotice::ValidatorShipTransferred {
                generation,
                validators,
                cleared,
                ..
            } => write!(
                f,
                "ValidatorShipTransferred to {} validators in generation {generation} ({cleared} pending cleared)",
                validators.len()
            ),
        }
    }
}
