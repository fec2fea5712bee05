//! The events that drive the validator operations state machine.

use akro_bridge_primitives::{
    operation_key::{OperationKey, ProtectedCall},
    types::ValidatorId,
};
use serde::{Deserialize, Serialize};

/// The external calls made to the validator operations engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidatorOpsEvent {
    /// A validator proposes or approves a call to a protected operation.
    Call {
        /// The identity making the call.
        caller: ValidatorId,
        /// The protected call.
        call: ProtectedCall,
    },

    /// A validator retracts its approval of a pending call.
    Cancel {
        /// The identity retracting its approval.
        caller: ValidatorId,
        /// The key of the pending call.
        key: OperationKey,
    },

    /// A validator proposes or approves replacing the validator set.
    TransferValidatorShip {
        /// The identity making the call.
        caller: ValidatorId,
        /// The proposed validator set.
        validators: Vec<ValidatorId>,
        /// The threshold that gates the transfer after this one, if any.
        threshold: Option<usize>,
    },
}

impl std::fmt::Display for ValidatorOpsEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidatorOpsEvent::Call { caller, call } => write!(f, "Call {call} by {caller}"),
            ValidatorOpsEvent::Cancel { caller, key } => write!(f, "Cancel {key} by {caller}"),
            ValidatorOpsEvent::TransferValidatorShip {
                caller,
                validators,
                threshold,
            } => match threshold {
                Some(threshold) => write!(
                    f,
                    "TransferValidatorShip to {} validators with threshold {threshold} by {caller}",
                    validators.len()
                ),
                None => write!(
                    f,
                    "TransferValidatorShip to {} validators by {caller}",
                    validators.len()
                ),
            },
        }
    }
}
