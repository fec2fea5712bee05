//! The duties that the validator operations state machine hands to its collaborators.

use akro_bridge_primitives::operation_key::{OperationKey, ProtectedCall};

/// The duties that need to be performed once the validators have agreed on a call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidatorOpsDuty {
    /// Perform the effect of a protected call whose policy was satisfied.
    ExecuteOperation {
        /// The key of the approved call.
        key: OperationKey,
        /// The approved call, with the arguments to perform it with.
        call: ProtectedCall,
    },
}

impl std::fmt::Display for ValidatorOpsDuty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidatorOpsDuty::ExecuteOperation { call, .. } => {
                write!(f, "ExecuteOperation {call}")
            }
        }
    }
}
