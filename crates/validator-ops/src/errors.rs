//! Errors that can occur while authorizing calls in the validator operations engine.

use std::fmt;

use akro_bridge_primitives::{
    errors::{InvalidSetReason, PrimitiveError},
    operation_key::OperationKey,
    types::ValidatorId,
};
use thiserror::Error;

/// Why a caller was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnauthorizedReason {
    /// The caller is not in the current validator set.
    NotAValidator,

    /// The caller tried to retract an approval it never gave.
    NotAnApprover,
}

impl fmt::Display for UnauthorizedReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnauthorizedReason::NotAValidator => write!(f, "not a validator"),
            UnauthorizedReason::NotAnApprover => write!(f, "did not approve the operation"),
        }
    }
}

/// Errors that can occur in the validator operations engine.
///
/// Every error is a rejection of the call that triggered it. The engine state is left exactly as
/// it was before the call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidatorOpsError {
    /// The caller is not allowed to perform the call.
    #[error("{caller} is unauthorized: {reason}")]
    Unauthorized {
        /// The identity that made the call.
        caller: ValidatorId,
        /// Why the call was refused.
        reason: UnauthorizedReason,
    },

    /// The caller already approved this exact call.
    #[error("{approver} already approved {key}")]
    AlreadyApproved {
        /// The key of the pending operation.
        key: OperationKey,
        /// The identity that tried to approve twice.
        approver: ValidatorId,
    },

    /// There is no pending operation with the given key.
    #[error("no pending operation with key {0}")]
    NoSuchPendingOperation(OperationKey),

    /// A validator list violates the set invariants.
    #[error("invalid validator set: {0}")]
    InvalidSet(#[from] InvalidSetReason),

    /// A threshold is outside of `[1, set_size]`.
    #[error("threshold {threshold} is outside of [1, {set_size}]")]
    InvalidThreshold {
        /// The requested threshold.
        threshold: usize,
        /// The size of the set the threshold was checked against.
        set_size: usize,
    },

    /// The tag of a call is not a declared protected operation.
    #[error("unknown protected operation {0}")]
    UnknownOperation(String),

    /// A persisted snapshot violates the engine invariants.
    #[error("corrupt snapshot: {0}")]
    CorruptSnapshot(String),

    /// Any other error from the primitive types.
    #[error(transparent)]
    Primitive(PrimitiveError),
}

impl From<PrimitiveError> for ValidatorOpsError {
    fn from(err: PrimitiveError) -> Self {
        match err {
            PrimitiveError::InvalidSet(reason) => ValidatorOpsError::InvalidSet(reason),
            PrimitiveError::InvalidThreshold {
                threshold,
                set_size,
            } => ValidatorOpsError::InvalidThreshold {
                threshold,
                set_size,
            },
            other => ValidatorOpsError::Primitive(other),
        }
    }
}

impl ValidatorOpsError {
    pub(crate) const fn not_a_validator(caller: ValidatorId) -> Self {
        ValidatorOpsError::Unauthorized {
            caller,
            reason: UnauthorizedReason::NotAValidator,
        }
    }

    pub(crate) const fn not_an_approver(caller: ValidatorId) -> Self {
        ValidatorOpsError::Unauthorized {
            caller,
            reason: UnauthorizedReason::NotAnApprover,
        }
    }
}

/// The result type for operations in the validator operations engine.
pub type VOResult<T> = Result<T, ValidatorOpsError>;
