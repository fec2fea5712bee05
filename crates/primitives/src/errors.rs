//! Errors for the primitive types shared across the workspace.

use thiserror::Error;

use crate::{constants::MAX_VALIDATORS, types::ValidatorId};

/// The reason a validator list was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidSetReason {
    /// The list has no entries.
    #[error("validator list is empty")]
    Empty,

    /// The list contains the null identity.
    #[error("null identity at position {0}")]
    NullIdentity(usize),

    /// The list contains the same identity more than once.
    #[error("duplicate identity {0}")]
    Duplicate(ValidatorId),

    /// The list is larger than [`MAX_VALIDATORS`].
    #[error("{0} identities exceed the bound of {max}", max = MAX_VALIDATORS)]
    TooMany(usize),
}

/// Errors that can occur while constructing or validating primitive types.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PrimitiveError {
    /// The validator list violates one of the set invariants.
    #[error("invalid validator set: {0}")]
    InvalidSet(#[from] InvalidSetReason),

    /// A `Some(k)` threshold is outside of `[1, set_size]`.
    #[error("threshold {threshold} is outside of [1, {set_size}]")]
    InvalidThreshold {
        /// The requested threshold.
        threshold: usize,
        /// The size of the set the threshold was checked against.
        set_size: usize,
    },

    /// A validator identity could not be parsed.
    #[error("invalid validator id: {0}")]
    InvalidValidatorId(String),

    /// An operation key could not be parsed.
    #[error("invalid operation key: {0}")]
    InvalidOperationKey(String),

    /// The arguments of a protected call could not be encoded.
    #[error("failed to encode arguments of {tag}: {reason}")]
    ArgsEncoding {
        /// The tag of the protected operation.
        tag: String,
        /// The underlying encoder error.
        reason: String,
    },
}
