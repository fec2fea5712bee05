//! Errors for the validator operations parameters.

use thiserror::Error;

/// Error while validating the validator operations parameters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParamsError {
    /// The same tag is declared more than once.
    #[error("protected operation {0} is declared more than once")]
    DuplicateTag(String),

    /// A tag owned by the engine is declared as a generic protected operation.
    #[error("protected operation {0} is reserved")]
    ReservedTag(String),

    /// A tag is empty.
    #[error("protected operation tags must not be empty")]
    EmptyTag,

    /// A `some` policy has a zero threshold and can never be satisfied.
    #[error("policy of {0} has a zero threshold")]
    ZeroThreshold(String),
}
