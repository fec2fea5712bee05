//! Quorum policies and the evaluator that decides whether a number of approvals satisfies them.

use std::fmt;

use arbitrary::Arbitrary;
use serde::{Deserialize, Serialize};

use crate::errors::PrimitiveError;

/// The rule that determines how many distinct approvals a protected operation needs.
///
/// A policy is declared once per protected operation and evaluated against the size of the
/// validator set at the time of each call.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Arbitrary, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuorumPolicy {
    /// A single approval from any current validator.
    Any,

    /// At least `k` approvals, with `1 <= k <= set size`.
    Some(usize),

    /// A strict majority of the validator set.
    #[default]
    Many,

    /// Every member of the validator set.
    All,
}

impl QuorumPolicy {
    /// Creates a `Some(threshold)` policy, checking it against `set_size`.
    pub fn some(threshold: usize, set_size: usize) -> Result<Self, PrimitiveError> {
        let policy = QuorumPolicy::Some(threshold);
        policy.validate(set_size)?;

        Ok(policy)
    }

    /// Checks that the policy can be satisfied by a set of `set_size` validators.
    ///
    /// Only `Some(k)` can fail: the threshold must lie in `[1, set_size]`.
    pub fn validate(&self, set_size: usize) -> Result<(), PrimitiveError> {
        match *self {
            QuorumPolicy::Some(threshold) if threshold == 0 || threshold > set_size => {
                Err(PrimitiveError::InvalidThreshold {
                    threshold,
                    set_size,
                })
            }
            _ => Ok(()),
        }
    }

    /// The number of approvals required under a set of `set_size` validators.
    pub const fn required(&self, set_size: usize) -> usize {
        match *self {
            QuorumPolicy::Any => 1,
            QuorumPolicy::Some(threshold) => threshold,
            QuorumPolicy::Many => set_size / 2 + 1,
            QuorumPolicy::All => set_size,
        }
    }

    /// Whether `approvals` distinct approvals satisfy the policy under a set of `set_size`
    /// validators.
    pub const fn is_satisfied(&self, approvals: usize, set_size: usize) -> bool {
        approvals >= 1 && approvals >= self.required(set_size)
    }
}

impl fmt::Display for QuorumPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuorumPolicy::Any => write!(f, "any"),
            QuorumPolicy::Some(threshold) => write!(f, "some({threshold})"),
            QuorumPolicy::Many => write!(f, "many"),
            QuorumPolicy::All => write!(f, "all"),
        }
    }
}
