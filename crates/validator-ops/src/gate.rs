//! The gate that wraps every protected operation.
//!
//! A call to a protected operation passes the gate in three steps: the caller must be a current
//! validator, the call's approval is recorded against the key derived from its tag and arguments,
//! and once the operation's policy is satisfied the pending entry is deleted and the effect runs
//! with the arguments of the call that completed the quorum.
//!
//! Effects receive the engine mutably, so an effect can itself call another protected operation.
//! Each such checkpoint derives its own key and collects its own approvals.

use std::fmt;

use akro_bridge_primitives::{
    operation_key::{OperationKey, ProtectedCall},
    policy::QuorumPolicy,
    types::ValidatorId,
};
use tracing::{info, trace, warn};

use crate::{
    engine::ValidatorOps,
    errors::{VOResult, ValidatorOpsError},
    notices::OperationNotice,
};

/// The result of passing a call through the gate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateOutcome<T> {
    /// The approval was recorded; the effect has not run.
    Pending {
        /// The key under which the approval was recorded.
        key: OperationKey,
        /// The approvals collected so far.
        approvals: usize,
        /// The approvals needed under the current set.
        required: usize,
    },

    /// The policy was satisfied and the effect ran.
    Executed {
        /// The key of the executed call.
        key: OperationKey,
        /// What the effect returned.
        output: T,
    },
}

impl<T> GateOutcome<T> {
    /// The key of the call.
    pub const fn key(&self) -> &OperationKey {
        match self {
            GateOutcome::Pending { key, .. } | GateOutcome::Executed { key, .. } => key,
        }
    }

    /// Whether the effect ran.
    pub const fn is_executed(&self) -> bool {
        matches!(self, GateOutcome::Executed { .. })
    }

    /// The output of the effect, if it ran.
    pub fn into_output(self) -> Option<T> {
        match self {
            GateOutcome::Executed { output, .. } => Some(output),
            GateOutcome::Pending { .. } => None,
        }
    }
}

/// What the gate decided after recording an approval.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Decision {
    Wait { approvals: usize, required: usize },
    Execute { approvals: usize },
}

impl ValidatorOps {
    /// Passes `call`, made by `caller`, through the gate under `policy`.
    ///
    /// Returns [`GateOutcome::Pending`] while the policy is not satisfied, and runs `effect` and
    /// returns [`GateOutcome::Executed`] once it is. Fails with
    /// [`ValidatorOpsError::Unauthorized`] for a non-validator caller,
    /// [`ValidatorOpsError::InvalidThreshold`] when a `Some(k)` policy exceeds the current set,
    /// and [`ValidatorOpsError::AlreadyApproved`] when the caller approved this exact call before.
    ///
    /// If anything fails, including `effect`, the engine is restored to its state before the call.
    pub fn guard<T, E, F>(
        &mut self,
        call: &ProtectedCall,
        policy: QuorumPolicy,
        caller: &ValidatorId,
        effect: F,
    ) -> Result<GateOutcome<T>, E>
    where
        E: From<ValidatorOpsError> + fmt::Display,
        F: FnOnce(&mut Self) -> Result<T, E>,
    {
        let checkpoint = self.checkpoint();

        let result = self.pass_gate(call, policy, caller, effect);
        if let Err(err) = &result {
            warn!(%caller, tag = call.tag(), %err, "protected call rejected");
            self.restore(checkpoint);
        }

        result
    }

    fn pass_gate<T, E, F>(
        &mut self,
        call: &ProtectedCall,
        policy: QuorumPolicy,
        caller: &ValidatorId,
        effect: F,
    ) -> Result<GateOutcome<T>, E>
    where
        E: From<ValidatorOpsError>,
        F: FnOnce(&mut Self) -> Result<T, E>,
    {
        let key = call.key();

        match self.record_approval(&key, call.tag(), policy, caller)? {
            Decision::Wait {
                approvals,
                required,
            } => Ok(GateOutcome::Pending {
                key,
                approvals,
                required,
            }),
            Decision::Execute { approvals } => {
                info!(%key, tag = call.tag(), %policy, approvals, "performing protected call");
                self.emit(OperationNotice::Performed {
                    key,
                    tag: call.tag().to_string(),
                    generation: self.generation,
                    approvals,
                });

                let output = effect(self)?;

                Ok(GateOutcome::Executed { key, output })
            }
        }
    }

    fn record_approval(
        &mut self,
        key: &OperationKey,
        tag: &str,
        policy: QuorumPolicy,
        caller: &ValidatorId,
    ) -> VOResult<Decision> {
        if !self.validators.contains(caller) {
            return Err(ValidatorOpsError::not_a_validator(*caller));
        }

        let set_size = self.validators.size();
        policy.validate(set_size)?;
        let required = policy.required(set_size);

        if policy == QuorumPolicy::Any {
            trace!(%key, %caller, "any validator suffices");
            return Ok(Decision::Execute { approvals: 1 });
        }

        let approvals = self
            .registry
            .approve(*key, tag, *caller, &self.validators)?;

        let notice = if approvals == 1 {
            OperationNotice::Created {
                key: *key,
                tag: tag.to_string(),
                proposer: *caller,
                required,
            }
        } else {
            OperationNotice::Upvoted {
                key: *key,
                approver: *caller,
                approvals,
                required,
            }
        };
        self.emit(notice);

        if !policy.is_satisfied(approvals, set_size) {
            info!(%key, %tag, %caller, approvals, required, "approval recorded, awaiting quorum");
            return Ok(Decision::Wait {
                approvals,
                required,
            });
        }

        self.registry.remove(key);

        Ok(Decision::Execute { approvals })
    }

    /// Retracts the approval `caller` gave for `key` and returns the approvals left.
    ///
    /// Fails with [`ValidatorOpsError::NoSuchPendingOperation`] if nothing is pending under `key`
    /// and with [`ValidatorOpsError::Unauthorized`] if `caller` did not approve it.
    pub fn cancel_pending(&mut self, key: &OperationKey, caller: &ValidatorId) -> VOResult<usize> {
        let remaining = self.registry.cancel(key, caller).inspect_err(|err| {
            warn!(%key, %caller, %err, "cancellation rejected");
        })?;

        info!(%key, %caller, remaining, "approval retracted");
        self.emit(OperationNotice::Cancelled {
            key: *key,
            approver: *caller,
            remaining,
        });

        Ok(remaining)
    }
}
