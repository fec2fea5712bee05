//! The Validator Operations State Machine (VOSM).
//!
//! Drives the engine from [`ValidatorOpsEvent`]s and turns every executed protected call into a
//! duty for the collaborator that owns the effect.

use std::sync::Arc;

use akro_bridge_params::prelude::ValidatorOpsParams;
use akro_bridge_primitives::{
    constants::RESERVED_TAGS, operation_key::ProtectedCall, types::ValidatorId,
};
use tracing::{debug, info};

use crate::{
    duties::ValidatorOpsDuty,
    engine::ValidatorOps,
    errors::{VOResult, ValidatorOpsError},
    events::ValidatorOpsEvent,
    gate::GateOutcome,
    notices::OperationNotice,
    state_machine::{SMOutput, StateMachine},
};

/// The output of the Validator Operations State Machine after processing an event.
pub type VOSMOutput = SMOutput<ValidatorOpsDuty, OperationNotice>;

/// The state machine facade over [`ValidatorOps`].
///
/// Protected operations are looked up by tag in the [`ValidatorOpsParams`] passed with every
/// event; calls to undeclared tags are rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatorOpsSM {
    ops: ValidatorOps,
}

impl StateMachine for ValidatorOpsSM {
    type Config = Arc<ValidatorOpsParams>;
    type Duty = ValidatorOpsDuty;
    type Notice = OperationNotice;
    type Event = ValidatorOpsEvent;
    type Error = ValidatorOpsError;

    fn process_event(
        &mut self,
        cfg: Self::Config,
        event: Self::Event,
    ) -> Result<VOSMOutput, Self::Error> {
        debug!(%event, "processing event");

        match event {
            ValidatorOpsEvent::Call { caller, call } => self.process_call(&cfg, &caller, call),
            ValidatorOpsEvent::Cancel { caller, key } => {
                self.ops.cancel_pending(&key, &caller)?;

                Ok(SMOutput::with_notices(self.ops.drain_notices()))
            }
            ValidatorOpsEvent::TransferValidatorShip {
                caller,
                validators,
                threshold,
            } => {
                match threshold {
                    Some(threshold) => self.ops.transfer_validator_ship_with_threshold(
                        validators, threshold, &caller,
                    )?,
                    None => self.ops.transfer_validator_ship(validators, &caller)?,
                };

                Ok(SMOutput::with_notices(self.ops.drain_notices()))
            }
        }
    }
}

impl ValidatorOpsSM {
    /// Creates a state machine driving `ops`.
    pub const fn new(ops: ValidatorOps) -> Self {
        Self { ops }
    }

    /// The engine driven by this state machine.
    pub const fn ops(&self) -> &ValidatorOps {
        &self.ops
    }

    /// Consumes the state machine and returns the engine.
    pub fn into_ops(self) -> ValidatorOps {
        self.ops
    }

    fn process_call(
        &mut self,
        cfg: &ValidatorOpsParams,
        caller: &ValidatorId,
        call: ProtectedCall,
    ) -> VOResult<VOSMOutput> {
        if RESERVED_TAGS.contains(&call.tag()) {
            return Err(ValidatorOpsError::UnknownOperation(call.tag().to_string()));
        }

        let policy = cfg
            .policy_of(call.tag())
            .ok_or_else(|| ValidatorOpsError::UnknownOperation(call.tag().to_string()))?;

        let outcome = self
            .ops
            .guard(&call, policy, caller, |_| Ok::<_, ValidatorOpsError>(()))?;

        let duties = match outcome {
            GateOutcome::Executed { key, .. } => {
                info!(%key, tag = call.tag(), "dispatching approved call");
                vec![ValidatorOpsDuty::ExecuteOperation { key, call }]
            }
            GateOutcome::Pending { .. } => Vec::new(),
        };

        Ok(SMOutput::with_duties_and_notices(
            duties,
            self.ops.drain_notices(),
        ))
    }
}
