use std::sync::Arc;

use akro_bridge_primitives::operation_key::ProtectedCall;
use akro_bridge_validator_ops::{
    events::ValidatorOpsEvent,
    machine::{VOSMOutput, ValidatorOpsSM},
    state_machine::StateMachine,
};
use anyhow::{anyhow, bail, Result};
use tracing::info;

use crate::{
    cli::{CallArgs, CancelArgs, FileArgs, TransferArgs},
    params, state,
};

pub(crate) fn handle_call(files: &FileArgs, args: CallArgs) -> Result<()> {
    let call = match (args.args, args.value) {
        (Some(encoded), None) => {
            let encoded = hex::decode(encoded.trim_start_matches("0x"))
                .map_err(|e| anyhow!("invalid hex arguments: {e}"))?;
            ProtectedCall::from_encoded(args.tag, encoded)
        }
        (None, Some(value)) => ProtectedCall::new(args.tag, &value)?,
        (None, None) => ProtectedCall::from_encoded(args.tag, Vec::new()),
        (Some(_), Some(_)) => bail!("--args and --value are mutually exclusive"),
    };

    info!(action = "submitting call", caller = %args.caller, %call, key = %call.key());

    process(
        files,
        ValidatorOpsEvent::Call {
            caller: args.caller,
            call,
        },
    )
}

pub(crate) fn handle_cancel(files: &FileArgs, args: CancelArgs) -> Result<()> {
    info!(action = "cancelling approval", caller = %args.caller, key = %args.key);

    process(
        files,
        ValidatorOpsEvent::Cancel {
            caller: args.caller,
            key: args.key,
        },
    )
}

pub(crate) fn handle_transfer(files: &FileArgs, args: TransferArgs) -> Result<()> {
    info!(
        action = "submitting validatorship transfer",
        caller = %args.caller,
        validators = args.validators.len(),
        threshold = ?args.threshold,
    );

    process(
        files,
        ValidatorOpsEvent::TransferValidatorShip {
            caller: args.caller,
            validators: args.validators,
            threshold: args.threshold,
        },
    )
}

/// Feeds `event` to the state machine restored from the state file and persists the result.
///
/// A rejected event leaves the state file untouched.
fn process(files: &FileArgs, event: ValidatorOpsEvent) -> Result<()> {
    let params = Arc::new(params::load(files.params.as_deref())?);
    let mut sm = ValidatorOpsSM::new(state::load(&files.state)?);

    let output = sm.process_event(params, event)?;

    state::save(&files.state, &sm.into_ops())?;
    report(&output);

    Ok(())
}

fn report(output: &VOSMOutput) {
    for notice in &output.notices {
        println!("notice: {notice}");
    }

    for duty in &output.duties {
        println!("duty: {duty}");
    }
}
