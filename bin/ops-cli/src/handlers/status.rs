use anyhow::Result;

use crate::{
    cli::{FileArgs, StatusArgs},
    state,
};

pub(crate) fn handle_status(files: &FileArgs, args: StatusArgs) -> Result<()> {
    let ops = state::load(&files.state)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&ops.snapshot())?);
        return Ok(());
    }

    println!("generation: {}", ops.generation());
    println!(
        "transfer policy: {} (requires {} of {})",
        ops.transfer_policy(),
        ops.transfer_policy().required(ops.validator_count()),
        ops.validator_count()
    );
    println!("default transfer policy: {}", ops.default_transfer_policy());

    println!("validators:");
    for (index, validator) in ops.validators().iter().enumerate() {
        println!("  [{index}] {validator}");
    }

    println!("pending operations: {}", ops.pending_operation_count());
    for pending in ops.pending_operations() {
        println!(
            "  {} {} ({} approvals)",
            pending.key(),
            pending.tag(),
            pending.approvals()
        );
        for approver in pending.approvers() {
            println!("    - {approver}");
        }
    }

    Ok(())
}
