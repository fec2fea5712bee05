use akro_bridge_validator_ops::engine::ValidatorOps;
use anyhow::{bail, Result};
use tracing::info;

use crate::{
    cli::{FileArgs, InitArgs},
    params, state,
};

pub(crate) fn handle_init(files: &FileArgs, args: InitArgs) -> Result<()> {
    if files.state.exists() && !args.force {
        bail!(
            "state file {} already exists, pass --force to overwrite it",
            files.state.display()
        );
    }

    let params = params::load(files.params.as_deref())?;
    let ops = ValidatorOps::from_params(args.deployer, &params)?;

    state::save(&files.state, &ops)?;

    info!(
        action = "initialized validator operations",
        deployer = %args.deployer,
        transfer_policy = %ops.transfer_policy(),
        state = %files.state.display(),
    );

    Ok(())
}
