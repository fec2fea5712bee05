use std::{fs, path::Path};

use akro_bridge_params::prelude::ValidatorOpsParams;
use anyhow::{anyhow, Context};

/// Loads the params file at `path`, or the built-in defaults if no path is given.
pub(crate) fn load(path: Option<&Path>) -> Result<ValidatorOpsParams, anyhow::Error> {
    let params = match path {
        Some(path) => {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("failed to read params file {}", path.display()))?;

            toml::from_str(&contents)
                .map_err(|e| anyhow!(format!("Failed to parse params file: {}", e)))?
        }
        None => ValidatorOpsParams::default(),
    };

    params.validate()?;

    Ok(params)
}
