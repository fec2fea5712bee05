//! Persistence of the engine state as a JSON snapshot.

use std::{fs, path::Path};

use akro_bridge_validator_ops::{engine::ValidatorOps, snapshot::ValidatorOpsSnapshot};
use anyhow::{bail, Context};
use tracing::debug;

/// Loads the engine from the snapshot at `path`.
pub(crate) fn load(path: &Path) -> Result<ValidatorOps, anyhow::Error> {
    if !path.exists() {
        bail!(
            "state file {} does not exist, run `init` first",
            path.display()
        );
    }

    let contents = fs::read(path)
        .with_context(|| format!("failed to read state file {}", path.display()))?;
    let snapshot: ValidatorOpsSnapshot = serde_json::from_slice(&contents)
        .with_context(|| format!("failed to parse state file {}", path.display()))?;

    debug!(path = %path.display(), generation = snapshot.generation, "loaded state");

    Ok(ValidatorOps::from_snapshot(snapshot)?)
}

/// Writes the snapshot of `ops` to `path`.
///
/// The snapshot is first written next to `path` and then renamed over it so that an interrupted
/// write never leaves a truncated state file behind.
pub(crate) fn save(path: &Path, ops: &ValidatorOps) -> Result<(), anyhow::Error> {
    let contents = serde_json::to_vec_pretty(&ops.snapshot())?;

    let tmp = path.with_extension("tmp");
    fs::write(&tmp, contents)
        .with_context(|| format!("failed to write state file {}", tmp.display()))?;
    fs::rename(&tmp, path)
        .with_context(|| format!("failed to replace state file {}", path.display()))?;

    debug!(path = %path.display(), generation = ops.generation(), "saved state");

    Ok(())
}
