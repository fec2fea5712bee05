//! This crate implements the validator operations engine of the bridge.
//!
//! The engine gates state-changing operations behind quorum policies over a validator set. Every
//! call to a protected operation is either rejected, recorded as an approval that waits for more
//! validators to agree, or executed once its policy is satisfied. Replacing the validator set is
//! itself a protected operation and discards every approval collected under the old set.
//!
//! The engine is a synchronous state machine: every call runs to completion against `&mut self`
//! and a rejected call leaves the engine exactly as it found it.

pub mod duties;
pub mod engine;
pub mod errors;
pub mod events;
pub mod gate;
pub mod machine;
pub mod notices;
pub mod registry;
pub mod snapshot;
pub mod state_machine;
pub mod transfer;

#[cfg(test)]
pub(crate) mod testing;
#[cfg(test)]
mod tests;
