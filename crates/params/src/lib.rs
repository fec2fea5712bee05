//! This crate contains the parameters that dictate the behavior of the validator operations engine
//! in a way that ensures that every node replaying the same calls reaches the same decisions.

mod default;
pub mod errors;
pub mod operations;
pub mod prelude;
