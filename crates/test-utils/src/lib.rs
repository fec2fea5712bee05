//! This crate provides test-utilities for the validator operations workspace.
//!
//! These utilities are mostly used to generate arbitrary identities and validator lists for
//! testing purposes, either from random bytes or as `proptest` strategies.

pub mod arbitrary_generator;
pub mod prelude;
pub mod validators;
