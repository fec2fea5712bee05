//! Commonly used test utilities.

pub use crate::{
    arbitrary_generator::ArbitraryGenerator,
    validators::{arb_validator_id, arb_validator_ids, generate_validator_id, generate_validator_ids},
};
