//! Generators for validator identities and validator lists.

use std::collections::BTreeSet;

use akro_bridge_primitives::{constants::MAX_VALIDATORS, types::ValidatorId};
use proptest::prelude::*;

use crate::arbitrary_generator::ArbitraryGenerator;

/// Generates a random non-null validator identity.
pub fn generate_validator_id() -> ValidatorId {
    let mut generator = ArbitraryGenerator::new_with_size(64);

    loop {
        let id: ValidatorId = generator.generate();
        if !id.is_null() {
            return id;
        }
    }
}

/// Generates `n` distinct random non-null validator identities.
pub fn generate_validator_ids(n: usize) -> Vec<ValidatorId> {
    let mut seen = BTreeSet::new();
    let mut ids = Vec::with_capacity(n);

    while ids.len() < n {
        let id = generate_validator_id();
        if seen.insert(id) {
            ids.push(id);
        }
    }

    ids
}

/// Generates an arbitrary non-null validator identity.
pub fn arb_validator_id() -> impl Strategy<Value = ValidatorId> {
    any::<[u8; 20]>()
        .prop_filter("the null identity is never a validator", |bytes| {
            bytes.iter().any(|b| *b != 0)
        })
        .prop_map(ValidatorId::new)
}

/// Generates a list of distinct non-null validator identities whose size lies in `size`.
pub fn arb_validator_ids(
    size: impl Into<proptest::collection::SizeRange>,
) -> impl Strategy<Value = Vec<ValidatorId>> {
    proptest::collection::btree_set(arb_validator_id(), size)
        .prop_map(|ids| ids.into_iter().collect::<Vec<_>>())
        .prop_shuffle()
        .prop_filter("a validator set holds at most MAX_VALIDATORS identities", |ids| {
            ids.len() <= MAX_VALIDATORS
        })
}
