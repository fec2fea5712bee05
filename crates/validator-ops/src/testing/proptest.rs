//! Property-based testing macros and strategies for the validator operations state machine.
//!
//! The macros test invariant properties that must hold across arbitrary inputs. The strategies
//! draw identities from a small pool so that generated events often hit existing validators and
//! pending entries.

use akro_bridge_primitives::{policy::QuorumPolicy, types::ValidatorId};
use proptest::prelude::*;

use crate::{
    engine::ValidatorOps,
    errors::ValidatorOpsError,
    events::ValidatorOpsEvent,
    tests::{set_value_call, validator, SET_VALUE_TAGS},
};

/// Property: State machines should be deterministic.
///
/// Given the same initial state and event, the state machine should always produce the same
/// result.
///
/// # Arguments
/// * `$sm_type` - The state machine type
/// * `$create_fn` - Function to create SM from state: `Fn(State) -> SM`
/// * `$get_state_fn` - Function to get state from SM: `Fn(&SM) -> &State`
/// * `$config` - Configuration to pass to `process_event`
/// * `$state_strategy` - Proptest strategy for generating states
/// * `$event_strategy` - Proptest strategy for generating events
#[macro_export]
macro_rules! prop_deterministic {
    ($sm_type:ty, $create_fn:expr, $get_state_fn:expr, $config:expr, $state_strategy:expr, $event_strategy:expr) => {
        proptest::proptest! {
            #[test]
            fn state_machine_is_deterministic(
                state in $state_strategy,
                event in $event_strategy,
            ) {
                use $crate::state_machine::StateMachine;

                let cfg = $config;
                let mut sm1: $sm_type = $create_fn(state.clone());
                let mut sm2: $sm_type = $create_fn(state);

                let result1 = sm1.process_event(cfg.clone(), event.clone());
                let result2 = sm2.process_event(cfg, event);

                match (result1, result2) {
                    (Ok(out1), Ok(out2)) => {
                        proptest::prop_assert_eq!($get_state_fn(&sm1), $get_state_fn(&sm2));
                        proptest::prop_assert_eq!(out1.duties, out2.duties);
                        proptest::prop_assert_eq!(out1.notices, out2.notices);
                    }
                    (Err(err1), Err(err2)) => {
                        proptest::prop_assert_eq!(err1, err2);
                    }
                    _ => {
                        proptest::prop_assert!(false, "Inconsistent results: one succeeded, one failed");
                    }
                }
            }
        }
    };
}

/// Property: Events must either change the state, emit output, or produce an error that leaves
/// the state untouched.
///
/// # Arguments
/// * `$sm_type` - The state machine type
/// * `$create_fn` - Function to create SM from state: `Fn(State) -> SM`
/// * `$get_state_fn` - Function to get state from SM: `Fn(&SM) -> &State`
/// * `$config` - Configuration to pass to `process_event`
/// * `$state_strategy` - Proptest strategy for generating states
/// * `$event_strategy` - Proptest strategy for generating events
#[macro_export]
macro_rules! prop_no_silent_acceptance {
    ($sm_type:ty, $create_fn:expr, $get_state_fn:expr, $config:expr, $state_strategy:expr, $event_strategy:expr) => {
        proptest::proptest! {
            #[test]
            fn events_transition_or_error(
                state in $state_strategy,
                event in $event_strategy,
            ) {
                use $crate::state_machine::StateMachine;

                let initial_state = state.clone();
                let mut sm: $sm_type = $create_fn(state);

                let result = sm.process_event($config, event);
                let final_state = $get_state_fn(&sm).clone();

                match result {
                    Ok(output) => {
                        let state_changed = initial_state != final_state;
                        let has_output = !output.duties.is_empty() || !output.notices.is_empty();

                        proptest::prop_assert!(
                            state_changed || has_output,
                            "Event was accepted but nothing happened (no state change, duties, or notices)"
                        );
                    }
                    Err(_) => {
                        proptest::prop_assert_eq!(
                            &initial_state,
                            &final_state,
                            "State changed despite error"
                        );
                    }
                }
            }
        }
    };
}

/// The number of identities the strategies draw from.
const POOL_SIZE: u8 = 5;

/// Generates an identity from the pool.
pub(crate) fn arb_validator() -> impl Strategy<Value = ValidatorId> {
    (1..=POOL_SIZE).prop_map(validator)
}

/// Generates a duplicate-free list of identities from the pool.
pub(crate) fn arb_validator_list() -> impl Strategy<Value = Vec<ValidatorId>> {
    proptest::sample::subsequence((1..=POOL_SIZE).collect::<Vec<_>>(), 1..=POOL_SIZE as usize)
        .prop_shuffle()
        .prop_map(|ns| ns.into_iter().map(validator).collect())
}

/// Generates an engine with a validator set drawn from the pool and a few pending approvals.
pub(crate) fn arb_ops() -> impl Strategy<Value = ValidatorOps> {
    (
        arb_validator_list(),
        prop::collection::vec((arb_validator(), 0u64..4), 0..6),
    )
        .prop_map(|(members, approvals)| {
            let deployer = members[0];
            let mut ops = ValidatorOps::new(deployer).expect("deployer is not null");
            ops.transfer_validator_ship(members, &deployer)
                .expect("a single deployer satisfies the transfer policy");

            for (approver, value) in approvals {
                // approvals from outsiders or repeated approvals are rejected and rolled back
                let _ = ops.guard(&set_value_call(value), QuorumPolicy::All, &approver, |_| {
                    Ok::<_, ValidatorOpsError>(())
                });
            }

            ops.drain_notices();
            ops
        })
}

/// Generates an event against the protected operations of [`crate::tests::params`].
pub(crate) fn arb_event() -> impl Strategy<Value = ValidatorOpsEvent> {
    let call = (
        arb_validator(),
        proptest::sample::select(SET_VALUE_TAGS.to_vec()),
        0u64..4,
    )
        .prop_map(|(caller, tag, value)| ValidatorOpsEvent::Call {
            caller,
            call: akro_bridge_primitives::operation_key::ProtectedCall::new(tag, &value)
                .expect("u64 always encodes"),
        });

    let cancel = (arb_validator(), 0u64..4).prop_map(|(caller, value)| ValidatorOpsEvent::Cancel {
        caller,
        key: set_value_call(value).key(),
    });

    let transfer = (
        arb_validator(),
        arb_validator_list(),
        proptest::option::of(0usize..=POOL_SIZE as usize),
    )
        .prop_map(
            |(caller, validators, threshold)| ValidatorOpsEvent::TransferValidatorShip {
                caller,
                validators,
                threshold,
            },
        );

    prop_oneof![call, cancel, transfer]
}
