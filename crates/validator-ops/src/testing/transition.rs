//! Value-based transition testing helpers.
//!
//! Utilities for testing state machines with specific, concrete values: single transitions,
//! rejected events and sequences of events.

use std::fmt::Debug;

use crate::state_machine::{SMOutput, StateMachine};

/// Describes a valid transition for value-based testing.
#[derive(Debug)]
pub(crate) struct Transition<S, E, D, N> {
    /// The initial state before the transition
    pub(crate) from_state: S,
    /// The event that triggers the transition
    pub(crate) event: E,
    /// The expected state after the transition
    pub(crate) expected_state: S,
    /// The expected duties emitted during the transition
    pub(crate) expected_duties: Vec<D>,
    /// The expected notices emitted during the transition
    pub(crate) expected_notices: Vec<N>,
}

/// Test a single transition with concrete values.
///
/// Creates a state machine in the initial state, processes the event, and checks the final
/// state, the duties and the notices against the expectations.
pub(crate) fn test_transition<SM, S, E, D, N, Err, CreateFn, GetStateFn>(
    create_sm: CreateFn,
    get_state: GetStateFn,
    config: SM::Config,
    transition: Transition<S, E, D, N>,
) where
    SM: StateMachine<Event = E, Duty = D, Notice = N, Error = Err>,
    S: PartialEq + Debug,
    D: PartialEq + Debug,
    N: PartialEq + Debug,
    Err: Debug,
    CreateFn: Fn(S) -> SM,
    GetStateFn: Fn(&SM) -> &S,
{
    let mut sm = create_sm(transition.from_state);

    let result = sm.process_event(config, transition.event);

    assert!(
        result.is_ok(),
        "Expected successful transition, got error: {:?}",
        result.unwrap_err()
    );

    let output = result.unwrap();

    assert_eq!(
        get_state(&sm),
        &transition.expected_state,
        "State mismatch after transition"
    );

    assert_eq!(output.duties, transition.expected_duties, "Duties mismatch");

    assert_eq!(
        output.notices, transition.expected_notices,
        "Notices mismatch"
    );
}

/// Describes an event that should be rejected.
#[derive(Debug)]
pub(crate) struct InvalidTransition<S, E, Err> {
    /// The initial state
    pub(crate) from_state: S,
    /// The event that should be rejected
    pub(crate) event: E,
    /// A function to verify the error type
    pub(crate) expected_error: fn(&Err) -> bool,
}

/// Test that an invalid transition produces the expected error and leaves the state untouched.
pub(crate) fn test_invalid_transition<SM, S, E, Err, CreateFn, GetStateFn>(
    create_sm: CreateFn,
    get_state: GetStateFn,
    config: SM::Config,
    invalid: InvalidTransition<S, E, Err>,
) where
    SM: StateMachine<Event = E, Error = Err>,
    S: Clone + PartialEq + Debug,
    Err: Debug,
    CreateFn: Fn(S) -> SM,
    GetStateFn: Fn(&SM) -> &S,
{
    let initial_state = invalid.from_state.clone();
    let mut sm = create_sm(invalid.from_state);

    let Err(err) = sm.process_event(config, invalid.event) else {
        panic!("Expected error, but transition succeeded");
    };

    assert!(
        (invalid.expected_error)(&err),
        "Error type mismatch. Got: {:?}",
        err,
    );

    assert_eq!(
        get_state(&sm),
        &initial_state,
        "State changed despite error"
    );
}

/// Event sequence tester for integration testing.
///
/// Runs a sequence of concrete events through a state machine and collects all outputs for
/// verification.
#[derive(Debug)]
pub(crate) struct EventSequence<SM, S, GetStateFn>
where
    SM: StateMachine,
    GetStateFn: Fn(&SM) -> &S,
{
    sm: SM,
    get_state: GetStateFn,
    outputs: Vec<SMOutput<SM::Duty, SM::Notice>>,
    errors: Vec<(usize, SM::Error)>, // index instead of event to avoid a Clone bound
}

impl<SM, S, GetStateFn> EventSequence<SM, S, GetStateFn>
where
    SM: StateMachine,
    GetStateFn: Fn(&SM) -> &S,
{
    /// Creates a new event sequence tester.
    pub(crate) const fn new(sm: SM, get_state: GetStateFn) -> Self {
        Self {
            sm,
            get_state,
            outputs: Vec::new(),
            errors: Vec::new(),
        }
    }

    /// Process an event and record the result.
    pub(crate) fn process(&mut self, config: SM::Config, event: SM::Event) -> &mut Self {
        let event_idx = self.outputs.len() + self.errors.len();
        match self.sm.process_event(config, event) {
            Ok(output) => self.outputs.push(output),
            Err(e) => self.errors.push((event_idx, e)),
        }
        self
    }

    /// Get reference to the current state.
    pub(crate) fn state(&self) -> &S {
        (self.get_state)(&self.sm)
    }

    /// Assert that all events succeeded (no errors).
    pub(crate) fn assert_no_errors(&self) -> &Self
    where
        SM::Error: Debug,
    {
        assert!(
            self.errors.is_empty(),
            "Expected no errors, but got {} errors at indices: {:?}",
            self.errors.len(),
            self.errors.iter().map(|(idx, _)| idx).collect::<Vec<_>>()
        );
        self
    }

    /// Get all duties emitted during the sequence.
    pub(crate) fn all_duties(&self) -> Vec<&SM::Duty> {
        self.outputs.iter().flat_map(|o| &o.duties).collect()
    }

    /// Get all notices emitted during the sequence.
    pub(crate) fn all_notices(&self) -> Vec<&SM::Notice> {
        self.outputs.iter().flat_map(|o| &o.notices).collect()
    }

    /// Get the index of every rejected event along with its error.
    pub(crate) fn all_errors(&self) -> Vec<(usize, &SM::Error)> {
        self.errors.iter().map(|(idx, e)| (*idx, e)).collect()
    }

    /// Assert that specific duties were emitted (in any order).
    pub(crate) fn assert_duties_contain(&self, expected: &[SM::Duty]) -> &Self
    where
        SM::Duty: PartialEq + Debug,
    {
        let all_duties = self.all_duties();
        for duty in expected {
            assert!(
                all_duties.contains(&duty),
                "Expected duty {:?} not found. All duties: {:?}",
                duty,
                all_duties
            );
        }
        self
    }
}
