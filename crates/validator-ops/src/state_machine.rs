//! Generic state machine infrastructure.
//!
//! This module provides the output type and the trait that the validator operations facade
//! implements so that it can be driven like any other state machine of the bridge.

/// Generic output from a state machine after processing an event.
///
/// - `duties`: Actions that need to be executed by a collaborator.
/// - `notices`: What happened while the event was processed, for observers.
///
/// # Type Parameters
///
/// - `D`: The duty type specific to this state machine
/// - `N`: The notice type specific to this state machine
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SMOutput<D, N> {
    /// The duties that need to be performed by external executors.
    pub duties: Vec<D>,
    /// The notices emitted while processing the event.
    pub notices: Vec<N>,
}

impl<D, N> SMOutput<D, N> {
    /// Creates an output with only notices.
    pub const fn with_notices(notices: Vec<N>) -> Self {
        Self {
            duties: Vec::new(),
            notices,
        }
    }

    /// Creates an output with both duties and notices.
    pub const fn with_duties_and_notices(duties: Vec<D>, notices: Vec<N>) -> Self {
        Self { duties, notices }
    }
}

/// Trait for state machines that process events and emit duties and notices.
///
/// # Example
///
/// ```ignore
/// impl StateMachine for ValidatorOpsSM {
///     type Config = Arc<ValidatorOpsParams>;
///     type Duty = ValidatorOpsDuty;
///     type Notice = OperationNotice;
///     type Event = ValidatorOpsEvent;
///     type Error = ValidatorOpsError;
///
///     fn process_event(&mut self, cfg: Self::Config, event: Self::Event)
///         -> Result<SMOutput<Self::Duty, Self::Notice>, Self::Error>
///     {
///         // Implementation
///     }
/// }
/// ```
pub trait StateMachine {
    /// The static configuration consulted while processing events.
    type Config;

    /// The type of duties this state machine can emit.
    type Duty;

    /// The type of notices this state machine can emit.
    type Notice;

    /// The type of events this state machine can process.
    type Event;

    /// The error type returned when event processing fails.
    type Error;

    /// Processes an event and returns the output (duties and notices) or an error.
    ///
    /// A rejected event must leave the state machine unchanged.
    fn process_event(
        &mut self,
        cfg: Self::Config,
        event: Self::Event,
    ) -> Result<SMOutput<Self::Duty, Self::Notice>, Self::Error>;
}
