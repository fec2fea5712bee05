//! Testing utilities for the validator operations state machine.
//!
//! - [`transition`] - Value-based transition testing helpers
//! - [`proptest`] - Property-based testing macros and strategies
//!
//! ## Value-Based Testing
//!
//! ```rust,ignore
//! use crate::testing::*;
//!
//! test_transition(
//!     ValidatorOpsSM::new,
//!     ValidatorOpsSM::ops,
//!     params(),
//!     Transition {
//!         from_state: ops,
//!         event: ValidatorOpsEvent::Call { caller, call },
//!         expected_state: expected_ops,
//!         expected_duties: vec![],
//!         expected_notices: vec![],
//!     },
//! );
//! ```
//!
//! ## Property-Based Testing
//!
//! ```rust,ignore
//! use crate::prop_deterministic;
//!
//! prop_deterministic!(
//!     ValidatorOpsSM,
//!     ValidatorOpsSM::new,
//!     ValidatorOpsSM::ops,
//!     params(),
//!     arb_ops(),
//!     arb_event()
//! );
//! ```

pub(crate) mod proptest;
pub(crate) mod transition;

pub(crate) use transition::{
    test_invalid_transition, test_transition, EventSequence, InvalidTransition, Transition,
};
