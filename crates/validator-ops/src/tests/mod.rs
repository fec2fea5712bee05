//! Testing utilities specific to the validator operations engine.
//!
//! [`ValueStore`] is a small collaborator that protects a single value behind the gate, with one
//! method per quorum policy, the same way a bridge contract protects its privileged entry points.


use std::{fmt, sync::Arc};

use akro_bridge_params::prelude::{ProtectedOp, ValidatorOpsParams};
use akro_bridge_primitives::{
    operation_key::ProtectedCall, policy::QuorumPolicy, types::ValidatorId,
};

use crate::{engine::ValidatorOps, errors::ValidatorOpsError, gate::GateOutcome};

// ===== Test Constants =====

/// Byte used to build the identity that deploys the engine in tests.
const DEPLOYER_BYTE: u8 = 0xde;

/// Tags of the protected operations declared by [`params`].
pub(crate) const SET_VALUE_TAGS: [&str; 4] =
    ["setValue", "setValueAny", "setValueAll", "setValueSome"];

/// Returns a validator identity whose bytes are all `n`.
///
/// `validator(0)` is the null identity.
pub(crate) const fn validator(n: u8) -> ValidatorId {
    ValidatorId::new([n; 20])
}

/// Returns the identity that deploys the engine in tests.
pub(crate) const fn deployer() -> ValidatorId {
    validator(DEPLOYER_BYTE)
}

/// Returns the identities `validator(n)` for each `n` in `ns`.
pub(crate) fn validators(ns: &[u8]) -> Vec<ValidatorId> {
    ns.iter().copied().map(validator).collect()
}

/// The call that sets the protected value to `value` under [`QuorumPolicy::Many`].
pub(crate) fn set_value_call(value: u64) -> ProtectedCall {
    ProtectedCall::new("setValue", &value).expect("u64 always encodes")
}

/// Parameters declaring the protected operations of [`ValueStore`].
pub(crate) fn params() -> Arc<ValidatorOpsParams> {
    let policies = [
        QuorumPolicy::Many,
        QuorumPolicy::Any,
        QuorumPolicy::All,
        QuorumPolicy::Some(2),
    ];

    Arc::new(ValidatorOpsParams {
        transfer_policy: QuorumPolicy::Many,
        operations: SET_VALUE_TAGS
            .iter()
            .zip(policies)
            .map(|(tag, policy)| ProtectedOp {
                tag: (*tag).to_string(),
                policy,
            })
            .collect(),
    })
}

/// Returns an engine whose validators are `validator(n)` for each `n` in `ns`, with the notices
/// of the setup drained.
pub(crate) fn ops_with(ns: &[u8]) -> ValidatorOps {
    let mut ops = ValidatorOps::new(deployer()).expect("deployer is not null");
    ops.transfer_validator_ship(validators(ns), &deployer())
        .expect("the deployer alone satisfies the transfer policy");
    ops.drain_notices();

    ops
}

/// Errors of the [`ValueStore`] collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum StoreError {
    /// The gate rejected the call.
    Rejected(ValidatorOpsError),

    /// The effect refused to store a zero value.
    ZeroValue,
}

impl From<ValidatorOpsError> for StoreError {
    fn from(err: ValidatorOpsError) -> Self {
        StoreError::Rejected(err)
    }
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Rejected(err) => write!(f, "rejected: {err}"),
            StoreError::ZeroValue => write!(f, "zero value"),
        }
    }
}

/// A collaborator that stores one value and only changes it through the gate.
#[derive(Debug, Clone)]
pub(crate) struct ValueStore {
    pub(crate) ops: ValidatorOps,
    pub(crate) value: u64,
}

impl ValueStore {
    /// Creates a store whose validators are `validator(n)` for each `n` in `ns`.
    pub(crate) fn with_validators(ns: &[u8]) -> Self {
        Self {
            ops: ops_with(ns),
            value: 0,
        }
    }

    fn store(
        &mut self,
        call: ProtectedCall,
        policy: QuorumPolicy,
        caller: &ValidatorId,
        value: u64,
    ) -> Result<GateOutcome<()>, StoreError> {
        let slot = &mut self.value;
        self.ops.guard(&call, policy, caller, |_| {
            *slot = value;
            Ok(())
        })
    }

    pub(crate) fn set_value(
        &mut self,
        caller: &ValidatorId,
        value: u64,
    ) -> Result<GateOutcome<()>, StoreError> {
        self.store(set_value_call(value), QuorumPolicy::Many, caller, value)
    }

    pub(crate) fn set_value_any(
        &mut self,
        caller: &ValidatorId,
        value: u64,
    ) -> Result<GateOutcome<()>, StoreError> {
        let call = ProtectedCall::new("setValueAny", &value).expect("u64 always encodes");
        self.store(call, QuorumPolicy::Any, caller, value)
    }

    pub(crate) fn set_value_all(
        &mut self,
        caller: &ValidatorId,
        value: u64,
    ) -> Result<GateOutcome<()>, StoreError> {
        let call = ProtectedCall::new("setValueAll", &value).expect("u64 always encodes");
        self.store(call, QuorumPolicy::All, caller, value)
    }

    pub(crate) fn set_value_some(
        &mut self,
        caller: &ValidatorId,
        value: u64,
        threshold: usize,
    ) -> Result<GateOutcome<()>, StoreError> {
        let call = ProtectedCall::new("setValueSome", &(value, threshold as u64))
            .expect("u64 always encodes");
        self.store(call, QuorumPolicy::Some(threshold), caller, value)
    }

    /// Stores `value` under [`QuorumPolicy::Many`], refusing zero inside the effect.
    pub(crate) fn set_nonzero_value(
        &mut self,
        caller: &ValidatorId,
        value: u64,
    ) -> Result<GateOutcome<()>, StoreError> {
        let call = ProtectedCall::new("setNonzeroValue", &value).expect("u64 always encodes");
        let slot = &mut self.value;
        self.ops.guard(&call, QuorumPolicy::Many, caller, |_| {
            if value == 0 {
                return Err(StoreError::ZeroValue);
            }

            *slot = value;
            Ok(())
        })
    }

    /// Passes the gate of `nestedFirst` under `outer`, whose effect stores `value` through the
    /// gate of `nestedSecond` under `inner`.
    pub(crate) fn nested(
        &mut self,
        caller: &ValidatorId,
        value: u64,
        outer: QuorumPolicy,
        inner: QuorumPolicy,
    ) -> Result<GateOutcome<GateOutcome<()>>, StoreError> {
        let outer_call = ProtectedCall::new("nestedFirst", &value).expect("u64 always encodes");
        let inner_call = nested_second_call(value);
        let slot = &mut self.value;

        self.ops.guard(&outer_call, outer, caller, |ops| {
            ops.guard(&inner_call, inner, caller, |_| {
                *slot = value;
                Ok(())
            })
        })
    }

    /// Calls `nestedSecond` directly.
    pub(crate) fn nested_second(
        &mut self,
        caller: &ValidatorId,
        value: u64,
        policy: QuorumPolicy,
    ) -> Result<GateOutcome<()>, StoreError> {
        self.store(nested_second_call(value), policy, caller, value)
    }
}

fn nested_second_call(value: u64) -> ProtectedCall {
    ProtectedCall::new("nestedSecond", &value).expect("u64 always encodes")
}
