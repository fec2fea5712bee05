//! Default values for the validator operations parameters.

use akro_bridge_primitives::policy::QuorumPolicy;

/// Default policy that gates a validatorship transfer.
pub(crate) const TRANSFER_POLICY: QuorumPolicy = QuorumPolicy::Many;

/// Default protected operations of the bridge contract.
pub(crate) const PROTECTED_OPS: [(&str, QuorumPolicy); 3] = [
    ("mint", QuorumPolicy::Many),
    ("pauseBridge", QuorumPolicy::Any),
    ("resumeBridge", QuorumPolicy::All),
];
