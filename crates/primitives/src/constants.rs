//! Constants that bound the validator operations engine.
//!
//! These values are part of the observable contract of the engine i.e., changing them changes which
//! validator sets are accepted and which operation keys are derived for a given call.

/// The maximum number of validators in a validator set.
///
/// Approvals were historically tracked as a bitmask over validator positions in a 256-bit word,
/// hence the bound.
pub const MAX_VALIDATORS: usize = 256;

/// The length of a validator identity in bytes (an EVM address).
pub const VALIDATOR_ID_LEN: usize = 20;

/// The length of an operation key in bytes.
pub const OPERATION_KEY_LEN: usize = 32;

/// Domain separator mixed into every operation key.
pub const OPERATION_KEY_DOMAIN: &[u8] = b"akro-bridge/validator-ops/v1";

/// The tag of the protected operation that replaces the validator set.
pub const TRANSFER_VALIDATOR_SHIP_TAG: &str = "transferValidatorShip";

/// The tag of the protected operation that replaces the validator set and installs an explicit
/// decision threshold for the next generation.
pub const TRANSFER_VALIDATOR_SHIP_WITH_THRESHOLD_TAG: &str = "transferValidatorShipWithThreshold";

/// Tags that are owned by the engine itself and cannot be declared as generic protected
/// operations.
pub const RESERVED_TAGS: [&str; 2] = [
    TRANSFER_VALIDATOR_SHIP_TAG,
    TRANSFER_VALIDATOR_SHIP_WITH_THRESHOLD_TAG,
];
