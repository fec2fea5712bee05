//! Identity types used by the validator operations engine.

use std::{fmt, str::FromStr};

use arbitrary::Arbitrary;
use borsh::{BorshDeserialize, BorshSerialize};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::{constants::VALIDATOR_ID_LEN, errors::PrimitiveError};

/// The identity of a validator: a 20-byte EVM address.
///
/// The all-zero address is the null identity and is never accepted as a member of a validator
/// set.
#[derive(
    Copy,
    Clone,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Arbitrary,
    BorshSerialize,
    BorshDeserialize,
)]
pub struct ValidatorId([u8; VALIDATOR_ID_LEN]);

impl ValidatorId {
    /// The null identity.
    pub const NULL: Self = Self([0u8; VALIDATOR_ID_LEN]);

    /// Creates a new identity from raw bytes.
    pub const fn new(bytes: [u8; VALIDATOR_ID_LEN]) -> Self {
        Self(bytes)
    }

    /// Returns the identity as a byte slice.
    pub const fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Returns true if this is the null identity.
    pub fn is_null(&self) -> bool {
        self.0.iter().all(|&b| b == 0)
    }
}

impl From<[u8; VALIDATOR_ID_LEN]> for ValidatorId {
    fn from(bytes: [u8; VALIDATOR_ID_LEN]) -> Self {
        Self(bytes)
    }
}

impl TryFrom<&[u8]> for ValidatorId {
    type Error = PrimitiveError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        let array: [u8; VALIDATOR_ID_LEN] = bytes.try_into().map_err(|_| {
            PrimitiveError::InvalidValidatorId(format!(
                "expected {VALIDATOR_ID_LEN} bytes, got {}",
                bytes.len()
            ))
        })?;

        Ok(Self(array))
    }
}

impl FromStr for ValidatorId {
    type Err = PrimitiveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let stripped = s.strip_prefix("0x").unwrap_or(s);
        let bytes = hex::decode(stripped)
            .map_err(|e| PrimitiveError::InvalidValidatorId(format!("{s}: {e}")))?;

        Self::try_from(bytes.as_slice())
    }
}

impl AsRef<[u8]> for ValidatorId {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for ValidatorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl fmt::Debug for ValidatorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ValidatorId({self})")
    }
}

impl Serialize for ValidatorId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ValidatorId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let encoded = <String as Deserialize>::deserialize(deserializer)?;
        encoded.parse().map_err(de::Error::custom)
    }
}
