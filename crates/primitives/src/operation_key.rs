//! Derivation of the keys under which approvals for protected calls are accumulated.
//!
//! A protected call is identified by the tag of the operation (a stable name for the function
//! being protected) and the canonical encoding of its arguments. The caller is deliberately not
//! part of the key: every validator that wants the same effect must submit the same tag and
//! arguments, and their approvals land on the same key.

use std::{fmt, str::FromStr};

use arbitrary::Arbitrary;
use borsh::{BorshDeserialize, BorshSerialize};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use sha2::{Digest, Sha256};

use crate::{
    constants::{OPERATION_KEY_DOMAIN, OPERATION_KEY_LEN},
    errors::PrimitiveError,
};

/// A deterministic fingerprint of a protected call.
#[derive(
    Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Arbitrary, BorshSerialize, BorshDeserialize,
)]
pub struct OperationKey([u8; OPERATION_KEY_LEN]);

impl OperationKey {
    /// Derives the key of a call to the operation `tag` whose arguments encode to
    /// `encoded_args`.
    ///
    /// The tag is length-prefixed so that no (tag, args) pair can collide with another pair that
    /// merely shifts bytes between the two.
    pub fn derive(tag: &str, encoded_args: &[u8]) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(OPERATION_KEY_DOMAIN);
        hasher.update((tag.len() as u64).to_le_bytes());
        hasher.update(tag.as_bytes());
        hasher.update(encoded_args);

        Self(hasher.finalize().into())
    }

    /// Returns the key as a byte array.
    pub const fn as_bytes(&self) -> &[u8; OPERATION_KEY_LEN] {
        &self.0
    }
}

impl From<[u8; OPERATION_KEY_LEN]> for OperationKey {
    fn from(bytes: [u8; OPERATION_KEY_LEN]) -> Self {
        Self(bytes)
    }
}

impl FromStr for OperationKey {
    type Err = PrimitiveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let stripped = s.strip_prefix("0x").unwrap_or(s);
        let bytes = hex::decode(stripped)
            .map_err(|e| PrimitiveError::InvalidOperationKey(format!("{s}: {e}")))?;
        let array: [u8; OPERATION_KEY_LEN] = bytes.try_into().map_err(|b: Vec<u8>| {
            PrimitiveError::InvalidOperationKey(format!(
                "expected {OPERATION_KEY_LEN} bytes, got {}",
                b.len()
            ))
        })?;

        Ok(Self(array))
    }
}

impl fmt::Display for OperationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl fmt::Debug for OperationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "OperationKey({self})")
    }
}

impl Serialize for OperationKey {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for OperationKey {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let encoded = <String as Deserialize>::deserialize(deserializer)?;
        encoded.parse().map_err(de::Error::custom)
    }
}

/// A call to a protected operation: the operation tag together with its encoded arguments.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Arbitrary, Serialize, Deserialize)]
pub struct ProtectedCall {
    tag: String,
    #[serde(with = "hex::serde")]
    args: Vec<u8>,
}

impl ProtectedCall {
    /// Creates a call to `tag` with the borsh encoding of `args`.
    pub fn new<A>(tag: impl Into<String>, args: &A) -> Result<Self, PrimitiveError>
    where
        A: BorshSerialize + ?Sized,
    {
        let tag = tag.into();
        let args = borsh::to_vec(args).map_err(|e| PrimitiveError::ArgsEncoding {
            tag: tag.clone(),
            reason: e.to_string(),
        })?;

        Ok(Self { tag, args })
    }

    /// Creates a call from arguments that are already encoded.
    pub fn from_encoded(tag: impl Into<String>, args: Vec<u8>) -> Self {
        Self {
            tag: tag.into(),
            args,
        }
    }

    /// The tag of the protected operation.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// The encoded arguments.
    pub fn args(&self) -> &[u8] {
        &self.args
    }

    /// Decodes the arguments into `A`.
    pub fn decode_args<A>(&self) -> Result<A, PrimitiveError>
    where
        A: BorshDeserialize,
    {
        borsh::from_slice(&self.args).map_err(|e| PrimitiveError::ArgsEncoding {
            tag: self.tag.clone(),
            reason: e.to_string(),
        })
    }

    /// The key under which approvals for this call accumulate.
    pub fn key(&self) -> OperationKey {
        OperationKey::derive(&self.tag, &self.args)
    }
}

impl fmt::Display for ProtectedCall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(0x{})", self.tag, hex::encode(&self.args))
    }
}
