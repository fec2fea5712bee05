//! The ordered validator set and the checks every set must pass before it is installed.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{
    constants::MAX_VALIDATORS,
    errors::{InvalidSetReason, PrimitiveError},
    types::ValidatorId,
};

/// The ordered set of identities that are currently allowed to approve protected operations.
///
/// The set is never empty, never holds the null identity or a duplicate, and never grows beyond
/// [`MAX_VALIDATORS`]. It is only ever replaced wholesale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<ValidatorId>", into = "Vec<ValidatorId>")]
pub struct ValidatorSet {
    members: Vec<ValidatorId>,
    positions: BTreeMap<ValidatorId, usize>,
}

impl ValidatorSet {
    /// Creates a set holding only the deployer.
    pub fn new(deployer: ValidatorId) -> Result<Self, PrimitiveError> {
        Ok(Self::from_members(vec![deployer])?)
    }

    /// Creates a set from a full list of members.
    pub fn from_members(members: Vec<ValidatorId>) -> Result<Self, InvalidSetReason> {
        let positions = Self::index(&members)?;

        Ok(Self { members, positions })
    }

    /// Checks a candidate list against the set invariants without building a set.
    pub fn validate(members: &[ValidatorId]) -> Result<(), InvalidSetReason> {
        Self::index(members).map(|_| ())
    }

    fn index(members: &[ValidatorId]) -> Result<BTreeMap<ValidatorId, usize>, InvalidSetReason> {
        if members.is_empty() {
            return Err(InvalidSetReason::Empty);
        }

        if members.len() > MAX_VALIDATORS {
            return Err(InvalidSetReason::TooMany(members.len()));
        }

        let mut positions = BTreeMap::new();
        for (position, member) in members.iter().enumerate() {
            if member.is_null() {
                return Err(InvalidSetReason::NullIdentity(position));
            }

            if positions.insert(*member, position).is_some() {
                return Err(InvalidSetReason::Duplicate(*member));
            }
        }

        Ok(positions)
    }

    /// Swaps the entire membership for `members` and returns the new size.
    ///
    /// On error the current membership is left untouched.
    pub fn replace(&mut self, members: Vec<ValidatorId>) -> Result<usize, InvalidSetReason> {
        let positions = Self::index(&members)?;
        self.members = members;
        self.positions = positions;

        Ok(self.members.len())
    }

    /// Whether `id` is a current member.
    pub fn contains(&self, id: &ValidatorId) -> bool {
        self.positions.contains_key(id)
    }

    /// The position of `id` in the enumeration order, if it is a member.
    pub fn position(&self, id: &ValidatorId) -> Option<usize> {
        self.positions.get(id).copied()
    }

    /// The number of members.
    pub fn size(&self) -> usize {
        self.members.len()
    }

    /// The member at `index` in enumeration order.
    pub fn at(&self, index: usize) -> Option<&ValidatorId> {
        self.members.get(index)
    }

    /// The members in enumeration order.
    pub fn members(&self) -> &[ValidatorId] {
        &self.members
    }

    /// Iterates over the members in enumeration order.
    pub fn iter(&self) -> impl Iterator<Item = &ValidatorId> {
        self.members.iter()
    }
}

impl TryFrom<Vec<ValidatorId>> for ValidatorSet {
    type Error = InvalidSetReason;

    fn try_from(members: Vec<ValidatorId>) -> Result<Self, Self::Error> {
        Self::from_members(members)
    }
}

impl From<ValidatorSet> for Vec<ValidatorId> {
    fn from(set: ValidatorSet) -> Self {
        set.members
    }
}
