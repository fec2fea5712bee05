//! The registry of operations that have been approved by some, but not yet enough, validators.

use std::collections::BTreeMap;

use akro_bridge_primitives::{
    operation_key::OperationKey, types::ValidatorId, validator_set::ValidatorSet,
};
use serde::{Deserialize, Serialize};

use crate::errors::{VOResult, ValidatorOpsError};

/// A protected call awaiting approvals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingOperation {
    key: OperationKey,
    tag: String,
    approvers: Vec<ValidatorId>,
}

impl PendingOperation {
    /// Creates an entry holding the approval of its proposer.
    pub fn new(key: OperationKey, tag: impl Into<String>, proposer: ValidatorId) -> Self {
        Self {
            key,
            tag: tag.into(),
            approvers: vec![proposer],
        }
    }

    /// The key of the pending call.
    pub const fn key(&self) -> &OperationKey {
        &self.key
    }

    /// The tag of the pending call.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// The identities that approved the call, in approval order.
    pub fn approvers(&self) -> &[ValidatorId] {
        &self.approvers
    }

    /// The number of approvals collected so far.
    pub fn approvals(&self) -> usize {
        self.approvers.len()
    }

    /// Whether `id` approved the call.
    pub fn has_approved(&self, id: &ValidatorId) -> bool {
        self.approvers.contains(id)
    }
}

/// Tracks, per operation key, which validators have approved.
///
/// There is at most one entry per key, and an entry never has zero approvers: the entry is
/// deleted as soon as its last approval is retracted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PendingOperationRegistry {
    /// Keys in the order their entries were created.
    order: Vec<OperationKey>,
    entries: BTreeMap<OperationKey, PendingOperation>,
}

impl PendingOperationRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds a registry from entries in creation order, checking them against `validators`.
    pub(crate) fn restore(
        pending: Vec<PendingOperation>,
        validators: &ValidatorSet,
    ) -> VOResult<Self> {
        let mut registry = Self::new();

        for entry in pending {
            let corrupt = |reason: String| {
                ValidatorOpsError::CorruptSnapshot(format!("pending {}: {reason}", entry.key))
            };

            if entry.approvers.is_empty() {
                return Err(corrupt("no approvers".to_string()));
            }

            for (i, approver) in entry.approvers.iter().enumerate() {
                if !validators.contains(approver) {
                    return Err(corrupt(format!("{approver} is not a validator")));
                }

                if entry.approvers[..i].contains(approver) {
                    return Err(corrupt(format!("{approver} approved twice")));
                }
            }

            if registry.entries.contains_key(&entry.key) {
                return Err(corrupt("duplicate key".to_string()));
            }

            registry.order.push(entry.key);
            registry.entries.insert(entry.key, entry);
        }

        Ok(registry)
    }

    /// Records the approval of `approver` for `key` and returns the new number of approvals.
    ///
    /// The entry is created if `key` is not pending yet, so a returned count of `1` means a new
    /// entry.
    pub fn approve(
        &mut self,
        key: OperationKey,
        tag: &str,
        approver: ValidatorId,
        validators: &ValidatorSet,
    ) -> VOResult<usize> {
        if !validators.contains(&approver) {
            return Err(ValidatorOpsError::not_a_validator(approver));
        }

        match self.entries.get_mut(&key) {
            Some(entry) => {
                if entry.has_approved(&approver) {
                    return Err(ValidatorOpsError::AlreadyApproved { key, approver });
                }

                entry.approvers.push(approver);

                Ok(entry.approvals())
            }
            None => {
                self.order.push(key);
                self.entries
                    .insert(key, PendingOperation::new(key, tag, approver));

                Ok(1)
            }
        }
    }

    /// Retracts the approval of `approver` for `key` and returns the approvals left.
    ///
    /// Only a past approver can retract, and only their own approval. The entry is deleted when no
    /// approvals are left.
    pub fn cancel(&mut self, key: &OperationKey, approver: &ValidatorId) -> VOResult<usize> {
        let entry = self
            .entries
            .get_mut(key)
            .ok_or(ValidatorOpsError::NoSuchPendingOperation(*key))?;

        let position = entry
            .approvers
            .iter()
            .position(|id| id == approver)
            .ok_or(ValidatorOpsError::not_an_approver(*approver))?;

        entry.approvers.remove(position);
        let remaining = entry.approvals();

        if remaining == 0 {
            self.remove(key);
        }

        Ok(remaining)
    }

    /// Deletes the entry for `key`.
    pub fn remove(&mut self, key: &OperationKey) -> Option<PendingOperation> {
        let entry = self.entries.remove(key)?;
        self.order.retain(|k| k != key);

        Some(entry)
    }

    /// Deletes every entry and returns how many there were.
    pub fn clear_all(&mut self) -> usize {
        let cleared = self.order.len();
        self.order.clear();
        self.entries.clear();

        cleared
    }

    /// The number of pending operations.
    pub fn count(&self) -> usize {
        self.order.len()
    }

    /// Whether nothing is pending.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// The keys of the pending operations in creation order.
    pub fn keys(&self) -> &[OperationKey] {
        &self.order
    }

    /// The key at `index` in creation order.
    pub fn key_at(&self, index: usize) -> Option<&OperationKey> {
        self.order.get(index)
    }

    /// The entry for `key`.
    pub fn get(&self, key: &OperationKey) -> Option<&PendingOperation> {
        self.entries.get(key)
    }

    /// The number of approvals collected for `key`; zero if it is not pending.
    pub fn approvals(&self, key: &OperationKey) -> usize {
        self.get(key).map_or(0, PendingOperation::approvals)
    }

    /// Iterates over the entries in creation order.
    pub fn iter(&self) -> impl Iterator<Item = &PendingOperation> {
        self.order.iter().filter_map(|key| self.entries.get(key))
    }
}
