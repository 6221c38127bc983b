//! Composite account identifiers and their canonical ordering.
//!
//! An [`AccountKey`] names one sub-account within the replicated state: the
//! address of the owning account plus a numeric index distinguishing
//! sub-accounts under the same owner. The canonical ordering is two-level
//! lexicographic, owner first and index second, so that collections of keys
//! can be sorted into the same sequence on every node before hashing or
//! iteration.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifies one sub-account: an owner address plus a sub-account index.
///
/// Two keys are equal only when both components are equal. Distinct keys
/// always compare unequal under [`Ord`]; the relative order of equal keys
/// after a sort is unspecified, and callers must not rely on it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AccountKey {
    /// Address of the owning account.
    pub owner: String,
    /// Index of the sub-account under that owner.
    pub index: u32,
}

impl AccountKey {
    /// Creates a key from an owner address and a sub-account index.
    pub fn new(owner: impl Into<String>, index: u32) -> Self {
        Self {
            owner: owner.into(),
            index,
        }
    }

    /// Returns the owner address.
    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// Returns the sub-account index.
    pub fn index(&self) -> u32 {
        self.index
    }
}

impl Ord for AccountKey {
    /// Owner addresses compare lexicographically by byte; indexes break
    /// owner ties numerically.
    fn cmp(&self, other: &Self) -> Ordering {
        match self.owner.cmp(&other.owner) {
            Ordering::Equal => self.index.cmp(&other.index),
            unequal => unequal,
        }
    }
}

impl PartialOrd for AccountKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for AccountKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.index)
    }
}

/// Compares two account keys in the canonical order.
///
/// Equivalent to [`Ord::cmp`] on [`AccountKey`]; exposed as a free function
/// for callers that pass comparators by name.
#[inline]
pub fn account_key_compare(a: &AccountKey, b: &AccountKey) -> Ordering {
    a.cmp(b)
}

/// Sorts account keys in place into the canonical order.
///
/// Uses an unstable sort: inputs with repeated keys come back with those
/// repeats in unspecified relative order.
pub fn sort_account_keys(keys: &mut [AccountKey]) {
    keys.sort_unstable();
}
