//! Domain identifier types for enumerated board states.
//!
//! These types provide type-safe wrappers around the 1-based integer ids
//! assigned during enumeration. Full-set ids and unique-set (symmetry-reduced)
//! ids are deliberately distinct types so the two numbering schemes cannot be
//! mixed up.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a state in the full enumerated set.
///
/// Ids are 1-based and assigned in breadth-first discovery order; the empty
/// board is always id 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StateId(u32);

impl StateId {
    /// Create a state identifier from its 1-based value.
    ///
    /// # Examples
    ///
    /// ```
    /// use ttt_atlas::identifiers::StateId;
    ///
    /// let id = StateId::new(1);
    /// assert_eq!(id.value(), 1);
    /// ```
    pub fn new(value: u32) -> Self {
        Self(value)
    }

    /// Get the 1-based id value.
    pub fn value(self) -> u32 {
        self.0
    }

    /// Get the 0-based index this id addresses in discovery-ordered storage.
    pub fn index(self) -> usize {
        self.0 as usize - 1
    }
}

impl fmt::Display for StateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<StateId> for u32 {
    fn from(id: StateId) -> Self {
        id.0
    }
}

/// Identifier of a canonical representative in the symmetry-reduced set.
///
/// Ids are 1-based and numbered by the first appearance of each equivalence
/// class during the full-set traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UniqueId(u32);

impl UniqueId {
    /// Create a unique-set identifier from its 1-based value.
    ///
    /// # Examples
    ///
    /// ```
    /// use ttt_atlas::identifiers::UniqueId;
    ///
    /// let id = UniqueId::new(765);
    /// assert_eq!(id.value(), 765);
    /// ```
    pub fn new(value: u32) -> Self {
        Self(value)
    }

    /// Get the 1-based id value.
    pub fn value(self) -> u32 {
        self.0
    }

    /// Get the 0-based index this id addresses in discovery-ordered storage.
    pub fn index(self) -> usize {
        self.0 as usize - 1
    }
}

impl fmt::Display for UniqueId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<UniqueId> for u32 {
    fn from(id: UniqueId) -> Self {
        id.0
    }
}
