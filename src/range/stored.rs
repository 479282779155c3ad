//! Plain string→string form of a range, as written by storage layers.
//!
//! Loading never fails. Missing ids are `unselected`; ids and state names
//! that cannot be understood are skipped with a warning, so a stale or
//! damaged record still yields a usable range.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::{Range, SelectionState};
use crate::catalog::resolve;

/// Hand id → state name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StoredRange {
    entries: BTreeMap<String, String>,
}

impl StoredRange {
    /// An empty mapping (every hand `unselected`).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the state name of an id.
    pub fn insert(&mut self, hand_id: impl Into<String>, state: impl Into<String>) {
        self.entries.insert(hand_id.into(), state.into());
    }

    /// State name stored for an id.
    pub fn get(&self, hand_id: &str) -> Option<&str> {
        self.entries.get(hand_id).map(String::as_str)
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries sorted by id.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for StoredRange {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}

impl Range {
    /// Every hand with its state name.
    pub fn to_stored(&self) -> StoredRange {
        self.iter()
            .map(|(hand, state)| (hand.id(), state.as_str()))
            .collect()
    }

    /// Rebuild a range from any stored mapping.
    pub fn from_stored(stored: &StoredRange) -> Self {
        let mut range = Range::empty();

        for (id, name) in stored.iter() {
            let Some(hand) = resolve(id) else {
                log::warn!("skipping stored entry for unknown hand {:?}", id);
                continue;
            };

            match name.parse::<SelectionState>() {
                Ok(state) => range.set(hand, state),
                Err(e) => log::warn!("skipping stored entry for {}: {}", hand, e),
            }
        }

        range
    }
}

impl From<StoredRange> for Range {
    fn from(stored: StoredRange) -> Self {
        Range::from_stored(&stored)
    }
}

impl From<Range> for StoredRange {
    fn from(range: Range) -> Self {
        range.to_stored()
    }
}
