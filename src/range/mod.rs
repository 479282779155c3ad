//! Hand ranges and the auto-selection engine.
//!
//! A [`Range`] assigns one [`SelectionState`] to each of the 169 starting
//! hands. It is a plain value: every operation returns a new `Range` and
//! leaves its input untouched, so callers can keep snapshots for undo or
//! diff two ranges freely.
//!
//! ## Modules
//!
//! - `state`: the four selection states
//! - `propagation`: the "better hand" geometry on the 13×13 grid
//! - `toggle`: the selection state machine
//! - `presets`: built-in hand lists
//! - `notation`: `TT+, AQs+, A5s-A2s` style range import
//! - `stored`: the string→string mapping used by storage layers
//!
//! ## Example
//!
//! ```
//! use range_engine::{Range, SelectionState};
//!
//! let range = Range::empty().toggle_hand("77");
//! assert_eq!(range.state("77"), SelectionState::ManualSelected);
//! assert_eq!(range.state("AA"), SelectionState::AutoSelected);
//! assert_eq!(range.count_selected_hands(), 8);
//! ```

pub mod state;
pub mod propagation;
pub mod toggle;
pub mod presets;
pub mod notation;
pub mod stored;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::catalog::{hands, resolve, Hand, HAND_COUNT, TOTAL_COMBOS};
use crate::error::RangeError;

pub use notation::parse_notation;
pub use presets::Preset;
pub use propagation::{better_hands, is_better};
pub use state::SelectionState;
pub use stored::StoredRange;

/// Selection state for every starting hand.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "StoredRange", into = "StoredRange")]
pub struct Range {
    /// Indexed by catalog (grid) index.
    states: [SelectionState; HAND_COUNT],
}

/// One hand whose state differs between two ranges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HandChange {
    /// The hand that changed.
    pub hand: Hand,
    /// State in the earlier range.
    pub before: SelectionState,
    /// State in the later range.
    pub after: SelectionState,
}

impl Default for Range {
    fn default() -> Self {
        Self::empty()
    }
}

impl Range {
    /// A range with every hand `unselected`.
    pub fn empty() -> Self {
        Self {
            states: [SelectionState::Unselected; HAND_COUNT],
        }
    }

    /// Bulk import: every known id becomes `manual-selected`, without
    /// auto-selecting better hands. Unknown ids are skipped.
    pub fn from_hands<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::empty().with_hands(ids)
    }

    /// Like [`Range::from_hands`], on top of this range.
    pub fn with_hands<I, S>(&self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut next = self.clone();
        let mut imported = 0usize;

        for id in ids {
            let id = id.as_ref();
            match resolve(id) {
                Some(hand) => {
                    next.set(hand, SelectionState::ManualSelected);
                    imported += 1;
                }
                None => log::debug!("skipping unknown hand {:?} in bulk import", id),
            }
        }

        log::debug!("bulk imported {} hands", imported);
        next
    }

    /// Range holding the hands of a built-in preset.
    pub fn from_preset(preset: Preset) -> Self {
        Self::from_hands(preset.hands())
    }

    /// Range from notation such as `"TT+, AQs+, KQo"`, imported like
    /// [`Range::from_hands`].
    pub fn from_notation(notation: &str) -> Result<Self, RangeError> {
        let hands = parse_notation(notation)?;
        Ok(Self::from_hands(hands.iter().map(|h| h.id())))
    }

    /// State of a hand id; unknown ids are `unselected`.
    pub fn state(&self, hand_id: &str) -> SelectionState {
        resolve(hand_id)
            .map(|hand| self.state_of(hand))
            .unwrap_or_default()
    }

    /// State of a catalog hand.
    #[inline]
    pub fn state_of(&self, hand: Hand) -> SelectionState {
        self.states[hand.index()]
    }

    /// Whether a hand id is manually or automatically selected.
    pub fn is_selected(&self, hand_id: &str) -> bool {
        self.state(hand_id).is_selected()
    }

    /// Number of selected hands (out of 169).
    pub fn count_selected_hands(&self) -> usize {
        self.states.iter().filter(|s| s.is_selected()).count()
    }

    /// Number of selected card combinations (out of 1326).
    pub fn count_selected_combos(&self) -> u32 {
        self.selected_hands().map(|hand| hand.combo_count()).sum()
    }

    /// Share of all 1326 combos that are selected, in percent with one
    /// decimal, e.g. `15.4`.
    pub fn selection_percentage(&self) -> f64 {
        let combos = self.count_selected_combos() as f64;
        (combos / TOTAL_COMBOS as f64 * 1000.0).round() / 10.0
    }

    /// Ids of the selected hands, in catalog order.
    pub fn selected_hand_ids(&self) -> Vec<&'static str> {
        self.selected_hands().map(|hand| hand.id()).collect()
    }

    /// Selected hands, in catalog order.
    pub fn selected_hands(&self) -> impl Iterator<Item = Hand> + '_ {
        self.iter()
            .filter(|(_, state)| state.is_selected())
            .map(|(hand, _)| hand)
    }

    /// Every hand with its state, in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = (Hand, SelectionState)> + '_ {
        hands().map(move |hand| (hand, self.state_of(hand)))
    }

    /// Hands whose state differs from `before` to `self`, in catalog order.
    pub fn diff(&self, before: &Range) -> Vec<HandChange> {
        hands()
            .filter_map(|hand| {
                let (old, new) = (before.state_of(hand), self.state_of(hand));
                (old != new).then_some(HandChange {
                    hand,
                    before: old,
                    after: new,
                })
            })
            .collect()
    }

    #[inline]
    pub(crate) fn set(&mut self, hand: Hand, state: SelectionState) {
        self.states[hand.index()] = state;
    }
}

impl fmt::Debug for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Unselected hands are implied.
        f.debug_map()
            .entries(
                self.iter()
                    .filter(|(_, state)| *state != SelectionState::Unselected)
                    .map(|(hand, state)| (hand.id(), state)),
            )
            .finish()
    }
}
