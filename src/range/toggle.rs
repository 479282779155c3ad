//! The selection state machine.
//!
//! | current             | next                | side effect                               |
//! |---------------------|---------------------|-------------------------------------------|
//! | `unselected`        | `manual-selected`   | unselected better hands → auto-selected   |
//! | `manual-unselected` | `manual-selected`   | unselected better hands → auto-selected   |
//! | `manual-selected`   | `unselected`        | auto-selected better hands → unselected   |
//! | `auto-selected`     | `manual-unselected` | none                                      |
//!
//! Propagation only ever moves cells between `unselected` and
//! `auto-selected`; manual states are never overwritten.

use super::propagation::better_hands;
use super::{Range, SelectionState};
use crate::catalog::{resolve, Hand};

impl Range {
    /// Toggle a hand by id and return the resulting range.
    ///
    /// Unknown ids leave the range unchanged.
    pub fn toggle_hand(&self, hand_id: &str) -> Range {
        match resolve(hand_id) {
            Some(hand) => self.toggle(hand),
            None => {
                log::debug!("ignoring toggle of unknown hand {:?}", hand_id);
                self.clone()
            }
        }
    }

    /// Toggle a catalog hand and return the resulting range.
    ///
    /// Deselecting a `manual-selected` hand demotes every `auto-selected`
    /// hand in its better set, including hands another manual selection
    /// also implies. After selecting `KK` and `77`, deselecting `77`
    /// leaves `KK` selected but `AA` unselected. Propagation is not re-run
    /// for the remaining manual hands.
    pub fn toggle(&self, hand: Hand) -> Range {
        let mut next = self.clone();
        let current = self.state_of(hand);

        let propagated = match current {
            SelectionState::Unselected | SelectionState::ManualUnselected => {
                next.set(hand, SelectionState::ManualSelected);
                next.relabel_better(hand, SelectionState::Unselected, SelectionState::AutoSelected)
            }
            SelectionState::ManualSelected => {
                next.set(hand, SelectionState::Unselected);
                next.relabel_better(hand, SelectionState::AutoSelected, SelectionState::Unselected)
            }
            SelectionState::AutoSelected => {
                next.set(hand, SelectionState::ManualUnselected);
                0
            }
        };

        log::debug!(
            "toggled {}: {} -> {} ({} hands propagated)",
            hand,
            current,
            next.state_of(hand),
            propagated
        );
        next
    }

    /// Move every better hand currently in `from` to `to`; returns how many moved.
    fn relabel_better(&mut self, hand: Hand, from: SelectionState, to: SelectionState) -> usize {
        let mut moved = 0;
        for better in better_hands(hand) {
            if self.state_of(better) == from {
                self.set(better, to);
                moved += 1;
            }
        }
        moved
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::hands;

    const HIGHER_THAN_SEVENS: [&str; 7] = ["88", "99", "TT", "JJ", "QQ", "KK", "AA"];
    const LOWER_THAN_SEVENS: [&str; 5] = ["66", "55", "44", "33", "22"];

    #[test]
    fn test_pair_propagation() {
        let range = Range::empty().toggle_hand("77");

        assert_eq!(range.state("77"), SelectionState::ManualSelected);
        for pair in HIGHER_THAN_SEVENS {
            assert_eq!(range.state(pair), SelectionState::AutoSelected, "{}", pair);
        }
        for pair in LOWER_THAN_SEVENS {
            assert_eq!(range.state(pair), SelectionState::Unselected, "{}", pair);
        }
        assert_eq!(range.count_selected_hands(), 8);
        assert_eq!(range.count_selected_combos(), 48);
    }

    #[test]
    fn test_suited_gap_family_propagation() {
        let range = Range::empty().toggle_hand("98s");

        assert_eq!(range.state("98s"), SelectionState::ManualSelected);
        for hand in ["T9s", "JTs", "QJs", "KQs", "AKs"] {
            assert_eq!(range.state(hand), SelectionState::AutoSelected, "{}", hand);
        }
        for hand in ["T8s", "J8s", "Q8s", "K8s", "A8s"] {
            assert_eq!(range.state(hand), SelectionState::AutoSelected, "{}", hand);
        }
        // Other types, worse kickers and lower connectors stay out.
        assert_eq!(range.state("98o"), SelectionState::Unselected);
        assert_eq!(range.state("97s"), SelectionState::Unselected);
        assert_eq!(range.state("87s"), SelectionState::Unselected);
        assert_eq!(range.state("T7s"), SelectionState::Unselected);
        assert_eq!(range.state("99"), SelectionState::Unselected);
        assert_eq!(range.count_selected_hands(), 11);
    }

    #[test]
    fn test_reversed_suited_id_selects_gap_family() {
        let range = Range::empty().toggle_hand("89s");

        assert_eq!(range.state("98s"), SelectionState::ManualSelected);
        for hand in ["8Ts", "9Ts", "JTs"] {
            assert_eq!(range.state(hand), SelectionState::AutoSelected, "{}", hand);
        }
        assert_eq!(range.state("T8s"), SelectionState::AutoSelected);
        assert_eq!(range.state("T9s"), SelectionState::AutoSelected);
    }

    #[test]
    fn test_reversed_id_toggles_same_hand() {
        let range = Range::empty();
        assert_eq!(range.toggle_hand("89s"), range.toggle_hand("98s"));
    }

    #[test]
    fn test_suited_kicker_propagation() {
        let range = Range::empty().toggle_hand("K9s");
        for hand in ["KTs", "KJs", "KQs", "A9s", "ATs"] {
            assert_eq!(range.state(hand), SelectionState::AutoSelected, "{}", hand);
        }
        assert_eq!(range.state("AKs"), SelectionState::Unselected);
        assert_eq!(range.state("K8s"), SelectionState::Unselected);
    }

    #[test]
    fn test_offsuit_propagation() {
        let range = Range::empty().toggle_hand("QTo");
        for hand in ["QJo", "KTo", "ATo", "KJo", "AQo"] {
            assert_eq!(range.state(hand), SelectionState::AutoSelected, "{}", hand);
        }
        assert_eq!(range.state("QTs"), SelectionState::Unselected);
        assert_eq!(range.state("AKo"), SelectionState::Unselected);
        assert_eq!(range.state("Q9o"), SelectionState::Unselected);
        assert_eq!(range.count_selected_hands(), 6);
    }

    #[test]
    fn test_select_then_deselect_restores_empty() {
        let empty = Range::empty();
        for hand in hands() {
            let selected = empty.toggle(hand);
            assert_eq!(selected.state_of(hand), SelectionState::ManualSelected);
            assert_eq!(selected.toggle(hand), empty, "round trip failed for {}", hand);
        }
    }

    #[test]
    fn test_manual_override_survives_trigger_deselect() {
        let range = Range::empty().toggle_hand("77");
        let range = range.toggle_hand("99");
        assert_eq!(range.state("99"), SelectionState::ManualUnselected);
        assert!(!range.is_selected("99"));

        let range = range.toggle_hand("77");
        assert_eq!(range.state("77"), SelectionState::Unselected);
        assert_eq!(range.state("99"), SelectionState::ManualUnselected);
        for pair in ["88", "TT", "JJ", "QQ", "KK", "AA"] {
            assert_eq!(range.state(pair), SelectionState::Unselected, "{}", pair);
        }
    }

    #[test]
    fn test_propagation_skips_manual_hands() {
        let range = Range::empty().toggle_hand("KK").toggle_hand("77");
        assert_eq!(range.state("KK"), SelectionState::ManualSelected);
        assert_eq!(range.state("AA"), SelectionState::AutoSelected);

        let range = range.toggle_hand("77");
        assert_eq!(range.state("KK"), SelectionState::ManualSelected);
        assert_eq!(range.state("QQ"), SelectionState::Unselected);
        // Demotion does not look at who else implied the hand.
        assert_eq!(range.state("AA"), SelectionState::Unselected);
    }

    #[test]
    fn test_deselect_demotes_hands_shared_with_other_selection() {
        let range = Range::empty().toggle_hand("KK").toggle_hand("77");
        let range = range.toggle_hand("77");

        assert_eq!(range.state("KK"), SelectionState::ManualSelected);
        assert!(!range.is_selected("AA"));
        assert_eq!(range.count_selected_hands(), 1);

        // Toggling KK off and on again restores AA.
        let range = range.toggle_hand("KK").toggle_hand("KK");
        assert_eq!(range.state("AA"), SelectionState::AutoSelected);
    }

    #[test]
    fn test_reselect_manual_unselected() {
        let range = Range::empty()
            .toggle_hand("TT")
            .toggle_hand("JJ")
            .toggle_hand("TT");
        assert_eq!(range.state("JJ"), SelectionState::ManualUnselected);
        assert_eq!(range.state("QQ"), SelectionState::Unselected);

        let range = range.toggle_hand("JJ");
        assert_eq!(range.state("JJ"), SelectionState::ManualSelected);
        assert_eq!(range.state("QQ"), SelectionState::AutoSelected);
        assert_eq!(range.state("AA"), SelectionState::AutoSelected);
        assert_eq!(range.state("TT"), SelectionState::Unselected);
    }

    #[test]
    fn test_auto_selected_toggle_has_no_side_effect() {
        let before = Range::empty().toggle_hand("88");
        let after = before.toggle_hand("TT");
        let changes = after.diff(&before);
        assert_eq!(changes.len(), 1);
        assert_eq!(changes[0].hand.id(), "TT");
        assert_eq!(changes[0].after, SelectionState::ManualUnselected);
    }

    #[test]
    fn test_toggle_does_not_mutate_input() {
        let range = Range::empty();
        let _ = range.toggle_hand("AA");
        assert_eq!(range, Range::empty());
    }

    #[test]
    fn test_unknown_id_is_noop() {
        let range = Range::empty().toggle_hand("55");
        assert_eq!(range.toggle_hand("ZZ"), range);
        assert_eq!(range.toggle_hand(""), range);
        assert_eq!(range.state("ZZ"), SelectionState::Unselected);
    }
}
