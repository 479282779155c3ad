//! Output formatting for ranges.

use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Write;

use crate::catalog::{hand_matrix, RANKS};
use crate::range::{Range, SelectionState, StoredRange};

/// Snapshot of a range with its statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RangeSummary {
    pub name: String,
    /// Selected hands (out of 169)
    pub hands: usize,
    /// Selected combos (out of 1326)
    pub combos: u32,
    /// Combo-weighted percentage, one decimal
    pub percentage: f64,
    /// Selected hand ids in grid order
    pub selected: Vec<String>,
    /// Every hand with its state name
    pub states: StoredRange,
}

impl RangeSummary {
    pub fn new(name: &str, range: &Range) -> Self {
        Self {
            name: name.to_string(),
            hands: range.count_selected_hands(),
            combos: range.count_selected_combos(),
            percentage: range.selection_percentage(),
            selected: range.selected_hand_ids().into_iter().map(String::from).collect(),
            states: range.to_stored(),
        }
    }

    /// The stored states as a range again.
    pub fn range(&self) -> Range {
        Range::from_stored(&self.states)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn save_json(&self, path: &str) -> std::io::Result<()> {
        let json = self.to_json()?;
        let mut file = File::create(path)?;
        file.write_all(json.as_bytes())?;
        Ok(())
    }

    pub fn print_summary(&self) {
        println!("\n========================================");
        println!("  {}", self.name);
        println!("  Hands: {}/169 | Combos: {}/1326 | {:.1}%", self.hands, self.combos, self.percentage);
        println!("========================================");
    }
}

fn marker(state: SelectionState) -> char {
    match state {
        SelectionState::ManualSelected => '*',
        SelectionState::AutoSelected => '+',
        SelectionState::ManualUnselected => 'x',
        SelectionState::Unselected => '.',
    }
}

/// Text grid of a range, one marker per hand:
/// `*` manual, `+` auto, `x` excluded, `.` unselected.
pub fn grid_string(range: &Range) -> String {
    let mut out = String::from("  ");
    for rank in RANKS {
        out.push(' ');
        out.push(rank);
    }
    out.push('\n');

    for (row, cells) in hand_matrix().iter().enumerate() {
        out.push(RANKS[row]);
        out.push(' ');
        for &hand in cells {
            out.push(' ');
            out.push(marker(range.state_of(hand)));
        }
        out.push('\n');
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::range::Preset;

    #[test]
    fn test_summary_stats() {
        let range = Range::from_preset(Preset::UltraTight);
        let summary = RangeSummary::new("nit", &range);
        assert_eq!(summary.hands, 6);
        assert_eq!(summary.combos, 40);
        assert_eq!(summary.percentage, 3.0);
        assert_eq!(summary.selected, vec!["AA", "AKs", "AKo", "KK", "QQ", "JJ"]);
        assert_eq!(summary.states.len(), 169);
        assert_eq!(summary.range(), range);
    }

    #[test]
    fn test_summary_json() {
        let range = Range::empty().toggle_hand("KK");
        let json = RangeSummary::new("kings", &range).to_json().unwrap();
        let back: RangeSummary = serde_json::from_str(&json).unwrap();
        assert_eq!(back.name, "kings");
        assert_eq!(back.hands, 2);
        assert_eq!(back.range(), range);
    }

    #[test]
    fn test_grid_string() {
        let range = Range::empty().toggle_hand("KK").toggle_hand("AA");
        let grid = grid_string(&range);
        let lines: Vec<&str> = grid.lines().collect();

        assert_eq!(lines.len(), 14);
        assert_eq!(lines[0], "   A K Q J T 9 8 7 6 5 4 3 2");
        assert!(lines[1].starts_with("A  x ."));
        assert!(lines[2].starts_with("K  . *"));
        assert_eq!(grid.matches('*').count(), 1);
    }
}
