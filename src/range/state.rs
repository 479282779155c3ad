//! Selection state of a single hand within a range.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::RangeError;

/// How a hand came to be in (or out of) a range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SelectionState {
    /// Not in the range and never touched.
    #[default]
    Unselected,
    /// Chosen explicitly.
    ManualSelected,
    /// Excluded explicitly from an auto-selected region.
    ManualUnselected,
    /// Included because it is better than a manually selected hand.
    AutoSelected,
}

impl SelectionState {
    /// All four states.
    pub const ALL: [SelectionState; 4] = [
        SelectionState::Unselected,
        SelectionState::ManualSelected,
        SelectionState::ManualUnselected,
        SelectionState::AutoSelected,
    ];

    /// Stored name of the state, e.g. `"manual-selected"`.
    pub fn as_str(self) -> &'static str {
        match self {
            SelectionState::Unselected => "unselected",
            SelectionState::ManualSelected => "manual-selected",
            SelectionState::ManualUnselected => "manual-unselected",
            SelectionState::AutoSelected => "auto-selected",
        }
    }

    /// Whether a hand in this state counts as part of the range.
    #[inline]
    pub fn is_selected(self) -> bool {
        matches!(self, SelectionState::ManualSelected | SelectionState::AutoSelected)
    }

    /// Whether the state was set by the user rather than by propagation.
    #[inline]
    pub fn is_manual(self) -> bool {
        matches!(self, SelectionState::ManualSelected | SelectionState::ManualUnselected)
    }
}

impl FromStr for SelectionState {
    type Err = RangeError;

    /// Accepts the kebab-case names plus `snake_case` and `camelCase` spellings.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, '-' | '_'))
            .map(|c| c.to_ascii_lowercase())
            .collect();

        match normalized.as_str() {
            "unselected" => Ok(SelectionState::Unselected),
            "manualselected" => Ok(SelectionState::ManualSelected),
            "manualunselected" => Ok(SelectionState::ManualUnselected),
            "autoselected" => Ok(SelectionState::AutoSelected),
            _ => Err(RangeError::UnknownState(s.to_string())),
        }
    }
}

impl fmt::Display for SelectionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selected_states() {
        assert!(!SelectionState::Unselected.is_selected());
        assert!(SelectionState::ManualSelected.is_selected());
        assert!(!SelectionState::ManualUnselected.is_selected());
        assert!(SelectionState::AutoSelected.is_selected());
    }

    #[test]
    fn test_names_roundtrip() {
        for state in SelectionState::ALL {
            assert_eq!(state.as_str().parse::<SelectionState>(), Ok(state));
        }
    }

    #[test]
    fn test_lenient_names() {
        assert_eq!("manual_selected".parse::<SelectionState>(), Ok(SelectionState::ManualSelected));
        assert_eq!("autoSelected".parse::<SelectionState>(), Ok(SelectionState::AutoSelected));
        assert_eq!(
            "selected".parse::<SelectionState>(),
            Err(RangeError::UnknownState("selected".into()))
        );
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&SelectionState::ManualUnselected).unwrap();
        assert_eq!(json, "\"manual-unselected\"");
        let state: SelectionState = serde_json::from_str("\"auto-selected\"").unwrap();
        assert_eq!(state, SelectionState::AutoSelected);
    }
}
