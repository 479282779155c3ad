//! Built-in opening ranges.
//!
//! Each preset is a plain list of hand ids, meant to be bulk-imported with
//! [`Range::from_preset`](super::Range::from_preset). Every preset contains
//! the tighter presets before it.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::RangeError;

/// Premium pairs and ace-king (40 combos).
pub const ULTRA_TIGHT: &[&str] = &["AA", "KK", "QQ", "JJ", "AKs", "AKo"];

/// Big pairs and strong broadways (88 combos).
pub const TIGHT: &[&str] = &[
    "AA", "KK", "QQ", "JJ", "TT", "99",
    "AKs", "AQs", "AJs", "ATs", "KQs", "KJs", "QJs",
    "AKo", "AQo",
];

/// A typical middle-position open (192 combos).
pub const STANDARD: &[&str] = &[
    "AA", "KK", "QQ", "JJ", "TT", "99", "88", "77",
    "AKs", "AQs", "AJs", "ATs", "A9s", "A5s", "A4s",
    "KQs", "KJs", "KTs", "QJs", "QTs", "JTs", "T9s", "98s",
    "AKo", "AQo", "AJo", "ATo", "KQo", "KJo", "QJo",
];

/// A late-position open (362 combos).
pub const LOOSE: &[&str] = &[
    "AA", "KK", "QQ", "JJ", "TT", "99", "88", "77", "66", "55", "44", "33", "22",
    "AKs", "AQs", "AJs", "ATs", "A9s", "A8s", "A7s", "A6s", "A5s", "A4s", "A3s", "A2s",
    "KQs", "KJs", "KTs", "K9s", "QJs", "QTs", "Q9s", "JTs", "J9s",
    "T9s", "T8s", "98s", "97s", "87s", "86s", "76s", "75s", "65s", "64s", "54s",
    "AKo", "AQo", "AJo", "ATo", "A9o", "A8o",
    "KQo", "KJo", "KTo", "QJo", "QTo", "JTo", "T9o",
];

/// Named hand lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Preset {
    /// See [`ULTRA_TIGHT`].
    #[serde(alias = "ultra-tight", alias = "ultra_tight")]
    UltraTight,
    /// See [`TIGHT`].
    Tight,
    /// See [`STANDARD`].
    Standard,
    /// See [`LOOSE`].
    Loose,
}

impl Preset {
    /// All presets, tightest first.
    pub const ALL: [Preset; 4] = [Preset::UltraTight, Preset::Tight, Preset::Standard, Preset::Loose];

    /// The preset's hand ids.
    pub fn hands(self) -> &'static [&'static str] {
        match self {
            Preset::UltraTight => ULTRA_TIGHT,
            Preset::Tight => TIGHT,
            Preset::Standard => STANDARD,
            Preset::Loose => LOOSE,
        }
    }

    /// Name as used in stored data, e.g. `"ultraTight"`.
    pub fn name(self) -> &'static str {
        match self {
            Preset::UltraTight => "ultraTight",
            Preset::Tight => "tight",
            Preset::Standard => "standard",
            Preset::Loose => "loose",
        }
    }
}

impl FromStr for Preset {
    type Err = RangeError;

    /// Case-insensitive; `ultraTight`, `ultra-tight` and `ultra_tight` all work.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, '-' | '_'))
            .map(|c| c.to_ascii_lowercase())
            .collect();

        Preset::ALL
            .into_iter()
            .find(|p| p.name().to_ascii_lowercase() == normalized)
            .ok_or_else(|| RangeError::UnknownPreset(s.to_string()))
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::hand_by_id;
    use crate::range::Range;
    use std::collections::HashSet;

    #[test]
    fn test_preset_ids_are_canonical_and_unique() {
        for preset in Preset::ALL {
            let hands = preset.hands();
            let unique: HashSet<_> = hands.iter().collect();
            assert_eq!(unique.len(), hands.len(), "duplicate in {}", preset);
            for id in hands {
                assert!(hand_by_id(id).is_some(), "{} in {} is not a catalog id", id, preset);
            }
        }
    }

    #[test]
    fn test_ultra_tight_percentage() {
        let range = Range::from_preset(Preset::UltraTight);
        assert_eq!(range.count_selected_hands(), 6);
        assert_eq!(range.count_selected_combos(), 4 * 6 + 4 + 12);
        assert_eq!(range.selection_percentage(), 3.0);
    }

    #[test]
    fn test_preset_combos() {
        let combos = |p| Range::from_preset(p).count_selected_combos();
        assert_eq!(combos(Preset::Tight), 88);
        assert_eq!(combos(Preset::Standard), 192);
        assert_eq!(combos(Preset::Loose), 362);
        assert_eq!(Range::from_preset(Preset::Standard).selection_percentage(), 14.5);
    }

    #[test]
    fn test_presets_are_nested() {
        for pair in Preset::ALL.windows(2) {
            let looser: HashSet<_> = pair[1].hands().iter().collect();
            for id in pair[0].hands() {
                assert!(looser.contains(id), "{} in {} but not {}", id, pair[0], pair[1]);
            }
        }
    }

    #[test]
    fn test_preset_from_str() {
        assert_eq!("ultraTight".parse::<Preset>(), Ok(Preset::UltraTight));
        assert_eq!("ultra-tight".parse::<Preset>(), Ok(Preset::UltraTight));
        assert_eq!("LOOSE".parse::<Preset>(), Ok(Preset::Loose));
        assert_eq!(
            "nit".parse::<Preset>(),
            Err(RangeError::UnknownPreset("nit".into()))
        );
    }

    #[test]
    fn test_preset_serde() {
        assert_eq!(serde_json::to_string(&Preset::UltraTight).unwrap(), "\"ultraTight\"");
        let preset: Preset = serde_json::from_str("\"ultra-tight\"").unwrap();
        assert_eq!(preset, Preset::UltraTight);
    }
}
