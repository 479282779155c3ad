//! Error types for parsing hands, range notation and names.
//!
//! The range engine itself never fails: unknown hand ids are ignored.
//! These errors only surface from the parsing entry points used to import
//! user-written text.

use thiserror::Error;

/// Error type for hand, notation, preset and state parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RangeError {
    /// The text does not have the shape of a hand code.
    #[error("invalid hand format: {0}")]
    InvalidFormat(String),
    /// A rank character outside `AKQJT98765432`.
    #[error("invalid rank character: {0}")]
    InvalidRank(char),
    /// A suffix other than `s` or `o`.
    #[error("invalid suffix: {0} (expected 's' or 'o')")]
    InvalidSuffix(char),
    /// A dash or plus term that does not describe a span of hands.
    #[error("invalid range notation: {0}")]
    InvalidRange(String),
    /// A preset name that is not one of the built-in presets.
    #[error("unknown preset: {0}")]
    UnknownPreset(String),
    /// A stored state name that is not one of the four selection states.
    #[error("unknown selection state: {0}")]
    UnknownState(String),
}
