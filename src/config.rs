//! Declarative range definitions.
//!
//! A [`RangeConfig`] describes how to build a range: start from a preset,
//! bulk-import notation and explicit hands, then apply toggles in order.
//! Configs are read from JSON:
//!
//! ```json
//! {
//!   "name": "CO open",
//!   "preset": "standard",
//!   "notation": "66-55, K9s+",
//!   "hands": ["A8s"],
//!   "toggles": ["QTo", "A5s"]
//! }
//! ```
//!
//! Unlike the range engine, configuration is strict: unknown hand ids and
//! malformed notation are errors.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::catalog::resolve;
use crate::error::RangeError;
use crate::range::{parse_notation, Preset, Range};

/// Recipe for building a [`Range`].
///
/// # Example
/// ```
/// use range_engine::{Preset, RangeConfig};
///
/// let config = RangeConfig::new("nit").with_preset(Preset::UltraTight).with_toggle("TT");
/// let range = config.build().unwrap();
/// assert_eq!(range.count_selected_hands(), 7);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RangeConfig {
    /// Display name of the range.
    pub name: String,

    /// Preset to start from. `None` starts from an empty range.
    pub preset: Option<Preset>,

    /// Range notation imported on top of the preset.
    pub notation: Option<String>,

    /// Hand ids imported on top of the preset.
    pub hands: Vec<String>,

    /// Hand ids toggled in order after the imports, with propagation.
    pub toggles: Vec<String>,
}

impl RangeConfig {
    /// Create an empty config with a name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Parse a config from JSON and validate it.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read a JSON config file and validate it.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Builder method: set the name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Builder method: set the starting preset.
    pub fn with_preset(mut self, preset: Preset) -> Self {
        self.preset = Some(preset);
        self
    }

    /// Builder method: set the notation to import.
    pub fn with_notation(mut self, notation: impl Into<String>) -> Self {
        self.notation = Some(notation.into());
        self
    }

    /// Builder method: add hands to import.
    pub fn with_hands<I, S>(mut self, hands: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.hands.extend(hands.into_iter().map(Into::into));
        self
    }

    /// Builder method: append a toggle.
    pub fn with_toggle(mut self, hand: impl Into<String>) -> Self {
        self.toggles.push(hand.into());
        self
    }

    /// Validate the configuration and return any errors.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(notation) = &self.notation {
            parse_notation(notation)?;
        }

        for id in self.hands.iter().chain(&self.toggles) {
            if resolve(id).is_none() {
                return Err(ConfigError::UnknownHand(id.clone()));
            }
        }

        Ok(())
    }

    /// Validate, then build the range.
    pub fn build(&self) -> Result<Range, ConfigError> {
        self.validate()?;

        let mut range = match self.preset {
            Some(preset) => Range::from_preset(preset),
            None => Range::empty(),
        };

        if let Some(notation) = &self.notation {
            let hands = parse_notation(notation)?;
            range = range.with_hands(hands.iter().map(|h| h.id()));
        }

        range = range.with_hands(&self.hands);

        for id in &self.toggles {
            range = range.toggle_hand(id);
        }

        log::debug!(
            "built range {:?}: {} hands, {}%",
            self.name,
            range.count_selected_hands(),
            range.selection_percentage()
        );
        Ok(range)
    }
}

/// Errors that can occur when loading or validating a range config.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    /// The config is not valid JSON for a `RangeConfig`.
    #[error("failed to parse config: {0}")]
    Json(#[from] serde_json::Error),
    /// The notation could not be parsed.
    #[error(transparent)]
    Range(#[from] RangeError),
    /// A hand or toggle names a hand that does not exist.
    #[error("unknown hand: {0}")]
    UnknownHand(String),
}
