//! # Range Engine
//!
//! Preflop hand ranges for Texas Hold'em on the classic 13×13 grid, with
//! automatic selection of better hands.
//!
//! ## Features
//!
//! - **Hand Catalog**: The 169 starting hands, their grid positions and ids
//! - **Auto-Selection**: Selecting a hand pulls in every better hand of the
//!   same type; deselecting it releases them again
//! - **Value Semantics**: Every operation returns a new `Range`
//! - **Statistics**: Hand counts, combo counts and combo-weighted percentage
//! - **Import**: Presets, hand lists and `TT+, AQs+, A5s-A2s` notation
//! - **Storage Form**: Lossless string→string mapping for persistence layers
//!
//! ## Quick Start
//!
//! ```
//! use range_engine::{Range, SelectionState};
//!
//! let range = Range::empty().toggle_hand("T9s");
//! assert_eq!(range.state("JTs"), SelectionState::AutoSelected);
//!
//! // Exclude one auto-selected hand explicitly.
//! let range = range.toggle_hand("QJs");
//! assert_eq!(range.state("QJs"), SelectionState::ManualUnselected);
//!
//! println!("{} hands, {}%", range.count_selected_hands(), range.selection_percentage());
//! ```
//!
//! ## Modules
//!
//! - [`catalog`]: Ranks, hands and the 13×13 grid
//! - [`range`]: The `Range` value and the selection engine
//! - [`config`]: JSON range definitions
//! - [`output`]: Summaries and text grids
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                       Range Engine                              │
//! │  - Toggle state machine   - Combo statistics                    │
//! │  - Better-hand propagation - Presets / notation import          │
//! └─────────────────────────────────────────────────────────────────┘
//!                               │
//!                               │ reads hands from
//!                               ▼
//!                     ┌───────────────────┐
//!                     │   Hand Catalog    │
//!                     │  (169 hands, 13²) │
//!                     └───────────────────┘
//! ```

#![warn(missing_docs)]

/// Hand catalog module.
///
/// The static 169-hand universe, built once and shared read-only.
pub mod catalog;

/// Range module.
///
/// The `Range` value type and every operation on it.
pub mod range;

/// Range configuration module.
pub mod config;

/// Error types.
pub mod error;

/// Output module.
#[allow(missing_docs)]
pub mod output;

// Re-export commonly used types at crate root for convenience
pub use catalog::{hand_by_id, Hand, HandType, HAND_COUNT, RANKS, TOTAL_COMBOS};
pub use config::{ConfigError, RangeConfig};
pub use error::RangeError;
pub use range::{HandChange, Preset, Range, SelectionState, StoredRange};
