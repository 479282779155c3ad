//! Hand catalog: the static universe of 169 starting hands.
//!
//! ## Modules
//!
//! - `rank`: rank symbols and their grid order
//! - `hand`: the `Hand` value, its type and id parsing
//! - `matrix`: the 13×13 grid and the id index
//!
//! The grid and the id index are built once per process and shared
//! read-only.

pub mod rank;
pub mod hand;
pub mod matrix;

pub use rank::{rank_index, RANKS};
pub use hand::{Hand, HandType};
pub use matrix::{
    build_hand_matrix, hand_at, hand_by_id, hand_matrix, hands, resolve, GRID_SIZE, HAND_COUNT,
    HAND_NAMES, TOTAL_COMBOS,
};
