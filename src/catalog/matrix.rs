//! The 13×13 hand grid and the process-wide hand index.

use once_cell::sync::Lazy;
use rustc_hash::FxHashMap;

use super::hand::Hand;

/// Width and height of the hand grid.
pub const GRID_SIZE: usize = 13;

/// Number of distinct starting hands.
pub const HAND_COUNT: usize = GRID_SIZE * GRID_SIZE;

/// Number of two-card combinations in a 52-card deck, C(52,2).
pub const TOTAL_COMBOS: u32 = 1326;

/// Hand names in standard notation (13x13 grid order)
pub const HAND_NAMES: [&str; HAND_COUNT] = [
    // Row 0: Ax hands (AA at top-left)
    "AA", "AKs", "AQs", "AJs", "ATs", "A9s", "A8s", "A7s", "A6s", "A5s", "A4s", "A3s", "A2s",
    // Row 1: Kx hands
    "AKo", "KK", "KQs", "KJs", "KTs", "K9s", "K8s", "K7s", "K6s", "K5s", "K4s", "K3s", "K2s",
    // Row 2: Qx hands
    "AQo", "KQo", "QQ", "QJs", "QTs", "Q9s", "Q8s", "Q7s", "Q6s", "Q5s", "Q4s", "Q3s", "Q2s",
    // Row 3: Jx hands
    "AJo", "KJo", "QJo", "JJ", "JTs", "J9s", "J8s", "J7s", "J6s", "J5s", "J4s", "J3s", "J2s",
    // Row 4: Tx hands
    "ATo", "KTo", "QTo", "JTo", "TT", "T9s", "T8s", "T7s", "T6s", "T5s", "T4s", "T3s", "T2s",
    // Row 5: 9x hands
    "A9o", "K9o", "Q9o", "J9o", "T9o", "99", "98s", "97s", "96s", "95s", "94s", "93s", "92s",
    // Row 6: 8x hands
    "A8o", "K8o", "Q8o", "J8o", "T8o", "98o", "88", "87s", "86s", "85s", "84s", "83s", "82s",
    // Row 7: 7x hands
    "A7o", "K7o", "Q7o", "J7o", "T7o", "97o", "87o", "77", "76s", "75s", "74s", "73s", "72s",
    // Row 8: 6x hands
    "A6o", "K6o", "Q6o", "J6o", "T6o", "96o", "86o", "76o", "66", "65s", "64s", "63s", "62s",
    // Row 9: 5x hands
    "A5o", "K5o", "Q5o", "J5o", "T5o", "95o", "85o", "75o", "65o", "55", "54s", "53s", "52s",
    // Row 10: 4x hands
    "A4o", "K4o", "Q4o", "J4o", "T4o", "94o", "84o", "74o", "64o", "54o", "44", "43s", "42s",
    // Row 11: 3x hands
    "A3o", "K3o", "Q3o", "J3o", "T3o", "93o", "83o", "73o", "63o", "53o", "43o", "33", "32s",
    // Row 12: 2x hands
    "A2o", "K2o", "Q2o", "J2o", "T2o", "92o", "82o", "72o", "62o", "52o", "42o", "32o", "22",
];

static MATRIX: Lazy<[[Hand; GRID_SIZE]; GRID_SIZE]> = Lazy::new(build_hand_matrix);

static HAND_INDEX: Lazy<FxHashMap<&'static str, Hand>> =
    Lazy::new(|| hands().map(|hand| (hand.id(), hand)).collect());

/// Build the 13×13 grid: pairs on the diagonal, suited above, offsuit below.
pub fn build_hand_matrix() -> [[Hand; GRID_SIZE]; GRID_SIZE] {
    std::array::from_fn(|row| std::array::from_fn(|col| Hand::from_grid(row, col)))
}

/// The shared grid, built on first use.
pub fn hand_matrix() -> &'static [[Hand; GRID_SIZE]; GRID_SIZE] {
    &MATRIX
}

/// Hand at a grid position, `None` outside the grid.
pub fn hand_at(row: usize, col: usize) -> Option<Hand> {
    hand_matrix().get(row).and_then(|cells| cells.get(col)).copied()
}

/// Exact lookup of a canonical hand id.
pub fn hand_by_id(id: &str) -> Option<Hand> {
    HAND_INDEX.get(id).copied()
}

/// Look up a hand id, falling back to lenient parsing (`"89s"`, `"aks"`).
pub fn resolve(id: &str) -> Option<Hand> {
    hand_by_id(id).or_else(|| Hand::parse(id).ok())
}

/// All 169 hands in row-major grid order.
pub fn hands() -> impl Iterator<Item = Hand> {
    (0..HAND_COUNT).map(Hand::from_index)
}
