//! The 169 starting hands.
//!
//! A [`Hand`] is a position in the 13×13 grid. Everything else (ranks, type,
//! id, combo count) is derived from that position:
//! - pairs on the diagonal (AA at top-left, 22 at bottom-right)
//! - suited hands above the diagonal, high card on the row
//! - offsuit hands below the diagonal, high card on the column

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use super::matrix::{GRID_SIZE, HAND_NAMES};
use super::rank::{rank_index, RANKS};
use crate::error::RangeError;

/// Pair, suited or offsuit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HandType {
    /// Both cards share a rank.
    Pair,
    /// Two ranks, one suit.
    Suited,
    /// Two ranks, two suits.
    Offsuit,
}

impl HandType {
    /// Number of card combinations for a hand of this type.
    pub fn combo_count(self) -> u32 {
        match self {
            HandType::Pair => 6,     // C(4,2)
            HandType::Suited => 4,   // one per suit
            HandType::Offsuit => 12, // 4 * 3
        }
    }

    /// Trailing character of the hand id, if any.
    pub fn suffix(self) -> Option<char> {
        match self {
            HandType::Pair => None,
            HandType::Suited => Some('s'),
            HandType::Offsuit => Some('o'),
        }
    }
}

/// One of the 169 starting hands.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Hand {
    /// Grid index: row * 13 + col
    index: u8,
}

impl Hand {
    /// Hand at a grid position.
    #[inline]
    pub(crate) fn from_grid(row: usize, col: usize) -> Self {
        debug_assert!(row < GRID_SIZE && col < GRID_SIZE, "grid position out of range");
        Self { index: (row * GRID_SIZE + col) as u8 }
    }

    /// Hand at a catalog index (0-168, row-major grid order).
    #[inline]
    pub(crate) fn from_index(index: usize) -> Self {
        debug_assert!(index < GRID_SIZE * GRID_SIZE, "hand index must be 0-168");
        Self { index: index as u8 }
    }

    /// Build a hand from rank indices and a type.
    ///
    /// `high` and `low` may come in either order. Returns `None` when the
    /// type contradicts the ranks (a pair with two ranks, or a suited/offsuit
    /// hand with one) or a rank index is out of range.
    pub fn from_ranks(high: usize, low: usize, hand_type: HandType) -> Option<Self> {
        if high >= GRID_SIZE || low >= GRID_SIZE {
            return None;
        }
        let (high, low) = (high.min(low), high.max(low));

        match hand_type {
            HandType::Pair if high == low => Some(Self::from_grid(high, high)),
            HandType::Suited if high != low => Some(Self::from_grid(high, low)),
            HandType::Offsuit if high != low => Some(Self::from_grid(low, high)),
            _ => None,
        }
    }

    /// Parse a hand code such as `"AKs"`, `"t9o"` or `"77"`.
    ///
    /// Ranks may be given in either order, so `"89s"` is the same hand as
    /// `"98s"`.
    pub fn parse(text: &str) -> Result<Self, RangeError> {
        let text = text.trim();
        let chars: Vec<char> = text.chars().collect();

        if chars.len() < 2 || chars.len() > 3 {
            return Err(RangeError::InvalidFormat(text.to_string()));
        }

        let r1 = rank_index(chars[0]).ok_or(RangeError::InvalidRank(chars[0]))?;
        let r2 = rank_index(chars[1]).ok_or(RangeError::InvalidRank(chars[1]))?;

        let hand_type = match chars.get(2) {
            None if r1 == r2 => HandType::Pair,
            Some(_) if r1 == r2 => return Err(RangeError::InvalidFormat(text.to_string())),
            None => return Err(RangeError::InvalidFormat(text.to_string())),
            Some('s' | 'S') => HandType::Suited,
            Some('o' | 'O') => HandType::Offsuit,
            Some(&c) => return Err(RangeError::InvalidSuffix(c)),
        };

        Self::from_ranks(r1, r2, hand_type).ok_or_else(|| RangeError::InvalidFormat(text.to_string()))
    }

    /// Catalog index (0-168, row-major grid order).
    #[inline]
    pub fn index(&self) -> usize {
        self.index as usize
    }

    /// Grid row.
    #[inline]
    pub fn row(&self) -> usize {
        self.index() / GRID_SIZE
    }

    /// Grid column.
    #[inline]
    pub fn col(&self) -> usize {
        self.index() % GRID_SIZE
    }

    /// Canonical id, e.g. `"AKs"`.
    pub fn id(&self) -> &'static str {
        HAND_NAMES[self.index()]
    }

    /// Pair, suited or offsuit, from the side of the diagonal.
    pub fn hand_type(&self) -> HandType {
        match self.row().cmp(&self.col()) {
            Ordering::Equal => HandType::Pair,
            Ordering::Less => HandType::Suited,
            Ordering::Greater => HandType::Offsuit,
        }
    }

    /// Rank index of the higher card.
    #[inline]
    pub fn high_index(&self) -> usize {
        self.row().min(self.col())
    }

    /// Rank index of the lower card (equal to the high card for pairs).
    #[inline]
    pub fn low_index(&self) -> usize {
        self.row().max(self.col())
    }

    /// Higher rank symbol.
    pub fn rank1(&self) -> char {
        RANKS[self.high_index()]
    }

    /// Lower rank symbol.
    pub fn rank2(&self) -> char {
        RANKS[self.low_index()]
    }

    /// Number of card combinations this hand represents.
    pub fn combo_count(&self) -> u32 {
        self.hand_type().combo_count()
    }

    /// Whether both cards share a rank.
    #[inline]
    pub fn is_pair(&self) -> bool {
        self.row() == self.col()
    }
}

impl FromStr for Hand {
    type Err = RangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl fmt::Debug for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Hand({})", self.id())
    }
}
