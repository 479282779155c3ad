//! Which hands count as "better" than a given hand.
//!
//! Better is only defined within a hand type. From a hand at `(row, col)`:
//!
//! ```text
//! same high card, better kicker   suited:  (row, c)  for row < c < col
//!                                 offsuit: (r, col)  for col < r < row
//! same kicker, better high card   suited:  (r, col)  for r < row
//!                                 offsuit: (row, c)  for c < col
//! same gap, shifted up            (row-k, col-k)     for k = 1, 2, ... while >= 0
//! ```
//!
//! So `98s` pulls in `T8s` through `A8s` as well as `T9s` through `AKs`.
//! For pairs the first two sets are empty and the last walks up the
//! diagonal, so every higher pair is better.

use crate::catalog::{Hand, HandType};

/// All strictly-better hands of the same type: kicker walk, then high card
/// walk, then the diagonal walk toward AA/AKs/AKo. No hand appears twice.
pub fn better_hands(hand: Hand) -> impl Iterator<Item = Hand> {
    let (row, col) = (hand.row(), hand.col());

    type Walk = Box<dyn Iterator<Item = Hand>>;
    let (kicker_walk, high_walk): (Walk, Walk) = match hand.hand_type() {
        HandType::Pair => (Box::new(std::iter::empty()), Box::new(std::iter::empty())),
        HandType::Suited => (
            Box::new((row + 1..col).map(move |c| Hand::from_grid(row, c))),
            Box::new((0..row).rev().map(move |r| Hand::from_grid(r, col))),
        ),
        HandType::Offsuit => (
            Box::new((col + 1..row).map(move |r| Hand::from_grid(r, col))),
            Box::new((0..col).rev().map(move |c| Hand::from_grid(row, c))),
        ),
    };

    let steps = row.min(col);
    let gap_walk = (1..=steps).map(move |k| Hand::from_grid(row - k, col - k));

    kicker_walk.chain(high_walk).chain(gap_walk)
}

/// Whether `candidate` is strictly better than `hand`.
pub fn is_better(candidate: Hand, hand: Hand) -> bool {
    better_hands(hand).any(|h| h == candidate)
}
