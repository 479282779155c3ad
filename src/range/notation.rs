//! Range notation import.
//!
//! Supports comma-separated terms:
//! - `AA`, `AKs`, `AKo`: a single hand
//! - `AK`: both the suited and the offsuit hand
//! - `TT+`: a pair and every higher pair
//! - `AQs+`: a hand and every better kicker under the same high card
//! - `A5s-A2s`, `55-22`: an inclusive span with a fixed high card (or of pairs)

use crate::catalog::{rank_index, Hand, HandType};
use crate::error::RangeError;

const PAIR: &[HandType] = &[HandType::Pair];
const SUITED: &[HandType] = &[HandType::Suited];
const OFFSUIT: &[HandType] = &[HandType::Offsuit];
const BOTH: &[HandType] = &[HandType::Suited, HandType::Offsuit];

/// Rank indices (high first) plus the hand types a term names.
struct Class {
    high: usize,
    low: usize,
    types: &'static [HandType],
}

impl Class {
    fn is_pair(&self) -> bool {
        self.high == self.low
    }
}

/// Parse notation into hands, in order of first appearance, without duplicates.
pub fn parse_notation(notation: &str) -> Result<Vec<Hand>, RangeError> {
    let mut hands = Vec::new();

    for part in notation.split(',').map(str::trim) {
        if part.is_empty() {
            continue;
        }

        for hand in parse_term(part)? {
            if !hands.contains(&hand) {
                hands.push(hand);
            }
        }
    }

    Ok(hands)
}

/// Parse a single term of notation.
fn parse_term(term: &str) -> Result<Vec<Hand>, RangeError> {
    if let Some((start, end)) = term.split_once('-') {
        return parse_span(term, start.trim(), end.trim());
    }

    if let Some(base) = term.strip_suffix('+') {
        return parse_plus(base.trim());
    }

    let class = parse_class(term)?;
    Ok(expand(&class, [class.low]))
}

/// Parse plus notation like "TT+" or "AQs+".
fn parse_plus(base: &str) -> Result<Vec<Hand>, RangeError> {
    let class = parse_class(base)?;

    if class.is_pair() {
        // TT+ means TT, JJ, QQ, KK, AA
        let pairs = (0..=class.high).rev().map(|r| Class { high: r, low: r, types: PAIR });
        return Ok(pairs.flat_map(|c| expand(&c, [c.low])).collect());
    }

    // AQs+ means AQs, AKs
    Ok(expand(&class, (class.high + 1..=class.low).rev()))
}

/// Parse span notation like "A5s-A2s" or "55-22".
fn parse_span(term: &str, start: &str, end: &str) -> Result<Vec<Hand>, RangeError> {
    let first = parse_class(start)?;
    let last = parse_class(end)?;

    if first.types != last.types {
        return Err(RangeError::InvalidRange(term.to_string()));
    }

    let (lo, hi) = if first.is_pair() {
        (first.high.min(last.high), first.high.max(last.high))
    } else if first.high == last.high {
        (first.low.min(last.low), first.low.max(last.low))
    } else {
        // Must have same high card for range
        return Err(RangeError::InvalidRange(term.to_string()));
    };

    if first.is_pair() {
        let pairs = (lo..=hi).map(|r| Class { high: r, low: r, types: PAIR });
        return Ok(pairs.flat_map(|c| expand(&c, [c.low])).collect());
    }

    Ok(expand(&first, lo..=hi))
}

/// Parse a hand class like "AA", "AKs", "AKo" or "AK".
fn parse_class(text: &str) -> Result<Class, RangeError> {
    let chars: Vec<char> = text.chars().collect();

    if chars.len() < 2 || chars.len() > 3 {
        return Err(RangeError::InvalidFormat(text.to_string()));
    }

    let r1 = rank_index(chars[0]).ok_or(RangeError::InvalidRank(chars[0]))?;
    let r2 = rank_index(chars[1]).ok_or(RangeError::InvalidRank(chars[1]))?;
    let (high, low) = (r1.min(r2), r1.max(r2));

    let types = match chars.get(2) {
        None if high == low => PAIR,
        Some(_) if high == low => return Err(RangeError::InvalidFormat(text.to_string())),
        None => BOTH,
        Some('s' | 'S') => SUITED,
        Some('o' | 'O') => OFFSUIT,
        Some(&c) => return Err(RangeError::InvalidSuffix(c)),
    };

    Ok(Class { high, low, types })
}

/// Hands with the class's high card and each given kicker, for each type.
fn expand(class: &Class, kickers: impl IntoIterator<Item = usize>) -> Vec<Hand> {
    kickers
        .into_iter()
        .flat_map(|low| {
            class
                .types
                .iter()
                .filter_map(move |&t| Hand::from_ranks(class.high, low, t))
        })
        .collect()
}
