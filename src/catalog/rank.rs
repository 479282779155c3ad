//! Card ranks in grid order.

/// Rank symbols, strongest first. The index of a symbol is its grid row/column.
pub const RANKS: [char; 13] = ['A', 'K', 'Q', 'J', 'T', '9', '8', '7', '6', '5', '4', '3', '2'];

/// Index of a rank symbol in [`RANKS`] (0 = ace, 12 = deuce).
///
/// Lower-case symbols are accepted. Returns `None` for anything else.
pub fn rank_index(rank: char) -> Option<usize> {
    let upper = rank.to_ascii_uppercase();
    RANKS.iter().position(|&c| c == upper)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_order() {
        assert_eq!(rank_index('A'), Some(0));
        assert_eq!(rank_index('K'), Some(1));
        assert_eq!(rank_index('T'), Some(4));
        assert_eq!(rank_index('2'), Some(12));
    }

    #[test]
    fn test_rank_case_insensitive() {
        assert_eq!(rank_index('t'), Some(4));
        assert_eq!(rank_index('a'), Some(0));
    }

    #[test]
    fn test_unknown_rank() {
        assert_eq!(rank_index('1'), None);
        assert_eq!(rank_index('Z'), None);
        assert_eq!(rank_index('s'), None);
    }
}
