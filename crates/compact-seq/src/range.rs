//! Compact range expansion: `2,5,7-10` → `2 5 7 8 9 10`.

use crate::error::SeqResult;
use crate::parser::parse_range;
use crate::types::IntRange;

/// Expands range tokens into a flat sequence of integers.
///
/// Singles yield one value, `start-end` tokens yield every value from
/// `start` to `end` inclusive. Token order is preserved and nothing is
/// sorted. The first malformed token aborts the expansion.
///
/// # Examples
///
/// ```rust
/// use compact_seq::expand_ranges;
///
/// let values = expand_ranges("2,5,7-10,11,17-18".split(',')).unwrap();
/// assert_eq!(values, vec![2, 5, 7, 8, 9, 10, 11, 17, 18]);
/// ```
pub fn expand_ranges<'a, I>(tokens: I) -> SeqResult<Vec<u64>>
where
    I: IntoIterator<Item = &'a str>,
{
    let ranges = parse_ranges(tokens)?;
    Ok(ranges.into_iter().flatten().collect())
}

/// Parses every token into an [`IntRange`] without expanding.
pub fn parse_ranges<'a, I>(tokens: I) -> SeqResult<Vec<IntRange>>
where
    I: IntoIterator<Item = &'a str>,
{
    tokens.into_iter().map(parse_range).collect()
}

/// Number of values the ranges expand to (saturating).
pub fn expanded_len(ranges: &[IntRange]) -> u64 {
    ranges
        .iter()
        .fold(0u64, |total, range| total.saturating_add(range.len()))
}
