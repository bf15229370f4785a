//! Value types produced by the token parsers.

use std::fmt;
use std::ops::RangeInclusive;

use crate::error::{SeqError, SeqResult};
use crate::interval::format_timestamp;

// =============================================================================
// Ranges
// =============================================================================

/// An inclusive integer range `start..=end`.
///
/// A single value is represented with `start == end`. The bounds are only
/// reachable through [`IntRange::new`] and [`IntRange::single`], so
/// `start <= end` always holds, including for deserialized values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Bounds")
)]
pub struct IntRange {
    start: u64,
    end: u64,
}

impl IntRange {
    /// Creates a range, rejecting `start > end`.
    pub fn new(start: u64, end: u64) -> SeqResult<Self> {
        if start > end {
            return Err(SeqError::invariant(format!(
                "range start {} is greater than end {}",
                start, end
            )));
        }
        Ok(Self { start, end })
    }

    /// Caller has already checked `start <= end`.
    pub(crate) fn from_ordered(start: u64, end: u64) -> Self {
        debug_assert!(start <= end);
        Self { start, end }
    }

    /// First value of the range.
    pub fn start(&self) -> u64 {
        self.start
    }

    /// Last value of the range (inclusive).
    pub fn end(&self) -> u64 {
        self.end
    }

    /// Creates a degenerate range holding one value.
    pub fn single(value: u64) -> Self {
        Self {
            start: value,
            end: value,
        }
    }

    /// Returns true if the range holds exactly one value.
    pub fn is_single(&self) -> bool {
        self.start == self.end
    }

    /// Number of values in the range (saturates at `u64::MAX`).
    pub fn len(&self) -> u64 {
        (self.end - self.start).saturating_add(1)
    }

    /// A range always holds at least one value.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Iterates over the values in ascending order.
    pub fn iter(&self) -> RangeInclusive<u64> {
        self.start..=self.end
    }
}

impl IntoIterator for IntRange {
    type Item = u64;
    type IntoIter = RangeInclusive<u64>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for IntRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_single() {
            write!(f, "{}", self.start)
        } else {
            write!(f, "{}-{}", self.start, self.end)
        }
    }
}

// =============================================================================
// Time intervals
// =============================================================================

/// A half-open interval `[start, end)` measured in whole seconds.
///
/// Never empty: `start < end` is checked on every construction path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Bounds")
)]
pub struct TimeInterval {
    start: u64,
    end: u64,
}

impl TimeInterval {
    /// Creates an interval, rejecting empty or inverted bounds.
    pub fn new(start: u64, end: u64) -> SeqResult<Self> {
        if start >= end {
            return Err(SeqError::invariant(format!(
                "interval start {} must be before end {}",
                start, end
            )));
        }
        Ok(Self { start, end })
    }

    /// Caller has already checked `start < end`.
    pub(crate) fn from_ordered(start: u64, end: u64) -> Self {
        debug_assert!(start < end);
        Self { start, end }
    }

    /// Start offset in seconds (inclusive).
    pub fn start(&self) -> u64 {
        self.start
    }

    /// End offset in seconds (exclusive).
    pub fn end(&self) -> u64 {
        self.end
    }

    /// Length of the interval in seconds.
    pub fn duration(&self) -> u64 {
        self.end - self.start
    }

    /// Returns true if `other` lies entirely inside this interval.
    pub fn contains(&self, other: &TimeInterval) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    /// Returns true if the two intervals share at least one second.
    pub fn overlaps(&self, other: &TimeInterval) -> bool {
        self.start < other.end && other.start < self.end
    }
}

impl fmt::Display for TimeInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{}",
            format_timestamp(self.start),
            format_timestamp(self.end)
        )
    }
}

/// Unchecked `start`/`end` pair as it appears on the wire.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct Bounds {
    start: u64,
    end: u64,
}

#[cfg(feature = "serde")]
impl TryFrom<Bounds> for IntRange {
    type Error = SeqError;

    fn try_from(bounds: Bounds) -> SeqResult<Self> {
        Self::new(bounds.start, bounds.end)
    }
}

#[cfg(feature = "serde")]
impl TryFrom<Bounds> for TimeInterval {
    type Error = SeqError;

    fn try_from(bounds: Bounds) -> SeqResult<Self> {
        Self::new(bounds.start, bounds.end)
    }
}

// =============================================================================
// Run-length tokens
// =============================================================================

/// One `Letter Digit*` group of a run-length string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunLengthToken {
    /// The repeated letter.
    pub letter: char,
    /// How many times the letter is emitted (may be zero).
    pub count: usize,
}

impl RunLengthToken {
    /// Creates a token.
    pub fn new(letter: char, count: usize) -> Self {
        Self { letter, count }
    }
}

impl fmt::Display for RunLengthToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.count == 1 {
            write!(f, "{}", self.letter)
        } else {
            write!(f, "{}{}", self.letter, self.count)
        }
    }
}

// =============================================================================
// Cards
// =============================================================================

/// Card rank. Ordered from `Two` (lowest) to `Ace`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[allow(missing_docs)]
pub enum Rank {
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
}

impl Rank {
    /// Maps a single-character rank symbol. `10` is the only two-character
    /// rank and is handled by the parser.
    pub fn from_char(c: char) -> Option<Self> {
        let rank = match c {
            '2' => Rank::Two,
            '3' => Rank::Three,
            '4' => Rank::Four,
            '5' => Rank::Five,
            '6' => Rank::Six,
            '7' => Rank::Seven,
            '8' => Rank::Eight,
            '9' => Rank::Nine,
            'J' => Rank::Jack,
            'Q' => Rank::Queen,
            'K' => Rank::King,
            'A' => Rank::Ace,
            _ => return None,
        };
        Some(rank)
    }

    /// The textual symbol of the rank.
    pub fn symbol(&self) -> &'static str {
        match self {
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
            Rank::Ace => "A",
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A playing card. The suit is kept verbatim (`♣`, `♦`, a letter code, ...)
/// and plays no part in classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Card {
    /// Card rank.
    pub rank: Rank,
    /// Suit symbol as written in the input.
    pub suit: char,
}

impl Card {
    /// Creates a card.
    pub fn new(rank: Rank, suit: char) -> Self {
        Self { rank, suit }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

/// A hand of cards in input order.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hand {
    /// The cards of the hand.
    pub cards: Vec<Card>,
}

impl Hand {
    /// Creates a hand from cards.
    pub fn new(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Number of cards in the hand.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns true if the hand has no cards.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, card) in self.cards.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", card)?;
        }
        Ok(())
    }
}

// =============================================================================
// Group shapes
// =============================================================================

/// The multiset of group sizes left after grouping, ignoring which key
/// produced which group. Stored in descending order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GroupShape {
    sizes: Vec<usize>,
}

impl GroupShape {
    /// Builds a shape from group sizes in any order. Zero sizes are dropped.
    pub fn from_sizes(sizes: impl IntoIterator<Item = usize>) -> Self {
        let mut sizes: Vec<usize> = sizes.into_iter().filter(|&s| s > 0).collect();
        sizes.sort_unstable_by(|a, b| b.cmp(a));
        Self { sizes }
    }

    /// Three of one key and two of another: `{3, 2}`.
    pub fn full_house() -> Self {
        Self::from_sizes([3, 2])
    }

    /// Group sizes, largest first.
    pub fn sizes(&self) -> &[usize] {
        &self.sizes
    }

    /// Number of groups.
    pub fn groups(&self) -> usize {
        self.sizes.len()
    }

    /// Total number of grouped elements.
    pub fn total(&self) -> usize {
        self.sizes.iter().sum()
    }
}

impl fmt::Display for GroupShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, size) in self.sizes.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", size)?;
        }
        f.write_str("}")
    }
}
