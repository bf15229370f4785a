//! Hand classification by rank-group shape.
//!
//! Cards are grouped by rank (suits are ignored) and a hand matches a target
//! [`GroupShape`] only when the shapes are equal as multisets. A full house
//! is `{3, 2}`; a `{3, 1, 1}` or `{4, 1}` hand does not match it.

use std::fmt;

use crate::grouping::{group_by_key, Groups};
use crate::types::{Card, GroupShape, Hand, Rank};

/// Rank-only hand patterns.
///
/// Straights and flushes depend on rank order and suit, which the shape
/// model does not capture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HandPattern {
    /// `{4, 1}`
    FourOfAKind,
    /// `{3, 2}`
    FullHouse,
    /// `{3, 1, 1}`
    ThreeOfAKind,
    /// `{2, 2, 1}`
    TwoPair,
    /// `{2, 1, 1, 1}`
    OnePair,
    /// `{1, 1, 1, 1, 1}`
    HighCard,
}

impl HandPattern {
    /// All patterns, strongest first.
    pub const ALL: [HandPattern; 6] = [
        HandPattern::FourOfAKind,
        HandPattern::FullHouse,
        HandPattern::ThreeOfAKind,
        HandPattern::TwoPair,
        HandPattern::OnePair,
        HandPattern::HighCard,
    ];

    /// The group shape that defines the pattern.
    pub fn shape(&self) -> GroupShape {
        let sizes: &[usize] = match self {
            HandPattern::FourOfAKind => &[4, 1],
            HandPattern::FullHouse => &[3, 2],
            HandPattern::ThreeOfAKind => &[3, 1, 1],
            HandPattern::TwoPair => &[2, 2, 1],
            HandPattern::OnePair => &[2, 1, 1, 1],
            HandPattern::HighCard => &[1, 1, 1, 1, 1],
        };
        GroupShape::from_sizes(sizes.iter().copied())
    }

    /// Finds the pattern whose shape equals `shape`.
    pub fn from_shape(shape: &GroupShape) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.shape() == *shape)
    }
}

impl fmt::Display for HandPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HandPattern::FourOfAKind => "four of a kind",
            HandPattern::FullHouse => "full house",
            HandPattern::ThreeOfAKind => "three of a kind",
            HandPattern::TwoPair => "two pair",
            HandPattern::OnePair => "one pair",
            HandPattern::HighCard => "high card",
        };
        f.write_str(name)
    }
}

impl Hand {
    /// Groups the cards by rank.
    pub fn rank_groups(&self) -> Groups<Rank, Card> {
        group_by_key(self.cards.iter().copied(), |card| card.rank)
    }

    /// The multiset of rank-group sizes.
    pub fn shape(&self) -> GroupShape {
        self.rank_groups().shape()
    }

    /// Returns true if the hand's shape equals `target` exactly.
    pub fn matches(&self, target: &GroupShape) -> bool {
        // a hand smaller than the shape can never match
        self.len() == target.total() && self.shape() == *target
    }

    /// Names the hand's pattern, if its shape is one of [`HandPattern::ALL`].
    pub fn classify(&self) -> Option<HandPattern> {
        HandPattern::from_shape(&self.shape())
    }
}

/// Keeps the hands whose rank shape equals `target`, in input order.
///
/// # Examples
///
/// ```rust
/// use compact_seq::{filter_by_shape, parse_hand, GroupShape};
///
/// let hands = vec![
///     parse_hand("6♣ 6♥ 6♠ A♠ 6♦", ' ').unwrap(),
///     parse_hand("10♣ Q♥ 10♠ Q♠ 10♦", ' ').unwrap(),
/// ];
///
/// let full_houses = filter_by_shape(&hands, &GroupShape::full_house());
/// assert_eq!(full_houses, vec![&hands[1]]);
/// ```
pub fn filter_by_shape<'a>(hands: &'a [Hand], target: &GroupShape) -> Vec<&'a Hand> {
    hands.iter().filter(|hand| hand.matches(target)).collect()
}
