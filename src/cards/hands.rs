use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};
use thiserror::Error;

use super::basic::{Card, CardError, Rank};

pub const HAND_SIZE: usize = 5;

/// Sorted ranks of the wheel, A-2-3-4-5 with the Ace playing low.
const WHEEL: [Rank; HAND_SIZE] = [Rank::Two, Rank::Three, Rank::Four, Rank::Five, Rank::Ace];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HandError {
    #[error("Invalid hand size: expected 5 cards, got {0}")]
    InvalidHandSize(usize),
    #[error("Invalid card: {0}")]
    InvalidCard(#[from] CardError),
}

/// Poker category of a five-card hand, weakest first.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter, Display,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum Kind {
    HighCard,
    Pair,
    TwoPair,
    ThreeOfAKind,
    Straight,
    Flush,
    FullHouse,
    FourOfAKind,
    StraightFlush,
}

impl Kind {
    /// Every kind in ascending order of value.
    pub const ALL: [Kind; 9] = [
        Kind::HighCard,
        Kind::Pair,
        Kind::TwoPair,
        Kind::ThreeOfAKind,
        Kind::Straight,
        Kind::Flush,
        Kind::FullHouse,
        Kind::FourOfAKind,
        Kind::StraightFlush,
    ];

    /// Position of this kind in the value order; higher beats lower.
    pub fn position(self) -> u8 {
        match self {
            Kind::HighCard => 0,
            Kind::Pair => 1,
            Kind::TwoPair => 2,
            Kind::ThreeOfAKind => 3,
            Kind::Straight => 4,
            Kind::Flush => 5,
            Kind::FullHouse => 6,
            Kind::FourOfAKind => 7,
            Kind::StraightFlush => 8,
        }
    }

    /// Get the kind name for display
    pub fn name(self) -> &'static str {
        match self {
            Kind::HighCard => "High Card",
            Kind::Pair => "Pair",
            Kind::TwoPair => "Two Pair",
            Kind::ThreeOfAKind => "Three of a Kind",
            Kind::Straight => "Straight",
            Kind::Flush => "Flush",
            Kind::FullHouse => "Full House",
            Kind::FourOfAKind => "Four of a Kind",
            Kind::StraightFlush => "Straight Flush",
        }
    }
}

impl PartialOrd for Kind {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Kind {
    fn cmp(&self, other: &Self) -> Ordering {
        self.position().cmp(&other.position())
    }
}

/// Optional classification rules.
///
/// The default rules never report [`Kind::TwoPair`]: a hand with two pairs
/// classifies as [`Kind::Pair`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rules {
    pub detect_two_pair: bool,
}

/// Five cards in the order they were given.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Hand {
    cards: [Card; HAND_SIZE],
}

impl Hand {
    pub fn new(cards: [Card; HAND_SIZE]) -> Self {
        Self { cards }
    }

    /// Create a hand from space-separated card tokens (e.g. `"5C TD AH QS 2D"`)
    pub fn from_string(s: &str) -> Result<Self, HandError> {
        let tokens: Vec<&str> = s.split(' ').collect();
        let [first, second, third, fourth, fifth]: [&str; HAND_SIZE] = tokens
            .try_into()
            .map_err(|tokens: Vec<&str>| HandError::InvalidHandSize(tokens.len()))?;

        Ok(Self::new([
            Card::from_string(first)?,
            Card::from_string(second)?,
            Card::from_string(third)?,
            Card::from_string(fourth)?,
            Card::from_string(fifth)?,
        ]))
    }

    pub fn cards(&self) -> &[Card; HAND_SIZE] {
        &self.cards
    }

    /// Ranks of the hand, lowest first
    pub fn sorted_ranks(&self) -> [Rank; HAND_SIZE] {
        let mut ranks = self.cards.map(|card| card.rank());
        ranks.sort();
        ranks
    }

    fn count_ranks(&self) -> HashMap<Rank, usize> {
        let mut counts = HashMap::new();
        for card in &self.cards {
            *counts.entry(card.rank()).or_insert(0) += 1;
        }
        counts
    }

    /// True if some rank appears exactly `n` times.
    ///
    /// A full house such as `"TD TC TH 7C 7D"` is true for both 2 and 3.
    pub fn has_n_of_kind(&self, n: usize) -> bool {
        self.count_ranks().values().any(|&count| count == n)
    }

    /// Always false; [`Hand::kind`] never reports two pair.
    /// See [`Hand::has_two_pairs`] and [`Rules`] for real detection.
    pub fn is_two_pair(&self) -> bool {
        false
    }

    /// True if exactly two distinct ranks appear exactly twice.
    pub fn has_two_pairs(&self) -> bool {
        self.count_ranks().values().filter(|&&count| count == 2).count() == 2
    }

    pub fn is_straight(&self) -> bool {
        let ranks = self.sorted_ranks();
        if ranks == WHEEL {
            return true;
        }

        ranks
            .windows(2)
            .all(|pair| pair[1].ordinal() == pair[0].ordinal() + 1)
    }

    pub fn is_flush(&self) -> bool {
        let suit = self.cards[0].suit();
        self.cards.iter().all(|card| card.suit() == suit)
    }

    /// Classify the hand under the default rules.
    pub fn kind(&self) -> Kind {
        self.kind_with(Rules::default())
    }

    /// Classify the hand. The checks run strongest first and the first
    /// match wins; a full house must be tested before three of a kind.
    pub fn kind_with(&self, rules: Rules) -> Kind {
        let is_straight = self.is_straight();
        let is_flush = self.is_flush();
        let two_pair = if rules.detect_two_pair {
            self.has_two_pairs()
        } else {
            self.is_two_pair()
        };

        if is_straight && is_flush {
            Kind::StraightFlush
        } else if self.has_n_of_kind(4) {
            Kind::FourOfAKind
        } else if self.has_n_of_kind(3) && self.has_n_of_kind(2) {
            Kind::FullHouse
        } else if is_flush {
            Kind::Flush
        } else if is_straight {
            Kind::Straight
        } else if self.has_n_of_kind(3) {
            Kind::ThreeOfAKind
        } else if two_pair {
            Kind::TwoPair
        } else if self.has_n_of_kind(2) {
            Kind::Pair
        } else {
            Kind::HighCard
        }
    }

    /// Order two hands by kind alone. Hands of the same kind are equal,
    /// whatever their ranks.
    pub fn compare(&self, other: &Hand) -> Ordering {
        self.kind().cmp(&other.kind())
    }
}

impl FromStr for Hand {
    type Err = HandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_string(s)
    }
}

impl TryFrom<String> for Hand {
    type Error = HandError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::from_string(&s)
    }
}

impl From<Hand> for String {
    fn from(hand: Hand) -> Self {
        hand.to_string()
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, card) in self.cards.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{card}")?;
        }
        Ok(())
    }
}

/// Parse two hands and compare them by kind
pub fn compare_hands(first: &str, second: &str) -> Result<Ordering, HandError> {
    let first = Hand::from_string(first)?;
    let second = Hand::from_string(second)?;
    Ok(first.compare(&second))
}
