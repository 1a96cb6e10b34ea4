use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::EnumIter;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CardError {
    #[error("Card token must be two characters, got {0:?}")]
    InvalidLength(String),
    #[error("Invalid rank: {0}")]
    InvalidRank(char),
    #[error("Invalid suit: {0}")]
    InvalidSuit(char),
}

/// Suits carry no order; they are only ever compared for equality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter)]
pub enum Suit {
    Clubs,
    Diamonds,
    Hearts,
    Spades,
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Suit::Clubs => "C",
                Suit::Diamonds => "D",
                Suit::Hearts => "H",
                Suit::Spades => "S",
            }
        )
    }
}

impl TryFrom<char> for Suit {
    type Error = CardError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            'C' => Ok(Suit::Clubs),
            'D' => Ok(Suit::Diamonds),
            'H' => Ok(Suit::Hearts),
            'S' => Ok(Suit::Spades),
            _ => Err(CardError::InvalidSuit(c)),
        }
    }
}

/// Card rank, Two lowest and Ace highest.
///
/// The discriminant is the rank's ordinal: straights are detected by
/// consecutive ordinals, so these values are part of the contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter)]
pub enum Rank {
    Two = 0,
    Three = 1,
    Four = 2,
    Five = 3,
    Six = 4,
    Seven = 5,
    Eight = 6,
    Nine = 7,
    Ten = 8,
    Jack = 9,
    Queen = 10,
    King = 11,
    Ace = 12,
}

impl Rank {
    pub fn ordinal(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Rank::Two => "2",
                Rank::Three => "3",
                Rank::Four => "4",
                Rank::Five => "5",
                Rank::Six => "6",
                Rank::Seven => "7",
                Rank::Eight => "8",
                Rank::Nine => "9",
                Rank::Ten => "T",
                Rank::Jack => "J",
                Rank::Queen => "Q",
                Rank::King => "K",
                Rank::Ace => "A",
            }
        )
    }
}

impl TryFrom<char> for Rank {
    type Error = CardError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            '2' => Ok(Rank::Two),
            '3' => Ok(Rank::Three),
            '4' => Ok(Rank::Four),
            '5' => Ok(Rank::Five),
            '6' => Ok(Rank::Six),
            '7' => Ok(Rank::Seven),
            '8' => Ok(Rank::Eight),
            '9' => Ok(Rank::Nine),
            'T' => Ok(Rank::Ten),
            'J' => Ok(Rank::Jack),
            'Q' => Ok(Rank::Queen),
            'K' => Ok(Rank::King),
            'A' => Ok(Rank::Ace),
            _ => Err(CardError::InvalidRank(c)),
        }
    }
}

impl PartialOrd for Rank {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Rank {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.ordinal().cmp(&other.ordinal())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

impl Card {
    pub fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// Parse a two-character token such as `"TD"` or `"2C"`.
    pub fn from_string(s: &str) -> Result<Self, CardError> {
        let mut chars = s.chars();
        let (rank, suit) = match (chars.next(), chars.next(), chars.next()) {
            (Some(rank), Some(suit), None) => (rank, suit),
            _ => return Err(CardError::InvalidLength(s.to_string())),
        };

        Ok(Self::new(Rank::try_from(rank)?, Suit::try_from(suit)?))
    }

    pub fn rank(&self) -> Rank {
        self.rank
    }

    pub fn suit(&self) -> Suit {
        self.suit
    }

    pub fn all_cards() -> Vec<Card> {
        let mut cards = Vec::new();
        for suit in Suit::iter() {
            for rank in Rank::iter() {
                cards.push(Card::new(rank, suit));
            }
        }
        cards
    }
}

impl FromStr for Card {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_string(s)
    }
}

impl TryFrom<String> for Card {
    type Error = CardError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::from_string(&s)
    }
}

impl From<Card> for String {
    fn from(card: Card) -> Self {
        card.to_string()
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_ordering() {
        assert!(Rank::Ace > Rank::King);
        assert!(Rank::Three > Rank::Two);
        assert_eq!(Rank::iter().max(), Some(Rank::Ace));
        assert_eq!(Rank::iter().min(), Some(Rank::Two));
    }

    #[test]
    fn test_rank_ordinals_are_consecutive() {
        for (expected, rank) in Rank::iter().enumerate() {
            assert_eq!(rank.ordinal() as usize, expected);
        }
    }

    #[test]
    fn test_card_from_string() {
        let king_hearts = Card::from_string("KH").unwrap();
        assert_eq!(king_hearts.rank(), Rank::King);
        assert_eq!(king_hearts.suit(), Suit::Hearts);

        let two_spades = Card::from_string("2S").unwrap();
        assert_eq!(two_spades.rank(), Rank::Two);
        assert_eq!(two_spades.suit(), Suit::Spades);

        let ten_diamonds: Card = "TD".parse().unwrap();
        assert_eq!(ten_diamonds.rank(), Rank::Ten);
        assert_eq!(ten_diamonds.suit(), Suit::Diamonds);
    }

    #[test]
    fn test_card_from_string_errors() {
        assert_eq!(Card::from_string("ZH"), Err(CardError::InvalidRank('Z')));
        assert_eq!(Card::from_string("1C"), Err(CardError::InvalidRank('1')));
        assert_eq!(Card::from_string("KX"), Err(CardError::InvalidSuit('X')));
        assert_eq!(
            Card::from_string("K"),
            Err(CardError::InvalidLength("K".to_string()))
        );
        assert_eq!(
            Card::from_string("KHS"),
            Err(CardError::InvalidLength("KHS".to_string()))
        );
        assert!(Card::from_string("").is_err());
        // Lowercase is not part of the token grammar
        assert_eq!(Card::from_string("kh"), Err(CardError::InvalidRank('k')));
        assert_eq!(Card::from_string("Kh"), Err(CardError::InvalidSuit('h')));
    }

    #[test]
    fn test_multibyte_token_is_rejected_without_panicking() {
        assert_eq!(Card::from_string("A♠"), Err(CardError::InvalidSuit('♠')));
        assert!(Card::from_string("♠").is_err());
    }

    #[test]
    fn test_card_display() {
        assert_eq!(Card::new(Rank::King, Suit::Hearts).to_string(), "KH");
        assert_eq!(Card::new(Rank::Ten, Suit::Diamonds).to_string(), "TD");
        assert_eq!(Card::new(Rank::Ace, Suit::Clubs).to_string(), "AC");
        assert_eq!(Card::new(Rank::Two, Suit::Spades).to_string(), "2S");
    }

    #[test]
    fn test_every_card_parses_from_its_display() {
        let cards = Card::all_cards();
        assert_eq!(cards.len(), 52);
        for card in cards {
            assert_eq!(Card::from_string(&card.to_string()), Ok(card));
        }
    }

    #[test]
    fn test_card_serde() {
        let card = Card::new(Rank::Queen, Suit::Spades);
        assert_eq!(serde_json::to_string(&card).unwrap(), "\"QS\"");
        assert_eq!(serde_json::from_str::<Card>("\"QS\"").unwrap(), card);
        assert!(serde_json::from_str::<Card>("\"QX\"").is_err());
    }
}
