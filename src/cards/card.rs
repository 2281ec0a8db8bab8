use super::rank::Rank;
use super::suit::Suit;
use serde::Serialize;
use std::fmt::{Display, Formatter, Result};

#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Serialize)]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

impl Card {
    pub fn rank(&self) -> Rank {
        self.rank
    }
    pub fn suit(&self) -> Suit {
        self.suit
    }
}

/// u8 isomorphism
/// dense suit-major index 0..52
/// Ts
/// 3 * 13 + 8 = 47
impl From<Card> for u8 {
    fn from(c: Card) -> u8 {
        u8::from(c.suit) * 13 + c.rank.bit()
    }
}
impl From<u8> for Card {
    fn from(n: u8) -> Self {
        assert!(n < 52);
        Self {
            rank: Rank::from(n % 13 + 2),
            suit: Suit::from(n / 13),
        }
    }
}

/// u64 isomorphism
/// one bit turned on, in the card's 13-bit suit plane
impl From<Card> for u64 {
    fn from(c: Card) -> u64 {
        1 << u8::from(c)
    }
}
impl From<u64> for Card {
    fn from(n: u64) -> Self {
        Self::from(n.trailing_zeros() as u8)
    }
}

/// str isomorphism, "As" "Td" etc
impl TryFrom<&str> for Card {
    type Error = String;
    fn try_from(s: &str) -> std::result::Result<Self, Self::Error> {
        if s.len() != 2 {
            return Err(format!("invalid card str: {}", s));
        }
        Ok(Self {
            rank: Rank::from(&s[0..1]),
            suit: Suit::from(&s[1..2]),
        })
    }
}

impl Display for Card {
    fn fmt(&self, f: &mut Formatter) -> Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}
