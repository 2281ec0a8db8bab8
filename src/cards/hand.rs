use super::card::Card;
use super::rank::Rank;
use super::suit::Suit;
use serde::Serialize;

/// An unordered set of distinct cards.
///
/// Bits are laid out as four 13-bit suit planes, clubs in the low
/// bits, so flush detection is a popcount of one plane and rank
/// counting is a popcount of a rank's column across planes.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, Serialize)]
pub struct Hand(u64);

impl Hand {
    const MASK: u64 = (1 << 52) - 1;

    pub const fn empty() -> Self {
        Self(0)
    }
    pub const fn size(&self) -> usize {
        self.0.count_ones() as usize
    }
    pub fn add(&mut self, card: Card) {
        self.0 |= u64::from(card);
    }
    pub fn remove(&mut self, card: Card) {
        self.0 &= !u64::from(card);
    }
    pub fn contains(&self, card: &Card) -> bool {
        self.0 & u64::from(*card) != 0
    }

    /// the 13-bit rank plane of a single suit
    pub fn of(&self, suit: &Suit) -> u16 {
        ((self.0 >> (13 * u8::from(*suit))) & 0x1FFF) as u16
    }
    /// union of all four suit planes
    pub fn ranks(&self) -> u16 {
        Suit::all()
            .iter()
            .map(|s| self.of(s))
            .fold(0u16, |a, b| a | b)
    }
    /// how many cards of this rank are present
    pub fn count(&self, rank: Rank) -> usize {
        (self.0 & u64::from(rank)).count_ones() as usize
    }

    pub fn cards(&self) -> Vec<Card> {
        let mut bits = self.0;
        let mut cards = Vec::with_capacity(self.size());
        while bits > 0 {
            cards.push(Card::from(bits.trailing_zeros() as u8));
            bits &= bits - 1;
        }
        cards
    }
}

/// u64 isomorphism
impl From<Hand> for u64 {
    fn from(h: Hand) -> Self {
        h.0
    }
}
impl From<u64> for Hand {
    fn from(n: u64) -> Self {
        Self(n & Self::MASK)
    }
}

impl From<Card> for Hand {
    fn from(card: Card) -> Self {
        Self(u64::from(card))
    }
}

impl FromIterator<Card> for Hand {
    fn from_iter<T: IntoIterator<Item = Card>>(iter: T) -> Self {
        iter.into_iter().fold(Self::empty(), |mut hand, card| {
            hand.add(card);
            hand
        })
    }
}

impl std::ops::BitOr for Hand {
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

/// str isomorphism, whitespace separated cards: "As Kh Qd"
impl TryFrom<&str> for Hand {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.split_whitespace()
            .map(Card::try_from)
            .collect::<Result<Vec<Card>, _>>()
            .map(|cards| cards.into_iter().collect())
    }
}

impl std::fmt::Display for Hand {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for card in self.cards() {
            write!(f, "{} ", card)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_remove() {
        let card = Card::try_from("Jd").unwrap();
        let mut hand = Hand::empty();
        hand.add(card);
        assert!(hand.contains(&card));
        assert!(hand.size() == 1);
        hand.remove(card);
        assert!(hand == Hand::empty());
    }

    #[test]
    fn suit_planes() {
        let hand = Hand::try_from("As Ks 2c").unwrap();
        assert!(hand.of(&Suit::Spade).count_ones() == 2);
        assert!(hand.of(&Suit::Club).count_ones() == 1);
        assert!(hand.of(&Suit::Heart) == 0);
    }

    #[test]
    fn rank_counts() {
        let hand = Hand::try_from("As Ah Ad Kc").unwrap();
        assert!(hand.count(Rank::Ace) == 3);
        assert!(hand.count(Rank::King) == 1);
        assert!(hand.count(Rank::Two) == 0);
    }

    #[test]
    fn union() {
        let a = Hand::try_from("As Kh").unwrap();
        let b = Hand::try_from("Qd Jc").unwrap();
        assert!((a | b).size() == 4);
    }
}
