use super::card::Card;
use rand::Rng;
use rand::seq::SliceRandom;

/// A full 52-card deck, shuffled once at construction.
///
/// Cards come off the top in order. The caller decides what a missing
/// card means: running dry mid-hand is an invariant violation upstream,
/// so `draw` returns `None` rather than deciding the policy here.
#[derive(Debug, Clone)]
pub struct Deck(Vec<Card>);

impl Deck {
    /// Fisher-Yates over all 52 cards.
    pub fn shuffled<R: Rng>(rng: &mut R) -> Self {
        let mut cards = (0..52u8).map(Card::from).collect::<Vec<Card>>();
        cards.shuffle(rng);
        Self(cards)
    }

    /// remove and return the top card
    pub fn draw(&mut self) -> Option<Card> {
        self.0.pop()
    }

    /// remove the top card face down, per standard dealing rules
    pub fn burn(&mut self) -> Option<Card> {
        self.draw()
    }

    pub fn remaining(&self) -> usize {
        self.0.len()
    }
}
