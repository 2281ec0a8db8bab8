use super::card::Card;
use super::hand::Hand;
use super::street::Street;

/// Community cards plus the street they belong to.
#[derive(Debug, Clone)]
pub struct Board {
    cards: Vec<Card>,
    street: Street,
}

impl Board {
    pub fn empty() -> Self {
        Self {
            cards: Vec::with_capacity(5),
            street: Street::Pref,
        }
    }

    pub fn street(&self) -> Street {
        self.street
    }
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn reveal(&mut self, card: Card) {
        self.cards.push(card);
        assert!(self.cards.len() <= 5);
    }
    pub fn advance(&mut self) {
        self.street = self.street.next();
        assert!(self.cards.len() == self.street.n_board());
    }
    /// jump straight to showdown, leaving the board as-is. used when
    /// betting ends early with everyone all-in.
    pub fn showdown(&mut self) {
        self.street = Street::Show;
    }
    pub fn clear(&mut self) {
        self.cards.clear();
        self.street = Street::Pref;
    }
}

impl From<&Board> for Hand {
    fn from(board: &Board) -> Self {
        board.cards.iter().copied().collect()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for card in self.cards.iter() {
            write!(f, "{} ", card)?;
        }
        Ok(())
    }
}
