use super::choice::Choice;
use crate::Chips;
use crate::Position;
use crate::cards::card::Card;
use crate::cards::street::Street;
use serde::Serialize;

/// What one seat is allowed to see when asked to act: its own
/// cards, the public board, and the chip situation. Other seats'
/// hole cards never appear here. `choices` is populated only for
/// the seat whose turn it is.
#[derive(Debug, Clone, Serialize)]
pub struct TableView {
    pub position: Position,
    pub hole: Vec<Card>,
    pub board: Vec<Card>,
    pub street: Street,
    pub pot: Chips,
    pub stack: Chips,
    pub stake: Chips,
    pub to_call: Chips,
    pub bblind: Chips,
    pub stacks: Vec<Chips>,
    pub choices: Vec<Choice>,
}

impl std::fmt::Display for TableView {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} [", self.street)?;
        for card in self.board.iter() {
            write!(f, "{}", card)?;
        }
        write!(f, "] pot {:>5}  [", self.pot)?;
        for card in self.hole.iter() {
            write!(f, "{}", card)?;
        }
        write!(f, "] stack {:>5}  to call {:>4}", self.stack, self.to_call)
    }
}
