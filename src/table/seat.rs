use crate::cards::hand::Hand;
use crate::{Chips, Position};
use colored::Colorize;
use serde::Serialize;

/// What a seat can still do this hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum State {
    Betting,
    Folding,
    Shoving,
}

impl std::fmt::Display for State {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            State::Betting => write!(f, "B"),
            State::Shoving => write!(f, "{}", "S".magenta()),
            State::Folding => write!(f, "{}", "F".red()),
        }
    }
}

/// One seat at the table.
///
/// `stake` is the street's committed amount and resets between
/// streets; `spent` is the hand's running total and only resets
/// between hands. `acted` tracks whether the seat has acted since
/// the last bet or raise this street; blinds post without setting
/// it, which is what gives the big blind its option.
#[derive(Debug, Clone)]
pub struct Seat {
    position: Position,
    name: String,
    human: bool,
    hole: Hand,
    stack: Chips,
    stake: Chips,
    spent: Chips,
    status: State,
    acted: bool,
}

impl Seat {
    pub fn new(position: Position, name: String, human: bool, stack: Chips) -> Self {
        Self {
            position,
            name,
            human,
            stack,
            hole: Hand::empty(),
            stake: 0,
            spent: 0,
            status: State::Folding,
            acted: false,
        }
    }

    pub fn position(&self) -> Position {
        self.position
    }
    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn is_human(&self) -> bool {
        self.human
    }
    pub fn hole(&self) -> Hand {
        self.hole
    }
    pub fn stack(&self) -> Chips {
        self.stack
    }
    pub fn stake(&self) -> Chips {
        self.stake
    }
    pub fn spent(&self) -> Chips {
        self.spent
    }
    pub fn state(&self) -> State {
        self.status
    }
    pub fn has_acted(&self) -> bool {
        self.acted
    }

    /// move chips from stack to the street's stake. hitting zero
    /// leaves the seat all-in.
    pub fn commit(&mut self, chips: Chips) {
        assert!(chips <= self.stack);
        self.stack -= chips;
        self.stake += chips;
        self.spent += chips;
        if self.stack == 0 {
            self.status = State::Shoving;
        }
    }
    pub fn win(&mut self, chips: Chips) {
        self.stack += chips;
    }

    pub fn deal(&mut self, hole: Hand) {
        assert!(hole.size() == 2);
        self.hole = hole;
    }
    pub fn fold(&mut self) {
        self.status = State::Folding;
    }
    pub fn touch(&mut self) {
        self.acted = true;
    }
    pub fn untouch(&mut self) {
        self.acted = false;
    }

    pub fn reset_for_hand(&mut self) {
        self.status = if self.stack > 0 {
            State::Betting
        } else {
            State::Folding
        };
        self.hole = Hand::empty();
        self.stake = 0;
        self.spent = 0;
        self.acted = false;
    }
    pub fn reset_for_street(&mut self) {
        self.stake = 0;
        self.acted = false;
    }
}

impl std::fmt::Display for Seat {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{:<2}{} {:<10} {:>6}",
            self.position, self.status, self.name, self.stack
        )
    }
}
