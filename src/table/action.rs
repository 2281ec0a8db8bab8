use crate::Chips;
use colored::Colorize;
use serde::Serialize;
use std::fmt::{Display, Formatter, Result};

/// A player decision, exhaustively matched everywhere it is applied.
///
/// `Bet` opens a street with no live bet; `Raise` answers one and
/// carries the raise-to total for the street, not the delta. `Blind`
/// is posted by the engine during setup and is never a legal
/// submission. Going all-in is not a separate verb: any chip action
/// for a player's entire remaining stack leaves them all-in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Action {
    Fold,
    Check,
    Call(Chips),
    Bet(Chips),
    Raise(Chips),
    Blind(Chips),
}

impl Action {
    pub fn label(&self) -> &'static str {
        match self {
            Action::Fold => "Fold",
            Action::Check => "Check",
            Action::Call(_) => "Call",
            Action::Bet(_) => "Bet",
            Action::Raise(_) => "Raise",
            Action::Blind(_) => "Blind",
        }
    }
}

impl Display for Action {
    fn fmt(&self, f: &mut Formatter) -> Result {
        match self {
            Action::Fold => write!(f, "{}", "FOLD".red()),
            Action::Check => write!(f, "{}", "CHECK".cyan()),
            Action::Call(n) => write!(f, "{}", format!("CALL  {}", n).yellow()),
            Action::Bet(n) => write!(f, "{}", format!("BET   {}", n).green()),
            Action::Raise(n) => write!(f, "{}", format!("RAISE {}", n).green()),
            Action::Blind(n) => write!(f, "{}", format!("BLIND {}", n).white()),
        }
    }
}
