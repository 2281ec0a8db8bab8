use super::seat::State;
use crate::Chips;
use crate::Position;
use crate::cards::strength::Strength;

/// One seat's final accounting for a hand.
///
/// `strength` is present only for seats that reached a showdown;
/// a hand won by folding everyone out is never evaluated, and a
/// folded seat never shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settlement {
    pub position: Position,
    pub reward: Chips,
    pub risked: Chips,
    pub status: State,
    pub strength: Option<Strength>,
}

impl Settlement {
    pub fn pnl(&self) -> i64 {
        i64::from(self.reward) - i64::from(self.risked)
    }
}

impl std::fmt::Display for Settlement {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.strength {
            Some(ref strength) => write!(
                f,
                "P{} {:>+6} ({})",
                self.position,
                self.pnl(),
                strength
            ),
            None => write!(f, "P{} {:>+6}", self.position, self.pnl()),
        }
    }
}
