use crate::Chips;
use serde::Serialize;

/// The legality surface offered to whoever is on the clock.
///
/// `Call` carries the exact price (already capped at the caller's
/// stack for a short all-in call). `Bet` and `Raise` carry inclusive
/// chip bounds; `Raise` bounds are raise-to street totals. The max
/// of either range is always the player's all-in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Choice {
    Fold,
    Check,
    Call(Chips),
    Bet { min: Chips, max: Chips },
    Raise { min: Chips, max: Chips },
}

impl std::fmt::Display for Choice {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Choice::Fold => write!(f, "Fold"),
            Choice::Check => write!(f, "Check"),
            Choice::Call(n) => write!(f, "Call {}", n),
            Choice::Bet { min, max } => write!(f, "Bet {}-{}", min, max),
            Choice::Raise { min, max } => write!(f, "Raise to {}-{}", min, max),
        }
    }
}
