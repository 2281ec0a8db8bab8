use super::action::Action;
use crate::Chips;
use crate::Position;
use crate::cards::card::Card;
use crate::cards::hand::Hand;
use crate::cards::street::Street;
use crate::cards::strength::Strength;

/// Public narration of a hand, broadcast to every seat as it
/// happens. Hole cards travel only in `HoleCards`, which is sent
/// to its owner alone.
#[derive(Debug, Clone)]
pub enum Event {
    HandStart {
        hand: u64,
        dealer: Position,
        stacks: Vec<Chips>,
    },
    HoleCards {
        hand: u64,
        hole: Hand,
    },
    Board {
        hand: u64,
        street: Street,
        cards: Vec<Card>,
    },
    Action {
        hand: u64,
        seat: Position,
        action: Action,
        pot: Chips,
    },
    Rejected {
        hand: u64,
        seat: Position,
        action: Action,
    },
    Reveal {
        hand: u64,
        seat: Position,
        hole: Hand,
        strength: Strength,
    },
    HandEnd {
        hand: u64,
        winners: Vec<(Position, Chips)>,
    },
}

impl std::fmt::Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Event::HandStart {
                hand,
                dealer,
                stacks,
            } => write!(f, "hand #{:<4} button P{} stacks {:?}", hand, dealer, stacks),
            Event::HoleCards { hand, hole } => write!(f, "hand #{:<4} dealt {}", hand, hole),
            Event::Board {
                hand,
                street,
                cards,
            } => {
                write!(f, "hand #{:<4} {} ", hand, street)?;
                for card in cards.iter() {
                    write!(f, "{}", card)?;
                }
                Ok(())
            }
            Event::Action {
                hand,
                seat,
                action,
                pot,
            } => write!(f, "hand #{:<4} P{} {} (pot {})", hand, seat, action, pot),
            Event::Rejected { hand, seat, action } => {
                write!(f, "hand #{:<4} P{} rejected {}", hand, seat, action)
            }
            Event::Reveal {
                hand,
                seat,
                hole,
                strength,
            } => write!(f, "hand #{:<4} P{} shows {} {}", hand, seat, hole, strength),
            Event::HandEnd { hand, winners } => {
                write!(f, "hand #{:<4} won by", hand)?;
                for (seat, chips) in winners.iter() {
                    write!(f, " P{} (+{})", seat, chips)?;
                }
                Ok(())
            }
        }
    }
}
