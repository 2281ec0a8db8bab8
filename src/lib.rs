//! Single-table No-Limit Texas Hold'em engine.
//!
//! The crate is split leaf-first: [`cards`] holds card identity, the deck,
//! and the bitwise hand evaluator; [`table`] holds the betting-round state
//! machine, settlement, and the hand orchestrator; [`players`] holds the
//! decision implementations (an interactive seat and scripted opponents).

pub mod cards;
pub mod players;
pub mod table;

pub type Chips = u32;
pub type Position = usize;

/// Default starting stack per seat.
pub const STACK: Chips = 1000;
pub const S_BLIND: Chips = 10;
pub const B_BLIND: Chips = 20;
