use super::action::Action;
use super::choice::Choice;
use super::error::TableError;
use super::seat::Seat;
use super::seat::State;
use super::settlement::Settlement;
use super::showdown::Showdown;
use super::view::TableView;
use crate::cards::board::Board;
use crate::cards::card::Card;
use crate::cards::hand::Hand;
use crate::cards::street::Street;
use crate::cards::strength::Strength;
use crate::{Chips, Position};

/// The table between two actions: seats, pot, board, button, and
/// the actor cursor.
///
/// The street's highest bet is never stored; it is always the max
/// stake among non-folded seats, so it cannot drift out of sync
/// with the chips. Submissions are validated before any mutation:
/// a rejected action leaves the table exactly as it was.
#[derive(Debug, Clone)]
pub struct Table {
    seats: Vec<Seat>,
    pot: Chips,
    board: Board,
    dealer: Position,
    actor: Position,
    raised: Chips,
    sblind: Chips,
    bblind: Chips,
}

impl Table {
    pub fn new(sblind: Chips, bblind: Chips) -> Self {
        assert!(sblind > 0 && sblind <= bblind);
        Self {
            seats: Vec::new(),
            pot: 0,
            board: Board::empty(),
            dealer: 0,
            actor: 0,
            raised: 0,
            sblind,
            bblind,
        }
    }
    pub fn sit(&mut self, name: String, human: bool, stack: Chips) -> Position {
        let position = self.seats.len();
        self.seats.push(Seat::new(position, name, human, stack));
        position
    }

    //

    pub fn n(&self) -> usize {
        self.seats.len()
    }
    pub fn pot(&self) -> Chips {
        self.pot
    }
    pub fn board(&self) -> &Board {
        &self.board
    }
    pub fn street(&self) -> Street {
        self.board.street()
    }
    pub fn dealer(&self) -> Position {
        self.dealer
    }
    pub fn actor(&self) -> Position {
        self.actor
    }
    pub fn seats(&self) -> &[Seat] {
        &self.seats
    }
    pub fn seat(&self, position: Position) -> &Seat {
        &self.seats[position]
    }
    pub fn sblind(&self) -> Chips {
        self.sblind
    }
    pub fn bblind(&self) -> Chips {
        self.bblind
    }
    pub fn stacks(&self) -> Vec<Chips> {
        self.seats.iter().map(|s| s.stack()).collect()
    }
    /// seats still holding chips, across hands
    pub fn n_stacked(&self) -> usize {
        self.seats.iter().filter(|s| s.stack() > 0).count()
    }
    /// seats still able to bet this street
    pub fn n_betting(&self) -> usize {
        self.seats
            .iter()
            .filter(|s| s.state() == State::Betting)
            .count()
    }
    fn n_live(&self) -> usize {
        self.seats
            .iter()
            .filter(|s| s.state() != State::Folding)
            .count()
    }

    /// the street's highest bet, max stake among non-folded seats
    pub fn effective_stake(&self) -> Chips {
        self.seats
            .iter()
            .filter(|s| s.state() != State::Folding)
            .map(|s| s.stake())
            .max()
            .unwrap_or(0)
    }
    /// smallest legal raise-to total, before the all-in exception.
    /// `raised` carries the street's last bet or raise increment, so
    /// callers flattening the stakes do not shrink the requirement.
    pub fn min_raise_to(&self) -> Chips {
        self.effective_stake() + self.raised.max(self.bblind)
    }
    /// price for the actor to continue, uncapped
    pub fn to_call(&self) -> Chips {
        self.effective_stake() - self.actor_ref().stake()
    }

    //

    /// exactly one seat has not folded
    pub fn is_folded_out(&self) -> bool {
        self.n_live() == 1
    }
    /// the betting round is settled and the street may end
    pub fn is_round_over(&self) -> bool {
        if self.is_folded_out() {
            return true;
        }
        let stake = self.effective_stake();
        let betting = self
            .seats
            .iter()
            .filter(|s| s.state() == State::Betting)
            .collect::<Vec<&Seat>>();
        match betting.len() {
            // everyone is all-in or folded
            0 => true,
            // a lone seat with chips cannot bet into all-in or
            // folded opponents, but must still answer a live raise
            1 => betting[0].stake() == stake,
            _ => betting.iter().all(|s| s.has_acted() && s.stake() == stake),
        }
    }
    /// betting is finished for the hand: one seat left, or not
    /// enough seats with chips to bet another street
    pub fn is_runout(&self) -> bool {
        self.n_betting() <= 1
    }
    pub fn is_hand_over(&self) -> bool {
        self.is_folded_out() || self.street() == Street::Show
    }

    //

    /// the legality surface for the current actor
    pub fn choices(&self) -> Vec<Choice> {
        if self.is_round_over() {
            return Vec::new();
        }
        let seat = self.actor_ref();
        let stake = seat.stake();
        let stack = seat.stack();
        let live = self.effective_stake();
        let to_call = live - stake;
        let mut choices = vec![Choice::Fold];
        if to_call == 0 {
            choices.push(Choice::Check);
        } else {
            choices.push(Choice::Call(to_call.min(stack)));
        }
        if live == 0 {
            choices.push(Choice::Bet {
                min: self.bblind.min(stack),
                max: stack,
            });
        } else if stake + stack > live {
            choices.push(Choice::Raise {
                min: self.min_raise_to().min(stake + stack),
                max: stake + stack,
            });
        }
        choices
    }

    pub fn view(&self, position: Position) -> TableView {
        let seat = &self.seats[position];
        TableView {
            position,
            hole: seat.hole().cards(),
            board: self.board.cards().to_vec(),
            street: self.street(),
            pot: self.pot,
            stack: seat.stack(),
            stake: seat.stake(),
            to_call: self.effective_stake().saturating_sub(seat.stake()),
            bblind: self.bblind,
            stacks: self.stacks(),
            choices: if position == self.actor {
                self.choices()
            } else {
                Vec::new()
            },
        }
    }

    //

    /// reset everything per-hand; the button does not move here,
    /// `move_button` does that between hands
    pub fn begin_hand(&mut self) {
        assert!(self.n_stacked() >= 2, "not enough stacks for a hand");
        self.pot = 0;
        self.raised = 0;
        self.board.clear();
        for seat in self.seats.iter_mut() {
            seat.reset_for_hand();
        }
        self.actor = self.dealer;
    }

    /// small blind then big blind, skipping seats without chips; a
    /// short stack posts what it has and is all-in. blinds do not
    /// set the acted flag, which is what gives the big blind its
    /// option once the action comes back around.
    pub fn post_blinds(&mut self) -> Vec<(Position, Action)> {
        assert!(self.street() == Street::Pref && self.pot == 0);
        let mut posted = Vec::new();
        for blind in [self.sblind, self.bblind] {
            self.rotate();
            let position = self.actor;
            let chips = blind.min(self.seats[position].stack());
            self.commit(position, chips);
            log::debug!("[table] P{} posts blind {}", position, chips);
            posted.push((position, Action::Blind(chips)));
        }
        self.rotate();
        posted
    }

    pub fn deal_hole(&mut self, position: Position, hole: Hand) {
        self.seats[position].deal(hole);
    }
    pub fn reveal(&mut self, card: Card) {
        self.board.reveal(card);
    }

    /// validate and apply one submission. errors leave the table
    /// untouched so the same actor may retry.
    pub fn submit(&mut self, position: Position, action: Action) -> Result<(), TableError> {
        if self.is_round_over() {
            return Err(TableError::InvalidAction { action });
        }
        if position != self.actor {
            return Err(TableError::OutOfTurn {
                expected: self.actor,
                actual: position,
            });
        }
        self.validate(&action)?;
        self.apply(action);
        Ok(())
    }

    /// reset stakes and acted flags, advance the street, and point
    /// the action at the first live seat after the button
    pub fn next_street(&mut self) {
        for seat in self.seats.iter_mut() {
            seat.reset_for_street();
        }
        self.raised = 0;
        self.board.advance();
        if self.street() != Street::Show {
            self.actor = self.dealer;
            self.rotate();
            log::debug!("[table] {} begins, P{} to act", self.street(), self.actor);
        }
    }
    /// end betting for the hand on the current board
    pub fn jump_to_showdown(&mut self) {
        self.board.showdown();
    }

    /// settle the pot at hand end. fold-to-one pays without any
    /// evaluation; otherwise every live seat is evaluated against
    /// the board and the best set splits the pot.
    pub fn settlements(&self) -> Result<Vec<Settlement>, TableError> {
        assert!(self.is_hand_over(), "settling a live hand");
        let showdown = !self.is_folded_out();
        let board = Hand::from(&self.board);
        let entries = self
            .seats
            .iter()
            .map(|seat| Settlement {
                position: seat.position(),
                reward: 0,
                risked: seat.spent(),
                status: seat.state(),
                strength: match seat.state() {
                    State::Folding => None,
                    _ if showdown => Some(Strength::from(seat.hole() | board)),
                    _ => None,
                },
            })
            .collect::<Vec<Settlement>>();
        Showdown::new(entries, self.pot, self.priority()).settle()
    }

    /// pay out rewards and empty the pot
    pub fn conclude(&mut self, settlements: &[Settlement]) {
        assert!(settlements.len() == self.n());
        for (seat, settlement) in self.seats.iter_mut().zip(settlements.iter()) {
            if settlement.reward > 0 {
                log::debug!("[table] P{} wins {}", seat.position(), settlement.reward);
                seat.win(settlement.reward);
            }
        }
        self.pot = 0;
    }

    /// button goes to the next seat still holding chips
    pub fn move_button(&mut self) {
        for _ in 0..self.n() {
            self.dealer = self.after(self.dealer);
            if self.seats[self.dealer].stack() > 0 {
                return;
            }
        }
    }

    //

    fn validate(&self, action: &Action) -> Result<(), TableError> {
        let seat = self.actor_ref();
        let stake = seat.stake();
        let stack = seat.stack();
        let live = self.effective_stake();
        let to_call = live - stake;
        match *action {
            Action::Fold => Ok(()),
            Action::Check if to_call == 0 => Ok(()),
            Action::Call(chips) if to_call > 0 && chips == to_call.min(stack) => Ok(()),
            Action::Bet(chips) if live == 0 && chips > 0 && chips <= stack => {
                if chips < self.bblind && chips != stack {
                    Err(TableError::BelowMinimum {
                        amount: chips,
                        minimum: self.bblind.min(stack),
                    })
                } else {
                    Ok(())
                }
            }
            Action::Raise(to) if live > 0 && to > live && to <= stake + stack => {
                if to < self.min_raise_to() && to != stake + stack {
                    Err(TableError::BelowMinimum {
                        amount: to,
                        minimum: self.min_raise_to().min(stake + stack),
                    })
                } else {
                    Ok(())
                }
            }
            _ => Err(TableError::InvalidAction { action: *action }),
        }
    }

    fn apply(&mut self, action: Action) {
        let position = self.actor;
        match action {
            Action::Fold => self.seats[position].fold(),
            Action::Check => self.seats[position].touch(),
            Action::Call(chips) => {
                self.commit(position, chips);
                self.seats[position].touch();
            }
            Action::Bet(chips) => {
                self.raised = chips;
                self.commit(position, chips);
                self.reopen(position);
                self.seats[position].touch();
            }
            Action::Raise(to) => {
                let chips = to - self.seats[position].stake();
                self.raised = to - self.effective_stake();
                self.commit(position, chips);
                self.reopen(position);
                self.seats[position].touch();
            }
            Action::Blind(_) => unreachable!("blinds are posted, not submitted"),
        }
        log::debug!("[table] P{} {}", position, action);
        self.rotate();
    }

    fn commit(&mut self, position: Position, chips: Chips) {
        self.seats[position].commit(chips);
        self.pot += chips;
    }
    /// a bet or raise reopens the action for everyone else
    fn reopen(&mut self, position: Position) {
        for seat in self.seats.iter_mut() {
            if seat.position() != position && seat.state() == State::Betting {
                seat.untouch();
            }
        }
    }
    fn after(&self, position: Position) -> Position {
        (position + 1) % self.n()
    }
    /// advance the cursor to the next seat able to act
    fn rotate(&mut self) {
        for _ in 0..self.n() {
            self.actor = self.after(self.actor);
            if self.seats[self.actor].state() == State::Betting {
                return;
            }
        }
    }
    /// seat order for remainder chips: first after the button wins
    /// the odd chip
    fn priority(&self) -> Vec<Position> {
        (0..self.n())
            .map(|i| self.after(self.dealer + i))
            .collect()
    }
    fn actor_ref(&self) -> &Seat {
        &self.seats[self.actor]
    }
}

impl std::fmt::Display for Table {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use colored::Colorize;
        for seat in self.seats.iter() {
            write!(f, "{}  ", seat)?;
        }
        write!(
            f,
            "{}",
            format!("@ {:>6} {} {}", self.pot, self.board, self.street()).bright_green()
        )
    }
}
