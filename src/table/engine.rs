use super::action::Action;
use super::error::TableError;
use super::event::Event;
use super::record::HandRecord;
use super::record::Outcome;
use super::record::Play;
use super::seat::State;
use super::table::Table;
use crate::Chips;
use crate::cards::deck::Deck;
use crate::cards::hand::Hand;
use crate::cards::street::Street;
use crate::players::Player;
use rand::SeedableRng;
use rand::rngs::SmallRng;

/// Runs hands to completion: shuffle, blinds, deal, one betting
/// round per street, settle, move the button. The loop structure
/// mirrors the game itself, hands containing streets containing
/// turns.
///
/// The engine owns the only full-information state. Players are
/// only ever shown a `TableView`.
pub struct Engine {
    table: Table,
    players: Vec<Box<dyn Player>>,
    deck: Deck,
    rng: SmallRng,
    hand: u64,
    limit: u64,
    records: Vec<HandRecord>,
    plays: Vec<Play>,
    stacks: Vec<Chips>,
}

impl Engine {
    pub fn new(sblind: Chips, bblind: Chips, hands: u64, seed: Option<u64>) -> Self {
        let mut rng = match seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_os_rng(),
        };
        Self {
            table: Table::new(sblind, bblind),
            players: Vec::new(),
            deck: Deck::shuffled(&mut rng),
            rng,
            hand: 0,
            limit: hands,
            records: Vec::new(),
            plays: Vec::new(),
            stacks: Vec::new(),
        }
    }

    pub fn sit(&mut self, name: &str, stack: Chips, player: Box<dyn Player>) {
        self.table.sit(name.to_string(), player.is_interactive(), stack);
        self.players.push(player);
    }

    pub fn table(&self) -> &Table {
        &self.table
    }
    pub fn records(&self) -> &[HandRecord] {
        &self.records
    }

    pub fn play(&mut self) -> Result<(), TableError> {
        assert!(self.players.len() >= 2, "a game needs at least two seats");
        while self.has_hands() {
            self.begin_hand()?;
            while self.has_streets() {
                while self.has_turns() {
                    self.take_turn()?;
                }
                self.end_street()?;
            }
            self.end_hand()?;
        }
        log::info!("game over after {} hands", self.hand);
        Ok(())
    }

    fn has_hands(&self) -> bool {
        self.hand < self.limit && self.table.n_stacked() >= 2
    }
    fn has_streets(&self) -> bool {
        !self.table.is_hand_over()
    }
    fn has_turns(&self) -> bool {
        !self.table.is_round_over()
    }

    fn begin_hand(&mut self) -> Result<(), TableError> {
        self.hand += 1;
        self.plays.clear();
        self.table.begin_hand();
        self.stacks = self.table.stacks();
        self.deck = Deck::shuffled(&mut self.rng);
        self.broadcast(Event::HandStart {
            hand: self.hand,
            dealer: self.table.dealer(),
            stacks: self.stacks.clone(),
        });
        for (seat, action) in self.table.post_blinds() {
            self.plays.push(Play { seat, action });
            self.broadcast(Event::Action {
                hand: self.hand,
                seat,
                action,
                pot: self.table.pot(),
            });
        }
        self.deal_holes()
    }

    fn deal_holes(&mut self) -> Result<(), TableError> {
        for position in 0..self.table.n() {
            if self.table.seat(position).state() != State::Folding {
                let hole = Hand::from_iter([self.draw()?, self.draw()?]);
                self.table.deal_hole(position, hole);
                self.players[position].notify(&Event::HoleCards {
                    hand: self.hand,
                    hole,
                });
            }
        }
        Ok(())
    }

    fn take_turn(&mut self) -> Result<(), TableError> {
        let position = self.table.actor();
        loop {
            let view = self.table.view(position);
            let action = self.players[position].decide(&view);
            match self.table.submit(position, action) {
                Ok(()) => return Ok(self.accept(position, action)),
                Err(err) => {
                    log::warn!("P{} submitted {}: {}", position, action.label(), err);
                    self.players[position].notify(&Event::Rejected {
                        hand: self.hand,
                        seat: position,
                        action,
                    });
                    if self.table.seat(position).is_human() {
                        continue;
                    }
                    // a bot answering illegally is a defect; fold it
                    // and keep the hand moving
                    log::error!("P{} is defective, folding it", position);
                    self.table.submit(position, Action::Fold)?;
                    return Ok(self.accept(position, Action::Fold));
                }
            }
        }
    }

    fn accept(&mut self, seat: usize, action: Action) {
        self.plays.push(Play { seat, action });
        self.broadcast(Event::Action {
            hand: self.hand,
            seat,
            action,
            pot: self.table.pot(),
        });
    }

    fn end_street(&mut self) -> Result<(), TableError> {
        if self.table.is_folded_out() {
            Ok(())
        } else if self.table.street() == Street::Rive {
            self.table.next_street();
            Ok(())
        } else if self.table.is_runout() {
            // betting is impossible for the rest of the hand, so the
            // showdown happens on the board as it stands
            self.table.jump_to_showdown();
            Ok(())
        } else {
            let mut cards = Vec::new();
            self.deck.burn();
            for _ in 0..self.table.street().n_revealed() {
                let card = self.draw()?;
                self.table.reveal(card);
                cards.push(card);
            }
            self.table.next_street();
            self.broadcast(Event::Board {
                hand: self.hand,
                street: self.table.street(),
                cards,
            });
            Ok(())
        }
    }

    fn end_hand(&mut self) -> Result<(), TableError> {
        let settlements = self.table.settlements()?;
        for settlement in settlements.iter() {
            if let Some(strength) = settlement.strength {
                self.broadcast(Event::Reveal {
                    hand: self.hand,
                    seat: settlement.position,
                    hole: self.table.seat(settlement.position).hole(),
                    strength,
                });
            }
        }
        let winners = settlements
            .iter()
            .filter(|s| s.reward > 0)
            .map(|s| (s.position, s.reward))
            .collect::<Vec<(usize, Chips)>>();
        self.table.conclude(&settlements);
        self.broadcast(Event::HandEnd {
            hand: self.hand,
            winners,
        });
        self.records.push(HandRecord {
            hand: self.hand,
            dealer: self.table.dealer(),
            stacks: std::mem::take(&mut self.stacks),
            plays: std::mem::take(&mut self.plays),
            board: self.table.board().to_string(),
            outcomes: settlements.iter().map(Outcome::from).collect(),
        });
        self.table.move_button();
        Ok(())
    }

    fn draw(&mut self) -> Result<crate::cards::card::Card, TableError> {
        self.deck.draw().ok_or(TableError::DeckExhausted)
    }

    fn broadcast(&mut self, event: Event) {
        log::debug!("{}", event);
        for player in self.players.iter_mut() {
            player.notify(&event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::players::Robot;
    use crate::table::view::TableView;

    /// plays a fixed script, then checks forever
    struct Scripted(Vec<Action>);
    impl Player for Scripted {
        fn decide(&mut self, _: &TableView) -> Action {
            if self.0.is_empty() {
                Action::Check
            } else {
                self.0.remove(0)
            }
        }
    }

    /// always answers with the same action, legal or not
    struct Stubborn(Action);
    impl Player for Stubborn {
        fn decide(&mut self, _: &TableView) -> Action {
            self.0
        }
    }

    #[test]
    fn fold_to_the_blind() {
        let mut engine = Engine::new(10, 20, 1, Some(1));
        // heads up: button posts nothing, seat 1 is small blind,
        // seat 0 is big blind, seat 1 acts first and folds
        engine.sit("a", 1000, Box::new(Scripted(vec![])));
        engine.sit("b", 1000, Box::new(Scripted(vec![Action::Fold])));
        engine.play().unwrap();
        assert!(engine.table().stacks() == vec![1010, 990]);
        let record = &engine.records()[0];
        assert!(record.plays.iter().any(|p| p.action == Action::Fold));
        assert!(record.outcomes[0].reward == 30);
        assert!(record.outcomes[0].shown.is_none());
    }

    #[test]
    fn defective_bot_is_folded() {
        let mut engine = Engine::new(10, 20, 1, Some(2));
        engine.sit("a", 1000, Box::new(Scripted(vec![])));
        // owes 10 more but insists on checking
        engine.sit("b", 1000, Box::new(Stubborn(Action::Check)));
        engine.play().unwrap();
        assert!(engine.table().stacks() == vec![1010, 990]);
    }

    #[test]
    fn chips_are_conserved_over_many_hands() {
        let mut engine = Engine::new(10, 20, 100, Some(3));
        engine.sit("onyx", 1000, Box::new(Robot::onyx(7)));
        engine.sit("kate", 1000, Box::new(Robot::kate(8)));
        engine.sit("glitch", 1000, Box::new(Robot::glitch(9)));
        engine.play().unwrap();
        assert!(engine.table().stacks().iter().sum::<Chips>() == 3000);
        for record in engine.records() {
            let paid = record.outcomes.iter().map(|o| o.reward).sum::<Chips>();
            let risked = record.outcomes.iter().map(|o| o.risked).sum::<Chips>();
            assert!(paid == risked);
        }
    }

    /// calls any price, checks otherwise
    struct Station;
    impl Player for Station {
        fn decide(&mut self, view: &TableView) -> Action {
            if view.to_call > 0 {
                Action::Call(view.to_call.min(view.stack))
            } else {
                Action::Check
            }
        }
    }

    #[test]
    fn game_stops_when_one_stack_remains() {
        let mut engine = Engine::new(10, 20, 10_000, Some(4));
        engine.sit("a", 100, Box::new(Station));
        engine.sit("b", 100, Box::new(Station));
        engine.play().unwrap();
        let stacks = engine.table().stacks();
        assert!(stacks.iter().sum::<Chips>() == 200);
        // every hand goes to showdown for at least the blinds, so
        // one side busts long before the hand limit
        assert!((engine.records().len() as u64) < 10_000);
        assert!(stacks.contains(&0));
    }
}
