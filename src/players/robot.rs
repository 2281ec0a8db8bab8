use super::Player;
use crate::Chips;
use crate::cards::card::Card;
use crate::cards::hand::Hand;
use crate::cards::ranking::Ranking;
use crate::cards::strength::Strength;
use crate::table::action::Action;
use crate::table::choice::Choice;
use crate::table::view::TableView;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;

/// A scripted opponent with a fixed temperament.
///
/// `aggression` is the appetite for betting and raising, `tightness`
/// the hand quality demanded before putting chips in, `bluff` the
/// chance of playing a weak hand as if it were strong. All three
/// live in [0, 1]. Decisions draw from the robot's own seeded rng,
/// so a seeded game replays identically.
pub struct Robot {
    aggression: f64,
    tightness: f64,
    bluff: f64,
    rng: SmallRng,
}

impl Robot {
    pub fn new(aggression: f64, tightness: f64, bluff: f64, seed: u64) -> Self {
        Self {
            aggression,
            tightness,
            bluff,
            rng: SmallRng::seed_from_u64(seed),
        }
    }
    /// steady and hard to shake off
    pub fn onyx(seed: u64) -> Self {
        Self::new(0.7, 0.8, 0.1, seed)
    }
    /// loose, talkative range
    pub fn kate(seed: u64) -> Self {
        Self::new(0.5, 0.4, 0.4, seed)
    }
    /// a rock that almost never bluffs
    pub fn glitch(seed: u64) -> Self {
        Self::new(0.8, 0.95, 0.01, seed)
    }

    /// hand quality in [0, 1], a coarse heuristic rather than any
    /// kind of equity calculation
    fn quality(&self, view: &TableView) -> f64 {
        if view.board.is_empty() {
            Self::preflop(&view.hole)
        } else {
            let cards = view
                .hole
                .iter()
                .chain(view.board.iter())
                .copied()
                .collect::<Hand>();
            Self::postflop(Strength::from(cards))
        }
    }

    fn preflop(hole: &[Card]) -> f64 {
        let (a, b) = (hole[0], hole[1]);
        let (hi, lo) = (
            u8::from(a.rank()).max(u8::from(b.rank())),
            u8::from(a.rank()).min(u8::from(b.rank())),
        );
        if hi == lo {
            return 0.55 + f64::from(hi) / 32.;
        }
        let mut quality = f64::from(hi + lo) / 56.;
        if a.suit() == b.suit() {
            quality += 0.08;
        }
        if hi - lo <= 2 {
            quality += 0.05;
        }
        quality
    }

    fn postflop(strength: Strength) -> f64 {
        match strength.ranking() {
            Ranking::HighCard(_) => 0.15,
            Ranking::OnePair(_) => 0.40,
            Ranking::TwoPair(_, _) => 0.65,
            Ranking::ThreeOAK(_) => 0.75,
            Ranking::Straight(_) => 0.85,
            Ranking::Flush(_) => 0.90,
            Ranking::FullHouse(_, _) => 0.95,
            Ranking::FourOAK(_) => 0.99,
            Ranking::StraightFlush(_) => 1.0,
        }
    }

    /// pick a size between the legal bounds, leaning on the pot
    fn size(&mut self, pot: Chips, min: Chips, max: Chips) -> Chips {
        let fraction = 0.4 + self.rng.random::<f64>() * 0.6 * self.aggression;
        let target = (f64::from(pot) * fraction) as Chips;
        target.clamp(min, max)
    }
}

impl Player for Robot {
    fn decide(&mut self, view: &TableView) -> Action {
        let quality = self.quality(view);
        let bluffing = self.rng.random::<f64>() < self.bluff;
        let strong = quality > self.tightness || bluffing;
        let eager = self.rng.random::<f64>() < self.aggression;
        if strong && eager {
            for choice in view.choices.iter() {
                match *choice {
                    Choice::Bet { min, max } => {
                        return Action::Bet(self.size(view.pot, min, max));
                    }
                    Choice::Raise { min, max } => {
                        return Action::Raise(self.size(view.pot + view.to_call, min, max));
                    }
                    _ => {}
                }
            }
        }
        for choice in view.choices.iter() {
            if let Choice::Check = choice {
                return Action::Check;
            }
        }
        for choice in view.choices.iter() {
            if let Choice::Call(price) = *choice {
                // pot odds, loosely: a cheap call takes less of a hand
                let odds = f64::from(price) / f64::from(view.pot + price);
                let demand = self.tightness * (0.25 + odds);
                if quality >= demand || bluffing {
                    return Action::Call(price);
                }
            }
        }
        Action::Fold
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::street::Street;

    fn view(hole: &str, board: &str, to_call: Chips, choices: Vec<Choice>) -> TableView {
        TableView {
            position: 0,
            hole: Hand::try_from(hole).unwrap().cards(),
            board: match board {
                "" => Vec::new(),
                s => Hand::try_from(s).unwrap().cards(),
            },
            street: if board.is_empty() {
                Street::Pref
            } else {
                Street::Flop
            },
            pot: 100,
            stack: 1000,
            stake: 0,
            to_call,
            bblind: 20,
            stacks: vec![1000, 1000],
            choices,
        }
    }

    #[test]
    fn answers_are_always_legal() {
        let mut robot = Robot::kate(42);
        for _ in 0..200 {
            let view = view(
                "As Kd",
                "2h 7c Js",
                40,
                vec![
                    Choice::Fold,
                    Choice::Call(40),
                    Choice::Raise { min: 80, max: 1000 },
                ],
            );
            match robot.decide(&view) {
                Action::Fold => {}
                Action::Call(chips) => assert!(chips == 40),
                Action::Raise(to) => assert!((80..=1000).contains(&to)),
                action => panic!("illegal answer {:?}", action),
            }
        }
    }

    #[test]
    fn a_rock_folds_trash_to_a_bet() {
        // glitch bluffs 1% of the time, so over many trials the
        // dominant answer to a bet with nothing must be a fold
        let mut robot = Robot::glitch(7);
        let folds = (0..100)
            .filter(|_| {
                let view = view(
                    "2s 7d",
                    "Ah Kc Js",
                    40,
                    vec![Choice::Fold, Choice::Call(40)],
                );
                matches!(robot.decide(&view), Action::Fold)
            })
            .count();
        assert!(folds > 80);
    }

    #[test]
    fn monsters_do_not_fold() {
        let mut robot = Robot::onyx(7);
        for _ in 0..100 {
            let view = view(
                "As Ad",
                "Ah Ac Js",
                40,
                vec![
                    Choice::Fold,
                    Choice::Call(40),
                    Choice::Raise { min: 80, max: 1000 },
                ],
            );
            assert!(!matches!(robot.decide(&view), Action::Fold));
        }
    }

    #[test]
    fn seeded_robots_replay_identically() {
        let mut a = Robot::kate(11);
        let mut b = Robot::kate(11);
        for _ in 0..50 {
            let view = view(
                "Ts 9s",
                "8h 7c 2s",
                20,
                vec![
                    Choice::Fold,
                    Choice::Call(20),
                    Choice::Raise { min: 40, max: 500 },
                ],
            );
            assert!(a.decide(&view) == b.decide(&view));
        }
    }
}
