use super::error::TableError;
use super::seat::State;
use super::settlement::Settlement;
use crate::Chips;
use crate::Position;

/// Pot distribution at the end of a hand.
///
/// One undivided pot: the best strength among seats that did not
/// fold takes it, split evenly on a tie. The whole indivisible
/// remainder goes to the tied winner seated first after the
/// button, which is what `priority` encodes.
pub struct Showdown {
    entries: Vec<Settlement>,
    pot: Chips,
    priority: Vec<Position>,
}

impl Showdown {
    pub fn new(entries: Vec<Settlement>, pot: Chips, priority: Vec<Position>) -> Self {
        Self {
            entries,
            pot,
            priority,
        }
    }

    pub fn settle(mut self) -> Result<Vec<Settlement>, TableError> {
        let winners = self.winners()?;
        let share = self.pot / winners.len() as Chips;
        let remainder = self.pot % winners.len() as Chips;
        for (i, position) in winners.iter().enumerate() {
            let extra = if i == 0 { remainder } else { 0 };
            self.entries
                .iter_mut()
                .find(|e| e.position == *position)
                .map(|e| e.reward = share + extra);
        }
        Ok(self.entries)
    }

    /// winning positions in payout priority order
    fn winners(&self) -> Result<Vec<Position>, TableError> {
        let live = self
            .entries
            .iter()
            .filter(|e| e.status != State::Folding)
            .collect::<Vec<&Settlement>>();
        match live.len() {
            0 => Err(TableError::NoEligiblePlayers),
            1 => Ok(vec![live[0].position]),
            _ => {
                let best = live
                    .iter()
                    .filter_map(|e| e.strength)
                    .max()
                    .expect("live seats carry strengths at showdown");
                Ok(self
                    .priority
                    .iter()
                    .copied()
                    .filter(|p| {
                        live.iter()
                            .any(|e| e.position == *p && e.strength == Some(best))
                    })
                    .collect())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::hand::Hand;
    use crate::cards::strength::Strength;

    fn entry(position: Position, status: State, strength: Option<Strength>) -> Settlement {
        Settlement {
            position,
            reward: 0,
            risked: 100,
            status,
            strength,
        }
    }
    fn strength(holding: &str) -> Option<Strength> {
        Some(Strength::from(Hand::try_from(holding).unwrap()))
    }

    #[test]
    fn best_strength_takes_the_pot() {
        let entries = vec![
            entry(0, State::Betting, strength("As Ad Kh Qc 2s 3d 9h")),
            entry(1, State::Betting, strength("Ks Kd Ah Qc 2s 3d 9h")),
            entry(2, State::Folding, None),
        ];
        let paid = Showdown::new(entries, 300, vec![1, 2, 0]).settle().unwrap();
        assert!(paid[0].reward == 300);
        assert!(paid[1].reward == 0);
    }

    #[test]
    fn tie_splits_evenly() {
        // both play the board, a broadway straight
        let board = "As Kd Qh Jc Ts";
        let entries = vec![
            entry(0, State::Betting, strength(&format!("{} 2s 3d", board))),
            entry(1, State::Betting, strength(&format!("{} 4s 5d", board))),
        ];
        let paid = Showdown::new(entries, 200, vec![1, 0]).settle().unwrap();
        assert!(paid[0].reward == 100);
        assert!(paid[1].reward == 100);
    }

    #[test]
    fn remainder_goes_left_of_the_button() {
        let board = "As Kd Qh Jc Ts";
        let entries = vec![
            entry(0, State::Betting, strength(&format!("{} 2s 3d", board))),
            entry(1, State::Betting, strength(&format!("{} 4s 5d", board))),
            entry(2, State::Betting, strength(&format!("{} 6s 7d", board))),
        ];
        // button on 0, so seat 1 takes the whole 2-chip remainder
        let paid = Showdown::new(entries, 200, vec![1, 2, 0]).settle().unwrap();
        assert!(paid[1].reward == 68);
        assert!(paid[2].reward == 66);
        assert!(paid[0].reward == 66);
        assert!(paid.iter().map(|e| e.reward).sum::<Chips>() == 200);
    }

    #[test]
    fn fold_to_one_skips_evaluation() {
        let entries = vec![
            entry(0, State::Folding, None),
            entry(1, State::Shoving, None),
            entry(2, State::Folding, None),
        ];
        let paid = Showdown::new(entries, 90, vec![1, 2, 0]).settle().unwrap();
        assert!(paid[1].reward == 90);
    }

    #[test]
    fn no_live_seats_is_an_error() {
        let entries = vec![entry(0, State::Folding, None)];
        let result = Showdown::new(entries, 90, vec![0]).settle();
        assert!(matches!(result, Err(TableError::NoEligiblePlayers)));
    }
}
