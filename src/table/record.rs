use super::action::Action;
use super::settlement::Settlement;
use crate::Chips;
use crate::Position;
use serde::Serialize;

/// A finished hand, flattened for the JSON-lines history file.
#[derive(Debug, Clone, Serialize)]
pub struct HandRecord {
    pub hand: u64,
    pub dealer: Position,
    pub stacks: Vec<Chips>,
    pub plays: Vec<Play>,
    pub board: String,
    pub outcomes: Vec<Outcome>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Play {
    pub seat: Position,
    pub action: Action,
}

#[derive(Debug, Clone, Serialize)]
pub struct Outcome {
    pub seat: Position,
    pub risked: Chips,
    pub reward: Chips,
    pub shown: Option<String>,
}

impl From<&Settlement> for Outcome {
    fn from(settlement: &Settlement) -> Self {
        Self {
            seat: settlement.position,
            risked: settlement.risked,
            reward: settlement.reward,
            shown: settlement.strength.as_ref().map(|s| s.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::seat::State;

    #[test]
    fn record_serializes_to_json() {
        let record = HandRecord {
            hand: 7,
            dealer: 2,
            stacks: vec![980, 1020],
            plays: vec![
                Play {
                    seat: 0,
                    action: Action::Blind(10),
                },
                Play {
                    seat: 1,
                    action: Action::Raise(60),
                },
            ],
            board: "2h 7d Jc".to_string(),
            outcomes: vec![Outcome::from(&Settlement {
                position: 0,
                reward: 0,
                risked: 10,
                status: State::Folding,
                strength: None,
            })],
        };
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"hand\":7"));
        assert!(json.contains("\"Raise\""));
        assert!(json.contains("\"shown\":null"));
    }
}
