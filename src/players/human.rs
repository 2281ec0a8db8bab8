use super::Player;
use crate::Chips;
use crate::table::action::Action;
use crate::table::choice::Choice;
use crate::table::event::Event;
use crate::table::view::TableView;
use colored::Colorize;
use dialoguer::Input;
use dialoguer::Select;

/// A terminal seat. Renders the public narration as it arrives and
/// prompts with only the legal choices when it is this seat's turn.
#[derive(Debug, Default)]
pub struct Human;

impl Human {
    fn prompt(view: &TableView) -> Action {
        println!();
        println!("{}", view.to_string().bright_white());
        let labels = view
            .choices
            .iter()
            .map(|c| c.to_string())
            .collect::<Vec<String>>();
        let index = Select::new()
            .with_prompt("your move")
            .items(&labels)
            .default(0)
            .interact()
            .unwrap_or(0);
        match view.choices[index] {
            Choice::Fold => Action::Fold,
            Choice::Check => Action::Check,
            Choice::Call(chips) => Action::Call(chips),
            Choice::Bet { min, max } => Action::Bet(Self::amount("bet", min, max)),
            Choice::Raise { min, max } => Action::Raise(Self::amount("raise to", min, max)),
        }
    }

    fn amount(verb: &str, min: Chips, max: Chips) -> Chips {
        Input::new()
            .with_prompt(format!("{} ({}..={})", verb, min, max))
            .validate_with(|n: &Chips| {
                if (min..=max).contains(n) {
                    Ok(())
                } else {
                    Err(format!("must be between {} and {}", min, max))
                }
            })
            .interact_text()
            .unwrap_or(min)
    }
}

impl Player for Human {
    fn decide(&mut self, view: &TableView) -> Action {
        Self::prompt(view)
    }

    fn notify(&mut self, event: &Event) {
        match event {
            Event::HoleCards { hole, .. } => {
                println!("{}", format!("your cards: {}", hole).bright_yellow())
            }
            Event::Rejected { action, .. } => {
                println!("{}", format!("{} is not allowed here", action).red())
            }
            event => println!("{}", event),
        }
    }

    fn is_interactive(&self) -> bool {
        true
    }
}
