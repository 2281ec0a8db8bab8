pub mod human;
pub mod robot;

pub use human::Human;
pub use robot::Robot;

use crate::table::action::Action;
use crate::table::event::Event;
use crate::table::view::TableView;

/// A decision-maker in a seat.
///
/// `decide` is called whenever it is this seat's turn, with a view
/// holding its cards, the board, the chip counts, and the legal
/// choices. Whatever it returns goes through full validation at
/// the table; nothing stops an implementation from answering with
/// an illegal action, it just will not be accepted.
pub trait Player {
    fn decide(&mut self, view: &TableView) -> Action;

    /// public table events, hole cards included only for this seat
    fn notify(&mut self, _event: &Event) {}

    /// interactive seats get to retry rejected actions
    fn is_interactive(&self) -> bool {
        false
    }
}
