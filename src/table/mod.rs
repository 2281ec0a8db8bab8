pub mod action;
pub use action::*;

pub mod choice;
pub use choice::*;

pub mod engine;
pub use engine::*;

pub mod error;
pub use error::*;

pub mod event;
pub use event::*;

pub mod record;
pub use record::*;

pub mod seat;
pub use seat::*;

pub mod settlement;
pub use settlement::*;

pub mod showdown;
pub use showdown::*;

pub mod table;
pub use table::*;

pub mod view;
pub use view::*;
