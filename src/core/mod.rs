//! Core game representations and rules

pub mod action;
pub mod board;
pub mod convert;
pub mod pos;
pub mod side;

pub use action::Move;
pub use board::{Board, Stack};
pub use convert::{FromIndex, ToIndex};
pub use pos::Pos;
pub use side::{Side, SideArray};
