//! Fallback evaluations for materially even positions
//!
//! Both scores are cheap nudges rather than real assessments: building a tall stack
//! lets a side throw tokens deep into enemy lines next turn ("catapult"), and
//! closing the gap to the enemy creates chances to blow things up.

use std::fmt;

use crate::core::{
    board::START_TOKENS,
    pos::MAX_DISTANCE,
    Board, Side,
};

use super::traits::TieBreaker;

/// `max_stack / 12` for the tallest stack of `colour`, or 0 when no stack of
/// `colour` holds more than one token.
pub fn stack_size_tiebreak(board: &Board, colour: Side) -> f64 {
    let largest = board.largest_stack(colour);
    if largest <= 1 {
        return 0.0;
    }
    largest as f64 / START_TOKENS as f64
}

/// Shortest Manhattan distance between a white and a black stack,
/// or [`MAX_DISTANCE`] when a side has no stacks
pub fn closest_enemy_distance(board: &Board) -> i32 {
    let mut shortest = MAX_DISTANCE;
    for (white, _) in board.stacks_of(Side::White) {
        for (black, _) in board.stacks_of(Side::Black) {
            shortest = shortest.min(white.dist(&black));
        }
    }
    shortest
}

/// `1 - d / 14` for the shortest white-black distance `d`: the closer the better
pub fn distance_tiebreak(board: &Board) -> f64 {
    1.0 - closest_enemy_distance(board) as f64 / MAX_DISTANCE as f64
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TieBreak {
    StackSize,
    Distance,
}

impl TieBreaker for TieBreak {
    fn tie_break(&self, board: &Board, side_to_move: Side) -> f64 {
        match self {
            TieBreak::StackSize => stack_size_tiebreak(board, side_to_move),
            TieBreak::Distance => distance_tiebreak(board),
        }
    }
}

impl fmt::Display for TieBreak {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TieBreak::StackSize => write!(f, "stack-size"),
            TieBreak::Distance => write!(f, "distance"),
        }
    }
}
