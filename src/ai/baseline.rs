//! One-ply players used as sparring partners for the search

use rand::{rngs::StdRng, seq::IndexedRandom};

use crate::core::{Board, Move, Side};
use crate::heuristics::material_eval;

/// Score every candidate must beat to be picked by [`greedy_move`]
pub const GREEDY_FLOOR: i32 = -99_999;

/// The move leaving `side` with the best token balance right away.
/// Ties go to the first move generated.
pub fn greedy_move(board: &Board, side: Side) -> Option<Move> {
    let moves = board.legal_moves(side);
    let mut best_move = *moves.first()?;
    let mut best_score = GREEDY_FLOOR;

    for mv in &moves {
        let score = material_eval(side, board.applied(mv).counts());
        if score > best_score {
            best_score = score;
            best_move = *mv;
        }
    }

    Some(best_move)
}

/// Any legal move, uniformly
pub fn random_move(board: &Board, side: Side, rng: &mut StdRng) -> Option<Move> {
    board.legal_moves(side).choose(rng).copied()
}
