use crate::core::{Board, Side};

/// Scores positions where the search stops expanding.
///
/// Values are from `perspective`'s point of view (the side at the root of the
/// search); `side_to_move` is whoever would play next in the leaf position.
pub trait LeafEvaluator {
    fn evaluate(&self, board: &Board, side_to_move: Side, perspective: Side) -> f64;
}

/// Secondary score consulted when the material balance is exactly even.
/// Always in `[0, 1]`.
pub trait TieBreaker {
    fn tie_break(&self, board: &Board, side_to_move: Side) -> f64;
}
