//! Depth-limited minimax with alpha-beta pruning

use std::time::Instant;

use tracing::debug;

use crate::core::{Board, Move, Side};
use crate::heuristics::{material_eval, LeafEvaluator};

use super::termination::{is_end, Termination};

/// Stand-in for an infinite score. Real scores stay within +-24.
pub const INFINITY: f64 = 100_000.0;

#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    pub value: f64,
    /// `None` when the root itself is a leaf
    pub best_move: Option<Move>,
    pub nodes_explored: u32,
}

/// One search from the point of view of `perspective`, who maximizes.
///
/// Every node works on its own copy of the board, so siblings never see each
/// other's moves. Among equally scored moves the first generated one is kept.
pub struct AlphaBeta<'a, T: Termination, L: LeafEvaluator> {
    perspective: Side,
    termination: &'a T,
    evaluator: &'a L,
    nodes: u32,
}

impl<'a, T: Termination, L: LeafEvaluator> AlphaBeta<'a, T, L> {
    pub fn new(perspective: Side, termination: &'a T, evaluator: &'a L) -> Self {
        Self {
            perspective,
            termination,
            evaluator,
            nodes: 0,
        }
    }

    /// Search `depth` plies from `board` with `perspective` to move and a full window
    pub fn search(&mut self, board: &Board, depth: u32) -> SearchResult {
        let (value, best_move) =
            self.minimax(board, self.perspective, depth, -INFINITY, INFINITY, true);

        SearchResult {
            value,
            best_move,
            nodes_explored: self.nodes,
        }
    }

    pub fn nodes_explored(&self) -> u32 {
        self.nodes
    }

    pub fn minimax(
        &mut self,
        board: &Board,
        side_to_move: Side,
        remaining_depth: u32,
        mut alpha: f64,
        mut beta: f64,
        maximizing: bool,
    ) -> (f64, Option<Move>) {
        self.nodes += 1;

        if is_end(board.counts(), remaining_depth, self.termination) {
            let value = self.evaluator.evaluate(board, side_to_move, self.perspective);
            return (value, None);
        }

        let moves = board.legal_moves(side_to_move);
        let Some(&first) = moves.first() else {
            return (material_eval(self.perspective, board.counts()) as f64, None);
        };

        let mut best_move = first;
        let mut best = if maximizing { -INFINITY } else { INFINITY };

        for mv in &moves {
            let child = board.applied(mv);
            let (score, _) = self.minimax(
                &child,
                !side_to_move,
                remaining_depth - 1,
                alpha,
                beta,
                !maximizing,
            );

            if maximizing {
                if score > best {
                    best = score;
                    best_move = *mv;
                }
                alpha = alpha.max(best);
            } else {
                if score < best {
                    best = score;
                    best_move = *mv;
                }
                beta = beta.min(best);
            }

            if alpha >= beta {
                break;
            }
        }

        (best, Some(best_move))
    }
}

/// Run a full search for `side` and report how long it took in seconds
pub fn search_position<T: Termination, L: LeafEvaluator>(
    board: &Board,
    side: Side,
    depth: u32,
    termination: &T,
    evaluator: &L,
) -> (SearchResult, f64) {
    let start_time = Instant::now();
    let result = AlphaBeta::new(side, termination, evaluator).search(board, depth);
    let elapsed = start_time.elapsed().as_secs_f64();

    debug!(
        %side,
        depth,
        value = result.value,
        best_move = ?result.best_move,
        nodes = result.nodes_explored,
        elapsed,
        "search finished"
    );

    (result, elapsed)
}
