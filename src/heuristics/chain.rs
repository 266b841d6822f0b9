use std::fmt;

use crate::core::{Board, Side};

use super::{
    material::material_eval,
    tiebreak::TieBreak,
    traits::{LeafEvaluator, TieBreaker},
};

/// Material balance, falling through an ordered list of tie-breaks while the
/// score is still exactly zero.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TieBreakChain {
    pub tie_breaks: Vec<TieBreak>,
}

impl TieBreakChain {
    pub fn new(tie_breaks: Vec<TieBreak>) -> Self {
        Self { tie_breaks }
    }

    /// Plain material evaluation
    pub fn none() -> Self {
        Self::default()
    }
}

impl fmt::Display for TieBreakChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "material")?;
        for tie_break in &self.tie_breaks {
            write!(f, ",{}", tie_break)?;
        }
        Ok(())
    }
}

impl LeafEvaluator for TieBreakChain {
    fn evaluate(&self, board: &Board, side_to_move: Side, perspective: Side) -> f64 {
        let mut score = material_eval(perspective, board.counts()) as f64;
        for tie_break in &self.tie_breaks {
            if score != 0.0 {
                break;
            }
            score = tie_break.tie_break(board, side_to_move);
        }
        score
    }
}
