use anyhow::{Context, Result};
use rand::rngs::StdRng;
use tracing::debug;

use crate::ai::{greedy_move, random_move, search_position, Deadline, FixedDepth, TerminationPolicy};
use crate::core::{Board, Move, Side};
use crate::heuristics::TieBreakChain;
use crate::utils::{make_rng, seeded_rng};

use super::options::{AgentOptions, Variant};

/// A player for one game. It keeps its own copy of the board, which only
/// changes through [`Agent::observe`].
pub struct Agent {
    side: Side,
    board: Board,
    options: AgentOptions,
    rng: StdRng,
}

impl Agent {
    pub fn new(side: Side, options: AgentOptions) -> Self {
        let rng = match options.seed {
            Some(seed) => seeded_rng(seed),
            None => make_rng(),
        };

        Self {
            side,
            board: Board::initial(),
            options,
            rng,
        }
    }

    pub fn with_variant(side: Side, variant: Variant) -> Self {
        Self::new(side, AgentOptions::new(variant))
    }

    pub fn side(&self) -> Side {
        self.side
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn options(&self) -> &AgentOptions {
        &self.options
    }

    /// Pick a move for the agent's side from the current position.
    /// `None` once the game is over or no move is available.
    pub fn choose_move(&mut self) -> Option<Move> {
        if self.board.is_over() {
            return None;
        }

        let variant = self.options.variant;
        let chosen = match variant.termination() {
            Some(policy) => {
                let chain = TieBreakChain::new(variant.tie_breaks());
                let depth = self.options.search_depth();
                debug!(%variant, termination = %policy, tie_breaks = %chain, depth, "searching");
                let (result, _) = match policy {
                    TerminationPolicy::Depth => {
                        search_position(&self.board, self.side, depth, &FixedDepth, &chain)
                    }
                    TerminationPolicy::Deadline => {
                        let deadline = Deadline::start_now();
                        search_position(&self.board, self.side, depth, &deadline, &chain)
                    }
                };
                result.best_move
            }
            None if variant == Variant::Random => {
                random_move(&self.board, self.side, &mut self.rng)
            }
            None => greedy_move(&self.board, self.side),
        };

        debug!(side = %self.side, %variant, chosen = ?chosen, "move chosen");
        chosen
    }

    /// Record a move made by either side
    pub fn observe(&mut self, side: Side, mv: &Move) -> Result<()> {
        self.board
            .try_apply(side, mv)
            .with_context(|| format!("{} cannot play {}", side, mv))?;

        debug!(
            %side,
            %mv,
            white = self.board.count(Side::White),
            black = self.board.count(Side::Black),
            "move observed"
        );
        Ok(())
    }
}
