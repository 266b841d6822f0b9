/// Configuration options for an agent
use anyhow::{bail, ensure, Context, Result};
use std::fmt;
use std::str::FromStr;

use crate::ai::TerminationPolicy;
use crate::heuristics::TieBreak;

/// Search depth of the fixed-depth variants
pub const FIXED_DEPTH: u32 = 3;
/// Search depth of the timed variants, normally cut short by the deadline
pub const TIMED_DEPTH: u32 = 10;

/// How an agent picks its moves
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    AlphaBeta,
    AlphaBetaDistance,
    Catapult,
    CatapultDistance,
    Timed,
    TimedDistance,
    Greedy,
    Random,
}

impl Variant {
    pub fn all() -> [Variant; 8] {
        [
            Variant::AlphaBeta,
            Variant::AlphaBetaDistance,
            Variant::Catapult,
            Variant::CatapultDistance,
            Variant::Timed,
            Variant::TimedDistance,
            Variant::Greedy,
            Variant::Random,
        ]
    }

    /// `None` for the baselines, which do not search
    pub fn termination(&self) -> Option<TerminationPolicy> {
        match self {
            Variant::AlphaBeta
            | Variant::AlphaBetaDistance
            | Variant::Catapult
            | Variant::CatapultDistance => Some(TerminationPolicy::Depth),
            Variant::Timed | Variant::TimedDistance => Some(TerminationPolicy::Deadline),
            Variant::Greedy | Variant::Random => None,
        }
    }

    /// Tie-breaks consulted in order while the material score is level
    pub fn tie_breaks(&self) -> Vec<TieBreak> {
        match self {
            Variant::AlphaBetaDistance | Variant::TimedDistance => vec![TieBreak::Distance],
            Variant::Catapult => vec![TieBreak::StackSize],
            Variant::CatapultDistance => vec![TieBreak::StackSize, TieBreak::Distance],
            _ => Vec::new(),
        }
    }

    pub fn default_depth(&self) -> u32 {
        match self.termination() {
            Some(TerminationPolicy::Deadline) => TIMED_DEPTH,
            Some(TerminationPolicy::Depth) => FIXED_DEPTH,
            None => 1,
        }
    }
}

impl Default for Variant {
    fn default() -> Self {
        Variant::CatapultDistance
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Variant::AlphaBeta => "alphabeta",
            Variant::AlphaBetaDistance => "alphabeta-distance",
            Variant::Catapult => "catapult",
            Variant::CatapultDistance => "catapult-distance",
            Variant::Timed => "timed",
            Variant::TimedDistance => "timed-distance",
            Variant::Greedy => "greedy",
            Variant::Random => "random",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for Variant {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "alphabeta" => Ok(Variant::AlphaBeta),
            "alphabeta-distance" => Ok(Variant::AlphaBetaDistance),
            "catapult" => Ok(Variant::Catapult),
            "catapult-distance" => Ok(Variant::CatapultDistance),
            "timed" => Ok(Variant::Timed),
            "timed-distance" => Ok(Variant::TimedDistance),
            "greedy" => Ok(Variant::Greedy),
            "random" => Ok(Variant::Random),
            _ => bail!("Unknown variant: {}", s),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentOptions {
    /// The strategy to play with
    pub variant: Variant,
    /// Overrides the variant's default search depth
    pub depth: Option<u32>,
    /// Seed for the random baseline; the usual rng is used when unset
    pub seed: Option<u64>,
}

impl AgentOptions {
    pub fn new(variant: Variant) -> Self {
        Self {
            variant,
            ..Self::default()
        }
    }

    pub fn set_option(&mut self, name: &str, value: &str) -> Result<()> {
        match name {
            "variant" => self.variant = value.parse()?,
            "depth" => {
                let depth: u32 = value.parse().context("invalid depth")?;
                ensure!(depth >= 1, "depth must be at least 1");
                self.depth = Some(depth);
            }
            "seed" => {
                let seed: u64 = value.parse().context("invalid seed")?;
                self.seed = Some(seed);
            }
            _ => bail!("Unknown option: {}", name),
        }

        Ok(())
    }

    /// Never 0, a root searched to depth 0 has no move to offer
    pub fn search_depth(&self) -> u32 {
        self.depth.unwrap_or_else(|| self.variant.default_depth()).max(1)
    }
}

impl Default for AgentOptions {
    fn default() -> Self {
        Self {
            variant: Variant::default(),
            depth: None,
            seed: None,
        }
    }
}
