pub mod chain;
pub mod material;
pub mod tiebreak;

mod traits;
pub use traits::*;

pub use chain::TieBreakChain;
pub use material::material_eval;
pub use tiebreak::{distance_tiebreak, stack_size_tiebreak, TieBreak};
