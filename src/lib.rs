//! Expendibots - adversarial search agents for a stack-and-explode board game

pub mod ai;
pub mod core;
pub mod engine;
pub mod heuristics;
pub mod utils;

// Re-export commonly used items
pub use crate::core::{Board, Move, Pos, Side};
pub use engine::{Agent, AgentOptions, Variant};
