mod agent;
mod options;

pub use agent::Agent;
pub use options::{AgentOptions, Variant, FIXED_DEPTH, TIMED_DEPTH};
