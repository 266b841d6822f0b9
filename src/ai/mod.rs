pub mod baseline;
pub mod search;
pub mod termination;

pub use baseline::{greedy_move, random_move};
pub use search::{search_position, AlphaBeta, SearchResult, INFINITY};
pub use termination::{is_end, Deadline, FixedDepth, Termination, TerminationPolicy, DEADLINE_BUDGET};
