//! When to stop expanding the search tree

use std::fmt;
use std::time::{Duration, Instant};

use tracing::trace;

use crate::core::{Side, SideArray};

/// Wall-clock budget of a timed search, counted from the root call
pub const DEADLINE_BUDGET: Duration = Duration::from_millis(210);

pub trait Termination {
    /// Whether the search should stop expanding regardless of remaining depth
    fn expired(&self) -> bool;
}

/// Stop on depth alone
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedDepth;

impl Termination for FixedDepth {
    fn expired(&self) -> bool {
        false
    }
}

/// Stop on depth, or once the budget has been used up
#[derive(Debug, Clone, Copy)]
pub struct Deadline {
    start: Instant,
    budget: Duration,
}

impl Deadline {
    pub fn new(start: Instant, budget: Duration) -> Self {
        Self { start, budget }
    }

    /// The standard budget, starting now
    pub fn start_now() -> Self {
        Self::new(Instant::now(), DEADLINE_BUDGET)
    }
}

impl Termination for Deadline {
    fn expired(&self) -> bool {
        self.start.elapsed() > self.budget
    }
}

/// Leaf test for a search node: a side is out of tokens, the depth is used up or
/// time has run out.
pub fn is_end<T: Termination + ?Sized>(
    counts: &SideArray<u32>,
    remaining_depth: u32,
    termination: &T,
) -> bool {
    if Side::all().iter().any(|&side| counts[side] == 0) || remaining_depth == 0 {
        return true;
    }
    if termination.expired() {
        trace!(remaining_depth, "search deadline reached");
        return true;
    }
    false
}

/// Which [`Termination`] a search variant uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TerminationPolicy {
    Depth,
    Deadline,
}

impl fmt::Display for TerminationPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TerminationPolicy::Depth => write!(f, "depth"),
            TerminationPolicy::Deadline => write!(f, "deadline"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_tokens_ends_at_any_depth() {
        assert!(is_end(&SideArray::new(0, 5), 10, &FixedDepth));
        assert!(is_end(&SideArray::new(5, 0), 10, &FixedDepth));
        assert!(is_end(&SideArray::new(0, 0), 10, &FixedDepth));
    }

    #[test]
    fn test_depth_ends() {
        assert!(is_end(&SideArray::new(3, 3), 0, &FixedDepth));
        assert!(!is_end(&SideArray::new(3, 3), 1, &FixedDepth));
    }

    #[test]
    fn test_deadline() {
        let fresh = Deadline::start_now();
        assert!(!fresh.expired());
        assert!(!is_end(&SideArray::new(3, 3), 4, &fresh));

        let spent = Deadline::new(Instant::now(), Duration::ZERO);
        std::thread::sleep(Duration::from_millis(2));
        assert!(spent.expired());
        assert!(is_end(&SideArray::new(3, 3), 4, &spent));
    }

    #[test]
    fn test_policy_names() {
        assert_eq!(TerminationPolicy::Depth.to_string(), "depth");
        assert_eq!(TerminationPolicy::Deadline.to_string(), "deadline");
    }
}
