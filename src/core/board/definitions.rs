use crate::core::{pos::NUM_CELLS, side::Side, Pos, SideArray};

/// Tokens of one side piled on a single cell. Never empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Stack {
    pub side: Side,
    pub count: u32,
}

impl Stack {
    pub fn new(side: Side, count: u32) -> Self {
        debug_assert!(count >= 1, "stacks hold at least one token");
        Self { side, count }
    }
}

/// Columns holding a starting stack on each of a side's two home rows
pub const START_COLUMNS: [i32; 6] = [0, 1, 3, 4, 6, 7];
pub const START_TOKENS: u32 = 12;

/// Board state: stacks by cell plus per-side token totals.
///
/// Stacks are also kept in insertion order. A cell that becomes occupied goes to the
/// back of the order, a stack that grows or shrinks keeps its place and a vacated
/// cell drops out. Move generation walks this order, so it decides which of two
/// equally scored moves the search prefers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    pub(super) cells: [Option<Stack>; NUM_CELLS],
    pub(super) order: Vec<Pos>,
    pub(super) counts: SideArray<u32>,
}
