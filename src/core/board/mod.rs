//! Board representation and rules

pub mod actions;
pub mod definitions;
pub mod moves;
pub mod notation;

pub use definitions::{Board, Stack, START_COLUMNS, START_TOKENS};

use super::{
    pos::{Pos, NUM_CELLS},
    side::{Side, SideArray},
};

impl Board {
    /// Create a board without any tokens
    pub fn empty() -> Self {
        Self {
            cells: [None; NUM_CELLS],
            order: Vec::with_capacity(2 * START_TOKENS as usize),
            counts: SideArray::new(0, 0),
        }
    }

    /// Starting position: single tokens on both home rows of each side
    pub fn initial() -> Self {
        let mut board = Self::empty();
        for x in START_COLUMNS {
            board.add_tokens(Pos::new(x, 0), Side::White, 1);
            board.add_tokens(Pos::new(x, 1), Side::White, 1);
            board.add_tokens(Pos::new(x, 6), Side::Black, 1);
            board.add_tokens(Pos::new(x, 7), Side::Black, 1);
        }
        board
    }

    pub fn get(&self, pos: Pos) -> Option<&Stack> {
        if pos.in_bounds() {
            self.cells[pos.index()].as_ref()
        } else {
            None
        }
    }

    pub fn is_occupied(&self, pos: Pos) -> bool {
        self.get(pos).is_some()
    }

    /// Stacks in insertion order
    pub fn stacks(&self) -> impl Iterator<Item = (Pos, Stack)> + '_ {
        self.order.iter().filter_map(move |&pos| self.get(pos).map(|stack| (pos, *stack)))
    }

    pub fn stacks_of(&self, side: Side) -> impl Iterator<Item = (Pos, Stack)> + '_ {
        self.stacks().filter(move |(_, stack)| stack.side == side)
    }

    pub fn num_stacks(&self) -> usize {
        self.order.len()
    }

    pub fn count(&self, side: Side) -> u32 {
        self.counts[side]
    }

    pub fn counts(&self) -> &SideArray<u32> {
        &self.counts
    }

    /// A side without tokens has lost (or both have, and the game is drawn)
    pub fn is_over(&self) -> bool {
        Side::all().iter().any(|&side| self.counts[side] == 0)
    }

    /// Size of the largest stack owned by `side`, 0 when it has none
    pub fn largest_stack(&self, side: Side) -> u32 {
        self.stacks_of(side).map(|(_, stack)| stack.count).max().unwrap_or(0)
    }

    /// Put `count` tokens of `side` on `pos`, merging into a friendly stack
    pub fn add_tokens(&mut self, pos: Pos, side: Side, count: u32) {
        debug_assert!(pos.in_bounds(), "{} is off the board", pos);
        debug_assert!(count >= 1);

        let cell = &mut self.cells[pos.index()];
        match cell {
            Some(stack) => {
                debug_assert_eq!(stack.side, side, "cannot merge into an enemy stack");
                stack.count += count;
            }
            None => {
                *cell = Some(Stack::new(side, count));
                self.order.push(pos);
            }
        }
        self.counts[side] += count;
    }

    /// Take `count` tokens off the stack at `pos`, dropping the stack once it is empty
    pub fn remove_tokens(&mut self, pos: Pos, count: u32) {
        let Some(stack) = self.cells[pos.index()].as_mut() else {
            debug_assert!(false, "no stack at {}", pos);
            return;
        };
        debug_assert!(count <= stack.count);

        let taken = count.min(stack.count);
        let side = stack.side;
        stack.count -= taken;
        if stack.count == 0 {
            self.cells[pos.index()] = None;
            self.drop_from_order(pos);
        }
        self.counts[side] -= taken;
    }

    /// Remove the whole stack at `pos`
    pub fn remove_stack(&mut self, pos: Pos) -> Option<Stack> {
        if !pos.in_bounds() {
            return None;
        }
        let stack = self.cells[pos.index()].take()?;
        self.drop_from_order(pos);
        self.counts[stack.side] -= stack.count;
        Some(stack)
    }

    fn drop_from_order(&mut self, pos: Pos) {
        if let Some(i) = self.order.iter().position(|&p| p == pos) {
            self.order.remove(i);
        }
    }

    /// Recount tokens from the stacks and compare with the running totals
    pub fn counts_consistent(&self) -> bool {
        let mut recount = SideArray::new(0, 0);
        for (_, stack) in self.stacks() {
            recount[stack.side] += stack.count;
        }
        recount == self.counts
            && self.order.len() == self.cells.iter().filter(|c| c.is_some()).count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::initial()
    }
}
