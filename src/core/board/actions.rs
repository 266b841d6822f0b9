use crate::core::{
    action::Move,
    convert::ToIndex,
    pos::{Pos, NUM_CELLS},
    side::{Side, SideArray},
};
use anyhow::{ensure, Context, Result};

use super::Board;

impl Board {
    /// Cells an explosion at `origin` would clear.
    ///
    /// The blast spreads from every destroyed stack to all occupied cells around it
    /// (diagonals included), regardless of side, so the result is the 8-connected
    /// group of occupied cells containing `origin`. Empty for an empty origin.
    pub fn blast_radius(&self, origin: Pos) -> Vec<Pos> {
        if !self.is_occupied(origin) {
            return Vec::new();
        }

        let mut seen = [false; NUM_CELLS];
        let mut frontier = vec![origin];
        let mut blast = Vec::new();
        seen[origin.index()] = true;

        while let Some(pos) = frontier.pop() {
            blast.push(pos);
            for &next in pos.neighbours() {
                if !seen[next.index()] && self.is_occupied(next) {
                    seen[next.index()] = true;
                    frontier.push(next);
                }
            }
        }

        blast
    }

    /// Detonate the stack at `origin`; returns the number of tokens destroyed per side
    pub fn explode(&mut self, origin: Pos) -> SideArray<u32> {
        let mut destroyed = SideArray::new(0, 0);
        for pos in self.blast_radius(origin) {
            if let Some(stack) = self.remove_stack(pos) {
                destroyed[stack.side] += stack.count;
            }
        }
        destroyed
    }

    /// Play `mv` in place. The move is trusted to be legal.
    pub fn apply(&mut self, mv: &Move) {
        match *mv {
            Move::Explode { at } => {
                debug_assert!(self.is_occupied(at), "nothing to explode at {}", at);
                self.explode(at);
            }
            Move::Relocate { count, from, to } => {
                let Some(stack) = self.get(from).copied() else {
                    debug_assert!(false, "no stack to move from {}", from);
                    return;
                };
                // destination first, so a newly occupied cell lands behind the source
                // in board order before the source is possibly vacated
                self.add_tokens(to, stack.side, count);
                self.remove_tokens(from, count);
            }
        }
    }

    /// Copy of the board with `mv` played
    pub fn applied(&self, mv: &Move) -> Board {
        let mut next = self.clone();
        next.apply(mv);
        next
    }

    /// Play a move reported from outside, after checking that it fits the board.
    ///
    /// Only cheap preconditions are checked: positions on the board, a stack of
    /// `side` at the source, a token count the stack can provide and a destination
    /// not held by the opponent. Reach is not checked.
    pub fn try_apply(&mut self, side: Side, mv: &Move) -> Result<()> {
        let source = mv.source();
        let stack = self.cells[source.to_index()?]
            .as_ref()
            .with_context(|| format!("No stack at {} for {}", source, mv))?;
        ensure!(
            stack.side == side,
            "Stack at {} belongs to {}, not {}",
            source,
            stack.side,
            side
        );

        if let Move::Relocate { count, to, .. } = *mv {
            ensure!(
                count >= 1 && count <= stack.count,
                "Cannot move {} tokens from a stack of {}",
                count,
                stack.count
            );
            ensure!(to != source, "Move {} does not go anywhere", mv);
            ensure!(self.can_land(side, to), "Cannot move onto {}", to);
        }

        self.apply(mv);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn chain_board() -> Board {
        let mut board = Board::empty();
        // diagonal chain of alternating sides, plus a loner out of reach
        board.add_tokens(Pos::new(0, 0), Side::White, 1);
        board.add_tokens(Pos::new(1, 1), Side::Black, 2);
        board.add_tokens(Pos::new(2, 2), Side::White, 3);
        board.add_tokens(Pos::new(3, 3), Side::Black, 1);
        board.add_tokens(Pos::new(6, 6), Side::Black, 1);
        board
    }

    #[test]
    fn test_explosion_clears_connected_group() {
        let mut board = chain_board();
        let destroyed = board.explode(Pos::new(0, 0));

        assert_eq!(destroyed, SideArray::new(4, 3));
        assert_eq!(board.count(Side::White), 0);
        assert_eq!(board.count(Side::Black), 1);
        assert_eq!(board.num_stacks(), 1);
        assert!(board.is_occupied(Pos::new(6, 6)));
        assert!(board.counts_consistent());
    }

    #[test]
    fn test_blast_radius_is_the_same_from_any_member() {
        let board = chain_board();
        let from_end: BTreeSet<Pos> = board.blast_radius(Pos::new(0, 0)).into_iter().collect();

        for &member in &from_end {
            let again: BTreeSet<Pos> = board.blast_radius(member).into_iter().collect();
            assert_eq!(again, from_end);
        }
        assert_eq!(from_end.len(), 4);
        assert!(board.blast_radius(Pos::new(5, 5)).is_empty());
    }

    #[test]
    fn test_orthogonal_gap_stops_the_blast() {
        let mut board = Board::empty();
        board.add_tokens(Pos::new(0, 0), Side::White, 1);
        board.add_tokens(Pos::new(2, 0), Side::Black, 1);

        board.apply(&Move::explode(Pos::new(0, 0)));
        assert_eq!(board.count(Side::White), 0);
        assert_eq!(board.count(Side::Black), 1);
    }

    #[test]
    fn test_relocate_partial_and_full() {
        let mut board = Board::empty();
        board.add_tokens(Pos::new(2, 2), Side::White, 3);
        board.add_tokens(Pos::new(7, 7), Side::Black, 1);

        board.apply(&Move::relocate(2, Pos::new(2, 2), Pos::new(2, 4)));
        assert_eq!(board.get(Pos::new(2, 2)).unwrap().count, 1);
        assert_eq!(board.get(Pos::new(2, 4)).unwrap().count, 2);
        assert_eq!(board.count(Side::White), 3);

        // merging the rest
        board.apply(&Move::relocate(1, Pos::new(2, 2), Pos::new(2, 4)));
        assert!(board.get(Pos::new(2, 2)).is_none());
        assert_eq!(board.get(Pos::new(2, 4)).unwrap().count, 3);
        assert_eq!(board.count(Side::White), 3);
        assert!(board.counts_consistent());
    }

    #[test]
    fn test_relocate_keeps_order_of_merged_stack() {
        let mut board = Board::empty();
        board.add_tokens(Pos::new(0, 0), Side::White, 1);
        board.add_tokens(Pos::new(1, 0), Side::White, 1);
        board.add_tokens(Pos::new(5, 5), Side::Black, 1);

        board.apply(&Move::relocate(1, Pos::new(1, 0), Pos::new(0, 0)));
        let order: Vec<Pos> = board.stacks().map(|(pos, _)| pos).collect();
        assert_eq!(order, vec![Pos::new(0, 0), Pos::new(5, 5)]);

        board.apply(&Move::relocate(1, Pos::new(0, 0), Pos::new(0, 1)));
        let order: Vec<Pos> = board.stacks().map(|(pos, _)| pos).collect();
        assert_eq!(order, vec![Pos::new(0, 0), Pos::new(5, 5), Pos::new(0, 1)]);
    }

    #[test]
    fn test_applied_leaves_original_untouched() {
        let board = Board::initial();
        let next = board.applied(&Move::explode(Pos::new(0, 0)));

        assert_eq!(board, Board::initial());
        // only the 2x2 block in the corner goes up
        assert_eq!(next.count(Side::White), 8);
        assert_eq!(next.count(Side::Black), 12);
    }

    #[test]
    fn test_try_apply_rejects_bad_moves() {
        let mut board = Board::initial();

        assert!(board.try_apply(Side::White, &Move::explode(Pos::new(2, 2))).is_err());
        assert!(board.try_apply(Side::Black, &Move::explode(Pos::new(0, 0))).is_err());
        assert!(board
            .try_apply(Side::White, &Move::relocate(2, Pos::new(0, 0), Pos::new(0, 2)))
            .is_err());
        assert!(board
            .try_apply(Side::White, &Move::relocate(1, Pos::new(0, 0), Pos::new(-1, 0)))
            .is_err());
        assert!(board
            .try_apply(Side::White, &Move::relocate(0, Pos::new(0, 0), Pos::new(0, 2)))
            .is_err());
        assert_eq!(board, Board::initial());

        board
            .try_apply(Side::White, &Move::relocate(1, Pos::new(0, 1), Pos::new(0, 2)))
            .unwrap();
        assert!(board.is_occupied(Pos::new(0, 2)));
        assert!(board
            .try_apply(Side::Black, &Move::relocate(1, Pos::new(0, 6), Pos::new(0, 2)))
            .is_err());
    }
}
