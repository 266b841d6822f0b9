use crate::core::{action::Move, pos::Pos, side::Side};

use super::Board;

/// Orthogonal probes in the order destinations are listed for each distance
const STEPS: [(i32, i32); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

impl Board {
    /// Can a stack owned by `side` land on `to`? The path in between is not checked.
    pub fn can_land(&self, side: Side, to: Pos) -> bool {
        to.in_bounds() && self.get(to).map_or(true, |stack| stack.side == side)
    }

    /// Destinations for the stack on `from`, nearest first.
    ///
    /// A stack of `n` tokens reaches up to `n` cells in each cardinal direction.
    /// Stacks standing in between do not block the way.
    pub fn reachable_tiles(&self, from: Pos) -> Vec<Pos> {
        let Some(stack) = self.get(from) else {
            return Vec::new();
        };

        let reach = stack.count as i32;
        let mut tiles = Vec::with_capacity(4 * stack.count as usize);
        for distance in 1..=reach {
            for (dx, dy) in STEPS {
                let to = from.offset(dx * distance, dy * distance);
                if self.can_land(stack.side, to) {
                    tiles.push(to);
                }
            }
        }
        tiles
    }

    /// Every move available to `side`.
    ///
    /// Stacks are visited in board order. Each contributes its explosion first, then
    /// its relocations grouped by the number of tokens carried (1 up to the whole
    /// stack), each group listing [`Board::reachable_tiles`] in order.
    pub fn legal_moves(&self, side: Side) -> Vec<Move> {
        let mut moves = Vec::new();

        for (from, stack) in self.stacks_of(side) {
            moves.push(Move::explode(from));

            let tiles = self.reachable_tiles(from);
            for count in 1..=stack.count {
                moves.extend(tiles.iter().map(|&to| Move::relocate(count, from, to)));
            }
        }

        moves
    }
}
