use anyhow::{anyhow, bail, ensure, Context, Result};
use std::fmt;
use std::str::FromStr;

use crate::core::{
    pos::{Pos, BOARD_LEN},
    side::Side,
};

use super::Board;

impl Board {
    /// Compact text form: ranks from y = 7 down to y = 0 separated by `/`, one
    /// entry per cell, `.` for empty and `w3` / `b1` for stacks.
    pub fn to_notation(&self) -> String {
        let mut out = String::new();
        for y in (0..BOARD_LEN as i32).rev() {
            for x in 0..BOARD_LEN as i32 {
                match self.get(Pos::new(x, y)) {
                    Some(stack) => {
                        out.push(stack.side.symbol());
                        out.push_str(&stack.count.to_string());
                    }
                    None => out.push('.'),
                }
            }
            if y > 0 {
                out.push('/');
            }
        }
        out
    }

    /// Parse the output of [`Board::to_notation`]. Ranks may also be split over
    /// lines, and whitespace between cells is ignored. Stacks are added in reading
    /// order, which becomes the board order.
    pub fn from_notation(notation: &str) -> Result<Self> {
        let ranks: Vec<&str> = notation
            .split(|c| c == '/' || c == '\n')
            .map(str::trim)
            .filter(|rank| !rank.is_empty())
            .collect();
        ensure!(
            ranks.len() == BOARD_LEN,
            "Expected {} ranks, found {}",
            BOARD_LEN,
            ranks.len()
        );

        let mut board = Board::empty();
        for (i, rank) in ranks.iter().enumerate() {
            let y = (BOARD_LEN - 1 - i) as i32;
            let mut chars = rank.chars().filter(|c| !c.is_whitespace()).peekable();
            let mut x = 0;

            while let Some(c) = chars.next() {
                ensure!(x < BOARD_LEN as i32, "Rank {} is too long: {}", y, rank);
                if c != '.' {
                    let side = Side::from_symbol(c)
                        .ok_or_else(|| anyhow!("Invalid cell '{}' in rank {}", c, y))?;
                    let mut digits = String::new();
                    while let Some(d) = chars.next_if(|d| d.is_ascii_digit()) {
                        digits.push(d);
                    }
                    let count: u32 = digits
                        .parse()
                        .with_context(|| format!("Missing token count at {},{}", x, y))?;
                    if count == 0 {
                        bail!("Empty stack at {},{}", x, y);
                    }
                    board.add_tokens(Pos::new(x, y), side, count);
                }
                x += 1;
            }
            ensure!(x == BOARD_LEN as i32, "Rank {} is too short: {}", y, rank);
        }

        Ok(board)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_notation())
    }
}

impl FromStr for Board {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Board::from_notation(s)
    }
}
