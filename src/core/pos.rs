use std::{fmt::Display, str::FromStr};
use anyhow::{anyhow, ensure, Context, Result};
use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

use super::convert::{FromIndex, ToIndex};

pub const BOARD_LEN: usize = 8;
pub const NUM_CELLS: usize = BOARD_LEN * BOARD_LEN;

/// Largest Manhattan distance between two cells of the board
pub const MAX_DISTANCE: i32 = 2 * (BOARD_LEN as i32 - 1);

/// A cell of the board, `x` is the column and `y` the row
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(from = "(i32, i32)", into = "(i32, i32)")]
pub struct Pos {
    pub x: i32,
    pub y: i32,
}

impl Pos {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub const fn in_bounds(&self) -> bool {
        self.x >= 0 && self.x < BOARD_LEN as i32 &&
        self.y >= 0 && self.y < BOARD_LEN as i32
    }

    pub fn offset(&self, dx: i32, dy: i32) -> Pos {
        Pos::new(self.x + dx, self.y + dy)
    }

    /// Cell index, only meaningful for in-bounds positions
    pub fn index(&self) -> usize {
        (self.y as usize) * BOARD_LEN + (self.x as usize)
    }

    pub fn dist(&self, other: &Pos) -> i32 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }

    /// In-bounds cells of the surrounding 3x3 square, excluding `self`
    pub fn neighbours(&self) -> &'static [Pos] {
        &NEIGHBOURS[self.index()]
    }

    pub fn all() -> impl Iterator<Item = Pos> {
        (0..NUM_CELLS).map(|i| Pos::new((i % BOARD_LEN) as i32, (i / BOARD_LEN) as i32))
    }
}

impl FromIndex for Pos {
    fn from_index(idx: usize) -> Result<Self> {
        ensure!(idx < NUM_CELLS, "Invalid cell index: {}", idx);
        Ok(Pos::new((idx % BOARD_LEN) as i32, (idx / BOARD_LEN) as i32))
    }
}

impl ToIndex for Pos {
    fn to_index(&self) -> Result<usize> {
        ensure!(self.in_bounds(), "Position {} is off the board", self);
        Ok(self.index())
    }
}

impl From<(i32, i32)> for Pos {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

impl From<Pos> for (i32, i32) {
    fn from(pos: Pos) -> Self {
        (pos.x, pos.y)
    }
}

impl FromStr for Pos {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim().trim_start_matches('(').trim_end_matches(')');
        let (x, y) = trimmed.split_once(',')
            .with_context(|| format!("Invalid position: {}", s))?;

        Ok(Pos {
            x: x.trim().parse().map_err(|_| anyhow!("Invalid x coordinate in {}", s))?,
            y: y.trim().parse().map_err(|_| anyhow!("Invalid y coordinate in {}", s))?,
        })
    }
}

impl Display for Pos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

const SURROUNDING: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

lazy_static!(
    static ref NEIGHBOURS: Vec<Vec<Pos>> = Pos::all()
        .map(|pos| SURROUNDING
            .iter()
            .map(|&(dx, dy)| pos.offset(dx, dy))
            .filter(|n| n.in_bounds())
            .collect())
        .collect();
);
