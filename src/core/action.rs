//! Moves and their external representation

use super::pos::Pos;

use anyhow::{bail, ensure, Context, Result};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt::Display;
use std::str::FromStr;

pub const EXPLODE_TAG: &str = "EXPLODE";
pub const RELOCATE_TAG: &str = "MOVE";

/// A single turn: blow up a stack, or carry part of it somewhere else.
///
/// Text and JSON forms accept the same tags, case-insensitively, with `BOOM`
/// standing in for `EXPLODE`. Both are always written with the canonical tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    Explode {
        at: Pos,
    },
    Relocate {
        count: u32,
        from: Pos,
        to: Pos,
    },
}

impl Move {
    pub fn explode(at: Pos) -> Self {
        Move::Explode { at }
    }

    pub fn relocate(count: u32, from: Pos, to: Pos) -> Self {
        Move::Relocate { count, from, to }
    }

    /// The stack the move is played with
    pub fn source(&self) -> Pos {
        match self {
            Move::Explode { at } => *at,
            Move::Relocate { from, .. } => *from,
        }
    }

    pub fn is_explode(&self) -> bool {
        matches!(self, Move::Explode { .. })
    }

    pub fn from_args(action_name: &str, args: &[&str]) -> Result<Self> {
        match MoveKind::from_tag(action_name)? {
            MoveKind::Explode => {
                ensure!(args.len() == 1, "explode requires 1 argument");
                let at: Pos = args[0].parse()?;
                Ok(Move::Explode { at })
            }
            MoveKind::Relocate => {
                ensure!(args.len() == 3, "move requires 3 arguments");
                let count: u32 = args[0].parse().context("Invalid token count")?;
                let from: Pos = args[1].parse()?;
                let to: Pos = args[2].parse()?;
                Ok(Move::Relocate { count, from, to })
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MoveKind {
    Explode,
    Relocate,
}

impl MoveKind {
    fn from_tag(tag: &str) -> Result<Self> {
        match tag.to_ascii_uppercase().as_str() {
            // BOOM is what older controllers call it
            EXPLODE_TAG | "BOOM" => Ok(MoveKind::Explode),
            RELOCATE_TAG => Ok(MoveKind::Relocate),
            _ => bail!("Unknown move: {}", tag),
        }
    }
}

impl Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Move::Explode { at } => write!(f, "{} {}", EXPLODE_TAG, at),
            Move::Relocate { count, from, to } => {
                write!(f, "{} {} {} {}", RELOCATE_TAG, count, from, to)
            }
        }
    }
}

impl FromStr for Move {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split_whitespace().collect();
        ensure!(!parts.is_empty(), "Empty move");
        Move::from_args(parts[0], &parts[1..])
    }
}

impl Serialize for Move {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Move::Explode { at } => (EXPLODE_TAG, at).serialize(serializer),
            Move::Relocate { count, from, to } => {
                (RELOCATE_TAG, count, from, to).serialize(serializer)
            }
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum MoveRepr {
    Explode(String, Pos),
    Relocate(String, u32, Pos, Pos),
}

impl<'de> Deserialize<'de> for Move {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let repr = MoveRepr::deserialize(deserializer)?;
        let tag = match &repr {
            MoveRepr::Explode(tag, _) | MoveRepr::Relocate(tag, ..) => tag,
        };
        let kind = MoveKind::from_tag(tag).map_err(de::Error::custom)?;

        match (kind, repr) {
            (MoveKind::Explode, MoveRepr::Explode(_, at)) => Ok(Move::Explode { at }),
            (MoveKind::Relocate, MoveRepr::Relocate(_, count, from, to)) => {
                Ok(Move::Relocate { count, from, to })
            }
            (kind, _) => Err(de::Error::custom(format!(
                "wrong number of fields for {:?}",
                kind
            ))),
        }
    }
}
