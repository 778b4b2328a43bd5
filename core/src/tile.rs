use serde::{Deserialize, Serialize};

use crate::*;

/// Content of one board cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Cell {
    Tile(Tile),
    Blank,
}

impl Cell {
    pub const fn is_blank(self) -> bool {
        matches!(self, Self::Blank)
    }

    pub const fn tile(self) -> Option<Tile> {
        match self {
            Self::Tile(tile) => Some(tile),
            Self::Blank => None,
        }
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::Blank
    }
}

impl From<Option<Tile>> for Cell {
    fn from(value: Option<Tile>) -> Self {
        value.map_or(Self::Blank, Self::Tile)
    }
}
