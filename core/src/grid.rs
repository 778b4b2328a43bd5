use core::ops::Index;
use serde::{Deserialize, Serialize};

use crate::*;

const SOLVED_CELLS: [Cell; CELL_COUNT] = [
    Cell::Tile(1),
    Cell::Tile(2),
    Cell::Tile(3),
    Cell::Tile(4),
    Cell::Tile(5),
    Cell::Tile(6),
    Cell::Tile(7),
    Cell::Tile(8),
    Cell::Blank,
];

/// Arrangement of the eight tiles and the blank, row-major.
///
/// A `Grid` can only be built from the solved layout or from a validated cell
/// array, and is only changed by swapping the blank with a neighbor, so it
/// always holds each of `1..=8` once plus a single blank.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "[Cell; CELL_COUNT]", into = "[Cell; CELL_COUNT]")]
pub struct Grid {
    cells: [Cell; CELL_COUNT],
}

impl Grid {
    pub const fn solved() -> Self {
        Self {
            cells: SOLVED_CELLS,
        }
    }

    pub fn from_cells(cells: [Cell; CELL_COUNT]) -> Result<Self> {
        let mut seen = [false; CELL_COUNT];
        for cell in cells {
            let slot = match cell {
                Cell::Tile(tile @ 1..=8) => usize::from(tile) - 1,
                Cell::Tile(_) => return Err(GameError::InvariantViolation),
                Cell::Blank => CELL_COUNT - 1,
            };
            if seen[slot] {
                return Err(GameError::InvariantViolation);
            }
            seen[slot] = true;
        }
        Ok(Self { cells })
    }

    /// Convenience constructor taking `0` as the blank.
    pub fn from_labels(labels: [Tile; CELL_COUNT]) -> Result<Self> {
        Self::from_cells(labels.map(|label| match label {
            0 => Cell::Blank,
            tile => Cell::Tile(tile),
        }))
    }

    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    pub fn cell_at(&self, position: Position) -> Option<Cell> {
        self.cells.get(usize::from(position)).copied()
    }

    /// True only for the canonical layout `1, 2, .., 8, blank`.
    pub fn is_solved(&self) -> bool {
        self.cells == SOLVED_CELLS
    }

    pub fn blank_position(&self) -> Result<Position> {
        let mut blanks = self
            .cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_blank())
            .map(|(index, _)| index as Position);

        match (blanks.next(), blanks.next()) {
            (Some(position), None) => Ok(position),
            _ => {
                log::error!("Grid lost its single blank: {:?}", self.cells);
                Err(GameError::InvariantViolation)
            }
        }
    }

    /// Positions the blank may move to.
    pub fn movable_positions(&self) -> Result<&'static [Position]> {
        Ok(neighbors(self.blank_position()?))
    }

    /// Swaps the blank with the tile at `target` if they are adjacent,
    /// returning the resulting grid.
    pub fn slide(&self, target: Position) -> Option<Self> {
        let blank = self.blank_position().ok()?;
        if !is_adjacent(blank, target) {
            return None;
        }
        let mut next = *self;
        next.cells.swap(usize::from(blank), usize::from(target));
        Some(next)
    }

    /// Cell labels with the blank written as `0`.
    pub fn labels(&self) -> [Tile; CELL_COUNT] {
        self.cells.map(|cell| cell.tile().unwrap_or(0))
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::solved()
    }
}

impl Index<Position> for Grid {
    type Output = Cell;

    fn index(&self, position: Position) -> &Self::Output {
        &self.cells[usize::from(position)]
    }
}

impl TryFrom<[Cell; CELL_COUNT]> for Grid {
    type Error = GameError;

    fn try_from(cells: [Cell; CELL_COUNT]) -> Result<Self> {
        Self::from_cells(cells)
    }
}

impl From<Grid> for [Cell; CELL_COUNT] {
    fn from(grid: Grid) -> Self {
        grid.cells
    }
}
