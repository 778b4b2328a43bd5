use alloc::vec::Vec;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::*;

/// Record of one accepted slide.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveLogEntry {
    pub grid: Grid,
    pub timestamp: DateTime<Utc>,
    pub move_number: u32,
}

/// Grid being played together with its move counter and append-only log.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayBoard {
    grid: Grid,
    move_count: u32,
    log: Vec<MoveLogEntry>,
}

impl PlayBoard {
    pub fn new(grid: Grid) -> Self {
        Self {
            grid,
            move_count: 0,
            log: Vec::new(),
        }
    }

    pub fn grid(&self) -> Grid {
        self.grid
    }

    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    pub fn log(&self) -> &[MoveLogEntry] {
        &self.log
    }

    pub fn last_move(&self) -> Option<&MoveLogEntry> {
        self.log.last()
    }

    /// Slides the tile at `target` into the blank.
    ///
    /// Targets that are the blank itself, off the board or not next to the
    /// blank leave the board untouched and report `Rejected`.
    pub fn attempt_move(&mut self, target: Position, now: DateTime<Utc>) -> MoveOutcome {
        let Some(grid) = self.grid.slide(target) else {
            log::trace!("rejected move at {}", target);
            return MoveOutcome::Rejected;
        };

        self.grid = grid;
        self.move_count += 1;
        self.log.push(MoveLogEntry {
            grid,
            timestamp: now,
            move_number: self.move_count,
        });

        if grid.is_solved() {
            MoveOutcome::Solved
        } else {
            MoveOutcome::Moved
        }
    }
}
