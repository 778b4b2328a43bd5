use alloc::format;
use alloc::string::String;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::*;

/// Everything a front end needs to draw one frame.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PuzzleView {
    pub session: SessionId,
    pub state: GameState,
    pub grid: Grid,
    pub elapsed: String,
    pub move_count: u32,
    pub mint: MintOutcome,
}

/// Time from `started_at` to the last logged move as `m:ss`.
///
/// With no logged moves the clock never ran and reads `0:00`.
pub fn format_elapsed(started_at: Option<DateTime<Utc>>, log: &[MoveLogEntry]) -> String {
    let (Some(started_at), Some(last)) = (started_at, log.last()) else {
        return String::from("0:00");
    };
    let total_secs = (last.timestamp - started_at).num_seconds().max(0);
    format!("{}:{:02}", total_secs / 60, total_secs % 60)
}

/// Which week's artwork the tiles are cut from.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageSet {
    pub week: u32,
}

impl ImageSet {
    pub const fn new(week: u32) -> Self {
        Self { week }
    }

    /// Asset path for the cell at `position`.
    ///
    /// The blank has no picture while the board is scrambled. Once the board
    /// is in the solved layout it shows the missing piece so the whole image
    /// is visible.
    pub fn tile_image(&self, grid: &Grid, position: Position) -> Option<String> {
        let piece = match grid.cell_at(position)? {
            Cell::Tile(tile) => u32::from(tile),
            Cell::Blank if grid.is_solved() => u32::from(position) + 1,
            Cell::Blank => return None,
        };
        Some(format!("/puzzle/week-{}/{}.png", self.week, piece))
    }
}

impl Default for ImageSet {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;
    use chrono::TimeDelta;

    fn entry_at(timestamp: DateTime<Utc>) -> MoveLogEntry {
        MoveLogEntry {
            grid: Grid::solved(),
            timestamp,
            move_number: 1,
        }
    }

    #[test]
    fn elapsed_is_minutes_and_padded_seconds() {
        let start = DateTime::<Utc>::from_timestamp_millis(1_700_000_000_000).unwrap();
        let log = [entry_at(start + TimeDelta::milliseconds(125_000))];

        assert_eq!(format_elapsed(Some(start), &log), "2:05");
    }

    #[test]
    fn elapsed_uses_last_entry_and_drops_partial_seconds() {
        let start = DateTime::<Utc>::from_timestamp_millis(0).unwrap();
        let log = [
            entry_at(start + TimeDelta::milliseconds(1_000)),
            entry_at(start + TimeDelta::milliseconds(9_999)),
        ];

        assert_eq!(format_elapsed(Some(start), &log), "0:09");
    }

    #[test]
    fn elapsed_without_moves_is_zero() {
        let start = DateTime::<Utc>::from_timestamp_millis(0).unwrap();
        assert_eq!(format_elapsed(Some(start), &[]), "0:00");
        assert_eq!(format_elapsed(None, &[]), "0:00");
    }

    #[test]
    fn solved_grid_shows_missing_piece() {
        let images = ImageSet::new(3);
        let grid = Grid::solved();

        assert_eq!(
            images.tile_image(&grid, 0).as_deref(),
            Some("/puzzle/week-3/1.png")
        );
        assert_eq!(
            images.tile_image(&grid, GOAL_BLANK).as_deref(),
            Some("/puzzle/week-3/9.png")
        );
        assert_eq!(images.tile_image(&grid, 9), None);
    }

    #[test]
    fn scrambled_grid_leaves_blank_empty() {
        let images = ImageSet::default();
        let grid = Grid::solved().slide(7).unwrap();

        let paths: Vec<_> = (0..CELL_COUNT as Position)
            .map(|position| images.tile_image(&grid, position))
            .collect();

        assert_eq!(paths[7], None);
        assert_eq!(paths[8].as_deref(), Some("/puzzle/week-1/8.png"));
    }
}
