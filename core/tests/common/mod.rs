use std::collections::{HashMap, VecDeque};

use chrono::{DateTime, Utc};
use slidemint_core::*;

pub fn t0() -> DateTime<Utc> {
    DateTime::<Utc>::from_timestamp_millis(1_700_000_000_000).unwrap()
}

/// Shortest list of cells to click that slides `from` back to the solved grid.
pub fn solution(from: Grid) -> Option<Vec<Position>> {
    let goal = Grid::solved();
    let mut parents: HashMap<Grid, (Grid, Position)> = HashMap::new();
    let mut queue = VecDeque::from([from]);
    parents.insert(from, (from, GOAL_BLANK));

    while let Some(grid) = queue.pop_front() {
        if grid == goal {
            let mut clicks = Vec::new();
            let mut current = grid;
            while current != from {
                let (parent, click) = parents[&current];
                clicks.push(click);
                current = parent;
            }
            clicks.reverse();
            return Some(clicks);
        }

        for &target in grid.movable_positions().ok()? {
            let next = grid.slide(target)?;
            if !parents.contains_key(&next) {
                parents.insert(next, (grid, target));
                queue.push_back(next);
            }
        }
    }

    None
}
