use rand::prelude::*;

use crate::*;
pub use walk::*;

mod walk;

/// Moves the blank of `grid` to one of its neighbors, chosen uniformly.
///
/// Each step is a legal slide, so any grid reached this way can be slid back
/// to where the walk started.
pub fn shuffle_step<R: Rng>(grid: &Grid, rng: &mut R) -> Result<Grid> {
    let candidates = grid.movable_positions()?;
    let target = candidates[rng.random_range(0..candidates.len())];
    grid.slide(target).ok_or(GameError::InvariantViolation)
}
