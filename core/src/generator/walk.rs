use rand::rngs::SmallRng;

use super::*;

/// Random walk of legal slides starting from the solved grid.
///
/// The walk is driven one step at a time so a front end can show the board
/// scrambling; it ends after exactly `steps` slides.
#[derive(Clone, Debug)]
pub struct ShuffleWalk {
    rng: SmallRng,
    grid: Grid,
    taken: u32,
    steps: u32,
}

impl ShuffleWalk {
    pub fn new(seed: u64, steps: u32) -> Self {
        Self::with_rng(SmallRng::seed_from_u64(seed), steps)
    }

    pub fn with_rng(rng: SmallRng, steps: u32) -> Self {
        Self {
            rng,
            grid: Grid::solved(),
            taken: 0,
            steps,
        }
    }

    pub fn grid(&self) -> Grid {
        self.grid
    }

    pub fn steps_taken(&self) -> u32 {
        self.taken
    }

    pub fn steps_total(&self) -> u32 {
        self.steps
    }

    pub fn is_done(&self) -> bool {
        self.taken >= self.steps
    }

    /// Takes one step, returning the new grid, or `None` once the budget is spent.
    pub fn step(&mut self) -> Result<Option<Grid>> {
        if self.is_done() {
            return Ok(None);
        }
        self.grid = shuffle_step(&self.grid, &mut self.rng)?;
        self.taken += 1;
        log::trace!("shuffle step {}/{}: {:?}", self.taken, self.steps, self.grid);
        Ok(Some(self.grid))
    }

    /// Runs the remaining steps and returns the final grid.
    pub fn finish(&mut self) -> Result<Grid> {
        while self.step()?.is_some() {}
        Ok(self.grid)
    }
}

impl Iterator for ShuffleWalk {
    type Item = Grid;

    fn next(&mut self) -> Option<Self::Item> {
        self.step().ok().flatten()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.steps.saturating_sub(self.taken) as usize;
        (left, Some(left))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_steps_keeps_solved_grid() {
        let mut walk = ShuffleWalk::new(7, 0);
        assert!(walk.is_done());
        assert_eq!(walk.step(), Ok(None));
        assert_eq!(walk.finish(), Ok(Grid::solved()));
    }

    #[test]
    fn one_step_is_one_slide_from_solved() {
        let grid = ShuffleWalk::new(7, 1).finish().unwrap();
        let blank = grid.blank_position().unwrap();

        assert!(is_adjacent(blank, GOAL_BLANK));
        assert_eq!(grid.slide(GOAL_BLANK), Some(Grid::solved()));
    }

    #[test]
    fn walk_yields_exactly_the_budget() {
        let walk = ShuffleWalk::new(11, 25);
        assert_eq!(walk.size_hint(), (25, Some(25)));
        assert_eq!(walk.count(), 25);
    }

    #[test]
    fn consecutive_steps_are_single_slides() {
        let mut previous = Grid::solved();
        for grid in ShuffleWalk::new(3, 200) {
            let blank = grid.blank_position().unwrap();
            assert_eq!(grid.slide(previous.blank_position().unwrap()), Some(previous));
            assert!(is_adjacent(blank, previous.blank_position().unwrap()));
            previous = grid;
        }
    }

    #[test]
    fn same_seed_same_walk() {
        let a = ShuffleWalk::new(1234, 1000).finish().unwrap();
        let b = ShuffleWalk::new(1234, 1000).finish().unwrap();
        assert_eq!(a, b);
    }
}
