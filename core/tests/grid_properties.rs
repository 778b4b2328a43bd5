use proptest::prelude::*;
use slidemint_core::*;

mod common;
use common::*;

/// Inversions among the tiles, blank ignored. Even for every grid a 3×3
/// board can reach from the solved layout.
fn inversions(grid: &Grid) -> usize {
    let tiles: Vec<Tile> = grid.cells().iter().filter_map(|cell| cell.tile()).collect();
    tiles
        .iter()
        .enumerate()
        .map(|(i, a)| tiles[i + 1..].iter().filter(|b| a > b).count())
        .sum()
}

fn sorted_labels(grid: &Grid) -> Vec<Tile> {
    let mut labels = grid.labels().to_vec();
    labels.sort_unstable();
    labels
}

#[test]
fn only_the_canonical_layout_is_solved() {
    let solved = Grid::solved();
    for a in 0..CELL_COUNT as Position {
        for &b in neighbors(a) {
            let mut cells = *solved.cells();
            cells.swap(usize::from(a), usize::from(b));
            let swapped = Grid::from_cells(cells).unwrap();
            assert!(!swapped.is_solved(), "swap {a}<->{b}");
        }
    }
    assert!(solved.is_solved());
}

#[test]
fn unreachable_parity_is_detected() {
    let swapped = Grid::from_labels([2, 1, 3, 4, 5, 6, 7, 8, 0]).unwrap();
    assert_eq!(inversions(&swapped) % 2, 1);
    assert_eq!(solution(swapped), None);
}

proptest! {
    #[test]
    fn shuffled_grids_keep_every_tile(seed: u64, steps in 0u32..2000) {
        let grid = ShuffleWalk::new(seed, steps).finish().unwrap();

        prop_assert_eq!(sorted_labels(&grid), (0..=8).collect::<Vec<Tile>>());
        prop_assert!(grid.blank_position().is_ok());
        prop_assert_eq!(inversions(&grid) % 2, 0);
    }

    #[test]
    fn clicks_only_ever_slide_the_blank(seed: u64, clicks in prop::collection::vec(0u8..12, 0..80)) {
        let start = ShuffleWalk::new(seed, 50).finish().unwrap();
        let mut board = PlayBoard::new(start);

        for target in clicks {
            let before = board.clone();
            let blank = before.grid().blank_position().unwrap();

            match board.attempt_move(target, t0()) {
                MoveOutcome::Rejected => {
                    prop_assert!(target == blank || !is_adjacent(blank, target));
                    prop_assert_eq!(&board, &before);
                }
                _ => {
                    prop_assert!(is_adjacent(blank, target));
                    prop_assert_eq!(board.grid().blank_position().unwrap(), target);
                    prop_assert_eq!(board.grid()[blank], before.grid()[target]);
                    prop_assert_eq!(board.move_count(), before.move_count() + 1);
                    prop_assert_eq!(board.log().len(), before.log().len() + 1);
                    prop_assert_eq!(board.last_move().unwrap().move_number, board.move_count());
                }
            }
            prop_assert_eq!(sorted_labels(&board.grid()), (0..=8).collect::<Vec<Tile>>());
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(12))]

    #[test]
    fn shuffled_grids_slide_back_to_solved(seed: u64, steps in 0u32..300) {
        let start = ShuffleWalk::new(seed, steps).finish().unwrap();
        let clicks = solution(start);
        prop_assert!(clicks.is_some());

        let mut board = PlayBoard::new(start);
        for target in clicks.unwrap() {
            prop_assert!(board.attempt_move(target, t0()).has_update());
        }
        prop_assert!(board.grid().is_solved());
    }
}
