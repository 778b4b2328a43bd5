/// Index of a cell in the 3×3 board, row-major, `0..9`.
pub type Position = u8;

/// Label painted on a sliding tile, `1..=8`.
pub type Tile = u8;

/// Number of rows and columns.
pub const SIDE: Position = 3;

/// Number of cells on the board.
pub const CELL_COUNT: usize = (SIDE * SIDE) as usize;

/// Position the blank occupies in the solved layout.
pub const GOAL_BLANK: Position = SIDE * SIDE - 1;

/// Relative offsets the blank may travel from each position. `±1` moves
/// along a row and `±3` along a column; entries that would leave the board
/// or wrap to the next row are left out.
const NEIGHBOR_OFFSETS: [&[i8]; CELL_COUNT] = [
    &[1, 3],
    &[-1, 1, 3],
    &[-1, 3],
    &[-3, 1, 3],
    &[-3, -1, 1, 3],
    &[-3, -1, 3],
    &[-3, 1],
    &[-3, -1, 1],
    &[-3, -1],
];

/// Orthogonal neighbors of each position, same order as `NEIGHBOR_OFFSETS`.
const NEIGHBORS: [&[Position]; CELL_COUNT] = [
    &[1, 3],
    &[0, 2, 4],
    &[1, 5],
    &[0, 4, 6],
    &[1, 3, 5, 7],
    &[2, 4, 8],
    &[3, 7],
    &[4, 6, 8],
    &[5, 7],
];

/// Offsets that stay on the board from `position`, empty when out of range.
pub fn neighbor_offsets(position: Position) -> &'static [i8] {
    NEIGHBOR_OFFSETS
        .get(usize::from(position))
        .copied()
        .unwrap_or(&[])
}

/// Positions orthogonally adjacent to `position`, empty when out of range.
pub fn neighbors(position: Position) -> &'static [Position] {
    NEIGHBORS.get(usize::from(position)).copied().unwrap_or(&[])
}

pub fn is_adjacent(a: Position, b: Position) -> bool {
    neighbors(a).contains(&b)
}

/// `(column, row)` of a position.
pub const fn to_coords(position: Position) -> (Position, Position) {
    (position % SIDE, position / SIDE)
}
