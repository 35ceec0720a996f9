//! Win detection: directional scans through the last-placed disc.

use crate::board::GameBoard;
use crate::coordinate::Position;
use crate::types::Color;
use tracing::instrument;

/// The four scan directions as (row, column) steps. Each direction covers
/// both of its orientations, so four entries span all eight rays.
const DIRECTIONS: [(isize, isize); 4] = [
    (0, 1),  // horizontal
    (1, 0),  // vertical
    (1, 1),  // upward diagonal
    (1, -1), // downward diagonal
];

/// Checks whether a contiguous run of `run_length` same-color discs
/// passes through `position`.
///
/// Returns false when the cell at `position` is empty: an empty cell
/// belongs to no run.
#[instrument(skip(board))]
pub fn has_winning_run(board: &GameBoard, position: Position, run_length: usize) -> bool {
    let Some(color) = board
        .cell(position.row().index(), position.column().index())
        .map(|disc| *disc.color())
    else {
        return false;
    };

    DIRECTIONS
        .iter()
        .any(|&(row_step, column_step)| {
            run_through(board, position, color, row_step, column_step) >= run_length
        })
}

/// Length of the contiguous run of `color` through `position` along one
/// direction: the disc itself plus its extensions both ways.
fn run_through(
    board: &GameBoard,
    position: Position,
    color: Color,
    row_step: isize,
    column_step: isize,
) -> usize {
    1 + count_from(board, position, color, row_step, column_step)
        + count_from(board, position, color, -row_step, -column_step)
}

/// Counts same-color discs extending from `position` (exclusive) along a
/// ray, stopping at the first empty cell, other color, or board edge.
fn count_from(
    board: &GameBoard,
    position: Position,
    color: Color,
    row_step: isize,
    column_step: isize,
) -> usize {
    let mut count = 0;
    let mut row = position.row().index() as isize + row_step;
    let mut column = position.column().index() as isize + column_step;

    while row >= 0
        && (row as usize) < board.rows()
        && column >= 0
        && (column as usize) < board.columns()
    {
        match board.cell(row as usize, column as usize) {
            Some(disc) if *disc.color() == color => count += 1,
            _ => break,
        }
        row += row_step;
        column += column_step;
    }

    count
}
