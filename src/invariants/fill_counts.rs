//! Fill-counter invariant: counters agree with the grid.

use super::Invariant;
use crate::board::GameBoard;

/// Invariant: every column's fill counter matches its occupied cells.
///
/// Counters never exceed the board height, and the total disc count is
/// the sum of the per-column counters.
pub struct FillCountInvariant;

impl Invariant<GameBoard> for FillCountInvariant {
    fn holds(board: &GameBoard) -> bool {
        board.fill.len() == board.columns()
            && board.fill.iter().all(|&count| count <= board.rows())
            && (0..board.columns()).all(|column| {
                let occupied = (0..board.rows())
                    .filter(|&row| board.cell(row, column).is_some())
                    .count();
                occupied == board.fill[column]
            })
    }

    fn description() -> &'static str {
        "column fill counters match their occupied cells and stay within the board height"
    }
}
