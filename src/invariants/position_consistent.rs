//! Position-consistency invariant: discs are where they claim to be.

use super::Invariant;
use crate::board::GameBoard;

/// Invariant: every disc's recorded position is the cell that holds it.
///
/// A cell holds at most one disc by construction, so agreement between
/// cells and recorded positions also rules out two discs sharing a
/// position.
pub struct PositionConsistentInvariant;

impl Invariant<GameBoard> for PositionConsistentInvariant {
    fn holds(board: &GameBoard) -> bool {
        (0..board.rows()).all(|row| {
            (0..board.columns()).all(|column| {
                board.cell(row, column).is_none_or(|disc| {
                    disc.position().row().index() == row
                        && disc.position().column().index() == column
                })
            })
        })
    }

    fn description() -> &'static str {
        "every disc's recorded position matches the cell holding it"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coordinate::{Column, Position, Row};
    use crate::disc::Disc;
    use crate::types::Color;

    #[test]
    fn test_holds_after_drops() {
        let mut board = GameBoard::new(6, 7).unwrap();
        for index in [0, 3, 3, 6] {
            board
                .drop_disc(Column::new(index, 7).unwrap(), Color::Red)
                .unwrap();
        }
        assert!(PositionConsistentInvariant::holds(&board));
    }

    #[test]
    fn test_mismatched_position_violates() {
        let mut board = GameBoard::new(6, 7).unwrap();
        board.drop_disc(Column::new(0, 7).unwrap(), Color::Red).unwrap();

        // Overwrite the cell with a disc that claims a different address.
        let elsewhere = Position::new(Row::new(5, 6).unwrap(), Column::new(6, 7).unwrap());
        board.grid[0] = Some(Disc::new(Color::Red, elsewhere));

        assert!(!PositionConsistentInvariant::holds(&board));
    }
}
