//! Gravity invariant: no floating discs.

use super::Invariant;
use crate::board::GameBoard;

/// Invariant: discs in a column occupy a contiguous stack from row 0.
///
/// Within each column the occupied cells are exactly the rows below the
/// column's fill count; a disc can never rest above an empty cell.
pub struct GravityInvariant;

impl Invariant<GameBoard> for GravityInvariant {
    fn holds(board: &GameBoard) -> bool {
        (0..board.columns()).all(|column| {
            let filled = board.fill[column];
            (0..board.rows()).all(|row| board.cell(row, column).is_some() == (row < filled))
        })
    }

    fn description() -> &'static str {
        "discs in a column occupy a contiguous stack starting at the bottom row"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coordinate::{Column, Position, Row};
    use crate::disc::Disc;
    use crate::types::Color;

    #[test]
    fn test_empty_board_holds() {
        let board = GameBoard::new(6, 7).unwrap();
        assert!(GravityInvariant::holds(&board));
    }

    #[test]
    fn test_holds_after_stacking() {
        let mut board = GameBoard::new(6, 7).unwrap();
        let target = Column::new(3, 7).unwrap();
        for color in [Color::Red, Color::Yellow, Color::Red] {
            board.drop_disc(target, color).unwrap();
        }
        assert!(GravityInvariant::holds(&board));
    }

    #[test]
    fn test_floating_disc_violates() {
        let mut board = GameBoard::new(6, 7).unwrap();
        board.drop_disc(Column::new(0, 7).unwrap(), Color::Red).unwrap();

        // A disc two rows above the stack, placed behind the board's back.
        let position = Position::new(Row::new(2, 6).unwrap(), Column::new(0, 7).unwrap());
        board.grid[2 * board.columns()] = Some(Disc::new(Color::Red, position));
        board.fill[0] = 2;

        assert!(!GravityInvariant::holds(&board));
    }
}
