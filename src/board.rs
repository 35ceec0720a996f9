//! The disc grid state machine.

use crate::contract::{ContractViolation, Contractual, ViolationKind};
use crate::coordinate::{Column, Position, Row};
use crate::disc::Disc;
use crate::invariants::{BoardInvariants, InvariantSet};
use crate::rules;
use crate::types::Color;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, instrument};

/// Smallest accepted board axis (a one-cell axis is not playable).
pub const MIN_DIMENSION: usize = 2;

/// Largest accepted board axis.
pub const MAX_DIMENSION: usize = 64;

/// A fixed-size grid of cells filled from the bottom up.
///
/// Row 0 is the bottom row; a dropped disc settles at the lowest empty
/// row of its column, so the occupied cells of every column always form a
/// contiguous stack. The board owns each placed [`Disc`] and re-validates
/// its invariants around every mutating operation:
///
/// - per-column fill counters agree with the grid and stay within the
///   board height,
/// - no disc floats above an empty cell,
/// - every disc's recorded position is the cell that holds it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameBoard {
    rows: usize,
    columns: usize,
    /// Cells in row-major order, bottom row first.
    pub(crate) grid: Vec<Option<Disc>>,
    /// Discs currently stacked in each column.
    pub(crate) fill: Vec<usize>,
}

impl GameBoard {
    /// Creates an empty `rows` by `columns` board.
    ///
    /// # Errors
    ///
    /// Precondition violation when either dimension falls outside
    /// [`MIN_DIMENSION`]..=[`MAX_DIMENSION`].
    #[instrument]
    pub fn new(rows: usize, columns: usize) -> Result<Self, ContractViolation> {
        Self::check_precondition(
            rows >= MIN_DIMENSION,
            format!("board height {rows} is below the minimum of {MIN_DIMENSION}"),
        )?;
        Self::check_precondition(
            rows <= MAX_DIMENSION,
            format!("board height {rows} exceeds the maximum of {MAX_DIMENSION}"),
        )?;
        Self::check_precondition(
            columns >= MIN_DIMENSION,
            format!("board width {columns} is below the minimum of {MIN_DIMENSION}"),
        )?;
        Self::check_precondition(
            columns <= MAX_DIMENSION,
            format!("board width {columns} exceeds the maximum of {MAX_DIMENSION}"),
        )?;

        let board = Self {
            rows,
            columns,
            grid: vec![None; rows * columns],
            fill: vec![0; columns],
        };
        Self::check_assertion(
            board.grid.len() == board.capacity(),
            "grid storage must match the board capacity",
        )?;
        Self::check_postcondition(board.disc_count() == 0, "a new board must be empty")?;
        board.check_invariant()?;
        Ok(board)
    }

    /// Board height in rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Board width in columns.
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Total number of cells.
    pub fn capacity(&self) -> usize {
        self.rows * self.columns
    }

    /// Number of discs currently on the board.
    pub fn disc_count(&self) -> usize {
        self.fill.iter().sum()
    }

    /// Raw cell access by unchecked indices. Callers validate range.
    pub(crate) fn cell(&self, row: usize, column: usize) -> Option<&Disc> {
        self.grid[row * self.columns + column].as_ref()
    }

    /// The disc resting at `position`, if any.
    ///
    /// # Errors
    ///
    /// Precondition violation when `position` lies outside the grid.
    pub fn disc_at(&self, position: Position) -> Result<Option<&Disc>, ContractViolation> {
        Self::check_precondition(
            position.row().index() < self.rows,
            format!("{position} is outside the grid"),
        )?;
        Self::check_precondition(
            position.column().index() < self.columns,
            format!("{position} is outside the grid"),
        )?;
        Ok(self.cell(position.row().index(), position.column().index()))
    }

    /// True when `column` cannot take another disc.
    ///
    /// # Errors
    ///
    /// Precondition violation when the column index is out of range.
    pub fn is_column_full(&self, column: Column) -> Result<bool, ContractViolation> {
        Self::check_precondition(
            column.index() < self.columns,
            format!("{column} is outside the grid"),
        )?;
        Ok(self.fill[column.index()] == self.rows)
    }

    /// True when every cell is occupied.
    pub fn is_full(&self) -> bool {
        self.disc_count() == self.capacity()
    }

    /// Columns that can still take a disc, in left-to-right order.
    pub fn legal_columns(&self) -> Vec<Column> {
        (0..self.columns)
            .filter(|&index| self.fill[index] < self.rows)
            .filter_map(|index| Column::new(index, self.columns).ok())
            .collect()
    }

    /// Drops a disc of `color` into `column`, returning where it lands.
    ///
    /// The disc settles at the lowest empty row of the column. On failure
    /// nothing is mutated.
    ///
    /// # Errors
    ///
    /// Precondition violation when the column index is out of range or
    /// the column is already full.
    #[instrument(skip(self))]
    pub fn drop_disc(&mut self, column: Column, color: Color) -> Result<Position, ContractViolation> {
        self.check_invariant()?;
        Self::check_precondition(
            column.index() < self.columns,
            format!("{column} is outside the grid"),
        )?;
        Self::check_precondition(
            self.fill[column.index()] < self.rows,
            format!("{column} is full"),
        )?;

        let fill_before = self.fill[column.index()];
        let count_before = self.disc_count();

        let landing_row = fill_before;
        let position = Position::new(Row::new(landing_row, self.rows)?, column);
        self.grid[landing_row * self.columns + column.index()] = Some(Disc::new(color, position));
        self.fill[column.index()] += 1;

        debug!(%position, ?color, "Disc placed");

        Self::check_postcondition(
            self.cell(landing_row, column.index())
                .is_some_and(|disc| *disc.color() == color),
            "the landing cell must hold a disc of the dropped color",
        )?;
        Self::check_postcondition(
            self.fill[column.index()] == fill_before + 1,
            "the column fill count must grow by exactly one",
        )?;
        Self::check_postcondition(
            self.disc_count() == count_before + 1,
            "the disc count must grow by exactly one",
        )?;
        self.check_invariant()?;

        Ok(position)
    }

    /// True when a contiguous same-color run of `run_length` discs passes
    /// through `position` horizontally, vertically, or on either diagonal.
    ///
    /// A new win must include the newest disc, so callers evaluate this
    /// only from the landing position of the last drop rather than
    /// scanning the whole board.
    ///
    /// # Errors
    ///
    /// Precondition violation when `position` lies outside the grid or
    /// `run_length` is below two.
    #[instrument(skip(self))]
    pub fn check_win(&self, position: Position, run_length: usize) -> Result<bool, ContractViolation> {
        Self::check_precondition(
            position.row().index() < self.rows,
            format!("{position} is outside the grid"),
        )?;
        Self::check_precondition(
            position.column().index() < self.columns,
            format!("{position} is outside the grid"),
        )?;
        Self::check_precondition(run_length >= 2, "a winning run needs at least two discs")?;
        Ok(rules::has_winning_run(self, position, run_length))
    }
}

impl Contractual for GameBoard {
    fn context() -> &'static str {
        "GameBoard"
    }

    fn invariant(&self) -> bool {
        BoardInvariants::check_all(self).is_ok()
    }

    fn check_invariant(&self) -> Result<(), ContractViolation> {
        BoardInvariants::check_all(self).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|violation| violation.description())
                .collect::<Vec<_>>()
                .join("; ");
            ContractViolation::new(ViolationKind::Invariant, Self::context(), descriptions)
        })
    }
}

impl fmt::Display for GameBoard {
    /// Renders rows top-down, one color code per cell, `.` for empty.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..self.rows).rev() {
            for column in 0..self.columns {
                let code = self.cell(row, column).map_or('.', |disc| disc.color().code());
                write!(f, "{code}")?;
                if column + 1 < self.columns {
                    write!(f, " ")?;
                }
            }
            if row > 0 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
