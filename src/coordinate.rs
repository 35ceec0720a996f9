//! Axis-tagged board coordinates.
//!
//! A single bounded index type serves both axes; the zero-sized marker
//! parameter keeps rows and columns from being mixed up at compile time,
//! so only the range check remains a runtime contract.

use crate::contract::{ContractViolation, check_precondition};
use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};
use std::marker::PhantomData;

/// Names an axis for contract reports and display output.
pub trait Axis {
    /// Axis label, e.g. `"Row"`.
    const LABEL: &'static str;
}

/// Marker for the vertical axis. Row 0 is the bottom of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RowAxis;

/// Marker for the horizontal axis. Column 0 is the leftmost column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ColumnAxis;

impl Axis for RowAxis {
    const LABEL: &'static str = "Row";
}

impl Axis for ColumnAxis {
    const LABEL: &'static str = "Column";
}

/// A bounded one-dimensional board index.
///
/// Construction validates the index against an exclusive upper bound; the
/// bound itself is not stored, so equality and ordering compare raw
/// values and every board operation re-validates range against its own
/// dimensions. Negative indices are unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Coordinate<A> {
    index: usize,
    #[serde(skip)]
    _axis: PhantomData<A>,
}

/// Vertical index of a cell (0 = bottom row).
pub type Row = Coordinate<RowAxis>;

/// Horizontal index of a cell (0 = leftmost column).
pub type Column = Coordinate<ColumnAxis>;

impl<A: Axis> Coordinate<A> {
    /// Creates an index validated against an exclusive upper `bound`.
    ///
    /// # Errors
    ///
    /// Precondition violation when `index` is not below `bound`.
    pub fn new(index: usize, bound: usize) -> Result<Self, ContractViolation> {
        check_precondition(
            A::LABEL,
            index < bound,
            format!("index {index} is outside the valid range [0, {bound})"),
        )?;
        Ok(Self {
            index,
            _axis: PhantomData,
        })
    }

    /// The raw index value.
    pub fn index(&self) -> usize {
        self.index
    }
}

impl<A: Axis> std::fmt::Display for Coordinate<A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", A::LABEL, self.index)
    }
}

/// A cell address: the pair of a row and a column.
///
/// Immutable once constructed; equality and hashing are by value, which
/// makes it the addressing key for disc placement and occupancy checks.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Getters, new, derive_more::Display,
)]
#[display("({row}, {column})")]
pub struct Position {
    /// Vertical component.
    row: Row,
    /// Horizontal component.
    column: Column,
}
