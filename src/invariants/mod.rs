//! First-class board invariants.
//!
//! Invariants are logical properties that must hold throughout a match.
//! Each one is an independently testable type; [`InvariantSet`] composes
//! them so the board can re-validate everything in one step and report
//! every violated property, not just the first.

use derive_more::Display;

mod fill_counts;
mod gravity;
mod position_consistent;

pub use fill_counts::FillCountInvariant;
pub use gravity::GravityInvariant;
pub use position_consistent::PositionConsistentInvariant;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks whether the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of a named invariant.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
#[display("{description}")]
pub struct InvariantViolation {
    description: String,
}

impl InvariantViolation {
    /// Creates a violation from an invariant's description.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }

    /// The violated invariant's description.
    pub fn description(&self) -> &str {
        &self.description
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples, so a state's invariants compose into a single
/// verification step that collects every violation.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns `Ok(())` when every invariant holds, or the list of
    /// violations otherwise.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }
        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if violations.is_empty() { Ok(()) } else { Err(violations) }
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }
        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }
        if !I3::holds(state) {
            violations.push(InvariantViolation::new(I3::description()));
        }

        if violations.is_empty() { Ok(()) } else { Err(violations) }
    }
}

/// All board invariants as a composable set.
pub type BoardInvariants = (FillCountInvariant, GravityInvariant, PositionConsistentInvariant);
