//! Design-by-contract enforcement.
//!
//! Contracts formalize Hoare-style reasoning about each public operation:
//! preconditions must hold before the body runs, postconditions must hold
//! after it, and object invariants must hold at both ends. A failed check
//! is never swallowed: it is reported as a categorized
//! [`ContractViolation`] so callers can tell a misused API (precondition)
//! apart from an implementation defect (everything else) without parsing
//! message text.

use derive_more::Display;
use serde::{Deserialize, Serialize};
use tracing::warn;

// ─────────────────────────────────────────────────────────────
//  Violation taxonomy
// ─────────────────────────────────────────────────────────────

/// Category of a failed contract check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum ViolationKind {
    /// An internal consistency check failed outside a pre/post pair.
    #[display("assertion")]
    Assertion,
    /// The caller violated an operation's input contract.
    #[display("precondition")]
    Precondition,
    /// An operation failed to establish its promised result.
    #[display("postcondition")]
    Postcondition,
    /// An object's always-true property was broken.
    #[display("invariant")]
    Invariant,
}

impl ViolationKind {
    /// True for the one category a caller can recover from by retrying
    /// with legal input. The other three indicate bugs: once one fires,
    /// internal state can no longer be trusted.
    pub fn is_caller_error(&self) -> bool {
        matches!(self, ViolationKind::Precondition)
    }
}

/// A runtime-detected breach of a precondition, postcondition, invariant,
/// or internal assertion.
///
/// Carries the violated category, a static `context` tag naming the object
/// or operation that raised the check, and a human-readable message.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
#[display("{kind} violation in {context}: {message}")]
pub struct ContractViolation {
    kind: ViolationKind,
    context: &'static str,
    message: String,
}

impl ContractViolation {
    /// Creates a violation of the given category.
    pub fn new(kind: ViolationKind, context: &'static str, message: impl Into<String>) -> Self {
        Self {
            kind,
            context,
            message: message.into(),
        }
    }

    /// The violated category.
    pub fn kind(&self) -> ViolationKind {
        self.kind
    }

    /// Tag naming the object or operation that raised the check.
    pub fn context(&self) -> &'static str {
        self.context
    }

    /// Human-readable description of the failed check.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// True when the violation indicates caller misuse rather than an
    /// internal defect.
    pub fn is_caller_error(&self) -> bool {
        self.kind.is_caller_error()
    }
}

impl std::error::Error for ContractViolation {}

/// Builds a violation and logs it before it propagates.
fn violation(kind: ViolationKind, context: &'static str, message: impl Into<String>) -> ContractViolation {
    let violation = ContractViolation::new(kind, context, message);
    warn!(%violation, "Contract check failed");
    violation
}

fn check(
    kind: ViolationKind,
    context: &'static str,
    condition: bool,
    message: impl Into<String>,
) -> Result<(), ContractViolation> {
    if condition {
        Ok(())
    } else {
        Err(violation(kind, context, message))
    }
}

// ─────────────────────────────────────────────────────────────
//  Check functions
// ─────────────────────────────────────────────────────────────

/// Fails with a precondition violation when `condition` is false.
///
/// Called at the start of a public operation, before any state is touched.
pub fn check_precondition(
    context: &'static str,
    condition: bool,
    message: impl Into<String>,
) -> Result<(), ContractViolation> {
    check(ViolationKind::Precondition, context, condition, message)
}

/// Fails with a postcondition violation when `condition` is false.
///
/// Called at the end of a mutating operation to confirm it achieved its
/// contract.
pub fn check_postcondition(
    context: &'static str,
    condition: bool,
    message: impl Into<String>,
) -> Result<(), ContractViolation> {
    check(ViolationKind::Postcondition, context, condition, message)
}

/// Fails with an assertion violation when `condition` is false.
///
/// For internal consistency checkpoints not tied to a single operation's
/// pre/post contract.
pub fn check_assertion(
    context: &'static str,
    condition: bool,
    message: impl Into<String>,
) -> Result<(), ContractViolation> {
    check(ViolationKind::Assertion, context, condition, message)
}

// ─────────────────────────────────────────────────────────────
//  Contractual capability
// ─────────────────────────────────────────────────────────────

/// Capability adopted by domain objects that enforce contracts.
///
/// Implementors supply a context tag and a predicate computing whether
/// their invariant currently holds; the provided methods raise
/// categorized [`ContractViolation`]s under that tag. Public operations
/// re-validate the invariant at entry and exit.
pub trait Contractual {
    /// Tag identifying the adopting object in violation reports.
    fn context() -> &'static str;

    /// Computes whether the object's invariant currently holds.
    fn invariant(&self) -> bool;

    /// Fails with an invariant violation when the invariant predicate is
    /// false.
    fn check_invariant(&self) -> Result<(), ContractViolation> {
        if self.invariant() {
            Ok(())
        } else {
            Err(violation(
                ViolationKind::Invariant,
                Self::context(),
                "object invariant does not hold",
            ))
        }
    }

    /// Fails with a precondition violation under this object's tag.
    fn check_precondition(condition: bool, message: impl Into<String>) -> Result<(), ContractViolation> {
        check_precondition(Self::context(), condition, message)
    }

    /// Fails with a postcondition violation under this object's tag.
    fn check_postcondition(condition: bool, message: impl Into<String>) -> Result<(), ContractViolation> {
        check_postcondition(Self::context(), condition, message)
    }

    /// Fails with an assertion violation under this object's tag.
    fn check_assertion(condition: bool, message: impl Into<String>) -> Result<(), ContractViolation> {
        check_assertion(Self::context(), condition, message)
    }
}
