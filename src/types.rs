//! Core value types: disc colors and player names.

use crate::contract::{ContractViolation, Contractual};
use serde::{Deserialize, Serialize};

/// Color identifying a player's discs.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
    derive_more::Display,
)]
pub enum Color {
    /// Red discs.
    Red,
    /// Yellow discs.
    Yellow,
    /// Green discs.
    Green,
    /// Blue discs.
    Blue,
    /// Black discs.
    Black,
}

impl Color {
    /// One-character code used when formatting a board as text.
    pub fn code(&self) -> char {
        match self {
            Color::Red => 'R',
            Color::Yellow => 'Y',
            Color::Green => 'G',
            Color::Blue => 'B',
            Color::Black => 'K',
        }
    }
}

/// A validated, non-empty label naming a player.
///
/// The payload is guaranteed non-empty and at most [`Name::MAX_LENGTH`]
/// bytes for the life of the value; deserialization routes through the
/// same validation as construction.
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
#[serde(try_from = "String", into = "String")]
#[display("{label}")]
pub struct Name {
    label: String,
}

impl Name {
    /// Largest accepted label length, in bytes.
    pub const MAX_LENGTH: usize = 64;

    /// Creates a validated name.
    ///
    /// # Errors
    ///
    /// Precondition violation when the label is empty or longer than
    /// [`Name::MAX_LENGTH`] bytes.
    pub fn new(label: impl Into<String>) -> Result<Self, ContractViolation> {
        let label = label.into();
        Self::check_precondition(!label.is_empty(), "name must not be empty")?;
        Self::check_precondition(
            label.len() <= Self::MAX_LENGTH,
            format!("name exceeds {} bytes", Self::MAX_LENGTH),
        )?;
        let name = Self { label };
        name.check_invariant()?;
        Ok(name)
    }

    /// The underlying string.
    pub fn as_str(&self) -> &str {
        &self.label
    }
}

impl Contractual for Name {
    fn context() -> &'static str {
        "Name"
    }

    fn invariant(&self) -> bool {
        !self.label.is_empty() && self.label.len() <= Self::MAX_LENGTH
    }
}

impl TryFrom<String> for Name {
    type Error = ContractViolation;

    fn try_from(label: String) -> Result<Self, Self::Error> {
        Self::new(label)
    }
}

impl From<Name> for String {
    fn from(name: Name) -> Self {
        name.label
    }
}

impl AsRef<str> for Name {
    fn as_ref(&self) -> &str {
        &self.label
    }
}
