//! A participant in a match.

use crate::contract::Contractual;
use crate::types::{Color, Name};
use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};

/// A player: a validated name wearing a disc color.
///
/// Immutable for the life of one game; the name's validity is carried by
/// the [`Name`] type itself.
#[derive(
    Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, new, derive_more::Display,
)]
#[display("{name}")]
pub struct Player {
    /// Display name.
    name: Name,
    /// Color of the discs this player drops.
    color: Color,
}

impl Contractual for Player {
    fn context() -> &'static str {
        "Player"
    }

    fn invariant(&self) -> bool {
        self.name.invariant()
    }
}
