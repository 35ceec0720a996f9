//! A placed game piece.

use crate::coordinate::Position;
use crate::types::Color;
use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};

/// A disc resting in a board cell.
///
/// Created when a move commits into the board; the position is assigned
/// exactly once, at creation, and the disc never moves afterwards.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Getters, new, derive_more::Display,
)]
#[display("{color} disc at {position}")]
pub struct Disc {
    /// Color of the player that dropped the disc.
    color: Color,
    /// Cell the disc came to rest in.
    position: Position,
}
