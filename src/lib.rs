//! Pure Connect Four game logic with design-by-contract enforcement.
//!
//! # Architecture
//!
//! - **Contracts**: every public operation is wrapped in runtime checks —
//!   preconditions at entry, postconditions at exit, and object
//!   invariants at both ends. A failed check surfaces as a categorized
//!   [`ContractViolation`], so callers can tell API misuse apart from an
//!   internal defect.
//! - **Board**: [`GameBoard`] owns the grid; discs drop to the lowest
//!   empty row of a column and never move again.
//! - **Game**: [`Game`] alternates two players over one board and
//!   detects win and draw conditions after every move.
//!
//! The crate is synchronous and single-threaded: one call to
//! [`Game::play_turn`] runs to completion before control returns, so a
//! match is a sequence of fully validated state transitions. Sharing a
//! match across threads must be serialized by the caller.
//!
//! # Example
//!
//! ```
//! use strictly_connect_four::{Color, Game, GameConfig, Name, Player};
//!
//! # fn main() -> Result<(), strictly_connect_four::ContractViolation> {
//! let red = Player::new(Name::new("Alice")?, Color::Red);
//! let yellow = Player::new(Name::new("Bob")?, Color::Yellow);
//!
//! let mut game = Game::new(red, yellow, GameConfig::default())?;
//! let column = game.legal_columns()[0];
//! game.play_turn(column)?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod board;
mod config;
mod contract;
mod coordinate;
mod disc;
mod game;
mod invariants;
mod player;
mod rules;
mod types;

// Crate-level exports - Contract enforcement
pub use contract::{
    ContractViolation, Contractual, ViolationKind, check_assertion, check_postcondition,
    check_precondition,
};

// Crate-level exports - Coordinates and addressing
pub use coordinate::{Axis, Column, ColumnAxis, Coordinate, Position, Row, RowAxis};

// Crate-level exports - Value types
pub use types::{Color, Name};

// Crate-level exports - Pieces and players
pub use disc::Disc;
pub use player::Player;

// Crate-level exports - Board
pub use board::{GameBoard, MAX_DIMENSION, MIN_DIMENSION};

// Crate-level exports - Invariants
pub use invariants::{
    BoardInvariants, FillCountInvariant, GravityInvariant, Invariant, InvariantSet,
    InvariantViolation, PositionConsistentInvariant,
};

// Crate-level exports - Game orchestration
pub use config::GameConfig;
pub use game::{Game, GameStatus, TurnResult};
