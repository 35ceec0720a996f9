//! Board rules: win detection.
//!
//! Draw detection needs no machinery of its own — a board at capacity
//! with no winner is a draw, and [`GameBoard::is_full`](crate::GameBoard::is_full)
//! answers the capacity question directly.

mod win;

pub use win::has_winning_run;
