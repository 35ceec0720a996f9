//! Match configuration.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Parameters of a match: board dimensions and the winning run length.
///
/// Defaults follow the classic variant: a 6-row, 7-column board with four
/// discs in a row to win. Values are validated where they are consumed —
/// dimensions by [`GameBoard::new`](crate::GameBoard::new), the run
/// length by [`Game::new`](crate::Game::new).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct GameConfig {
    /// Board height in rows.
    #[serde(default = "default_rows")]
    rows: usize,
    /// Board width in columns.
    #[serde(default = "default_columns")]
    columns: usize,
    /// Contiguous same-color discs required to win.
    #[serde(default = "default_run_length")]
    run_length: usize,
}

fn default_rows() -> usize {
    6
}

fn default_columns() -> usize {
    7
}

fn default_run_length() -> usize {
    4
}

impl GameConfig {
    /// Creates a configuration for a `rows` by `columns` board with the
    /// default run length of four.
    pub fn new(rows: usize, columns: usize) -> Self {
        Self {
            rows,
            columns,
            run_length: default_run_length(),
        }
    }

    /// Sets the winning run length.
    pub fn with_run_length(mut self, run_length: usize) -> Self {
        self.run_length = run_length;
        self
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(default_rows(), default_columns())
    }
}
