//! Turn orchestration between two players over one board.

use crate::board::GameBoard;
use crate::config::GameConfig;
use crate::contract::{ContractViolation, Contractual};
use crate::coordinate::{Column, Position};
use crate::player::Player;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Current phase of a match.
///
/// A match starts `InProgress` and reaches `Won` or `Draw` at most once;
/// a terminal status is never unset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Moves are still being accepted.
    InProgress,
    /// The indexed player (0 or 1, in move order) completed a winning run.
    Won(usize),
    /// The board filled with no winner.
    Draw,
}

impl GameStatus {
    /// True once the match has reached `Won` or `Draw`.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

/// Outcome of one successful call to [`Game::play_turn`].
///
/// Carries the cell the disc landed in, for rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnResult {
    /// The disc settled and play passed to the other player.
    Continued(Position),
    /// The disc completed a winning run for the mover.
    Won(Position),
    /// The disc filled the last cell with no winner.
    Drawn(Position),
}

/// A match between two players.
///
/// Drives strict turn alternation over one [`GameBoard`]: each turn the
/// current player's disc is dropped, the board is checked for a win
/// through the landing cell and then for a draw, and either the match
/// terminates or the turn passes to the other player. There is no pass —
/// a move either places a disc or fails its precondition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    board: GameBoard,
    players: [Player; 2],
    current: usize,
    run_length: usize,
    status: GameStatus,
}

impl Game {
    /// Starts a match between `first` and `second`; `first` moves first.
    ///
    /// Board dimensions and the winning run length come from `config`
    /// (defaults: 6 by 7, four in a row). A run length no board line can
    /// reach is accepted — such a match can only end in a draw.
    ///
    /// # Errors
    ///
    /// Precondition violation when the players wear the same color, the
    /// run length is below two, or the board dimensions are out of range.
    #[instrument(skip(first, second), fields(first = %first.name(), second = %second.name()))]
    pub fn new(first: Player, second: Player, config: GameConfig) -> Result<Self, ContractViolation> {
        first.check_invariant()?;
        second.check_invariant()?;
        Self::check_precondition(
            first.color() != second.color(),
            "players must wear distinct colors",
        )?;
        Self::check_precondition(
            *config.run_length() >= 2,
            "a winning run needs at least two discs",
        )?;

        let board = GameBoard::new(*config.rows(), *config.columns())?;
        let game = Self {
            board,
            players: [first, second],
            current: 0,
            run_length: *config.run_length(),
            status: GameStatus::InProgress,
        };
        game.check_invariant()?;
        Ok(game)
    }

    /// Plays one turn: the current player's disc drops into `column`.
    ///
    /// Exactly one of three things happens: the match transitions to
    /// `Won`, transitions to `Draw`, or stays in progress with the turn
    /// passed to the other player. A failed call leaves the match
    /// untouched — the turn does not change and no disc is placed.
    ///
    /// # Errors
    ///
    /// Precondition violation when the match is already over, the column
    /// index is out of range, or the column is full.
    #[instrument(skip(self), fields(player = %self.players[self.current].name()))]
    pub fn play_turn(&mut self, column: Column) -> Result<TurnResult, ContractViolation> {
        self.check_invariant()?;
        Self::check_precondition(
            !self.status.is_terminal(),
            "no moves are accepted once the match is over",
        )?;

        let mover = self.current;
        let color = *self.players[mover].color();
        let position = self.board.drop_disc(column, color)?;

        let result = if self.board.check_win(position, self.run_length)? {
            self.status = GameStatus::Won(mover);
            debug!(winner = %self.players[mover].name(), "Match won");
            TurnResult::Won(position)
        } else if self.board.is_full() {
            self.status = GameStatus::Draw;
            debug!("Match drawn");
            TurnResult::Drawn(position)
        } else {
            self.current = (self.current + 1) % 2;
            TurnResult::Continued(position)
        };

        let advanced = self.status == GameStatus::InProgress && self.current != mover;
        let won = matches!(self.status, GameStatus::Won(index) if index == mover);
        let drawn = self.status == GameStatus::Draw;
        Self::check_postcondition(
            usize::from(advanced) + usize::from(won) + usize::from(drawn) == 1,
            "a turn must end in exactly one of: alternation, win, draw",
        )?;
        self.check_invariant()?;

        Ok(result)
    }

    /// Current phase of the match.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// The player whose turn it is.
    pub fn current_player(&self) -> &Player {
        &self.players[self.current]
    }

    /// Index (0 or 1, in move order) of the player whose turn it is.
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// The winning player, once the match is won.
    pub fn winner(&self) -> Option<&Player> {
        match self.status {
            GameStatus::Won(index) => Some(&self.players[index]),
            _ => None,
        }
    }

    /// The board, for rendering and queries.
    pub fn board(&self) -> &GameBoard {
        &self.board
    }

    /// Both players, in move order.
    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    /// Discs required in a row to win.
    pub fn run_length(&self) -> usize {
        self.run_length
    }

    /// Columns that can still take a disc.
    pub fn legal_columns(&self) -> Vec<Column> {
        self.board.legal_columns()
    }
}

impl Contractual for Game {
    fn context() -> &'static str {
        "Game"
    }

    fn invariant(&self) -> bool {
        let status_consistent = match self.status {
            GameStatus::InProgress => true,
            GameStatus::Won(index) => index < 2,
            GameStatus::Draw => self.board.is_full(),
        };

        self.current < 2
            && self.run_length >= 2
            && self.board.disc_count() <= self.board.capacity()
            && status_consistent
    }
}
