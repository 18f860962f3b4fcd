//! Move-history timeline for time travel.
//!
//! Every board state reached during a game is kept, oldest first, with a
//! cursor selecting the entry on display. Moves branch history: playing
//! from an earlier entry discards everything after the cursor before the
//! new board is appended.

use super::position::Position;
use super::rules::{check_winner, is_full};
use super::types::{Board, GameStatus, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Errors that can occur when playing a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The square at the position is already occupied.
    #[display("Square {:?} is already occupied", _0)]
    SquareOccupied(Position),

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,
}

impl std::error::Error for MoveError {}

/// Append-only history of board states with a cursor for time travel.
///
/// Entry 0 is always the empty board. The cursor selects both the board
/// on display and whose turn it is: X moves on even indices, O on odd.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timeline {
    /// Board states, oldest first. Never empty.
    boards: Vec<Board>,
    /// Index of the entry on display.
    current: usize,
}

impl Timeline {
    /// Creates a timeline holding a single empty board.
    pub fn new() -> Self {
        Self {
            boards: vec![Board::new()],
            current: 0,
        }
    }

    /// Returns the board at the cursor.
    pub fn board(&self) -> &Board {
        &self.boards[self.current]
    }

    /// Returns all board states reached so far, oldest first.
    pub fn boards(&self) -> &[Board] {
        &self.boards
    }

    /// Returns the cursor into the history.
    pub fn current(&self) -> usize {
        self.current
    }

    /// Returns the number of history entries.
    pub fn len(&self) -> usize {
        self.boards.len()
    }

    /// Always false: the empty board exists from construction.
    pub fn is_empty(&self) -> bool {
        self.boards.is_empty()
    }

    /// Returns the player to move at the cursor.
    pub fn next_player(&self) -> Player {
        if self.current % 2 == 0 {
            Player::X
        } else {
            Player::O
        }
    }

    /// Returns the status of the board at the cursor.
    pub fn status(&self) -> GameStatus {
        let board = self.board();
        if let Some(winner) = check_winner(board) {
            GameStatus::Won(winner)
        } else if is_full(board) {
            GameStatus::Draw
        } else {
            GameStatus::InProgress
        }
    }

    /// Plays the next player's mark at `pos`.
    ///
    /// The board at the cursor is copied, never mutated: entries after
    /// the cursor are discarded, the new board is appended, and the
    /// cursor advances to it.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::GameOver`] if the board at the cursor already
    /// has a winner or is full, and [`MoveError::SquareOccupied`] if `pos`
    /// is taken.
    #[instrument(skip(self), fields(current = self.current))]
    pub fn play(&mut self, pos: Position) -> Result<(), MoveError> {
        if self.status() != GameStatus::InProgress {
            return Err(MoveError::GameOver);
        }
        if !self.board().is_empty(pos) {
            return Err(MoveError::SquareOccupied(pos));
        }

        let next = self.board().with_mark(pos, self.next_player());
        self.boards.truncate(self.current + 1);
        self.boards.push(next);
        self.current = self.boards.len() - 1;

        debug!(len = self.boards.len(), "Move recorded");
        Ok(())
    }

    /// Moves the cursor to history entry `index` without mutating history.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not an existing entry. Jump targets are only
    /// ever produced from the history itself.
    #[instrument(skip(self))]
    pub fn jump_to(&mut self, index: usize) {
        assert!(index < self.boards.len(), "history index out of range");
        debug!(index, "Jumping to history entry");
        self.current = index;
    }

    /// Resets the timeline to a single empty board.
    pub fn restart(&mut self) {
        debug!("Restarting game");
        *self = Self::new();
    }
}

impl Default for Timeline {
    fn default() -> Self {
        Self::new()
    }
}
