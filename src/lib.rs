//! Terminal tic-tac-toe with move-history time travel.
//!
//! The game records every board state it passes through. The history
//! panel jumps the displayed board (and the turn) back to any earlier
//! move; playing from an earlier point discards the abandoned future
//! and grows a new one.
//!
//! # Architecture
//!
//! - **Game**: domain types ([`Board`], [`Player`], [`Position`]), pure
//!   win/draw rules, and the [`Timeline`] history controller
//! - **Tui**: ratatui rendering and the crossterm event loop
//!
//! # Example
//!
//! ```
//! use tictactoe_rewind::{GameStatus, Player, Position, Timeline};
//!
//! let mut timeline = Timeline::new();
//! timeline.play(Position::TopLeft)?;   // X
//! timeline.play(Position::Center)?;    // O
//! assert_eq!(timeline.next_player(), Player::X);
//!
//! // Rewind to the start and branch off in a new direction.
//! timeline.jump_to(0);
//! timeline.play(Position::BottomRight)?;
//! assert_eq!(timeline.len(), 2);
//! assert_eq!(timeline.status(), GameStatus::InProgress);
//! # Ok::<(), tictactoe_rewind::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod game;

// Terminal frontend
pub mod tui;

// Crate-level exports - domain types
pub use game::{Board, GameStatus, Mark, Player, Position, Square};

// Crate-level exports - rules
pub use game::{check_winner, is_draw, is_full};

// Crate-level exports - history controller
pub use game::{MoveError, Timeline};
