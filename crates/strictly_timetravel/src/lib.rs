//! Strictly Timetravel - tic-tac-toe with move history and time travel
//!
//! The engine keeps every board snapshot of a game. Players can jump back
//! to any earlier snapshot and play on from there, which discards the
//! snapshots that followed it.
//!
//! # Architecture
//!
//! - **Rules**: pure evaluation of a single board (win, draw, in progress)
//! - **Timeline**: the ordered snapshots and the cells played to reach them
//! - **Game**: the state container exposing `play_move`, `jump_to`, `toggle_sort`
//! - **View**: the read-only render model handed to presentation adapters
//!
//! # Example
//!
//! ```
//! use strictly_timetravel::{Game, GameStatus, Player, Position};
//!
//! let mut game = Game::new();
//! for position in [Position::Center, Position::TopLeft, Position::BottomRight] {
//!     game.play_move(position);
//! }
//! game.jump_to(1).unwrap();
//! game.play_move(Position::TopRight);
//!
//! assert_eq!(game.timeline().len(), 3);
//! assert_eq!(game.evaluation().status(), GameStatus::InProgress);
//! assert_eq!(game.to_move(), Some(Player::X));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod contracts;
mod error;
mod game;
mod position;
mod rules;
mod timeline;
mod types;
mod view;

pub mod invariants;

pub use action::{Move, MoveRejection, PlayOutcome};
pub use contracts::{Contract, GameUndecided, LegalMove, PlayContract, SquareIsEmpty};
pub use error::{ContractViolation, JumpError, ReplayError};
pub use game::Game;
pub use position::Position;
pub use rules::{
    check_winner, evaluate, is_draw, is_full, winning_line, Evaluation, GameStatus, Line, LINES,
};
pub use timeline::{MoveRecord, Timeline};
pub use types::{Board, Player, Square};
pub use view::{GameView, MoveEntry, SortOrder};
