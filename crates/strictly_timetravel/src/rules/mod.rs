//! Game rules for tic-tac-toe.
//!
//! Pure functions over a single [`Board`]. Rules never look at history;
//! the engine evaluates whichever snapshot is currently selected.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{check_winner, winning_line, Line, LINES};

use super::{Board, Player};
use derive_more::Display;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Current status of a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum GameStatus {
    /// Game is ongoing.
    #[display("In progress")]
    InProgress,
    /// Game ended in a win.
    #[display("Winner: {}", _0)]
    Won(Player),
    /// Game ended in a draw.
    #[display("Draw")]
    Draw,
}

/// Result of evaluating a board: its status and, if won, the line that won it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Evaluation {
    status: GameStatus,
    winning_line: Option<Line>,
}

impl Evaluation {
    /// Evaluation of a board nobody has won or filled.
    pub const IN_PROGRESS: Self = Self {
        status: GameStatus::InProgress,
        winning_line: None,
    };

    /// Returns the board status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the winner, if any.
    pub fn winner(&self) -> Option<Player> {
        match self.status {
            GameStatus::Won(player) => Some(player),
            GameStatus::InProgress | GameStatus::Draw => None,
        }
    }

    /// Returns the completed line, if any.
    pub fn winning_line(&self) -> Option<Line> {
        self.winning_line
    }

    /// True once the board is won or drawn.
    pub fn is_decided(&self) -> bool {
        self.status != GameStatus::InProgress
    }
}

/// Evaluates a board: first completed line in [`LINES`] order, else draw if
/// full, else in progress.
#[instrument]
pub fn evaluate(board: &Board) -> Evaluation {
    if let Some((player, line)) = winning_line(board) {
        return Evaluation {
            status: GameStatus::Won(player),
            winning_line: Some(line),
        };
    }

    if is_draw(board) {
        return Evaluation {
            status: GameStatus::Draw,
            winning_line: None,
        };
    }

    Evaluation::IN_PROGRESS
}
