//! Read-only render model handed to presentation adapters.
//!
//! A [`GameView`] is rebuilt after every operation from the engine's cached
//! evaluation. Adapters render it and send events back; they never touch the
//! timeline directly.

use super::{Board, Evaluation, Game, GameStatus, Player, Position};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Display order of the move list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Game start first.
    #[default]
    Ascending,
    /// Newest move first.
    Descending,
}

impl SortOrder {
    /// Returns the opposite order.
    pub fn toggle(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    /// True for newest-first.
    pub fn is_descending(self) -> bool {
        self == Self::Descending
    }

    /// Label for a control that switches to the other order.
    pub fn toggle_label(self) -> &'static str {
        match self {
            Self::Ascending => "Sort descending",
            Self::Descending => "Sort ascending",
        }
    }
}

/// One line of the move list.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct MoveEntry {
    /// History index this entry jumps to.
    move_number: usize,
    /// Cell played to reach this snapshot.
    played: Option<Position>,
    /// Whether this snapshot is the one displayed.
    is_current: bool,
    /// Text for the jump control.
    description: String,
    /// Text shown in the move list.
    #[getter(skip)]
    label: String,
}

impl MoveEntry {
    fn new(move_number: usize, played: Option<Position>, is_current: bool) -> Self {
        let description = match played {
            Some(position) if move_number > 0 => {
                let (row, col) = position.coordinates();
                format!("Go to move #{move_number}, ({row}, {col})")
            }
            _ => "Go to game start".to_string(),
        };
        let label = if is_current {
            format!("You are at move #{move_number}")
        } else {
            description.clone()
        };
        Self {
            move_number,
            played,
            is_current,
            description,
            label,
        }
    }

    /// Text to show: a marker for the current snapshot, otherwise the jump description.
    pub fn label(&self) -> &str {
        &self.label
    }
}

/// Everything an adapter needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameView {
    /// Board at the current position.
    board: Board,
    /// Status and winning line of that board.
    evaluation: Evaluation,
    /// Winner of that board, if any.
    winner: Option<Player>,
    /// Player to move, `None` once the board is decided.
    mover: Option<Player>,
    /// Current history index.
    position: usize,
    /// Move list in display order.
    moves: Vec<MoveEntry>,
    /// Display order of `moves`.
    sort: SortOrder,
}

impl GameView {
    /// Builds the view of `game`'s current position.
    pub fn from_game(game: &Game) -> Self {
        let position = game.position();
        let mut moves: Vec<MoveEntry> = game
            .timeline()
            .records()
            .iter()
            .enumerate()
            .map(|(number, record)| MoveEntry::new(number, record.played(), number == position))
            .collect();
        if game.sort_order().is_descending() {
            moves.reverse();
        }

        Self {
            board: *game.current_board(),
            evaluation: *game.evaluation(),
            winner: game.evaluation().winner(),
            mover: game.to_move(),
            position,
            moves,
            sort: game.sort_order(),
        }
    }

    /// Status text: winner, draw, or who moves next.
    pub fn status_line(&self) -> String {
        match (self.evaluation.status(), self.mover) {
            (GameStatus::InProgress, Some(player)) => format!("Next player: {player}"),
            (status, _) => status.to_string(),
        }
    }

    /// Move-list labels in display order.
    pub fn move_labels(&self) -> Vec<String> {
        self.moves
            .iter()
            .map(|entry| entry.label().to_string())
            .collect()
    }

    /// True if `position` is part of the winning line.
    pub fn is_winning_cell(&self, position: Position) -> bool {
        self.evaluation
            .winning_line()
            .is_some_and(|line| line.contains(&position))
    }
}
