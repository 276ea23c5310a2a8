//! First-class action types for tic-tac-toe.
//!
//! Moves are domain events, not side effects. Playing a move either
//! produces a [`Move`] or explains why the click was ignored.

use super::{GameStatus, Player, Position};
use derive_more::Display;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A move in tic-tac-toe: a player placing their mark at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The position where the player places their mark.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    #[instrument]
    pub fn new(player: Player, position: Position) -> Self {
        Self { player, position }
    }

    /// Returns the player making this move.
    pub fn player(&self) -> Player {
        self.player
    }

    /// Returns the position of this move.
    pub fn position(&self) -> Position {
        self.position
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.position.label())
    }
}

/// Why a click on the board was ignored.
///
/// These are not errors. The engine leaves its state untouched and the
/// adapter may show the reason or drop it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum MoveRejection {
    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),

    /// The displayed board is already won or drawn.
    #[display("Game is already over ({})", _0)]
    GameOver(GameStatus),
}

/// Result of [`Game::play_move`](crate::Game::play_move).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayOutcome {
    /// The move was applied and is now the newest snapshot.
    Played(Move),
    /// The move was ignored; nothing changed.
    Ignored(MoveRejection),
}

impl PlayOutcome {
    /// True if the move was applied.
    pub fn is_played(&self) -> bool {
        matches!(self, PlayOutcome::Played(_))
    }

    /// Returns the rejection reason for an ignored move.
    pub fn rejection(&self) -> Option<MoveRejection> {
        match self {
            PlayOutcome::Played(_) => None,
            PlayOutcome::Ignored(rejection) => Some(*rejection),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejection_messages() {
        assert_eq!(
            MoveRejection::SquareOccupied(Position::Center).to_string(),
            "Square Center is already occupied"
        );
        assert_eq!(
            MoveRejection::GameOver(GameStatus::Won(Player::O)).to_string(),
            "Game is already over (Winner: O)"
        );
    }

    #[test]
    fn test_outcome_accessors() {
        let played = PlayOutcome::Played(Move::new(Player::X, Position::TopLeft));
        assert!(played.is_played());
        assert_eq!(played.rejection(), None);

        let ignored = PlayOutcome::Ignored(MoveRejection::GameOver(GameStatus::Draw));
        assert!(!ignored.is_played());
        assert_eq!(
            ignored.rejection(),
            Some(MoveRejection::GameOver(GameStatus::Draw))
        );
    }

    #[test]
    fn test_move_display() {
        let mov = Move::new(Player::O, Position::BottomCenter);
        assert_eq!(mov.to_string(), "O -> Bottom-center");
    }
}
