//! Root snapshot invariant: history starts at the empty board.

use super::super::{Board, Game, MoveRecord};
use super::Invariant;

/// Invariant: record 0 is the empty board with nothing played.
pub struct RootSnapshotInvariant;

impl Invariant<Game> for RootSnapshotInvariant {
    fn holds(game: &Game) -> bool {
        game.timeline()
            .get(0)
            .is_some_and(|root| *root.board() == Board::new() && root.played().is_none())
    }

    fn description() -> &'static str {
        "History starts with the empty board and no played cell"
    }
}
