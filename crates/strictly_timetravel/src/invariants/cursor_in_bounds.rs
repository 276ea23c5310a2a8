//! Cursor invariant: the current position points into history.

use super::super::Game;
use super::Invariant;

/// Invariant: `0 <= position < len(history)`.
pub struct CursorInBoundsInvariant;

impl Invariant<Game> for CursorInBoundsInvariant {
    fn holds(game: &Game) -> bool {
        game.position() < game.timeline().len()
    }

    fn description() -> &'static str {
        "Current position lies within history"
    }
}
