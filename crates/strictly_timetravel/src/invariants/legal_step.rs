//! Legal step invariant: each snapshot follows from the previous by one move.

use super::super::{evaluate, Game, Player, Square};
use super::Invariant;

/// Invariant: every record after the root is one legal move past its parent.
///
/// For record `k > 0` the board holds exactly `k` marks, it differs from its
/// parent only in the played cell, that cell was empty before and now holds
/// the mover for position `k - 1`, and the parent board was still undecided.
pub struct LegalStepInvariant;

impl Invariant<Game> for LegalStepInvariant {
    fn holds(game: &Game) -> bool {
        game.timeline()
            .records()
            .windows(2)
            .enumerate()
            .all(|(parent, pair)| {
                let (before, after) = (&pair[0], &pair[1]);
                let Some(played) = after.played() else {
                    return false;
                };
                after.board().occupied_count() == parent + 1
                    && before.board().diff(after.board()) == [played]
                    && before.board().is_empty(played)
                    && after.board().get(played) == Square::Occupied(Player::to_move_at(parent))
                    && !evaluate(before.board()).is_decided()
            })
    }

    fn description() -> &'static str {
        "Each snapshot adds exactly one mark for the player to move on an undecided board"
    }
}
