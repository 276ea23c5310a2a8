//! Contract-based validation for playing moves.
//!
//! Contracts define correctness through preconditions and postconditions:
//! {P} action {Q}. A failed precondition makes the move a silent no-op; a
//! failed postcondition is a bug in the engine.

use super::error::ContractViolation;
use super::invariants::{InvariantSet, TimelineInvariants};
use super::{Game, MoveRejection, Position};
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveRejection>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), ContractViolation>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: The square at the move's position must be empty.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Checks the square on the displayed board.
    #[instrument(skip(game))]
    pub fn check(position: Position, game: &Game) -> Result<(), MoveRejection> {
        if game.current_board().is_empty(position) {
            Ok(())
        } else {
            Err(MoveRejection::SquareOccupied(position))
        }
    }
}

/// Precondition: The displayed board must not be won or drawn.
pub struct GameUndecided;

impl GameUndecided {
    /// Checks the cached evaluation of the displayed board.
    #[instrument(skip(game))]
    pub fn check(game: &Game) -> Result<(), MoveRejection> {
        let evaluation = game.evaluation();
        if evaluation.is_decided() {
            Err(MoveRejection::GameOver(evaluation.status()))
        } else {
            Ok(())
        }
    }
}

/// Composite precondition: the game is undecided and the square is empty.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    #[instrument(skip(game))]
    pub fn check(position: Position, game: &Game) -> Result<(), MoveRejection> {
        GameUndecided::check(game)?;
        SquareIsEmpty::check(position, game)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Play Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for [`Game::play_move`].
///
/// Preconditions:
/// - Displayed board is undecided
/// - Square is empty
///
/// Postconditions:
/// - Timeline invariants hold
/// - Snapshots up to the old position are unchanged
/// - The new position is the tip, one past the old position
pub struct PlayContract;

impl Contract<Game, Position> for PlayContract {
    fn pre(game: &Game, action: &Position) -> Result<(), MoveRejection> {
        LegalMove::check(*action, game)
    }

    fn post(before: &Game, after: &Game) -> Result<(), ContractViolation> {
        let mut violations = match TimelineInvariants::check_all(after) {
            Ok(()) => Vec::new(),
            Err(found) => found.into_iter().map(|v| v.description).collect(),
        };

        let kept = before.position() + 1;
        let prefix_kept = matches!(
            (
                before.timeline().records().get(..kept),
                after.timeline().records().get(..kept),
            ),
            (Some(old), Some(new)) if old == new
        );
        if !prefix_kept {
            violations.push("Snapshots up to the played position are preserved".to_string());
        }

        let tip = after.timeline().tip();
        if after.position() != tip || tip != kept {
            violations.push("Position moves to the new tip".to_string());
        }

        if violations.is_empty() {
            Ok(())
        } else {
            warn!(?violations, "Play postcondition failed");
            Err(ContractViolation { violations })
        }
    }
}
