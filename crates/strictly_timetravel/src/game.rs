//! Tic-tac-toe engine with move history and time travel.
//!
//! The engine owns the timeline of snapshots and a cursor into it. Playing
//! a move always branches from the cursor and makes the new snapshot the
//! tip; jumping only moves the cursor.

use super::contracts::{Contract, PlayContract};
use super::error::{JumpError, ReplayError};
use super::rules::{evaluate, Evaluation};
use super::view::{GameView, SortOrder};
use super::{Board, Move, PlayOutcome, Player, Position, Timeline};
use tracing::{debug, info, instrument, warn};

/// Tic-tac-toe game session.
///
/// The evaluation of the displayed board is cached and refreshed on every
/// play or jump, so rendering never re-evaluates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    pub(crate) timeline: Timeline,
    pub(crate) position: usize,
    pub(crate) sort: SortOrder,
    pub(crate) evaluation: Evaluation,
}

impl Game {
    /// Creates a new game at the empty board, move list ascending.
    #[instrument]
    pub fn new() -> Self {
        Self::with_sort(SortOrder::default())
    }

    /// Creates a new game with the given move-list order.
    #[instrument]
    pub fn with_sort(sort: SortOrder) -> Self {
        Self {
            timeline: Timeline::new(),
            position: 0,
            sort,
            evaluation: Evaluation::IN_PROGRESS,
        }
    }

    /// Plays `moves` in order from the empty board.
    ///
    /// # Errors
    ///
    /// Returns [`ReplayError`] for the first move the engine ignores.
    #[instrument(skip(moves), fields(moves = moves.len()))]
    pub fn replay(moves: &[Position]) -> Result<Self, ReplayError> {
        let mut game = Self::new();
        for (index, position) in moves.iter().enumerate() {
            if let PlayOutcome::Ignored(rejection) = game.play_move(*position) {
                return Err(ReplayError {
                    ply: index + 1,
                    rejection,
                });
            }
        }
        Ok(game)
    }

    /// Returns the timeline of snapshots.
    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    /// Returns the current history index.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns the move-list order.
    pub fn sort_order(&self) -> SortOrder {
        self.sort
    }

    /// Returns the cached evaluation of the displayed board.
    pub fn evaluation(&self) -> &Evaluation {
        &self.evaluation
    }

    /// Returns the board at the current position.
    pub fn current_board(&self) -> &Board {
        self.timeline.records()[self.position].board()
    }

    /// Returns the player to move, `None` once the displayed board is decided.
    pub fn to_move(&self) -> Option<Player> {
        if self.evaluation.is_decided() {
            None
        } else {
            Some(Player::to_move_at(self.position))
        }
    }

    /// Plays the player to move at `position`.
    ///
    /// Ignored without any change if the square is occupied or the displayed
    /// board is already decided. Otherwise any snapshots after the current
    /// position are discarded and the new board becomes the tip.
    #[instrument(skip(self), fields(from = self.position))]
    pub fn play_move(&mut self, position: Position) -> PlayOutcome {
        if let Err(rejection) = PlayContract::pre(self, &position) {
            debug!(%rejection, "Ignoring move");
            return PlayOutcome::Ignored(rejection);
        }

        #[cfg(debug_assertions)]
        let before = self.clone();

        let player = Player::to_move_at(self.position);
        let next = self.current_board().with_mark(position, player);
        self.timeline.branch(self.position, next, position);
        self.position = self.timeline.tip();
        self.evaluation = evaluate(&next);

        let played: Vec<Option<usize>> = self
            .timeline
            .played_positions()
            .into_iter()
            .map(|played| played.map(Position::to_index))
            .collect();
        info!(?played, "Played cells changed");
        debug!(%player, status = %self.evaluation.status(), "Move applied");

        #[cfg(debug_assertions)]
        {
            let checked = PlayContract::post(&before, self);
            debug_assert!(checked.is_ok(), "{checked:?}");
        }

        PlayOutcome::Played(Move::new(player, position))
    }

    /// Moves the cursor to history index `target`.
    ///
    /// History is left intact; the branch after `target` is only discarded
    /// by the next [`play_move`](Self::play_move).
    ///
    /// # Errors
    ///
    /// Returns [`JumpError`] if `target` is past the newest snapshot.
    #[instrument(skip(self), fields(from = self.position))]
    pub fn jump_to(&mut self, target: usize) -> Result<(), JumpError> {
        let last = self.timeline.tip();
        if target > last {
            warn!(target, last, "Jump outside history");
            return Err(JumpError {
                requested: target,
                last,
            });
        }

        self.position = target;
        self.evaluation = evaluate(self.current_board());
        debug!(status = %self.evaluation.status(), "Jumped");
        Ok(())
    }

    /// Flips the move-list order and returns the new one.
    #[instrument(skip(self), fields(sort = ?self.sort))]
    pub fn toggle_sort(&mut self) -> SortOrder {
        self.sort = self.sort.toggle();
        debug!(sort = ?self.sort, "Sort order toggled");
        self.sort
    }

    /// Builds the render model for the current position.
    pub fn view(&self) -> GameView {
        GameView::from_game(self)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
