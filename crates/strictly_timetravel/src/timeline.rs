//! Linear move history with branch discard.
//!
//! The timeline is an append-only list of board snapshots, except that
//! branching from an earlier snapshot drops everything after it. Record 0 is
//! always the empty board.

use super::{Board, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// One snapshot in the timeline, plus the cell played to reach it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveRecord {
    board: Board,
    played: Option<Position>,
}

impl MoveRecord {
    /// The game-start record: empty board, nothing played.
    pub fn root() -> Self {
        Self {
            board: Board::new(),
            played: None,
        }
    }

    /// Returns the board snapshot.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the cell played to reach this snapshot, `None` for game start.
    pub fn played(&self) -> Option<Position> {
        self.played
    }
}

/// Ordered snapshots of one game, indexed from 0 (game start).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timeline {
    pub(crate) records: Vec<MoveRecord>,
}

impl Timeline {
    /// Creates a timeline holding only the game-start record.
    pub fn new() -> Self {
        Self {
            records: vec![MoveRecord::root()],
        }
    }

    /// Number of snapshots, game start included.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Always false: the game-start record is never removed.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Index of the newest snapshot.
    pub fn tip(&self) -> usize {
        self.records.len() - 1
    }

    /// Returns the record at `index`.
    pub fn get(&self, index: usize) -> Option<&MoveRecord> {
        self.records.get(index)
    }

    /// Returns all records in history order.
    pub fn records(&self) -> &[MoveRecord] {
        &self.records
    }

    /// The played-cell log, parallel to the boards.
    pub fn played_positions(&self) -> Vec<Option<Position>> {
        self.records.iter().map(MoveRecord::played).collect()
    }

    /// Keeps records `0..=from`, then appends `board` reached by playing `played`.
    ///
    /// Returns how many later records were discarded.
    #[instrument(skip(self, board), fields(len = self.records.len()))]
    pub(crate) fn branch(&mut self, from: usize, board: Board, played: Position) -> usize {
        let keep = (from + 1).min(self.records.len());
        let discarded = self.records.len() - keep;
        self.records.truncate(keep);
        self.records.push(MoveRecord {
            board,
            played: Some(played),
        });
        if discarded > 0 {
            debug!(discarded, "Discarded future branch");
        }
        discarded
    }
}

impl Default for Timeline {
    fn default() -> Self {
        Self::new()
    }
}
