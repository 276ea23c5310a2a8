//! Error types for the engine.

use super::MoveRejection;
use derive_more::{Display, Error};

/// A jump targeted a snapshot that does not exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("Cannot jump to move #{}: history ends at move #{}", requested, last)]
pub struct JumpError {
    /// Requested history index.
    pub requested: usize,
    /// Last valid history index.
    pub last: usize,
}

/// A scripted move sequence contained a move the engine would ignore.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("Move #{} rejected: {}", ply, rejection)]
pub struct ReplayError {
    /// One-based number of the offending move.
    pub ply: usize,
    /// Why the engine ignored it.
    pub rejection: MoveRejection,
}

/// A transition broke one or more postconditions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub struct ContractViolation {
    /// Descriptions of each failed check.
    pub violations: Vec<String>,
}

impl std::fmt::Display for ContractViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Postcondition failed: {}", self.violations.join("; "))
    }
}
