//! Error types for moves, operator input, and simulation runs.

use std::io;

/// Reasons a single move could not be applied.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("no disc to move from {from}")]
    EmptySource { from: String },
    /// Placing `disc` on `to` would put it on top of the smaller `top`.
    #[error("cannot move disc {disc} from {from} onto smaller disc {top} on {to}")]
    InvalidMove {
        disc: u32,
        top: u32,
        from: String,
        to: String,
    },
    #[error("source and destination are both {peg}")]
    SamePeg { peg: String },
    #[error("peg index {index} is out of range")]
    UnknownPeg { index: usize },
    #[error("move {id} panicked while being applied")]
    Panicked { id: u64 },
}

/// Failures while reading the disc count from the operator.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("invalid disc count: {0:?}")]
    NotANumber(String),
    #[error("disc count must be at least {min}")]
    TooFew { min: u32 },
    #[error("input closed before a valid disc count was entered")]
    Closed,
    #[error("failed to read disc count: {0}")]
    Io(#[from] io::Error),
}

/// Top-level failures of a simulation run.
#[derive(Debug, thiserror::Error)]
pub enum SimError {
    #[error("failed to spawn worker thread: {0}")]
    Spawn(#[source] io::Error),
}
