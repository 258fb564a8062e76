//! Shared identifiers and the disc/move model used across the simulation.

use std::fmt;

/// Position of a move in program (submission) order, starting at 0.
pub type MoveId = u64;
/// Index of a peg on the board.
pub type PegIndex = usize;

/// A disc of fixed, positive size.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Disc {
    size: u32,
}

impl Disc {
    /// Construct a disc; sizes start at 1.
    pub fn new(size: u32) -> Self {
        debug_assert!(size > 0, "disc size must be positive");
        Self { size }
    }

    pub fn size(self) -> u32 {
        self.size
    }
}

impl fmt::Display for Disc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.size)
    }
}

/// Unit of work handed to the worker pool: move the top disc of one peg
/// onto another.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Move {
    /// Program-order id; moves are applied in ascending id order.
    pub id: MoveId,
    pub source: PegIndex,
    pub destination: PegIndex,
}

impl Move {
    pub fn new(id: MoveId, source: PegIndex, destination: PegIndex) -> Self {
        Self {
            id,
            source,
            destination,
        }
    }
}
