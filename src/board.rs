//! The shared set of pegs every worker mutates.

use std::sync::Mutex;

use crate::error::MoveError;
use crate::mover::move_disc;
use crate::peg::Peg;
use crate::types::{Disc, Move, PegIndex};

/// All pegs behind a single lock; `apply` is the only mutation path.
pub struct Board {
    pegs: Mutex<Vec<Peg>>,
}

impl Board {
    /// Create one empty peg per name.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            pegs: Mutex::new(names.into_iter().map(Peg::new).collect()),
        }
    }

    /// Stack discs `discs..=1` on the first peg, largest at the bottom.
    pub fn with_tower<I, S>(names: I, discs: u32) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let board = Self::new(names);
        {
            let mut pegs = board.pegs.lock().expect("board mutex poisoned");
            if let Some(first) = pegs.first_mut() {
                debug_assert!(first.is_empty());
                for size in (1..=discs).rev() {
                    let placed = first.push(Disc::new(size));
                    debug_assert!(placed, "initial tower must be ordered");
                }
            }
        }
        board
    }

    /// Apply a move to the pegs it names.
    pub fn apply(&self, mv: &Move) -> Result<Disc, MoveError> {
        let mut pegs = self.pegs.lock().expect("board mutex poisoned");
        let (from, to) = pair_mut(&mut pegs, mv.source, mv.destination)?;
        move_disc(from, to)
    }

    /// Copy of the current pegs.
    pub fn snapshot(&self) -> Vec<Peg> {
        let pegs = self.pegs.lock().expect("board mutex poisoned");
        pegs.clone()
    }

    /// Test-only hook: poison the lock so every later `apply` panics.
    #[cfg(test)]
    pub fn poison_for_test(&self) {
        let _ = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _pegs = self.pegs.lock().expect("board mutex poisoned");
            panic!("poisoning board for test");
        }));
    }
}

/// Borrow two distinct pegs mutably at once.
fn pair_mut(
    pegs: &mut [Peg],
    source: PegIndex,
    destination: PegIndex,
) -> Result<(&mut Peg, &mut Peg), MoveError> {
    let len = pegs.len();
    for index in [source, destination] {
        if index >= len {
            return Err(MoveError::UnknownPeg { index });
        }
    }
    if source == destination {
        return Err(MoveError::SamePeg {
            peg: pegs[source].name().to_string(),
        });
    }
    if source < destination {
        let (low, high) = pegs.split_at_mut(destination);
        Ok((&mut low[source], &mut high[0]))
    } else {
        let (low, high) = pegs.split_at_mut(source);
        Ok((&mut high[0], &mut low[destination]))
    }
}
