//! Program-order turnstile for move execution.

use std::sync::{Condvar, Mutex};

use crate::types::MoveId;

/// Admits moves one at a time in ascending id order.
///
/// A worker holding move `k` blocks in `enter` until moves `0..k` have
/// released their [`Turn`].
pub struct MoveGate {
    next: Mutex<MoveId>,
    turn: Condvar,
}

/// Exclusive turn for one move; dropping it admits the next id, also when
/// the holder unwinds.
pub struct Turn<'a> {
    gate: &'a MoveGate,
    id: MoveId,
}

impl MoveGate {
    pub fn new() -> Self {
        Self {
            next: Mutex::new(0),
            turn: Condvar::new(),
        }
    }

    pub fn enter(&self, id: MoveId) -> Turn<'_> {
        let mut next = self.lock();
        while *next != id {
            debug_assert!(*next < id, "move {id} admitted twice");
            next = self.turn.wait(next).unwrap_or_else(|poisoned| poisoned.into_inner());
        }
        Turn { gate: self, id }
    }

    /// Id of the move currently allowed to run.
    #[cfg(test)]
    pub fn next_id(&self) -> MoveId {
        *self.lock()
    }

    // The counter is only ever incremented, so a poisoned lock still holds
    // a consistent value.
    fn lock(&self) -> std::sync::MutexGuard<'_, MoveId> {
        self.next.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Drop for Turn<'_> {
    fn drop(&mut self) {
        let mut next = self.gate.lock();
        debug_assert_eq!(*next, self.id, "turn released out of order");
        *next = self.id + 1;
        self.gate.turn.notify_all();
    }
}
