//! Fixed-size worker pool that applies submitted moves to the shared board.
//!
//! Workers pull moves from one FIFO channel and apply them strictly in
//! submission order through [`MoveGate`]; completions are reported on a
//! second channel in whatever order workers finish sending them.

use std::collections::HashSet;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use std::thread;

use crossbeam_channel::{Receiver, Sender, unbounded};
use tracing::{debug, error, warn};

use crate::board::Board;
use crate::error::{MoveError, SimError};
use crate::gate::MoveGate;
use crate::solver::Dispatcher;
use crate::types::{Disc, Move, MoveId, PegIndex};

/// Pending move returned by [`WorkerPool::dispatch`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MoveHandle {
    id: MoveId,
}

impl MoveHandle {
    pub fn id(self) -> MoveId {
        self.id
    }
}

/// Outcome of one move, as reported by the worker that ran it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Completion {
    pub id: MoveId,
    pub worker: usize,
    pub result: Result<Disc, MoveError>,
}

pub struct WorkerPool {
    /// `None` once shut down; dropping the sender stops the workers.
    moves: Option<Sender<Move>>,
    workers: Vec<thread::JoinHandle<()>>,
    completions: Receiver<Completion>,
    next_id: MoveId,
}

/// Body of one worker thread. Returns when the move channel disconnects.
fn work(
    worker: usize,
    moves: Receiver<Move>,
    gate: Arc<MoveGate>,
    board: Arc<Board>,
    completion_tx: Sender<Completion>,
) {
    for mv in moves.iter() {
        let result = {
            let _turn = gate.enter(mv.id);
            panic::catch_unwind(AssertUnwindSafe(|| board.apply(&mv)))
                .unwrap_or(Err(MoveError::Panicked { id: mv.id }))
        };
        debug!(move_id = mv.id, ok = result.is_ok(), "move applied");
        let completion = Completion {
            id: mv.id,
            worker,
            result,
        };
        if completion_tx.send(completion).is_err() {
            debug!(move_id = mv.id, "completion receiver dropped");
        }
    }
}

impl WorkerPool {
    /// Start `size` named worker threads operating on `board`.
    pub fn spawn(size: usize, board: Arc<Board>) -> Result<Self, SimError> {
        debug_assert!(size > 0, "worker pool needs at least one worker");
        let (move_tx, move_rx) = unbounded();
        let (completion_tx, completions) = unbounded();
        let gate = Arc::new(MoveGate::new());

        let mut workers = Vec::with_capacity(size);
        for worker in 0..size {
            let worker_moves = move_rx.clone();
            let worker_gate = Arc::clone(&gate);
            let worker_board = Arc::clone(&board);
            let worker_tx = completion_tx.clone();
            let spawned = thread::Builder::new()
                .name(format!("worker-{worker}"))
                .spawn(move || work(worker, worker_moves, worker_gate, worker_board, worker_tx));
            match spawned {
                Ok(handle) => workers.push(handle),
                Err(err) => {
                    drop(move_tx);
                    for handle in workers {
                        let _ = handle.join();
                    }
                    return Err(SimError::Spawn(err));
                }
            }
        }
        debug!(workers = size, "worker pool started");

        Ok(Self {
            moves: Some(move_tx),
            workers,
            completions,
            next_id: 0,
        })
    }

    /// Iterate the completions for `handles` as they arrive.
    ///
    /// Completions of moves not listed in `handles` are discarded.
    pub fn as_completed(&self, handles: &[MoveHandle]) -> AsCompleted<'_> {
        AsCompleted {
            pending: handles.iter().map(|handle| handle.id()).collect(),
            completions: &self.completions,
        }
    }

    /// Stop accepting moves, let workers drain the channel, and join them.
    pub fn join(mut self) {
        self.shutdown();
    }

    fn shutdown(&mut self) {
        self.moves = None;
        for handle in self.workers.drain(..) {
            if handle.join().is_err() {
                error!("worker thread panicked");
            }
        }
    }
}

impl Dispatcher for WorkerPool {
    type Handle = MoveHandle;

    fn dispatch(&mut self, source: PegIndex, destination: PegIndex) -> MoveHandle {
        let mv = Move::new(self.next_id, source, destination);
        self.next_id += 1;
        let sent = self.moves.as_ref().map(|moves| moves.send(mv).is_ok());
        if sent != Some(true) {
            warn!(move_id = mv.id, "move submitted to a stopped pool");
        }
        MoveHandle { id: mv.id }
    }
}

impl Drop for WorkerPool {
    fn drop(&mut self) {
        self.shutdown();
    }
}

/// Iterator returned by [`WorkerPool::as_completed`].
pub struct AsCompleted<'a> {
    pending: HashSet<MoveId>,
    completions: &'a Receiver<Completion>,
}

impl Iterator for AsCompleted<'_> {
    type Item = Completion;

    fn next(&mut self) -> Option<Completion> {
        while !self.pending.is_empty() {
            let completion = self.completions.recv().ok()?;
            if self.pending.remove(&completion.id) {
                return Some(completion);
            }
        }
        None
    }
}
