//! Recursive move generation and the dispatch seam it submits through.

#[cfg(test)]
use crate::board::Board;
#[cfg(test)]
use crate::error::MoveError;
use crate::types::PegIndex;
#[cfg(test)]
use crate::types::{Disc, Move, MoveId};

/// Accepts moves in program order and returns a handle for each.
pub trait Dispatcher {
    type Handle;

    fn dispatch(&mut self, source: PegIndex, destination: PegIndex) -> Self::Handle;
}

/// Submit the optimal move sequence for `discs` discs from `source` to
/// `destination`, returning handles in submission order.
pub fn solve<D>(
    discs: u32,
    source: PegIndex,
    auxiliary: PegIndex,
    destination: PegIndex,
    dispatcher: &mut D,
) -> Vec<D::Handle>
where
    D: Dispatcher + ?Sized,
{
    match discs {
        0 => Vec::new(),
        1 => vec![dispatcher.dispatch(source, destination)],
        _ => {
            let mut handles = solve(discs - 1, source, destination, auxiliary, dispatcher);
            handles.push(dispatcher.dispatch(source, destination));
            handles.extend(solve(discs - 1, auxiliary, source, destination, dispatcher));
            handles
        }
    }
}

/// `2^discs - 1`, saturating at `u64::MAX`.
pub fn optimal_move_count(discs: u32) -> u64 {
    1u64.checked_shl(discs).map_or(u64::MAX, |count| count - 1)
}

/// Applies each move immediately on the calling thread.
#[cfg(test)]
pub struct InlineDispatcher<'a> {
    board: &'a Board,
    next_id: MoveId,
}

#[cfg(test)]
impl<'a> InlineDispatcher<'a> {
    pub fn new(board: &'a Board) -> Self {
        Self { board, next_id: 0 }
    }
}

#[cfg(test)]
impl Dispatcher for InlineDispatcher<'_> {
    type Handle = Result<Disc, MoveError>;

    fn dispatch(&mut self, source: PegIndex, destination: PegIndex) -> Self::Handle {
        let mv = Move::new(self.next_id, source, destination);
        self.next_id += 1;
        self.board.apply(&mv)
    }
}
