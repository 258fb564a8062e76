//! Fixed simulation parameters.

use std::time::Duration;

/// Workers in the pool, one per simulated node.
pub const WORKER_COUNT: usize = 3;
/// Smallest disc count the operator may request.
pub const MIN_DISCS: u32 = 3;
// Per-move artificial service time, inclusive.
const LOAD_MIN_MS: u64 = 100;
const LOAD_MAX_MS: u64 = 500;

#[derive(Clone, Debug)]
pub struct SimConfig {
    pub workers: usize,
    pub min_discs: u32,
    pub load_min: Duration,
    pub load_max: Duration,
    /// Source, auxiliary, and destination peg names, in that order.
    pub peg_names: [String; 3],
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            workers: WORKER_COUNT,
            min_discs: MIN_DISCS,
            load_min: Duration::from_millis(LOAD_MIN_MS),
            load_max: Duration::from_millis(LOAD_MAX_MS),
            peg_names: ["Tower_0", "Tower_1", "Tower_2"].map(String::from),
        }
    }
}
