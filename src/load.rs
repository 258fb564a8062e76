//! Artificial service-time injection.

use std::thread;
use std::time::Duration;

use rand::Rng;

/// Sleeps a uniformly random duration before handing a value back.
#[derive(Clone, Copy, Debug)]
pub struct LoadSimulator {
    min: Duration,
    max: Duration,
}

impl LoadSimulator {
    /// Bounds are inclusive and may be given in either order.
    pub fn new(min: Duration, max: Duration) -> Self {
        Self {
            min: min.min(max),
            max: min.max(max),
        }
    }

    /// Block the calling thread for a random delay, then return `value`
    /// unchanged.
    pub fn simulate<T>(&self, value: T) -> T {
        let delay = self.sample();
        if !delay.is_zero() {
            thread::sleep(delay);
        }
        value
    }

    fn sample(&self) -> Duration {
        if self.min == self.max {
            return self.min;
        }
        rand::thread_rng().gen_range(self.min..=self.max)
    }
}
