//! Random-walk stream generation for demos and benchmarks.
//!
//! The coordinator accepts observations from any source; this is the
//! one the harness uses: an integer walk that moves by a step drawn
//! uniformly from a fixed set. The default step set `[-1, 0, 1, 1]`
//! drifts upward, so the k-th largest keeps being contested instead of
//! freezing early.
//!
//! Notes:
//! - `step_with_rng` exists for deterministic testing/benchmarking, same
//!   convention as the rest of the crate.

use rand::prelude::*;

/// Integer random walk over a fixed step set.
#[derive(Debug, Clone)]
pub struct IncrementWalk {
    current: i64,
    steps: Vec<i64>,
}

impl IncrementWalk {
    /// Walk starting at `start` with the default upward-drifting step
    /// set `[-1, 0, 1, 1]`.
    pub fn new(start: i64) -> Self {
        Self {
            current: start,
            steps: vec![-1, 0, 1, 1],
        }
    }

    /// Walk starting at `start` with a caller-supplied step set.
    /// Duplicate entries weight a step proportionally.
    ///
    /// # Panics
    ///
    /// Panics if `steps` is empty.
    pub fn with_steps(start: i64, steps: Vec<i64>) -> Self {
        assert!(!steps.is_empty(), "with_steps: steps must be non-empty");
        Self {
            current: start,
            steps,
        }
    }

    /// Advance one step and return the new position.
    #[inline]
    pub fn step(&mut self) -> i64 {
        let mut rng = rand::rng();
        self.step_with_rng(&mut rng)
    }

    /// Advance one step using a caller-supplied RNG.
    #[inline]
    pub fn step_with_rng<R: Rng + ?Sized>(&mut self, rng: &mut R) -> i64 {
        let idx = rng.random_range(0..self.steps.len());
        self.current += self.steps[idx];
        self.current
    }

    /// Current position without advancing.
    pub fn current(&self) -> i64 {
        self.current
    }
}
