//! Sources of neighbor-selection indices

use rand::{Rng, SeedableRng, rngs::StdRng};

/// Produces uniformly distributed indices for neighbor selection
///
/// This is the generator's only source of nondeterminism.
pub trait RandomSource {
    /// Return an index in `[0, bound)`
    ///
    /// Callers never pass a `bound` of zero.
    fn next_index(&mut self, bound: usize) -> usize;
}

/// Seeded random selector for reproducible stochastic choices
#[derive(Debug, Clone)]
pub struct RandomSelector {
    rng: StdRng,
}

impl RandomSelector {
    /// Create a deterministic random selector
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for RandomSelector {
    fn next_index(&mut self, bound: usize) -> usize {
        if bound <= 1 {
            return 0;
        }
        self.rng.random_range(0..bound)
    }
}

/// Replays a fixed sequence of indices
///
/// Each value is reduced modulo the requested bound and the sequence wraps
/// around once exhausted. An empty script always yields 0.
#[derive(Debug, Clone, Default)]
pub struct ScriptedSource {
    script: Vec<usize>,
    position: usize,
}

impl ScriptedSource {
    /// Create a source replaying `script`
    pub const fn new(script: Vec<usize>) -> Self {
        Self {
            script,
            position: 0,
        }
    }

    /// Number of indices handed out so far
    pub const fn draws(&self) -> usize {
        self.position
    }
}

impl RandomSource for ScriptedSource {
    fn next_index(&mut self, bound: usize) -> usize {
        if self.script.is_empty() || bound == 0 {
            return 0;
        }
        let value = self
            .script
            .get(self.position % self.script.len())
            .copied()
            .unwrap_or(0);
        self.position += 1;
        value % bound
    }
}
