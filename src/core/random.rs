use crate::core::RandomSource;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Random source backed by the standard RNG.
#[derive(Debug, Clone)]
pub struct StdRandom {
    rng: StdRng,
}

impl StdRandom {
    /// Unseeded: every run draws differently.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Reproducible sequence for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for StdRandom {
    fn next_int(&mut self, bound: u64) -> u64 {
        self.rng.gen_range(0..bound)
    }
}

/// Replays a fixed list of values, starting over when it runs out.
///
/// Values are returned as given, even when they fall outside `[0, bound)`.
#[derive(Debug, Clone)]
pub struct ScriptedRandom {
    values: Vec<u64>,
    cursor: usize,
}

impl ScriptedRandom {
    pub fn new(values: impl Into<Vec<u64>>) -> Self {
        Self {
            values: values.into(),
            cursor: 0,
        }
    }
}

impl RandomSource for ScriptedRandom {
    fn next_int(&mut self, _bound: u64) -> u64 {
        if self.values.is_empty() {
            return 0;
        }
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value
    }
}
