//! The last-resort evaluator: uniform noise.
//!
//! With no external model plugged in, the engine still has to answer every
//! `go` with a legal move. Random leaf scores turn the search into a legal
//! move picker, which is exactly the fallback the UCI front-end needs.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::chess::core::Color;
use crate::evaluation::{Encoding, Evaluator};

/// Scores every board with an independent uniform sample from `[-1, 1]`.
pub struct RandomEvaluator {
    rng: StdRng,
}

impl RandomEvaluator {
    #[allow(missing_docs)]
    #[must_use]
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Deterministic variant for reproducible tests.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomEvaluator {
    fn default() -> Self {
        Self::new()
    }
}

impl Evaluator for RandomEvaluator {
    fn evaluate(&mut self, boards: &[Encoding], _perspective: Color) -> Vec<f32> {
        boards
            .iter()
            .map(|_| self.rng.gen_range(-1.0..=1.0))
            .collect()
    }
}
