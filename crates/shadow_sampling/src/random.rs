//! Uniformly random measurement bases
//!
//! Gantree: L4_Sampling → RandomSampler
//!
//! The randomized counterpart of the derandomized scheduler: every qubit of
//! every round is measured in a basis drawn uniformly from {X, Y, Z}.

use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use shadow_core::{MeasurementProcedure, MeasurementSetting, Pauli};

/// Random measurement sampler
/// Gantree: RandomSampler // 무작위 기저 생성기
#[derive(Debug, Clone)]
pub struct RandomSampler {
    rng: ChaCha8Rng,
}

impl RandomSampler {
    /// Create an entropy-seeded sampler
    pub fn new() -> Self {
        Self {
            rng: ChaCha8Rng::from_entropy(),
        }
    }

    /// Create a reproducible sampler
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Draw one round
    pub fn sample_setting(&mut self, system_size: usize) -> MeasurementSetting {
        (0..system_size)
            .map(|_| Pauli::ALL[self.rng.gen_range(0..3)])
            .collect()
    }

    /// Draw `num_rounds` independent rounds
    /// Gantree: sample(rounds,n) -> MeasurementProcedure // 무작위 절차
    pub fn sample(&mut self, num_rounds: usize, system_size: usize) -> MeasurementProcedure {
        (0..num_rounds)
            .map(|_| self.sample_setting(system_size))
            .collect()
    }
}

impl Default for RandomSampler {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Tests
// ============================================================================
