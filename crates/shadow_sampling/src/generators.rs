//! Synthetic observable sets
//!
//! Gantree: L4_Sampling → Generators
//!
//! Observable families used to exercise the scheduler and the predictors.

use rand::prelude::*;
use rand::seq::index;
use rand_chacha::ChaCha8Rng;
use shadow_core::{Observable, Pauli, PauliTerm, ShadowError, ShadowResult};

/// Observable generator
/// Gantree: ObservableGenerator // 관측량 생성기
#[derive(Debug, Clone, Default)]
pub struct ObservableGenerator {
    /// Random seed
    seed: Option<u64>,
}

impl ObservableGenerator {
    /// Create new generator
    pub fn new() -> Self {
        Self { seed: None }
    }

    /// Create generator with seed
    pub fn with_seed(seed: u64) -> Self {
        Self { seed: Some(seed) }
    }

    // ========================================================================
    // Structured Families
    // ========================================================================

    /// Two-body correlators on a chain
    /// Gantree: correlator_suite(n) -> Vec<Observable> // 상관자 집합
    ///
    /// Emits, in order:
    /// - `Y_i Y_{i+1} X_j X_{j+1}` for every j whose pair neither overlaps
    ///   nor touches `{i, i+1}` on the left,
    /// - `X_i X_{i+1} Z_j Z_{j2}` for distinct j, j2 outside `{i, i+1}`,
    /// - `X_i X_{i+1} Z_j` for j outside `{i, i+1}`.
    pub fn correlator_suite(&self, system_size: usize) -> Vec<Observable> {
        let n = system_size;
        let mut observables = Vec::new();

        for i in 0..n.saturating_sub(1) {
            for j in 0..n - 1 {
                if j == i || j == i + 1 || j + 1 == i {
                    continue;
                }
                observables.push(Observable::from_pairs(&[
                    (Pauli::Y, i),
                    (Pauli::Y, i + 1),
                    (Pauli::X, j),
                    (Pauli::X, j + 1),
                ]));
            }
        }

        for i in 0..n.saturating_sub(1) {
            for j in (0..n).filter(|&j| j != i && j != i + 1) {
                for j2 in (0..n).filter(|&j2| j2 != i && j2 != i + 1 && j2 != j) {
                    observables.push(Observable::from_pairs(&[
                        (Pauli::X, i),
                        (Pauli::X, i + 1),
                        (Pauli::Z, j),
                        (Pauli::Z, j2),
                    ]));
                }
            }
        }

        for i in 0..n.saturating_sub(1) {
            for j in (0..n).filter(|&j| j != i && j != i + 1) {
                observables.push(Observable::from_pairs(&[
                    (Pauli::X, i),
                    (Pauli::X, i + 1),
                    (Pauli::Z, j),
                ]));
            }
        }

        observables
    }

    /// `P_i P_{i+1}` for every neighbouring pair
    pub fn nearest_neighbour(&self, system_size: usize, pauli: Pauli) -> Vec<Observable> {
        (0..system_size.saturating_sub(1))
            .map(|i| Observable::uniform(pauli, &[i, i + 1]))
            .collect()
    }

    // ========================================================================
    // Random Families
    // ========================================================================

    /// `count` random observables, each on `k` distinct qubits
    /// Gantree: random_k_local(count,n,k) -> Result<Vec<Observable>> // 무작위 k-국소
    pub fn random_k_local(
        &self,
        count: usize,
        system_size: usize,
        k: usize,
    ) -> ShadowResult<Vec<Observable>> {
        if system_size == 0 {
            return Err(ShadowError::InvalidSystemSize);
        }
        if k > system_size {
            return Err(ShadowError::ConfigError(format!(
                "Locality {} exceeds system size {}",
                k, system_size
            )));
        }

        let mut rng = self.get_rng();
        let observables: Vec<Observable> = (0..count)
            .map(|_| {
                let mut qubits = index::sample(&mut rng, system_size, k).into_vec();
                qubits.sort_unstable();
                qubits
                    .into_iter()
                    .map(|q| PauliTerm::new(Pauli::ALL[rng.gen_range(0..3)], q))
                    .collect()
            })
            .collect();
        Ok(observables)
    }

    // ========================================================================
    // Helpers
    // ========================================================================

    fn get_rng(&self) -> ChaCha8Rng {
        match self.seed {
            Some(s) => ChaCha8Rng::seed_from_u64(s),
            None => ChaCha8Rng::from_entropy(),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
