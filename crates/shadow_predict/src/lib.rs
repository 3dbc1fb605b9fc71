//! # Shadow Predict
//!
//! Predictions from classical-shadow measurement records: empirical
//! expectations of Pauli observables and second Rényi entropies of small
//! subsystems.
//!
//! ## Gantree Architecture
//!
//! ```text
//! shadow_predict // L5: Prediction (완료)
//!     L5_Predict // 예측 (완료)
//!         Estimator // 관측량 기댓값 (완료)
//!         RenyiEntropy // 부분계 엔트로피 (완료)
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use shadow_predict::prelude::*;
//! use shadow_core::format::parse_records;
//! use shadow_core::{Observable, Pauli};
//!
//! let set = parse_records("2\nZ 1 Z -1\nZ -1 Z 1\nX 1 Z 1\n").unwrap();
//! let zz = Observable::uniform(Pauli::Z, &[0, 1]);
//!
//! let est = estimate(&set.records, &zz);
//! assert_eq!(est.matches, 2);
//! assert_eq!(est.mean(), Some(-1.0));
//!
//! let entropy = renyi_entropy(&set.records, &[0]).unwrap();
//! assert!(entropy >= 0.0);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

// ============================================================================
// Module Declarations
// ============================================================================

/// Observable estimation (Gantree: L5_Predict → Estimator)
pub mod estimator;

/// Rényi entropy (Gantree: L5_Predict → RenyiEntropy)
pub mod entropy;

// ============================================================================
// Re-exports
// ============================================================================

pub use entropy::{purity, renyi_entropy};
pub use estimator::{estimate, estimate_all, predict_observables, Estimate};

// ============================================================================
// Prelude
// ============================================================================

pub mod prelude {
    //! Convenient imports for common use cases
    //!
    //! ```rust
    //! use shadow_predict::prelude::*;
    //! ```

    pub use crate::entropy::{purity, renyi_entropy};
    pub use crate::estimator::{estimate, estimate_all, predict_observables, Estimate};
}

// ============================================================================
// Integration Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::prelude::*;
    use shadow_core::format::{parse_records, write_records};
    use shadow_core::{MeasurementProcedure, MeasurementRecord, Outcome, Pauli};
    use shadow_sampling::{ObservableGenerator, RandomSampler};

    /// Outcomes of the all-zero product state: Z gives +1, X and Y alternate by round
    fn simulate_zero_state(procedure: &MeasurementProcedure) -> Vec<MeasurementRecord> {
        procedure
            .iter()
            .enumerate()
            .map(|(round, setting)| {
                let outcomes = setting
                    .iter()
                    .map(|&p| match (p, round % 2) {
                        (Pauli::Z, _) | (_, 0) => Outcome::Plus,
                        _ => Outcome::Minus,
                    })
                    .collect();
                MeasurementRecord::new(setting.clone(), outcomes).unwrap()
            })
            .collect()
    }

    #[test]
    fn test_zz_correlators_on_zero_state() {
        let procedure = RandomSampler::with_seed(17).sample(500, 5);
        let records = simulate_zero_state(&procedure);
        let observables = ObservableGenerator::new().nearest_neighbour(5, Pauli::Z);

        for (obs, est) in observables.iter().zip(estimate_all(&records, &observables)) {
            let expected = procedure.iter().filter(|s| obs.is_measured_by(s)).count();
            assert_eq!(est.matches, expected);
            assert_eq!(est.mean(), Some(1.0));
        }
    }

    #[test]
    fn test_records_survive_text_format() {
        let procedure = RandomSampler::with_seed(2).sample(40, 3);
        let records = simulate_zero_state(&procedure);
        let parsed = parse_records(&write_records(3, &records)).unwrap();

        let zx = shadow_core::Observable::from_pairs(&[(Pauli::Z, 0), (Pauli::X, 2)]);
        assert_eq!(estimate(&parsed.records, &zx), estimate(&records, &zx));
        assert_eq!(
            renyi_entropy(&parsed.records, &[0, 1]).unwrap(),
            renyi_entropy(&records, &[0, 1]).unwrap()
        );
    }

    #[test]
    fn test_single_qubit_entropy_bounded() {
        let procedure = RandomSampler::with_seed(23).sample(300, 4);
        let records = simulate_zero_state(&procedure);

        for q in 0..4 {
            let entropy = renyi_entropy(&records, &[q]).unwrap();
            assert!((0.0..=1.0).contains(&entropy), "qubit {}: {}", q, entropy);
        }
    }
}
