//! Observable expectation estimates
//!
//! Gantree: L5_Predict → Estimator
//!
//! A round matches an observable when the recorded basis agrees with the
//! observable's required basis on every qubit it acts on. Matching rounds
//! contribute the product of the outcomes on those qubits.

use log::warn;
use serde::{Deserialize, Serialize};
use shadow_core::{MeasurementRecord, Observable, ObservableSet, RecordSet, ShadowError, ShadowResult};
use std::fmt;

/// Signed sum and number of matching rounds for one observable
/// Gantree: Estimate // (합, 일치 횟수)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Estimate {
    /// Sum of outcome products over matching rounds
    pub sum: i64,
    /// Number of matching rounds
    pub matches: usize,
}

impl Estimate {
    /// Empirical expectation, `None` if no round matched
    pub fn mean(&self) -> Option<f64> {
        if self.matches == 0 {
            None
        } else {
            Some(self.sum as f64 / self.matches as f64)
        }
    }
}

impl fmt::Display for Estimate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.mean() {
            Some(mean) => write!(f, "{:.6}", mean),
            None => write!(f, "nan"),
        }
    }
}

/// Estimate one observable
/// Gantree: estimate(records,obs) -> Estimate // 기댓값 추정
pub fn estimate(records: &[MeasurementRecord], observable: &Observable) -> Estimate {
    let mut result = Estimate::default();

    'rounds: for record in records {
        let mut product = 1i64;
        for term in observable.iter() {
            match record.get(term.qubit) {
                Some((basis, outcome)) if basis == term.pauli => product *= outcome.sign() as i64,
                _ => continue 'rounds,
            }
        }
        result.sum += product;
        result.matches += 1;
    }

    result
}

/// Estimate many observables against the same records
pub fn estimate_all(records: &[MeasurementRecord], observables: &[Observable]) -> Vec<Estimate> {
    observables
        .iter()
        .enumerate()
        .map(|(i, observable)| {
            let est = estimate(records, observable);
            if est.matches == 0 {
                warn!("Observable {} ({}) was not measured in any round", i, observable);
            }
            est
        })
        .collect()
}

/// Estimate every observable of a parsed file against parsed records
///
/// Both inputs must describe the same number of qubits.
pub fn predict_observables(records: &RecordSet, observables: &ObservableSet) -> ShadowResult<Vec<Estimate>> {
    if records.system_size != observables.system_size {
        return Err(ShadowError::SystemSizeMismatch {
            expected: records.system_size,
            got: observables.system_size,
        });
    }
    Ok(estimate_all(&records.records, &observables.observables))
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use shadow_core::{Outcome, Pauli};

    fn record(text: &str, outcomes: &[i64]) -> MeasurementRecord {
        let outcomes = outcomes.iter().map(|&s| Outcome::from_sign(s).unwrap()).collect();
        MeasurementRecord::new(text.parse().unwrap(), outcomes).unwrap()
    }

    #[test]
    fn test_estimate_products() {
        let records = vec![
            record("Z Z X", &[1, 1, -1]),
            record("Z Z Y", &[1, -1, 1]),
            record("X Z Z", &[-1, -1, 1]),
            record("Z Z Z", &[-1, -1, 1]),
        ];
        let zz = Observable::uniform(Pauli::Z, &[0, 1]);

        let est = estimate(&records, &zz);
        assert_eq!(est, Estimate { sum: 1, matches: 3 });
        assert_relative_eq!(est.mean().unwrap(), 1.0 / 3.0);
    }

    #[test]
    fn test_unmatched_observable() {
        let records = vec![record("X X", &[1, 1])];
        let est = estimate(&records, &Observable::from_pairs(&[(Pauli::Y, 1)]));
        assert_eq!(est.matches, 0);
        assert_eq!(est.mean(), None);
        assert_eq!(est.to_string(), "nan");
    }

    #[test]
    fn test_empty_observable_matches_everything() {
        let records = vec![record("X", &[1]), record("Z", &[-1])];
        let est = estimate(&records, &Observable::default());
        assert_eq!(est, Estimate { sum: 2, matches: 2 });
    }

    #[test]
    fn test_estimate_all() {
        let records = vec![record("X Y", &[1, -1]), record("X Z", &[-1, 1])];
        let observables = vec![
            Observable::from_pairs(&[(Pauli::X, 0)]),
            Observable::from_pairs(&[(Pauli::X, 0), (Pauli::Y, 1)]),
            Observable::from_pairs(&[(Pauli::Z, 0)]),
        ];

        let estimates = estimate_all(&records, &observables);
        assert_eq!(estimates[0], Estimate { sum: 0, matches: 2 });
        assert_eq!(estimates[1], Estimate { sum: -1, matches: 1 });
        assert_eq!(estimates[2].matches, 0);
        assert_eq!(estimates[1].to_string(), "-1.000000");
    }

    #[test]
    fn test_predict_rejects_size_mismatch() {
        let records = RecordSet {
            system_size: 2,
            records: vec![],
        };
        let observables = ObservableSet {
            system_size: 3,
            observables: vec![],
            weights: None,
        };
        assert_eq!(
            predict_observables(&records, &observables).unwrap_err(),
            ShadowError::SystemSizeMismatch {
                expected: 2,
                got: 3
            }
        );
    }
}
