//! Validated scheduling input
//!
//! Gantree: L3_Derandomize → ScheduleProblem
//!
//! All input checks happen here, before any scheduling work starts.

use shadow_core::{Observable, ObservableSet, ShadowError, ShadowResult};

/// Observables, weights, and repetition target for one scheduling run
/// Gantree: ScheduleProblem // 입력 문제
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleProblem {
    observables: Vec<Observable>,
    weights: Vec<f64>,
    target_count: usize,
    system_size: usize,
}

impl ScheduleProblem {
    /// Validate and build a problem
    /// Gantree: new(obs,m,n,w) -> Result<Self> // 생성+검증
    ///
    /// `weights` defaults to 1.0 for every observable.
    pub fn new(
        observables: Vec<Observable>,
        target_count: usize,
        system_size: usize,
        weights: Option<Vec<f64>>,
    ) -> ShadowResult<Self> {
        if target_count == 0 {
            return Err(ShadowError::InvalidTargetCount);
        }
        if system_size == 0 {
            return Err(ShadowError::InvalidSystemSize);
        }

        let weights = match weights {
            Some(w) if w.len() != observables.len() => {
                return Err(ShadowError::WeightCountMismatch {
                    expected: observables.len(),
                    got: w.len(),
                });
            }
            Some(w) => w,
            None => vec![1.0; observables.len()],
        };

        for (i, &weight) in weights.iter().enumerate() {
            if !weight.is_finite() || weight < 0.0 {
                return Err(ShadowError::InvalidWeight {
                    observable: i,
                    weight,
                });
            }
        }

        for (i, observable) in observables.iter().enumerate() {
            observable.validate(i, system_size)?;
        }

        Ok(Self {
            observables,
            weights,
            target_count,
            system_size,
        })
    }

    /// Build from a parsed observable file
    pub fn from_set(set: ObservableSet, target_count: usize) -> ShadowResult<Self> {
        Self::new(set.observables, target_count, set.system_size, set.weights)
    }

    /// Observables to schedule
    pub fn observables(&self) -> &[Observable] {
        &self.observables
    }

    /// Per-observable weights
    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    /// Unweighted repetition target per observable
    pub fn target_count(&self) -> usize {
        self.target_count
    }

    /// Number of qubits
    pub fn system_size(&self) -> usize {
        self.system_size
    }

    /// Number of observables
    pub fn len(&self) -> usize {
        self.observables.len()
    }

    /// Check if there is nothing to schedule
    pub fn is_empty(&self) -> bool {
        self.observables.is_empty()
    }

    /// Effective target of observable `i`: floor(weight_i * target_count)
    pub fn target(&self, i: usize) -> usize {
        (self.weights[i] * self.target_count as f64).floor() as usize
    }

    /// Effective targets of all observables
    pub fn targets(&self) -> Vec<usize> {
        (0..self.len()).map(|i| self.target(i)).collect()
    }

    /// Default safety bound on the number of rounds
    pub fn default_round_cap(&self) -> usize {
        self.target_count.saturating_mul(self.observables.len())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use shadow_core::Pauli;

    fn zz() -> Observable {
        Observable::uniform(Pauli::Z, &[0, 1])
    }

    #[test]
    fn test_default_weights() {
        let problem = ScheduleProblem::new(vec![zz(), zz()], 10, 2, None).unwrap();
        assert_eq!(problem.weights(), &[1.0, 1.0]);
        assert_eq!(problem.targets(), vec![10, 10]);
        assert_eq!(problem.default_round_cap(), 20);
    }

    #[test]
    fn test_weighted_targets_floor() {
        let problem = ScheduleProblem::new(vec![zz(), zz()], 10, 2, Some(vec![0.25, 2.0])).unwrap();
        assert_eq!(problem.targets(), vec![2, 20]);
    }

    #[test]
    fn test_rejects_bad_sizes() {
        assert_eq!(
            ScheduleProblem::new(vec![zz()], 0, 2, None).unwrap_err(),
            ShadowError::InvalidTargetCount
        );
        assert_eq!(
            ScheduleProblem::new(vec![], 1, 0, None).unwrap_err(),
            ShadowError::InvalidSystemSize
        );
    }

    #[test]
    fn test_rejects_weight_mismatch() {
        let err = ScheduleProblem::new(vec![zz()], 1, 2, Some(vec![1.0, 1.0])).unwrap_err();
        assert_eq!(
            err,
            ShadowError::WeightCountMismatch {
                expected: 1,
                got: 2
            }
        );
    }

    #[test]
    fn test_rejects_negative_weight() {
        let err = ScheduleProblem::new(vec![zz()], 1, 2, Some(vec![-0.5])).unwrap_err();
        assert!(matches!(err, ShadowError::InvalidWeight { observable: 0, .. }));
    }

    #[test]
    fn test_rejects_bad_observable() {
        let err = ScheduleProblem::new(vec![zz()], 1, 1, None).unwrap_err();
        assert_eq!(
            err,
            ShadowError::QubitOutOfRange {
                qubit: 1,
                system_size: 1
            }
        );
    }
}
