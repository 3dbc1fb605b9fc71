//! Pessimistic cost of a partial round
//!
//! Gantree: L3_Derandomize → CostModel
//!
//! For each active observable with `m` banked rounds and `k` factors still
//! to match this round the potential is
//!
//! ```text
//! V = (eta / 2) * m - ln(1 - nu / 3^k)      if k <= system_size
//! V = (eta / 2) * m                         otherwise (blocked this round)
//! ```
//!
//! with `nu = 1 - exp(-eta / 2)`. The cost is `sum_i exp(-V_i / w_i - shift)`.
//! Every `V_i / w_i` visited is also added, one term at a time and in
//! observable order, to a [`ShiftAccumulator`] shared by the whole round; its
//! flat mean becomes the next round's shift.

use crate::tracker::ConstraintTracker;
use shadow_core::{derandomize, Pauli};
use std::ops::{Index, IndexMut};

/// Cost model with the log-barrier table precomputed for every reachable k
/// Gantree: CostModel // 비용 함수
#[derive(Debug, Clone)]
pub struct CostModel {
    half_eta: f64,
    system_size: usize,
    barrier: Vec<f64>,
}

impl CostModel {
    /// Create a cost model
    pub fn new(eta: f64, system_size: usize) -> Self {
        let nu = derandomize::nu(eta);
        let barrier = (0..=system_size)
            .map(|k| -(1.0 - nu / 3f64.powi(k as i32)).ln())
            .collect();

        Self {
            half_eta: eta / 2.0,
            system_size,
            barrier,
        }
    }

    /// Potential V of one observable
    /// Gantree: potential(m,k) -> f64 // V
    #[inline]
    pub fn potential(&self, measured: usize, matches_needed: usize) -> f64 {
        let banked = self.half_eta * measured as f64;
        if matches_needed > self.system_size {
            banked
        } else {
            banked + self.barrier[matches_needed]
        }
    }

    /// Evaluate the cost of the tracker's current state, adding each active
    /// observable's `V / weight` to `accumulator`
    /// Gantree: evaluate(tracker,shift,acc) -> f64 // 비용 평가
    pub fn evaluate(
        &self,
        tracker: &ConstraintTracker,
        shift: f64,
        accumulator: &mut ShiftAccumulator,
    ) -> f64 {
        let mut cost = 0.0;
        for i in 0..tracker.len() {
            if !tracker.is_active(i) {
                continue;
            }
            let v = self.potential(tracker.satisfied_count(i), tracker.matches_needed(i));
            let weight = tracker.weight(i);

            cost += (-v / weight - shift).exp();
            accumulator.add(v / weight);
        }
        cost
    }
}

// ============================================================================
// Shift Accumulator
// ============================================================================

/// Flat running mean of every `V / weight` term seen during a round
/// Gantree: ShiftAccumulator // shift 누적
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ShiftAccumulator {
    sum: f64,
    count: usize,
}

impl ShiftAccumulator {
    /// Create an empty accumulator
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one term to the running sum
    #[inline]
    pub fn add(&mut self, value: f64) {
        self.sum += value;
        self.count += 1;
    }

    /// Number of terms added
    pub fn count(&self) -> usize {
        self.count
    }

    /// Mean so far, 0 when nothing was added
    pub fn mean(&self) -> f64 {
        if self.count > 0 {
            self.sum / self.count as f64
        } else {
            0.0
        }
    }

    /// Return the mean and start over
    pub fn take_mean(&mut self) -> f64 {
        let mean = self.mean();
        *self = Self::default();
        mean
    }
}

// ============================================================================
// Per-Basis Costs
// ============================================================================

/// Cost of each candidate basis for one qubit
/// Gantree: BasisCosts // [X,Y,Z] 비용
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BasisCosts([f64; 3]);

impl BasisCosts {
    /// Lowest cost, first in X, Y, Z order on ties
    pub fn best(&self) -> Pauli {
        let min = self.0.iter().copied().fold(f64::INFINITY, f64::min);
        Pauli::ALL
            .into_iter()
            .find(|&p| !(min < self[p]))
            .unwrap_or(Pauli::X)
    }
}

impl Index<Pauli> for BasisCosts {
    type Output = f64;

    fn index(&self, pauli: Pauli) -> &f64 {
        &self.0[pauli.index()]
    }
}

impl IndexMut<Pauli> for BasisCosts {
    fn index_mut(&mut self, pauli: Pauli) -> &mut f64 {
        &mut self.0[pauli.index()]
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::problem::ScheduleProblem;
    use approx::assert_relative_eq;
    use shadow_core::Observable;

    const ETA: f64 = 0.9;

    #[test]
    fn test_potential_branches() {
        let model = CostModel::new(ETA, 4);
        let nu = 1.0 - (-ETA / 2.0f64).exp();

        // k = 0: the barrier term equals eta / 2
        assert_relative_eq!(model.potential(0, 0), ETA / 2.0, epsilon = 1e-12);
        assert_relative_eq!(
            model.potential(3, 2),
            ETA / 2.0 * 3.0 - (1.0 - nu / 9.0).ln(),
            epsilon = 1e-12
        );
        // Blocked: barrier omitted
        assert_relative_eq!(model.potential(3, 5), ETA / 2.0 * 3.0, epsilon = 1e-12);
        assert_relative_eq!(
            model.potential(1, derandomize::sentinel(4)),
            ETA / 2.0,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_potential_decreases_with_remaining_matches() {
        let model = CostModel::new(ETA, 6);
        for k in 0..6 {
            assert!(model.potential(0, k) > model.potential(0, k + 1));
        }
        assert!(model.potential(0, 6) > model.potential(0, 7));
    }

    #[test]
    fn test_evaluate_skips_satisfied() {
        let problem = ScheduleProblem::new(
            vec![
                Observable::from_pairs(&[(Pauli::Z, 0)]),
                Observable::from_pairs(&[(Pauli::X, 1)]),
            ],
            1,
            2,
            Some(vec![1.0, 0.0]),
        )
        .unwrap();
        let tracker = ConstraintTracker::new(&problem);
        let model = CostModel::new(ETA, 2);

        let mut acc = ShiftAccumulator::new();
        let cost = model.evaluate(&tracker, 0.0, &mut acc);
        assert_eq!(acc.count(), 1);
        let v = model.potential(0, 1);
        assert_relative_eq!(acc.mean(), v, epsilon = 1e-12);
        assert_relative_eq!(cost, (-v).exp(), epsilon = 1e-12);
    }

    #[test]
    fn test_evaluate_weight_and_shift() {
        let problem = ScheduleProblem::new(
            vec![Observable::from_pairs(&[(Pauli::Z, 0), (Pauli::Z, 1)])],
            4,
            2,
            Some(vec![2.0]),
        )
        .unwrap();
        let tracker = ConstraintTracker::new(&problem);
        let model = CostModel::new(ETA, 2);

        let v = model.potential(0, 2);
        let mut acc = ShiftAccumulator::new();
        let cost = model.evaluate(&tracker, 0.25, &mut acc);
        assert_relative_eq!(cost, (-v / 2.0 - 0.25).exp(), epsilon = 1e-12);
        assert_relative_eq!(acc.mean(), v / 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_shift_accumulator() {
        let mut acc = ShiftAccumulator::new();
        assert_eq!(acc.mean(), 0.0);

        for value in [3.0, 0.0, 1.0, 0.0] {
            acc.add(value);
        }
        assert_eq!(acc.count(), 4);
        assert_relative_eq!(acc.take_mean(), 1.0);
        assert_eq!(acc, ShiftAccumulator::default());
    }

    #[test]
    fn test_evaluations_share_one_running_sum() {
        let problem = ScheduleProblem::new(
            vec![
                Observable::from_pairs(&[(Pauli::Z, 0)]),
                Observable::from_pairs(&[(Pauli::X, 0), (Pauli::Y, 1)]),
                Observable::from_pairs(&[(Pauli::Y, 1)]),
            ],
            3,
            2,
            Some(vec![1.0, 0.7, 1.3]),
        )
        .unwrap();
        let mut tracker = ConstraintTracker::new(&problem);
        let model = CostModel::new(ETA, 2);

        // Two evaluations in a row, then the same terms added one by one
        let mut acc = ShiftAccumulator::new();
        model.evaluate(&tracker, 0.0, &mut acc);
        tracker.probe(0, Pauli::X);
        model.evaluate(&tracker, 0.0, &mut acc);
        tracker.revert(0, Pauli::X);

        let mut expected = ShiftAccumulator::new();
        for (m, k, w) in [(0, 1, 1.0), (0, 2, 0.7), (0, 1, 1.3)] {
            expected.add(model.potential(m, k) / w);
        }
        for (m, k, w) in [(0, derandomize::sentinel(2) + 1, 1.0), (0, 1, 0.7), (0, 1, 1.3)] {
            expected.add(model.potential(m, k) / w);
        }
        assert_eq!(acc.count(), 6);
        assert_eq!(acc, expected);
    }

    #[test]
    fn test_basis_costs_tie_break() {
        let mut costs = BasisCosts::default();
        assert_eq!(costs.best(), Pauli::X);

        costs[Pauli::X] = 2.0;
        costs[Pauli::Y] = 1.0;
        costs[Pauli::Z] = 1.0;
        assert_eq!(costs.best(), Pauli::Y);

        costs[Pauli::Z] = 0.5;
        assert_eq!(costs.best(), Pauli::Z);
    }
}
