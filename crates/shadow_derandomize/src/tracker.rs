//! Per-round constraint bookkeeping
//!
//! Gantree: L3_Derandomize → ConstraintTracker
//!
//! For every observable the tracker keeps two counters:
//!
//! - `satisfied`: rounds in which the observable was fully matched, carried
//!   across rounds and capped at the observable's target.
//! - `matches_needed`: factors still to be matched in the current round,
//!   reset to the observable's length at the start of each round.
//!
//! A committed basis that conflicts with an observable adds a sentinel far
//! larger than any qubit count to `matches_needed`, so that counter can no
//! longer reach zero this round. Probing applies the same deltas as
//! committing and [`ConstraintTracker::revert`] undoes them exactly.

use crate::problem::ScheduleProblem;
use shadow_core::{derandomize, Pauli, QubitId};

/// Observable indices acting on one qubit, bucketed by required basis
type QubitIndex = [Vec<usize>; 3];

/// Constraint tracker
/// Gantree: ConstraintTracker // 제약 추적
#[derive(Debug, Clone)]
pub struct ConstraintTracker {
    system_size: usize,
    sentinel: usize,
    lengths: Vec<usize>,
    weights: Vec<f64>,
    targets: Vec<usize>,
    satisfied: Vec<usize>,
    matches_needed: Vec<usize>,
    acting_on: Vec<QubitIndex>,
}

impl ConstraintTracker {
    /// Create a tracker for a validated problem
    /// Gantree: new(problem) -> Self // 초기화
    pub fn new(problem: &ScheduleProblem) -> Self {
        let system_size = problem.system_size();
        let mut acting_on: Vec<QubitIndex> = vec![Default::default(); system_size];
        for (i, observable) in problem.observables().iter().enumerate() {
            for term in observable.iter() {
                acting_on[term.qubit][term.pauli.index()].push(i);
            }
        }

        let lengths: Vec<usize> = problem.observables().iter().map(|o| o.len()).collect();

        Self {
            system_size,
            sentinel: derandomize::sentinel(system_size),
            matches_needed: lengths.clone(),
            lengths,
            weights: problem.weights().to_vec(),
            targets: problem.targets(),
            satisfied: vec![0; problem.len()],
            acting_on,
        }
    }

    // ========================================================================
    // Round Operations
    // ========================================================================

    /// Start a new round: every observable needs all of its factors again
    /// Gantree: reset_round() // 라운드 초기화
    pub fn reset_round(&mut self) {
        self.matches_needed.copy_from_slice(&self.lengths);
    }

    /// Tentatively measure `qubit` in `basis`
    /// Gantree: probe(q,P) // 시험 적용
    ///
    /// Each qubit may be probed or committed at most once per round before
    /// being reverted.
    pub fn probe(&mut self, qubit: QubitId, basis: Pauli) {
        self.apply(qubit, basis, true);
    }

    /// Undo a [`probe`](Self::probe) with the same arguments
    /// Gantree: revert(q,P) // 되돌리기
    pub fn revert(&mut self, qubit: QubitId, basis: Pauli) {
        self.apply(qubit, basis, false);
    }

    /// Measure `qubit` in `basis` for the rest of the round
    /// Gantree: commit(q,P) // 확정
    pub fn commit(&mut self, qubit: QubitId, basis: Pauli) {
        self.apply(qubit, basis, true);
    }

    /// Credit every observable fully matched this round
    /// Gantree: close_round() -> Vec<usize> // 라운드 종료
    ///
    /// Returns the indices of the observables credited.
    pub fn close_round(&mut self) -> Vec<usize> {
        let mut credited = Vec::new();
        for i in 0..self.lengths.len() {
            if self.matches_needed[i] == 0 && self.satisfied[i] < self.targets[i] {
                self.satisfied[i] += 1;
                credited.push(i);
            }
        }
        credited
    }

    fn apply(&mut self, qubit: QubitId, basis: Pauli, forward: bool) {
        for pauli in Pauli::ALL {
            for &i in &self.acting_on[qubit][pauli.index()] {
                // Observables at target are frozen
                if self.satisfied[i] >= self.targets[i] {
                    continue;
                }
                let needed = &mut self.matches_needed[i];
                match (pauli == basis, forward) {
                    (true, true) => *needed -= 1,
                    (true, false) => *needed += 1,
                    (false, true) => *needed += self.sentinel,
                    (false, false) => *needed -= self.sentinel,
                }
            }
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Number of qubits
    pub fn system_size(&self) -> usize {
        self.system_size
    }

    /// Number of observables
    pub fn len(&self) -> usize {
        self.lengths.len()
    }

    /// Check if no observables are tracked
    pub fn is_empty(&self) -> bool {
        self.lengths.is_empty()
    }

    /// Remaining factors to match for observable `i` this round
    pub fn matches_needed(&self, i: usize) -> usize {
        self.matches_needed[i]
    }

    /// Rounds in which observable `i` has been fully matched
    pub fn satisfied_count(&self, i: usize) -> usize {
        self.satisfied[i]
    }

    /// All satisfied counts
    pub fn satisfied_counts(&self) -> &[usize] {
        &self.satisfied
    }

    /// Effective target of observable `i`
    pub fn target(&self, i: usize) -> usize {
        self.targets[i]
    }

    /// All effective targets
    pub fn targets(&self) -> &[usize] {
        &self.targets
    }

    /// Weight of observable `i`
    pub fn weight(&self, i: usize) -> f64 {
        self.weights[i]
    }

    /// Length (number of factors) of observable `i`
    pub fn observable_len(&self, i: usize) -> usize {
        self.lengths[i]
    }

    /// Check if observable `i` still needs rounds
    #[inline]
    pub fn is_active(&self, i: usize) -> bool {
        self.satisfied[i] < self.targets[i]
    }

    /// Number of observables that reached their target
    pub fn num_satisfied(&self) -> usize {
        (0..self.len()).filter(|&i| !self.is_active(i)).count()
    }

    /// Check if every observable reached its target
    pub fn all_satisfied(&self) -> bool {
        (0..self.len()).all(|i| !self.is_active(i))
    }
}

// ============================================================================
// Tests
// ============================================================================
