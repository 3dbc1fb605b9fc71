//! Greedy basis selection for one qubit
//!
//! Gantree: L3_Derandomize → BasisSelector

use crate::cost::{BasisCosts, CostModel, ShiftAccumulator};
use crate::tracker::ConstraintTracker;
use shadow_core::{Pauli, QubitId};

/// Score every basis for `qubit`, commit the cheapest, and return it
/// Gantree: select_basis(tracker,model,q,shift,acc) -> Pauli // 탐욕 선택
///
/// Earlier qubits of the round must already be committed. Every trial
/// evaluation adds its `V / weight` terms to `accumulator`.
pub fn select_basis(
    tracker: &mut ConstraintTracker,
    model: &CostModel,
    qubit: QubitId,
    shift: f64,
    accumulator: &mut ShiftAccumulator,
) -> Pauli {
    let costs = score_bases(tracker, model, qubit, shift, accumulator);
    let best = costs.best();
    tracker.commit(qubit, best);
    best
}

/// Cost of each basis for `qubit`, leaving the tracker unchanged
pub fn score_bases(
    tracker: &mut ConstraintTracker,
    model: &CostModel,
    qubit: QubitId,
    shift: f64,
    accumulator: &mut ShiftAccumulator,
) -> BasisCosts {
    let mut costs = BasisCosts::default();
    for pauli in Pauli::ALL {
        tracker.probe(qubit, pauli);
        costs[pauli] = model.evaluate(tracker, shift, accumulator);
        tracker.revert(qubit, pauli);
    }
    costs
}

// ============================================================================
// Tests
// ============================================================================
