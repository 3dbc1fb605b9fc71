//! Round controller for derandomized scheduling
//!
//! Gantree: L3_Derandomize → Derandomizer
//!
//! Each round resets the tracker, greedily commits a basis for every qubit in
//! increasing index order, credits fully matched observables, and emits the
//! round's setting. The run stops once every observable reached its target
//! or the round cap is hit.

use crate::config::DerandomizeConfig;
use crate::cost::{CostModel, ShiftAccumulator};
use crate::problem::ScheduleProblem;
use crate::result::{Schedule, ScheduleStatus};
use crate::selector::select_basis;
use crate::tracker::ConstraintTracker;
use log::{debug, info, warn};
use shadow_core::{
    MeasurementProcedure, MeasurementSetting, Observable, ShadowError, ShadowResult,
};

/// Derandomized scheduler
/// Gantree: Derandomizer // 비무작위화 엔진
#[derive(Debug, Clone)]
pub struct Derandomizer {
    tracker: ConstraintTracker,
    model: CostModel,
    accumulator: ShiftAccumulator,
    procedure: MeasurementProcedure,
    round_cap: usize,
}

impl Derandomizer {
    // ========================================================================
    // Constructor
    // ========================================================================

    /// Create a scheduler for a validated problem
    pub fn new(problem: &ScheduleProblem, config: &DerandomizeConfig) -> ShadowResult<Self> {
        config.validate().map_err(ShadowError::ConfigError)?;

        let round_cap = config.effective_round_cap(problem.default_round_cap());
        debug!(
            "Derandomizing {} observables on {} qubits: {}, round cap {}",
            problem.len(),
            problem.system_size(),
            config,
            round_cap
        );

        Ok(Self {
            tracker: ConstraintTracker::new(problem),
            model: CostModel::new(config.eta, problem.system_size()),
            accumulator: ShiftAccumulator::new(),
            procedure: MeasurementProcedure::with_capacity(round_cap.min(1024)),
            round_cap,
        })
    }

    // ========================================================================
    // Main Loop
    // ========================================================================

    /// Check whether the run has ended
    pub fn is_done(&self) -> bool {
        self.tracker.all_satisfied() || self.procedure.len() >= self.round_cap
    }

    /// Run one round and return its setting, or `None` once done
    /// Gantree: next_round() -> Option<Setting> // 라운드 실행
    ///
    /// Completion is checked before the round, so all-zero targets emit no
    /// round at all, where the canonical procedure emits one.
    pub fn next_round(&mut self) -> Option<&MeasurementSetting> {
        if self.is_done() {
            return None;
        }

        let shift = self.accumulator.take_mean();
        self.tracker.reset_round();

        let mut setting = MeasurementSetting::new(Vec::with_capacity(self.tracker.system_size()));
        for qubit in 0..self.tracker.system_size() {
            setting.push(select_basis(
                &mut self.tracker,
                &self.model,
                qubit,
                shift,
                &mut self.accumulator,
            ));
        }

        let credited = self.tracker.close_round();
        self.procedure.push(setting);
        debug!(
            "[round {}] {} credited, {}/{} observables done",
            self.procedure.len(),
            credited.len(),
            self.tracker.num_satisfied(),
            self.tracker.len()
        );

        self.procedure.rounds().last()
    }

    /// Run to completion
    /// Gantree: run() -> Schedule // 전체 실행
    pub fn run(mut self) -> Schedule {
        while self.next_round().is_some() {}
        self.finish()
    }

    /// Stop and package what has been emitted so far
    pub fn finish(self) -> Schedule {
        let status = if self.tracker.all_satisfied() {
            ScheduleStatus::Complete
        } else {
            ScheduleStatus::RoundCapReached
        };

        let schedule = Schedule {
            satisfied: self.tracker.satisfied_counts().to_vec(),
            targets: self.tracker.targets().to_vec(),
            procedure: self.procedure,
            round_cap: self.round_cap,
            status,
        };

        match status {
            ScheduleStatus::Complete => info!("{}", schedule),
            ScheduleStatus::RoundCapReached => warn!(
                "Round cap {} reached with {} observables short of target",
                schedule.round_cap,
                schedule.unsatisfied().len()
            ),
        }
        schedule
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Constraint state between rounds
    pub fn tracker(&self) -> &ConstraintTracker {
        &self.tracker
    }

    /// Settings emitted so far
    pub fn procedure(&self) -> &MeasurementProcedure {
        &self.procedure
    }

    /// Shift the next round will use
    pub fn next_shift(&self) -> f64 {
        self.accumulator.mean()
    }

    /// Round cap in force
    pub fn round_cap(&self) -> usize {
        self.round_cap
    }
}

/// Schedule measurements for `observables` with the default configuration
/// Gantree: schedule(obs,m,n,w) -> Schedule // 진입점
///
/// Every observable with weight `w` ends up fully measured in at least
/// `floor(w * target_count)` rounds unless the round cap
/// (`target_count * observables.len()`) is reached first; the returned
/// [`Schedule::status`] tells the two apart.
pub fn schedule(
    observables: Vec<Observable>,
    target_count: usize,
    system_size: usize,
    weights: Option<Vec<f64>>,
) -> ShadowResult<Schedule> {
    let problem = ScheduleProblem::new(observables, target_count, system_size, weights)?;
    schedule_with(&problem, &DerandomizeConfig::default())
}

/// Schedule a validated problem with an explicit configuration
pub fn schedule_with(problem: &ScheduleProblem, config: &DerandomizeConfig) -> ShadowResult<Schedule> {
    Ok(Derandomizer::new(problem, config)?.run())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use shadow_core::Pauli;

    #[test]
    fn test_single_round_emits_required_bases() {
        let obs = Observable::from_pairs(&[(Pauli::Z, 0), (Pauli::X, 1), (Pauli::Y, 2)]);
        let result = schedule(vec![obs], 1, 3, None).unwrap();

        assert_eq!(result.rounds(), 1);
        assert_eq!(result.procedure.rounds()[0].to_string(), "Z X Y");
        assert!(result.is_complete());
    }

    #[test]
    fn test_next_round_stops_when_done() {
        let problem = ScheduleProblem::new(
            vec![Observable::from_pairs(&[(Pauli::Z, 0)])],
            2,
            1,
            None,
        )
        .unwrap();
        let mut engine = Derandomizer::new(&problem, &DerandomizeConfig::default()).unwrap();

        assert!(engine.next_round().is_some());
        assert!(engine.next_round().is_some());
        assert!(engine.is_done());
        assert!(engine.next_round().is_none());
        assert_eq!(engine.procedure().len(), 2);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let problem = ScheduleProblem::new(vec![], 1, 1, None).unwrap();
        let err = Derandomizer::new(&problem, &DerandomizeConfig::new().with_eta(-1.0)).unwrap_err();
        assert!(matches!(err, ShadowError::ConfigError(_)));
    }

    #[test]
    fn test_shift_is_zero_without_active_observables() {
        let problem = ScheduleProblem::new(
            vec![Observable::from_pairs(&[(Pauli::Z, 0)])],
            1,
            1,
            Some(vec![0.0]),
        )
        .unwrap();
        let engine = Derandomizer::new(&problem, &DerandomizeConfig::default()).unwrap();
        assert!(engine.is_done());
        assert_eq!(engine.next_shift(), 0.0);

        let result = engine.run();
        assert!(result.procedure.is_empty());
        assert!(result.is_complete());
    }

    #[test]
    fn test_shift_is_flat_mean_of_previous_round() {
        let observables = vec![
            Observable::from_pairs(&[(Pauli::Z, 1), (Pauli::X, 2)]),
            Observable::from_pairs(&[(Pauli::Z, 2), (Pauli::X, 0)]),
            Observable::from_pairs(&[(Pauli::X, 1), (Pauli::Y, 2), (Pauli::X, 0)]),
            Observable::from_pairs(&[(Pauli::Z, 2)]),
        ];
        let problem =
            ScheduleProblem::new(observables, 2, 3, Some(vec![1.0, 2.0, 1.0, 1.5])).unwrap();
        let mut engine = Derandomizer::new(&problem, &DerandomizeConfig::default()).unwrap();

        // One running sum over every V / w term of the round, in evaluation
        // then observable order. Summing per-evaluation partials first
        // lands a few ulps away (0.060256773022579146 after round 1).
        let expected = [
            0.06025677302257913,
            0.19150677302257912,
            0.3040067730225791,
            0.41650677302257905,
            0.5477567730225791,
            0.5751598154740044,
            0.628304792408255,
        ];
        assert_eq!(engine.next_shift(), 0.0);
        for (round, &shift) in expected.iter().enumerate() {
            assert!(engine.next_round().is_some());
            assert_eq!(engine.next_shift(), shift, "after round {}", round + 1);
        }
    }

    #[test]
    fn test_round_cap_override() {
        let observables = vec![
            Observable::from_pairs(&[(Pauli::Z, 0)]),
            Observable::from_pairs(&[(Pauli::X, 0)]),
        ];
        let problem = ScheduleProblem::new(observables, 1, 1, None).unwrap();

        let full = schedule_with(&problem, &DerandomizeConfig::default()).unwrap();
        assert_eq!(full.rounds(), 2);
        assert!(full.is_complete());

        let capped = schedule_with(&problem, &DerandomizeConfig::new().with_round_cap(1)).unwrap();
        assert_eq!(capped.rounds(), 1);
        assert_eq!(capped.status, ScheduleStatus::RoundCapReached);
        assert_eq!(capped.unsatisfied().len(), 1);
    }
}
