//! Scheduling result
//!
//! Gantree: L3_Derandomize → Schedule

use serde::{Deserialize, Serialize};
use shadow_core::MeasurementProcedure;
use std::fmt;

/// How a scheduling run ended
/// Gantree: ScheduleStatus // 종료 상태
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScheduleStatus {
    /// Every observable reached its target
    Complete,
    /// The round cap was hit first
    RoundCapReached,
}

/// Emitted procedure plus the bookkeeping needed to judge it
/// Gantree: Schedule // 스케줄 결과
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Schedule {
    /// Measurement settings in emission order
    pub procedure: MeasurementProcedure,

    /// Rounds in which each observable was fully matched (capped at target)
    pub satisfied: Vec<usize>,

    /// Effective per-observable targets
    pub targets: Vec<usize>,

    /// Round cap in force for the run
    pub round_cap: usize,

    /// Termination reason
    pub status: ScheduleStatus,
}

impl Schedule {
    /// Number of emitted rounds
    pub fn rounds(&self) -> usize {
        self.procedure.len()
    }

    /// Check if every observable reached its target
    pub fn is_complete(&self) -> bool {
        self.status == ScheduleStatus::Complete
    }

    /// Indices of observables short of their target
    pub fn unsatisfied(&self) -> Vec<usize> {
        self.satisfied
            .iter()
            .zip(&self.targets)
            .enumerate()
            .filter(|(_, (s, t))| s < t)
            .map(|(i, _)| i)
            .collect()
    }

    /// Fraction of the summed targets that was reached
    pub fn coverage(&self) -> f64 {
        let total: usize = self.targets.iter().sum();
        if total == 0 {
            return 1.0;
        }
        self.satisfied.iter().sum::<usize>() as f64 / total as f64
    }
}

impl fmt::Display for Schedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Schedule({} rounds, {}/{} observables satisfied, {:?})",
            self.rounds(),
            self.satisfied.len() - self.unsatisfied().len(),
            self.satisfied.len(),
            self.status
        )
    }
}

// ============================================================================
// Tests
// ============================================================================
