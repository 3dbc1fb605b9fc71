//! # Shadow Derandomize
//!
//! Greedy derandomized scheduling of Pauli measurements. Given weighted
//! Pauli observables, emits a deterministic sequence of per-qubit bases such
//! that every observable is fully measured in a target number of rounds,
//! using a pessimistic-estimator cost to pick each qubit's basis.
//!
//! ## Gantree Architecture
//!
//! ```text
//! shadow_derandomize // L3: Derandomized scheduling (완료)
//!     L3_Derandomize // 비무작위화 (완료)
//!         DerandomizeConfig // eta, round cap (완료)
//!         ScheduleProblem // 입력 검증 (완료)
//!         ConstraintTracker // 라운드별 제약 추적 (완료)
//!         CostModel // 비관적 추정 비용 (완료)
//!         BasisSelector // 큐비트별 탐욕 선택 (완료)
//!         Derandomizer // 라운드 제어 (완료)
//!         Schedule // 결과 (완료)
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use shadow_derandomize::prelude::*;
//! use shadow_core::{Observable, Pauli};
//!
//! let observables = vec![
//!     Observable::uniform(Pauli::Z, &[0, 1]),
//!     Observable::uniform(Pauli::X, &[1, 2]),
//! ];
//!
//! let result = schedule(observables, 3, 3, None).unwrap();
//! assert!(result.is_complete());
//! print!("{}", result.procedure);
//! ```
//!
//! ## Step-by-step
//!
//! ```rust
//! use shadow_derandomize::prelude::*;
//! use shadow_core::{Observable, Pauli};
//!
//! let problem = ScheduleProblem::new(
//!     vec![Observable::from_pairs(&[(Pauli::Y, 0)])],
//!     2,
//!     2,
//!     None,
//! )
//! .unwrap();
//! let config = DerandomizeConfig::new().with_eta(0.5);
//!
//! let mut engine = Derandomizer::new(&problem, &config).unwrap();
//! while let Some(setting) = engine.next_round() {
//!     assert_eq!(setting.to_string(), "Y X");
//! }
//! assert_eq!(engine.finish().rounds(), 2);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

// ============================================================================
// Module Declarations
// ============================================================================

/// Configuration (Gantree: L3_Derandomize → DerandomizeConfig)
pub mod config;

/// Validated input (Gantree: L3_Derandomize → ScheduleProblem)
pub mod problem;

/// Constraint tracking (Gantree: L3_Derandomize → ConstraintTracker)
pub mod tracker;

/// Cost evaluation (Gantree: L3_Derandomize → CostModel)
pub mod cost;

/// Greedy basis selection (Gantree: L3_Derandomize → BasisSelector)
pub mod selector;

/// Round controller (Gantree: L3_Derandomize → Derandomizer)
pub mod scheduler;

/// Scheduling result (Gantree: L3_Derandomize → Schedule)
pub mod result;

// ============================================================================
// Re-exports
// ============================================================================

pub use config::DerandomizeConfig;
pub use cost::{BasisCosts, CostModel, ShiftAccumulator};
pub use problem::ScheduleProblem;
pub use result::{Schedule, ScheduleStatus};
pub use scheduler::{schedule, schedule_with, Derandomizer};
pub use selector::{score_bases, select_basis};
pub use tracker::ConstraintTracker;

// ============================================================================
// Prelude
// ============================================================================

pub mod prelude {
    //! Convenient imports for common use cases
    //!
    //! ```rust
    //! use shadow_derandomize::prelude::*;
    //! ```

    pub use crate::config::DerandomizeConfig;
    pub use crate::problem::ScheduleProblem;
    pub use crate::result::{Schedule, ScheduleStatus};
    pub use crate::scheduler::{schedule, schedule_with, Derandomizer};
}

// ============================================================================
// Integration Tests
// ============================================================================
