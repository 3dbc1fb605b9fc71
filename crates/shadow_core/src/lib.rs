//! # Shadow Core
//!
//! Foundation types for classical-shadow measurement scheduling:
//! Pauli bases, sparse observables, measurement settings, and the plain-text
//! formats they are exchanged in.
//!
//! ## Gantree Architecture
//!
//! ```text
//! shadow_core // L0+L1+L2: Foundation + Observable + Format (완료)
//!     L0_Foundation // 기반 타입/상수/에러 (완료)
//!         CoreTypes // Pauli, Outcome (완료)
//!         Constants // 비무작위화/예측 상수 (완료)
//!         Errors // 에러 타입 (완료)
//!     L1_Observable // 관측량/측정 (완료)
//!         Observable // 희소 Pauli 문자열 (완료)
//!         Measurement // 라운드 기저/절차/결과 (완료)
//!     L2_Format // 텍스트 형식 (완료)
//!         TextFormats // 관측량/측정/부분계 파일 (완료)
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use shadow_core::prelude::*;
//!
//! let zz = Observable::uniform(Pauli::Z, &[0, 1]);
//! let setting: MeasurementSetting = "Z Z X".parse().unwrap();
//!
//! assert!(zz.validate(0, 3).is_ok());
//! assert!(zz.is_measured_by(&setting));
//! ```
//!
//! ## Observable Files
//!
//! ```rust
//! use shadow_core::format::parse_observables;
//!
//! let set = parse_observables("3\n2 X 0 X 1\n1 Z 2 2.0\n").unwrap();
//! assert_eq!(set.system_size, 3);
//! assert_eq!(set.observables.len(), 2);
//! assert_eq!(set.weights, Some(vec![1.0, 2.0]));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

// ============================================================================
// Module Declarations
// ============================================================================

/// Core types (Gantree: L0_Foundation → CoreTypes)
pub mod types;

/// Constants (Gantree: L0_Foundation → Constants)
pub mod constants;

/// Error types (Gantree: L0_Foundation → Errors)
pub mod error;

/// Pauli observables (Gantree: L1_Observable → Observable)
pub mod observable;

/// Settings, procedures, records (Gantree: L1_Observable → Measurement)
pub mod measurement;

/// Text formats (Gantree: L2_Format → TextFormats)
pub mod format;

// ============================================================================
// Re-exports
// ============================================================================

pub use constants::{derandomize, predict};
pub use error::{ShadowError, ShadowResult};
pub use format::{ObservableSet, RecordSet, SubsystemSet};
pub use measurement::{MeasurementProcedure, MeasurementRecord, MeasurementSetting};
pub use observable::{Observable, PauliTerm};
pub use types::{Outcome, Pauli, QubitId};

// ============================================================================
// Prelude
// ============================================================================

pub mod prelude {
    //! Convenient imports for common use cases
    //!
    //! ```rust
    //! use shadow_core::prelude::*;
    //! ```

    pub use crate::constants::{derandomize, predict};
    pub use crate::error::{ShadowError, ShadowResult};
    pub use crate::measurement::{MeasurementProcedure, MeasurementRecord, MeasurementSetting};
    pub use crate::observable::{Observable, PauliTerm};
    pub use crate::types::{Outcome, Pauli, QubitId};
}

// ============================================================================
// Version Information
// ============================================================================

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");

// ============================================================================
// Integration Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::format::{parse_observables, parse_records, write_observables};
    use super::prelude::*;

    #[test]
    fn test_observable_file_roundtrip() {
        let text = "5\n4 Y 0 Y 1 X 3 X 4\n3 X 0 X 1 Z 4\n";
        let set = parse_observables(text).unwrap();

        assert_eq!(set.observables.len(), 2);
        assert_eq!(set.observables[0].len(), 4);
        assert_eq!(set.observables[0].pauli_on(3), Some(Pauli::X));
        assert_eq!(write_observables(&set), text);
    }

    #[test]
    fn test_record_matches_observable() {
        let set = parse_records("3\nX 1 X -1 Z 1\nX 1 Y 1 Z 1\n").unwrap();
        let xx = Observable::uniform(Pauli::X, &[0, 1]);

        let matched: Vec<bool> = set
            .records
            .iter()
            .map(|r| xx.is_measured_by(r.setting()))
            .collect();
        assert_eq!(matched, vec![true, false]);
    }

    #[test]
    fn test_validation_classification() {
        let dup = Observable::from_pairs(&[(Pauli::Z, 2), (Pauli::X, 2)]);
        let err = dup.validate(0, 3).unwrap_err();
        assert!(err.is_validation_error());

        let err = parse_observables("3\n1 X\n").unwrap_err();
        assert!(err.is_format_error());
    }

    #[test]
    fn test_setting_covers_all_bases() {
        let setting: MeasurementSetting = Pauli::ALL.into_iter().collect();
        assert_eq!(setting.to_string(), "X Y Z");
    }
}
