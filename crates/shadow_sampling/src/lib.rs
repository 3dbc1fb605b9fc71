//! # Shadow Sampling
//!
//! Randomized measurement procedures and synthetic observable sets.
//!
//! ## Gantree Architecture
//!
//! ```text
//! shadow_sampling // L4: Sampling (완료)
//!     L4_Sampling // 무작위 측정/관측량 생성 (완료)
//!         RandomSampler // 균등 무작위 기저 (완료)
//!         Generators // 상관자/최근접/k-국소 관측량 (완료)
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use shadow_sampling::prelude::*;
//!
//! let procedure = RandomSampler::with_seed(42).sample(100, 8);
//! assert_eq!(procedure.len(), 100);
//!
//! let observables = ObservableGenerator::new().correlator_suite(8);
//! assert!(!observables.is_empty());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

// ============================================================================
// Module Declarations
// ============================================================================

/// Random bases (Gantree: L4_Sampling → RandomSampler)
pub mod random;

/// Observable families (Gantree: L4_Sampling → Generators)
pub mod generators;

// ============================================================================
// Re-exports
// ============================================================================

pub use generators::ObservableGenerator;
pub use random::RandomSampler;

// ============================================================================
// Prelude
// ============================================================================

pub mod prelude {
    //! Convenient imports for common use cases
    //!
    //! ```rust
    //! use shadow_sampling::prelude::*;
    //! ```

    pub use crate::generators::ObservableGenerator;
    pub use crate::random::RandomSampler;
}

// ============================================================================
// Integration Tests
// ============================================================================
