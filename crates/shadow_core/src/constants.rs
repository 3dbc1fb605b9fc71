//! Constants for the shadow toolkit
//!
//! Gantree: L0_Foundation → Constants
//!
//! Derandomization hyperparameters and prediction limits.

// ============================================================================
// Derandomization Constants
// Gantree: derandomize // 비무작위화 상수
// ============================================================================

pub mod derandomize {
    //! Parameters of the pessimistic cost used by the greedy scheduler

    /// Default learning-rate hyperparameter of the cost function
    /// Gantree: ETA_DEFAULT: f64 = 0.9
    pub const ETA_DEFAULT: f64 = 0.9;

    /// Multiplier of the conflict sentinel
    pub const SENTINEL_FACTOR: usize = 100;

    /// Padding added to the system size inside the conflict sentinel
    pub const SENTINEL_PADDING: usize = 10;

    /// Amount added to an observable's remaining-match count when a
    /// committed basis conflicts with it
    ///
    /// Always larger than any reachable match count, so a counter that has
    /// absorbed one sentinel never returns to zero within the round.
    #[inline]
    pub const fn sentinel(system_size: usize) -> usize {
        SENTINEL_FACTOR * (system_size + SENTINEL_PADDING)
    }

    /// nu = 1 - exp(-eta / 2)
    #[inline]
    pub fn nu(eta: f64) -> f64 {
        1.0 - (-eta / 2.0).exp()
    }
}

// ============================================================================
// Prediction Constants
// Gantree: predict // 예측 상수
// ============================================================================

pub mod predict {
    //! Limits for estimation from measurement records

    /// Largest subsystem accepted by the Rényi entropy predictor
    /// (the estimator tabulates 4^n Pauli patterns)
    pub const MAX_ENTROPY_SUBSYSTEM: usize = 10;

    /// Upper clamp on the estimated purity before taking the logarithm
    pub const PURITY_CEILING: f64 = 1.0 - 1e-9;
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_sentinel() {
        assert_eq!(derandomize::sentinel(0), 1000);
        assert_eq!(derandomize::sentinel(20), 3000);
        assert!(derandomize::sentinel(50) > 50);
    }

    #[test]
    fn test_nu() {
        let eta = derandomize::ETA_DEFAULT;
        assert_relative_eq!(derandomize::nu(eta), 0.362_371_848_378_226_7, epsilon = 1e-12);
        assert!(derandomize::nu(eta) > 0.0 && derandomize::nu(eta) < 1.0);
    }
}
