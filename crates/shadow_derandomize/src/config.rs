//! Derandomizer configuration
//!
//! Gantree: L3_Derandomize → DerandomizeConfig
//!
//! Tunables of the greedy scheduler. Defaults reproduce the canonical
//! schedule; JSON files may override any subset of fields.

use serde::{Deserialize, Serialize};
use shadow_core::{derandomize, ShadowResult};
use std::fmt;
use std::path::Path;

/// Derandomizer configuration
/// Gantree: DerandomizeConfig // 설정
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DerandomizeConfig {
    /// Cost hyperparameter
    /// Gantree: eta: f64 // 하이퍼파라미터 (0.9)
    pub eta: f64,

    /// Optional tighter bound on the number of rounds
    /// Gantree: round_cap: Option<usize> // 라운드 상한
    ///
    /// The effective cap is never larger than
    /// `target_count * number_of_observables`.
    pub round_cap: Option<usize>,
}

impl DerandomizeConfig {
    // ========================================================================
    // Constructors
    // ========================================================================

    /// Create default configuration
    pub fn new() -> Self {
        Self {
            eta: derandomize::ETA_DEFAULT,
            round_cap: None,
        }
    }

    /// Load from a JSON string; missing fields keep their defaults
    pub fn from_json_str(json: &str) -> ShadowResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load from a JSON file
    pub fn from_json_file(path: impl AsRef<Path>) -> ShadowResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    // ========================================================================
    // Builder Methods
    // ========================================================================

    /// Set eta
    pub fn with_eta(mut self, eta: f64) -> Self {
        self.eta = eta;
        self
    }

    /// Set round cap
    pub fn with_round_cap(mut self, cap: usize) -> Self {
        self.round_cap = Some(cap);
        self
    }

    // ========================================================================
    // Derived Values
    // ========================================================================

    /// Effective cap for a problem whose default bound is `default_cap`
    pub fn effective_round_cap(&self, default_cap: usize) -> usize {
        self.round_cap
            .map_or(default_cap, |cap| cap.min(default_cap))
    }

    // ========================================================================
    // Validation
    // ========================================================================

    /// Validate configuration
    /// Gantree: validate(&self) -> Result // 검증
    pub fn validate(&self) -> Result<(), String> {
        if !self.eta.is_finite() || self.eta <= 0.0 {
            return Err(format!("eta must be finite and > 0, got {}", self.eta));
        }

        if self.round_cap == Some(0) {
            return Err("round_cap must be > 0".to_string());
        }

        Ok(())
    }
}

impl Default for DerandomizeConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for DerandomizeConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.round_cap {
            Some(cap) => write!(f, "DerandomizeConfig(eta={:.3}, cap={})", self.eta, cap),
            None => write!(f, "DerandomizeConfig(eta={:.3}, cap=auto)", self.eta),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
