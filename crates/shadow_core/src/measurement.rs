//! Measurement settings, procedures, and records
//!
//! Gantree: L1_Observable → Measurement
//!
//! A [`MeasurementSetting`] fixes one basis per qubit for a single round,
//! a [`MeasurementProcedure`] is the ordered list of rounds to run, and a
//! [`MeasurementRecord`] is a setting together with the observed outcomes.

use crate::error::{ShadowError, ShadowResult};
use crate::types::{Outcome, Pauli, QubitId};
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// MeasurementSetting
// ============================================================================

/// One basis per qubit for a single round
/// Gantree: MeasurementSetting // 라운드 기저
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct MeasurementSetting {
    bases: Vec<Pauli>,
}

impl MeasurementSetting {
    /// Create from a basis vector
    pub fn new(bases: Vec<Pauli>) -> Self {
        Self { bases }
    }

    /// Same basis on every qubit
    pub fn uniform(pauli: Pauli, system_size: usize) -> Self {
        Self {
            bases: vec![pauli; system_size],
        }
    }

    /// Number of qubits
    pub fn len(&self) -> usize {
        self.bases.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.bases.is_empty()
    }

    /// Basis on a qubit
    pub fn get(&self, qubit: QubitId) -> Option<Pauli> {
        self.bases.get(qubit).copied()
    }

    /// Underlying bases
    pub fn bases(&self) -> &[Pauli] {
        &self.bases
    }

    /// Iterate over bases
    pub fn iter(&self) -> impl Iterator<Item = &Pauli> {
        self.bases.iter()
    }

    /// Append the basis for the next qubit
    pub fn push(&mut self, pauli: Pauli) {
        self.bases.push(pauli);
    }
}

impl From<Vec<Pauli>> for MeasurementSetting {
    fn from(bases: Vec<Pauli>) -> Self {
        Self::new(bases)
    }
}

impl FromIterator<Pauli> for MeasurementSetting {
    fn from_iter<I: IntoIterator<Item = Pauli>>(iter: I) -> Self {
        Self {
            bases: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for MeasurementSetting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, p) in self.bases.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", p)?;
        }
        Ok(())
    }
}

impl std::str::FromStr for MeasurementSetting {
    type Err = ShadowError;

    /// Parse whitespace-separated bases, e.g. `"X Y Z"`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.split_whitespace().map(str::parse::<Pauli>).collect()
    }
}

// ============================================================================
// MeasurementProcedure
// ============================================================================

/// Ordered list of measurement settings, one per round
/// Gantree: MeasurementProcedure // 측정 절차
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MeasurementProcedure {
    rounds: Vec<MeasurementSetting>,
}

impl MeasurementProcedure {
    /// Create an empty procedure
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with room for `rounds` settings
    pub fn with_capacity(rounds: usize) -> Self {
        Self {
            rounds: Vec::with_capacity(rounds),
        }
    }

    /// Append a round
    pub fn push(&mut self, setting: MeasurementSetting) {
        self.rounds.push(setting);
    }

    /// Number of rounds
    pub fn len(&self) -> usize {
        self.rounds.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.rounds.is_empty()
    }

    /// Get a round
    pub fn get(&self, round: usize) -> Option<&MeasurementSetting> {
        self.rounds.get(round)
    }

    /// All rounds in emission order
    pub fn rounds(&self) -> &[MeasurementSetting] {
        &self.rounds
    }

    /// Iterate over rounds
    pub fn iter(&self) -> impl Iterator<Item = &MeasurementSetting> {
        self.rounds.iter()
    }

    /// Consume into the round vector
    pub fn into_rounds(self) -> Vec<MeasurementSetting> {
        self.rounds
    }
}

impl FromIterator<MeasurementSetting> for MeasurementProcedure {
    fn from_iter<I: IntoIterator<Item = MeasurementSetting>>(iter: I) -> Self {
        Self {
            rounds: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a MeasurementProcedure {
    type Item = &'a MeasurementSetting;
    type IntoIter = std::slice::Iter<'a, MeasurementSetting>;

    fn into_iter(self) -> Self::IntoIter {
        self.rounds.iter()
    }
}

impl fmt::Display for MeasurementProcedure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for setting in &self.rounds {
            writeln!(f, "{}", setting)?;
        }
        Ok(())
    }
}

// ============================================================================
// MeasurementRecord
// ============================================================================

/// A measured round: the setting used and one outcome per qubit
/// Gantree: MeasurementRecord // 측정 결과
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeasurementRecord {
    setting: MeasurementSetting,
    outcomes: Vec<Outcome>,
}

impl MeasurementRecord {
    /// Create a record, checking that every qubit has an outcome
    pub fn new(setting: MeasurementSetting, outcomes: Vec<Outcome>) -> ShadowResult<Self> {
        if setting.len() != outcomes.len() {
            return Err(ShadowError::RecordLengthMismatch {
                bases: setting.len(),
                outcomes: outcomes.len(),
            });
        }
        Ok(Self { setting, outcomes })
    }

    /// Number of qubits
    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    /// Setting this record was measured in
    pub fn setting(&self) -> &MeasurementSetting {
        &self.setting
    }

    /// Outcomes in qubit order
    pub fn outcomes(&self) -> &[Outcome] {
        &self.outcomes
    }

    /// Basis and outcome on a qubit
    pub fn get(&self, qubit: QubitId) -> Option<(Pauli, Outcome)> {
        Some((self.setting.get(qubit)?, *self.outcomes.get(qubit)?))
    }
}

impl fmt::Display for MeasurementRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (p, o)) in self.setting.iter().zip(&self.outcomes).enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{} {}", p, o)?;
        }
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_setting_display_parse() {
        let setting: MeasurementSetting = "X Y Z Z".parse().unwrap();
        assert_eq!(setting.len(), 4);
        assert_eq!(setting.get(1), Some(Pauli::Y));
        assert_eq!(setting.to_string(), "X Y Z Z");
        assert!("X Q".parse::<MeasurementSetting>().is_err());
    }

    #[test]
    fn test_setting_uniform() {
        let setting = MeasurementSetting::uniform(Pauli::Z, 3);
        assert_eq!(setting.to_string(), "Z Z Z");
    }

    #[test]
    fn test_procedure_display() {
        let procedure: MeasurementProcedure = vec![
            MeasurementSetting::uniform(Pauli::X, 2),
            MeasurementSetting::uniform(Pauli::Y, 2),
        ]
        .into_iter()
        .collect();
        assert_eq!(procedure.len(), 2);
        assert_eq!(procedure.to_string(), "X X\nY Y\n");
    }

    #[test]
    fn test_record_length_mismatch() {
        let setting = MeasurementSetting::uniform(Pauli::X, 3);
        let err = MeasurementRecord::new(setting, vec![Outcome::Plus]).unwrap_err();
        assert_eq!(
            err,
            ShadowError::RecordLengthMismatch {
                bases: 3,
                outcomes: 1
            }
        );
    }

    #[test]
    fn test_record_get_and_display() {
        let setting: MeasurementSetting = "X Z".parse().unwrap();
        let record = MeasurementRecord::new(setting, vec![Outcome::Plus, Outcome::Minus]).unwrap();
        assert_eq!(record.get(1), Some((Pauli::Z, Outcome::Minus)));
        assert_eq!(record.get(2), None);
        assert_eq!(record.to_string(), "X 1 Z -1");
    }
}
