//! Pauli observables
//!
//! Gantree: L1_Observable → Observable
//!
//! An observable is a sparse Pauli string: a list of (basis, qubit)
//! requirements with identity on every unlisted qubit.

use crate::error::{ShadowError, ShadowResult};
use crate::measurement::MeasurementSetting;
use crate::types::{Pauli, QubitId};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// One non-identity factor of a Pauli string
/// Gantree: PauliTerm // (Pauli, qubit)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PauliTerm {
    /// Required basis
    pub pauli: Pauli,
    /// Qubit the basis is required on
    pub qubit: QubitId,
}

impl PauliTerm {
    /// Create a new term
    pub fn new(pauli: Pauli, qubit: QubitId) -> Self {
        Self { pauli, qubit }
    }
}

impl fmt::Display for PauliTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.pauli, self.qubit)
    }
}

/// Sparse multi-qubit Pauli observable
/// Gantree: Observable // 관측량
///
/// Terms keep their construction order. Range and duplicate checks need the
/// system size and are done by [`Observable::validate`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Observable {
    terms: Vec<PauliTerm>,
}

impl Observable {
    /// Create from terms
    pub fn new(terms: Vec<PauliTerm>) -> Self {
        Self { terms }
    }

    /// Create from (basis, qubit) pairs
    pub fn from_pairs(pairs: &[(Pauli, QubitId)]) -> Self {
        pairs
            .iter()
            .map(|&(pauli, qubit)| PauliTerm::new(pauli, qubit))
            .collect()
    }

    /// Same basis on every listed qubit
    pub fn uniform(pauli: Pauli, qubits: &[QubitId]) -> Self {
        qubits.iter().map(|&q| PauliTerm::new(pauli, q)).collect()
    }

    /// Number of non-identity factors (k for a k-local observable)
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Check if this is the identity
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Get all terms
    pub fn terms(&self) -> &[PauliTerm] {
        &self.terms
    }

    /// Iterate over terms
    pub fn iter(&self) -> impl Iterator<Item = &PauliTerm> {
        self.terms.iter()
    }

    /// Required basis on a qubit, if the observable acts on it
    pub fn pauli_on(&self, qubit: QubitId) -> Option<Pauli> {
        self.terms
            .iter()
            .find(|t| t.qubit == qubit)
            .map(|t| t.pauli)
    }

    /// Qubits the observable acts on, in term order
    pub fn support(&self) -> Vec<QubitId> {
        self.terms.iter().map(|t| t.qubit).collect()
    }

    /// Check whether a setting measures every factor in its required basis
    pub fn is_measured_by(&self, setting: &MeasurementSetting) -> bool {
        self.terms
            .iter()
            .all(|t| setting.get(t.qubit) == Some(t.pauli))
    }

    /// Validate against a system size
    /// Gantree: validate(idx,n) -> Result // 범위/중복 검증
    ///
    /// `index` is the observable's position in its list and only feeds the
    /// error message.
    pub fn validate(&self, index: usize, system_size: usize) -> ShadowResult<()> {
        let mut seen = HashSet::with_capacity(self.terms.len());
        for term in &self.terms {
            if term.qubit >= system_size {
                return Err(ShadowError::QubitOutOfRange {
                    qubit: term.qubit,
                    system_size,
                });
            }
            if !seen.insert(term.qubit) {
                return Err(ShadowError::DuplicateQubit {
                    observable: index,
                    qubit: term.qubit,
                });
            }
        }
        Ok(())
    }
}

impl FromIterator<PauliTerm> for Observable {
    fn from_iter<I: IntoIterator<Item = PauliTerm>>(iter: I) -> Self {
        Self {
            terms: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for Observable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.terms.is_empty() {
            return write!(f, "I");
        }
        for (i, term) in self.terms.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", term)?;
        }
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
