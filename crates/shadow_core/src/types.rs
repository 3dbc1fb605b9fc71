//! Core types for the shadow toolkit
//!
//! Gantree: L0_Foundation → CoreTypes
//!
//! Single-qubit Pauli bases and measurement outcomes.

use crate::error::{ShadowError, ShadowResult};
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Type Aliases
// ============================================================================

/// Qubit identifier (0-indexed)
/// Gantree: QubitId // pub type QubitId = usize
pub type QubitId = usize;

// ============================================================================
// Pauli
// ============================================================================

/// Single-qubit Pauli measurement basis
/// Gantree: Pauli // X/Y/Z
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Pauli {
    /// X basis
    X,
    /// Y basis
    Y,
    /// Z (computational) basis
    Z,
}

impl Pauli {
    /// All bases in definition order
    ///
    /// Anything that scans bases and keeps the first best candidate relies
    /// on this order.
    pub const ALL: [Pauli; 3] = [Pauli::X, Pauli::Y, Pauli::Z];

    /// Dense index: X -> 0, Y -> 1, Z -> 2
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Pauli::X => 0,
            Pauli::Y => 1,
            Pauli::Z => 2,
        }
    }

    /// Inverse of [`Pauli::index`]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Parse from character
    pub fn from_char(c: char) -> ShadowResult<Self> {
        match c.to_ascii_uppercase() {
            'X' => Ok(Pauli::X),
            'Y' => Ok(Pauli::Y),
            'Z' => Ok(Pauli::Z),
            _ => Err(ShadowError::InvalidPauli(c.to_string())),
        }
    }

    /// Convert to character
    pub fn to_char(self) -> char {
        match self {
            Pauli::X => 'X',
            Pauli::Y => 'Y',
            Pauli::Z => 'Z',
        }
    }
}

impl fmt::Display for Pauli {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

impl std::str::FromStr for Pauli {
    type Err = ShadowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::from_char(c),
            _ => Err(ShadowError::InvalidPauli(s.to_string())),
        }
    }
}

// ============================================================================
// Outcome
// ============================================================================

/// Single-qubit measurement outcome (eigenvalue of the measured Pauli)
/// Gantree: Outcome // +1/-1
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// +1 eigenvalue
    Plus,
    /// -1 eigenvalue
    Minus,
}

impl Outcome {
    /// Signed value (+1 or -1)
    #[inline]
    pub fn sign(self) -> i32 {
        match self {
            Outcome::Plus => 1,
            Outcome::Minus => -1,
        }
    }

    /// Convert from a signed value
    pub fn from_sign(sign: i64) -> ShadowResult<Self> {
        match sign {
            1 => Ok(Outcome::Plus),
            -1 => Ok(Outcome::Minus),
            other => Err(ShadowError::InvalidOutcome(other.to_string())),
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.sign())
    }
}

impl std::str::FromStr for Outcome {
    type Err = ShadowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: i64 = s
            .parse()
            .map_err(|_| ShadowError::InvalidOutcome(s.to_string()))?;
        Self::from_sign(value)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pauli_index_roundtrip() {
        for p in Pauli::ALL {
            assert_eq!(Pauli::from_index(p.index()), Some(p));
        }
        assert_eq!(Pauli::from_index(3), None);
    }

    #[test]
    fn test_pauli_order() {
        assert_eq!(Pauli::ALL, [Pauli::X, Pauli::Y, Pauli::Z]);
        assert!(Pauli::X < Pauli::Y && Pauli::Y < Pauli::Z);
    }

    #[test]
    fn test_pauli_parse() {
        assert_eq!("X".parse::<Pauli>().unwrap(), Pauli::X);
        assert_eq!("z".parse::<Pauli>().unwrap(), Pauli::Z);
        assert!("W".parse::<Pauli>().is_err());
        assert!("XY".parse::<Pauli>().is_err());
        assert!("".parse::<Pauli>().is_err());
    }

    #[test]
    fn test_outcome_parse() {
        assert_eq!("1".parse::<Outcome>().unwrap(), Outcome::Plus);
        assert_eq!("-1".parse::<Outcome>().unwrap(), Outcome::Minus);
        assert!("0".parse::<Outcome>().is_err());
        assert!("+".parse::<Outcome>().is_err());
    }

    #[test]
    fn test_outcome_sign() {
        assert_eq!(Outcome::Plus.sign(), 1);
        assert_eq!(Outcome::Minus.sign(), -1);
        assert_eq!(Outcome::Minus.to_string(), "-1");
    }
}
