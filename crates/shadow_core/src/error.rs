//! Error types for the shadow toolkit
//!
//! Gantree: L0_Foundation → Errors
//!
//! Every fallible operation in the workspace reports a [`ShadowError`].

// Error variant fields are self-documenting via error messages
#![allow(missing_docs)]

use thiserror::Error;

/// Main error type for the shadow toolkit
/// Gantree: ShadowError // enum
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ShadowError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    /// Qubit index outside the system
    /// Gantree: QubitOutOfRange{{q,n}} // 큐비트 범위
    #[error("Qubit {qubit} out of range for a system of {system_size} qubits")]
    QubitOutOfRange { qubit: usize, system_size: usize },

    /// The same qubit appears twice in one observable
    /// Gantree: DuplicateQubit{{obs,q}} // 중복 큐비트
    #[error("Observable {observable} acts on qubit {qubit} more than once")]
    DuplicateQubit { observable: usize, qubit: usize },

    /// Weight list does not line up with the observable list
    #[error("Expected {expected} weights (one per observable), got {got}")]
    WeightCountMismatch { expected: usize, got: usize },

    /// Negative or non-finite weight
    #[error("Invalid weight {weight} for observable {observable}: must be finite and >= 0")]
    InvalidWeight { observable: usize, weight: f64 },

    /// Target measurement count must be positive
    #[error("Number of measurements per observable must be > 0")]
    InvalidTargetCount,

    /// System size must be positive
    #[error("System size must be > 0")]
    InvalidSystemSize,

    /// Invalid basis letter
    #[error("Invalid Pauli '{0}': must be X, Y, or Z")]
    InvalidPauli(String),

    /// Invalid single-qubit outcome
    #[error("Invalid outcome '{0}': must be 1 or -1")]
    InvalidOutcome(String),

    /// A record's setting and outcome vectors differ in length
    #[error("Measurement record has {bases} bases but {outcomes} outcomes")]
    RecordLengthMismatch { bases: usize, outcomes: usize },

    /// Two inputs disagree on the number of qubits
    #[error("System size mismatch: expected {expected}, got {got}")]
    SystemSizeMismatch { expected: usize, got: usize },

    // ========================================================================
    // Format Errors
    // ========================================================================
    /// Malformed text input
    /// Gantree: Parse{{line,msg}} // 파싱
    #[error("Parse error on line {line}: {message}")]
    Parse { line: usize, message: String },

    // ========================================================================
    // Configuration Errors
    // ========================================================================
    /// Invalid scheduler configuration
    #[error("Configuration error: {0}")]
    ConfigError(String),

    // ========================================================================
    // Prediction Errors
    // ========================================================================
    /// Subsystem too large for exhaustive entropy estimation
    #[error("Subsystem of {size} qubits exceeds the maximum of {max}")]
    SubsystemTooLarge { size: usize, max: usize },

    /// The same qubit is listed twice in one subsystem
    #[error("Subsystem lists qubit {qubit} more than once")]
    DuplicateSubsystemQubit { qubit: usize },

    // ========================================================================
    // I/O Errors
    // ========================================================================
    /// JSON serialization error
    #[error("JSON error: {0}")]
    JsonError(String),

    /// File I/O error
    #[error("File error: {0}")]
    FileError(String),
}

/// Result type alias for shadow operations
/// Gantree: ShadowResult<T> // type alias
pub type ShadowResult<T> = Result<T, ShadowError>;

// ============================================================================
// Error Conversion Helpers
// ============================================================================

impl From<serde_json::Error> for ShadowError {
    fn from(err: serde_json::Error) -> Self {
        ShadowError::JsonError(err.to_string())
    }
}

impl From<std::io::Error> for ShadowError {
    fn from(err: std::io::Error) -> Self {
        ShadowError::FileError(err.to_string())
    }
}

// ============================================================================
// Error Helpers
// ============================================================================

impl ShadowError {
    /// Build a parse error for a 1-based line number
    pub fn parse(line: usize, message: impl Into<String>) -> Self {
        ShadowError::Parse {
            line,
            message: message.into(),
        }
    }

    /// Check if error rejects the caller's input (as opposed to I/O or config)
    pub fn is_validation_error(&self) -> bool {
        matches!(
            self,
            ShadowError::QubitOutOfRange { .. }
                | ShadowError::DuplicateQubit { .. }
                | ShadowError::WeightCountMismatch { .. }
                | ShadowError::InvalidWeight { .. }
                | ShadowError::InvalidTargetCount
                | ShadowError::InvalidSystemSize
                | ShadowError::InvalidPauli(_)
                | ShadowError::InvalidOutcome(_)
                | ShadowError::RecordLengthMismatch { .. }
                | ShadowError::SystemSizeMismatch { .. }
                | ShadowError::SubsystemTooLarge { .. }
                | ShadowError::DuplicateSubsystemQubit { .. }
        )
    }

    /// Check if error comes from malformed text input
    pub fn is_format_error(&self) -> bool {
        matches!(self, ShadowError::Parse { .. })
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ShadowError::QubitOutOfRange {
            qubit: 10,
            system_size: 7,
        };
        assert!(err.to_string().contains("10"));
        assert!(err.to_string().contains("7"));
    }

    #[test]
    fn test_parse_error_line() {
        let err = ShadowError::parse(3, "missing qubit index");
        assert_eq!(
            err.to_string(),
            "Parse error on line 3: missing qubit index"
        );
        assert!(err.is_format_error());
        assert!(!err.is_validation_error());
    }

    #[test]
    fn test_is_validation_error() {
        assert!(ShadowError::InvalidTargetCount.is_validation_error());
        assert!(ShadowError::DuplicateQubit {
            observable: 0,
            qubit: 1
        }
        .is_validation_error());
        assert!(!ShadowError::FileError("missing".into()).is_validation_error());
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: ShadowError = io.into();
        assert!(matches!(err, ShadowError::FileError(_)));
    }
}
