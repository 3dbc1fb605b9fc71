//! Plain-text file formats
//!
//! Gantree: L2_Format → TextFormats
//!
//! Every format starts with a line holding the system size. Blank lines are
//! ignored and parse errors report 1-based line numbers.
//!
//! ```text
//! observables        measurement records     subsystems
//! 4                  2                       4
//! 2 X 0 X 1          X 1 Z -1                2 0 1
//! 3 Z 0 Y 2 Z 3 0.5  Y -1 Y 1                1 3
//! ```
//!
//! An observable line is `k P q ... P q [weight]`; the optional trailing
//! weight defaults to 1.0.

use crate::error::{ShadowError, ShadowResult};
use crate::measurement::{MeasurementProcedure, MeasurementRecord, MeasurementSetting};
use crate::observable::{Observable, PauliTerm};
use crate::types::{Outcome, Pauli, QubitId};
use serde::{Deserialize, Serialize};
use std::fmt::Write;

/// Parsed observable file
/// Gantree: ObservableSet // 관측량 파일
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObservableSet {
    /// Number of qubits
    pub system_size: usize,
    /// Observables in file order
    pub observables: Vec<Observable>,
    /// Per-observable weights; `None` when no line carried one
    pub weights: Option<Vec<f64>>,
}

/// Parsed measurement-record file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordSet {
    /// Number of qubits
    pub system_size: usize,
    /// Records in file order
    pub records: Vec<MeasurementRecord>,
}

/// Parsed subsystem file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubsystemSet {
    /// Number of qubits
    pub system_size: usize,
    /// Qubit lists in file order
    pub subsystems: Vec<Vec<QubitId>>,
}

// ============================================================================
// Line Handling
// ============================================================================

/// Non-blank lines with their 1-based numbers
fn content_lines<'a>(text: &'a str) -> impl Iterator<Item = (usize, &'a str)> + 'a {
    text.lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty())
}

/// Split off the system-size header
fn split_header<'a>(
    text: &'a str,
) -> ShadowResult<(usize, impl Iterator<Item = (usize, &'a str)> + 'a)> {
    let mut lines = content_lines(text);
    let (line_no, header) = lines
        .next()
        .ok_or_else(|| ShadowError::parse(1, "missing system size"))?;
    let system_size = parse_token::<usize>(header, line_no, "system size")?;
    if system_size == 0 {
        return Err(ShadowError::InvalidSystemSize);
    }
    Ok((system_size, lines))
}

fn parse_token<T: std::str::FromStr>(token: &str, line: usize, what: &str) -> ShadowResult<T> {
    token
        .parse()
        .map_err(|_| ShadowError::parse(line, format!("invalid {} '{}'", what, token)))
}

fn next_token<'a>(
    tokens: &mut impl Iterator<Item = &'a str>,
    line: usize,
    what: &str,
) -> ShadowResult<&'a str> {
    tokens
        .next()
        .ok_or_else(|| ShadowError::parse(line, format!("missing {}", what)))
}

// ============================================================================
// Observables
// ============================================================================

/// Parse an observable file
/// Gantree: parse_observables(text) -> ObservableSet // 파싱
pub fn parse_observables(text: &str) -> ShadowResult<ObservableSet> {
    let (system_size, lines) = split_header(text)?;
    let mut observables = Vec::new();
    let mut weights = Vec::new();
    let mut any_weight = false;

    for (line_no, line) in lines {
        let mut tokens = line.split_whitespace();
        let k: usize = parse_token(next_token(&mut tokens, line_no, "term count")?, line_no, "term count")?;

        // Counts come from the file; a line cannot hold more entries than bytes
        let mut terms = Vec::with_capacity(k.min(line.len()));
        for _ in 0..k {
            let pauli: Pauli = parse_token(next_token(&mut tokens, line_no, "Pauli")?, line_no, "Pauli")?;
            let qubit: QubitId =
                parse_token(next_token(&mut tokens, line_no, "qubit index")?, line_no, "qubit index")?;
            terms.push(PauliTerm::new(pauli, qubit));
        }

        let weight = match tokens.next() {
            Some(token) => {
                any_weight = true;
                parse_token::<f64>(token, line_no, "weight")?
            }
            None => 1.0,
        };
        if let Some(extra) = tokens.next() {
            return Err(ShadowError::parse(
                line_no,
                format!("unexpected token '{}'", extra),
            ));
        }

        let observable = Observable::new(terms);
        observable.validate(observables.len(), system_size)?;
        observables.push(observable);
        weights.push(weight);
    }

    Ok(ObservableSet {
        system_size,
        observables,
        weights: any_weight.then_some(weights),
    })
}

/// Render an observable file
pub fn write_observables(set: &ObservableSet) -> String {
    let mut out = format!("{}\n", set.system_size);
    for (i, observable) in set.observables.iter().enumerate() {
        let _ = write!(out, "{}", observable.len());
        for term in observable.iter() {
            let _ = write!(out, " {} {}", term.pauli, term.qubit);
        }
        if let Some(weight) = set.weights.as_ref().and_then(|w| w.get(i)) {
            let _ = write!(out, " {}", weight);
        }
        out.push('\n');
    }
    out
}

// ============================================================================
// Measurement Records
// ============================================================================

/// Parse a measurement-record file
/// Gantree: parse_records(text) -> RecordSet // 측정 파싱
pub fn parse_records(text: &str) -> ShadowResult<RecordSet> {
    let (system_size, lines) = split_header(text)?;
    let mut records = Vec::new();

    for (line_no, line) in lines {
        let mut tokens = line.split_whitespace();
        let width = system_size.min(line.len());
        let mut bases = Vec::with_capacity(width);
        let mut outcomes = Vec::with_capacity(width);
        for _ in 0..system_size {
            bases.push(parse_token::<Pauli>(
                next_token(&mut tokens, line_no, "Pauli")?,
                line_no,
                "Pauli",
            )?);
            outcomes.push(parse_token::<Outcome>(
                next_token(&mut tokens, line_no, "outcome")?,
                line_no,
                "outcome",
            )?);
        }
        if let Some(extra) = tokens.next() {
            return Err(ShadowError::parse(
                line_no,
                format!("unexpected token '{}'", extra),
            ));
        }
        records.push(MeasurementRecord::new(MeasurementSetting::new(bases), outcomes)?);
    }

    Ok(RecordSet {
        system_size,
        records,
    })
}

/// Render a measurement-record file
pub fn write_records(system_size: usize, records: &[MeasurementRecord]) -> String {
    let mut out = format!("{}\n", system_size);
    for record in records {
        let _ = writeln!(out, "{}", record);
    }
    out
}

// ============================================================================
// Subsystems
// ============================================================================

/// Parse a subsystem file
pub fn parse_subsystems(text: &str) -> ShadowResult<SubsystemSet> {
    let (system_size, lines) = split_header(text)?;
    let mut subsystems = Vec::new();

    for (line_no, line) in lines {
        let mut tokens = line.split_whitespace();
        let k: usize = parse_token(next_token(&mut tokens, line_no, "qubit count")?, line_no, "qubit count")?;
        let mut qubits = Vec::with_capacity(k.min(line.len()));
        for _ in 0..k {
            let qubit: QubitId =
                parse_token(next_token(&mut tokens, line_no, "qubit index")?, line_no, "qubit index")?;
            if qubit >= system_size {
                return Err(ShadowError::QubitOutOfRange { qubit, system_size });
            }
            qubits.push(qubit);
        }
        if let Some(extra) = tokens.next() {
            return Err(ShadowError::parse(
                line_no,
                format!("unexpected token '{}'", extra),
            ));
        }
        subsystems.push(qubits);
    }

    Ok(SubsystemSet {
        system_size,
        subsystems,
    })
}

// ============================================================================
// Procedures
// ============================================================================

/// Render a procedure, one round per line, without a header
pub fn write_procedure(procedure: &MeasurementProcedure) -> String {
    procedure.to_string()
}

/// Parse a procedure written by [`write_procedure`]
pub fn parse_procedure(text: &str) -> ShadowResult<MeasurementProcedure> {
    content_lines(text)
        .map(|(line_no, line)| {
            line.parse::<MeasurementSetting>()
                .map_err(|e| ShadowError::parse(line_no, e.to_string()))
        })
        .collect()
}

// ============================================================================
// Tests
// ============================================================================
