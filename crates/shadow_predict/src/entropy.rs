//! Second Rényi entropy of a subsystem
//!
//! Gantree: L5_Predict → RenyiEntropy
//!
//! Every record contributes to each of the 2^|A| local Pauli patterns it
//! measured on subsystem A (the identity pattern included). The pattern
//! index packs two bits per site, `basis.index() + 1` for a measured site
//! and 0 for identity, so the 4^|A| table is visited by a Gray-code walk
//! that flips one site per step.
//!
//! For a pattern seen `N >= 2` times with outcome sum `S`, the unbiased
//! estimate of its squared expectation is `(S^2 - N) / (N (N - 1))`.
//! Patterns are grouped by level (non-identity sites); each level's sum is
//! rescaled by `patterns at level / patterns at level with N >= 2`. The
//! purity is the rescaled sum over `2^|A|` and the entropy is
//! `-log2(purity)` with the purity clamped to `[2^-|A|, 1 - 1e-9]`.

use shadow_core::{predict, MeasurementRecord, QubitId, ShadowError, ShadowResult};
use std::collections::HashSet;

/// Per-pattern outcome tallies
#[derive(Debug, Clone)]
struct PatternTable {
    sums: Vec<i64>,
    counts: Vec<u64>,
}

impl PatternTable {
    fn new(subsystem_size: usize) -> Self {
        let size = 1usize << (2 * subsystem_size);
        Self {
            sums: vec![0; size],
            counts: vec![0; size],
        }
    }

    /// Gray-code walk over every subset of the subsystem
    fn add(&mut self, record: &MeasurementRecord, subsystem: &[QubitId]) {
        self.sums[0] += 1;
        self.counts[0] += 1;

        let mut encoding = 0usize;
        let mut product = 1i64;
        for b in 1usize..(1 << subsystem.len()) {
            let site = b.trailing_zeros() as usize;
            let qubit = subsystem[site];
            // Range checked by the caller
            let (basis, outcome) = match record.get(qubit) {
                Some(pair) => pair,
                None => return,
            };

            product *= outcome.sign() as i64;
            encoding ^= (basis.index() + 1) << (2 * site);

            self.sums[encoding] += product;
            self.counts[encoding] += 1;
        }
    }
}

/// Number of non-identity sites in a packed pattern
fn level(encoding: usize, subsystem_size: usize) -> usize {
    (0..subsystem_size)
        .filter(|&i| (encoding >> (2 * i)) & 3 != 0)
        .count()
}

fn validate_subsystem(records: &[MeasurementRecord], subsystem: &[QubitId]) -> ShadowResult<()> {
    if subsystem.len() > predict::MAX_ENTROPY_SUBSYSTEM {
        return Err(ShadowError::SubsystemTooLarge {
            size: subsystem.len(),
            max: predict::MAX_ENTROPY_SUBSYSTEM,
        });
    }

    let mut seen = HashSet::with_capacity(subsystem.len());
    for &qubit in subsystem {
        if !seen.insert(qubit) {
            return Err(ShadowError::DuplicateSubsystemQubit { qubit });
        }
    }

    if let Some(&max_qubit) = subsystem.iter().max() {
        for record in records {
            if max_qubit >= record.len() {
                return Err(ShadowError::QubitOutOfRange {
                    qubit: max_qubit,
                    system_size: record.len(),
                });
            }
        }
    }
    Ok(())
}

/// Estimate the purity `tr(rho_A^2)` of a subsystem, unclamped
/// Gantree: purity(records,A) -> f64 // 순도 추정
pub fn purity(records: &[MeasurementRecord], subsystem: &[QubitId]) -> ShadowResult<f64> {
    validate_subsystem(records, subsystem)?;

    let k = subsystem.len();
    let mut table = PatternTable::new(k);
    for record in records {
        table.add(record, subsystem);
    }

    let mut level_seen = vec![0usize; k + 1];
    let mut level_total = vec![0usize; k + 1];
    for c in 0..table.counts.len() {
        let l = level(c, k);
        if table.counts[c] >= 2 {
            level_seen[l] += 1;
        }
        level_total[l] += 1;
    }

    let scale = (1u64 << k) as f64;
    let mut purity = 0.0;
    for c in 0..table.counts.len() {
        let n = table.counts[c];
        if n <= 1 {
            continue;
        }
        let n = n as f64;
        let s = table.sums[c] as f64;
        let l = level(c, k);
        purity += 1.0 / (n * (n - 1.0)) * (s * s - n) / scale * level_total[l] as f64
            / level_seen[l] as f64;
    }
    Ok(purity)
}

/// Predict the second Rényi entropy of a subsystem in bits
/// Gantree: renyi_entropy(records,A) -> f64 // 2차 레니 엔트로피
pub fn renyi_entropy(records: &[MeasurementRecord], subsystem: &[QubitId]) -> ShadowResult<f64> {
    let floor = 1.0 / (1u64 << subsystem.len().min(predict::MAX_ENTROPY_SUBSYSTEM)) as f64;
    let p = purity(records, subsystem)?;
    Ok(-p.max(floor).min(predict::PURITY_CEILING).log2())
}

// ============================================================================
// Tests
// ============================================================================
