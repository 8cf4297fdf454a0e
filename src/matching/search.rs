use tracing::{debug, info, warn};

use crate::core::record::{MatchRecord, SequenceRecord};
use crate::core::types::Alphabet;
use crate::matching::engine::{find_matches, RawMatch};
use crate::matching::normalize::normalize;
use crate::motif::{CompiledPattern, MotifError};

/// Configuration for a motif search
#[derive(Debug, Clone, Default)]
pub struct SearchConfig {
    /// Alphabet the motif's ambiguity codes are read in
    pub alphabet: Alphabet,
    /// Maximum substitutions + insertions + deletions per match
    pub max_edits: usize,
    /// Match letters regardless of case
    pub case_insensitive: bool,
}

impl SearchConfig {
    /// Translate and compile `motif` with this configuration.
    ///
    /// # Errors
    ///
    /// Returns a `MotifError` if the motif does not compile.
    pub fn compile(&self, motif: &str) -> Result<CompiledPattern, MotifError> {
        CompiledPattern::from_motif(motif, self.alphabet, self.max_edits, self.case_insensitive)
    }
}

/// Search one record and return its matches in discovery order.
#[must_use]
pub fn search_record(record: &SequenceRecord, pattern: &CompiledPattern) -> Vec<MatchRecord> {
    if record.sequence.is_empty() {
        warn!(identifier = %record.identifier, "Record has an empty sequence");
    }

    let matches: Vec<MatchRecord> = find_matches(pattern, &record.sequence)
        .map(|raw| to_match_record(&record.identifier, raw))
        .collect();

    debug!(
        identifier = %record.identifier,
        length = record.sequence.len(),
        matches = matches.len(),
        "Searched record"
    );

    matches
}

/// Search every record with an already compiled pattern.
///
/// Results are grouped by record in input order; within a record they are in
/// discovery order.
#[must_use]
pub fn search_records(records: &[SequenceRecord], pattern: &CompiledPattern) -> Vec<MatchRecord> {
    let mut results = Vec::new();
    for record in records {
        results.extend(search_record(record, pattern));
    }

    info!(
        records = records.len(),
        matches = results.len(),
        pattern = %pattern,
        "Search complete"
    );

    results
}

/// Translate, compile, and search in one call.
///
/// The motif is compiled before any record is touched, so an invalid motif
/// fails without partial results.
///
/// # Errors
///
/// Returns a `MotifError` if the motif does not compile.
pub fn run_search(
    records: &[SequenceRecord],
    motif: &str,
    alphabet: Alphabet,
    max_edits: usize,
) -> Result<Vec<MatchRecord>, MotifError> {
    let config = SearchConfig {
        alphabet,
        max_edits,
        ..SearchConfig::default()
    };
    let pattern = config.compile(motif)?;
    Ok(search_records(records, &pattern))
}

fn to_match_record(identifier: &str, raw: RawMatch) -> MatchRecord {
    let (relative_positions, marks) = normalize(&raw.positions, raw.span);
    MatchRecord {
        identifier: identifier.to_string(),
        span: raw.span,
        matched: raw.matched,
        counts: raw.positions.counts(),
        positions: raw.positions,
        relative_positions,
        marks,
    }
}
