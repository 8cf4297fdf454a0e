//! Motif translation and compilation.
//!
//! A motif goes through two steps before it can be searched for:
//!
//! 1. [`iupac::translate`] replaces ambiguity codes with character classes
//!    for the chosen [`Alphabet`](crate::Alphabet), e.g. DNA `AN` becomes
//!    `A[GATC]`.
//! 2. [`CompiledPattern::compile`] parses the translated text with
//!    `regex-syntax`, groups it, attaches the edit budget, and builds the
//!    automaton used by the matching engine.
//!
//! ## Example
//!
//! ```
//! use motif_spotter::motif::CompiledPattern;
//! use motif_spotter::Alphabet;
//!
//! let pattern = CompiledPattern::from_motif("GATNR", Alphabet::Dna, 1, false).unwrap();
//! assert_eq!(pattern.to_string(), "(GAT[GATC][AG]){e<=1}");
//! ```

use thiserror::Error;

pub mod iupac;
pub mod nfa;
pub mod pattern;

pub use pattern::CompiledPattern;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MotifError {
    #[error("Invalid motif: {0}")]
    InvalidMotif(String),

    #[error("Unsupported alphabet '{0}': expected one of dna, rna, amino")]
    UnsupportedAlphabet(String),

    #[error("Motif too complex: pattern exceeds {0} automaton states")]
    TooComplex(usize),
}
