//! # motif-spotter
//!
//! A library for finding IUPAC motifs in DNA, RNA, and protein sequences,
//! exactly or with a bounded number of edits.
//!
//! Motifs are written with ambiguity codes (`N`, `R`, `Y`, ... for nucleotides,
//! `B`, `Z`, `J`, `X` for amino acids) and may embed regular-expression syntax
//! such as alternation or repetition. Each motif is translated into a pattern
//! over literal symbols, compiled once, and then searched against every
//! record with an edit budget shared by substitutions, insertions, and
//! deletions.
//!
//! ## Features
//!
//! - **Ambiguity codes**: fixed per-alphabet tables for DNA, RNA, and protein
//! - **Approximate matching**: best-match scan within a shared edit budget
//! - **Overlapping matches**: every start position is tried, so matches may share bases
//! - **Edit coordinates**: absolute and match-relative positions for every edit
//! - **Annotation marks**: substitution and insertion markers aligned under each match
//!
//! ## Example
//!
//! ```rust
//! use motif_spotter::{run_search, Alphabet, SequenceRecord};
//!
//! let records = vec![SequenceRecord::new("seq1", "ACGT")];
//! let matches = run_search(&records, "AN", Alphabet::Dna, 1).unwrap();
//!
//! assert_eq!(matches[0].matched, "AC");
//! for m in &matches {
//!     println!("{} {} {} {}", m.identifier, m.span, m.matched, m.counts);
//! }
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Data types for records, spans, edits, and matches
//! - [`motif`]: Ambiguity-code translation and pattern compilation
//! - [`matching`]: Approximate matching engine and coordinate normalization
//! - [`parsing`]: FASTA input
//! - [`report`]: CSV, TSV, JSON, and text output
//! - [`cli`]: Command-line interface implementation

pub mod cli;
pub mod core;
pub mod matching;
pub mod motif;
pub mod parsing;
pub mod report;
pub mod utils;

// Re-export commonly used types for convenience
pub use crate::core::record::{MatchRecord, SequenceRecord};
pub use crate::core::types::*;
pub use matching::search::{run_search, SearchConfig};
pub use motif::{CompiledPattern, MotifError};
pub use parsing::ParseError;
