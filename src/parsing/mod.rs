//! Input parsing.
//!
//! - **FASTA files**: plain, gzip, or bgzip compressed, normalized and
//!   validated into [`SequenceRecord`](crate::SequenceRecord)s
//!
//! ## Example
//!
//! ```rust,no_run
//! use motif_spotter::parsing::fasta::{parse_fasta_file, parse_fasta_text};
//! use std::path::Path;
//!
//! // Parse from a file
//! let records = parse_fasta_file(Path::new("sequences.fa")).unwrap();
//!
//! // Or from text already in memory
//! let records = parse_fasta_text(">seq1\nACGT\n").unwrap();
//! ```

pub mod fasta;

pub use fasta::ParseError;
