//! Approximate motif matching.
//!
//! - [`engine`]: bounded edit-distance search of a [`CompiledPattern`](crate::motif::CompiledPattern)
//!   against one sequence, returning overlapping best matches lazily
//! - [`normalize`]: re-bases edit positions to the match start and builds
//!   the annotation mark lines
//! - [`search`]: runs the engine over a batch of records and assembles
//!   [`MatchRecord`](crate::MatchRecord)s
//!
//! ## Edit Model
//!
//! Every edit costs one unit against the budget:
//!
//! | Edit | Meaning | Position reported |
//! |------|---------|-------------------|
//! | Substitution | a sequence character differs from the motif symbol | the sequence character |
//! | Insertion | an extra sequence character not in the motif | the extra character |
//! | Deletion | a motif symbol missing from the sequence | the character after the gap, shifted by earlier deletions |
//!
//! Each search settles on the earliest start that reaches the cheapest cost
//! available from where the search began, then resumes one position past
//! that start. Equally cheap alignments at a start are resolved left to right
//! in the order exact, substitution, insertion, deletion.
//!
//! ## Example
//!
//! ```
//! use motif_spotter::{run_search, Alphabet, SequenceRecord};
//!
//! let records = vec![SequenceRecord::new("seq1", "ACGT")];
//! let matches = run_search(&records, "AN", Alphabet::Dna, 0).unwrap();
//!
//! assert_eq!(matches.len(), 1);
//! assert_eq!(matches[0].matched, "AC");
//! ```

pub mod engine;
pub mod normalize;
pub mod search;

pub use engine::{find_matches, FuzzyMatches, RawMatch};
pub use normalize::normalize;
pub use search::{run_search, search_record, search_records, SearchConfig};
