//! Core data types for motif searching.
//!
//! - [`Alphabet`]: DNA, RNA, or protein; selects the ambiguity-code table
//! - [`SequenceRecord`]: an identifier and its validated sequence
//! - [`Span`], [`EditCounts`], [`EditPositions`], [`AnnotationMarks`]: parts of a match
//! - [`MatchRecord`]: a fully normalized match, ready for reporting
//!
//! All spans and positions are 0-based. Spans are half-open.

pub mod record;
pub mod types;

pub use record::{MatchRecord, SequenceRecord};
pub use types::{Alphabet, AnnotationMarks, EditCounts, EditPositions, Span};
