use serde::{Deserialize, Serialize};

use crate::core::types::{AnnotationMarks, EditCounts, EditPositions, Span};

/// A single named sequence from the input
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SequenceRecord {
    /// Header line without the leading `>`
    pub identifier: String,

    /// Sequence with spaces removed
    pub sequence: String,
}

impl SequenceRecord {
    pub fn new(identifier: impl Into<String>, sequence: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            sequence: sequence.into(),
        }
    }
}

/// One reported occurrence of the motif.
///
/// Records are built once by the search driver and never mutated afterward.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRecord {
    /// Identifier of the record the match was found in
    pub identifier: String,

    /// Location of the match in the sequence
    pub span: Span,

    /// Text of the sequence covered by `span`
    pub matched: String,

    /// Edit operations used by the alignment
    pub counts: EditCounts,

    /// Absolute sequence positions of each edit
    pub positions: EditPositions,

    /// Positions re-based to `span.start`
    pub relative_positions: EditPositions,

    /// Marker lines aligned under `matched`
    pub marks: AnnotationMarks,
}

impl MatchRecord {
    #[must_use]
    pub fn is_exact(&self) -> bool {
        self.counts.total() == 0
    }

    /// Matched text with the substitution marks above and insertion marks below
    #[must_use]
    pub fn annotated_text(&self) -> String {
        let mut lines = Vec::with_capacity(3);
        if !self.marks.substitutions.is_empty() {
            lines.push(self.marks.substitutions.as_str());
        }
        lines.push(self.matched.as_str());
        if !self.marks.insertions.is_empty() {
            lines.push(self.marks.insertions.as_str());
        }
        lines.join("\n")
    }
}
