use serde::{Deserialize, Serialize};

use crate::motif::MotifError;

/// Sequence alphabet a motif is written in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Alphabet {
    #[default]
    Dna,
    Rna,
    Protein,
}

impl Alphabet {
    /// Tag accepted on the command line for this alphabet
    #[must_use]
    pub fn tag(self) -> &'static str {
        match self {
            Self::Dna => "dna",
            Self::Rna => "rna",
            Self::Protein => "amino",
        }
    }
}

impl std::str::FromStr for Alphabet {
    type Err = MotifError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "dna" => Ok(Self::Dna),
            "rna" => Ok(Self::Rna),
            "amino" | "protein" | "aa" => Ok(Self::Protein),
            _ => Err(MotifError::UnsupportedAlphabet(s.to_string())),
        }
    }
}

impl std::fmt::Display for Alphabet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Dna => write!(f, "DNA"),
            Self::Rna => write!(f, "RNA"),
            Self::Protein => write!(f, "Protein"),
        }
    }
}

/// Half-open `[start, end)` range of a match in its sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    #[must_use]
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

impl std::fmt::Display for Span {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.start, self.end)
    }
}

/// Number of each kind of edit used by one match
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditCounts {
    pub substitutions: usize,
    pub insertions: usize,
    pub deletions: usize,
}

impl EditCounts {
    #[must_use]
    pub fn total(&self) -> usize {
        self.substitutions + self.insertions + self.deletions
    }
}

impl std::fmt::Display for EditCounts {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "({}, {}, {})",
            self.substitutions, self.insertions, self.deletions
        )
    }
}

/// Sequence positions of each kind of edit, in ascending order.
///
/// Depending on context the positions are absolute indices into the sequence
/// or relative to the start of the match.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditPositions {
    pub substitutions: Vec<usize>,
    pub insertions: Vec<usize>,
    pub deletions: Vec<usize>,
}

impl EditPositions {
    #[must_use]
    pub fn counts(&self) -> EditCounts {
        EditCounts {
            substitutions: self.substitutions.len(),
            insertions: self.insertions.len(),
            deletions: self.deletions.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.substitutions.is_empty() && self.insertions.is_empty() && self.deletions.is_empty()
    }
}

impl std::fmt::Display for EditPositions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "({:?}, {:?}, {:?})",
            self.substitutions, self.insertions, self.deletions
        )
    }
}

/// Marker lines drawn under a matched substring
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotationMarks {
    /// `*` at every substituted position, blank elsewhere
    pub substitutions: String,
    /// `^` at every inserted position, blank elsewhere
    pub insertions: String,
}
