use regex_syntax::ParserBuilder;
use tracing::debug;

use crate::core::types::Alphabet;
use crate::motif::iupac;
use crate::motif::nfa::Nfa;
use crate::motif::MotifError;
use crate::utils::validation::MAX_EDITS;

/// A motif ready for approximate matching.
///
/// Built once per run and shared read-only by every record searched.
#[derive(Debug, Clone)]
pub struct CompiledPattern {
    translated: String,
    max_edits: usize,
    nfa: Nfa,
}

impl CompiledPattern {
    /// Wrap an already translated motif with an edit budget.
    ///
    /// `max_edits` bounds substitutions, insertions, and deletions combined;
    /// `0` means exact matching.
    ///
    /// # Errors
    ///
    /// Returns `MotifError::InvalidMotif` if the motif is not a valid pattern
    /// (unbalanced groups, dangling quantifiers, unsupported assertions, an
    /// edit budget above `MAX_EDITS`) or `MotifError::TooComplex` if it
    /// expands past the automaton size limit.
    pub fn compile(
        translated: &str,
        max_edits: usize,
        case_insensitive: bool,
    ) -> Result<Self, MotifError> {
        if max_edits > MAX_EDITS {
            return Err(MotifError::InvalidMotif(format!(
                "edit budget {max_edits} exceeds maximum of {MAX_EDITS}"
            )));
        }

        // Display wraps the motif in a group, so it must balance on its own
        let hir = ParserBuilder::new()
            .case_insensitive(case_insensitive)
            .build()
            .parse(translated)
            .map_err(|e| MotifError::InvalidMotif(e.to_string()))?;
        let nfa = Nfa::build(&hir)?;

        debug!(
            pattern = %translated,
            states = nfa.len(),
            max_edits,
            "Compiled motif"
        );

        Ok(Self {
            translated: translated.to_string(),
            max_edits,
            nfa,
        })
    }

    /// Translate an ambiguity-code motif and compile it.
    ///
    /// # Errors
    ///
    /// See [`CompiledPattern::compile`].
    pub fn from_motif(
        motif: &str,
        alphabet: Alphabet,
        max_edits: usize,
        case_insensitive: bool,
    ) -> Result<Self, MotifError> {
        let translated = iupac::translate(motif, alphabet);
        Self::compile(&translated, max_edits, case_insensitive)
    }

    /// The motif after ambiguity-code translation
    #[must_use]
    pub fn translated(&self) -> &str {
        &self.translated
    }

    #[must_use]
    pub fn max_edits(&self) -> usize {
        self.max_edits
    }

    pub(crate) fn nfa(&self) -> &Nfa {
        &self.nfa
    }
}

impl std::fmt::Display for CompiledPattern {
    /// Renders the pattern in fuzzy-regex notation, e.g. `(A[GATC]){e<=1}`
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}){{e<={}}}", self.translated, self.max_edits)
    }
}
