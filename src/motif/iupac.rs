//! IUPAC ambiguity-code tables and motif translation.
//!
//! Each alphabet has a fixed table mapping every admissible motif symbol to
//! the pattern text it stands for. Unambiguous symbols map to themselves and
//! ambiguity codes map to a bracketed character class.

use crate::core::types::Alphabet;

type Table = [(char, &'static str)];

static DNA: &Table = &[
    ('A', "A"),
    ('C', "C"),
    ('G', "G"),
    ('T', "T"),
    ('M', "[AC]"),
    ('R', "[AG]"),
    ('W', "[AT]"),
    ('S', "[CG]"),
    ('Y', "[CT]"),
    ('K', "[GT]"),
    ('V', "[ACG]"),
    ('H', "[ACT]"),
    ('D', "[AGT]"),
    ('B', "[CGT]"),
    // X and N are aliases for any base
    ('X', "[GATC]"),
    ('N', "[GATC]"),
];

static RNA: &Table = &[
    ('A', "A"),
    ('C', "C"),
    ('G', "G"),
    ('U', "U"),
    ('M', "[AC]"),
    ('R', "[AG]"),
    ('W', "[AU]"),
    ('S', "[CG]"),
    ('Y', "[CU]"),
    ('K', "[GU]"),
    ('V', "[ACG]"),
    ('H', "[ACU]"),
    ('D', "[AGU]"),
    ('B', "[CGU]"),
    ('X', "[GAUC]"),
    ('N', "[GAUC]"),
];

static PROTEIN: &Table = &[
    ('A', "A"), // Ala
    ('C', "C"), // Cys
    ('D', "D"), // Asp
    ('E', "E"), // Glu
    ('F', "F"), // Phe
    ('G', "G"), // Gly
    ('H', "H"), // His
    ('I', "I"), // Ile
    ('K', "K"), // Lys
    ('L', "L"), // Leu
    ('M', "M"), // Met
    ('N', "N"), // Asn
    ('P', "P"), // Pro
    ('Q', "Q"), // Gln
    ('R', "R"), // Arg
    ('S', "S"), // Ser
    ('T', "T"), // Thr
    ('V', "V"), // Val
    ('W', "W"), // Trp
    ('Y', "Y"), // Tyr
    ('B', "[DN]"), // Asx
    ('Z', "[EQ]"), // Glx
    ('J', "[LI]"), // Xle
    // Any letter, not only the 20 standard residues
    ('X', "[A-Z]"),
];

/// The ambiguity table for an alphabet
#[must_use]
pub fn table(alphabet: Alphabet) -> &'static Table {
    match alphabet {
        Alphabet::Dna => DNA,
        Alphabet::Rna => RNA,
        Alphabet::Protein => PROTEIN,
    }
}

/// Pattern text for a single motif symbol, or `None` if the symbol is not
/// part of the alphabet's table.
#[must_use]
pub fn expand(symbol: char, alphabet: Alphabet) -> Option<&'static str> {
    table(alphabet)
        .iter()
        .find(|(code, _)| *code == symbol)
        .map(|(_, expansion)| *expansion)
}

/// Translate an ambiguity-code motif into pattern text over literal symbols.
///
/// Characters outside the alphabet's table (regex syntax such as `(`, `|`,
/// `{2,3}`, or lowercase letters) pass through unchanged.
///
/// # Examples
///
/// ```
/// use motif_spotter::motif::iupac::translate;
/// use motif_spotter::Alphabet;
///
/// assert_eq!(translate("AN", Alphabet::Dna), "A[GATC]");
/// assert_eq!(translate("GAR(T|C)", Alphabet::Dna), "GA[AG](T|C)");
/// ```
#[must_use]
pub fn translate(motif: &str, alphabet: Alphabet) -> String {
    let mut out = String::with_capacity(motif.len() * 2);
    for c in motif.chars() {
        match expand(c, alphabet) {
            Some(expansion) => out.push_str(expansion),
            None => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn members(class: &str) -> Vec<char> {
        let inner = class.trim_start_matches('[').trim_end_matches(']');
        let mut chars: Vec<char> = inner.chars().collect();
        chars.sort_unstable();
        chars
    }

    #[test]
    fn test_dna_ambiguity_codes() {
        let expected = [
            ('M', "AC"),
            ('R', "AG"),
            ('W', "AT"),
            ('S', "CG"),
            ('Y', "CT"),
            ('K', "GT"),
            ('V', "ACG"),
            ('H', "ACT"),
            ('D', "AGT"),
            ('B', "CGT"),
            ('X', "ACGT"),
            ('N', "ACGT"),
        ];
        for (code, set) in expected {
            let class = expand(code, Alphabet::Dna).unwrap();
            assert_eq!(members(class), set.chars().collect::<Vec<_>>(), "code {code}");
        }
    }

    #[test]
    fn test_rna_uses_uracil() {
        for (code, expansion) in table(Alphabet::Rna) {
            assert!(!expansion.contains('T'), "{code} expands to {expansion}");
        }
        assert_eq!(expand('N', Alphabet::Rna), Some("[GAUC]"));
        assert_eq!(expand('T', Alphabet::Rna), None);
    }

    #[test]
    fn test_protein_codes() {
        assert_eq!(expand('B', Alphabet::Protein), Some("[DN]"));
        assert_eq!(expand('Z', Alphabet::Protein), Some("[EQ]"));
        assert_eq!(expand('J', Alphabet::Protein), Some("[LI]"));
        assert_eq!(expand('X', Alphabet::Protein), Some("[A-Z]"));
        assert_eq!(expand('T', Alphabet::Protein), Some("T"));
        assert_eq!(table(Alphabet::Protein).len(), 24);
    }

    #[test]
    fn test_unambiguous_symbols_are_unchanged() {
        assert_eq!(translate("ACGTTGCA", Alphabet::Dna), "ACGTTGCA");
        assert_eq!(translate("ACGUUGCA", Alphabet::Rna), "ACGUUGCA");
        assert_eq!(translate("MKWVTFISLL", Alphabet::Protein), "MKWVTFISLL");
    }

    #[test]
    fn test_regex_syntax_passes_through() {
        assert_eq!(translate("A{2,3}(C|G)+", Alphabet::Dna), "A{2,3}(C|G)+");
        assert_eq!(translate("acgt", Alphabet::Dna), "acgt");
        assert_eq!(translate("", Alphabet::Dna), "");
    }

    #[test]
    fn test_table_symbols_are_unique() {
        for alphabet in [Alphabet::Dna, Alphabet::Rna, Alphabet::Protein] {
            let mut symbols: Vec<char> = table(alphabet).iter().map(|(c, _)| *c).collect();
            let total = symbols.len();
            symbols.sort_unstable();
            symbols.dedup();
            assert_eq!(symbols.len(), total, "{alphabet}");
        }
    }
}
