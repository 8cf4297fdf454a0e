//! Search behaviour through the public library API.
//!
//! Covers ambiguity expansion, exact and approximate matching, overlap
//! handling, and the coordinates reported for each edit.

use motif_spotter::matching::find_matches;
use motif_spotter::motif::iupac::{expand, translate};
use motif_spotter::{run_search, Alphabet, CompiledPattern, MotifError, SequenceRecord, Span};

fn class_members(class: &str) -> Vec<char> {
    let mut members: Vec<char> = class
        .trim_start_matches('[')
        .trim_end_matches(']')
        .chars()
        .collect();
    members.sort_unstable();
    members
}

#[test]
fn test_dna_n_and_x_cover_every_base() {
    for code in ['N', 'X'] {
        let class = expand(code, Alphabet::Dna).unwrap();
        assert_eq!(class_members(class), vec!['A', 'C', 'G', 'T']);
    }
    assert_eq!(class_members(expand('M', Alphabet::Dna).unwrap()), vec!['A', 'C']);
}

#[test]
fn test_ambiguity_class_matches_exactly_its_members() {
    // M = {A, C}: every member matches, nothing else does
    let pattern = CompiledPattern::from_motif("M", Alphabet::Dna, 0, false).unwrap();
    for base in ["A", "C"] {
        assert_eq!(find_matches(&pattern, base).count(), 1, "{base}");
    }
    for base in ["G", "T", "U"] {
        assert_eq!(find_matches(&pattern, base).count(), 0, "{base}");
    }
}

#[test]
fn test_unambiguous_motif_translation_is_identity() {
    assert_eq!(translate("GATTACA", Alphabet::Dna), "GATTACA");
    assert_eq!(translate("GAUUACA", Alphabet::Rna), "GAUUACA");
}

#[test]
fn test_exact_match_baseline() {
    let records = vec![SequenceRecord::new("seq", "TTTTGAATTCTTTT")];
    let matches = run_search(&records, "GAATTC", Alphabet::Dna, 0).unwrap();

    assert_eq!(matches.len(), 1);
    let m = &matches[0];
    assert_eq!(m.span, Span::new(4, 10));
    assert_eq!(m.counts.total(), 0);
    assert!(m.relative_positions.is_empty());
}

#[test]
fn test_budget_is_respected() {
    let sequence = "ACGTTGCAAGGCTTACGATCGATCGGATCCATGCA";
    let records = vec![SequenceRecord::new("seq", sequence)];

    for k in 0..=3 {
        let matches = run_search(&records, "GGATCC", Alphabet::Dna, k).unwrap();
        assert!(!matches.is_empty(), "k = {k}");
        for m in &matches {
            assert!(m.counts.total() <= k, "{m:?} exceeds budget {k}");
            assert_eq!(m.counts, m.positions.counts());
        }
    }
}

#[test]
fn test_overlapping_matches_are_reported() {
    let records = vec![SequenceRecord::new("seq", "AAAA")];
    let matches = run_search(&records, "AA", Alphabet::Dna, 0).unwrap();

    let starts: Vec<usize> = matches.iter().map(|m| m.span.start).collect();
    assert_eq!(starts, vec![0, 1, 2]);
}

#[test]
fn test_relative_positions_are_rebased() {
    let records = vec![SequenceRecord::new("seq", "TTTTGAGTTCTTTT")];
    let matches = run_search(&records, "GAATTC", Alphabet::Dna, 1).unwrap();

    assert_eq!(matches.len(), 1);
    let m = &matches[0];
    assert_eq!(m.span, Span::new(4, 10));
    assert_eq!(m.positions.substitutions, vec![6]);
    assert_eq!(m.relative_positions.substitutions, vec![6 - m.span.start]);
    assert_eq!(m.marks.substitutions, "  *");
}

#[test]
fn test_end_to_end_dna_scenario() {
    let pattern = CompiledPattern::from_motif("AN", Alphabet::Dna, 1, false).unwrap();
    assert_eq!(pattern.translated(), "A[GATC]");

    let records = vec![SequenceRecord::new("seq", "ACGT")];
    let exact = run_search(&records, "AN", Alphabet::Dna, 0).unwrap();
    assert_eq!(exact.len(), 1);
    assert_eq!(exact[0].span, Span::new(0, 2));
    assert_eq!(exact[0].matched, "AC");

    let fuzzy = run_search(&records, "AN", Alphabet::Dna, 1).unwrap();
    let spans: Vec<Span> = fuzzy.iter().map(|m| m.span).collect();
    assert_eq!(
        spans,
        vec![Span::new(0, 2), Span::new(1, 3), Span::new(2, 4), Span::new(3, 4)]
    );
    for m in &fuzzy {
        assert!(m.counts.total() <= 1);
    }
}

/// Span, matched text, and (substitution, insertion, deletion) positions
type Summary = (Span, String, [Vec<usize>; 3]);

fn summary(sequence: &str, motif: &str, max_edits: usize) -> Vec<Summary> {
    let records = vec![SequenceRecord::new("seq", sequence)];
    run_search(&records, motif, Alphabet::Dna, max_edits)
        .unwrap()
        .into_iter()
        .map(|m| {
            (
                m.span,
                m.matched,
                [
                    m.positions.substitutions,
                    m.positions.insertions,
                    m.positions.deletions,
                ],
            )
        })
        .collect()
}

#[test]
fn test_fuzzy_match_list_with_flanking_bases() {
    assert_eq!(
        summary("TTACGTTT", "ACGT", 1),
        vec![
            (Span::new(2, 6), "ACGT".to_string(), [vec![], vec![], vec![]]),
            (Span::new(3, 6), "CGT".to_string(), [vec![], vec![], vec![3]]),
        ]
    );
}

#[test]
fn test_fuzzy_match_list_with_trailing_deletion() {
    assert_eq!(
        summary("GACAGGT", "TT", 1),
        vec![
            (Span::new(5, 7), "GT".to_string(), [vec![5], vec![], vec![]]),
            (Span::new(6, 7), "T".to_string(), [vec![], vec![], vec![7]]),
        ]
    );
}

#[test]
fn test_fuzzy_match_list_prefers_substitution() {
    assert_eq!(
        summary("TCGCATCACAA", "CT", 1),
        vec![
            (Span::new(0, 1), "T".to_string(), [vec![], vec![], vec![0]]),
            (Span::new(1, 3), "CG".to_string(), [vec![2], vec![], vec![]]),
            (Span::new(3, 5), "CA".to_string(), [vec![4], vec![], vec![]]),
            (Span::new(4, 6), "AT".to_string(), [vec![4], vec![], vec![]]),
            (Span::new(5, 6), "T".to_string(), [vec![], vec![], vec![5]]),
            (Span::new(6, 8), "CA".to_string(), [vec![7], vec![], vec![]]),
            (Span::new(8, 10), "CA".to_string(), [vec![9], vec![], vec![]]),
        ]
    );
}

#[test]
fn test_fuzzy_match_list_with_two_edits() {
    assert_eq!(
        summary("GTCAATGCGAT", "GACAA", 2),
        vec![
            (Span::new(0, 5), "GTCAA".to_string(), [vec![1], vec![], vec![]]),
            (Span::new(1, 5), "TCAA".to_string(), [vec![1], vec![], vec![2]]),
            (Span::new(2, 5), "CAA".to_string(), [vec![], vec![], vec![2, 3]]),
            (Span::new(6, 10), "GCGA".to_string(), [vec![8], vec![], vec![7]]),
        ]
    );
}

#[test]
fn test_fuzzy_match_list_with_insertion() {
    assert_eq!(
        summary("ACTGT", "ACGT", 1),
        vec![(Span::new(0, 5), "ACTGT".to_string(), [vec![], vec![2], vec![]])]
    );
}

#[test]
fn test_no_match_opens_with_insertion() {
    for sequence in ["TTACGTTT", "GAC", "CCGATTACAGGA", "ACACACGTGT"] {
        for motif in ["ACGT", "AC", "GNNA"] {
            for m in summary(sequence, motif, 2) {
                assert_ne!(m.2[1].first(), Some(&m.0.start), "{motif} in {sequence}: {m:?}");
            }
        }
    }
}

#[test]
fn test_empty_sequence_yields_no_matches() {
    let records = vec![SequenceRecord::new("empty", "")];
    let matches = run_search(&records, "ACGT", Alphabet::Dna, 2).unwrap();
    assert!(matches.is_empty());
}

#[test]
fn test_unbalanced_motif_is_rejected() {
    let records = vec![SequenceRecord::new("seq", "ACGT")];
    let result = run_search(&records, "AC(GT", Alphabet::Dna, 1);
    assert!(matches!(result, Err(MotifError::InvalidMotif(_))));
}

#[test]
fn test_unknown_alphabet_tag() {
    let result = "peptide".parse::<Alphabet>();
    assert!(matches!(result, Err(MotifError::UnsupportedAlphabet(_))));
}

#[test]
fn test_pattern_is_reusable_across_records() {
    let pattern = CompiledPattern::from_motif("GAT", Alphabet::Dna, 0, false).unwrap();
    let first: Vec<_> = find_matches(&pattern, "GATGAT").collect();
    let second: Vec<_> = find_matches(&pattern, "CCGAT").collect();
    let again: Vec<_> = find_matches(&pattern, "GATGAT").collect();

    assert_eq!(first.len(), 2);
    assert_eq!(second.len(), 1);
    assert_eq!(first, again);
}
