//! Conversion of absolute edit positions into match-relative coordinates.

use crate::core::types::{AnnotationMarks, EditPositions, Span};

/// Glyph marking a substituted position
pub const SUBSTITUTION_MARK: char = '*';

/// Glyph marking an inserted position
pub const INSERTION_MARK: char = '^';

/// Re-base edit positions to the match start and draw the mark lines.
///
/// Deletions appear in the relative positions but get no mark line, since a
/// deleted pattern symbol has no character in the matched text to sit under.
/// Relative positions are not checked against the match length.
#[must_use]
pub fn normalize(positions: &EditPositions, span: Span) -> (EditPositions, AnnotationMarks) {
    let rebase = |absolute: &[usize]| -> Vec<usize> {
        absolute.iter().map(|&p| p - span.start).collect()
    };

    let relative = EditPositions {
        substitutions: rebase(&positions.substitutions),
        insertions: rebase(&positions.insertions),
        deletions: rebase(&positions.deletions),
    };

    let marks = AnnotationMarks {
        substitutions: mark_line(&relative.substitutions, SUBSTITUTION_MARK),
        insertions: mark_line(&relative.insertions, INSERTION_MARK),
    };

    (relative, marks)
}

/// A line as long as the furthest mark, blank except at `positions`
fn mark_line(positions: &[usize], glyph: char) -> String {
    let Some(&last) = positions.iter().max() else {
        return String::new();
    };

    let mut line = vec![' '; last + 1];
    for &p in positions {
        line[p] = glyph;
    }
    line.into_iter().collect()
}
