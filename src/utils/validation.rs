//! Centralized validation and helper functions.

/// Maximum number of sequence records accepted from a single file
pub const MAX_RECORDS: usize = 1_000_000;

/// Maximum edit budget accepted for a motif
pub const MAX_EDITS: usize = 255;

/// Maximum number of automaton states a compiled motif may use
pub const MAX_PATTERN_STATES: usize = 10_000;

/// Check whether a byte may appear in an input sequence.
///
/// Sequences may hold ASCII letters of any alphabet, gap characters
/// (`-` and `.`), and spaces.
///
/// # Examples
///
/// ```
/// use motif_spotter::utils::validation::is_valid_sequence_byte;
///
/// assert!(is_valid_sequence_byte(b'A'));
/// assert!(is_valid_sequence_byte(b'-'));
/// assert!(!is_valid_sequence_byte(b'*'));
/// ```
#[must_use]
pub fn is_valid_sequence_byte(b: u8) -> bool {
    b.is_ascii_alphabetic() || matches!(b, b'-' | b'.' | b' ')
}

/// Find the first character that may not appear in a sequence.
///
/// Returns the character and its 0-based byte offset, or `None` if the
/// sequence is valid.
#[must_use]
pub fn find_invalid_sequence_char(sequence: &str) -> Option<(usize, char)> {
    sequence
        .char_indices()
        .find(|(_, c)| !c.is_ascii() || !is_valid_sequence_byte(*c as u8))
}

/// Check if adding another record would exceed the maximum allowed.
///
/// Call this with the current count BEFORE adding a new record.
/// Returns an error message if adding would exceed the limit, None if safe to add.
#[must_use]
pub fn check_record_limit(count: usize) -> Option<String> {
    if count >= MAX_RECORDS {
        Some(format!(
            "Too many records: adding another would exceed maximum of {MAX_RECORDS}"
        ))
    } else {
        None
    }
}
