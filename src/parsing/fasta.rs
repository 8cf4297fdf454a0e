//! Parser for FASTA files using noodles.
//!
//! Produces validated [`SequenceRecord`]s ready for searching.
//! Supports both uncompressed and gzip/bgzip compressed files.
//!
//! Input is streamed. Blank and whitespace-only lines are dropped on the way
//! to the noodles reader, and the first remaining line must be a `>` header. Spaces inside sequences are removed.
//! A sequence may contain ASCII letters, `-`, and `.`; anything else is an
//! [`ParseError::InvalidSequence`] and aborts the whole file.

use std::ffi::OsStr;
use std::io::{self, BufRead, BufReader, Read};
use std::path::Path;

use flate2::read::MultiGzDecoder;
use noodles::fasta;
use thiserror::Error;

use crate::core::record::SequenceRecord;
use crate::utils::validation::{check_record_limit, find_invalid_sequence_char};

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid FASTA format: {0}")]
    InvalidFormat(String),

    #[error("noodles error: {0}")]
    Noodles(String),

    #[error("Invalid sequence in record '{identifier}': unexpected character '{character}' at position {position}")]
    InvalidSequence {
        identifier: String,
        character: char,
        /// 1-based position in the sequence after space removal
        position: usize,
    },

    #[error("Too many records: {0} exceeds maximum allowed")]
    TooManyRecords(usize),
}

/// Check if the path has a FASTA extension
pub fn is_fasta_file(path: &Path) -> bool {
    let path_str = path.to_string_lossy().to_lowercase();

    // Check for gzipped FASTA
    if [".gz", ".bgz"].iter().any(|gz| {
        [".fa", ".fasta", ".fna", ".faa", ".ffn"]
            .iter()
            .any(|ext| path_str.ends_with(&format!("{ext}{gz}")))
    }) {
        return true;
    }

    matches!(
        path.extension()
            .and_then(OsStr::to_str)
            .map(str::to_lowercase)
            .as_deref(),
        Some("fa" | "fasta" | "fna" | "faa" | "ffn")
    )
}

/// Check if the path is a gzipped file
#[allow(clippy::case_sensitive_file_extension_comparisons)] // Already lowercased
fn is_gzipped(path: &Path) -> bool {
    let path_str = path.to_string_lossy().to_lowercase();
    path_str.ends_with(".gz") || path_str.ends_with(".bgz")
}

/// Read and validate every record of a FASTA file.
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read, `ParseError::InvalidFormat`
/// if it is not FASTA or holds no records, `ParseError::Noodles` if parsing
/// fails, `ParseError::InvalidSequence` for a sequence with illegal
/// characters, or `ParseError::TooManyRecords` if the limit is exceeded.
pub fn parse_fasta_file(path: &Path) -> Result<Vec<SequenceRecord>, ParseError> {
    let file = std::fs::File::open(path)?;
    if is_gzipped(path) {
        parse_fasta_reader(BufReader::new(MultiGzDecoder::new(file)))
    } else {
        parse_fasta_reader(BufReader::new(file))
    }
}

/// Parse and validate FASTA text.
///
/// # Errors
///
/// See [`parse_fasta_file`].
pub fn parse_fasta_text(text: &str) -> Result<Vec<SequenceRecord>, ParseError> {
    parse_fasta_reader(text.as_bytes())
}

/// Parse and validate FASTA from a buffered reader.
///
/// # Errors
///
/// See [`parse_fasta_file`].
pub fn parse_fasta_reader<R: BufRead>(reader: R) -> Result<Vec<SequenceRecord>, ParseError> {
    let mut lines = NonBlankLines::new(reader);
    match lines.fill_buf()?.first().copied() {
        Some(b'>') => {}
        Some(_) => {
            return Err(ParseError::InvalidFormat(
                "not a valid FASTA file".to_string(),
            ))
        }
        None => {
            return Err(ParseError::InvalidFormat(
                "No sequences found in FASTA file".to_string(),
            ))
        }
    }

    let mut reader = fasta::io::Reader::new(lines);
    let mut records = Vec::new();
    for result in reader.records() {
        let record = result
            .map_err(|e| ParseError::Noodles(format!("Failed to parse FASTA record: {e}")))?;

        // Check record limit for DOS protection
        if check_record_limit(records.len()).is_some() {
            return Err(ParseError::TooManyRecords(records.len()));
        }

        let identifier = identifier(&record);
        let sequence: String = String::from_utf8_lossy(record.sequence().as_ref())
            .chars()
            .filter(|c| *c != ' ')
            .collect();

        if let Some((offset, character)) = find_invalid_sequence_char(&sequence) {
            return Err(ParseError::InvalidSequence {
                identifier,
                character,
                position: sequence[..offset].chars().count() + 1,
            });
        }

        records.push(SequenceRecord::new(identifier, sequence));
    }

    Ok(records)
}

/// Full header text after `>`, since noodles splits off the description
fn identifier(record: &fasta::Record) -> String {
    let name = String::from_utf8_lossy(record.name());
    match record.description().filter(|d| !d.is_empty()) {
        Some(description) => format!("{name} {}", String::from_utf8_lossy(description)),
        None => name.into_owned(),
    }
}

/// Line-filtering reader that drops blank and whitespace-only lines.
struct NonBlankLines<R> {
    inner: R,
    line: Vec<u8>,
    consumed: usize,
}

impl<R: BufRead> NonBlankLines<R> {
    fn new(inner: R) -> Self {
        Self {
            inner,
            line: Vec::new(),
            consumed: 0,
        }
    }
}

impl<R: BufRead> Read for NonBlankLines<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let available = self.fill_buf()?;
        let n = available.len().min(buf.len());
        buf[..n].copy_from_slice(&available[..n]);
        self.consume(n);
        Ok(n)
    }
}

impl<R: BufRead> BufRead for NonBlankLines<R> {
    fn fill_buf(&mut self) -> io::Result<&[u8]> {
        while self.consumed == self.line.len() {
            self.line.clear();
            self.consumed = 0;
            if self.inner.read_until(b'\n', &mut self.line)? == 0 {
                break;
            }
            if self.line.iter().all(u8::is_ascii_whitespace) {
                self.line.clear();
            }
        }
        Ok(&self.line[self.consumed..])
    }

    fn consume(&mut self, amt: usize) {
        self.consumed = (self.consumed + amt).min(self.line.len());
    }
}
