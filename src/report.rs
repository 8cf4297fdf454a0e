//! Writers for search results.
//!
//! Every format renders one row per [`MatchRecord`] with the same columns:
//! identifier, span, matched text, edit counts, and relative edit positions.

use std::io::Write;

use serde::Serialize;

use crate::core::record::MatchRecord;
use crate::motif::CompiledPattern;

/// Column headings shared by the delimited formats
pub const HEADER: [&str; 5] = [
    "Identifier",
    "Position",
    "Sequence",
    "Fuzzy Count (substitution, insertion, deletion)",
    "Relative Positions (substitution, insertion, deletion)",
];

/// Options that change how rows are rendered
#[derive(Debug, Clone, Copy, Default)]
pub struct ReportOptions {
    /// Put the mark lines above and below the matched text
    pub annotate: bool,
}

/// One flattened output row
#[must_use]
pub fn row(record: &MatchRecord, options: ReportOptions) -> [String; 5] {
    let sequence = if options.annotate {
        record.annotated_text()
    } else {
        record.matched.clone()
    };

    [
        record.identifier.clone(),
        record.span.to_string(),
        sequence,
        record.counts.to_string(),
        record.relative_positions.to_string(),
    ]
}

/// Write results as CSV with every field quoted.
///
/// The first row is a title naming the motif, then the column headings.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_csv<W: Write>(
    writer: W,
    motif: &str,
    records: &[MatchRecord],
    options: ReportOptions,
) -> anyhow::Result<()> {
    let mut csv_writer = csv::WriterBuilder::new()
        .quote_style(csv::QuoteStyle::Always)
        .flexible(true)
        .from_writer(writer);

    csv_writer.write_record([format!("Results of spotting motif {motif}")])?;
    csv_writer.write_record(HEADER)?;
    for record in records {
        csv_writer.write_record(row(record, options))?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Write results as tab-separated values with a single heading row.
///
/// Line breaks and tabs inside fields are escaped so that every match stays
/// on one line.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_tsv<W: Write>(
    mut writer: W,
    records: &[MatchRecord],
    options: ReportOptions,
) -> anyhow::Result<()> {
    writeln!(writer, "{}", HEADER.join("\t"))?;
    for record in records {
        let fields = row(record, options).map(|f| f.replace('\t', "\\t").replace('\n', "\\n"));
        writeln!(writer, "{}", fields.join("\t"))?;
    }
    writer.flush()?;
    Ok(())
}

/// Write results as a human-readable listing.
///
/// Each match is a summary line followed by the matched text, with the mark
/// lines when annotation is on.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_text<W: Write>(
    mut writer: W,
    pattern: &CompiledPattern,
    records: &[MatchRecord],
    options: ReportOptions,
) -> anyhow::Result<()> {
    writeln!(writer, "Pattern: {pattern}")?;
    writeln!(writer, "Matches: {}", records.len())?;
    for record in records {
        writeln!(writer)?;
        writeln!(
            writer,
            "{}  {}  edits {}  at {}",
            record.identifier, record.span, record.counts, record.relative_positions
        )?;
        let text = if options.annotate {
            record.annotated_text()
        } else {
            record.matched.clone()
        };
        for line in text.lines() {
            writeln!(writer, "    {line}")?;
        }
    }
    writer.flush()?;
    Ok(())
}

#[derive(Serialize)]
struct JsonReport<'a> {
    motif: &'a str,
    pattern: String,
    max_edits: usize,
    match_count: usize,
    matches: &'a [MatchRecord],
}

/// Write results as a pretty-printed JSON document.
///
/// # Errors
///
/// Returns an error if serialization or writing fails.
pub fn write_json<W: Write>(
    mut writer: W,
    motif: &str,
    pattern: &CompiledPattern,
    records: &[MatchRecord],
) -> anyhow::Result<()> {
    let report = JsonReport {
        motif,
        pattern: pattern.to_string(),
        max_edits: pattern.max_edits(),
        match_count: records.len(),
        matches: records,
    };
    serde_json::to_writer_pretty(&mut writer, &report)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}
