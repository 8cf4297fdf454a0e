use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Args;
use tracing::warn;

use crate::cli::{MotifType, OutputFormat};
use crate::core::record::MatchRecord;
use crate::matching::search::{search_records, SearchConfig};
use crate::motif::CompiledPattern;
use crate::parsing::fasta::{is_fasta_file, parse_fasta_file};
use crate::report::{self, ReportOptions};

#[derive(Args)]
pub struct SearchArgs {
    /// Input FASTA file (.fa, .fasta, .fna, .faa; gzip/bgzip compressed allowed)
    #[arg(required = true)]
    pub input: PathBuf,

    /// Motif to search for; IUPAC codes and regular-expression syntax are supported
    #[arg(short, long)]
    pub motif: String,

    /// Alphabet of the motif
    #[arg(short = 't', long, value_enum)]
    pub motif_type: MotifType,

    /// Maximum number of edits (substitutions + insertions + deletions) per match
    #[arg(short = 'e', long, default_value = "0")]
    pub max_edits: usize,

    /// Output file; '-' writes to stdout
    /// [default: Matched_Seq_<YYYYMMDD_HHMMSS>.<format>]
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Show substitution and insertion marks around the matched text
    #[arg(long)]
    pub annotate: bool,

    /// Match letters regardless of case
    #[arg(long)]
    pub ignore_case: bool,
}

/// Execute search subcommand
///
/// # Errors
///
/// Returns an error if the motif does not compile, the input cannot be
/// parsed, or the report cannot be written.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: SearchArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let config = SearchConfig {
        alphabet: args.motif_type.into(),
        max_edits: args.max_edits,
        case_insensitive: args.ignore_case,
    };

    // Compile before reading input so a bad motif fails fast
    let pattern = config.compile(&args.motif)?;

    if !is_fasta_file(&args.input) {
        warn!(
            path = %args.input.display(),
            "Input does not have a FASTA extension, parsing anyway"
        );
    }

    let records = parse_fasta_file(&args.input)
        .with_context(|| format!("Failed to read {}", args.input.display()))?;

    if verbose {
        eprintln!(
            "Parsed {} records from {}",
            records.len(),
            args.input.display()
        );
        eprintln!("Searching with pattern {pattern}");
    }

    let matches = search_records(&records, &pattern);
    let options = ReportOptions {
        annotate: args.annotate,
    };

    let output = args
        .output
        .clone()
        .unwrap_or_else(|| default_output_path(format));

    if output == Path::new("-") {
        let stdout = std::io::stdout();
        write_report(stdout.lock(), format, &args.motif, &pattern, &matches, options)?;
    } else {
        let file = File::create(&output)
            .with_context(|| format!("Failed to create {}", output.display()))?;
        write_report(
            BufWriter::new(file),
            format,
            &args.motif,
            &pattern,
            &matches,
            options,
        )?;

        if verbose {
            eprintln!("Wrote {} matches to {}", matches.len(), output.display());
        }
    }

    Ok(())
}

/// `Matched_Seq_<local timestamp>.<ext>` in the working directory
fn default_output_path(format: OutputFormat) -> PathBuf {
    let stamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
    PathBuf::from(format!("Matched_Seq_{stamp}.{}", format.extension()))
}

fn write_report<W: Write>(
    writer: W,
    format: OutputFormat,
    motif: &str,
    pattern: &CompiledPattern,
    matches: &[MatchRecord],
    options: ReportOptions,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Csv => report::write_csv(writer, motif, matches, options),
        OutputFormat::Tsv => report::write_tsv(writer, matches, options),
        OutputFormat::Json => report::write_json(writer, motif, pattern, matches),
        OutputFormat::Text => report::write_text(writer, pattern, matches, options),
    }
}
