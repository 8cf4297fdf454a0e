use clap::Args;

use crate::cli::{MotifType, OutputFormat};
use crate::core::types::Alphabet;
use crate::matching::search::SearchConfig;

#[derive(Args)]
pub struct TranslateArgs {
    /// Motif to translate
    #[arg(short, long)]
    pub motif: String,

    /// Alphabet of the motif
    #[arg(short = 't', long, value_enum)]
    pub motif_type: MotifType,

    /// Edit budget to show in the compiled pattern
    #[arg(short = 'e', long, default_value = "0")]
    pub max_edits: usize,
}

/// Execute translate subcommand
///
/// The motif is fully compiled, so this also reports whether it is valid.
///
/// # Errors
///
/// Returns an error if the motif does not compile.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: TranslateArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let alphabet: Alphabet = args.motif_type.into();
    let config = SearchConfig {
        alphabet,
        max_edits: args.max_edits,
        ..SearchConfig::default()
    };
    let pattern = config.compile(&args.motif)?;

    if verbose {
        eprintln!("Motif compiled for {alphabet} alphabet");
    }

    match format {
        OutputFormat::Text => {
            println!("Motif:      {}", args.motif);
            println!("Alphabet:   {alphabet}");
            println!("Translated: {}", pattern.translated());
            println!("Pattern:    {pattern}");
        }
        OutputFormat::Json => {
            let output = serde_json::json!({
                "motif": args.motif,
                "alphabet": alphabet,
                "translated": pattern.translated(),
                "pattern": pattern.to_string(),
                "max_edits": pattern.max_edits(),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Csv | OutputFormat::Tsv => {
            let delimiter = if format == OutputFormat::Csv { b',' } else { b'\t' };
            let mut writer = csv::WriterBuilder::new()
                .delimiter(delimiter)
                .from_writer(std::io::stdout());
            let rendered = pattern.to_string();
            writer.write_record(["motif", "alphabet", "translated", "pattern"])?;
            writer.write_record([
                args.motif.as_str(),
                alphabet.tag(),
                pattern.translated(),
                rendered.as_str(),
            ])?;
            writer.flush()?;
        }
    }

    Ok(())
}
