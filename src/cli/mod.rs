//! Command-line interface for motif-spotter.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **search**: Find approximate motif matches in a FASTA file
//! - **translate**: Show how a motif's ambiguity codes are expanded
//!
//! ## Usage
//!
//! ```text
//! # Exact search for an EcoRI-like site, CSV written to Matched_Seq_<timestamp>.csv
//! motif-spotter search sequences.fa -m GAATTC -t dna
//!
//! # Allow up to two edits and write JSON to stdout
//! motif-spotter --format json search sequences.fa -m GANTC -t dna -e 2 -o -
//!
//! # Inspect the translated pattern
//! motif-spotter translate -m NXBZ -t amino
//! ```

use clap::{Parser, Subcommand};

use crate::core::types::Alphabet;

pub mod search;
pub mod translate;

#[derive(Parser)]
#[command(name = "motif-spotter")]
#[command(version)]
#[command(about = "Search FASTA sequences for IUPAC motifs with approximate matching")]
#[command(
    long_about = "motif-spotter finds occurrences of a motif in DNA, RNA, or protein FASTA records.\n\nMotifs may contain IUPAC ambiguity codes and regular-expression syntax, and may be matched approximately:\n- Substitutions, insertions, and deletions count against a single edit budget\n- Overlapping matches are all reported\n- Each match lists where its edits occurred relative to the match start"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "csv")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search a FASTA file for a motif
    Search(search::SearchArgs),

    /// Show the pattern a motif translates to
    Translate(translate::TranslateArgs),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Csv,
    Tsv,
    Json,
    Text,
}

impl OutputFormat {
    /// File extension used for default output names
    #[must_use]
    pub fn extension(self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Tsv => "tsv",
            Self::Json => "json",
            Self::Text => "txt",
        }
    }
}

/// Alphabet tag accepted on the command line
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum MotifType {
    Dna,
    Rna,
    Amino,
}

impl From<MotifType> for Alphabet {
    fn from(motif_type: MotifType) -> Self {
        match motif_type {
            MotifType::Dna => Alphabet::Dna,
            MotifType::Rna => Alphabet::Rna,
            MotifType::Amino => Alphabet::Protein,
        }
    }
}
