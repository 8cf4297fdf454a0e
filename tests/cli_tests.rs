//! Command-line behaviour of the `motif-spotter` binary.

use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::{NamedTempFile, TempDir};

fn fasta(content: &str) -> NamedTempFile {
    let mut temp = NamedTempFile::with_suffix(".fa").expect("Failed to create temp file");
    temp.write_all(content.as_bytes())
        .expect("Failed to write temp file");
    temp.flush().expect("Failed to flush temp file");
    temp
}

fn motif_spotter() -> Command {
    Command::cargo_bin("motif-spotter").expect("binary should be built")
}

#[test]
fn test_search_csv_to_stdout() {
    let input = fasta(">seq1 test record\nTTGAATTCTT\n\n>seq2\nCCCC\n");

    motif_spotter()
        .args(["search", "-m", "GAATTC", "-t", "dna", "-o", "-"])
        .arg(input.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "\"Results of spotting motif GAATTC\"",
        ))
        .stdout(predicate::str::contains(
            "\"seq1 test record\",\"(2, 8)\",\"GAATTC\",\"(0, 0, 0)\",\"([], [], [])\"",
        ))
        .stdout(predicate::str::contains("seq2").not());
}

#[test]
fn test_search_json_with_edits() {
    let input = fasta(">seq1\nTTGAGTTCTT\n");

    let output = motif_spotter()
        .args(["--format", "json", "search", "-m", "GAATTC", "-t", "dna", "-e", "1", "-o", "-"])
        .arg(input.path())
        .output()
        .expect("command should run");
    assert!(output.status.success());

    let value: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be JSON");
    assert_eq!(value["pattern"], "(GAATTC){e<=1}");

    let matches = value["matches"].as_array().expect("matches array");
    assert_eq!(matches.len(), 1);
    let hit = &matches[0];
    assert_eq!(hit["span"]["start"], 2);
    assert_eq!(hit["span"]["end"], 8);
    assert_eq!(hit["counts"]["substitutions"], 1);
    assert_eq!(hit["relative_positions"]["substitutions"][0], 2);
}

#[test]
fn test_search_writes_output_file() {
    let input = fasta(">seq1\nACGTACGT\n");
    let dir = TempDir::new().expect("Failed to create temp dir");
    let out_path = dir.path().join("result.tsv");

    motif_spotter()
        .args(["--format", "tsv", "search", "-m", "ACG", "-t", "dna", "-o"])
        .arg(&out_path)
        .arg(input.path())
        .assert()
        .success();

    let written = std::fs::read_to_string(&out_path).expect("output file should exist");
    let lines: Vec<&str> = written.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("Identifier\tPosition"));
    assert!(lines[1].starts_with("seq1\t(0, 3)\tACG"));
    assert!(lines[2].starts_with("seq1\t(4, 7)\tACG"));
}

#[test]
fn test_invalid_sequence_is_fatal() {
    let input = fasta(">good\nACGT\n>bad\nAC1GT\n");

    motif_spotter()
        .args(["search", "-m", "ACGT", "-t", "dna", "-o", "-"])
        .arg(input.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid sequence in record 'bad'"));
}

#[test]
fn test_missing_header_is_fatal() {
    let input = fasta("ACGT\n>seq1\nACGT\n");

    motif_spotter()
        .args(["search", "-m", "ACGT", "-t", "dna", "-o", "-"])
        .arg(input.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Invalid FASTA format: not a valid FASTA file",
        ));
}

#[test]
fn test_invalid_motif_is_fatal() {
    let input = fasta(">seq1\nACGT\n");

    motif_spotter()
        .args(["search", "-m", "A(CG", "-t", "dna", "-o", "-"])
        .arg(input.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid motif"));
}

#[test]
fn test_unsupported_alphabet_is_rejected() {
    motif_spotter()
        .args(["translate", "-m", "ACGT", "-t", "xna"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value 'xna'"));
}

#[test]
fn test_translate_text() {
    motif_spotter()
        .args(["--format", "text", "translate", "-m", "NXBZ", "-t", "amino", "-e", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Translated: N[A-Z][DN][EQ]"))
        .stdout(predicate::str::contains("Pattern:    (N[A-Z][DN][EQ]){e<=2}"));
}

#[test]
fn test_annotated_text_output() {
    let input = fasta(">seq1\nACTT\n");

    motif_spotter()
        .args([
            "--format", "text", "search", "-m", "ACGT", "-t", "dna", "-e", "1", "--annotate", "-o",
            "-",
        ])
        .arg(input.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("seq1  (0, 4)  edits (1, 0, 0)"))
        .stdout(predicate::str::contains("      *\n    ACTT"));
}
