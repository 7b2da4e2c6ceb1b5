//! End-to-end pipeline tests for the dictionary writer

mod common;

use common::fixtures::taxonomy_fixture;
use std::fs;
use taxdict_core::{write_dict, Rank};

#[test]
fn test_write_species_dictionary() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("taxonomy.tsv");

    let count = write_dict(
        &taxonomy_fixture("sample.dat"),
        &output,
        Rank::Species,
        None,
    )
    .unwrap();
    assert_eq!(count, 4);

    let content = fs::read_to_string(&output).unwrap();
    let lines: Vec<_> = content.lines().collect();
    assert_eq!(lines.len(), 4);

    // Streaming selection keeps file order.
    assert!(lines[0].starts_with("species:ncbi:562\t"));
    assert!(lines[1].starts_with("species:ncbi:1280\t"));
    assert!(lines[2].starts_with("species:ncbi:2188\t"));
    assert!(lines[3].starts_with("species:ncbi:99999\t"));

    assert_eq!(
        lines[0],
        "species:ncbi:562\tB. coli|B.coli|Bacillus coli|Bacterium coli|E. coli|E.coli|\
         Escherichia coli|b. coli|b.coli|bacillus coli|bacterium coli|e. coli|e.coli|\
         escherichia coli"
    );
}

#[test]
fn test_write_genus_dictionary() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("genus.tsv");

    let count = write_dict(
        &taxonomy_fixture("sample.dat"),
        &output,
        Rank::Genus,
        None,
    )
    .unwrap();
    assert_eq!(count, 1);

    let content = fs::read_to_string(&output).unwrap();
    assert_eq!(content, "species:ncbi:561\tEscherichia\n");
}

#[test]
fn test_write_subtree_dictionary() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("bacteria.tsv");

    let count = write_dict(
        &taxonomy_fixture("sample.dat"),
        &output,
        Rank::Species,
        Some("2"),
    )
    .unwrap();
    assert_eq!(count, 2);

    let content = fs::read_to_string(&output).unwrap();
    let ids: Vec<_> = content
        .lines()
        .map(|l| l.split('\t').next().unwrap())
        .collect();
    // Index order: taxon IDs sorted as strings.
    assert_eq!(ids, ["species:ncbi:1280", "species:ncbi:562"]);
}

#[test]
fn test_output_is_deterministic() {
    let dir = tempfile::tempdir().unwrap();
    let first = dir.path().join("first.tsv");
    let second = dir.path().join("second.tsv");

    write_dict(
        &taxonomy_fixture("sample.dat"),
        &first,
        Rank::Species,
        Some("1"),
    )
    .unwrap();
    write_dict(
        &taxonomy_fixture("sample.dat"),
        &second,
        Rank::Species,
        Some("1"),
    )
    .unwrap();

    assert_eq!(fs::read(&first).unwrap(), fs::read(&second).unwrap());
}

#[test]
fn test_skipped_records_reduce_the_count() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("malformed.tsv");

    // Two well-formed records, one of them a species.
    let count = write_dict(
        &taxonomy_fixture("malformed.dat"),
        &output,
        Rank::Species,
        None,
    )
    .unwrap();
    assert_eq!(count, 1);

    let content = fs::read_to_string(&output).unwrap();
    assert!(content.starts_with("species:ncbi:10\t"));
}

#[test]
fn test_missing_input_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("out.tsv");

    let result = write_dict(
        &taxonomy_fixture("no-such-file.dat"),
        &output,
        Rank::Species,
        None,
    );
    assert!(result.is_err());
    // The failure happens before the output file is created.
    assert!(!output.exists());
}
