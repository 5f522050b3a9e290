//! Integration tests for fidash-ext-file.

use std::io::Write;

use fidash_ext_file::{create_file_source, process_file, FileHoldingsSource, MemoryHoldingsSource};
use fidash_holdings::prelude::*;
use rust_decimal_macros::dec;

const EXPORT: &str = "\
Core Bond Fund
Holdings as of,2024-06-28
Share class,Institutional
Currency,USD
Notes,-
Source,Fund administrator
Ticker,Weight (%),Rating,Country,Issuer,Sector
A,5,AAA,US,X,Corporate Bonds
B,bad,BBB,DE,Y,Corporate Bonds
C,10,AAA,US,Z,Government Bonds
";

fn write_export(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_process_file() {
    let file = write_export(EXPORT);
    let views = process_file(file.path()).unwrap();

    assert_eq!(views.top_holdings, vec![HoldingWeight::new("A", dec!(5))]);
    assert_eq!(views.country_exposure, vec![Exposure::new("US", dec!(5))]);
    assert_eq!(views.rating_exposure, vec![Exposure::new("AAA", dec!(5))]);
    assert_eq!(views.top_issuers, vec![Exposure::new("X", dec!(5))]);
}

#[test]
fn test_file_and_memory_sources_agree() {
    let file = write_export(EXPORT);
    let config = AggregationConfig::default();

    let from_file = run(&create_file_source(file.path()), &config).unwrap();
    let from_memory = run(&MemoryHoldingsSource::new(EXPORT), &config).unwrap();

    assert_eq!(from_file, from_memory);
}

#[test]
fn test_boxed_sources() {
    let file = write_export(EXPORT);
    let sources: Vec<Box<dyn HoldingsSource>> = vec![
        Box::new(FileHoldingsSource::new(file.path())),
        Box::new(MemoryHoldingsSource::new(EXPORT).with_name("upload.csv")),
    ];

    for source in &sources {
        let views = run(&**source, &AggregationConfig::default()).unwrap();
        assert_eq!(views.summary.retained_records, 2);
    }
}

#[test]
fn test_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = process_file(dir.path().join("nope.csv")).unwrap_err();
    assert!(matches!(err, HoldingsError::Io { .. }));
}

#[test]
fn test_empty_upload_is_parse_error() {
    let err = run(&MemoryHoldingsSource::new(Vec::new()), &AggregationConfig::default())
        .unwrap_err();
    assert!(err.is_parse());
}

#[test]
fn test_binary_upload_is_parse_error() {
    // Start of a zip container, as produced by spreadsheet formats.
    let bytes = b"PK\x03\x04\x14\x00\x06\x00\x08\x00\x00\x00!\x00\xff\xfe\xfd".to_vec();
    let err = run(&MemoryHoldingsSource::new(bytes), &AggregationConfig::default()).unwrap_err();
    assert!(err.is_parse());
}
