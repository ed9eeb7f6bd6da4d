//! Integration tests for the record pipeline.

use std::fs;
use std::path::Path;

use flight_cli::pipeline::{CsvSink, NullSink, ProcessSummary, RecordSink, process_records};
use flight_ingest::FlightReader;
use flight_validate::{RowValidator, UniquenessTracker};
use tempfile::TempDir;

const INPUT: &str = "\
id,carrier_code,flight_number,flight_date
1,AB,100,2024-01-01
2,AB,101,2024-01-02
3,AB*,102,2024-01-03
4,AB*,103,2024-01-04
5,ABC,104,not-a-date
6,XYZ,,2024-01-06
7,A,106,2024-01-07
8,XYZ,107,2024-01-08
";

fn run(input: &Path, accepted: &Path, errors: &Path) -> ProcessSummary {
    let mut reader = FlightReader::from_path(input).unwrap();
    let mut accepted = CsvSink::create(accepted).unwrap();
    let mut errors = CsvSink::create(errors).unwrap();
    process_records(
        reader.records(),
        &RowValidator::new(),
        &mut UniquenessTracker::new(),
        &mut accepted,
        &mut errors,
    )
    .unwrap()
}

fn data_rows(path: &Path) -> Vec<String> {
    fs::read_to_string(path)
        .unwrap()
        .lines()
        .skip(1)
        .map(String::from)
        .collect()
}

#[test]
fn test_every_record_lands_in_one_stream() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("flights.csv");
    let accepted = dir.path().join("output.csv");
    let errors = dir.path().join("error.csv");
    fs::write(&input, INPUT).unwrap();

    let summary = run(&input, &accepted, &errors);

    let accepted_rows = data_rows(&accepted);
    let error_rows = data_rows(&errors);
    assert_eq!(summary.total, 8);
    assert_eq!(accepted_rows.len() + error_rows.len(), summary.total);
    assert_eq!(
        accepted_rows,
        vec![
            "1,AB,100,2024-01-01,IATA",
            "3,AB*,102,2024-01-03,IATA",
            "4,AB*,103,2024-01-04,IATA",
            "8,XYZ,107,2024-01-08,ICAO",
        ]
    );
    insta::assert_snapshot!(error_rows.join("\n"), @r"
    2,AB,101,2024-01-02,carrier_code 'AB' is not unique
    5,ABC,104,not-a-date,invalid flight_date 'not-a-date'
    6,XYZ,,2024-01-06,required field 'flight_number' is missing
    7,A,106,2024-01-07,invalid carrier_code format 'A'
    ");
}

#[test]
fn test_output_headers() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("flights.csv");
    let accepted = dir.path().join("output.csv");
    let errors = dir.path().join("error.csv");
    fs::write(&input, "id,carrier_code,flight_number,flight_date\n").unwrap();

    let summary = run(&input, &accepted, &errors);

    assert_eq!(summary, ProcessSummary::default());
    assert_eq!(
        fs::read_to_string(&accepted).unwrap(),
        "id,carrier_code,flight_number,flight_date,carrier_code_type\n"
    );
    assert_eq!(
        fs::read_to_string(&errors).unwrap(),
        "id,carrier_code,flight_number,flight_date,error\n"
    );
}

#[test]
fn test_malformed_header_file_rejects_every_row() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("flights.csv");
    let accepted = dir.path().join("output.csv");
    let errors = dir.path().join("error.csv");
    fs::write(
        &input,
        "id,carrier,flight_number,flight_date\n1,AB,100,2024-01-01\n2,CD,101,2024-01-02\n",
    )
    .unwrap();

    let summary = run(&input, &accepted, &errors);

    assert_eq!(summary.rejected, 2);
    assert_eq!(summary.failures.get("MalformedHeaders"), Some(&2));
    assert!(data_rows(&accepted).is_empty());
}

#[test]
fn test_surplus_values_are_rejected_and_kept() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("flights.csv");
    let accepted = dir.path().join("output.csv");
    let errors = dir.path().join("error.csv");
    fs::write(
        &input,
        "id,carrier_code,flight_number,flight_date\n1,AB,100,2024-01-01,extra\n",
    )
    .unwrap();

    let summary = run(&input, &accepted, &errors);

    assert_eq!(summary.failures.get("MalformedHeaders"), Some(&1));
    let rows = data_rows(&errors);
    assert!(rows[0].starts_with("1,AB,100,2024-01-01,extra,\"malformed headers"));
}

#[test]
fn test_blank_lines_go_to_error_stream() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("flights.csv");
    let accepted = dir.path().join("output.csv");
    let errors = dir.path().join("error.csv");
    fs::write(
        &input,
        "id,carrier_code,flight_number,flight_date\n1,AB,100,2024-01-01\n\n2,CD,101,2024-01-02\n",
    )
    .unwrap();

    let summary = run(&input, &accepted, &errors);

    assert_eq!(summary.total, 3);
    assert_eq!(summary.accepted, 2);
    assert_eq!(summary.failures.get("InvalidDate"), Some(&1));
    assert_eq!(data_rows(&errors), vec!["invalid flight_date ''"]);
}

#[test]
fn test_dry_run_sinks_count_rows() {
    let reader_input = INPUT.as_bytes();
    let mut reader = FlightReader::from_reader(reader_input, "inline").unwrap();
    let mut accepted = NullSink::default();
    let mut errors = NullSink::default();

    let summary = process_records(
        reader.records(),
        &RowValidator::new(),
        &mut UniquenessTracker::new(),
        &mut accepted,
        &mut errors,
    )
    .unwrap();

    assert_eq!(accepted.rows_written(), summary.accepted);
    assert_eq!(errors.rows_written(), summary.rejected);
    assert_eq!(summary.iata, 3);
    assert_eq!(summary.icao, 1);
}
