//! CSV batch estimation: many form submissions in, one result row each out.

use std::fs::File;
use std::io::{self, Read, Write};
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;
use tracing::{info, warn};

use crate::estimator::{EstimateResult, SavingsModel};
use crate::input::{EstimateForm, InputError};

/// Column header for batch output.
const HEADER: &str = "monthly_bill,home_size,location,annual_savings,lifetime_savings,\
                      system_size_kw,carbon_offset_tons_per_year,error";

/// Failure reading or writing a batch file.
#[derive(Debug, Error)]
pub enum BatchError {
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

/// One input row, kept as text so it goes through the same parsing as the form.
#[derive(Debug, Deserialize)]
struct InputRow {
    #[serde(default)]
    monthly_bill: String,
    #[serde(default)]
    home_size: String,
    #[serde(default)]
    location: String,
}

/// Outcome for a single batch row.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchEntry {
    /// The row as it was read.
    pub form: EstimateForm,
    /// The estimate, or the reason the estimator was not invoked.
    pub outcome: Result<EstimateResult, InputError>,
}

/// Reads requests from a CSV file and estimates each one.
///
/// # Errors
///
/// Returns a `BatchError` if the file cannot be opened or is malformed CSV.
/// Rows with invalid values are not errors; they carry an `InputError`.
pub fn estimate_file(model: &SavingsModel, path: &Path) -> Result<Vec<BatchEntry>, BatchError> {
    let file = File::open(path)?;
    let entries = estimate_csv(model, file)?;
    info!(path = %path.display(), rows = entries.len(), "batch estimated");
    Ok(entries)
}

/// Reads requests as CSV from any reader and estimates each one.
///
/// The input must have a header row naming `monthly_bill`, `home_size` and
/// `location`; columns may appear in any order and missing ones read as empty.
///
/// # Errors
///
/// Returns a `BatchError` if the CSV is malformed.
pub fn estimate_csv(model: &SavingsModel, reader: impl Read) -> Result<Vec<BatchEntry>, BatchError> {
    let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let mut entries = Vec::new();

    for (line, row) in rdr.deserialize::<InputRow>().enumerate() {
        let row = row?;
        let form = EstimateForm::new(row.monthly_bill, row.home_size, row.location);
        let outcome = form.validate().map(|input| model.estimate(&input));
        if let Err(err) = &outcome {
            warn!(row = line + 1, %err, "skipping estimate for row");
        }
        entries.push(BatchEntry { form, outcome });
    }

    Ok(entries)
}

/// Writes batch results to a CSV file at the given path.
///
/// # Errors
///
/// Returns a `BatchError` if file creation or writing fails.
pub fn export_csv(entries: &[BatchEntry], path: &Path) -> Result<(), BatchError> {
    let file = File::create(path)?;
    let buf = io::BufWriter::new(file);
    write_csv(entries, buf)
}

/// Writes batch results as CSV to any writer.
///
/// Rejected rows keep their input columns, leave the result columns empty
/// and carry the prompt text in `error`.
///
/// # Errors
///
/// Returns a `BatchError` if writing fails.
pub fn write_csv(entries: &[BatchEntry], writer: impl Write) -> Result<(), BatchError> {
    let mut wtr = csv::WriterBuilder::new().from_writer(writer);

    wtr.write_record(HEADER.split(',').map(str::trim))?;

    for entry in entries {
        let form = &entry.form;
        let record = match &entry.outcome {
            Ok(r) => [
                form.monthly_bill.clone(),
                form.home_size.clone(),
                form.location.clone(),
                r.annual_savings.to_string(),
                r.lifetime_savings.to_string(),
                r.system_size_kw.to_string(),
                r.carbon_offset_tons_per_year.to_string(),
                String::new(),
            ],
            Err(err) => [
                form.monthly_bill.clone(),
                form.home_size.clone(),
                form.location.clone(),
                String::new(),
                String::new(),
                String::new(),
                String::new(),
                err.to_string(),
            ],
        };
        wtr.write_record(&record)?;
    }

    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const INPUT: &str = "monthly_bill,home_size,location\n\
                         100,1500,medium\n\
                         200,2000,high\n\
                         0,1500,low\n\
                         80,abc,low\n";

    fn run(input: &str) -> Vec<BatchEntry> {
        estimate_csv(&SavingsModel::default(), input.as_bytes()).expect("batch should parse")
    }

    #[test]
    fn every_row_produces_an_entry() {
        let entries = run(INPUT);
        assert_eq!(entries.len(), 4);
        assert_eq!(entries.iter().filter(|e| e.outcome.is_ok()).count(), 2);
    }

    #[test]
    fn valid_rows_match_reference_values() {
        let entries = run(INPUT);
        let first = entries[0].outcome.expect("first row is valid");
        assert_eq!(first.annual_savings, 1080.0);
        assert_eq!(first.carbon_offset_tons_per_year, 14.4);
        let second = entries[1].outcome.expect("second row is valid");
        assert_eq!(second.lifetime_savings, 70200.0);
    }

    #[test]
    fn unparseable_size_is_rejected() {
        let entries = run(INPUT);
        assert!(matches!(
            entries[3].outcome,
            Err(InputError::InvalidValues { home_size, .. }) if home_size == 0.0
        ));
    }

    #[test]
    fn columns_in_any_order_and_location_optional() {
        let entries = run("home_size,monthly_bill\n1500, 100 \n");
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].form.location, "");
        assert_eq!(entries[0].outcome.map(|r| r.annual_savings), Ok(1080.0));
    }

    #[test]
    fn header_and_row_count() {
        let entries = run(INPUT);
        let mut buf = Vec::new();
        write_csv(&entries, &mut buf).expect("write should succeed");
        let output = String::from_utf8(buf).expect("output is UTF-8");
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(
            lines[0],
            "monthly_bill,home_size,location,annual_savings,lifetime_savings,\
             system_size_kw,carbon_offset_tons_per_year,error"
        );
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[1], "100,1500,medium,1080,27000,9.6,14.4,");
        assert_eq!(lines[2], "200,2000,high,2808,70200,25,48.8,");
    }

    #[test]
    fn rejected_rows_carry_the_prompt() {
        let entries = run(INPUT);
        let mut buf = Vec::new();
        write_csv(&entries, &mut buf).expect("write should succeed");

        let mut rdr = csv::ReaderBuilder::new().from_reader(buf.as_slice());
        let records: Vec<csv::StringRecord> = rdr.records().filter_map(Result::ok).collect();
        assert_eq!(records.len(), 4);
        assert_eq!(&records[2][3], "");
        assert_eq!(
            &records[2][7],
            "Please enter valid values for monthly bill and home size."
        );
    }

    #[test]
    fn deterministic_output() {
        let entries = run(INPUT);
        let mut buf1 = Vec::new();
        let mut buf2 = Vec::new();
        write_csv(&entries, &mut buf1).ok();
        write_csv(&entries, &mut buf2).ok();
        assert_eq!(buf1, buf2);
    }
}
