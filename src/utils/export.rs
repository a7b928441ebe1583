//! CSV export of ledger records.
//!
//! Columns are `Date,Category,Amount,Description`, one row per record in
//! ledger order. The header is written even for an empty ledger.

use std::{
    fs,
    io::{Read, Write},
    path::Path,
};

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::errors::Result;
use crate::ledger::ExpenseRecord;

pub const CSV_HEADER: [&str; 4] = ["Date", "Category", "Amount", "Description"];

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct CsvRow {
    date: NaiveDate,
    category: String,
    #[serde(with = "rust_decimal::serde::str")]
    amount: Decimal,
    description: String,
}

/// Serializes `records` as CSV into `writer`.
pub fn write_records<W: Write>(records: &[ExpenseRecord], writer: W) -> Result<()> {
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    csv_writer.write_record(CSV_HEADER)?;
    for record in records {
        csv_writer.serialize(record)?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Renders `records` as an in-memory CSV document.
pub fn records_to_string(records: &[ExpenseRecord]) -> Result<String> {
    let mut buffer = Vec::new();
    write_records(records, &mut buffer)?;
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

/// Writes the export to disk atomically by staging to a temporary file.
pub fn save_records_to_file(records: &[ExpenseRecord], path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let tmp = path.with_extension("csv.tmp");
    let file = fs::File::create(&tmp)?;
    write_records(records, file)?;
    fs::rename(tmp, path)?;
    Ok(())
}

/// Parses an export back into records; used to verify exports, not to load ledgers.
pub fn read_records<R: Read>(reader: R) -> Result<Vec<ExpenseRecord>> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut records = Vec::new();
    for row in csv_reader.deserialize::<CsvRow>() {
        let row = row?;
        records.push(ExpenseRecord::new(
            row.date,
            row.category,
            row.amount,
            row.description,
        )?);
    }
    Ok(records)
}
