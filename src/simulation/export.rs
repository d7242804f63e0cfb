//! Tabular export of daily records (CSV, JSON, console table)

use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::ExportError;
use super::records::Record;

/// Exported columns, in output order
pub const COLUMNS: [&str; 10] = [
    "day",
    "money0",
    "new_loan_num",
    "new_loan_amt",
    "cf_received",
    "money",
    "loan_num",
    "loan_expired_num",
    "loan_principal",
    "loan_future_cf",
];

/// One exported row. `loan_unexpired_num` is not part of the table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportRow {
    pub day: u32,
    pub money0: f64,
    pub new_loan_num: u32,
    pub new_loan_amt: f64,
    pub cf_received: f64,
    pub money: f64,
    pub loan_num: u32,
    pub loan_expired_num: u32,
    pub loan_principal: f64,
    pub loan_future_cf: f64,
}

impl From<&Record> for ExportRow {
    fn from(r: &Record) -> Self {
        Self {
            day: r.day,
            money0: r.money0,
            new_loan_num: r.new_loan_num,
            new_loan_amt: r.new_loan_amt,
            cf_received: r.cf_received,
            money: r.money,
            loan_num: r.loan_num,
            loan_expired_num: r.loan_expired_num,
            loan_principal: r.loan_principal,
            loan_future_cf: r.loan_future_cf,
        }
    }
}

pub fn export_rows(records: &[Record]) -> Vec<ExportRow> {
    records.iter().map(ExportRow::from).collect()
}

/// Write records as CSV with a header row
pub fn write_csv<W: Write>(records: &[Record], writer: W) -> Result<(), ExportError> {
    let mut wtr = csv::Writer::from_writer(writer);
    if records.is_empty() {
        wtr.write_record(COLUMNS)?;
    }
    for row in records.iter().map(ExportRow::from) {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn write_csv_file(records: &[Record], path: &Path) -> Result<(), ExportError> {
    let file = File::create(path)?;
    write_csv(records, file)
}

/// Records as a pretty-printed JSON array of rows
pub fn to_json(records: &[Record]) -> Result<String, ExportError> {
    Ok(serde_json::to_string_pretty(&export_rows(records))?)
}

/// Fixed-width console table of the first `limit` records
pub fn format_table(records: &[Record], limit: usize) -> String {
    let mut out = format!(
        "{:>5} {:>12} {:>8} {:>10} {:>10} {:>12} {:>8} {:>8} {:>12} {:>12}\n",
        "Day", "Money0", "NewNum", "NewAmt", "CfRecv", "Money", "Loans", "Expired", "Principal", "FutureCF"
    );
    out.push_str(&"-".repeat(104));
    out.push('\n');

    for row in records.iter().take(limit).map(ExportRow::from) {
        out.push_str(&format!(
            "{:>5} {:>12.2} {:>8} {:>10.2} {:>10.2} {:>12.2} {:>8} {:>8} {:>12.2} {:>12.2}\n",
            row.day,
            row.money0,
            row.new_loan_num,
            row.new_loan_amt,
            row.cf_received,
            row.money,
            row.loan_num,
            row.loan_expired_num,
            row.loan_principal,
            row.loan_future_cf,
        ));
    }

    if records.len() > limit {
        out.push_str(&format!("... ({} more days)\n", records.len() - limit));
    }
    out
}
