//! Row model for the Mintos account statement CSV.
//!
//! Statement rows are positional rather than named: field 0 holds a combined
//! "date time" value, field 2 the transaction details (which may embed a loan
//! id), the 4th-from-last field the turnover amount, and the last field the
//! payment type label.

use crate::amount::Amount;
use crate::error::{ConvertError, Result};
use csv::StringRecord;
use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;
use std::str::FromStr;

static LOAN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\(Loan (\S+)\)").expect("valid loan pattern"));

/// Returns `true` if the record has the shape of a statement data row.
///
/// Field 0 must contain a space separating date and time, and the record must
/// be wide enough for the positional field extractions. Header rows fail the
/// space check, which is how they are filtered out.
pub fn looks_like_data_row(record: &StringRecord) -> bool {
    record.len() >= 4 && record.get(0).map_or(false, |field| field.contains(' '))
}

/// Payment type labels the converter understands.
///
/// Any other label causes the row to be dropped without an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    /// `Deposits` — money moved onto the platform.
    Deposit,

    /// `Interest received` — interest paid out by a loan.
    Interest,

    /// `Tax withholding` — tax withheld at source; merged with interest.
    TaxWithholding,

    /// `Withdrawal` — money moved off the platform.
    Withdrawal,
}

impl Category {
    /// Maps a payment type label to a category. Exact string match.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Deposits" => Some(Category::Deposit),
            "Interest received" => Some(Category::Interest),
            "Tax withholding" => Some(Category::TaxWithholding),
            "Withdrawal" => Some(Category::Withdrawal),
            _ => None,
        }
    }
}

/// A single dated booking extracted from a statement row.
#[derive(Debug, Clone)]
pub struct Transaction {
    /// Booking date, `YYYY-MM-DD`
    pub date: String,

    /// Booking time, `HH:MM:SS`
    pub time: String,

    /// Turnover amount, fixed-point with 6 decimals
    pub amount: Amount,
}

/// A parsed statement row, ready for aggregation.
#[derive(Debug, Clone)]
pub struct StatementRow {
    /// The booking carried by this row
    pub transaction: Transaction,

    /// Grouping key: the loan id from the details field, or the raw details
    /// string when no `(Loan <id>)` marker is present
    pub loan_id: String,

    /// Payment type category
    pub category: Category,
}

impl StatementRow {
    /// Parses a raw CSV record into a statement row.
    ///
    /// Returns `Ok(None)` for rows that should be skipped: records that do
    /// not look like data rows (headers, malformed shapes) and records with
    /// an unknown payment type label. A non-numeric amount field on an
    /// otherwise acceptable row is an unrecoverable error.
    pub fn parse(record: &StringRecord, row: usize) -> Result<Option<Self>> {
        if !looks_like_data_row(record) {
            debug!("Row {}: not a data row, skipping", row);
            return Ok(None);
        }

        // looks_like_data_row guarantees field 0 exists and contains a space
        let (date, time) = match record.get(0).and_then(|f| f.split_once(' ')) {
            Some(parts) => parts,
            None => return Ok(None),
        };

        let raw_amount = record.get(record.len() - 4).unwrap_or("");
        let amount =
            Amount::from_str(raw_amount).map_err(|_| ConvertError::InvalidAmount {
                row,
                value: raw_amount.to_string(),
            })?;

        let details = record.get(2).unwrap_or("");
        let loan_id = LOAN_RE
            .captures(details)
            .map(|caps| caps[1].to_string())
            .unwrap_or_else(|| details.to_string());

        let label = record.get(record.len() - 1).unwrap_or("");
        let category = match Category::from_label(label) {
            Some(category) => category,
            None => {
                debug!("Row {}: unknown payment type \"{}\", skipping", row, label);
                return Ok(None);
            }
        };

        Ok(Some(StatementRow {
            transaction: Transaction {
                date: date.to_string(),
                time: time.to_string(),
                amount,
            },
            loan_id,
            category,
        }))
    }
}
