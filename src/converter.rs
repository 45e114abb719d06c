//! Core statement conversion pipeline.
//!
//! Reads the Mintos statement CSV, aggregates bookings into per-loan buckets,
//! then flattens the buckets into Parqet cash rows, sorted by date and time.

use crate::amount::Amount;
use crate::error::Result;
use crate::holding::HoldingId;
use crate::statement::{Category, StatementRow, Transaction};
use csv::{QuoteStyle, ReaderBuilder, WriterBuilder};
use log::debug;
use serde::Serialize;
use std::collections::HashMap;
use std::io::{Read, Write};

/// Transaction types of the Parqet cash CSV.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CashType {
    /// Money entering the holding.
    TransferIn,

    /// Money leaving the holding.
    TransferOut,

    /// Interest credited to the holding.
    Interest,
}

/// A single row of the Parqet cash CSV.
///
/// Serialized semicolon-delimited, unquoted; the header comes from the field
/// names. The `tax` and `fee` columns are always literal `0` — tax
/// withholding is merged into interest rather than reported separately.
#[derive(Debug, Clone, Serialize)]
pub struct CashRow {
    /// Booking date, `YYYY-MM-DD`
    pub date: String,

    /// Booking time, `HH:MM:SS`
    pub time: String,

    /// Non-negative amount with exactly 6 decimals
    pub amount: Amount,

    /// Always `0`
    pub tax: u8,

    /// Always `0`
    pub fee: u8,

    /// Parqet transaction type
    #[serde(rename = "type")]
    pub cash_type: CashType,

    /// Id of the holding every row belongs to
    pub holding: HoldingId,
}

impl CashRow {
    fn new(transaction: Transaction, cash_type: CashType, holding: HoldingId) -> Self {
        CashRow {
            date: transaction.date,
            time: transaction.time,
            amount: transaction.amount,
            tax: 0,
            fee: 0,
            cash_type,
            holding,
        }
    }

    /// Sort key: the concatenation of date and time. Lexicographic order
    /// matches chronological order because both fields are fixed-width.
    pub fn sort_key(&self) -> String {
        format!("{}{}", self.date, self.time)
    }
}

/// Bookings grouped under one loan id.
#[derive(Debug, Default)]
struct LoanBucket {
    deposits: Vec<Transaction>,
    withdrawals: Vec<Transaction>,
    interests: Vec<Transaction>,
}

/// The statement conversion pipeline.
///
/// Owns the per-loan aggregation map for the duration of one run. Buckets are
/// created lazily on the first row referencing a loan id, and iterated in
/// first-seen order when the output is generated.
pub struct StatementConverter {
    holding: HoldingId,

    /// Buckets indexed by loan id.
    loans: HashMap<String, LoanBucket>,

    /// Loan ids in first-seen order.
    order: Vec<String>,
}

impl StatementConverter {
    /// Creates a converter for the given holding.
    pub fn new(holding: HoldingId) -> Self {
        StatementConverter {
            holding,
            loans: HashMap::new(),
            order: Vec::new(),
        }
    }

    /// Reads an entire Mintos statement CSV and aggregates its rows.
    ///
    /// The reader is configured without header handling: the statement header
    /// fails the data-row shape check and is skipped like any other
    /// non-data row. A non-numeric amount aborts the run.
    pub fn process_csv<R: Read>(&mut self, reader: R) -> Result<()> {
        let mut csv_reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(reader);

        for (row_idx, result) in csv_reader.records().enumerate() {
            let row_num = row_idx + 1;
            let record = result?;

            if let Some(row) = StatementRow::parse(&record, row_num)? {
                self.record_row(row, row_num);
            }
        }

        Ok(())
    }

    /// Appends one parsed row to the bucket for its loan id.
    fn record_row(&mut self, row: StatementRow, row_num: usize) {
        let StatementRow {
            transaction,
            loan_id,
            category,
        } = row;

        debug!(
            "Row {}: {:?} {} for loan {}",
            row_num, category, transaction.amount, loan_id
        );

        let bucket = self.bucket_mut(&loan_id);
        match category {
            Category::Deposit => bucket.deposits.push(transaction),
            Category::Interest | Category::TaxWithholding => bucket.interests.push(transaction),
            Category::Withdrawal => {
                let mut transaction = transaction;
                transaction.amount = transaction.amount.abs();
                bucket.withdrawals.push(transaction);
            }
        }
    }

    /// Returns the bucket for a loan id, creating it on first reference.
    fn bucket_mut(&mut self, loan_id: &str) -> &mut LoanBucket {
        if !self.loans.contains_key(loan_id) {
            self.order.push(loan_id.to_string());
        }
        self.loans.entry(loan_id.to_string()).or_default()
    }

    /// Writes the Parqet cash CSV.
    ///
    /// Per bucket, deposits become `TransferIn`, withdrawals `TransferOut`
    /// and nonzero interest entries `Interest`; zero-amount interest entries
    /// are dropped. All rows are then sorted by date and time before
    /// serialization. The sort is stable, so rows sharing a timestamp keep
    /// their bucket emission order.
    pub fn write_output<W: Write>(&self, writer: W) -> Result<()> {
        let mut rows = Vec::new();

        for loan_id in &self.order {
            let bucket = match self.loans.get(loan_id) {
                Some(bucket) => bucket,
                None => continue,
            };

            for deposit in &bucket.deposits {
                rows.push(CashRow::new(
                    deposit.clone(),
                    CashType::TransferIn,
                    self.holding.clone(),
                ));
            }
            for withdrawal in &bucket.withdrawals {
                rows.push(CashRow::new(
                    withdrawal.clone(),
                    CashType::TransferOut,
                    self.holding.clone(),
                ));
            }
            for interest in &bucket.interests {
                if interest.amount.is_zero() {
                    continue;
                }
                rows.push(CashRow::new(
                    interest.clone(),
                    CashType::Interest,
                    self.holding.clone(),
                ));
            }
        }

        rows.sort_by_key(|row| row.sort_key());

        let mut csv_writer = WriterBuilder::new()
            .delimiter(b';')
            .quote_style(QuoteStyle::Never)
            .has_headers(false)
            .from_writer(writer);

        // Written explicitly so an empty statement still yields a header
        csv_writer.write_record(["date", "time", "amount", "tax", "fee", "type", "holding"])?;

        for row in &rows {
            csv_writer.serialize(row)?;
        }

        csv_writer.flush()?;
        Ok(())
    }

    /// Returns the loan ids in first-seen order (for testing).
    #[cfg(test)]
    fn loan_ids(&self) -> &[String] {
        &self.order
    }
}
