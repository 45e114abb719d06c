//! # mintos2parqet
//!
//! Converts a Mintos account statement CSV into a Parqet cash CSV for a
//! single holding.
//!
//! ## Design Principles
//!
//! - **Fixed-point amounts**: 6 decimal places via `rust_decimal`
//! - **Tolerant input**: header and unknown rows are skipped, not errors
//! - **Deterministic output**: rows sorted by date and time
//!
//! ## Example
//!
//! ```no_run
//! use mintos2parqet::{HoldingId, StatementConverter};
//! use std::io::Cursor;
//!
//! let csv = "2021-02-01 09:30:00,1,Deposit via bank transfer,100,100.00,EUR,Deposits\n";
//! let holding = HoldingId::from_url("https://app.parqet.com/p/PORT1/h/HOLD9").unwrap();
//! let mut converter = StatementConverter::new(holding);
//! converter.process_csv(Cursor::new(csv)).unwrap();
//! converter.write_output(std::io::stdout()).unwrap();
//! ```

pub mod amount;
pub mod converter;
pub mod error;
pub mod holding;
pub mod statement;

pub use amount::Amount;
pub use converter::{CashRow, CashType, StatementConverter};
pub use error::{ConvertError, Result};
pub use holding::HoldingId;
pub use statement::{looks_like_data_row, Category, StatementRow, Transaction};
