//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `bank_statement`: Parsed bank statement (transactions, posting rows, dimensions)
//! - `ledger_line`: Ledger line output and dimension-derived data
//! - `customer_transaction`: Customer ledger transaction input records
//! - `ar_transaction`: AR transaction output records and amount formatting
//! - `timestamp`: Date/time parsing shared by both transforms
//! - `outcome`: Completed / no-records outcome
//! - `error`: Error types for the transforms

pub mod ar_transaction;
pub mod bank_statement;
pub mod customer_transaction;
pub mod error;
pub mod ledger_line;
pub mod outcome;
pub mod timestamp;

pub use ar_transaction::{ArAmount, ArStatus, ArTransaction, CustomField};
pub use bank_statement::{
    BankStatement, Company, Dimension, PostingRow, StatementTransaction, Voucher,
};
pub use customer_transaction::{CustomerTransaction, RecordId};
pub use error::TransformError;
pub use ledger_line::{DimensionData, LedgerLine};
pub use outcome::TransformOutcome;
