//! Nomentia Transform Library
//! # Overview
//!
//! This library implements the two Nomentia-facing document transforms of a
//! Dynamics 365 Finance & Operations integration:
//!
//! - **Bank statement → ledger lines**: an OpusCapita accounts-transactions
//!   statement is flattened into expense journal lines, one per posting row.
//! - **Customer transactions → AR matching**: a ledger-transaction-customer
//!   export is filtered and written as a Nomentia `<Matching>` document.
//!
//! # Architecture
//!
//! - [`types`] - Domain data types (statements, ledger lines, customer and AR transactions)
//! - [`values`] - Table-backed value lookup with partition fallback
//! - [`core`] - Business logic components:
//!   - [`core::dimension_resolver`] - Display value template, tax groups and skip rule
//!   - [`core::bank_statement_mapper`] - Bank statement to ledger lines
//!   - [`core::ar_transactions_mapper`] - Customer transaction filter and AR mapping
//! - [`io`] - XML, JSON, CSV and base64 envelope codecs
//! - [`strategy`] - Complete pipeline per transform kind
//! - [`cli`] - CLI arguments parsing
//!
//! # Configuration
//!
//! Settings and code conversions are read through [`core::ValueLookup`].
//! Partitions are searched most specific first; the bank statement transform
//! uses `FunctionBankStatement`, then `Nomentia`, then `Generic`.
//!
//! # Outcomes
//!
//! Every transform is all-or-nothing. A valid input that yields nothing is
//! reported as [`types::TransformOutcome::NoRecords`], distinct from success
//! with data and from an error.

// Module declarations
pub mod cli;
pub mod core;
pub mod io;
pub mod strategy;
pub mod types;
pub mod values;

pub use core::{ArTransactionsMapper, BankStatementMapper, DataTransform, ValueLookup};
pub use types::{
    ArTransaction, BankStatement, CustomerTransaction, LedgerLine, TransformError,
    TransformOutcome,
};
pub use values::TableValues;
