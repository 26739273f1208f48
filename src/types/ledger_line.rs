//! Ledger line output of the bank statement transform
//!
//! One `LedgerLine` is produced per surviving posting row. Lines are
//! serialized as JSON with PascalCase field names for the ERP import.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::Serialize;
use uuid::Uuid;

/// Dimension-derived values for one posting row
///
/// Built by the dimension resolver and consumed immediately when the
/// corresponding ledger line is constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DimensionData {
    pub account_display_value: String,
    pub sales_tax_group: Option<String>,
    pub item_sales_tax_group: Option<String>,
}

/// Normalized expense journal line
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct LedgerLine {
    pub account_display_value: String,
    pub account_type: String,
    pub currency_code: String,

    /// Absolute value of a negative amount, otherwise zero
    pub credit_amount: Decimal,

    /// The amount itself when non-negative, otherwise zero
    pub debit_amount: Decimal,

    /// Voucher document type description of the parent transaction
    pub description: String,

    /// Company code after conversion (raw code when no conversion exists)
    pub company_code: String,

    /// Correlation id shared by every line of one invocation
    pub header_link_id: Uuid,

    /// Never null; empty when the row has no tax group
    pub item_sales_tax_group: String,
    pub journal_name: String,
    pub sales_tax_group: String,

    /// Posting row description
    pub text: String,
    pub voucher: String,
    pub voucher_date: Option<NaiveDateTime>,

    /// 1-based, counted across the whole invocation
    pub line_number: u32,
}

/// Split a signed amount into (credit, debit)
///
/// Negative amounts are credits; zero and positive amounts are debits.
pub fn split_credit_debit(amount: Decimal) -> (Decimal, Decimal) {
    if amount < Decimal::ZERO {
        (amount.abs(), Decimal::ZERO)
    } else {
        (Decimal::ZERO, amount)
    }
}
