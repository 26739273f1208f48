//! Accounts-receivable transaction records for Nomentia matching
//!
//! Serialized as `<Transaction>` elements inside a `<Matching>` document. Field
//! order follows the element order the matching service expects; `None`
//! fields and empty custom field lists are omitted from the XML.
//!
//! Removed records carry only the `status` attribute and `UniqueId`. No empty
//! `<EntryAmount/>` or `<RemainingAmount/>` placeholders are written for them;
//! the matching service identifies removals by `UniqueId` alone.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

/// Record status attribute; absent for live records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ArStatus {
    #[serde(rename = "removed")]
    Removed,
}

/// Amount with currency attribute, e.g. `<EntryAmount Ccy="EUR">10.00</EntryAmount>`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArAmount {
    #[serde(rename = "@Ccy")]
    pub currency: String,
    #[serde(rename = "$text")]
    pub value: String,
}

impl ArAmount {
    pub fn new(amount: Decimal, currency: &str) -> Self {
        ArAmount {
            currency: currency.to_string(),
            value: format_amount(amount),
        }
    }
}

/// Named free-form field, e.g. `<CustomField name="CarID">ABC-123</CustomField>`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CustomField {
    #[serde(rename = "@name")]
    pub name: String,
    #[serde(rename = "$text")]
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename = "Transaction", rename_all = "PascalCase")]
pub struct ArTransaction {
    #[serde(rename = "@status", skip_serializing_if = "Option::is_none")]
    pub status: Option<ArStatus>,

    pub unique_id: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub organisation_identification: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoice_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debtor_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debtor_identification: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entry_amount: Option<ArAmount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remaining_amount: Option<ArAmount>,

    /// `DBIT` for non-negative entry amounts, `CRDT` otherwise
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credit_debit_indicator: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoice_number: Option<String>,

    #[serde(rename = "CustomField", skip_serializing_if = "Vec::is_empty")]
    pub custom_fields: Vec<CustomField>,
}

impl ArTransaction {
    /// A record that is reported only by identity, marked as removed
    pub fn removed(unique_id: String) -> Self {
        ArTransaction {
            status: Some(ArStatus::Removed),
            unique_id,
            ..Default::default()
        }
    }

    pub fn is_removed(&self) -> bool {
        self.status == Some(ArStatus::Removed)
    }
}

/// Format an amount for the matching wire format
///
/// Exactly two decimals, `.` as separator, no grouping, independent of host
/// locale. Midpoints round away from zero (`100.005` becomes `100.01`).
pub fn format_amount(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("{:.2}", rounded)
}

/// Credit/debit indicator for an entry amount
pub fn credit_debit_indicator(amount: Decimal) -> &'static str {
    if amount >= Decimal::ZERO {
        "DBIT"
    } else {
        "CRDT"
    }
}
