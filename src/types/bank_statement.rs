//! Bank statement domain types
//!
//! A bank statement is a list of transactions, each carrying one posting
//! header with the posting rows that become ledger lines. These types are the
//! typed form of the statement document after parsing (see
//! [`crate::io::statement_xml`]); they are read-only for the mapper.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;

/// A name/value attribute attached to a posting row
///
/// Names are case-sensitive and not guaranteed unique within a row; lookups
/// always take the first match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dimension {
    pub name: String,
    pub value: Option<String>,
}

impl Dimension {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Dimension {
            name: name.into(),
            value: Some(value.into()),
        }
    }
}

/// Value of the first dimension named `name`, if any
pub fn find_dimension<'a>(dimensions: &'a [Dimension], name: &str) -> Option<&'a str> {
    dimensions
        .iter()
        .find(|d| d.name == name)
        .and_then(|d| d.value.as_deref())
}

/// One ledger posting inside a statement transaction
#[derive(Debug, Clone, PartialEq)]
pub struct PostingRow {
    pub dimensions: Vec<Dimension>,

    /// Signed amount; negative values are credits
    pub amount: Decimal,

    pub description: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Company {
    pub code: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Voucher {
    pub number: String,
    pub date: Option<NaiveDateTime>,
    pub document_type_description: String,
}

/// A statement transaction with its posting header flattened in
#[derive(Debug, Clone, PartialEq)]
pub struct StatementTransaction {
    pub id: String,
    pub company: Company,
    pub voucher: Voucher,

    /// Currency of the posting header
    pub currency: String,

    pub posting_rows: Vec<PostingRow>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct BankStatement {
    pub transactions: Vec<StatementTransaction>,
}

impl BankStatement {
    /// Total number of posting rows across all transactions
    pub fn posting_row_count(&self) -> usize {
        self.transactions
            .iter()
            .map(|t| t.posting_rows.len())
            .sum()
    }
}
