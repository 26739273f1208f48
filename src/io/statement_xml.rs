//! OpusCapita accounts-transactions XML reader
//!
//! Reads the bank statement document into [`BankStatement`]. Only the parts
//! the ledger line mapping needs are deserialized; every other element and
//! attribute of the schema is ignored.

use crate::types::timestamp::parse_timestamp;
use crate::types::{
    BankStatement, Company, Dimension, PostingRow, StatementTransaction, TransformError, Voucher,
};
use quick_xml::de::from_str;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::str::FromStr;

#[derive(Debug, Deserialize)]
struct WireDocument {
    #[serde(rename = "Transaction", default)]
    transactions: Vec<WireTransaction>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct WireTransaction {
    #[serde(rename = "@Id", default)]
    id: String,
    company: Option<WireCompany>,
    posting_header: Option<WirePostingHeader>,
    voucher: Option<WireVoucher>,
}

#[derive(Debug, Deserialize)]
struct WireCompany {
    #[serde(rename = "@Code", default)]
    code: String,
    #[serde(rename = "@Name", default)]
    name: String,
}

#[derive(Debug, Deserialize)]
struct WirePostingHeader {
    #[serde(rename = "@Currency", default)]
    currency: String,
    #[serde(rename = "PostingRow", default)]
    posting_rows: Vec<WirePostingRow>,
}

#[derive(Debug, Deserialize)]
struct WirePostingRow {
    #[serde(rename = "@Amount", default)]
    amount: String,
    #[serde(rename = "@Description", default)]
    description: String,
    #[serde(rename = "Dimension", default)]
    dimensions: Vec<WireDimension>,
}

#[derive(Debug, Deserialize)]
struct WireDimension {
    #[serde(rename = "@Name", default)]
    name: String,
    #[serde(rename = "@Value")]
    value: Option<String>,
}

#[derive(Debug, Deserialize)]
struct WireVoucher {
    #[serde(rename = "@Date", default)]
    date: String,
    #[serde(rename = "@Number", default)]
    number: String,
    #[serde(rename = "@DocumentTypeDescription", default)]
    document_type_description: String,
}

/// Parse a statement document
///
/// # Errors
///
/// - `TransformError::Xml` if the text is not a well-formed statement document
/// - `TransformError::InvalidDocument` if a transaction lacks its company,
///   posting header or voucher
/// - `TransformError::InvalidField` for unreadable amounts or voucher dates
pub fn parse_statement(xml: &str) -> Result<BankStatement, TransformError> {
    let document: WireDocument = from_str(xml)?;

    let transactions = document
        .transactions
        .into_iter()
        .map(convert_transaction)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(BankStatement { transactions })
}

fn convert_transaction(wire: WireTransaction) -> Result<StatementTransaction, TransformError> {
    let company = wire
        .company
        .ok_or_else(|| missing_part(&wire.id, "Company"))?;
    let header = wire
        .posting_header
        .ok_or_else(|| missing_part(&wire.id, "PostingHeader"))?;
    let voucher = wire
        .voucher
        .ok_or_else(|| missing_part(&wire.id, "Voucher"))?;

    let date = if voucher.date.trim().is_empty() {
        None
    } else {
        Some(parse_timestamp("Voucher/@Date", &voucher.date)?)
    };

    let posting_rows = header
        .posting_rows
        .into_iter()
        .map(convert_posting_row)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(StatementTransaction {
        id: wire.id,
        company: Company {
            code: company.code,
            name: company.name,
        },
        voucher: Voucher {
            number: voucher.number,
            date,
            document_type_description: voucher.document_type_description,
        },
        currency: header.currency,
        posting_rows,
    })
}

fn convert_posting_row(wire: WirePostingRow) -> Result<PostingRow, TransformError> {
    let amount = match wire.amount.trim() {
        "" => Decimal::ZERO,
        raw => Decimal::from_str(raw)
            .map_err(|_| TransformError::invalid_field("PostingRow/@Amount", &wire.amount))?,
    };

    Ok(PostingRow {
        dimensions: wire
            .dimensions
            .into_iter()
            .map(|d| Dimension {
                name: d.name,
                value: d.value,
            })
            .collect(),
        amount,
        description: wire.description,
    })
}

fn missing_part(transaction_id: &str, element: &str) -> TransformError {
    TransformError::invalid_document(format!(
        "Transaction '{}' has no {} element",
        transaction_id, element
    ))
}
