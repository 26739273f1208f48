//! Nomentia matching document writer

use crate::types::{ArTransaction, TransformError};
use quick_xml::se::to_string;
use serde::Serialize;
use std::io::Write;

pub const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;

#[derive(Serialize)]
#[serde(rename = "Matching")]
struct MatchingDocument<'a> {
    #[serde(rename = "Transaction")]
    transactions: &'a [ArTransaction],
}

/// Render transactions as a complete matching document
pub fn to_matching_xml(transactions: &[ArTransaction]) -> Result<String, TransformError> {
    let body = to_string(&MatchingDocument { transactions }).map_err(TransformError::xml)?;
    Ok(format!("{}{}", XML_DECLARATION, body))
}

pub fn write_matching_xml(
    transactions: &[ArTransaction],
    output: &mut dyn Write,
) -> Result<(), TransformError> {
    output.write_all(to_matching_xml(transactions)?.as_bytes())?;
    Ok(())
}
