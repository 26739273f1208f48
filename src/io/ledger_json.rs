//! Ledger line JSON output
//!
//! Lines are written as `{"LedgerLines":[...]}` for the journal import.

use crate::types::{LedgerLine, TransformError};
use serde::Serialize;
use std::io::Write;

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct LedgerLinesDocument<'a> {
    ledger_lines: &'a [LedgerLine],
}

pub fn write_ledger_lines(lines: &[LedgerLine], output: &mut dyn Write) -> Result<(), TransformError> {
    serde_json::to_writer_pretty(&mut *output, &LedgerLinesDocument { ledger_lines: lines })?;
    writeln!(output)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use serde_json::Value;
    use uuid::Uuid;

    fn line(line_number: u32) -> LedgerLine {
        LedgerLine {
            account_display_value: "6100-10".to_string(),
            account_type: "Ledger".to_string(),
            currency_code: "EUR".to_string(),
            credit_amount: Decimal::ZERO,
            debit_amount: Decimal::new(10050, 2),
            description: "Bank statement".to_string(),
            company_code: "USMF".to_string(),
            header_link_id: Uuid::nil(),
            item_sales_tax_group: String::new(),
            journal_name: "BANK".to_string(),
            sales_tax_group: String::new(),
            text: "Fee".to_string(),
            voucher: "V-1".to_string(),
            voucher_date: None,
            line_number,
        }
    }

    #[test]
    fn test_document_shape() {
        let mut output = Vec::new();
        write_ledger_lines(&[line(1), line(2)], &mut output).unwrap();

        let document: Value = serde_json::from_slice(&output).unwrap();
        let lines = document["LedgerLines"].as_array().unwrap();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0]["AccountDisplayValue"], "6100-10");
        assert_eq!(lines[0]["DebitAmount"], "100.50");
        assert_eq!(lines[0]["HeaderLinkId"], Uuid::nil().to_string());
        assert_eq!(lines[0]["SalesTaxGroup"], "");
        assert_eq!(lines[1]["LineNumber"], 2);
        assert!(lines[0]["VoucherDate"].is_null());
    }

    #[test]
    fn test_empty_batch() {
        let mut output = Vec::new();
        write_ledger_lines(&[], &mut output).unwrap();

        let document: Value = serde_json::from_slice(&output).unwrap();
        assert_eq!(document["LedgerLines"], Value::Array(vec![]));
    }
}
