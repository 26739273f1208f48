//! Customer transaction filter and AR matching mapper
//!
//! Turns exported customer ledger transactions into AR transactions for
//! matching. Placeholder records and transaction types other than customer
//! and general journal postings are dropped; closed records are reported as
//! removed by identity only.

use crate::core::traits::DataTransform;
use crate::types::ar_transaction::credit_debit_indicator;
use crate::types::timestamp::format_date;
use crate::types::{ArAmount, ArTransaction, CustomField, CustomerTransaction, TransformError};
use crate::types::TransformOutcome;
use tracing::{debug, info, warn};

/// Custom field carrying the free text of a transaction
pub const CAR_ID_FIELD: &str = "CarID";

/// Why a record produced no output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    Placeholder,
    UnsupportedType,
}

#[derive(Debug, Default, Clone, Copy)]
pub struct ArTransactionsMapper;

impl ArTransactionsMapper {
    pub fn new() -> Self {
        ArTransactionsMapper
    }

    /// Map one record, or report why it is skipped
    pub fn map_record(&self, record: &CustomerTransaction) -> Result<ArTransaction, SkipReason> {
        if record.is_placeholder() {
            return Err(SkipReason::Placeholder);
        }
        if !record.is_matchable_type() {
            return Err(SkipReason::UnsupportedType);
        }

        let unique_id = record.rec_id.to_string();
        if record.is_closed() {
            return Ok(ArTransaction::removed(unique_id));
        }

        let mut custom_fields = Vec::new();
        if !record.txt.is_empty() {
            custom_fields.push(CustomField {
                name: CAR_ID_FIELD.to_string(),
                value: record.txt.clone(),
            });
        }

        Ok(ArTransaction {
            status: None,
            unique_id,
            organisation_identification: non_empty(&record.data_area_id),
            due_date: Some(format_date(&record.due_date)),
            invoice_date: Some(format_date(&record.trans_date)),
            debtor_name: non_empty(&record.customer_name),
            debtor_identification: non_empty(&record.cust_account_num),
            entry_amount: Some(ArAmount::new(record.amount_cur, &record.currency_code)),
            remaining_amount: Some(ArAmount::new(
                record.remaining_amount(),
                &record.currency_code,
            )),
            credit_debit_indicator: Some(credit_debit_indicator(record.amount_cur).to_string()),
            reference_number: non_empty(&record.paym_reference),
            invoice_number: non_empty(&record.invoice),
            custom_fields,
        })
    }

    /// Filter and map a batch in input order
    pub fn map(&self, records: &[CustomerTransaction]) -> Vec<ArTransaction> {
        let mut transactions = Vec::with_capacity(records.len());
        let mut skipped = 0usize;

        for record in records {
            match self.map_record(record) {
                Ok(transaction) => transactions.push(transaction),
                Err(reason) => {
                    debug!(
                        rec_id = record.rec_id,
                        trans_type = %record.trans_type,
                        voucher = %record.voucher,
                        ?reason,
                        "Customer transaction skipped"
                    );
                    skipped += 1;
                }
            }
        }

        let removed = transactions.iter().filter(|t| t.is_removed()).count();
        info!(
            records = records.len(),
            emitted = transactions.len(),
            removed,
            skipped,
            "Customer transactions mapped"
        );

        transactions
    }
}

impl DataTransform for ArTransactionsMapper {
    type Input = [CustomerTransaction];
    type Output = Vec<ArTransaction>;

    fn transform(
        &self,
        input: &[CustomerTransaction],
    ) -> Result<TransformOutcome<Vec<ArTransaction>>, TransformError> {
        let outcome = TransformOutcome::from_batch(self.map(input));
        if outcome.is_no_records() {
            warn!(records = input.len(), "No records found");
        }
        Ok(outcome)
    }
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::timestamp::parse_timestamp;
    use crate::types::ArStatus;
    use rstest::rstest;
    use rust_decimal::Decimal;

    fn open_record(rec_id: u64) -> CustomerTransaction {
        CustomerTransaction {
            rec_id,
            trans_type: "Cust".to_string(),
            trans_date: parse_timestamp("TRANSDATE", "2024-03-01T00:00:00").unwrap(),
            due_date: parse_timestamp("DUEDATE", "2024-03-31T00:00:00").unwrap(),
            invoice: "INV-001".to_string(),
            voucher: "V-1".to_string(),
            amount_cur: Decimal::new(150005, 3),
            settle_amount_cur: Decimal::new(5000, 2),
            currency_code: "EUR".to_string(),
            cust_account_num: "C-100".to_string(),
            customer_name: "Acme Oy".to_string(),
            data_area_id: "usmf".to_string(),
            paym_reference: "RF123".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_open_record_fully_populated() {
        let transaction = ArTransactionsMapper::new()
            .map_record(&open_record(5637144576))
            .unwrap();

        assert_eq!(transaction.status, None);
        assert_eq!(transaction.unique_id, "5637144576");
        assert_eq!(transaction.invoice_date.as_deref(), Some("2024-03-01"));
        assert_eq!(transaction.due_date.as_deref(), Some("2024-03-31"));
        assert_eq!(transaction.invoice_number.as_deref(), Some("INV-001"));
        assert_eq!(transaction.debtor_identification.as_deref(), Some("C-100"));
        assert_eq!(transaction.debtor_name.as_deref(), Some("Acme Oy"));
        assert_eq!(transaction.organisation_identification.as_deref(), Some("usmf"));
        assert_eq!(transaction.reference_number.as_deref(), Some("RF123"));
        assert_eq!(transaction.credit_debit_indicator.as_deref(), Some("DBIT"));

        let entry = transaction.entry_amount.unwrap();
        assert_eq!(entry.value, "150.01");
        assert_eq!(entry.currency, "EUR");
        let remaining = transaction.remaining_amount.unwrap();
        assert_eq!(remaining.value, "100.01");
        assert_eq!(remaining.currency, "EUR");
        assert!(transaction.custom_fields.is_empty());
    }

    #[test]
    fn test_closed_record_is_removed() {
        let record = CustomerTransaction {
            closed: parse_timestamp("CLOSED", "2020-01-01T00:00:00").unwrap(),
            ..open_record(42)
        };

        let transaction = ArTransactionsMapper::new().map_record(&record).unwrap();
        assert_eq!(transaction, ArTransaction::removed("42".to_string()));
        assert_eq!(transaction.status, Some(ArStatus::Removed));
        assert_eq!(transaction.entry_amount, None);
    }

    #[rstest]
    #[case::placeholder(0, "Cust", SkipReason::Placeholder)]
    #[case::vendor(7, "Vend", SkipReason::UnsupportedType)]
    #[case::payment(7, "Payment", SkipReason::UnsupportedType)]
    #[case::case_sensitive(7, "cust", SkipReason::UnsupportedType)]
    #[case::empty_type(7, "", SkipReason::UnsupportedType)]
    fn test_skipped_records(
        #[case] rec_id: u64,
        #[case] trans_type: &str,
        #[case] reason: SkipReason,
    ) {
        let record = CustomerTransaction {
            trans_type: trans_type.to_string(),
            ..open_record(rec_id)
        };
        assert_eq!(ArTransactionsMapper::new().map_record(&record), Err(reason));
    }

    #[rstest]
    #[case::customer("Cust")]
    #[case::general_journal("GeneralJournal")]
    fn test_matchable_types(#[case] trans_type: &str) {
        let record = CustomerTransaction {
            trans_type: trans_type.to_string(),
            ..open_record(1)
        };
        assert!(ArTransactionsMapper::new().map_record(&record).is_ok());
    }

    #[rstest]
    #[case::positive(Decimal::new(100, 0), "DBIT")]
    #[case::zero(Decimal::ZERO, "DBIT")]
    #[case::negative(Decimal::new(-1, 2), "CRDT")]
    fn test_credit_debit_indicator(#[case] amount: Decimal, #[case] expected: &str) {
        let record = CustomerTransaction {
            amount_cur: amount,
            ..open_record(1)
        };
        let transaction = ArTransactionsMapper::new().map_record(&record).unwrap();
        assert_eq!(transaction.credit_debit_indicator.as_deref(), Some(expected));
    }

    #[test]
    fn test_free_text_becomes_car_id() {
        let record = CustomerTransaction {
            txt: "ABC-123".to_string(),
            ..open_record(1)
        };
        let transaction = ArTransactionsMapper::new().map_record(&record).unwrap();
        assert_eq!(
            transaction.custom_fields,
            vec![CustomField {
                name: "CarID".to_string(),
                value: "ABC-123".to_string()
            }]
        );
    }

    #[test]
    fn test_empty_text_fields_are_omitted() {
        let record = CustomerTransaction {
            customer_name: String::new(),
            paym_reference: String::new(),
            ..open_record(1)
        };
        let transaction = ArTransactionsMapper::new().map_record(&record).unwrap();
        assert_eq!(transaction.debtor_name, None);
        assert_eq!(transaction.reference_number, None);
    }

    #[test]
    fn test_map_preserves_input_order() {
        let records = vec![
            open_record(3),
            open_record(0),
            open_record(1),
            CustomerTransaction {
                trans_type: "Vend".to_string(),
                ..open_record(9)
            },
            open_record(2),
        ];

        let ids: Vec<_> = ArTransactionsMapper::new()
            .map(&records)
            .into_iter()
            .map(|t| t.unique_id)
            .collect();
        assert_eq!(ids, vec!["3", "1", "2"]);
    }

    #[rstest]
    #[case::empty_batch(vec![])]
    #[case::only_placeholders(vec![CustomerTransaction::default(), CustomerTransaction::default()])]
    fn test_transform_no_records(#[case] records: Vec<CustomerTransaction>) {
        let outcome = ArTransactionsMapper::new().transform(&records).unwrap();
        assert!(outcome.is_no_records());
    }

    #[test]
    fn test_transform_completed() {
        let records = vec![open_record(1)];
        let outcome = ArTransactionsMapper::new().transform(&records).unwrap();
        assert_eq!(outcome.completed().map(|t| t.len()), Some(1));
    }
}
