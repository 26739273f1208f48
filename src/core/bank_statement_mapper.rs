//! Bank statement mapper
//!
//! Flattens a bank statement into ledger lines: one line per posting row that
//! is not skipped, numbered from 1 across the whole statement and linked by a
//! single header link id per invocation.
//!
//! Settings are read once per invocation. Any error (missing setting,
//! malformed skip rule) aborts the whole mapping; there is no partial output.

use crate::core::dimension_resolver::{DimensionResolver, Resolution};
use crate::core::traits::{DataTransform, ValueLookup, ValueLookupExt};
use crate::types::ledger_line::split_credit_debit;
use crate::types::{BankStatement, LedgerLine, TransformError, TransformOutcome};
use crate::values::BANK_STATEMENT_PARTITIONS;
use tracing::{debug, info};
use uuid::Uuid;

/// Conversion table mapping statement company codes to ERP companies
pub const COMPANY_CODE_TABLE: &str = "CompanyCode";

/// Settings of the bank statement transform
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BankStatementSettings {
    pub journal_name: String,
    pub account_type: String,

    /// Template such as `{MainAccount}-{Department}`
    pub account_display_value_format: String,

    /// Dimension whose value is the tax group conversion key
    pub tax_group_dimension_name: String,

    /// Optional `name=value1;value2;...` rule
    pub skip_row: Option<String>,
}

impl BankStatementSettings {
    /// Read all settings from `lookup`
    ///
    /// `JournalName`, `AccountType`, `AccountDisplayValueFormat` and
    /// `TaxGroupDimensionName` are required; `SkipRow` is optional.
    pub fn load<L: ValueLookup + ?Sized>(
        lookup: &L,
        partitions: &[&str],
    ) -> Result<Self, TransformError> {
        Ok(BankStatementSettings {
            journal_name: lookup.get_default_value("JournalName", partitions)?,
            account_type: lookup.get_default_value("AccountType", partitions)?,
            account_display_value_format: lookup
                .get_default_value("AccountDisplayValueFormat", partitions)?,
            tax_group_dimension_name: lookup
                .get_default_value("TaxGroupDimensionName", partitions)?,
            skip_row: lookup.try_get_default_value("SkipRow", partitions),
        })
    }
}

/// Maps bank statements to ledger lines using configured values
pub struct BankStatementMapper<'a, L: ?Sized> {
    lookup: &'a L,
    partitions: &'a [&'a str],
}

impl<'a, L: ValueLookup + ?Sized> BankStatementMapper<'a, L> {
    /// Mapper reading values from the bank statement partition chain
    pub fn new(lookup: &'a L) -> Self {
        Self::with_partitions(lookup, BANK_STATEMENT_PARTITIONS)
    }

    pub fn with_partitions(lookup: &'a L, partitions: &'a [&'a str]) -> Self {
        BankStatementMapper { lookup, partitions }
    }

    /// Map a statement under a freshly generated header link id
    pub fn map(&self, statement: &BankStatement) -> Result<Vec<LedgerLine>, TransformError> {
        self.map_with_link_id(statement, Uuid::new_v4())
    }

    /// Map a statement, linking every line to `header_link_id`
    pub fn map_with_link_id(
        &self,
        statement: &BankStatement,
        header_link_id: Uuid,
    ) -> Result<Vec<LedgerLine>, TransformError> {
        let settings = BankStatementSettings::load(self.lookup, self.partitions)?;
        let resolver = DimensionResolver::new(
            &settings.account_display_value_format,
            &settings.tax_group_dimension_name,
            settings.skip_row.as_deref(),
        )?;

        let mut lines = Vec::with_capacity(statement.posting_row_count());
        let mut line_number: u32 = 1;

        for transaction in &statement.transactions {
            let company_code =
                self.lookup
                    .convert_or_raw(COMPANY_CODE_TABLE, &transaction.company.code, self.partitions);

            for (row_index, row) in transaction.posting_rows.iter().enumerate() {
                let data = match resolver.resolve(&row.dimensions, self.lookup, self.partitions) {
                    Resolution::Skip => {
                        debug!(
                            transaction = %transaction.id,
                            row = row_index,
                            "Posting row skipped by skip rule"
                        );
                        continue;
                    }
                    Resolution::Resolved(data) => data,
                };

                let (credit_amount, debit_amount) = split_credit_debit(row.amount);

                lines.push(LedgerLine {
                    account_display_value: data.account_display_value,
                    account_type: settings.account_type.clone(),
                    currency_code: transaction.currency.clone(),
                    credit_amount,
                    debit_amount,
                    description: transaction.voucher.document_type_description.clone(),
                    company_code: company_code.clone(),
                    header_link_id,
                    item_sales_tax_group: data.item_sales_tax_group.unwrap_or_default(),
                    journal_name: settings.journal_name.clone(),
                    sales_tax_group: data.sales_tax_group.unwrap_or_default(),
                    text: row.description.clone(),
                    voucher: transaction.voucher.number.clone(),
                    voucher_date: transaction.voucher.date,
                    line_number,
                });
                line_number += 1;
            }
        }

        info!(
            transactions = statement.transactions.len(),
            posting_rows = statement.posting_row_count(),
            lines = lines.len(),
            %header_link_id,
            "Bank statement mapped"
        );

        Ok(lines)
    }
}

impl<L: ValueLookup + ?Sized> DataTransform for BankStatementMapper<'_, L> {
    type Input = BankStatement;
    type Output = Vec<LedgerLine>;

    fn transform(
        &self,
        input: &BankStatement,
    ) -> Result<TransformOutcome<Vec<LedgerLine>>, TransformError> {
        self.map(input).map(TransformOutcome::from_batch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Company, Dimension, PostingRow, StatementTransaction, Voucher};
    use crate::values::TableValues;
    use proptest::prelude::*;
    use rust_decimal::Decimal;

    fn settings() -> TableValues {
        TableValues::new()
            .with_default("Nomentia", "JournalName", "BANK")
            .with_default("Generic", "AccountType", "Ledger")
            .with_default("FunctionBankStatement", "AccountDisplayValueFormat", "{Main}-{Dept}")
            .with_default("FunctionBankStatement", "TaxGroupDimensionName", "Tax")
    }

    fn row(amount: Decimal, dims: &[(&str, &str)]) -> PostingRow {
        PostingRow {
            dimensions: dims.iter().map(|(n, v)| Dimension::new(*n, *v)).collect(),
            amount,
            description: format!("row {}", amount),
        }
    }

    fn transaction(id: &str, company: &str, rows: Vec<PostingRow>) -> StatementTransaction {
        StatementTransaction {
            id: id.to_string(),
            company: Company {
                code: company.to_string(),
                name: String::new(),
            },
            voucher: Voucher {
                number: format!("V-{}", id),
                date: None,
                document_type_description: "Bank statement".to_string(),
            },
            currency: "EUR".to_string(),
            posting_rows: rows,
        }
    }

    #[test]
    fn test_maps_rows_across_transactions() {
        let values = settings();
        let statement = BankStatement {
            transactions: vec![
                transaction(
                    "1",
                    "1000",
                    vec![
                        row(Decimal::new(10050, 2), &[("Main", "6100"), ("Dept", "10")]),
                        row(Decimal::new(-10050, 2), &[("Main", "1910")]),
                    ],
                ),
                transaction(
                    "2",
                    "1000",
                    vec![row(Decimal::new(5, 0), &[("Main", "6200"), ("Dept", "20")])],
                ),
            ],
        };

        let lines = BankStatementMapper::new(&values).map(&statement).unwrap();

        assert_eq!(lines.len(), 3);
        assert_eq!(
            lines.iter().map(|l| l.line_number).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
        assert_eq!(lines[0].account_display_value, "6100-10");
        assert_eq!(lines[0].debit_amount, Decimal::new(10050, 2));
        assert_eq!(lines[0].credit_amount, Decimal::ZERO);
        assert_eq!(lines[1].account_display_value, "1910-");
        assert_eq!(lines[1].credit_amount, Decimal::new(10050, 2));
        assert_eq!(lines[1].debit_amount, Decimal::ZERO);
        assert_eq!(lines[2].voucher, "V-2");
        assert_eq!(lines[0].journal_name, "BANK");
        assert_eq!(lines[0].account_type, "Ledger");
        assert_eq!(lines[0].currency_code, "EUR");
        assert_eq!(lines[0].description, "Bank statement");
        assert_eq!(lines[0].text, "row 100.50");
    }

    #[test]
    fn test_company_code_converted_or_raw() {
        let values = settings().with_conversion("Generic", COMPANY_CODE_TABLE, "1000", "USMF");
        let statement = BankStatement {
            transactions: vec![
                transaction("1", "1000", vec![row(Decimal::ONE, &[])]),
                transaction("2", "2000", vec![row(Decimal::ONE, &[])]),
            ],
        };

        let lines = BankStatementMapper::new(&values).map(&statement).unwrap();
        assert_eq!(lines[0].company_code, "USMF");
        assert_eq!(lines[1].company_code, "2000");
    }

    #[test]
    fn test_skipped_rows_consume_no_line_number() {
        let values = settings().with_default("Nomentia", "SkipRow", "Dept=CLOSED;ARCHIVED");
        let statement = BankStatement {
            transactions: vec![transaction(
                "1",
                "1000",
                vec![
                    row(Decimal::ONE, &[("Main", "A"), ("Dept", "OPEN")]),
                    row(Decimal::ONE, &[("Main", "B"), ("Dept", "CLOSED")]),
                    row(Decimal::ONE, &[("Main", "C"), ("Dept", "ARCHIVED")]),
                    row(Decimal::ONE, &[("Main", "D")]),
                ],
            )],
        };

        let lines = BankStatementMapper::new(&values).map(&statement).unwrap();

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].account_display_value, "A-OPEN");
        assert_eq!(lines[0].line_number, 1);
        assert_eq!(lines[1].account_display_value, "D-");
        assert_eq!(lines[1].line_number, 2);
    }

    #[test]
    fn test_malformed_skip_rule_aborts_mapping() {
        let values = settings().with_default("Nomentia", "SkipRow", "A=B=C");
        let statement = BankStatement {
            transactions: vec![transaction("1", "1000", vec![row(Decimal::ONE, &[])])],
        };

        let result = BankStatementMapper::new(&values).map(&statement);
        assert!(matches!(result, Err(TransformError::InvalidSkipRule { .. })));
    }

    #[test]
    fn test_missing_required_setting_fails() {
        let values = TableValues::new().with_default("Generic", "JournalName", "BANK");
        let result = BankStatementMapper::new(&values).map(&BankStatement::default());

        assert!(matches!(
            result,
            Err(TransformError::MissingValue { ref name, .. }) if name == "AccountType"
        ));
    }

    #[test]
    fn test_unresolved_tax_groups_are_empty_strings() {
        let values = settings()
            .with_conversion("Generic", "SalesTaxGroup", "V24", "FI24");
        let statement = BankStatement {
            transactions: vec![transaction(
                "1",
                "1000",
                vec![
                    row(Decimal::ONE, &[("Tax", "V24")]),
                    row(Decimal::ONE, &[("Main", "X")]),
                ],
            )],
        };

        let lines = BankStatementMapper::new(&values).map(&statement).unwrap();
        assert_eq!(lines[0].sales_tax_group, "FI24");
        assert_eq!(lines[0].item_sales_tax_group, "V24");
        assert_eq!(lines[1].sales_tax_group, "");
        assert_eq!(lines[1].item_sales_tax_group, "");
    }

    #[test]
    fn test_header_link_id_shared_within_and_distinct_across_invocations() {
        let values = settings();
        let statement = BankStatement {
            transactions: vec![
                transaction("1", "1000", vec![row(Decimal::ONE, &[]), row(Decimal::TWO, &[])]),
                transaction("2", "1000", vec![row(Decimal::TEN, &[])]),
            ],
        };
        let mapper = BankStatementMapper::new(&values);

        let first = mapper.map(&statement).unwrap();
        let second = mapper.map(&statement).unwrap();

        assert!(first.iter().all(|l| l.header_link_id == first[0].header_link_id));
        assert!(second.iter().all(|l| l.header_link_id == second[0].header_link_id));
        assert_ne!(first[0].header_link_id, second[0].header_link_id);
    }

    #[test]
    fn test_transform_reports_no_records_when_everything_skipped() {
        let values = settings().with_default("Nomentia", "SkipRow", "Dept=X");
        let statement = BankStatement {
            transactions: vec![transaction("1", "1000", vec![row(Decimal::ONE, &[("Dept", "X")])])],
        };

        let outcome = BankStatementMapper::new(&values).transform(&statement).unwrap();
        assert!(outcome.is_no_records());
    }

    proptest! {
        #[test]
        fn prop_line_numbers_gap_free_and_amounts_exclusive(
            rows in prop::collection::vec(
                prop::collection::vec((-1_000_000i64..1_000_000i64, any::<bool>()), 0..6),
                0..6,
            )
        ) {
            let values = settings().with_default("Nomentia", "SkipRow", "Dept=SKIP");
            let statement = BankStatement {
                transactions: rows
                    .iter()
                    .enumerate()
                    .map(|(i, tx_rows)| {
                        transaction(
                            &i.to_string(),
                            "1000",
                            tx_rows
                                .iter()
                                .map(|(cents, skip)| {
                                    let dept = if *skip { "SKIP" } else { "KEEP" };
                                    row(Decimal::new(*cents, 2), &[("Dept", dept)])
                                })
                                .collect(),
                        )
                    })
                    .collect(),
            };
            let kept: Vec<i64> = rows
                .iter()
                .flatten()
                .filter(|(_, skip)| !skip)
                .map(|(cents, _)| *cents)
                .collect();

            let lines = BankStatementMapper::new(&values).map(&statement).unwrap();

            prop_assert_eq!(lines.len(), kept.len());
            for (index, (line, cents)) in lines.iter().zip(kept.iter()).enumerate() {
                prop_assert_eq!(line.line_number as usize, index + 1);
                prop_assert!(line.credit_amount.is_zero() || line.debit_amount.is_zero());
                prop_assert!(line.credit_amount >= Decimal::ZERO);
                prop_assert_eq!(line.debit_amount - line.credit_amount, Decimal::new(*cents, 2));
            }
        }
    }
}
