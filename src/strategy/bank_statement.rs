//! Bank statement strategy
//!
//! Statement XML in, ledger line JSON out. The JSON document is written even
//! when every row was skipped, so the caller always receives a well-formed
//! (possibly empty) line list.

use crate::core::{BankStatementMapper, DataTransform};
use crate::io::{parse_statement, write_ledger_lines};
use crate::strategy::{Request, TransformStrategy};
use crate::types::{TransformError, TransformOutcome};
use crate::values::TableValues;
use std::io::Write;
use std::sync::Arc;
use tracing::{info, warn};

#[derive(Debug, Clone)]
pub struct BankStatementStrategy {
    values: Arc<TableValues>,
    envelope: bool,
}

impl BankStatementStrategy {
    pub fn new(values: Arc<TableValues>, envelope: bool) -> Self {
        BankStatementStrategy { values, envelope }
    }
}

impl TransformStrategy for BankStatementStrategy {
    fn process(
        &self,
        input: &[u8],
        output: &mut dyn Write,
    ) -> Result<TransformOutcome<usize>, TransformError> {
        let request = Request::read(input, self.envelope)?;
        let statement = parse_statement(request.text()?)?;
        info!(
            filename = request.filename.as_deref().unwrap_or("-"),
            transactions = statement.transactions.len(),
            "Transforming bank statement"
        );

        let mapper = BankStatementMapper::new(self.values.as_ref());
        let outcome = mapper.transform(&statement)?;

        match outcome {
            TransformOutcome::Completed(lines) => {
                write_ledger_lines(&lines, output)?;
                Ok(TransformOutcome::Completed(lines.len()))
            }
            TransformOutcome::NoRecords => {
                warn!("No ledger lines produced from bank statement");
                write_ledger_lines(&[], output)?;
                Ok(TransformOutcome::NoRecords)
            }
        }
    }
}
