//! AR transactions strategy
//!
//! Customer transaction export in, matching XML out. In envelope mode the
//! response is an envelope as well, with empty content when the request was
//! empty or no record qualified.

use crate::core::{ArTransactionsMapper, DataTransform};
use crate::io::{parse_customer_transactions, to_matching_xml, FileEnvelope};
use crate::strategy::{Request, TransformStrategy};
use crate::types::{TransformError, TransformOutcome};
use std::io::Write;
use tracing::{info, warn};

#[derive(Debug, Clone, Default)]
pub struct ArTransactionsStrategy {
    envelope: bool,
}

impl ArTransactionsStrategy {
    pub fn new(envelope: bool) -> Self {
        ArTransactionsStrategy { envelope }
    }

    fn write_empty(&self, output: &mut dyn Write) -> Result<TransformOutcome<usize>, TransformError> {
        if self.envelope {
            writeln!(output, "{}", FileEnvelope::empty().to_json()?)?;
        }
        Ok(TransformOutcome::NoRecords)
    }
}

impl TransformStrategy for ArTransactionsStrategy {
    fn process(
        &self,
        input: &[u8],
        output: &mut dyn Write,
    ) -> Result<TransformOutcome<usize>, TransformError> {
        let request = Request::read(input, self.envelope)?;
        if self.envelope && request.is_empty() {
            warn!("Request carries no content");
            return self.write_empty(output);
        }

        let records = parse_customer_transactions(request.text()?)?;
        info!(
            filename = request.filename.as_deref().unwrap_or("-"),
            records = records.len(),
            "Transforming customer transactions"
        );

        let transactions = match ArTransactionsMapper::new().transform(&records)? {
            TransformOutcome::Completed(transactions) => transactions,
            TransformOutcome::NoRecords => return self.write_empty(output),
        };

        let xml = to_matching_xml(&transactions)?;
        if self.envelope {
            let response = FileEnvelope::encode(xml.as_bytes(), request.filename);
            writeln!(output, "{}", response.to_json()?)?;
        } else {
            writeln!(output, "{}", xml)?;
        }

        Ok(TransformOutcome::Completed(transactions.len()))
    }
}
