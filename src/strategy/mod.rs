//! Transform strategy module
//!
//! A strategy is the complete pipeline for one transform kind: decode the
//! request, parse the document, run the mapper and write the output. The
//! strategy for a run is selected at runtime from the CLI arguments.

use crate::cli::TransformKind;
use crate::io::FileEnvelope;
use crate::types::{TransformError, TransformOutcome};
use crate::values::TableValues;
use std::io::Write;
use std::sync::Arc;

pub mod ar_transactions;
pub mod bank_statement;

pub use ar_transactions::ArTransactionsStrategy;
pub use bank_statement::BankStatementStrategy;

/// Complete pipeline for one transform kind
pub trait TransformStrategy: Send + Sync {
    /// Transform `input` and write the result to `output`
    ///
    /// # Returns
    ///
    /// * `Ok(Completed(n))` with the number of output records written
    /// * `Ok(NoRecords)` if the input was valid but nothing qualified
    ///
    /// # Errors
    ///
    /// Any error aborts the invocation; nothing is written to `output` in that case.
    fn process(
        &self,
        input: &[u8],
        output: &mut dyn Write,
    ) -> Result<TransformOutcome<usize>, TransformError>;
}

/// Request content, either raw or unwrapped from a base64 envelope
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub content: Vec<u8>,
    pub filename: Option<String>,
}

impl Request {
    pub fn read(input: &[u8], envelope: bool) -> Result<Self, TransformError> {
        if !envelope {
            return Ok(Request {
                content: input.to_vec(),
                filename: None,
            });
        }

        let envelope = FileEnvelope::from_json(input)?;
        Ok(Request {
            content: envelope.decode_content()?,
            filename: envelope.filename,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Content as text, without a leading byte order mark
    pub fn text(&self) -> Result<&str, TransformError> {
        let text = std::str::from_utf8(&self.content).map_err(|e| {
            TransformError::invalid_document(format!("content is not valid UTF-8: {}", e))
        })?;
        Ok(text.strip_prefix('\u{feff}').unwrap_or(text))
    }
}

/// Create the strategy for `kind`
///
/// `values` backs the configuration lookups; `envelope` selects base64
/// envelope input (and, for AR transactions, envelope output).
pub fn create_strategy(
    kind: TransformKind,
    values: Arc<TableValues>,
    envelope: bool,
) -> Box<dyn TransformStrategy> {
    match kind {
        TransformKind::BankStatement => Box::new(BankStatementStrategy::new(values, envelope)),
        TransformKind::ArTransactions => Box::new(ArTransactionsStrategy::new(envelope)),
    }
}
