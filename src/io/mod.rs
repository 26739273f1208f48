//! I/O module
//!
//! Document codecs around the transforms.
//!
//! # Components
//!
//! - `statement_xml` - OpusCapita bank statement reader
//! - `ledger_trans_xml` - Customer transaction export reader (CDATA tolerant)
//! - `matching_xml` - Nomentia matching document writer
//! - `ledger_json` - Ledger line JSON writer
//! - `envelope` - Base64 request/response envelope
//! - `value_tables` - CSV loading of default and conversion tables

pub mod envelope;
pub mod ledger_json;
pub mod ledger_trans_xml;
pub mod matching_xml;
pub mod statement_xml;
pub mod value_tables;

pub use envelope::FileEnvelope;
pub use ledger_json::write_ledger_lines;
pub use ledger_trans_xml::{parse_customer_transactions, read_records, RawRecord};
pub use matching_xml::{to_matching_xml, write_matching_xml};
pub use statement_xml::parse_statement;
pub use value_tables::load_value_tables;
