//! Customer transaction export reader
//!
//! The export is a `<Document>` whose direct children are flat records
//! (`<EFIPRINTLEDGERTRANSCUSTENTITY>`), each holding uppercase field
//! elements. Field values may be plain text, CDATA or both; they are joined
//! into one string. Records may be empty, so the document is read event by
//! event instead of through a fixed schema, and the fields are converted
//! with lenient defaults afterwards.

use crate::types::timestamp::{parse_timestamp, sentinel_epoch};
use crate::types::{CustomerTransaction, TransformError};
use chrono::NaiveDateTime;
use quick_xml::events::Event;
use quick_xml::Reader;
use rust_decimal::Decimal;
use std::collections::HashMap;
use std::str::FromStr;

/// Element name of one record in the export
pub const RECORD_ELEMENT: &str = "EFIPRINTLEDGERTRANSCUSTENTITY";

/// One direct child of the document root with its flat fields
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRecord {
    pub element: String,
    fields: HashMap<String, String>,
}

impl RawRecord {
    pub fn new(element: impl Into<String>) -> Self {
        RawRecord {
            element: element.into(),
            fields: HashMap::new(),
        }
    }

    /// Field text; the first occurrence wins for repeated fields
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.fields.entry(name.into()).or_insert_with(|| value.into());
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Read every direct child of the root element as a flat record
///
/// Elements nested below field level are ignored.
///
/// # Errors
///
/// - `TransformError::Xml` for malformed XML, including a second root element
///   or text outside the root
/// - `TransformError::InvalidDocument` if there is no root element
pub fn read_records(xml: &str) -> Result<Vec<RawRecord>, TransformError> {
    let mut reader = Reader::from_str(xml);

    let mut records = Vec::new();
    let mut current: Option<RawRecord> = None;
    let mut field: Option<(String, String)> = None;
    let mut depth = 0usize;
    let mut seen_root = false;

    loop {
        match reader.read_event()? {
            Event::Start(e) => {
                let name = String::from_utf8_lossy(e.local_name().as_ref()).into_owned();
                match depth {
                    0 if seen_root => return Err(multiple_roots()),
                    0 => seen_root = true,
                    1 => current = Some(RawRecord::new(name)),
                    2 => field = Some((name, String::new())),
                    _ => {}
                }
                depth += 1;
            }
            Event::Empty(e) => {
                let name = String::from_utf8_lossy(e.local_name().as_ref()).into_owned();
                match depth {
                    0 if seen_root => return Err(multiple_roots()),
                    0 => seen_root = true,
                    1 => records.push(RawRecord::new(name)),
                    2 => {
                        if let Some(record) = current.as_mut() {
                            record.insert(name, "");
                        }
                    }
                    _ => {}
                }
            }
            Event::End(_) => {
                depth = depth.saturating_sub(1);
                match depth {
                    1 => records.extend(current.take()),
                    2 => {
                        if let (Some(record), Some((name, value))) = (current.as_mut(), field.take())
                        {
                            record.insert(name, value);
                        }
                    }
                    _ => {}
                }
            }
            Event::Text(e) if depth == 3 => {
                if let Some((_, value)) = field.as_mut() {
                    value.push_str(&e.unescape().map_err(TransformError::xml)?);
                }
            }
            Event::CData(e) if depth == 3 => {
                if let Some((_, value)) = field.as_mut() {
                    let text = reader.decoder().decode(&e).map_err(TransformError::xml)?;
                    value.push_str(&text);
                }
            }
            Event::Text(e) if depth == 0 => {
                if !e.unescape().map_err(TransformError::xml)?.trim().is_empty() {
                    return Err(TransformError::xml("text outside the root element"));
                }
            }
            Event::CData(_) if depth == 0 => {
                return Err(TransformError::xml("text outside the root element"));
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if !seen_root {
        return Err(TransformError::invalid_document("document has no root element"));
    }
    if depth != 0 {
        return Err(TransformError::xml("unexpected end of document"));
    }

    Ok(records)
}

fn multiple_roots() -> TransformError {
    TransformError::xml("multiple root elements")
}

/// Convert a flat record into a customer transaction
///
/// Missing or empty numeric fields read as zero, dates as the sentinel epoch
/// and text as the empty string.
///
/// # Errors
///
/// `TransformError::InvalidField` for non-empty values that do not parse.
pub fn convert_record(record: &RawRecord) -> Result<CustomerTransaction, TransformError> {
    Ok(CustomerTransaction {
        rec_id: record_id(record, "RECID1")?,
        trans_type: text(record, "TRANSTYPE"),
        closed: date(record, "CLOSED")?,
        trans_date: date(record, "TRANSDATE")?,
        due_date: date(record, "DUEDATE")?,
        invoice: text(record, "INVOICE"),
        voucher: text(record, "VOUCHER"),
        amount_cur: amount(record, "AMOUNTCUR")?,
        settle_amount_cur: amount(record, "SETTLEAMOUNTCUR")?,
        currency_code: text(record, "CURRENCYCODE"),
        cust_account_num: text(record, "CUSTACCOUNTNUM"),
        customer_name: text(record, "CUSTOMERNAME"),
        data_area_id: text(record, "DATAAREAID1"),
        paym_reference: text(record, "PAYMREFERENCE"),
        txt: text(record, "TXT"),
    })
}

/// Read and convert every record of an export
pub fn parse_customer_transactions(xml: &str) -> Result<Vec<CustomerTransaction>, TransformError> {
    read_records(xml)?.iter().map(convert_record).collect()
}

fn text(record: &RawRecord, name: &str) -> String {
    record.get(name).unwrap_or_default().to_string()
}

fn non_blank<'a>(record: &'a RawRecord, name: &str) -> Option<&'a str> {
    record.get(name).map(str::trim).filter(|v| !v.is_empty())
}

fn record_id(record: &RawRecord, name: &str) -> Result<u64, TransformError> {
    match non_blank(record, name) {
        Some(raw) => raw
            .parse()
            .map_err(|_| TransformError::invalid_field(name, raw)),
        None => Ok(0),
    }
}

fn amount(record: &RawRecord, name: &str) -> Result<Decimal, TransformError> {
    match non_blank(record, name) {
        Some(raw) => Decimal::from_str(raw).map_err(|_| TransformError::invalid_field(name, raw)),
        None => Ok(Decimal::ZERO),
    }
}

fn date(record: &RawRecord, name: &str) -> Result<NaiveDateTime, TransformError> {
    match non_blank(record, name) {
        Some(raw) => parse_timestamp(name, raw),
        None => Ok(sentinel_epoch()),
    }
}
