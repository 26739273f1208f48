//! CSV loading of value tables
//!
//! Two files feed [`TableValues`]:
//!
//! - defaults: `PartitionKey,Name,Value`
//! - conversions: `PartitionKey,Name,Key,Value` (`Name` is the conversion table)
//!
//! A header row is required and fields are trimmed. When a row repeats an
//! earlier entry, the later row wins.

use crate::types::TransformError;
use crate::values::TableValues;
use csv::{ReaderBuilder, Trim};
use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::info;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct DefaultRow {
    partition_key: String,
    name: String,
    #[serde(default)]
    value: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct ConversionRow {
    partition_key: String,
    name: String,
    key: String,
    #[serde(default)]
    value: String,
}

fn csv_reader<R: Read>(input: R) -> csv::Reader<R> {
    ReaderBuilder::new()
        .trim(Trim::All)
        .buffer_capacity(8 * 1024)
        .from_reader(input)
}

fn open(path: &Path) -> Result<File, TransformError> {
    File::open(path).map_err(|e| TransformError::Io {
        message: format!("Failed to open file '{}': {}", path.display(), e),
    })
}

/// Read default rows into `values`, returning the number of rows read
pub fn read_defaults<R: Read>(input: R, values: &mut TableValues) -> Result<usize, TransformError> {
    let mut count = 0;
    for row in csv_reader(input).deserialize::<DefaultRow>() {
        let row = row?;
        values.insert_default(row.partition_key, row.name, row.value);
        count += 1;
    }
    Ok(count)
}

/// Read conversion rows into `values`, returning the number of rows read
pub fn read_conversions<R: Read>(
    input: R,
    values: &mut TableValues,
) -> Result<usize, TransformError> {
    let mut count = 0;
    for row in csv_reader(input).deserialize::<ConversionRow>() {
        let row = row?;
        values.insert_conversion(row.partition_key, row.name, row.key, row.value);
        count += 1;
    }
    Ok(count)
}

/// Load both tables; an absent path leaves that table empty
pub fn load_value_tables(
    defaults: Option<&Path>,
    conversions: Option<&Path>,
) -> Result<TableValues, TransformError> {
    let mut values = TableValues::new();

    if let Some(path) = defaults {
        let rows = read_defaults(open(path)?, &mut values)?;
        info!(path = %path.display(), rows, "Loaded default values");
    }
    if let Some(path) = conversions {
        let rows = read_conversions(open(path)?, &mut values)?;
        info!(path = %path.display(), rows, "Loaded conversion values");
    }

    Ok(values)
}
