//! Core traits for configuration lookup and document transforms
//!
//! The transforms read their settings and code conversions through
//! [`ValueLookup`], so the storage behind it (in-memory tables, files, a
//! remote store) stays interchangeable.

use crate::types::{TransformError, TransformOutcome};
use std::str::FromStr;

/// Read-only access to configured values
///
/// Two kinds of entries exist:
/// - defaults: one value per setting name
/// - conversions: per-table `key -> value` mappings (e.g. company codes)
///
/// Partitions are searched in the order given; the first partition holding
/// the entry wins.
pub trait ValueLookup {
    /// Look up a setting by name
    fn try_get_default_value(&self, name: &str, partitions: &[&str]) -> Option<String>;

    /// Look up a conversion entry in `table` for `key`
    fn try_get_conversion_value(&self, table: &str, key: &str, partitions: &[&str])
        -> Option<String>;
}

impl<L: ValueLookup + ?Sized> ValueLookup for &L {
    fn try_get_default_value(&self, name: &str, partitions: &[&str]) -> Option<String> {
        (**self).try_get_default_value(name, partitions)
    }

    fn try_get_conversion_value(
        &self,
        table: &str,
        key: &str,
        partitions: &[&str],
    ) -> Option<String> {
        (**self).try_get_conversion_value(table, key, partitions)
    }
}

/// Typed and fallback helpers on top of [`ValueLookup`]
pub trait ValueLookupExt: ValueLookup {
    /// Look up a required setting
    ///
    /// # Errors
    ///
    /// `TransformError::MissingValue` if no partition holds the setting.
    fn get_default_value(&self, name: &str, partitions: &[&str]) -> Result<String, TransformError> {
        self.try_get_default_value(name, partitions)
            .ok_or_else(|| TransformError::missing_value(name, partitions))
    }

    /// Look up a required setting and parse it
    fn get_default_value_as<T: FromStr>(
        &self,
        name: &str,
        partitions: &[&str],
    ) -> Result<T, TransformError> {
        let raw = self.get_default_value(name, partitions)?;
        raw.trim()
            .parse()
            .map_err(|_| TransformError::invalid_value(name, &raw))
    }

    /// Look up an optional setting and parse it
    fn try_get_default_value_as<T: FromStr>(
        &self,
        name: &str,
        partitions: &[&str],
    ) -> Result<Option<T>, TransformError> {
        self.try_get_default_value(name, partitions)
            .map(|raw| {
                raw.trim()
                    .parse()
                    .map_err(|_| TransformError::invalid_value(name, &raw))
            })
            .transpose()
    }

    /// Look up a conversion entry and parse it
    fn try_get_conversion_value_as<T: FromStr>(
        &self,
        table: &str,
        key: &str,
        partitions: &[&str],
    ) -> Result<Option<T>, TransformError> {
        self.try_get_conversion_value(table, key, partitions)
            .map(|raw| {
                raw.trim()
                    .parse()
                    .map_err(|_| TransformError::invalid_value(table, &raw))
            })
            .transpose()
    }

    /// Converted value for `key`, or `key` itself when `table` has no entry
    fn convert_or_raw(&self, table: &str, key: &str, partitions: &[&str]) -> String {
        self.try_get_conversion_value(table, key, partitions)
            .unwrap_or_else(|| key.to_string())
    }
}

impl<L: ValueLookup + ?Sized> ValueLookupExt for L {}

/// A single-pass document transform
///
/// Implementations are stateless between calls: every invocation handles one
/// input document end to end and either returns the whole output or fails.
pub trait DataTransform {
    type Input: ?Sized;
    type Output;

    fn transform(
        &self,
        input: &Self::Input,
    ) -> Result<TransformOutcome<Self::Output>, TransformError>;
}
