//! In-memory value tables
//!
//! `TableValues` holds a defaults table (`partition -> name -> value`) and a
//! conversions table (`partition -> table -> key -> value`). Inserting an
//! existing entry overrides it, so later rows of a loaded table win over
//! earlier ones.

use crate::core::traits::ValueLookup;
use std::collections::HashMap;

type ConversionTable = HashMap<String, String>;

#[derive(Debug, Clone, Default)]
pub struct TableValues {
    defaults: HashMap<String, HashMap<String, String>>,
    conversions: HashMap<String, HashMap<String, ConversionTable>>,
}

impl TableValues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a default value, returning the one it replaced
    pub fn insert_default(
        &mut self,
        partition: impl Into<String>,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Option<String> {
        self.defaults
            .entry(partition.into())
            .or_default()
            .insert(name.into(), value.into())
    }

    /// Set a conversion entry, returning the one it replaced
    pub fn insert_conversion(
        &mut self,
        partition: impl Into<String>,
        table: impl Into<String>,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Option<String> {
        self.conversions
            .entry(partition.into())
            .or_default()
            .entry(table.into())
            .or_default()
            .insert(key.into(), value.into())
    }

    pub fn with_default(mut self, partition: &str, name: &str, value: &str) -> Self {
        self.insert_default(partition, name, value);
        self
    }

    pub fn with_conversion(mut self, partition: &str, table: &str, key: &str, value: &str) -> Self {
        self.insert_conversion(partition, table, key, value);
        self
    }

    /// Number of default entries across all partitions
    pub fn default_count(&self) -> usize {
        self.defaults.values().map(HashMap::len).sum()
    }

    /// Number of conversion entries across all partitions and tables
    pub fn conversion_count(&self) -> usize {
        self.conversions
            .values()
            .flat_map(HashMap::values)
            .map(HashMap::len)
            .sum()
    }
}

impl ValueLookup for TableValues {
    fn try_get_default_value(&self, name: &str, partitions: &[&str]) -> Option<String> {
        partitions
            .iter()
            .find_map(|p| self.defaults.get(*p)?.get(name))
            .cloned()
    }

    fn try_get_conversion_value(
        &self,
        table: &str,
        key: &str,
        partitions: &[&str],
    ) -> Option<String> {
        partitions
            .iter()
            .find_map(|p| self.conversions.get(*p)?.get(table)?.get(key))
            .cloned()
    }
}
