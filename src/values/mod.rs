//! Value lookup service
//!
//! Table-backed implementation of [`crate::core::traits::ValueLookup`] plus
//! the partition chains the transforms search. Tables are usually loaded from
//! CSV files with [`crate::io::value_tables`].

pub mod partitions;
pub mod table;

pub use partitions::BANK_STATEMENT_PARTITIONS;
pub use table::TableValues;
