//! Core business logic module
//!
//! This module contains the transform components:
//! - `traits` - Value lookup and transform abstractions
//! - `skip_rule` - `name=value1;value2` posting row skip rule
//! - `display_template` - `{Dimension}` account display value templates
//! - `dimension_resolver` - Per-row display value, tax groups and skip decision
//! - `bank_statement_mapper` - Bank statement to ledger lines
//! - `ar_transactions_mapper` - Customer transactions to AR matching records

pub mod ar_transactions_mapper;
pub mod bank_statement_mapper;
pub mod dimension_resolver;
pub mod display_template;
pub mod skip_rule;
pub mod traits;

pub use ar_transactions_mapper::ArTransactionsMapper;
pub use bank_statement_mapper::{BankStatementMapper, BankStatementSettings};
pub use dimension_resolver::{DimensionResolver, Resolution};
pub use display_template::DisplayTemplate;
pub use skip_rule::SkipRule;
pub use traits::{DataTransform, ValueLookup, ValueLookupExt};
