//! Partition keys for value lookups
//!
//! Each function reads its values from a chain of partitions, most specific
//! first, ending in the generic partition shared by all integrations.

/// Shared by every integration
pub const GENERIC_PARTITION: &str = "Generic";

/// Shared by the Nomentia functions
pub const NOMENTIA_PARTITION: &str = "Nomentia";

/// Bank statement transform only
pub const BANK_STATEMENT_PARTITION: &str = "FunctionBankStatement";

/// Lookup chain of the bank statement transform
pub const BANK_STATEMENT_PARTITIONS: &[&str] = &[
    BANK_STATEMENT_PARTITION,
    NOMENTIA_PARTITION,
    GENERIC_PARTITION,
];

