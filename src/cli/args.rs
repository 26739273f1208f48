use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Transform bank statements and customer transactions for Nomentia
#[derive(Parser, Debug)]
#[command(name = "nomentia-transform")]
#[command(
    about = "Transform Nomentia bank statements into ledger lines and D365 customer transactions into AR matching XML",
    long_about = None
)]
pub struct CliArgs {
    /// Transform to run
    #[arg(value_enum, value_name = "KIND")]
    pub kind: TransformKind,

    /// Input document path
    #[arg(value_name = "INPUT", help = "Path to the input XML document (or envelope JSON with --envelope)")]
    pub input_file: PathBuf,

    /// Default values table
    #[arg(
        long = "values",
        value_name = "FILE",
        env = "NOMENTIA_VALUES_FILE",
        help = "CSV file with PartitionKey,Name,Value rows"
    )]
    pub values_file: Option<PathBuf>,

    /// Conversion values table
    #[arg(
        long = "conversions",
        value_name = "FILE",
        env = "NOMENTIA_CONVERSIONS_FILE",
        help = "CSV file with PartitionKey,Name,Key,Value rows"
    )]
    pub conversions_file: Option<PathBuf>,

    /// Read a base64 envelope instead of a raw document
    #[arg(
        long = "envelope",
        help = "Input is {\"ContentBase64\",\"Filename\"} JSON; AR output is enveloped too"
    )]
    pub envelope: bool,
}

/// Available transforms
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum TransformKind {
    /// OpusCapita bank statement to ledger lines
    BankStatement,
    /// D365 customer transactions to AR matching XML
    ArTransactions,
}
