//! CLI argument definitions.

use std::num::NonZeroU32;

use clap::{Args, Parser, Subcommand};

/// Top-level CLI parser for `uuidgen`.
#[derive(Debug, Parser)]
#[command(name = "uuidgen", version, about = "Generate UUIDs, one per line")]
pub struct Cli {
    /// The command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// One subcommand per UUID version.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate time-based (version 1) UUIDs.
    V1(CountArgs),
    /// Generate MD5 name-based (version 3) UUIDs.
    V3(NameArgs),
    /// Generate random (version 4) UUIDs.
    V4(CountArgs),
    /// Generate SHA-1 name-based (version 5) UUIDs.
    V5(NameArgs),
    /// Generate reordered time-based (version 6) UUIDs.
    V6(CountArgs),
    /// Generate monotonic time-based (version 7) UUIDs.
    V7(EpochArgs),
    /// Print the nil UUID.
    Null,
}

/// How many identifiers to print.
#[derive(Debug, Args)]
pub struct CountArgs {
    /// Number of UUIDs to generate.
    #[arg(short, long, default_value = "1")]
    pub number: NonZeroU32,
}

/// Arguments of the name-based versions.
#[derive(Debug, Args)]
pub struct NameArgs {
    /// Name to hash.
    pub value: String,
    /// How many identifiers to print.
    #[command(flatten)]
    pub count: CountArgs,
    /// Namespace UUID (defaults to the DNS namespace).
    #[arg(long)]
    pub namespace: Option<String>,
}

/// Arguments of the monotonic time-based version.
#[derive(Debug, Args)]
pub struct EpochArgs {
    /// How many identifiers to print.
    #[command(flatten)]
    pub count: CountArgs,
    /// RFC 3339 timestamp to use instead of the current time.
    #[arg(long)]
    pub epoch: Option<String>,
}
