//! Core library entry for the `uuidgen` CLI.
//!
//! Every UUID version is a [`commands::CommandDescriptor`] executed against a
//! [`context::ServiceContext`] and any [`std::io::Write`] sink.

pub mod adapters;
pub mod cli;
pub mod commands;
pub mod config;
pub mod context;
pub mod error;
pub mod ports;

use std::io::Write;

use clap::Parser;

use crate::config::Config;
use crate::context::ServiceContext;

/// Run the CLI with the provided arguments, writing identifiers to `out`.
///
/// # Errors
///
/// Returns an error string when argument parsing, configuration or command
/// execution fails.
pub fn run<I, T, W>(args: I, out: &mut W) -> Result<(), String>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
    W: Write + ?Sized,
{
    let cli = cli::Cli::try_parse_from(args).map_err(|err| err.to_string())?;
    execute(&cli, out)
}

/// Execute an already parsed CLI against the live context.
///
/// # Errors
///
/// Returns an error string when configuration or command execution fails.
pub fn execute<W>(cli: &cli::Cli, out: &mut W) -> Result<(), String>
where
    W: Write + ?Sized,
{
    let config = Config::from_env().map_err(|err| err.to_string())?;
    let ctx = ServiceContext::live();
    commands::dispatch(&cli.command, &ctx, &config, out).map_err(|err| err.to_string())
}
