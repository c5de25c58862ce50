//! Error types for command validation, generation and output.

use std::io;

use chrono::{DateTime, FixedOffset};
use thiserror::Error;

/// Malformed user input, caught before any identifier is generated.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// The `--namespace` value is not a UUID.
    #[error(
        "invalid namespace {value:?}: expected a UUID such as \
         6ba7b810-9dad-11d1-80b4-00c04fd430c8 ({source})"
    )]
    InvalidNamespace {
        /// The rejected input.
        value: String,
        /// Parser failure.
        #[source]
        source: uuid::Error,
    },
    /// The `--epoch` value is not an RFC 3339 timestamp.
    #[error(
        "invalid epoch {value:?}: expected an RFC 3339 timestamp such as \
         2006-01-02T15:04:05.999999999+07:00 ({source})"
    )]
    InvalidEpoch {
        /// The rejected input.
        value: String,
        /// Parser failure.
        #[source]
        source: chrono::ParseError,
    },
    /// The epoch parsed but predates 1970-01-01T00:00:00Z.
    #[error(
        "epoch {0} is a valid RFC 3339 timestamp, but version 7 UUIDs cannot \
         represent times before 1970-01-01T00:00:00Z"
    )]
    EpochBeforeUnixEpoch(DateTime<FixedOffset>),
    /// The `--number` value is not a positive integer.
    #[error("invalid number {value:?}: expected a positive integer")]
    InvalidNumber {
        /// The rejected input.
        value: String,
    },
}

/// The identifier generator could not produce a value.
#[derive(Debug, Error)]
pub enum GenerationError {
    /// The timestamp does not fit the version's layout.
    #[error("timestamp {0} cannot be encoded in a UUID")]
    TimestampOutOfRange(String),
    /// The generator's state or entropy source is unavailable.
    #[error("generator unavailable: {0}")]
    Unavailable(String),
}

/// Any failure of a command execution.
#[derive(Debug, Error)]
pub enum CommandError {
    /// Input validation failed; nothing was written.
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// Generation failed; earlier lines remain written.
    #[error(transparent)]
    Generation(#[from] GenerationError),
    /// Wrong number of positional arguments.
    #[error("{command} requires exactly {expected} argument(s), received {received}")]
    Arguments {
        /// Command name.
        command: &'static str,
        /// Expected positional count.
        expected: usize,
        /// Received positional count.
        received: usize,
    },
    /// The command does not recognize this flag.
    #[error("unknown flag --{flag} for {command}")]
    UnknownFlag {
        /// Command name.
        command: &'static str,
        /// The rejected flag name.
        flag: String,
    },
    /// The output sink rejected a write.
    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn namespace_error_names_value_and_format() {
        let source = uuid::Uuid::parse_str("invalid").unwrap_err();
        let err = ValidationError::InvalidNamespace { value: "invalid".into(), source };
        let msg = err.to_string();
        assert!(msg.contains("\"invalid\""));
        assert!(msg.contains("6ba7b810-9dad-11d1-80b4-00c04fd430c8"));
    }

    #[test]
    fn validation_error_is_transparent_in_command_error() {
        let err: CommandError = ValidationError::InvalidNumber { value: "0".into() }.into();
        assert_eq!(err.to_string(), "invalid number \"0\": expected a positive integer");
    }

    #[test]
    fn pre_unix_epoch_message_is_not_a_parse_error() {
        let epoch = DateTime::parse_from_rfc3339("1969-12-31T23:59:59Z").unwrap();
        let msg = ValidationError::EpochBeforeUnixEpoch(epoch).to_string();
        assert!(msg.contains("valid RFC 3339 timestamp"));
        assert!(msg.contains("version 7"));
        assert!(!msg.starts_with("invalid"));
    }

    #[test]
    fn arguments_error_message() {
        let err = CommandError::Arguments { command: "v3", expected: 1, received: 0 };
        assert_eq!(err.to_string(), "v3 requires exactly 1 argument(s), received 0");
    }
}
