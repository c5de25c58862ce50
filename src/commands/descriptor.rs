//! Per-version command descriptors.
//!
//! A descriptor is data: a usage string, the flags it recognizes, their
//! current values, and a [`Strategy`] naming the generation primitive. All
//! versions share one execution path and one output loop.

use std::io::Write;
use std::num::NonZeroU32;

use chrono::{DateTime, Utc};
use tracing::{debug, warn};
use uuid::Uuid;

use super::output;
use super::validate::{parse_epoch, parse_namespace};
use crate::context::ServiceContext;
use crate::error::{CommandError, GenerationError, ValidationError};
use crate::ports::{NameHash, UuidGenerator};

/// Flag holding how many identifiers to generate.
pub const FLAG_NUMBER: &str = "number";
/// Flag holding the namespace for v3 and v5.
pub const FLAG_NAMESPACE: &str = "namespace";
/// Flag holding the RFC 3339 epoch for v7.
pub const FLAG_EPOCH: &str = "epoch";

/// Canonical text of the nil identifier.
pub const NIL_UUID: &str = "00000000-0000-0000-0000-000000000000";

const COUNT_FLAGS: &[&str] = &[FLAG_NUMBER];
const NAME_FLAGS: &[&str] = &[FLAG_NUMBER, FLAG_NAMESPACE];
const EPOCH_FLAGS: &[&str] = &[FLAG_NUMBER, FLAG_EPOCH];

/// Which generation primitive a descriptor drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Version 1.
    TimeBased,
    /// Version 3 or 5, hashing a name within a namespace.
    NameBased {
        /// Hash algorithm.
        hash: NameHash,
        /// Namespace used when `--namespace` is not given.
        default_namespace: Uuid,
    },
    /// Version 4.
    Random,
    /// Version 6.
    ReorderedTime,
    /// Version 7, seeded by an epoch.
    MonotonicTime,
    /// The all-zero identifier.
    Null,
}

/// Validated per-execution input for one generation primitive.
enum Input {
    TimeBased,
    NameBased { hash: NameHash, namespace: Uuid, name: String },
    Random,
    ReorderedTime,
    MonotonicTime(DateTime<Utc>),
}

impl Input {
    fn generate(&self, id_gen: &dyn UuidGenerator) -> Result<Uuid, GenerationError> {
        match self {
            Self::TimeBased => id_gen.time_based(),
            Self::NameBased { hash, namespace, name } => id_gen.name_based(*hash, namespace, name),
            Self::Random => id_gen.random(),
            Self::ReorderedTime => id_gen.reordered_time(),
            Self::MonotonicTime(epoch) => id_gen.monotonic_time(*epoch),
        }
    }
}

/// One subcommand: usage, recognized flags, option values and strategy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandDescriptor {
    usage: &'static str,
    strategy: Strategy,
    number: NonZeroU32,
    namespace: Option<String>,
    epoch: Option<String>,
}

impl CommandDescriptor {
    fn new(usage: &'static str, strategy: Strategy) -> Self {
        Self { usage, strategy, number: NonZeroU32::MIN, namespace: None, epoch: None }
    }

    /// `v1`: time-based identifiers.
    #[must_use]
    pub fn time_based() -> Self {
        Self::new("v1", Strategy::TimeBased)
    }

    /// `v3 [value]` or `v5 [value]`: name-based identifiers.
    #[must_use]
    pub fn name_based(hash: NameHash, default_namespace: Uuid) -> Self {
        let usage = match hash {
            NameHash::Md5 => "v3 [value]",
            NameHash::Sha1 => "v5 [value]",
        };
        Self::new(usage, Strategy::NameBased { hash, default_namespace })
    }

    /// `v4`: random identifiers.
    #[must_use]
    pub fn random() -> Self {
        Self::new("v4", Strategy::Random)
    }

    /// `v6`: reordered time-based identifiers.
    #[must_use]
    pub fn reordered_time() -> Self {
        Self::new("v6", Strategy::ReorderedTime)
    }

    /// `v7`: monotonic time-based identifiers.
    ///
    /// Without `--epoch` the context clock is read at execution.
    #[must_use]
    pub fn monotonic_time() -> Self {
        Self::new("v7", Strategy::MonotonicTime)
    }

    /// `null`: the nil identifier.
    #[must_use]
    pub fn null() -> Self {
        Self::new("null", Strategy::Null)
    }

    /// Usage line, e.g. `"v3 [value]"`.
    #[must_use]
    pub fn usage(&self) -> &'static str {
        self.usage
    }

    /// Subcommand name, the first word of the usage line.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.usage.split(' ').next().unwrap_or(self.usage)
    }

    /// Generation strategy.
    #[must_use]
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// How many identifiers an execution writes.
    #[must_use]
    pub fn number(&self) -> NonZeroU32 {
        self.number
    }

    /// Flags this version recognizes.
    #[must_use]
    pub fn flags(&self) -> &'static [&'static str] {
        match self.strategy {
            Strategy::TimeBased | Strategy::Random | Strategy::ReorderedTime => COUNT_FLAGS,
            Strategy::NameBased { .. } => NAME_FLAGS,
            Strategy::MonotonicTime => EPOCH_FLAGS,
            Strategy::Null => &[],
        }
    }

    fn accepts(&self, flag: &str) -> bool {
        self.flags().contains(&flag)
    }

    /// Sets a flag from its textual value.
    ///
    /// `namespace` and `epoch` are stored as given and validated on
    /// execution; an empty value restores the default.
    ///
    /// # Errors
    ///
    /// Returns [`CommandError::UnknownFlag`] if this version does not
    /// recognize `flag`, or [`ValidationError::InvalidNumber`] if `number` is
    /// not a positive integer.
    pub fn set_flag(&mut self, flag: &str, value: &str) -> Result<(), CommandError> {
        match flag {
            FLAG_NUMBER if self.accepts(flag) => {
                self.number = value
                    .trim()
                    .parse()
                    .map_err(|_| ValidationError::InvalidNumber { value: value.to_string() })?;
            }
            FLAG_NAMESPACE if self.accepts(flag) => self.namespace = Some(value.to_string()),
            FLAG_EPOCH if self.accepts(flag) => self.epoch = Some(value.to_string()),
            _ => {
                return Err(CommandError::UnknownFlag {
                    command: self.name(),
                    flag: flag.to_string(),
                })
            }
        }
        Ok(())
    }

    /// Sets the identifier count.
    #[must_use]
    pub fn with_number(mut self, number: NonZeroU32) -> Self {
        self.number = number;
        self
    }

    /// Sets the raw `--namespace` value.
    #[must_use]
    pub fn with_namespace(mut self, namespace: Option<String>) -> Self {
        self.namespace = namespace;
        self
    }

    /// Sets the raw `--epoch` value.
    #[must_use]
    pub fn with_epoch(mut self, epoch: Option<String>) -> Self {
        self.epoch = epoch;
        self
    }

    fn expect_args(&self, args: &[String], expected: usize) -> Result<(), CommandError> {
        if args.len() == expected {
            Ok(())
        } else {
            Err(CommandError::Arguments {
                command: self.name(),
                expected,
                received: args.len(),
            })
        }
    }

    /// Checks arguments and options. `None` means the null command.
    fn prepare(
        &self,
        ctx: &ServiceContext,
        args: &[String],
    ) -> Result<Option<Input>, CommandError> {
        let input = match self.strategy {
            Strategy::Null => return Ok(None),
            Strategy::TimeBased => {
                self.expect_args(args, 0)?;
                Input::TimeBased
            }
            Strategy::NameBased { hash, default_namespace } => {
                self.expect_args(args, 1)?;
                let namespace = parse_namespace(self.namespace.as_deref(), default_namespace)?;
                Input::NameBased { hash, namespace, name: args[0].clone() }
            }
            Strategy::Random => {
                self.expect_args(args, 0)?;
                Input::Random
            }
            Strategy::ReorderedTime => {
                self.expect_args(args, 0)?;
                Input::ReorderedTime
            }
            Strategy::MonotonicTime => {
                self.expect_args(args, 0)?;
                Input::MonotonicTime(parse_epoch(self.epoch.as_deref(), ctx.clock.as_ref())?)
            }
        };
        Ok(Some(input))
    }

    /// Runs the command, writing one line per identifier to `out`.
    ///
    /// Validation happens before anything is written. The null command
    /// ignores its arguments, writes [`NIL_UUID`] once with no line
    /// terminator and always succeeds.
    ///
    /// # Errors
    ///
    /// Returns a validation or argument error with nothing written, or the
    /// first generation or output error after the lines that preceded it.
    pub fn execute<W>(
        &self,
        ctx: &ServiceContext,
        args: &[String],
        out: &mut W,
    ) -> Result<(), CommandError>
    where
        W: Write + ?Sized,
    {
        let Some(input) = self.prepare(ctx, args)? else {
            if let Err(err) = out.write_all(NIL_UUID.as_bytes()) {
                warn!(error = %err, "nil identifier was not written");
            }
            return Ok(());
        };

        debug!(command = self.name(), count = self.number.get(), "generating identifiers");
        let id_gen = ctx.id_gen.as_ref();
        output::emit(out, self.number, || input.generate(id_gen))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::recording::writer::RecordingWriter;

    fn all() -> Vec<CommandDescriptor> {
        vec![
            CommandDescriptor::time_based(),
            CommandDescriptor::name_based(NameHash::Md5, Uuid::NAMESPACE_DNS),
            CommandDescriptor::random(),
            CommandDescriptor::name_based(NameHash::Sha1, Uuid::NAMESPACE_DNS),
            CommandDescriptor::reordered_time(),
            CommandDescriptor::monotonic_time(),
            CommandDescriptor::null(),
        ]
    }

    #[test]
    fn usage_lines() {
        let usages: Vec<&str> = all().iter().map(CommandDescriptor::usage).collect();
        assert_eq!(usages, ["v1", "v3 [value]", "v4", "v5 [value]", "v6", "v7", "null"]);
    }

    #[test]
    fn names_drop_the_argument_placeholder() {
        let names: Vec<&str> = all().iter().map(CommandDescriptor::name).collect();
        assert_eq!(names, ["v1", "v3", "v4", "v5", "v6", "v7", "null"]);
    }

    #[test]
    fn number_defaults_to_one() {
        assert!(all().iter().all(|d| d.number().get() == 1));
    }

    #[test]
    fn flags_per_version() {
        assert_eq!(CommandDescriptor::time_based().flags(), [FLAG_NUMBER]);
        assert_eq!(
            CommandDescriptor::name_based(NameHash::Sha1, Uuid::NAMESPACE_DNS).flags(),
            [FLAG_NUMBER, FLAG_NAMESPACE]
        );
        assert_eq!(CommandDescriptor::monotonic_time().flags(), [FLAG_NUMBER, FLAG_EPOCH]);
        assert!(CommandDescriptor::null().flags().is_empty());
    }

    #[test]
    fn set_number_parses_positive_integers() {
        let mut cmd = CommandDescriptor::random();
        cmd.set_flag(FLAG_NUMBER, "10").unwrap();
        assert_eq!(cmd.number().get(), 10);
    }

    #[test]
    fn set_number_rejects_zero_and_text() {
        let mut cmd = CommandDescriptor::random();
        for value in ["0", "-3", "ten", ""] {
            let err = cmd.set_flag(FLAG_NUMBER, value).unwrap_err();
            assert!(matches!(err, CommandError::Validation(ValidationError::InvalidNumber { .. })));
        }
        assert_eq!(cmd.number().get(), 1);
    }

    #[test]
    fn set_flag_rejects_flags_of_other_versions() {
        let mut v4 = CommandDescriptor::random();
        assert!(matches!(
            v4.set_flag(FLAG_NAMESPACE, "x"),
            Err(CommandError::UnknownFlag { command: "v4", .. })
        ));

        let mut v5 = CommandDescriptor::name_based(NameHash::Sha1, Uuid::NAMESPACE_DNS);
        assert!(v5.set_flag(FLAG_EPOCH, "2024-01-01T00:00:00Z").is_err());

        let mut null = CommandDescriptor::null();
        assert!(null.set_flag(FLAG_NUMBER, "2").is_err());
    }

    #[test]
    fn empty_namespace_restores_default() {
        let ctx = ServiceContext::live();
        let mut sink = RecordingWriter::new();
        let mut cmd = CommandDescriptor::name_based(NameHash::Md5, Uuid::NAMESPACE_URL);
        cmd.set_flag(FLAG_NAMESPACE, "").unwrap();

        cmd.execute(&ctx, &["testing".to_string()], &mut sink).unwrap();

        let expected = Uuid::new_v3(&Uuid::NAMESPACE_URL, b"testing").to_string();
        assert_eq!(sink.lines(), vec![expected]);
    }

    #[test]
    fn extra_arguments_are_rejected_before_writing() {
        let ctx = ServiceContext::live();
        let mut sink = RecordingWriter::new();
        let err = CommandDescriptor::time_based()
            .execute(&ctx, &["unexpected".to_string()], &mut sink)
            .unwrap_err();
        assert!(matches!(err, CommandError::Arguments { expected: 0, received: 1, .. }));
        assert!(sink.calls().is_empty());
    }

    #[test]
    fn null_ignores_arguments() {
        let ctx = ServiceContext::live();
        let mut sink = RecordingWriter::new();
        let args = vec!["a".to_string(), "b".to_string()];
        CommandDescriptor::null().execute(&ctx, &args, &mut sink).unwrap();
        assert_eq!(sink.calls(), vec![NIL_UUID.as_bytes().to_vec()]);
    }
}
