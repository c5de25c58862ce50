//! Command descriptors, validators and dispatch.

pub mod descriptor;
pub mod output;
pub mod validate;

use std::io::Write;

pub use descriptor::{
    CommandDescriptor, Strategy, FLAG_EPOCH, FLAG_NAMESPACE, FLAG_NUMBER, NIL_UUID,
};

use crate::cli::Command;
use crate::config::Config;
use crate::context::ServiceContext;
use crate::error::CommandError;
use crate::ports::NameHash;

/// Builds the descriptor for a parsed subcommand, with its positional arguments.
#[must_use]
pub fn descriptor_for(command: &Command, config: &Config) -> (CommandDescriptor, Vec<String>) {
    match command {
        Command::V1(args) => {
            (CommandDescriptor::time_based().with_number(args.number), Vec::new())
        }
        Command::V3(args) | Command::V5(args) => {
            let hash = match command {
                Command::V3(_) => NameHash::Md5,
                _ => NameHash::Sha1,
            };
            let descriptor = CommandDescriptor::name_based(hash, config.default_namespace)
                .with_number(args.count.number)
                .with_namespace(args.namespace.clone());
            (descriptor, vec![args.value.clone()])
        }
        Command::V4(args) => (CommandDescriptor::random().with_number(args.number), Vec::new()),
        Command::V6(args) => {
            (CommandDescriptor::reordered_time().with_number(args.number), Vec::new())
        }
        Command::V7(args) => {
            let descriptor = CommandDescriptor::monotonic_time()
                .with_number(args.count.number)
                .with_epoch(args.epoch.clone());
            (descriptor, Vec::new())
        }
        Command::Null => (CommandDescriptor::null(), Vec::new()),
    }
}

/// Dispatch a parsed command to its descriptor and execute it against `out`.
///
/// # Errors
///
/// Returns the command's validation, generation or output error.
pub fn dispatch<W>(
    command: &Command,
    ctx: &ServiceContext,
    config: &Config,
    out: &mut W,
) -> Result<(), CommandError>
where
    W: Write + ?Sized,
{
    let (descriptor, args) = descriptor_for(command, config);
    descriptor.execute(ctx, &args, out)
}
