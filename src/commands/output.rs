//! The shared generate-then-write loop.

use std::io::Write;
use std::num::NonZeroU32;

use uuid::Uuid;

use crate::error::{CommandError, GenerationError};

/// Calls `generate` `count` times, writing each identifier to `out` as its
/// hyphenated form plus `\n` in a single `write_all`.
///
/// Stops at the first generation or write failure; lines already written stay
/// written.
///
/// # Errors
///
/// Returns the first generation or output error.
pub fn emit<W, F>(out: &mut W, count: NonZeroU32, mut generate: F) -> Result<(), CommandError>
where
    W: Write + ?Sized,
    F: FnMut() -> Result<Uuid, GenerationError>,
{
    for _ in 0..count.get() {
        let id = generate()?;
        write_line(out, &id)?;
    }
    Ok(())
}

/// Writes one identifier line.
///
/// # Errors
///
/// Returns an error if the sink rejects the write.
pub fn write_line<W>(out: &mut W, id: &Uuid) -> Result<(), CommandError>
where
    W: Write + ?Sized,
{
    let line = format!("{}\n", id.hyphenated());
    out.write_all(line.as_bytes())?;
    Ok(())
}
