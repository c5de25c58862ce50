//! Input validators for namespace and epoch options.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::error::ValidationError;
use crate::ports::clock::Clock;

/// RFC 3339 with optional fractional seconds; `Z` is rewritten to `+00:00`
/// before parsing.
const EPOCH_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f%:z";

/// Resolves the namespace for name-based generation.
///
/// An absent or empty value selects `default`. Anything else must parse as a
/// UUID.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidNamespace`] when the value does not parse.
pub fn parse_namespace(value: Option<&str>, default: Uuid) -> Result<Uuid, ValidationError> {
    match value.filter(|v| !v.is_empty()) {
        None => Ok(default),
        Some(raw) => Uuid::parse_str(raw).map_err(|source| ValidationError::InvalidNamespace {
            value: raw.to_string(),
            source,
        }),
    }
}

/// Resolves the epoch for monotonic time-based generation.
///
/// An absent or empty value reads `clock` now. Anything else must be an
/// RFC 3339 timestamp at or after the Unix epoch, with an uppercase `T`
/// separator and either `Z` or a `±hh:mm` offset.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidEpoch`] when the value does not parse and
/// [`ValidationError::EpochBeforeUnixEpoch`] when it predates 1970.
pub fn parse_epoch(
    value: Option<&str>,
    clock: &dyn Clock,
) -> Result<DateTime<Utc>, ValidationError> {
    let Some(raw) = value.filter(|v| !v.is_empty()) else {
        return Ok(clock.now());
    };

    let normalized = match raw.strip_suffix('Z') {
        Some(local) => format!("{local}+00:00"),
        None => raw.to_string(),
    };
    let parsed = DateTime::parse_from_str(&normalized, EPOCH_FORMAT)
        .map_err(|source| ValidationError::InvalidEpoch { value: raw.to_string(), source })?;
    if parsed.timestamp() < 0 {
        return Err(ValidationError::EpochBeforeUnixEpoch(parsed));
    }
    Ok(parsed.with_timezone(&Utc))
}
