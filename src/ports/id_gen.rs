//! Identifier generator port.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::error::GenerationError;

/// Hash algorithm used by name-based generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameHash {
    /// MD5, producing version 3 identifiers.
    Md5,
    /// SHA-1, producing version 5 identifiers.
    Sha1,
}

impl NameHash {
    /// The UUID version number this hash produces.
    #[must_use]
    pub fn version(self) -> usize {
        match self {
            Self::Md5 => 3,
            Self::Sha1 => 5,
        }
    }
}

/// Produces one identifier per call.
///
/// The bit layout of each version is the implementation's business; callers
/// only choose the version and supply its input.
pub trait UuidGenerator: Send + Sync {
    /// Generates a time-based (version 1) identifier.
    ///
    /// # Errors
    ///
    /// Returns an error if the generator cannot produce an identifier.
    fn time_based(&self) -> Result<Uuid, GenerationError>;

    /// Generates a name-based identifier (version 3 or 5, per `hash`).
    ///
    /// # Errors
    ///
    /// Returns an error if the generator cannot produce an identifier.
    fn name_based(
        &self,
        hash: NameHash,
        namespace: &Uuid,
        name: &str,
    ) -> Result<Uuid, GenerationError>;

    /// Generates a random (version 4) identifier.
    ///
    /// # Errors
    ///
    /// Returns an error if the generator cannot produce an identifier.
    fn random(&self) -> Result<Uuid, GenerationError>;

    /// Generates a reordered time-based (version 6) identifier.
    ///
    /// # Errors
    ///
    /// Returns an error if the generator cannot produce an identifier.
    fn reordered_time(&self) -> Result<Uuid, GenerationError>;

    /// Generates a monotonic time-based (version 7) identifier at `epoch`.
    ///
    /// # Errors
    ///
    /// Returns an error if `epoch` cannot be encoded or the generator cannot
    /// produce an identifier.
    fn monotonic_time(&self, epoch: DateTime<Utc>) -> Result<Uuid, GenerationError>;
}
