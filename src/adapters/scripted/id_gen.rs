//! Scripted adapter for the `UuidGenerator` port.

use std::sync::atomic::{AtomicUsize, Ordering};

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::error::GenerationError;
use crate::ports::{NameHash, UuidGenerator};

/// Delegates to an inner generator until its budget of successful calls is
/// spent, then fails every call with [`GenerationError::Unavailable`].
pub struct ScriptedUuidGenerator {
    inner: Box<dyn UuidGenerator>,
    remaining: AtomicUsize,
}

impl ScriptedUuidGenerator {
    /// Allows `successes` calls through to `inner`, failing afterwards.
    #[must_use]
    pub fn failing_after(inner: Box<dyn UuidGenerator>, successes: usize) -> Self {
        Self { inner, remaining: AtomicUsize::new(successes) }
    }

    fn admit(&self) -> Result<(), GenerationError> {
        self.remaining
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .map(|_| ())
            .map_err(|_| GenerationError::Unavailable("entropy source exhausted".into()))
    }
}

impl UuidGenerator for ScriptedUuidGenerator {
    fn time_based(&self) -> Result<Uuid, GenerationError> {
        self.admit()?;
        self.inner.time_based()
    }

    fn name_based(
        &self,
        hash: NameHash,
        namespace: &Uuid,
        name: &str,
    ) -> Result<Uuid, GenerationError> {
        self.admit()?;
        self.inner.name_based(hash, namespace, name)
    }

    fn random(&self) -> Result<Uuid, GenerationError> {
        self.admit()?;
        self.inner.random()
    }

    fn reordered_time(&self) -> Result<Uuid, GenerationError> {
        self.admit()?;
        self.inner.reordered_time()
    }

    fn monotonic_time(&self, epoch: DateTime<Utc>) -> Result<Uuid, GenerationError> {
        self.admit()?;
        self.inner.monotonic_time(epoch)
    }
}
