//! Live adapter for the `UuidGenerator` port, backed by the `uuid` crate.

use std::sync::Mutex;

use chrono::{DateTime, Utc};
use uuid::{ContextV7, Timestamp, Uuid};

use crate::error::GenerationError;
use crate::ports::{NameHash, UuidGenerator};

/// Generates real identifiers.
///
/// Versions 1 and 6 use a random node id chosen once per generator, with the
/// multicast bit set so it never collides with a hardware address. Version 7
/// keeps a counter context so identifiers sharing a millisecond still sort in
/// generation order.
pub struct LiveUuidGenerator {
    node_id: [u8; 6],
    v7_context: Mutex<ContextV7>,
}

impl LiveUuidGenerator {
    /// Creates a generator with a fresh random node id.
    #[must_use]
    pub fn new() -> Self {
        let seed = Uuid::new_v4();
        let mut node_id = [0u8; 6];
        node_id.copy_from_slice(&seed.as_bytes()[10..]);
        node_id[0] |= 0x01;

        Self { node_id, v7_context: Mutex::new(ContextV7::new()) }
    }

    /// The node id embedded in version 1 and 6 identifiers.
    #[must_use]
    pub fn node_id(&self) -> [u8; 6] {
        self.node_id
    }
}

impl Default for LiveUuidGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl UuidGenerator for LiveUuidGenerator {
    fn time_based(&self) -> Result<Uuid, GenerationError> {
        Ok(Uuid::now_v1(&self.node_id))
    }

    fn name_based(
        &self,
        hash: NameHash,
        namespace: &Uuid,
        name: &str,
    ) -> Result<Uuid, GenerationError> {
        Ok(match hash {
            NameHash::Md5 => Uuid::new_v3(namespace, name.as_bytes()),
            NameHash::Sha1 => Uuid::new_v5(namespace, name.as_bytes()),
        })
    }

    fn random(&self) -> Result<Uuid, GenerationError> {
        Ok(Uuid::new_v4())
    }

    fn reordered_time(&self) -> Result<Uuid, GenerationError> {
        Ok(Uuid::now_v6(&self.node_id))
    }

    fn monotonic_time(&self, epoch: DateTime<Utc>) -> Result<Uuid, GenerationError> {
        let seconds = u64::try_from(epoch.timestamp())
            .map_err(|_| GenerationError::TimestampOutOfRange(epoch.to_rfc3339()))?;
        let subsec_nanos = epoch.timestamp_subsec_nanos();

        let context = self
            .v7_context
            .lock()
            .map_err(|_| GenerationError::Unavailable("v7 context lock poisoned".into()))?;
        let timestamp = Timestamp::from_unix(&*context, seconds, subsec_nanos);
        Ok(Uuid::new_v7(timestamp))
    }
}
