//! Scripted adapter for the Clock port.

use chrono::{DateTime, Utc};

use crate::ports::clock::Clock;

/// Clock frozen at a single instant.
#[derive(Debug, Clone, Copy)]
pub struct ScriptedClock {
    now: DateTime<Utc>,
}

impl ScriptedClock {
    /// Creates a clock that always reports `now`.
    #[must_use]
    pub fn at(now: DateTime<Utc>) -> Self {
        Self { now }
    }
}

impl Clock for ScriptedClock {
    fn now(&self) -> DateTime<Utc> {
        self.now
    }
}
