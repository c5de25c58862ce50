//! Service context bundling the port trait objects a command needs.

use crate::ports::clock::Clock;
use crate::ports::id_gen::UuidGenerator;

/// Bundles the ports into a single context.
///
/// Each field provides access to one external boundary. Constructors wire up
/// different adapter implementations.
pub struct ServiceContext {
    /// Clock for the default v7 epoch.
    pub clock: Box<dyn Clock>,
    /// Identifier generator.
    pub id_gen: Box<dyn UuidGenerator>,
}

impl ServiceContext {
    /// Creates a live context backed by the system clock and the `uuid` crate.
    #[must_use]
    pub fn live() -> Self {
        use crate::adapters::live::clock::LiveClock;
        use crate::adapters::live::id_gen::LiveUuidGenerator;

        Self { clock: Box::new(LiveClock), id_gen: Box::new(LiveUuidGenerator::new()) }
    }

    /// Creates a context from explicit adapters.
    #[must_use]
    pub fn new(clock: Box<dyn Clock>, id_gen: Box<dyn UuidGenerator>) -> Self {
        Self { clock, id_gen }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::live::id_gen::LiveUuidGenerator;
    use crate::adapters::scripted::ScriptedClock;
    use chrono::{TimeZone, Utc};

    #[test]
    fn live_context_generates_random_ids() {
        let ctx = ServiceContext::live();
        let a = ctx.id_gen.random().unwrap();
        let b = ctx.id_gen.random().unwrap();
        assert_ne!(a, b);
        assert_eq!(a.hyphenated().to_string().len(), 36);
    }

    #[test]
    fn explicit_context_uses_given_clock() {
        let instant = Utc.with_ymd_and_hms(2025, 3, 15, 14, 30, 0).unwrap();
        let ctx = ServiceContext::new(
            Box::new(ScriptedClock::at(instant)),
            Box::new(LiveUuidGenerator::new()),
        );
        assert_eq!(ctx.clock.now().to_rfc3339(), "2025-03-15T14:30:00+00:00");
    }
}
