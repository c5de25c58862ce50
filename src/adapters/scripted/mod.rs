//! Scripted adapters with predetermined behavior, for tests and embedding.

pub mod clock;
pub mod id_gen;

pub use clock::ScriptedClock;
pub use id_gen::ScriptedUuidGenerator;
