//! Port traits defining external boundaries.
//!
//! Each trait represents a boundary between the command core and something
//! it does not own (time, identifier generation). Implementations live in
//! `src/adapters/`.

pub mod clock;
pub mod id_gen;

pub use clock::Clock;
pub use id_gen::{NameHash, UuidGenerator};
