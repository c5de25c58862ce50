//! Live adapters backed by the system clock and the `uuid` crate.

pub mod clock;
pub mod id_gen;
