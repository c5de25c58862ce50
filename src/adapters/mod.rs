//! Adapter implementations of the port traits, plus the recording sink.

pub mod live;
pub mod recording;
pub mod scripted;
