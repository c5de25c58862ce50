//! Recording adapters that capture interactions for later inspection.

pub mod writer;

pub use writer::RecordingWriter;
