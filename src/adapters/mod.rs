// Adapters layer: concrete output sinks.

pub mod memory;
pub mod stdout;

pub use memory::{RecordedLine, RecordingSink};
pub use stdout::StdoutSink;
