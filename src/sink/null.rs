// lob_engine/src/sink/null.rs

use crate::sink::Sink;

/// A `Sink` that discards every event. Useful for benchmarks and tests that
/// only care about the book's resulting state.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl Sink for NullSink {}
