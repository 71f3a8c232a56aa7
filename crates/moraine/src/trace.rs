//! Advisory trace events for block lifecycle and rejected requests.
//!
//! Tracing is purely observational — the engine behaves identically with
//! or without a sink installed, and correctness never depends on an event
//! being recorded. Install a sink with
//! [`Region::with_trace_sink`](crate::Region::with_trace_sink); a region
//! without one skips event construction entirely.

use std::fmt;

use crate::error::RegionError;

/// One trace event emitted by a region.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TraceEvent {
    /// A block was created and linked into the chain.
    BlockCreated {
        /// Index of the new block in the chain.
        index: usize,
        /// Payload capacity of the new block in bytes.
        capacity: usize,
    },
    /// A block's storage was released during region disposal.
    BlockDisposed {
        /// Index of the disposed block in the chain.
        index: usize,
        /// Bytes that had been handed out from the block.
        used: usize,
    },
    /// A request or operation was rejected.
    Rejected {
        /// Why the operation failed.
        error: RegionError,
    },
}

impl fmt::Display for TraceEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BlockCreated { index, capacity } => {
                write!(f, "block {index} created ({capacity} bytes)")
            }
            Self::BlockDisposed { index, used } => {
                write!(f, "block {index} disposed ({used} bytes used)")
            }
            Self::Rejected { error } => write!(f, "rejected: {error}"),
        }
    }
}

/// Receiver for region trace events.
///
/// Implementations must not assume any particular event ordering beyond
/// what the engine documents: `BlockCreated` events arrive in chain order,
/// and disposal emits one `BlockDisposed` per block, also in chain order.
pub trait TraceSink {
    /// Record one event.
    fn record(&mut self, event: TraceEvent);
}

/// Sink that prints each event to stderr, one line per event.
#[derive(Clone, Copy, Debug, Default)]
pub struct StderrSink;

impl TraceSink for StderrSink {
    fn record(&mut self, event: TraceEvent) {
        eprintln!("[trace] {event}");
    }
}
