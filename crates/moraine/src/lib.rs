//! Region-based bump allocation.
//!
//! A [`Region`] owns a chain of pre-allocated [`block::Block`]s and serves
//! many logical allocations from them with a bump pointer, releasing all of
//! their storage at once when the region is disposed. There is no per-span
//! deallocation, no free list, and no reuse of carved space.
//!
//! # Architecture
//!
//! ```text
//! Region (orchestrator)
//! ├── Block chain (index-linked, root at index 0, current at the tail)
//! │   └── Block — zero-init Vec<u8> payload + bump cursor + next link
//! ├── RegionConfig — block size, request ceiling, block limit
//! └── TraceSink (optional) — advisory block-created/disposed events
//! ```
//!
//! # Protocol
//!
//! A request is aligned up to [`config::ALIGNMENT`] and carved from the
//! current block. When the current block cannot hold it, a new block sized
//! to fit is appended to the chain and becomes current. [`Region::request`]
//! returns a [`Span`] token; the bytes behind it are resolved through
//! [`Region::bytes`] / [`Region::bytes_mut`]. Disposal walks the chain from
//! the root and releases every block in one sweep; all spans issued by the
//! region are invalidated together.
//!
//! # Safety
//!
//! No `unsafe`. Payloads are zero-initialised `Vec<u8>` storage and spans
//! are resolved by range, so a stale span on a disposed region yields
//! `None` rather than undefined behavior.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod block;
pub mod config;
pub mod error;
pub mod handle;
pub mod region;
pub mod trace;

// Public re-exports for the primary API surface.
pub use config::RegionConfig;
pub use error::RegionError;
pub use handle::Span;
pub use region::Region;
pub use trace::{StderrSink, TraceEvent, TraceSink};
