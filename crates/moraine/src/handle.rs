//! Span handles for issued allocations.
//!
//! A [`Span`] encodes the physical location of one allocation within a
//! region: which block it lives in, where it starts, and how long it is.
//! The bytes behind a span are resolved through the owning
//! [`Region`](crate::Region); the engine does not track spans after
//! issuing them, and disposal of the region invalidates them all at once.

use std::fmt;

/// Physical location of an allocation within a region's block chain.
///
/// Spans are cheap, copyable tokens. A span is only meaningful to the
/// region that issued it; resolving it against any other region, or
/// against its own region after disposal, yields `None`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[must_use]
pub struct Span {
    /// Index of the owning block in the region's chain.
    pub(crate) block: u16,
    /// Byte offset of the span's first byte within the block's payload.
    pub(crate) offset: u32,
    /// Length in bytes (the aligned size, never less than requested).
    pub(crate) len: u32,
}

impl Span {
    /// Create a new span token.
    pub(crate) fn new(block: u16, offset: u32, len: u32) -> Self {
        Self { block, offset, len }
    }

    /// Index of the block this span was carved from.
    pub fn block(&self) -> u16 {
        self.block
    }

    /// Start offset within the owning block's payload, in bytes.
    ///
    /// Always a multiple of [`ALIGNMENT`](crate::config::ALIGNMENT).
    pub fn offset(&self) -> u32 {
        self.offset
    }

    /// Length of the span in bytes.
    ///
    /// This is the aligned size, so it can exceed the requested size.
    pub fn len(&self) -> u32 {
        self.len
    }

    /// Whether this is a zero-length span. The engine never issues one.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Span(block={}, off={}, len={})",
            self.block, self.offset, self.len
        )
    }
}
