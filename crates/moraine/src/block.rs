//! Blocks: contiguous byte storage with a bump cursor.
//!
//! A [`Block`] is one unit of pre-allocated backing storage. Each block
//! owns a zero-initialised byte payload, a cursor marking how much of it
//! has been handed out, and a link to its successor in the region's chain.
//! Blocks are never individually freed — the region releases the whole
//! chain at disposal.

/// A single contiguous block with bump allocation.
///
/// The cursor only ever advances; carved space is never reclaimed while
/// the block is live. Invariant: `0 <= used() <= capacity()`.
pub struct Block {
    /// Index of the next block in the chain, or `None` at the tail.
    pub(crate) next: Option<usize>,
    /// Backing payload. Allocated to full capacity at creation.
    data: Vec<u8>,
    /// Bump pointer: offset of the next free byte.
    cursor: usize,
}

impl Block {
    /// Create a new block with the given payload capacity in bytes.
    ///
    /// The payload is zero-initialised and the cursor starts at zero.
    /// Callers guarantee `capacity > 0`; the region validates its config
    /// and sizes overflow blocks itself, so a zero-capacity block is
    /// unreachable through the public API.
    pub(crate) fn new(capacity: usize) -> Self {
        debug_assert!(capacity > 0, "blocks must have non-zero capacity");
        Self {
            next: None,
            data: vec![0; capacity],
            cursor: 0,
        }
    }

    /// Bump-allocate `len` bytes from this block.
    ///
    /// Returns the start offset of the carved range, or `None` if the
    /// remaining space cannot hold `len` bytes. An exact fit is served:
    /// allocation succeeds whenever `remaining() >= len`.
    pub(crate) fn alloc(&mut self, len: usize) -> Option<usize> {
        let new_cursor = self.cursor.checked_add(len)?;
        if new_cursor > self.data.len() {
            return None;
        }
        let offset = self.cursor;
        self.cursor = new_cursor;
        Some(offset)
    }

    /// Shared view of `len` bytes starting at `offset`.
    ///
    /// Returns `None` if the range reaches past the carved portion of the
    /// payload — only bytes already handed out can be viewed.
    pub(crate) fn slice(&self, offset: usize, len: usize) -> Option<&[u8]> {
        let end = offset.checked_add(len)?;
        if end > self.cursor {
            return None;
        }
        Some(&self.data[offset..end])
    }

    /// Mutable view of `len` bytes starting at `offset`.
    ///
    /// Same range rules as [`Block::slice`].
    pub(crate) fn slice_mut(&mut self, offset: usize, len: usize) -> Option<&mut [u8]> {
        let end = offset.checked_add(len)?;
        if end > self.cursor {
            return None;
        }
        Some(&mut self.data[offset..end])
    }

    /// Number of bytes already handed out from this block.
    pub fn used(&self) -> usize {
        self.cursor
    }

    /// Total payload capacity in bytes.
    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    /// Remaining free capacity in bytes.
    pub fn remaining(&self) -> usize {
        self.data.len() - self.cursor
    }
}
