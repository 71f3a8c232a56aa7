//! Regions: ordered block chains serving bump allocations.
//!
//! A [`Region`] owns its blocks exclusively. The chain is index-linked:
//! the root block sits at index 0 for the region's whole life, each block
//! records the index of its successor, and `current` always names the
//! chain's tail — allocation never rewinds to an earlier block, even if
//! one still has space.

use smallvec::SmallVec;

use crate::block::Block;
use crate::config::{align_up, RegionConfig};
use crate::error::RegionError;
use crate::handle::Span;
use crate::trace::{TraceEvent, TraceSink};

/// Index of the first block ever created for a region.
const ROOT: usize = 0;

/// Liveness tag checked at the top of every public operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Liveness {
    Live,
    Disposed,
}

/// A region-based bump allocator.
///
/// Serves byte spans from a chain of pre-allocated blocks. Individual
/// spans are never reclaimed; [`Region::dispose`] releases every block at
/// once and invalidates all spans the region ever issued. Not safe for
/// concurrent use — callers needing concurrent arenas use one region per
/// thread.
///
/// # Example
///
/// ```
/// use moraine::Region;
///
/// let mut region = Region::new();
/// let span = region.request(24)?;
/// region.bytes_mut(span).unwrap()[0] = 0xFF;
/// assert_eq!(region.bytes(span).unwrap()[0], 0xFF);
/// region.dispose()?;
/// assert!(region.bytes(span).is_none());
/// # Ok::<(), moraine::RegionError>(())
/// ```
pub struct Region {
    /// Block table. The chain order is carried by each block's `next`
    /// index, not by table order (though the two coincide: blocks are
    /// only ever appended at the tail).
    blocks: SmallVec<[Block; 4]>,
    /// Index of the block currently serving requests (the chain tail).
    current: usize,
    config: RegionConfig,
    state: Liveness,
    trace: Option<Box<dyn TraceSink>>,
}

impl Region {
    /// Create a region with the default configuration.
    ///
    /// The first block is created eagerly, so a fresh region always owns
    /// exactly one block.
    pub fn new() -> Self {
        // The default config is statically valid.
        Self::build(RegionConfig::default(), None)
    }

    /// Create a region with the given configuration.
    ///
    /// Fails with [`RegionError::InvalidConfig`] if the configuration is
    /// unusable; no region state is created in that case.
    pub fn with_config(config: RegionConfig) -> Result<Self, RegionError> {
        config.validate()?;
        Ok(Self::build(config, None))
    }

    /// Create a region with a trace sink installed.
    ///
    /// The sink is installed before the root block is created, so it
    /// observes every block-lifecycle event of the region, including the
    /// root's `BlockCreated`.
    pub fn with_trace_sink(
        config: RegionConfig,
        sink: Box<dyn TraceSink>,
    ) -> Result<Self, RegionError> {
        config.validate()?;
        Ok(Self::build(config, Some(sink)))
    }

    fn build(config: RegionConfig, trace: Option<Box<dyn TraceSink>>) -> Self {
        let mut region = Self {
            blocks: SmallVec::new(),
            current: ROOT,
            config,
            state: Liveness::Live,
            trace,
        };
        let capacity = region.config.block_size;
        region.blocks.push(Block::new(capacity));
        region.emit(TraceEvent::BlockCreated {
            index: ROOT,
            capacity,
        });
        region
    }

    /// Request a span of at least `nbytes` bytes.
    ///
    /// The size is rounded up to the next [`ALIGNMENT`] multiple and
    /// carved from the current block; when the current block cannot hold
    /// it, a new block sized `max(block_size, aligned)` is appended to the
    /// chain and becomes current. The request-size ceiling is hard:
    /// requests above `max_request` are never served, regardless of how
    /// much capacity the region holds.
    ///
    /// [`ALIGNMENT`]: crate::config::ALIGNMENT
    pub fn request(&mut self, nbytes: usize) -> Result<Span, RegionError> {
        match self.try_request(nbytes) {
            Ok(span) => Ok(span),
            Err(error) => {
                self.emit(TraceEvent::Rejected {
                    error: error.clone(),
                });
                Err(error)
            }
        }
    }

    fn try_request(&mut self, nbytes: usize) -> Result<Span, RegionError> {
        if self.state == Liveness::Disposed {
            return Err(RegionError::Disposed);
        }
        if nbytes == 0 {
            return Err(RegionError::EmptyRequest);
        }
        if nbytes > self.config.max_request {
            return Err(RegionError::RequestTooLarge {
                requested: nbytes,
                ceiling: self.config.max_request,
            });
        }
        let aligned = align_up(nbytes);

        // Fast path: the current block has room (exact fit included).
        if let Some(offset) = self.blocks[self.current].alloc(aligned) {
            return Ok(Span::new(self.current as u16, offset as u32, aligned as u32));
        }

        // Current block exhausted. Append a successor sized to fit the
        // triggering request, so a new block can never start over-full.
        if self.blocks.len() >= self.config.max_blocks {
            return Err(RegionError::BlockLimit {
                limit: self.config.max_blocks,
            });
        }
        let capacity = self.config.block_size.max(aligned);
        let mut block = Block::new(capacity);
        let offset = block
            .alloc(aligned)
            .expect("capacity >= aligned, so a fresh block always fits");
        let index = self.blocks.len();
        self.blocks.push(block);
        self.blocks[self.current].next = Some(index);
        self.current = index;
        self.emit(TraceEvent::BlockCreated { index, capacity });
        Ok(Span::new(index as u16, offset as u32, aligned as u32))
    }

    /// Release every block and mark the region disposed.
    ///
    /// Walks the chain from the root in link order, emitting one
    /// `BlockDisposed` event per block, then releases all storage in one
    /// sweep. Every span the region ever issued is invalidated; resolving
    /// one afterwards yields `None`. A second call fails with
    /// [`RegionError::Disposed`] and changes nothing.
    pub fn dispose(&mut self) -> Result<(), RegionError> {
        if self.state == Liveness::Disposed {
            let error = RegionError::Disposed;
            self.emit(TraceEvent::Rejected {
                error: error.clone(),
            });
            return Err(error);
        }
        // Capture each block's next link before its storage goes away
        // with the table below.
        let mut cursor = Some(ROOT);
        while let Some(index) = cursor {
            cursor = self.blocks[index].next;
            let used = self.blocks[index].used();
            self.emit(TraceEvent::BlockDisposed { index, used });
        }
        self.blocks.clear();
        self.current = ROOT;
        self.state = Liveness::Disposed;
        Ok(())
    }

    /// Shared view of the bytes behind a span.
    ///
    /// Returns `None` if the region has been disposed or the span does
    /// not name a carved range of this region (e.g. a span from another
    /// region).
    pub fn bytes(&self, span: Span) -> Option<&[u8]> {
        if self.state == Liveness::Disposed {
            return None;
        }
        self.blocks
            .get(span.block as usize)?
            .slice(span.offset as usize, span.len as usize)
    }

    /// Mutable view of the bytes behind a span.
    ///
    /// Same resolution rules as [`Region::bytes`].
    pub fn bytes_mut(&mut self, span: Span) -> Option<&mut [u8]> {
        if self.state == Liveness::Disposed {
            return None;
        }
        self.blocks
            .get_mut(span.block as usize)?
            .slice_mut(span.offset as usize, span.len as usize)
    }

    /// Whether the region has not been disposed.
    pub fn is_live(&self) -> bool {
        self.state == Liveness::Live
    }

    /// Number of blocks currently owned. At least 1 for a live region,
    /// 0 after disposal.
    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    /// Index of the block currently serving requests (the chain tail).
    pub fn current_block(&self) -> usize {
        self.current
    }

    /// Free bytes left in the current block. 0 after disposal.
    pub fn remaining(&self) -> usize {
        self.blocks.get(self.current).map_or(0, Block::remaining)
    }

    /// Total bytes handed out across all blocks.
    pub fn used_bytes(&self) -> usize {
        self.blocks.iter().map(Block::used).sum()
    }

    /// Total payload bytes held across all blocks.
    pub fn memory_bytes(&self) -> usize {
        self.blocks.iter().map(Block::capacity).sum()
    }

    fn emit(&mut self, event: TraceEvent) {
        if let Some(sink) = self.trace.as_mut() {
            sink.record(event);
        }
    }
}

impl Default for Region {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Region {
    fn drop(&mut self) {
        // Dispose still-live regions so disposal trace events are not
        // lost on scope exit. Storage itself is freed either way.
        if self.state == Liveness::Live {
            let _ = self.dispose();
        }
    }
}
