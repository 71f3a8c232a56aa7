//! Region configuration parameters.

use crate::error::RegionError;

/// Byte granularity every returned span's start offset is aligned to.
///
/// Fixed at compile time. Request sizes are rounded up to the next
/// multiple of this value, so offsets within a block stay aligned as long
/// as the block's own start is aligned by the backing allocator.
pub const ALIGNMENT: usize = 16;

/// Round `nbytes` up to the next multiple of [`ALIGNMENT`].
///
/// `align_up(0) == 0`; callers reject zero-byte requests before aligning.
pub const fn align_up(nbytes: usize) -> usize {
    (nbytes + ALIGNMENT - 1) / ALIGNMENT * ALIGNMENT
}

/// Configuration for a [`Region`](crate::Region).
///
/// Validated at region construction; all values are immutable afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegionConfig {
    /// Payload capacity of a newly created block, in bytes.
    ///
    /// Default: 1024. A block created to serve an oversized request is
    /// grown past this to fit that request, so `block_size` is a floor,
    /// not a hard per-block capacity.
    pub block_size: usize,

    /// Largest single request the region agrees to serve, in bytes
    /// (pre-alignment).
    ///
    /// Default: equal to `block_size`. This is a hard ceiling — requests
    /// above it fail regardless of how much capacity the region holds.
    pub max_request: usize,

    /// Maximum number of blocks the region may own.
    ///
    /// Default: 16. Once reached, a request that cannot be served from the
    /// current block fails with [`RegionError::BlockLimit`].
    pub max_blocks: usize,
}

impl RegionConfig {
    /// Default block payload size in bytes.
    pub const DEFAULT_BLOCK_SIZE: usize = 1024;

    /// Default maximum block count per region.
    pub const DEFAULT_MAX_BLOCKS: usize = 16;

    /// Create a config with the given block size.
    ///
    /// The request ceiling defaults to the block size; the block limit
    /// defaults to [`Self::DEFAULT_MAX_BLOCKS`].
    pub fn new(block_size: usize) -> Self {
        Self {
            block_size,
            max_request: block_size,
            max_blocks: Self::DEFAULT_MAX_BLOCKS,
        }
    }

    /// Check the configuration for values the engine cannot operate with.
    pub fn validate(&self) -> Result<(), RegionError> {
        if self.block_size == 0 {
            return Err(RegionError::InvalidConfig {
                reason: "block_size must be non-zero",
            });
        }
        if self.max_request == 0 {
            return Err(RegionError::InvalidConfig {
                reason: "max_request must be non-zero",
            });
        }
        if self.max_blocks == 0 {
            return Err(RegionError::InvalidConfig {
                reason: "max_blocks must be at least 1",
            });
        }
        // Spans store block index / offset / length as u16 / u32 / u32.
        if self.max_blocks > u16::MAX as usize {
            return Err(RegionError::InvalidConfig {
                reason: "max_blocks must fit in 16 bits",
            });
        }
        let span_limit = u32::MAX as usize - (ALIGNMENT - 1);
        if self.block_size > span_limit || self.max_request > span_limit {
            return Err(RegionError::InvalidConfig {
                reason: "block_size and max_request must fit in 32 bits after alignment",
            });
        }
        Ok(())
    }
}

impl Default for RegionConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_BLOCK_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_ceiling_tracks_block_size() {
        let config = RegionConfig::new(4096);
        assert_eq!(config.max_request, 4096);
        assert_eq!(config.max_blocks, RegionConfig::DEFAULT_MAX_BLOCKS);
    }

    #[test]
    fn default_config_is_valid() {
        assert!(RegionConfig::default().validate().is_ok());
    }

    #[test]
    fn zero_block_size_rejected() {
        let config = RegionConfig {
            block_size: 0,
            ..RegionConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(RegionError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn zero_max_blocks_rejected() {
        let config = RegionConfig {
            max_blocks: 0,
            ..RegionConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(RegionError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn oversized_max_blocks_rejected() {
        let config = RegionConfig {
            max_blocks: u16::MAX as usize + 1,
            ..RegionConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(RegionError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn align_up_rounds_to_next_boundary() {
        assert_eq!(align_up(1), 16);
        assert_eq!(align_up(15), 16);
        assert_eq!(align_up(16), 16);
        assert_eq!(align_up(17), 32);
        assert_eq!(align_up(100), 112);
    }

    #[test]
    fn align_up_of_zero_is_zero() {
        assert_eq!(align_up(0), 0);
    }
}
