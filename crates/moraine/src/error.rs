//! Region-specific error types.

use std::error::Error;
use std::fmt;

/// Errors that can occur during region operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RegionError {
    /// A request for zero bytes. The engine never issues empty spans.
    EmptyRequest,
    /// A request above the configured single-request ceiling.
    RequestTooLarge {
        /// Number of bytes requested.
        requested: usize,
        /// The configured ceiling in bytes.
        ceiling: usize,
    },
    /// The region already owns its maximum number of blocks and the
    /// current block cannot serve the request.
    BlockLimit {
        /// The configured block limit.
        limit: usize,
    },
    /// An operation on a region that has already been disposed.
    Disposed,
    /// A configuration value the engine cannot operate with.
    InvalidConfig {
        /// Which constraint was violated.
        reason: &'static str,
    },
}

impl fmt::Display for RegionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyRequest => write!(f, "requested zero bytes"),
            Self::RequestTooLarge { requested, ceiling } => {
                write!(
                    f,
                    "request of {requested} bytes exceeds ceiling of {ceiling} bytes"
                )
            }
            Self::BlockLimit { limit } => {
                write!(f, "region block limit of {limit} reached")
            }
            Self::Disposed => write!(f, "region has been disposed"),
            Self::InvalidConfig { reason } => {
                write!(f, "invalid region config: {reason}")
            }
        }
    }
}

impl Error for RegionError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_carries_the_numbers() {
        let err = RegionError::RequestTooLarge {
            requested: 2000,
            ceiling: 1024,
        };
        assert_eq!(
            err.to_string(),
            "request of 2000 bytes exceeds ceiling of 1024 bytes"
        );
        assert_eq!(
            RegionError::BlockLimit { limit: 16 }.to_string(),
            "region block limit of 16 reached"
        );
    }
}
