//! Error types used across the crate.

use thiserror::Error;

/// Convenience alias for results produced by this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors reported by curve, transform, mapping and pipeline operations.
///
/// Every failure is synchronous and local to the failing call; no operation
/// leaves residual state behind.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// The requested curve order cannot be represented.
    #[error("curve order {order} exceeds the maximum supported order {max}")]
    UnsupportedOrder {
        /// The rejected order.
        order: u32,
        /// The largest order the index type can represent.
        max: u32,
    },

    /// A curve index outside `[0, 4^order)`.
    #[error("index {index} out of range for order {order} curve of {capacity} cells")]
    IndexOutOfRange {
        /// The order of the curve being addressed.
        order: u32,
        /// The rejected index.
        index: u64,
        /// The curve's cell count, `4^order`.
        capacity: u64,
    },

    /// A grid coordinate outside `[0, 2^order)` on either axis.
    #[error("coordinate ({x}, {y}) out of range for order {order} grid of side {side}")]
    CoordOutOfRange {
        /// The order of the curve being addressed.
        order: u32,
        /// The rejected x coordinate.
        x: u32,
        /// The rejected y coordinate.
        y: u32,
        /// The grid side length, `2^order`.
        side: u32,
    },

    /// A transform input with a length the transform cannot process.
    #[error("transform input of length {len} is unsupported: {reason}")]
    InvalidLength {
        /// The rejected length.
        len: usize,
        /// Why the length is unsupported.
        reason: &'static str,
    },

    /// A sequence longer than the grid capacity under the reject policy.
    #[error("sequence of {len} values exceeds the {capacity} cells of an order {order} grid")]
    Overflow {
        /// The curve order whose capacity was exceeded.
        order: u32,
        /// The offending sequence length.
        len: usize,
        /// The curve's cell count, `4^order`.
        capacity: u64,
    },

    /// A grid or sequence whose size does not match its counterpart.
    #[error("size mismatch: expected {expected}, got {got}")]
    SizeMismatch {
        /// The size required by the operation.
        expected: usize,
        /// The size that was supplied.
        got: usize,
    },
}

impl Error {
    /// Whether this error is a domain error (an index or coordinate outside
    /// the valid range of its curve).
    pub fn is_domain(&self) -> bool {
        matches!(
            self,
            Self::IndexOutOfRange { .. } | Self::CoordOutOfRange { .. }
        )
    }
}
