//! Error types for view construction, index resolution, and image I/O.

use thiserror::Error;

/// Errors raised by view construction, indexing, and synchronization.
///
/// All errors are reported synchronously to the immediate caller; nothing
/// is retried or silently recovered inside the crate.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ViewError {
    /// A view was requested with a zero-sized rectangle.
    #[error("view geometry {width}x{height} is empty")]
    InvalidGeometry {
        /// Requested width in columns.
        width: usize,
        /// Requested height in rows.
        height: usize,
    },

    /// The requested rectangle does not lie within the image.
    #[error("rectangle ({x}, {y}) {width}x{height} exceeds image bounds {columns}x{rows}")]
    OutOfBounds {
        /// X coordinate of the rectangle origin.
        x: usize,
        /// Y coordinate of the rectangle origin.
        y: usize,
        /// Requested width in columns.
        width: usize,
        /// Requested height in rows.
        height: usize,
        /// Image width in columns.
        columns: usize,
        /// Image height in rows.
        rows: usize,
    },

    /// A resolved row or column index falls outside its axis.
    ///
    /// `index` is the value as the caller supplied it, before negative
    /// normalization.
    #[error("index {index} out of range for axis of length {len}")]
    IndexOutOfRange {
        /// The offending index as supplied.
        index: isize,
        /// Length of the axis it was resolved against.
        len: usize,
    },

    /// A write's right-hand value could not be converted to a pixel.
    #[error("cannot convert value to a pixel: {0}")]
    TypeConversion(String),

    /// The backing image rejected a bulk read or write.
    #[error("backing image rejected the request: {0}")]
    Backing(String),
}
