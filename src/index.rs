//! Index resolution: row/column specifiers and their canonical form.
//!
//! A caller addresses view rows and columns four ways: everything, one
//! index, a `(start, length)` pair, or an explicit list/range of indices.
//! [`resolve`] turns any of those into one canonical ordered sequence of
//! valid offsets, or fails with [`ViewError::IndexOutOfRange`].
//!
//! Negative indices count back from the end of the axis, so `-1` is the
//! last row or column.
//!
//! Validation is eager and identical for both axes: every index, including
//! each element of a [`IndexSpec::Set`], is checked during resolution,
//! before any read or write touches pixel data. A failed resolution can
//! therefore never partially apply a write.

use crate::error::ViewError;
use std::ops::{Range, RangeFull};

/// A row or column specifier, before resolution against an axis.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum IndexSpec {
    /// Every index along the axis.
    All,
    /// One index; negative counts from the end. Resolves as scalar.
    Single(isize),
    /// `len` consecutive indices starting at `start`.
    ///
    /// `start` may be negative (counted from the end); `len` must not be.
    /// The run is clamped at the axis edge.
    Slice {
        /// First index of the run.
        start: isize,
        /// Number of indices in the run.
        len: isize,
    },
    /// An explicit ordered list of indices, possibly negative.
    Set(Vec<isize>),
}

impl Default for IndexSpec {
    fn default() -> Self {
        Self::All
    }
}

impl From<RangeFull> for IndexSpec {
    #[inline]
    fn from(_: RangeFull) -> Self {
        Self::All
    }
}

impl From<isize> for IndexSpec {
    #[inline]
    fn from(index: isize) -> Self {
        Self::Single(index)
    }
}

impl From<i32> for IndexSpec {
    #[inline]
    fn from(index: i32) -> Self {
        Self::Single(index as isize)
    }
}

impl From<usize> for IndexSpec {
    #[inline]
    #[allow(clippy::cast_possible_wrap)]
    fn from(index: usize) -> Self {
        Self::Single(index as isize)
    }
}

impl From<(isize, isize)> for IndexSpec {
    #[inline]
    fn from((start, len): (isize, isize)) -> Self {
        Self::Slice { start, len }
    }
}

impl From<(i32, i32)> for IndexSpec {
    #[inline]
    fn from((start, len): (i32, i32)) -> Self {
        Self::Slice {
            start: start as isize,
            len: len as isize,
        }
    }
}

impl From<Range<isize>> for IndexSpec {
    #[inline]
    fn from(range: Range<isize>) -> Self {
        Self::Set(range.collect())
    }
}

impl From<Range<i32>> for IndexSpec {
    #[inline]
    fn from(range: Range<i32>) -> Self {
        Self::Set(range.map(|i| i as isize).collect())
    }
}

impl From<Vec<isize>> for IndexSpec {
    #[inline]
    fn from(indices: Vec<isize>) -> Self {
        Self::Set(indices)
    }
}

impl From<&[isize]> for IndexSpec {
    #[inline]
    fn from(indices: &[isize]) -> Self {
        Self::Set(indices.to_vec())
    }
}

impl<const N: usize> From<[isize; N]> for IndexSpec {
    #[inline]
    fn from(indices: [isize; N]) -> Self {
        Self::Set(indices.to_vec())
    }
}

/// A resolved axis: ordered valid offsets plus the scalar marker.
///
/// The scalar marker records that the caller asked for exactly one index
/// as a bare integer; a read where both axes are scalar yields a single
/// pixel rather than a collection.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Axis {
    indices: Vec<usize>,
    scalar: bool,
}

impl Axis {
    /// Get the resolved offsets in selection order.
    #[inline]
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// Get the number of resolved offsets.
    #[inline]
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Check if the axis resolved to no offsets.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Check if the specifier was a bare single index.
    #[inline]
    pub const fn is_scalar(&self) -> bool {
        self.scalar
    }
}

/// Normalize one possibly-negative index against an axis of length `len`.
fn normalize(index: isize, len: usize) -> Result<usize, ViewError> {
    let span = len as isize;
    let offset = if index < 0 { index + span } else { index };
    if offset < 0 || offset >= span {
        return Err(ViewError::IndexOutOfRange { index, len });
    }
    Ok(offset as usize)
}

/// Resolve a specifier against an axis of length `len`.
///
/// Produces the canonical ordered index sequence described by the
/// specifier, or [`ViewError::IndexOutOfRange`] for any index outside
/// `[0, len)` after negative normalization. Slice runs clamp their length
/// at the axis edge; a slice `start` equal to `len` is permitted and
/// resolves to an empty run.
#[allow(clippy::cast_possible_wrap)]
pub fn resolve(spec: &IndexSpec, len: usize) -> Result<Axis, ViewError> {
    match spec {
        IndexSpec::All => Ok(Axis {
            indices: (0..len).collect(),
            scalar: false,
        }),
        IndexSpec::Single(index) => {
            let offset = normalize(*index, len)?;
            Ok(Axis {
                indices: vec![offset],
                scalar: true,
            })
        }
        IndexSpec::Slice { start, len: run } => {
            let span = len as isize;
            let offset = if *start < 0 { *start + span } else { *start };
            if offset < 0 || offset > span {
                return Err(ViewError::IndexOutOfRange { index: *start, len });
            }
            if *run < 0 {
                return Err(ViewError::IndexOutOfRange { index: *run, len });
            }
            let offset = offset as usize;
            let take = (*run as usize).min(len - offset);
            Ok(Axis {
                indices: (offset..offset + take).collect(),
                scalar: false,
            })
        }
        IndexSpec::Set(raw) => {
            let indices = raw
                .iter()
                .map(|&index| normalize(index, len))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(Axis {
                indices,
                scalar: false,
            })
        }
    }
}
