//! A borrowed, column-major point table and its distance model.

use crate::error::{KdIndexError, Result};
use crate::r#type::CoordNum;

/// An immutable view onto `K` coordinate columns of equal length.
///
/// Point `i` is the tuple of the i-th element of every column. The table is
/// borrowed for the lifetime of any tree built over it and is never copied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnPoints<'a, N: CoordNum, const K: usize> {
    cols: [&'a [N]; K],
    len: usize,
}

impl<'a, N: CoordNum, const K: usize> ColumnPoints<'a, N, K> {
    /// Create a new point table from `K` equally-long coordinate slices.
    ///
    /// Returns [`KdIndexError::InvalidInput`] if `K == 0` or the columns have
    /// differing lengths.
    pub fn try_new(cols: [&'a [N]; K]) -> Result<Self> {
        if K == 0 {
            return Err(KdIndexError::InvalidInput(
                "Point table must have at least one dimension.".to_string(),
            ));
        }

        let len = cols[0].len();
        for (dim, col) in cols.iter().enumerate() {
            if col.len() != len {
                return Err(KdIndexError::InvalidInput(format!(
                    "Column {} has length {} when expected {}.",
                    dim,
                    col.len(),
                    len
                )));
            }
        }

        Ok(Self { cols, len })
    }

    /// The number of points in the table.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the table holds no points.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Coordinate `dim` of point `point_index`.
    #[inline]
    pub fn coord(&self, point_index: usize, dim: usize) -> N {
        self.cols[dim][point_index]
    }

    /// Squared Euclidean distance from point `point_index` to `target`.
    ///
    /// Comparisons against this value stay in squared space; no square root
    /// is ever taken.
    #[inline]
    pub fn sq_dist(&self, point_index: usize, target: &[N; K]) -> N {
        let mut acc = N::zero();
        for dim in 0..K {
            acc = acc + axis_sq_dist(self.cols[dim][point_index], target[dim]);
        }
        acc
    }
}

/// Squared distance between two values on a single axis.
///
/// Also the squared distance from a query point to an axis-aligned splitting
/// hyperplane, which lower-bounds the squared distance to any point on the
/// far side of that plane.
#[inline]
pub(crate) fn axis_sq_dist<N: CoordNum>(a: N, b: N) -> N {
    // Ordered subtraction so unsigned coordinate types cannot underflow.
    let d = if a > b { a - b } else { b - a };
    d * d
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_ragged_columns() {
        let xs = [1.0, 2.0, 3.0];
        let ys = [1.0, 2.0];
        let result = ColumnPoints::try_new([&xs[..], &ys[..]]);
        assert!(matches!(result, Err(KdIndexError::InvalidInput(_))));
    }

    #[test]
    fn sq_dist_is_squared_euclidean() {
        let xs = [0.0, 3.0];
        let ys = [0.0, 4.0];
        let points = ColumnPoints::try_new([&xs[..], &ys[..]]).unwrap();
        assert_eq!(points.sq_dist(1, &[0.0, 0.0]), 25.0);
        assert_eq!(points.sq_dist(0, &[0.0, 0.0]), 0.0);
    }

    #[test]
    fn axis_sq_dist_unsigned() {
        assert_eq!(axis_sq_dist(3u32, 7u32), 16);
        assert_eq!(axis_sq_dist(7u32, 3u32), 16);
    }
}
