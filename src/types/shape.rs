//! Block shape types.

use std::fmt;

use super::Axis;

/// Shape of a cell field: variable count and cell counts per axis (ghosts included).
///
/// Provides a strongly-typed way to specify block dimensions,
/// preventing mix-ups between `ni`, `nj`, `nk` and other integer parameters.
///
/// # Example
///
/// ```
/// use ppm_rs::types::{Axis, BlockShape};
///
/// let shape = BlockShape::new(5, 1, 8, 16);
/// assert_eq!(shape.extent(Axis::X1), 16);
/// assert_eq!(shape.extent(Axis::X3), 1);
/// assert_eq!(shape.cells_per_variable(), 128);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BlockShape {
    /// Number of variables
    nvar: usize,
    /// Number of cells along x3
    nk: usize,
    /// Number of cells along x2
    nj: usize,
    /// Number of cells along x1
    ni: usize,
}

impl BlockShape {
    /// Create a new shape.
    ///
    /// # Panics
    ///
    /// Panics if any dimension is zero.
    pub fn new(nvar: usize, nk: usize, nj: usize, ni: usize) -> Self {
        assert!(nvar > 0, "nvar must be positive, got {}", nvar);
        assert!(nk > 0, "nk must be positive, got {}", nk);
        assert!(nj > 0, "nj must be positive, got {}", nj);
        assert!(ni > 0, "ni must be positive, got {}", ni);
        Self { nvar, nk, nj, ni }
    }

    /// Number of variables.
    #[inline]
    pub fn nvar(&self) -> usize {
        self.nvar
    }

    /// Number of cells along an axis.
    #[inline]
    pub fn extent(&self, axis: Axis) -> usize {
        match axis {
            Axis::X1 => self.ni,
            Axis::X2 => self.nj,
            Axis::X3 => self.nk,
        }
    }

    /// Distance in flat storage between neighbouring cells along an axis.
    #[inline]
    pub fn stride(&self, axis: Axis) -> usize {
        match axis {
            Axis::X1 => 1,
            Axis::X2 => self.ni,
            Axis::X3 => self.ni * self.nj,
        }
    }

    /// Cells per variable.
    #[inline]
    pub fn cells_per_variable(&self) -> usize {
        self.nk * self.nj * self.ni
    }

    /// Total number of stored values.
    #[inline]
    pub fn len(&self) -> usize {
        self.nvar * self.cells_per_variable()
    }

    /// Always false; every dimension is positive.
    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Flat offset of `(n, k, j, i)`.
    #[inline]
    pub fn offset(&self, n: usize, k: usize, j: usize, i: usize) -> usize {
        ((n * self.nk + k) * self.nj + j) * self.ni + i
    }
}

impl fmt::Display for BlockShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}×{}×{}×{}", self.nvar, self.nk, self.nj, self.ni)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offsets_follow_strides() {
        let s = BlockShape::new(2, 3, 4, 5);
        let base = s.offset(1, 1, 2, 3);
        assert_eq!(s.offset(1, 1, 2, 4) - base, s.stride(Axis::X1));
        assert_eq!(s.offset(1, 1, 3, 3) - base, s.stride(Axis::X2));
        assert_eq!(s.offset(1, 2, 2, 3) - base, s.stride(Axis::X3));
        assert_eq!(s.offset(1, 0, 0, 0), s.cells_per_variable());
    }

    #[test]
    fn test_len() {
        let s = BlockShape::new(2, 3, 4, 5);
        assert_eq!(s.len(), 120);
        assert_eq!(s.to_string(), "2×3×4×5");
    }

    #[test]
    #[should_panic(expected = "ni must be positive")]
    fn test_zero_ni() {
        BlockShape::new(1, 1, 1, 0);
    }
}
