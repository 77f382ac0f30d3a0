//! Inclusive cell index ranges.

use std::fmt;

use super::Axis;

/// Inclusive range `[lo, hi]` of cell-center indices along one axis.
///
/// # Example
///
/// ```
/// use ppm_rs::types::IndexRange;
///
/// // Interior [2, 9] expanded by one cell for a sweep
/// let interior = IndexRange::new(2, 9);
/// let sweep = interior.expand(1);
/// assert_eq!(sweep, IndexRange::new(1, 10));
/// assert_eq!(interior.len(), 8);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct IndexRange {
    /// First index (inclusive)
    pub lo: usize,
    /// Last index (inclusive)
    pub hi: usize,
}

impl IndexRange {
    /// Create a new inclusive range.
    ///
    /// # Panics
    ///
    /// Panics if `hi < lo`.
    pub fn new(lo: usize, hi: usize) -> Self {
        assert!(hi >= lo, "hi ({}) must not be less than lo ({})", hi, lo);
        Self { lo, hi }
    }

    /// Range covering a single index.
    pub fn single(index: usize) -> Self {
        Self { lo: index, hi: index }
    }

    /// Number of indices in the range.
    #[inline]
    pub fn len(&self) -> usize {
        self.hi - self.lo + 1
    }

    /// Always false; an `IndexRange` holds at least one index.
    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Check if an index lies in the range.
    #[inline]
    pub fn contains(&self, index: usize) -> bool {
        index >= self.lo && index <= self.hi
    }

    /// Grow the range by `n` cells on both sides.
    ///
    /// # Panics
    ///
    /// Panics if `lo < n`.
    pub fn expand(&self, n: usize) -> Self {
        assert!(
            self.lo >= n,
            "cannot expand range starting at {} by {} cells",
            self.lo,
            n
        );
        Self::new(self.lo - n, self.hi + n)
    }

    /// Iterate over the indices in the range.
    pub fn iter(&self) -> std::ops::RangeInclusive<usize> {
        self.lo..=self.hi
    }
}

impl fmt::Display for IndexRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.lo, self.hi)
    }
}

impl From<std::ops::RangeInclusive<usize>> for IndexRange {
    fn from(r: std::ops::RangeInclusive<usize>) -> Self {
        Self::new(*r.start(), *r.end())
    }
}

/// Inclusive index ranges on all three axes of a block.
///
/// # Example
///
/// ```
/// use ppm_rs::types::{Axis, IndexRange, IndexRegion};
///
/// let region = IndexRegion::new(
///     IndexRange::single(0), // k
///     IndexRange::new(2, 5), // j
///     IndexRange::new(1, 8), // i
/// );
/// assert_eq!(region.range(Axis::X2), IndexRange::new(2, 5));
/// assert_eq!(region.line_count(Axis::X1), 4);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct IndexRegion {
    /// Range along x3
    pub k: IndexRange,
    /// Range along x2
    pub j: IndexRange,
    /// Range along x1
    pub i: IndexRange,
}

impl IndexRegion {
    /// Create a region from per-axis ranges.
    pub fn new(k: IndexRange, j: IndexRange, i: IndexRange) -> Self {
        Self { k, j, i }
    }

    /// Range along an axis.
    #[inline]
    pub fn range(&self, axis: Axis) -> IndexRange {
        match axis {
            Axis::X1 => self.i,
            Axis::X2 => self.j,
            Axis::X3 => self.k,
        }
    }

    /// Number of lines along `axis` that cross the region.
    pub fn line_count(&self, axis: Axis) -> usize {
        let (outer, inner) = axis.transverse();
        self.range(outer).len() * self.range(inner).len()
    }
}

impl fmt::Display for IndexRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "k{} j{} i{}", self.k, self.j, self.i)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_len_and_contains() {
        let r = IndexRange::new(3, 7);
        assert_eq!(r.len(), 5);
        assert!(r.contains(3));
        assert!(r.contains(7));
        assert!(!r.contains(8));
    }

    #[test]
    fn test_single() {
        let r = IndexRange::single(4);
        assert_eq!(r.len(), 1);
        assert_eq!(r.iter().collect::<Vec<_>>(), vec![4]);
    }

    #[test]
    fn test_from_range() {
        let r: IndexRange = (2..=5).into();
        assert_eq!(r, IndexRange::new(2, 5));
    }

    #[test]
    #[should_panic(expected = "must not be less than lo")]
    fn test_inverted_range() {
        IndexRange::new(5, 4);
    }

    #[test]
    #[should_panic(expected = "cannot expand")]
    fn test_expand_below_zero() {
        IndexRange::new(0, 4).expand(1);
    }

    #[test]
    fn test_display() {
        assert_eq!(IndexRange::new(1, 10).to_string(), "[1, 10]");
    }

    #[test]
    fn test_region_line_count() {
        let region = IndexRegion::new(
            IndexRange::new(2, 4),
            IndexRange::new(2, 6),
            IndexRange::new(1, 10),
        );
        assert_eq!(region.line_count(Axis::X1), 15);
        assert_eq!(region.line_count(Axis::X2), 30);
        assert_eq!(region.line_count(Axis::X3), 50);
        assert_eq!(region.to_string(), "k[2, 4] j[2, 6] i[1, 10]");
    }
}
