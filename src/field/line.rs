//! Lines of cells and per-line face-state buffers.

use std::fmt;

use crate::types::{Axis, BlockShape, IndexRegion, VariableIndex};

/// A line of cells along one axis, identified by its two fixed transverse indices.
///
/// `X1` lines fix `(k, j)`, `X2` lines fix `(k, i)`, `X3` lines fix `(j, i)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Line {
    axis: Axis,
    outer: usize,
    inner: usize,
}

impl Line {
    /// Create a line along `axis` with transverse indices ordered slowest first.
    pub fn new(axis: Axis, outer: usize, inner: usize) -> Self {
        Self { axis, outer, inner }
    }

    /// Line along x1 at fixed `(k, j)`.
    pub fn x1(k: usize, j: usize) -> Self {
        Self::new(Axis::X1, k, j)
    }

    /// Line along x2 at fixed `(k, i)`.
    pub fn x2(k: usize, i: usize) -> Self {
        Self::new(Axis::X2, k, i)
    }

    /// Line along x3 at fixed `(j, i)`.
    pub fn x3(j: usize, i: usize) -> Self {
        Self::new(Axis::X3, j, i)
    }

    /// Every line along `axis` crossing `region`, slowest transverse index outermost.
    pub fn in_region(axis: Axis, region: &IndexRegion) -> impl Iterator<Item = Line> + use<> {
        let (outer_axis, inner_axis) = axis.transverse();
        let outer = region.range(outer_axis);
        let inner = region.range(inner_axis);
        outer
            .iter()
            .flat_map(move |o| inner.iter().map(move |i| Line::new(axis, o, i)))
    }

    /// Sweep axis.
    #[inline]
    pub fn axis(&self) -> Axis {
        self.axis
    }

    /// Fixed transverse indices, slowest axis first.
    #[inline]
    pub fn transverse(&self) -> (usize, usize) {
        (self.outer, self.inner)
    }

    /// Cell `(k, j, i)` at position `pos` along the line.
    #[inline]
    pub fn cell(&self, pos: usize) -> (usize, usize, usize) {
        match self.axis {
            Axis::X1 => (self.outer, self.inner, pos),
            Axis::X2 => (self.outer, pos, self.inner),
            Axis::X3 => (pos, self.outer, self.inner),
        }
    }

    /// Flat offset of position 0 of variable `n` on this line.
    #[inline]
    pub fn base_offset(&self, shape: &BlockShape, n: usize) -> usize {
        let (k, j, i) = self.cell(0);
        shape.offset(n, k, j, i)
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.axis {
            Axis::X1 => write!(f, "x1(k={}, j={})", self.outer, self.inner),
            Axis::X2 => write!(f, "x2(k={}, i={})", self.outer, self.inner),
            Axis::X3 => write!(f, "x3(j={}, i={})", self.outer, self.inner),
        }
    }
}

/// Face states for one line of cells, indexed `(variable, i)`.
///
/// Used as either the left-state buffer (`ql`, state at face i-1/2 seen
/// from cell i-1) or the right-state buffer (`qr`, state at face i-1/2 seen
/// from cell i). Layout: `data[n * len + i]`, always `nvar * len` values.
#[derive(Clone, Debug, PartialEq)]
pub struct LineBuffer {
    data: Vec<f64>,
    nvar: usize,
    len: usize,
}

impl LineBuffer {
    /// Create a zeroed buffer for `nvar` variables and `len` positions.
    pub fn new(nvar: usize, len: usize) -> Self {
        Self {
            data: vec![0.0; nvar * len],
            nvar,
            len,
        }
    }

    /// Create a buffer sized for every position along `axis` of a block.
    pub fn for_axis(shape: &BlockShape, axis: Axis) -> Self {
        Self::new(shape.nvar(), shape.extent(axis) + 1)
    }

    /// Number of variables.
    #[inline]
    pub fn nvar(&self) -> usize {
        self.nvar
    }

    /// Number of positions per variable.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the buffer holds no positions.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Raw storage, variable-major.
    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Mutable raw storage, variable-major.
    ///
    /// The length is fixed at construction; only values can change.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.data
    }

    /// Get the value of variable n at position i.
    #[inline]
    pub fn get(&self, n: usize, i: usize) -> f64 {
        self.data[n * self.len + i]
    }

    /// Set the value of variable n at position i.
    #[inline]
    pub fn set(&mut self, n: usize, i: usize, value: f64) {
        self.data[n * self.len + i] = value;
    }

    /// All positions of one variable.
    pub fn var(&self, var: VariableIndex) -> &[f64] {
        let start = var.get() * self.len;
        &self.data[start..start + self.len]
    }

    /// All positions of one variable (mutable).
    pub fn var_mut(&mut self, var: VariableIndex) -> &mut [f64] {
        let start = var.get() * self.len;
        &mut self.data[start..start + self.len]
    }

    /// Fill every entry with `value`.
    pub fn fill(&mut self, value: f64) {
        self.data.fill(value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_cells() {
        assert_eq!(Line::x1(1, 2).cell(5), (1, 2, 5));
        assert_eq!(Line::x2(1, 2).cell(5), (1, 5, 2));
        assert_eq!(Line::x3(1, 2).cell(5), (5, 1, 2));
    }

    #[test]
    fn test_base_offset_plus_stride() {
        let shape = BlockShape::new(2, 6, 7, 8);
        for line in [Line::x1(3, 4), Line::x2(3, 4), Line::x3(3, 4)] {
            let stride = shape.stride(line.axis());
            let (k, j, i) = line.cell(5);
            assert_eq!(
                line.base_offset(&shape, 1) + 5 * stride,
                shape.offset(1, k, j, i)
            );
        }
    }

    #[test]
    fn test_lines_in_region() {
        use crate::types::IndexRange;

        let region = IndexRegion::new(
            IndexRange::new(0, 1),
            IndexRange::new(3, 5),
            IndexRange::new(2, 9),
        );
        let lines: Vec<_> = Line::in_region(Axis::X2, &region).collect();
        assert_eq!(lines.len(), region.line_count(Axis::X2));
        assert_eq!(lines[0], Line::x2(0, 2));
        assert_eq!(lines[1], Line::x2(0, 3));
        assert_eq!(*lines.last().unwrap(), Line::x2(1, 9));
    }

    #[test]
    fn test_line_display() {
        assert_eq!(Line::x2(0, 3).to_string(), "x2(k=0, i=3)");
    }

    #[test]
    fn test_buffer_indexing() {
        let mut b = LineBuffer::new(2, 5);
        b.set(1, 4, 3.0);
        assert_eq!(b.get(1, 4), 3.0);
        assert_eq!(b.var(VariableIndex::new(1))[4], 3.0);
        assert_eq!(b.var(VariableIndex::new(0)), &[0.0; 5]);

        b.var_mut(VariableIndex::ZERO)[0] = -1.0;
        assert_eq!(b.get(0, 0), -1.0);

        b.fill(2.0);
        assert!(b.as_slice().iter().all(|&x| x == 2.0));
        assert_eq!(b.as_slice().len(), 10);

        b.as_mut_slice()[7] = 4.0;
        assert_eq!(b.get(1, 2), 4.0);
    }

    #[test]
    fn test_buffer_for_axis() {
        let shape = BlockShape::new(3, 4, 5, 6);
        let b = LineBuffer::for_axis(&shape, Axis::X2);
        assert_eq!(b.nvar(), 3);
        assert_eq!(b.len(), 6);
    }
}
