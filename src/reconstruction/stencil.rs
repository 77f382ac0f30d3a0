//! Five-point stencils sampled along a sweep axis.

use crate::field::{CellField, Line};
use crate::types::{CellIndex, VariableIndex};

use super::constants::NGHOST;

/// Five consecutive cell averages centered on cell i.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stencil {
    /// Average at i-2
    pub q_im2: f64,
    /// Average at i-1
    pub q_im1: f64,
    /// Average at i
    pub q_i: f64,
    /// Average at i+1
    pub q_ip1: f64,
    /// Average at i+2
    pub q_ip2: f64,
}

impl Stencil {
    /// Create a stencil from its five samples, lowest index first.
    #[inline]
    pub fn new(q_im2: f64, q_im1: f64, q_i: f64, q_ip1: f64, q_ip2: f64) -> Self {
        Self {
            q_im2,
            q_im1,
            q_i,
            q_ip1,
            q_ip2,
        }
    }

    /// Stencil with every sample equal to `c`.
    pub fn constant(c: f64) -> Self {
        Self::new(c, c, c, c, c)
    }

    /// Samples as an array, lowest index first.
    #[inline]
    pub fn to_array(&self) -> [f64; 5] {
        [self.q_im2, self.q_im1, self.q_i, self.q_ip1, self.q_ip2]
    }

    /// The same samples in reverse order.
    pub fn mirrored(&self) -> Self {
        Self::new(self.q_ip2, self.q_ip1, self.q_i, self.q_im1, self.q_im2)
    }

    /// Largest absolute sample.
    pub fn max_abs(&self) -> f64 {
        self.to_array().iter().fold(0.0, |m, &q| m.max(q.abs()))
    }

    /// Gather from flat storage around `center` with spacing `stride`.
    ///
    /// # Panics
    ///
    /// Panics if any of the five samples falls outside `data`.
    #[inline]
    pub fn gather(data: &[f64], center: usize, stride: usize) -> Self {
        Self::new(
            data[center - 2 * stride],
            data[center - stride],
            data[center],
            data[center + stride],
            data[center + 2 * stride],
        )
    }

    /// Sample variable `var` of `field` around `center` on `line`.
    ///
    /// Returns `None` if the stencil would leave the block or the line
    /// lies outside it.
    pub fn sample(
        field: &CellField,
        var: VariableIndex,
        line: &Line,
        center: CellIndex,
    ) -> Option<Self> {
        let shape = field.shape();
        let axis = line.axis();
        let (outer, inner) = line.transverse();
        let (outer_axis, inner_axis) = axis.transverse();
        if var.get() >= shape.nvar()
            || outer >= shape.extent(outer_axis)
            || inner >= shape.extent(inner_axis)
        {
            return None;
        }

        let first = center.offset(-(NGHOST as isize))?;
        let last = center.offset(NGHOST as isize)?;
        if last.get() >= shape.extent(axis) {
            return None;
        }

        let stride = shape.stride(axis);
        let base = line.base_offset(&shape, var.get());
        let data = &field.as_slice()[base + first.get() * stride..];
        Some(Self::gather(data, 2 * stride, stride))
    }
}

impl From<[f64; 5]> for Stencil {
    fn from(q: [f64; 5]) -> Self {
        Self::new(q[0], q[1], q[2], q[3], q[4])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::BlockShape;

    fn indexed_field() -> CellField {
        CellField::from_fn(BlockShape::new(2, 5, 6, 7), |n, k, j, i| {
            (1000 * n + 100 * k + 10 * j + i) as f64
        })
    }

    #[test]
    fn test_gather() {
        let data: Vec<f64> = (0..20).map(|x| x as f64).collect();
        let s = Stencil::gather(&data, 10, 3);
        assert_eq!(s.to_array(), [4.0, 7.0, 10.0, 13.0, 16.0]);
    }

    #[test]
    fn test_mirrored() {
        let s = Stencil::from([1.0, 2.0, 3.0, 4.0, 5.0]);
        assert_eq!(s.mirrored().to_array(), [5.0, 4.0, 3.0, 2.0, 1.0]);
        assert_eq!(s.mirrored().mirrored(), s);
        assert_eq!(Stencil::new(-7.0, 1.0, 0.0, 2.0, 3.0).max_abs(), 7.0);
    }

    #[test]
    fn test_sample_each_axis() {
        let q = indexed_field();
        let v = VariableIndex::new(1);

        let s = Stencil::sample(&q, v, &Line::x1(2, 3), CellIndex::new(3)).unwrap();
        assert_eq!(s.to_array(), [1231.0, 1232.0, 1233.0, 1234.0, 1235.0]);

        let s = Stencil::sample(&q, v, &Line::x2(2, 4), CellIndex::new(2)).unwrap();
        assert_eq!(s.to_array(), [1204.0, 1214.0, 1224.0, 1234.0, 1244.0]);

        let s = Stencil::sample(&q, v, &Line::x3(1, 4), CellIndex::new(2)).unwrap();
        assert_eq!(s.to_array(), [1014.0, 1114.0, 1214.0, 1314.0, 1414.0]);
    }

    #[test]
    fn test_sample_out_of_block() {
        let q = indexed_field();
        let v = VariableIndex::ZERO;
        assert!(Stencil::sample(&q, v, &Line::x1(0, 0), CellIndex::new(1)).is_none());
        assert!(Stencil::sample(&q, v, &Line::x1(0, 0), CellIndex::new(5)).is_none());
        assert!(Stencil::sample(&q, v, &Line::x1(0, 0), CellIndex::new(4)).is_some());
        assert!(Stencil::sample(&q, v, &Line::x1(5, 0), CellIndex::new(3)).is_none());
        assert!(Stencil::sample(&q, VariableIndex::new(2), &Line::x1(0, 0), CellIndex::new(3)).is_none());
    }
}
