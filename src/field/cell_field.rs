//! Cell-averaged field storage for structured blocks.

use crate::reconstruction::ReconstructionError;
use crate::types::{Axis, BlockShape, VariableIndex};

/// Cell-averaged samples of one or more variables over a structured block.
///
/// Stores values in row-major layout:
/// `data[((n * nk + k) * nj + j) * ni + i]` for variable n at cell (k, j, i).
///
/// The block includes its ghost (halo) cells; reconstruction along an axis
/// needs at least two valid ghost cells beyond the swept range.
#[derive(Clone, Debug)]
pub struct CellField {
    data: Vec<f64>,
    shape: BlockShape,
}

impl CellField {
    /// Create a new field initialized to zero.
    pub fn new(shape: BlockShape) -> Self {
        Self {
            data: vec![0.0; shape.len()],
            shape,
        }
    }

    /// Wrap existing data laid out as `(variable, k, j, i)`.
    pub fn from_vec(shape: BlockShape, data: Vec<f64>) -> Result<Self, ReconstructionError> {
        if data.len() != shape.len() {
            return Err(ReconstructionError::ShapeMismatch {
                expected: shape.len(),
                actual: data.len(),
            });
        }
        Ok(Self { data, shape })
    }

    /// Create a field by evaluating `f(n, k, j, i)` at every cell.
    pub fn from_fn(shape: BlockShape, mut f: impl FnMut(usize, usize, usize, usize) -> f64) -> Self {
        let mut data = Vec::with_capacity(shape.len());
        for n in 0..shape.nvar() {
            for k in 0..shape.extent(Axis::X3) {
                for j in 0..shape.extent(Axis::X2) {
                    for i in 0..shape.extent(Axis::X1) {
                        data.push(f(n, k, j, i));
                    }
                }
            }
        }
        Self { data, shape }
    }

    /// Shape of the field.
    #[inline]
    pub fn shape(&self) -> BlockShape {
        self.shape
    }

    /// Number of variables.
    #[inline]
    pub fn nvar(&self) -> usize {
        self.shape.nvar()
    }

    /// Raw storage.
    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Mutable raw storage.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.data
    }

    /// Get the value of variable n at cell (k, j, i).
    #[inline]
    pub fn get(&self, n: usize, k: usize, j: usize, i: usize) -> f64 {
        self.data[self.shape.offset(n, k, j, i)]
    }

    /// Set the value of variable n at cell (k, j, i).
    #[inline]
    pub fn set(&mut self, n: usize, k: usize, j: usize, i: usize, value: f64) {
        let idx = self.shape.offset(n, k, j, i);
        self.data[idx] = value;
    }

    /// All cells of one variable.
    pub fn variable(&self, var: VariableIndex) -> &[f64] {
        let len = self.shape.cells_per_variable();
        let start = var.get() * len;
        &self.data[start..start + len]
    }

    /// Maximum absolute value across all variables.
    pub fn max_abs(&self) -> f64 {
        self.data.iter().map(|&x| x.abs()).fold(0.0, f64::max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_set() {
        let mut q = CellField::new(BlockShape::new(2, 2, 3, 4));
        q.set(1, 1, 2, 3, 7.5);
        assert_eq!(q.get(1, 1, 2, 3), 7.5);
        assert_eq!(q.get(0, 1, 2, 3), 0.0);
        assert_eq!(q.max_abs(), 7.5);
    }

    #[test]
    fn test_from_fn_layout() {
        let shape = BlockShape::new(2, 2, 2, 3);
        let q = CellField::from_fn(shape, |n, k, j, i| (1000 * n + 100 * k + 10 * j + i) as f64);
        assert_eq!(q.get(1, 1, 0, 2), 1102.0);
        assert_eq!(q.as_slice()[shape.offset(1, 1, 0, 2)], 1102.0);
    }

    #[test]
    fn test_variable_slice() {
        let shape = BlockShape::new(3, 1, 1, 4);
        let q = CellField::from_fn(shape, |n, _, _, i| (n * 10 + i) as f64);
        assert_eq!(q.variable(VariableIndex::new(2)), &[20.0, 21.0, 22.0, 23.0]);
    }

    #[test]
    fn test_from_vec_shape_mismatch() {
        let shape = BlockShape::new(1, 1, 1, 8);
        let err = CellField::from_vec(shape, vec![0.0; 7]).unwrap_err();
        assert_eq!(
            err,
            ReconstructionError::ShapeMismatch {
                expected: 8,
                actual: 7,
            }
        );

        assert!(CellField::from_vec(shape, vec![1.0; 8]).is_ok());
    }
}
