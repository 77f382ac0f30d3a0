//! Error types for reconstruction sweeps.

use thiserror::Error;

use crate::types::Axis;

/// Precondition violations detected before a sweep touches any cell.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ReconstructionError {
    /// The swept range leaves fewer ghost cells than the stencil reads.
    #[error(
        "Insufficient ghost cells along {axis}: range [{lo}, {hi}] needs {required} cells on each side within extent {extent}"
    )]
    InsufficientGhostCells {
        axis: Axis,
        lo: usize,
        hi: usize,
        extent: usize,
        required: usize,
    },

    /// A fixed transverse index lies outside the block.
    #[error("Line out of bounds: {axis} index {index} outside extent {extent}")]
    LineOutOfBounds {
        axis: Axis,
        index: usize,
        extent: usize,
    },

    /// An output buffer was built for a different number of variables.
    #[error("Variable count mismatch in {buffer}: field has {expected}, buffer has {actual}")]
    VariableCountMismatch {
        buffer: &'static str,
        expected: usize,
        actual: usize,
    },

    /// An output buffer cannot hold the face at the end of the range.
    #[error("Buffer {buffer} too short: length {len}, need at least {required}")]
    BufferTooShort {
        buffer: &'static str,
        len: usize,
        required: usize,
    },

    /// Field data length disagrees with its shape.
    #[error("Shape mismatch: expected {expected} values, got {actual}")]
    ShapeMismatch { expected: usize, actual: usize },

    /// Unrecognised reconstruction method name.
    #[error("Unknown reconstruction method: {0}")]
    UnknownMethod(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = ReconstructionError::InsufficientGhostCells {
            axis: Axis::X2,
            lo: 1,
            hi: 8,
            extent: 12,
            required: 2,
        };
        assert_eq!(
            err.to_string(),
            "Insufficient ghost cells along x2: range [1, 8] needs 2 cells on each side within extent 12"
        );

        let err = ReconstructionError::ShapeMismatch {
            expected: 8,
            actual: 7,
        };
        assert_eq!(err.to_string(), "Shape mismatch: expected 8 values, got 7");
    }
}
