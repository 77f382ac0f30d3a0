//! # ppm-rs
//!
//! High-order face-state reconstruction for finite-volume solvers on
//! structured blocks.
//!
//! This crate provides the reconstruction stage of a directionally split
//! flux computation:
//! - Piecewise parabolic point kernel with Colella-Sekora extremum-preserving limiting
//! - Donor-cell and piecewise-linear alternatives behind a common trait
//! - Five-point stencil sampling along any axis of a `(variable, k, j, i)` field
//! - Directional line sweeps (x1, x2, x3) writing left/right face-state buffers
//! - Block sweeps that visit every line of a region, optionally in parallel
//!
//! Riemann solvers, ghost-cell exchange and time stepping are left to the
//! surrounding solver.
//!
//! # Example
//!
//! ```
//! use ppm_rs::{BlockShape, CellField, IndexRange, LineBuffer, reconstruct_x1};
//!
//! // Density on a 16-cell line: 3 ghosts + 10 interior + 3 ghosts
//! let shape = BlockShape::new(1, 1, 1, 16);
//! let q = CellField::from_fn(shape, |_, _, _, i| if i < 8 { 1.0 } else { 0.125 });
//!
//! // Both states on the faces of cells [3, 12]
//! let mut ql = LineBuffer::new(1, 17);
//! let mut qr = LineBuffer::new(1, 17);
//! reconstruct_x1(&q, 0, 0, IndexRange::new(2, 13), &mut ql, &mut qr)?;
//!
//! // Monotone across the jump
//! for p in 3..=13 {
//!     assert!(ql.get(0, p) <= 1.0 && ql.get(0, p) >= 0.125);
//!     assert!(qr.get(0, p) <= 1.0 && qr.get(0, p) >= 0.125);
//! }
//! # Ok::<(), ppm_rs::ReconstructionError>(())
//! ```

pub mod field;
pub mod reconstruction;
pub mod types;

// Re-export main types for convenience
pub use field::{CellField, Line, LineBuffer};
pub use reconstruction::{
    DonorCell, FaceStates, LineStates, PiecewiseLinear, PiecewiseParabolic, Reconstruction,
    ReconstructionError, Reconstructor, Stencil, SweepConfig, check_line, ppm, reconstruct_line,
    reconstruct_x1, reconstruct_x2, reconstruct_x3, sweep_block,
};
pub use types::{Axis, BlockShape, CellIndex, IndexRange, IndexRegion, VariableIndex};

#[cfg(feature = "parallel")]
pub use reconstruction::reconstruct_line_parallel;
