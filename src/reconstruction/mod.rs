//! Face-state reconstruction for finite-volume fluxes.
//!
//! # Submodules
//!
//! - [`kernel`]: Piecewise parabolic point kernel and the shared curvature limiter
//! - [`stencil`]: Five-point stencils and their sampling along a line
//! - [`methods`]: The [`Reconstructor`] trait and the built-in methods
//! - [`sweep`]: Directional sweeps along a single line (`x1`, `x2`, `x3`)
//! - [`block`]: Line-by-line sweeps over a region of a block
//!
//! # Index convention
//!
//! Sweeping cells `[lo, hi]` writes the left state of face p+1/2 to `ql[p+1]`
//! and the right state of face p-1/2 to `qr[p]`. Request `[a-1, b+1]` to get
//! both states on every face of cells `[a, b]`.

pub mod block;
pub mod config;
pub mod constants;
pub mod error;
pub mod kernel;
pub mod methods;
pub mod stencil;
pub mod sweep;

pub use block::{LineStates, sweep_block};
pub use config::SweepConfig;
pub use constants::NGHOST;
pub use error::ReconstructionError;
pub use kernel::{FaceStates, interface_estimates, limited_curvature, ppm, sign};
pub use methods::{DonorCell, PiecewiseLinear, PiecewiseParabolic, Reconstruction, Reconstructor};
pub use stencil::Stencil;
pub use sweep::{check_line, reconstruct_line, reconstruct_x1, reconstruct_x2, reconstruct_x3};

#[cfg(feature = "parallel")]
pub use sweep::reconstruct_line_parallel;
