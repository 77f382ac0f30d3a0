//! Point reconstruction methods and their dispatch.
//!
//! - [`Reconstructor`]: Trait for a point reconstruction from a five-point stencil
//! - [`DonorCell`], [`PiecewiseLinear`], [`PiecewiseParabolic`]: Concrete methods
//! - [`Reconstruction`]: Zero-cost dispatch enum, parseable from `dc`, `plm`, `ppm`

use std::fmt;
use std::str::FromStr;

use super::error::ReconstructionError;
use super::kernel::{FaceStates, ppm};
use super::stencil::Stencil;

/// Trait for reconstructing the two face states of a cell.
///
/// # Implementation Notes
///
/// - Implementations must be pure: the result depends only on the stencil
/// - `reconstruct` runs once per cell per variable per sweep and must not allocate
/// - Reconstructing `stencil.mirrored()` must swap `left` and `right` exactly
pub trait Reconstructor: Send + Sync {
    /// Reconstruct face states of the stencil's center cell.
    fn reconstruct(&self, stencil: &Stencil) -> FaceStates;

    /// Short name used in configuration and logging.
    fn name(&self) -> &'static str;

    /// Whether smooth extrema keep their high-order face values.
    fn preserves_smooth_extrema(&self) -> bool {
        false
    }
}

/// Minmod function for three arguments.
///
/// Returns 0 if arguments have different signs, otherwise the smallest magnitude.
#[inline]
fn minmod(a: f64, b: f64, c: f64) -> f64 {
    if a > 0.0 && b > 0.0 && c > 0.0 {
        a.min(b).min(c)
    } else if a < 0.0 && b < 0.0 && c < 0.0 {
        a.max(b).max(c)
    } else {
        0.0
    }
}

/// First-order donor cell: both faces take the cell average.
#[derive(Clone, Copy, Debug, Default)]
pub struct DonorCell;

impl Reconstructor for DonorCell {
    #[inline]
    fn reconstruct(&self, stencil: &Stencil) -> FaceStates {
        FaceStates::uniform(stencil.q_i)
    }

    fn name(&self) -> &'static str {
        "dc"
    }
}

/// Piecewise linear reconstruction with the monotonized-central slope.
///
/// The slope is `minmod((Δ⁻ + Δ⁺)/2, 2Δ⁻, 2Δ⁺)`; only the inner three
/// samples of the stencil are used.
#[derive(Clone, Copy, Debug, Default)]
pub struct PiecewiseLinear;

impl Reconstructor for PiecewiseLinear {
    #[inline]
    fn reconstruct(&self, stencil: &Stencil) -> FaceStates {
        let dq_minus = stencil.q_i - stencil.q_im1;
        let dq_plus = stencil.q_ip1 - stencil.q_i;
        let slope = minmod(0.5 * (dq_minus + dq_plus), 2.0 * dq_minus, 2.0 * dq_plus);
        FaceStates::new(stencil.q_i + 0.5 * slope, stencil.q_i - 0.5 * slope)
    }

    fn name(&self) -> &'static str {
        "plm"
    }
}

/// Piecewise parabolic reconstruction with Colella-Sekora limiting.
///
/// See [`ppm`](super::kernel::ppm).
#[derive(Clone, Copy, Debug, Default)]
pub struct PiecewiseParabolic;

impl Reconstructor for PiecewiseParabolic {
    #[inline]
    fn reconstruct(&self, stencil: &Stencil) -> FaceStates {
        ppm(
            stencil.q_im2,
            stencil.q_im1,
            stencil.q_i,
            stencil.q_ip1,
            stencil.q_ip2,
        )
    }

    fn name(&self) -> &'static str {
        "ppm"
    }

    fn preserves_smooth_extrema(&self) -> bool {
        true
    }
}

/// Enum wrapper for the built-in reconstruction methods.
///
/// Provides zero-cost dispatch when the method is chosen at runtime.
///
/// # Example
///
/// ```
/// use ppm_rs::reconstruction::{Reconstruction, Reconstructor, Stencil};
///
/// let method: Reconstruction = "plm".parse().unwrap();
/// let faces = method.reconstruct(&Stencil::new(0.0, 1.0, 2.0, 3.0, 4.0));
/// assert_eq!(faces.left, 2.5);
/// assert_eq!(faces.right, 1.5);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Reconstruction {
    /// First-order donor cell
    DonorCell,
    /// Second-order piecewise linear
    PiecewiseLinear,
    /// Piecewise parabolic with extremum-preserving limiter
    #[default]
    PiecewiseParabolic,
}

impl Reconstruction {
    /// All built-in methods.
    pub const ALL: [Reconstruction; 3] = [
        Reconstruction::DonorCell,
        Reconstruction::PiecewiseLinear,
        Reconstruction::PiecewiseParabolic,
    ];
}

impl Reconstructor for Reconstruction {
    #[inline]
    fn reconstruct(&self, stencil: &Stencil) -> FaceStates {
        match self {
            Reconstruction::DonorCell => DonorCell.reconstruct(stencil),
            Reconstruction::PiecewiseLinear => PiecewiseLinear.reconstruct(stencil),
            Reconstruction::PiecewiseParabolic => PiecewiseParabolic.reconstruct(stencil),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Reconstruction::DonorCell => DonorCell.name(),
            Reconstruction::PiecewiseLinear => PiecewiseLinear.name(),
            Reconstruction::PiecewiseParabolic => PiecewiseParabolic.name(),
        }
    }

    fn preserves_smooth_extrema(&self) -> bool {
        matches!(self, Reconstruction::PiecewiseParabolic)
    }
}

impl fmt::Display for Reconstruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Reconstruction {
    type Err = ReconstructionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dc" | "donor_cell" => Ok(Reconstruction::DonorCell),
            "plm" | "piecewise_linear" => Ok(Reconstruction::PiecewiseLinear),
            "ppm" | "piecewise_parabolic" => Ok(Reconstruction::PiecewiseParabolic),
            other => Err(ReconstructionError::UnknownMethod(other.to_string())),
        }
    }
}
