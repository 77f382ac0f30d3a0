//! Numeric parameters of the reconstruction.

/// Colella-Sekora second-derivative sensitivity (> 1, independent of h).
pub const C2: f64 = 1.25;

/// Relative magnitude below which a curvature is treated as roundoff.
pub const ROUNDOFF_TOLERANCE: f64 = 1.0e-12;

/// Weight of each neighbouring difference in the centered slope.
pub const SLOPE_WEIGHT: f64 = 0.5;

/// Weight of each bounding cell average in the interface estimate.
pub const AVERAGE_WEIGHT: f64 = 0.5;

/// Weight of the upwind-side slope in the interface estimate.
pub const SLOPE_CORRECTION: f64 = 1.0 / 6.0;

/// Weight of the downwind-side slope in the interface estimate.
pub const SLOPE_CORRECTION_NEG: f64 = -1.0 / 6.0;

/// Ghost cells required on each side of a swept range.
pub const NGHOST: usize = 2;
