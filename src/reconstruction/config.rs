//! Sweep configuration.

use super::methods::Reconstruction;

/// Configuration for block sweeps.
///
/// # Example
///
/// ```
/// use ppm_rs::reconstruction::{Reconstruction, SweepConfig};
///
/// let config = SweepConfig::new()
///     .with_method(Reconstruction::PiecewiseLinear)
///     .with_parallel(false);
/// assert_eq!(config.method, Reconstruction::PiecewiseLinear);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SweepConfig {
    /// Point reconstruction applied to every cell
    pub method: Reconstruction,
    /// Distribute lines across the rayon pool.
    ///
    /// Ignored (with a debug log) when the crate is built without the
    /// `parallel` feature.
    pub parallel: bool,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            method: Reconstruction::PiecewiseParabolic,
            parallel: cfg!(feature = "parallel"),
        }
    }
}

impl SweepConfig {
    /// Create the default configuration (PPM, parallel when available).
    pub fn new() -> Self {
        Self::default()
    }

    /// Serial configuration with the given method.
    pub fn serial(method: Reconstruction) -> Self {
        Self {
            method,
            parallel: false,
        }
    }

    /// Set the reconstruction method.
    pub fn with_method(mut self, method: Reconstruction) -> Self {
        self.method = method;
        self
    }

    /// Enable or disable parallel line processing.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}
