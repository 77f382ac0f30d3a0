//! Line-by-line reconstruction over a region of a block.
//!
//! Visits every line along one axis crossing an index region, reconstructs it
//! into scratch buffers and hands the face states to a consumer, typically the
//! flux computation of the surrounding solver. Scratch buffers are owned per
//! worker, so concurrent lines never share an output buffer.

use log::debug;

use crate::field::{CellField, Line, LineBuffer};
use crate::types::{Axis, IndexRange, IndexRegion};

use super::config::SweepConfig;
use super::error::ReconstructionError;
use super::methods::{
    DonorCell, PiecewiseLinear, PiecewiseParabolic, Reconstruction, Reconstructor,
};
use super::sweep::{check_line, fill_line};

/// Face states of one reconstructed line, as seen by a block consumer.
#[derive(Clone, Copy, Debug)]
pub struct LineStates<'a> {
    /// The reconstructed line
    pub line: Line,
    /// Swept cell positions
    pub range: IndexRange,
    /// Left states, valid at `range.lo+1..=range.hi+1`
    pub ql: &'a LineBuffer,
    /// Right states, valid at `range.lo..=range.hi`
    pub qr: &'a LineBuffer,
}

/// Reconstruct every line along `axis` in `region` and pass each to `consumer`.
///
/// `region.range(axis)` is the swept range and must already include the one
/// extra cell on each side needed for both states on the interior faces.
/// The region is validated once before any line is processed.
///
/// Returns the number of lines reconstructed.
///
/// # Example
///
/// ```
/// use std::sync::atomic::{AtomicUsize, Ordering};
///
/// use ppm_rs::field::CellField;
/// use ppm_rs::reconstruction::{SweepConfig, sweep_block};
/// use ppm_rs::types::{Axis, BlockShape, IndexRange, IndexRegion};
///
/// let q = CellField::new(BlockShape::new(1, 1, 4, 10));
/// let region = IndexRegion::new(IndexRange::single(0), IndexRange::new(0, 3), IndexRange::new(2, 7));
/// let seen = AtomicUsize::new(0);
///
/// let lines = sweep_block(&q, Axis::X1, &region, &SweepConfig::default(), |_| {
///     seen.fetch_add(1, Ordering::Relaxed);
/// })?;
/// assert_eq!(lines, 4);
/// assert_eq!(seen.load(Ordering::Relaxed), 4);
/// # Ok::<(), ppm_rs::reconstruction::ReconstructionError>(())
/// ```
pub fn sweep_block<F>(
    field: &CellField,
    axis: Axis,
    region: &IndexRegion,
    config: &SweepConfig,
    consumer: F,
) -> Result<usize, ReconstructionError>
where
    F: Fn(LineStates<'_>) + Sync,
{
    match config.method {
        Reconstruction::DonorCell => sweep_block_with(&DonorCell, field, axis, region, config, consumer),
        Reconstruction::PiecewiseLinear => {
            sweep_block_with(&PiecewiseLinear, field, axis, region, config, consumer)
        }
        Reconstruction::PiecewiseParabolic => {
            sweep_block_with(&PiecewiseParabolic, field, axis, region, config, consumer)
        }
    }
}

fn sweep_block_with<R, F>(
    method: &R,
    field: &CellField,
    axis: Axis,
    region: &IndexRegion,
    config: &SweepConfig,
    consumer: F,
) -> Result<usize, ReconstructionError>
where
    R: Reconstructor,
    F: Fn(LineStates<'_>) + Sync,
{
    let shape = field.shape();
    let range = region.range(axis);
    let (outer_axis, inner_axis) = axis.transverse();
    let (outer, inner) = (region.range(outer_axis), region.range(inner_axis));

    let mut ql = LineBuffer::for_axis(&shape, axis);
    let mut qr = LineBuffer::for_axis(&shape, axis);
    check_line(field, &Line::new(axis, outer.lo, inner.lo), range, &ql, &qr)?;
    check_line(field, &Line::new(axis, outer.hi, inner.hi), range, &ql, &qr)?;

    let n_lines = region.line_count(axis);
    debug!(
        "{} sweep along {} over {}: {} lines of {} cells",
        method.name(),
        axis,
        region,
        n_lines,
        range.len()
    );

    if config.parallel {
        #[cfg(feature = "parallel")]
        {
            sweep_lines_parallel(method, field, axis, region, &consumer);
            return Ok(n_lines);
        }
        #[cfg(not(feature = "parallel"))]
        debug!("parallel sweep requested but the `parallel` feature is disabled; running serially");
    }

    for line in Line::in_region(axis, region) {
        fill_line(method, field, &line, range, &mut ql, &mut qr);
        consumer(LineStates {
            line,
            range,
            ql: &ql,
            qr: &qr,
        });
    }

    Ok(n_lines)
}

#[cfg(feature = "parallel")]
fn sweep_lines_parallel<R, F>(
    method: &R,
    field: &CellField,
    axis: Axis,
    region: &IndexRegion,
    consumer: &F,
) where
    R: Reconstructor,
    F: Fn(LineStates<'_>) + Sync,
{
    use rayon::prelude::*;

    let shape = field.shape();
    let range = region.range(axis);
    let lines: Vec<Line> = Line::in_region(axis, region).collect();

    lines.par_iter().for_each_init(
        || {
            (
                LineBuffer::for_axis(&shape, axis),
                LineBuffer::for_axis(&shape, axis),
            )
        },
        |(ql, qr), line| {
            fill_line(method, field, line, range, ql, qr);
            consumer(LineStates {
                line: *line,
                range,
                ql,
                qr,
            });
        },
    );
}
