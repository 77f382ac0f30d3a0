//! Directional sweeps of a point reconstruction along one line of cells.
//!
//! For every variable n and every position p in `[lo, hi]` the sweep reads the
//! stencil `p-2..=p+2` along the line and writes
//!
//! - `ql[n][p+1]`: left state at face p+1/2
//! - `qr[n][p]`: right state at face p-1/2
//!
//! A caller needing both states on the faces of cells `[a, b]` must sweep
//! `[a-1, b+1]`. The three axes share one routine: a line is reduced to a base
//! offset and a stride into the field storage, so each axis performs the same
//! floating-point operations on the same samples.

use log::trace;

use crate::field::{CellField, Line, LineBuffer};
use crate::types::IndexRange;

use super::constants::NGHOST;
use super::error::ReconstructionError;
use super::methods::{PiecewiseParabolic, Reconstructor};
use super::stencil::Stencil;

/// Validate a line sweep before any cell is touched.
///
/// # Errors
/// - [`ReconstructionError::LineOutOfBounds`] if a transverse index is outside the block
/// - [`ReconstructionError::InsufficientGhostCells`] if the stencil would leave the block
/// - [`ReconstructionError::VariableCountMismatch`] if a buffer has the wrong variable count
/// - [`ReconstructionError::BufferTooShort`] if `ql` cannot hold `hi+1` or `qr` cannot hold `hi`
pub fn check_line(
    field: &CellField,
    line: &Line,
    range: IndexRange,
    ql: &LineBuffer,
    qr: &LineBuffer,
) -> Result<(), ReconstructionError> {
    let shape = field.shape();
    let axis = line.axis();

    let (outer, inner) = line.transverse();
    let (outer_axis, inner_axis) = axis.transverse();
    for (t_axis, index) in [(outer_axis, outer), (inner_axis, inner)] {
        let extent = shape.extent(t_axis);
        if index >= extent {
            return Err(ReconstructionError::LineOutOfBounds {
                axis: t_axis,
                index,
                extent,
            });
        }
    }

    let extent = shape.extent(axis);
    let last_read = range.hi.checked_add(NGHOST);
    if range.lo < NGHOST || last_read.is_none_or(|last| last >= extent) {
        return Err(ReconstructionError::InsufficientGhostCells {
            axis,
            lo: range.lo,
            hi: range.hi,
            extent,
            required: NGHOST,
        });
    }

    // hi + NGHOST < extent, so these cannot overflow
    for (buffer, buf, required) in [("ql", ql, range.hi + 2), ("qr", qr, range.hi + 1)] {
        if buf.nvar() != shape.nvar() {
            return Err(ReconstructionError::VariableCountMismatch {
                buffer,
                expected: shape.nvar(),
                actual: buf.nvar(),
            });
        }
        if buf.len() < required {
            return Err(ReconstructionError::BufferTooShort {
                buffer,
                len: buf.len(),
                required,
            });
        }
    }

    Ok(())
}

/// Sweep one variable: `data[base + p * stride]` is the sample at position p.
#[inline]
fn sweep_variable<R: Reconstructor + ?Sized>(
    method: &R,
    data: &[f64],
    base: usize,
    stride: usize,
    range: IndexRange,
    ql: &mut [f64],
    qr: &mut [f64],
) {
    for p in range.iter() {
        let stencil = Stencil::gather(data, base + p * stride, stride);
        let faces = method.reconstruct(&stencil);
        ql[p + 1] = faces.left;
        qr[p] = faces.right;
    }
}

/// Sweep every variable of an already validated line.
pub(crate) fn fill_line<R: Reconstructor + ?Sized>(
    method: &R,
    field: &CellField,
    line: &Line,
    range: IndexRange,
    ql: &mut LineBuffer,
    qr: &mut LineBuffer,
) {
    let shape = field.shape();
    let stride = shape.stride(line.axis());
    let data = field.as_slice();
    let (ql_len, qr_len) = (ql.len(), qr.len());

    for (n, (ql_n, qr_n)) in ql
        .as_mut_slice()
        .chunks_mut(ql_len)
        .zip(qr.as_mut_slice().chunks_mut(qr_len))
        .enumerate()
    {
        let base = line.base_offset(&shape, n);
        sweep_variable(method, data, base, stride, range, ql_n, qr_n);
    }
}

/// Reconstruct face states along one line with any point method.
///
/// # Arguments
/// * `method` - Point reconstruction applied to every cell
/// * `field` - Cell averages, read only
/// * `line` - Sweep axis and fixed transverse indices
/// * `range` - Cell positions `[lo, hi]` to reconstruct
/// * `ql` - Left states, written at `lo+1..=hi+1`
/// * `qr` - Right states, written at `lo..=hi`
///
/// # Example
///
/// ```
/// use ppm_rs::field::{CellField, Line, LineBuffer};
/// use ppm_rs::reconstruction::{PiecewiseParabolic, reconstruct_line};
/// use ppm_rs::types::{BlockShape, IndexRange};
///
/// let shape = BlockShape::new(1, 1, 1, 8);
/// let q = CellField::from_fn(shape, |_, _, _, i| i as f64);
/// let mut ql = LineBuffer::new(1, 9);
/// let mut qr = LineBuffer::new(1, 9);
///
/// reconstruct_line(&PiecewiseParabolic, &q, &Line::x1(0, 0), IndexRange::new(2, 5), &mut ql, &mut qr)?;
/// assert_eq!(ql.get(0, 4), 3.5);
/// assert_eq!(qr.get(0, 4), 3.5);
/// # Ok::<(), ppm_rs::reconstruction::ReconstructionError>(())
/// ```
pub fn reconstruct_line<R: Reconstructor + ?Sized>(
    method: &R,
    field: &CellField,
    line: &Line,
    range: IndexRange,
    ql: &mut LineBuffer,
    qr: &mut LineBuffer,
) -> Result<(), ReconstructionError> {
    check_line(field, line, range, ql, qr)?;
    trace!("{} sweep of {} over {}", method.name(), line, range);
    fill_line(method, field, line, range, ql, qr);
    Ok(())
}

/// Reconstruct face states along one line, one rayon task per variable.
///
/// Produces output identical to [`reconstruct_line`].
#[cfg(feature = "parallel")]
pub fn reconstruct_line_parallel<R: Reconstructor + ?Sized>(
    method: &R,
    field: &CellField,
    line: &Line,
    range: IndexRange,
    ql: &mut LineBuffer,
    qr: &mut LineBuffer,
) -> Result<(), ReconstructionError> {
    use rayon::prelude::*;

    check_line(field, line, range, ql, qr)?;
    trace!("parallel {} sweep of {} over {}", method.name(), line, range);

    let shape = field.shape();
    let stride = shape.stride(line.axis());
    let data = field.as_slice();
    let (ql_len, qr_len) = (ql.len(), qr.len());

    ql.as_mut_slice()
        .par_chunks_mut(ql_len)
        .zip(qr.as_mut_slice().par_chunks_mut(qr_len))
        .enumerate()
        .for_each(|(n, (ql_n, qr_n))| {
            let base = line.base_offset(&shape, n);
            sweep_variable(method, data, base, stride, range, ql_n, qr_n);
        });

    Ok(())
}

/// PPM reconstruction along x1 at fixed `(k, j)`.
///
/// Sweep `[is-1, ie+1]` to obtain both states on every face of `[is, ie]`.
pub fn reconstruct_x1(
    field: &CellField,
    k: usize,
    j: usize,
    range: IndexRange,
    ql: &mut LineBuffer,
    qr: &mut LineBuffer,
) -> Result<(), ReconstructionError> {
    reconstruct_line(&PiecewiseParabolic, field, &Line::x1(k, j), range, ql, qr)
}

/// PPM reconstruction along x2 at fixed `(k, i)`.
///
/// Sweep `[js-1, je+1]` to obtain both states on every face of `[js, je]`.
pub fn reconstruct_x2(
    field: &CellField,
    k: usize,
    i: usize,
    range: IndexRange,
    ql: &mut LineBuffer,
    qr: &mut LineBuffer,
) -> Result<(), ReconstructionError> {
    reconstruct_line(&PiecewiseParabolic, field, &Line::x2(k, i), range, ql, qr)
}

/// PPM reconstruction along x3 at fixed `(j, i)`.
///
/// Sweep `[ks-1, ke+1]` to obtain both states on every face of `[ks, ke]`.
pub fn reconstruct_x3(
    field: &CellField,
    j: usize,
    i: usize,
    range: IndexRange,
    ql: &mut LineBuffer,
    qr: &mut LineBuffer,
) -> Result<(), ReconstructionError> {
    reconstruct_line(&PiecewiseParabolic, field, &Line::x3(j, i), range, ql, qr)
}
