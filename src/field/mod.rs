//! Field and face-state containers.
//!
//! - [`CellField`]: read-only input, cell averages indexed `(variable, k, j, i)`
//! - [`Line`]: one line of cells along a sweep axis
//! - [`LineBuffer`]: per-line output, face states indexed `(variable, i)`

mod cell_field;
mod line;

pub use cell_field::CellField;
pub use line::{Line, LineBuffer};
