//! Strongly-typed domain types for safer APIs.
//!
//! This module provides newtypes and structured types to make the
//! reconstruction APIs self-documenting and prevent parameter mix-ups.
//!
//! # Example
//!
//! ```
//! use ppm_rs::types::{Axis, BlockShape, IndexRange};
//!
//! // One variable on a 1×1×12 block with three ghost cells per side
//! let shape = BlockShape::new(1, 1, 1, 12);
//! let interior = IndexRange::new(3, 8);
//!
//! // Both face states on the interior need the sweep range expanded by one
//! let sweep = interior.expand(1);
//! assert!(sweep.lo >= 2 && sweep.hi + 2 < shape.extent(Axis::X1));
//! ```

mod axis;
mod indices;
mod range;
mod shape;

pub use axis::Axis;
pub use indices::{CellIndex, VariableIndex};
pub use range::{IndexRange, IndexRegion};
pub use shape::BlockShape;
