//! Spatial sweep axes.

use std::fmt;

/// One of the three spatial axes of a structured block.
///
/// Field storage is indexed `(variable, k, j, i)`, so `X1` walks `i`,
/// `X2` walks `j` and `X3` walks `k`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// The fastest-varying index `i`
    X1,
    /// The middle index `j`
    X2,
    /// The slowest spatial index `k`
    X3,
}

impl Axis {
    /// All axes in sweep order.
    pub const ALL: [Axis; 3] = [Axis::X1, Axis::X2, Axis::X3];

    /// The two transverse axes, slowest first.
    ///
    /// These are the axes whose indices stay fixed along a line.
    pub fn transverse(self) -> (Axis, Axis) {
        match self {
            Axis::X1 => (Axis::X3, Axis::X2),
            Axis::X2 => (Axis::X3, Axis::X1),
            Axis::X3 => (Axis::X2, Axis::X1),
        }
    }

    /// Lower-case name (`x1`, `x2`, `x3`).
    pub fn name(self) -> &'static str {
        match self {
            Axis::X1 => "x1",
            Axis::X2 => "x2",
            Axis::X3 => "x3",
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
