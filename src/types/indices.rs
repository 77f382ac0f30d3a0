//! Strongly-typed index newtypes.
//!
//! These types prevent mixing up a variable index with a cell index
//! when addressing fields and face-state buffers.

use std::fmt;

/// Macro to generate index newtypes with common functionality.
macro_rules! define_index {
    (
        $(#[$meta:meta])*
        $name:ident, $display_prefix:literal
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[repr(transparent)]
        pub struct $name(usize);

        impl $name {
            /// Create a new index.
            #[inline]
            pub const fn new(index: usize) -> Self {
                Self(index)
            }

            /// Get the raw index value.
            #[inline]
            pub const fn get(self) -> usize {
                self.0
            }

            /// First index (0).
            pub const ZERO: Self = Self(0);

            /// Create an iterator over [0, n).
            pub fn iter(n: usize) -> impl ExactSizeIterator<Item = $name> {
                (0..n).map($name)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}{}", $display_prefix, self.0)
            }
        }

        impl From<usize> for $name {
            #[inline]
            fn from(index: usize) -> Self {
                Self(index)
            }
        }

        impl From<$name> for usize {
            #[inline]
            fn from(idx: $name) -> usize {
                idx.0
            }
        }
    };
}

define_index!(
    /// Index of a physical variable (density, momentum component, ...) in a field.
    ///
    /// # Example
    ///
    /// ```
    /// use ppm_rs::types::VariableIndex;
    ///
    /// let var = VariableIndex::new(2);
    /// assert_eq!(var.get(), 2);
    /// ```
    VariableIndex,
    "V"
);

define_index!(
    /// Cell-center position along one axis of a block, ghost cells included.
    ///
    /// # Example
    ///
    /// ```
    /// use ppm_rs::types::CellIndex;
    ///
    /// let cell = CellIndex::new(7);
    /// assert_eq!(cell.get(), 7);
    /// ```
    CellIndex,
    "C"
);

impl CellIndex {
    /// Offset the index by a signed stencil displacement.
    ///
    /// Returns `None` when the result would be negative.
    #[inline]
    pub fn offset(self, delta: isize) -> Option<Self> {
        self.0.checked_add_signed(delta).map(Self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variable_index() {
        let idx = VariableIndex::new(3);
        assert_eq!(idx.get(), 3);
        assert_eq!(usize::from(idx), 3);
        assert_eq!(VariableIndex::ZERO.get(), 0);
    }

    #[test]
    fn test_cell_offset() {
        let c = CellIndex::new(2);
        assert_eq!(c.offset(-2), Some(CellIndex::new(0)));
        assert_eq!(c.offset(2), Some(CellIndex::new(4)));
        assert_eq!(c.offset(-3), None);
    }

    #[test]
    fn test_iter() {
        let vars: Vec<_> = VariableIndex::iter(4).collect();
        assert_eq!(vars.len(), 4);
        assert_eq!(vars[3].get(), 3);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", VariableIndex::new(1)), "V1");
        assert_eq!(format!("{}", CellIndex::new(12)), "C12");
    }

    #[test]
    fn test_from_conversions() {
        let cell: CellIndex = 5.into();
        assert_eq!(cell.get(), 5);
        let back: usize = cell.into();
        assert_eq!(back, 5);
    }
}
