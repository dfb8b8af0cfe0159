//! Strongly-typed index newtypes.
//!
//! These types prevent mixing up the two kinds of indices used for
//! grid-indexed fields (column vs vertical level).

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

            /// Increment index by one.
            #[inline]
            pub fn next(self) -> Self {
                Self(self.0 + 1)
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

        // Allow using as array index
        impl<T> std::ops::Index<$name> for [T] {
            type Output = T;
            #[inline]
            fn index(&self, idx: $name) -> &T {
                &self[idx.0]
            }
        }

        impl<T> std::ops::IndexMut<$name> for [T] {
            #[inline]
            fn index_mut(&mut self, idx: $name) -> &mut T {
                &mut self[idx.0]
            }
        }

        impl<T> std::ops::Index<$name> for Vec<T> {
            type Output = T;
            #[inline]
            fn index(&self, idx: $name) -> &T {
                &self[idx.0]
            }
        }

        impl<T> std::ops::IndexMut<$name> for Vec<T> {
            #[inline]
            fn index_mut(&mut self, idx: $name) -> &mut T {
                &mut self[idx.0]
            }
        }
    };
}

define_index!(
    /// Column index into a multi-column field store.
    ///
    /// Identifies one vertical atmospheric column (0-based).
    ///
    /// # Example
    ///
    /// ```
    /// use shoc_mix::types::ColumnIndex;
    ///
    /// let col = ColumnIndex::new(2);
    /// assert_eq!(col.get(), 2);
    /// ```
    ColumnIndex,
    "col"
);

define_index!(
    /// Vertical level index within a column.
    ///
    /// Level 0 is the topmost level; the index increases downward,
    /// following the height-grid ordering convention.
    LevelIndex,
    "lev"
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_roundtrip() {
        let col = ColumnIndex::new(7);
        assert_eq!(col.get(), 7);
        assert_eq!(usize::from(col), 7);
        assert_eq!(ColumnIndex::from(7usize), col);
    }

    #[test]
    fn test_index_next() {
        let lev = LevelIndex::ZERO;
        assert_eq!(lev.next().get(), 1);
    }

    #[test]
    fn test_index_display() {
        assert_eq!(format!("{}", ColumnIndex::new(3)), "col3");
        assert_eq!(format!("{}", LevelIndex::new(5)), "lev5");
    }

    #[test]
    fn test_slice_indexing() {
        let v = vec![10.0, 20.0, 30.0];
        assert_eq!(v[ColumnIndex::new(1)], 20.0);

        let mut w = vec![0.0; 3];
        w[LevelIndex::new(2)] = 1.5;
        assert_eq!(w[2], 1.5);
    }
}
