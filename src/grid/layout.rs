//! Memory layouts and transposition for per-level fields.
//!
//! A per-column-per-level field is stored as one contiguous `Vec<f64>` of
//! length `shcol * nlev`, under one of two total orderings:
//!
//! ```text
//! Canonical:  offset = level + column * nlev    (column-contiguous)
//! Alternate:  offset = column + level * shcol   (level-contiguous)
//! ```
//!
//! The canonical ordering keeps each column contiguous, which is what the
//! reference kernel iterates over. The alternate ordering keeps each level
//! contiguous so that the batch kernel's inner loop over columns
//! auto-vectorizes.
//!
//! Transposition between the orderings is a lossless bijection: converting
//! to the alternate ordering and back reproduces the original array exactly,
//! element for element.

/// Linear addressing scheme for per-level fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Layout {
    /// `offset = level + column * nlev`; each column is contiguous.
    Canonical,
    /// `offset = column + level * shcol`; each level is contiguous.
    Alternate,
}

impl Layout {
    /// Linear offset of `(column, level)` under this layout.
    #[inline]
    pub const fn offset(self, column: usize, level: usize, shcol: usize, nlev: usize) -> usize {
        match self {
            Layout::Canonical => level + column * nlev,
            Layout::Alternate => column + level * shcol,
        }
    }

    /// The other layout.
    #[inline]
    pub const fn flipped(self) -> Layout {
        match self {
            Layout::Canonical => Layout::Alternate,
            Layout::Alternate => Layout::Canonical,
        }
    }
}

/// Direction of a layout conversion.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransposeDirection {
    /// Canonical ordering to alternate ordering.
    ToAlternate,
    /// Alternate ordering back to canonical ordering.
    ToCanonical,
}

impl TransposeDirection {
    /// Layout the source array must be in.
    #[inline]
    pub const fn source(self) -> Layout {
        match self {
            TransposeDirection::ToAlternate => Layout::Canonical,
            TransposeDirection::ToCanonical => Layout::Alternate,
        }
    }

    /// Layout the converted array ends up in.
    #[inline]
    pub const fn target(self) -> Layout {
        self.source().flipped()
    }
}

/// Rewrite one per-level field from the source ordering into `dst`.
///
/// Writes directly to a pre-allocated output buffer to avoid allocation
/// in the transpose loop over fields.
///
/// # Panics
///
/// Panics in debug mode if the buffer lengths do not match `shcol * nlev`.
#[inline]
pub fn transpose_into(
    src: &[f64],
    dst: &mut [f64],
    shcol: usize,
    nlev: usize,
    direction: TransposeDirection,
) {
    debug_assert_eq!(src.len(), shcol * nlev);
    debug_assert_eq!(dst.len(), shcol * nlev);

    let from = direction.source();
    let to = direction.target();
    for s in 0..shcol {
        for k in 0..nlev {
            dst[to.offset(s, k, shcol, nlev)] = src[from.offset(s, k, shcol, nlev)];
        }
    }
}

/// Rewrite one per-level field into the target ordering (allocating version).
pub fn transposed(src: &[f64], shcol: usize, nlev: usize, direction: TransposeDirection) -> Vec<f64> {
    let mut dst = vec![0.0; src.len()];
    transpose_into(src, &mut dst, shcol, nlev, direction);
    dst
}
