//! Grid-indexed field store for the mixing-length computation.
//!
//! [`MixLengthData`] owns every field one kernel invocation reads or writes:
//! per-column scalars (asymptotic length, overturning timescale) and
//! per-column-per-level fields (TKE, buoyancy frequency, height grid, and
//! the mixing-length output).
//!
//! # Memory Layout
//!
//! All arrays use contiguous `Vec<f64>` for cache-friendly access and
//! LLVM auto-vectorization of batch operations. Per-level fields carry a
//! [`Layout`] tag; the store is created in the canonical ordering and
//! [`MixLengthData::transpose`] is the only way to change it. Per-column
//! fields are identical under both orderings and are never rewritten.

use super::layout::{transpose_into, Layout, TransposeDirection};
use crate::types::{ColumnIndex, LevelIndex};

/// Field store for one mixing-length test case.
///
/// Created with fixed dimensions, populated once (fixture values or
/// [`randomize`](MixLengthData::randomize)), consumed read-only by the
/// kernel which writes only `shoc_mix`. Exclusively owned by one test case
/// for its entire lifetime; cloning before a kernel runs is how the
/// bit-exact harness keeps two implementations from sharing state.
#[derive(Clone)]
pub struct MixLengthData {
    /// Number of columns (≥ 1).
    shcol: usize,

    /// Number of vertical levels per column (≥ 1).
    nlev: usize,

    /// Addressing scheme currently in effect for per-level fields.
    layout: Layout,

    /// Asymptotic length scale [m], one value per column, > 0.
    pub l_inf: Vec<f64>,

    /// Overturning timescale [s], one value per column, > 0.
    pub tscale: Vec<f64>,

    /// Turbulent kinetic energy [m2/s2], per column per level, > 0.
    pub tke: Vec<f64>,

    /// Brunt-Väisälä frequency [s-1], per column per level.
    pub brunt: Vec<f64>,

    /// Heights on the thermodynamic grid [m], per column per level, > 0,
    /// strictly decreasing with increasing level index within a column.
    pub zt_grid: Vec<f64>,

    /// Output mixing length [m], per column per level.
    pub shoc_mix: Vec<f64>,
}

impl MixLengthData {
    /// Create a zero-filled store of the given dimensions in canonical layout.
    pub fn new(shcol: usize, nlev: usize) -> Self {
        debug_assert!(shcol >= 1 && nlev >= 1);

        Self {
            shcol,
            nlev,
            layout: Layout::Canonical,
            l_inf: vec![0.0; shcol],
            tscale: vec![0.0; shcol],
            tke: vec![0.0; shcol * nlev],
            brunt: vec![0.0; shcol * nlev],
            zt_grid: vec![0.0; shcol * nlev],
            shoc_mix: vec![0.0; shcol * nlev],
        }
    }

    /// Number of columns.
    #[inline]
    pub fn shcol(&self) -> usize {
        self.shcol
    }

    /// Number of vertical levels per column.
    #[inline]
    pub fn nlev(&self) -> usize {
        self.nlev
    }

    /// Total number of elements in each per-level field.
    #[inline]
    pub fn total(&self) -> usize {
        self.shcol * self.nlev
    }

    /// Addressing scheme currently in effect for per-level fields.
    #[inline]
    pub fn layout(&self) -> Layout {
        self.layout
    }

    /// Linear offset of `(column, level)` under the current layout.
    #[inline]
    pub fn offset(&self, column: ColumnIndex, level: LevelIndex) -> usize {
        debug_assert!(column.get() < self.shcol && level.get() < self.nlev);
        self.layout
            .offset(column.get(), level.get(), self.shcol, self.nlev)
    }

    /// Rewrite every per-level field into the other addressing scheme.
    ///
    /// Per-column fields (`l_inf`, `tscale`) are unaffected. Converting to
    /// the alternate ordering and back reproduces the store exactly.
    ///
    /// # Panics
    ///
    /// Panics in debug mode if the store is not in the direction's source
    /// layout (a caller bug, not a runtime-recoverable state).
    pub fn transpose(&mut self, direction: TransposeDirection) {
        debug_assert_eq!(self.layout, direction.source());

        let (shcol, nlev) = (self.shcol, self.nlev);
        let mut scratch = vec![0.0; shcol * nlev];
        for field in [
            &mut self.tke,
            &mut self.brunt,
            &mut self.zt_grid,
            &mut self.shoc_mix,
        ] {
            transpose_into(field, &mut scratch, shcol, nlev, direction);
            std::mem::swap(field, &mut scratch);
        }
        self.layout = direction.target();
    }
}

impl std::fmt::Debug for MixLengthData {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MixLengthData")
            .field("shcol", &self.shcol)
            .field("nlev", &self.nlev)
            .field("layout", &self.layout)
            .finish()
    }
}

impl std::fmt::Display for MixLengthData {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "MixLengthData({} columns x {} levels, {:?} layout)",
            self.shcol, self.nlev, self.layout
        )
    }
}
