//! Physically-motivated property checks for a single kernel variant.
//!
//! A deliberately monotone fixture (TKE strictly increasing column by
//! column, buoyancy frequency and per-column scales constant, heights
//! strictly decreasing with level index) makes the kernel's qualitative
//! behavior observable: the mixing length must follow the TKE increase
//! across columns and the height increase within a column.
//!
//! Every check returns the first violating coordinate; strict inequalities
//! are used throughout, matching the formula, which admits no ties for
//! distinct inputs along these axes.

use crate::grid::{Layout, MixLengthData};
use crate::physics::compute_shoc_mix_length;
use crate::types::{ColumnIndex, LevelIndex};

use super::error::VerifyError;

/// Configuration of one property test case.
///
/// Fixture constants are local to the case and passed explicitly, so
/// independent cases can run in parallel without shared state.
#[derive(Clone, Debug)]
pub struct PropertyCase {
    /// Number of columns; the cross-column checks need at least 2.
    pub shcol: usize,
    /// Heights on the thermodynamic grid [m], shared by every column,
    /// strictly decreasing (top of the column first).
    pub zt_grid: Vec<f64>,
    /// Base TKE [m2/s2]; column `s` gets `(s + 1) * tke_cons`.
    pub tke_cons: f64,
    /// Brunt-Väisälä frequency [s-1], constant everywhere.
    pub brunt_cons: f64,
    /// Asymptotic length scale [m], constant across columns.
    pub l_inf: f64,
    /// Overturning timescale [s], constant across columns.
    pub tscale: f64,
}

impl Default for PropertyCase {
    fn default() -> Self {
        Self {
            shcol: 3,
            zt_grid: vec![5000.0, 3000.0, 2000.0, 1000.0, 500.0],
            tke_cons: 0.1,
            brunt_cons: 0.001,
            l_inf: 100.0,
            tscale: 300.0,
        }
    }
}

impl PropertyCase {
    /// Build the monotone fixture this case describes.
    pub fn fixture(&self) -> MixLengthData {
        let nlev = self.zt_grid.len();
        let mut d = MixLengthData::new(self.shcol, nlev);

        for s in 0..self.shcol {
            d.l_inf[s] = self.l_inf;
            d.tscale[s] = self.tscale;
            for k in 0..nlev {
                let offset = d.offset(ColumnIndex::new(s), LevelIndex::new(k));
                // Subsequent columns carry more TKE
                d.tke[offset] = (1.0 + s as f64) * self.tke_cons;
                d.brunt[offset] = self.brunt_cons;
                d.zt_grid[offset] = self.zt_grid[k];
            }
        }
        d
    }

    /// Build the fixture, validate it, run the reference kernel, and check
    /// every output property. Returns the first violation found.
    pub fn run(&self) -> Result<(), VerifyError> {
        if self.shcol < 2 {
            return Err(VerifyError::TooFewColumns { shcol: self.shcol });
        }

        let mut d = self.fixture();
        check_inputs(&d)?;

        compute_shoc_mix_length(
            d.shcol(),
            d.nlev(),
            &d.tke,
            &d.brunt,
            &d.tscale,
            &d.zt_grid,
            &d.l_inf,
            &mut d.shoc_mix,
        );

        check_mix_positive(&d)?;
        check_mix_column_ordering(&d)?;
        check_mix_height_ordering(&d)?;
        Ok(())
    }
}

/// Validate the input invariants of a monotone fixture.
///
/// Positivity of `l_inf`, `tscale`, `tke`, `zt_grid`; TKE strictly
/// increasing column by column at every level; heights strictly decreasing
/// with increasing level index within every column.
pub fn check_inputs(d: &MixLengthData) -> Result<(), VerifyError> {
    debug_assert_eq!(d.layout(), Layout::Canonical);

    for s in 0..d.shcol() {
        let col = ColumnIndex::new(s);
        if d.l_inf[col] <= 0.0 {
            return Err(VerifyError::NonPositiveColumn {
                field: "l_inf",
                column: s,
                value: d.l_inf[col],
            });
        }
        if d.tscale[col] <= 0.0 {
            return Err(VerifyError::NonPositiveColumn {
                field: "tscale",
                column: s,
                value: d.tscale[col],
            });
        }

        for k in 0..d.nlev() {
            let offset = d.offset(col, LevelIndex::new(k));
            if d.tke[offset] <= 0.0 {
                return Err(VerifyError::NonPositive {
                    field: "tke",
                    column: s,
                    level: k,
                    value: d.tke[offset],
                });
            }
            if d.zt_grid[offset] <= 0.0 {
                return Err(VerifyError::NonPositive {
                    field: "zt_grid",
                    column: s,
                    level: k,
                    value: d.zt_grid[offset],
                });
            }
        }
    }

    check_column_ordering(d, &d.tke, "tke")?;
    check_height_ordering(d, &d.zt_grid, "zt_grid")?;
    Ok(())
}

/// Every output element must be strictly positive.
pub fn check_mix_positive(d: &MixLengthData) -> Result<(), VerifyError> {
    debug_assert_eq!(d.layout(), Layout::Canonical);

    for s in 0..d.shcol() {
        for k in 0..d.nlev() {
            let offset = d.offset(ColumnIndex::new(s), LevelIndex::new(k));
            if d.shoc_mix[offset] <= 0.0 {
                return Err(VerifyError::NonPositive {
                    field: "shoc_mix",
                    column: s,
                    level: k,
                    value: d.shoc_mix[offset],
                });
            }
        }
    }
    Ok(())
}

/// The output must strictly increase from each column to the next at every
/// fixed level, following the fixture's TKE increase.
pub fn check_mix_column_ordering(d: &MixLengthData) -> Result<(), VerifyError> {
    check_column_ordering(d, &d.shoc_mix, "shoc_mix")
}

/// The output must strictly decrease with increasing level index within
/// every column, mirroring the height-grid ordering.
pub fn check_mix_height_ordering(d: &MixLengthData) -> Result<(), VerifyError> {
    check_height_ordering(d, &d.shoc_mix, "shoc_mix")
}

fn check_column_ordering(
    d: &MixLengthData,
    field: &[f64],
    name: &'static str,
) -> Result<(), VerifyError> {
    debug_assert_eq!(d.layout(), Layout::Canonical);

    for s in 0..d.shcol().saturating_sub(1) {
        for k in 0..d.nlev() {
            let lev = LevelIndex::new(k);
            let here = field[d.offset(ColumnIndex::new(s), lev)];
            let next = field[d.offset(ColumnIndex::new(s + 1), lev)];
            if here >= next {
                return Err(VerifyError::ColumnOrdering {
                    field: name,
                    column: s,
                    next_column: s + 1,
                    level: k,
                    value: here,
                    next_value: next,
                });
            }
        }
    }
    Ok(())
}

fn check_height_ordering(
    d: &MixLengthData,
    field: &[f64],
    name: &'static str,
) -> Result<(), VerifyError> {
    debug_assert_eq!(d.layout(), Layout::Canonical);

    for s in 0..d.shcol() {
        let col = ColumnIndex::new(s);
        for k in 0..d.nlev().saturating_sub(1) {
            let here = field[d.offset(col, LevelIndex::new(k))];
            let below = field[d.offset(col, LevelIndex::new(k + 1))];
            if below >= here {
                return Err(VerifyError::LevelOrdering {
                    field: name,
                    column: s,
                    level: k,
                    next_level: k + 1,
                    value: here,
                    next_value: below,
                });
            }
        }
    }
    Ok(())
}
