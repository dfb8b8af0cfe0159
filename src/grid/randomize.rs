//! Per-field randomization within physically plausible ranges.
//!
//! Each field draws independently and uniformly from a fixed range chosen
//! so that the kernel's domain preconditions stay satisfiable: TKE, heights,
//! asymptotic lengths, and timescales are strictly positive; the buoyancy
//! frequency range spans weakly unstable through stable stratification so
//! the stability clamp in the kernel is exercised.

use rand::Rng;

use super::store::MixLengthData;

/// Turbulent kinetic energy [m2/s2].
const TKE_RANGE: (f64, f64) = (1e-2, 0.5);

/// Brunt-Väisälä frequency [s-1]. May be negative (unstable stratification).
const BRUNT_RANGE: (f64, f64) = (-1e-3, 1e-2);

/// Heights on the thermodynamic grid [m].
const ZT_GRID_RANGE: (f64, f64) = (50.0, 5000.0);

/// Asymptotic length scale [m].
const L_INF_RANGE: (f64, f64) = (10.0, 500.0);

/// Overturning timescale [s].
const TSCALE_RANGE: (f64, f64) = (100.0, 1000.0);

#[inline]
fn draw<R: Rng>(rng: &mut R, (lo, hi): (f64, f64)) -> f64 {
    rng.gen_range(lo..hi)
}

impl MixLengthData {
    /// Fill every input field with fresh uniform draws from its range.
    ///
    /// The output field is zeroed. Each call may use a fresh random stream;
    /// the bit-exact harness relies on cloning the store after randomization,
    /// not on reproducing the draws.
    pub fn randomize<R: Rng>(&mut self, rng: &mut R) {
        for s in 0..self.shcol() {
            self.l_inf[s] = draw(rng, L_INF_RANGE);
            self.tscale[s] = draw(rng, TSCALE_RANGE);
        }
        for i in 0..self.total() {
            self.tke[i] = draw(rng, TKE_RANGE);
            self.brunt[i] = draw(rng, BRUNT_RANGE);
            self.zt_grid[i] = draw(rng, ZT_GRID_RANGE);
            self.shoc_mix[i] = 0.0;
        }
    }
}
