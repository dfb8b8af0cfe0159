//! Turbulence mixing-length kernels.
//!
//! Computes the vertical mixing length of the SHOC boundary-layer scheme
//! from turbulent kinetic energy, Brunt-Väisälä frequency, an asymptotic
//! length scale, an overturning timescale, and the height grid.
//!
//! # Formula
//!
//! With `tkes = sqrt(tke)` and `brunt2 = max(brunt, 0)`:
//!
//! ```text
//! mix = min(maxlen, 2.8284 * sqrt(1 / (  1/(tscale * tkes * vk * zt)
//!                                      + 1/(tscale * tkes * l_inf)
//!                                      + 0.01 * brunt2 / tke )) / length_fac)
//! ```
//!
//! The three denominator terms blend a surface-layer scale (`vk * zt`), the
//! asymptotic free-atmosphere scale (`l_inf`), and a stability limiter
//! harmonically, so the mixing length grows with height and with TKE and
//! shrinks under stable stratification.
//!
//! # Two Variants
//!
//! Two independently authored implementations compute the same function:
//!
//! - [`compute_shoc_mix_length`] reads canonical-layout fields
//!   (`offset = level + column * nlev`) with a column-outer loop;
//! - [`compute_shoc_mix_length_batch`] reads alternate-layout fields
//!   (`offset = column + level * shcol`) with a level-outer loop whose
//!   simple inner loop over columns auto-vectorizes with LLVM.
//!
//! Both are total, deterministic functions over their declared domain
//! (`tke > 0`, `zt_grid > 0`, `l_inf > 0`, `tscale > 0`, caller-guaranteed):
//! identical inputs produce byte-identical outputs. The per-element
//! expression and its operation order are the same in both variants, so the
//! verification harness can require bit-for-bit agreement rather than a
//! floating-point tolerance.

use super::constants::{LENGTH_FAC, MAX_MIX_LENGTH, MIX_COEF, STAB_COEF, VON_KARMAN};

/// Reference mixing-length kernel (canonical layout).
///
/// Per-level fields are addressed as `offset = level + column * nlev`;
/// `tscale` and `l_inf` hold one value per column. Writes only `shoc_mix`.
///
/// # Panics
///
/// Panics in debug mode if any slice length disagrees with `shcol * nlev`
/// (or `shcol` for the per-column fields).
pub fn compute_shoc_mix_length(
    shcol: usize,
    nlev: usize,
    tke: &[f64],
    brunt: &[f64],
    tscale: &[f64],
    zt_grid: &[f64],
    l_inf: &[f64],
    shoc_mix: &mut [f64],
) {
    debug_assert_eq!(tke.len(), shcol * nlev);
    debug_assert_eq!(brunt.len(), shcol * nlev);
    debug_assert_eq!(zt_grid.len(), shcol * nlev);
    debug_assert_eq!(shoc_mix.len(), shcol * nlev);
    debug_assert_eq!(tscale.len(), shcol);
    debug_assert_eq!(l_inf.len(), shcol);

    for s in 0..shcol {
        for k in 0..nlev {
            let offset = k + s * nlev;

            let tkes = tke[offset].sqrt();
            let brunt2 = brunt[offset].max(0.0);
            let denom = 1.0 / (tscale[s] * tkes * (VON_KARMAN * zt_grid[offset]))
                + 1.0 / (tscale[s] * tkes * l_inf[s])
                + STAB_COEF * (brunt2 / tke[offset]);
            shoc_mix[offset] = (MIX_COEF * (1.0 / denom).sqrt() / LENGTH_FAC).min(MAX_MIX_LENGTH);
        }
    }
}

/// Batch mixing-length kernel (alternate layout).
///
/// Per-level fields are addressed as `offset = column + level * shcol`, so
/// the inner loop walks contiguous memory across columns within one level.
/// The argument order mirrors the layout: leading dimension first.
///
/// The per-element arithmetic matches [`compute_shoc_mix_length`] exactly,
/// operation for operation; outputs agree bit-for-bit.
pub fn compute_shoc_mix_length_batch(
    nlev: usize,
    shcol: usize,
    tke: &[f64],
    brunt: &[f64],
    tscale: &[f64],
    zt_grid: &[f64],
    l_inf: &[f64],
    shoc_mix: &mut [f64],
) {
    debug_assert_eq!(tke.len(), shcol * nlev);
    debug_assert_eq!(brunt.len(), shcol * nlev);
    debug_assert_eq!(zt_grid.len(), shcol * nlev);
    debug_assert_eq!(shoc_mix.len(), shcol * nlev);
    debug_assert_eq!(tscale.len(), shcol);
    debug_assert_eq!(l_inf.len(), shcol);

    for k in 0..nlev {
        let row = k * shcol;
        // Simple loop structure for LLVM auto-vectorization
        for s in 0..shcol {
            let offset = s + row;

            let tkes = tke[offset].sqrt();
            let brunt2 = brunt[offset].max(0.0);
            let denom = 1.0 / (tscale[s] * tkes * (VON_KARMAN * zt_grid[offset]))
                + 1.0 / (tscale[s] * tkes * l_inf[s])
                + STAB_COEF * (brunt2 / tke[offset]);
            shoc_mix[offset] = (MIX_COEF * (1.0 / denom).sqrt() / LENGTH_FAC).min(MAX_MIX_LENGTH);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// One column, one level, handy for scalar checks.
    fn single(tke: f64, brunt: f64, tscale: f64, zt: f64, l_inf: f64) -> f64 {
        let mut out = [0.0];
        compute_shoc_mix_length(1, 1, &[tke], &[brunt], &[tscale], &[zt], &[l_inf], &mut out);
        out[0]
    }

    #[test]
    fn test_output_positive() {
        let mix = single(0.1, 0.001, 300.0, 1000.0, 100.0);
        assert!(mix > 0.0);
        assert!(mix < MAX_MIX_LENGTH);
    }

    #[test]
    fn test_clamped_at_max_length() {
        // Enormous TKE and scales push the blended length past the cap.
        let mix = single(100.0, 0.0, 1e4, 1e5, 1e5);
        assert_eq!(mix, MAX_MIX_LENGTH);
    }

    #[test]
    fn test_grows_with_tke() {
        let lo = single(0.1, 0.001, 300.0, 1000.0, 100.0);
        let hi = single(0.2, 0.001, 300.0, 1000.0, 100.0);
        assert!(hi > lo, "mixing length should grow with TKE: {} vs {}", lo, hi);
    }

    #[test]
    fn test_grows_with_height() {
        let low = single(0.1, 0.001, 300.0, 500.0, 100.0);
        let high = single(0.1, 0.001, 300.0, 5000.0, 100.0);
        assert!(high > low, "mixing length should grow with height: {} vs {}", low, high);
    }

    #[test]
    fn test_stable_stratification_shrinks_mix() {
        let neutral = single(0.1, 0.0, 300.0, 1000.0, 100.0);
        let stable = single(0.1, 0.01, 300.0, 1000.0, 100.0);
        assert!(stable < neutral);
    }

    #[test]
    fn test_unstable_brunt_clamped_to_neutral() {
        // Negative buoyancy frequency contributes nothing to the blend.
        let neutral = single(0.1, 0.0, 300.0, 1000.0, 100.0);
        let unstable = single(0.1, -0.005, 300.0, 1000.0, 100.0);
        assert_eq!(neutral.to_bits(), unstable.to_bits());
    }

    #[test]
    fn test_variants_agree_bitwise_on_small_grid() {
        let (shcol, nlev) = (2, 3);
        let tscale = [300.0, 450.0];
        let l_inf = [100.0, 150.0];

        // Canonical ordering: column-contiguous
        let tke_c = [0.1, 0.12, 0.14, 0.2, 0.22, 0.24];
        let brunt_c = [0.001, -0.001, 0.0, 0.004, 0.002, -0.002];
        let zt_c = [3000.0, 1500.0, 500.0, 2800.0, 1400.0, 450.0];
        let mut mix_c = [0.0; 6];
        compute_shoc_mix_length(shcol, nlev, &tke_c, &brunt_c, &tscale, &zt_c, &l_inf, &mut mix_c);

        // Same data rewritten by hand into the alternate ordering
        let pick = |src: &[f64; 6], s: usize, k: usize| src[k + s * nlev];
        let mut tke_a = [0.0; 6];
        let mut brunt_a = [0.0; 6];
        let mut zt_a = [0.0; 6];
        for k in 0..nlev {
            for s in 0..shcol {
                tke_a[s + k * shcol] = pick(&tke_c, s, k);
                brunt_a[s + k * shcol] = pick(&brunt_c, s, k);
                zt_a[s + k * shcol] = pick(&zt_c, s, k);
            }
        }
        let mut mix_a = [0.0; 6];
        compute_shoc_mix_length_batch(nlev, shcol, &tke_a, &brunt_a, &tscale, &zt_a, &l_inf, &mut mix_a);

        for s in 0..shcol {
            for k in 0..nlev {
                let c = mix_c[k + s * nlev];
                let a = mix_a[s + k * shcol];
                assert_eq!(c.to_bits(), a.to_bits(), "divergence at column {}, level {}", s, k);
            }
        }
    }
}
