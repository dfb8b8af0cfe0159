//! Bit-exact cross-implementation checks.
//!
//! One randomized store is duplicated before either kernel variant runs, so
//! in-out data stays pristine for both. The reference kernel consumes one
//! copy in canonical layout; the other copy is transposed to the alternate
//! layout, handed to the batch kernel, and transposed back. Every output
//! element must then match exactly — bit for bit, no tolerance — which
//! catches divergence a floating-point epsilon would hide.

use rand::Rng;

use crate::grid::{Layout, MixLengthData, TransposeDirection};
use crate::physics::{compute_shoc_mix_length, compute_shoc_mix_length_batch};
use crate::types::{ColumnIndex, LevelIndex};

use super::error::VerifyError;

/// Fixture dimensions `(shcol, nlev)` exercised by the bit-exact family.
pub const BFB_CASE_DIMS: [(usize, usize); 4] = [(10, 71), (10, 12), (7, 16), (2, 7)];

/// Compare the output fields of two canonical-layout stores exactly.
///
/// Returns the first diverging element with both values and their raw bit
/// patterns.
///
/// # Panics
///
/// Panics in debug mode if the stores disagree on dimensions or either is
/// not in canonical layout.
pub fn compare_bitwise(reference: &MixLengthData, batch: &MixLengthData) -> Result<(), VerifyError> {
    debug_assert_eq!(reference.shcol(), batch.shcol());
    debug_assert_eq!(reference.nlev(), batch.nlev());
    debug_assert_eq!(reference.layout(), Layout::Canonical);
    debug_assert_eq!(batch.layout(), Layout::Canonical);

    for s in 0..reference.shcol() {
        for k in 0..reference.nlev() {
            let offset = reference.offset(ColumnIndex::new(s), LevelIndex::new(k));
            let r = reference.shoc_mix[offset];
            let b = batch.shoc_mix[offset];
            if r.to_bits() != b.to_bits() {
                return Err(VerifyError::bitwise_mismatch(s, k, r, b));
            }
        }
    }
    Ok(())
}

/// Run one randomized bit-exact case of the given dimensions.
///
/// Randomizes a fresh store, duplicates it, runs the reference kernel on
/// one copy and the batch kernel (through the layout round trip) on the
/// other, then requires exact agreement.
pub fn run_bfb_case<R: Rng>(shcol: usize, nlev: usize, rng: &mut R) -> Result<(), VerifyError> {
    let mut reference = MixLengthData::new(shcol, nlev);
    reference.randomize(rng);

    // Duplicate before either implementation runs so neither sees the
    // other's mutations.
    let mut batch = reference.clone();

    compute_shoc_mix_length(
        shcol,
        nlev,
        &reference.tke,
        &reference.brunt,
        &reference.tscale,
        &reference.zt_grid,
        &reference.l_inf,
        &mut reference.shoc_mix,
    );

    batch.transpose(TransposeDirection::ToAlternate);
    compute_shoc_mix_length_batch(
        nlev,
        shcol,
        &batch.tke,
        &batch.brunt,
        &batch.tscale,
        &batch.zt_grid,
        &batch.l_inf,
        &mut batch.shoc_mix,
    );
    batch.transpose(TransposeDirection::ToCanonical);

    compare_bitwise(&reference, &batch)
}
