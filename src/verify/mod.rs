//! Verification harness: property checks and bit-exact
//! cross-implementation checks.
//!
//! Checks are pure functions returning `Result<(), VerifyError>`; the test
//! framework turns a returned error into a reported failure. Nothing here
//! retries — the kernels are pure and deterministic, so a retry would be
//! meaningless.

mod bfb;
mod error;
mod property;

pub use bfb::{compare_bitwise, run_bfb_case, BFB_CASE_DIMS};
pub use error::VerifyError;
pub use property::{
    check_inputs, check_mix_column_ordering, check_mix_height_ordering, check_mix_positive,
    PropertyCase,
};
