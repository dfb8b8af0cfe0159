//! Mixing-length kernels and their physical constants.

pub mod constants;
mod mix_length;

pub use mix_length::{compute_shoc_mix_length, compute_shoc_mix_length_batch};
