//! # shoc-mix
//!
//! Turbulence mixing-length kernel from the SHOC atmospheric
//! boundary-layer parameterization, with a verification harness proving a
//! batch (vectorization-friendly) reimplementation bit-for-bit identical
//! to the reference implementation.
//!
//! This crate provides the core building blocks for that verification:
//! - Grid-indexed field storage for multi-column, multi-level data
//! - Lossless transposition between the two supported memory layouts
//! - Per-field randomization within physically plausible ranges
//! - Reference and batch mixing-length kernels
//! - Property checks and bit-exact cross-implementation checks
//!
//! # Example
//!
//! ```
//! use rand::thread_rng;
//! use shoc_mix::verify::{run_bfb_case, PropertyCase};
//!
//! // Physical properties of the kernel on a monotone fixture
//! PropertyCase::default().run().unwrap();
//!
//! // Exact agreement of both kernel variants on randomized data
//! run_bfb_case(7, 16, &mut thread_rng()).unwrap();
//! ```

pub mod grid;
pub mod physics;
pub mod types;
pub mod verify;

// Re-export main types for convenience
pub use grid::{Layout, MixLengthData, TransposeDirection};
pub use physics::{compute_shoc_mix_length, compute_shoc_mix_length_batch};
pub use types::{ColumnIndex, LevelIndex};
pub use verify::{run_bfb_case, PropertyCase, VerifyError, BFB_CASE_DIMS};
