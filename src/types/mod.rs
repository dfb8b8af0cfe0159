//! Strongly-typed primitives shared across the crate.

mod indices;

pub use indices::{ColumnIndex, LevelIndex};
