//! Error types for verification checks.

use thiserror::Error;

/// A failed verification check, carrying the first offending coordinates
/// and the diagnostic values the test framework reports.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum VerifyError {
    /// A per-column input field holds a non-positive value.
    #[error("non-positive {field} at column {column}: {value}")]
    NonPositiveColumn {
        field: &'static str,
        column: usize,
        value: f64,
    },

    /// A per-level field holds a non-positive value.
    #[error("non-positive {field} at column {column}, level {level}: {value}")]
    NonPositive {
        field: &'static str,
        column: usize,
        level: usize,
        value: f64,
    },

    /// A field fails to strictly increase from one column to the next
    /// at a fixed level.
    #[error(
        "{field} not strictly increasing across columns at level {level}: \
         column {column} has {value}, column {next_column} has {next_value}"
    )]
    ColumnOrdering {
        field: &'static str,
        column: usize,
        next_column: usize,
        level: usize,
        value: f64,
        next_value: f64,
    },

    /// A field fails to strictly decrease with increasing level index
    /// within a column.
    #[error(
        "{field} not strictly decreasing with level in column {column}: \
         level {level} has {value}, level {next_level} has {next_value}"
    )]
    LevelOrdering {
        field: &'static str,
        column: usize,
        level: usize,
        next_level: usize,
        value: f64,
        next_value: f64,
    },

    /// The two kernel variants disagree on an output element.
    #[error(
        "bitwise mismatch at column {column}, level {level}: \
         reference {reference} ({reference_bits:#018x}) vs batch {batch} ({batch_bits:#018x})"
    )]
    BitwiseMismatch {
        column: usize,
        level: usize,
        reference: f64,
        batch: f64,
        reference_bits: u64,
        batch_bits: u64,
    },

    /// The property check needs at least two columns to compare.
    #[error("property check requires at least 2 columns, got {shcol}")]
    TooFewColumns { shcol: usize },
}

impl VerifyError {
    /// Build a bitwise-mismatch error from the two diverging values.
    pub fn bitwise_mismatch(column: usize, level: usize, reference: f64, batch: f64) -> Self {
        Self::BitwiseMismatch {
            column,
            level,
            reference,
            batch,
            reference_bits: reference.to_bits(),
            batch_bits: batch.to_bits(),
        }
    }
}
