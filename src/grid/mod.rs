//! Grid-indexed field storage, memory layouts, and randomization.

mod layout;
mod randomize;
mod store;

pub use layout::{transpose_into, transposed, Layout, TransposeDirection};
pub use store::MixLengthData;
