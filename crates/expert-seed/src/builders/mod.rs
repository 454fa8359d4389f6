//! Builders for complete generation runs.

pub mod batch;

pub use batch::{BatchBuilder, BatchError, BatchResult};
