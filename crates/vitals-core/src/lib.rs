//! Transformation-and-validation engine orchestration.
//!
//! Takes the raw record batches handed over by extraction and produces the
//! three outputs the loading stage consumes: valid patient records, valid
//! reading records, and the complete structured error set.

pub mod pipeline;

pub use pipeline::{BatchOutcome, BatchSummary, transform_batch};
