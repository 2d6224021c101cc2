pub mod line_trace;
pub mod results;
pub mod utils;

pub use line_trace::LineTrace;
pub use results::LineTraceResults;

/// What a [`LineTrace`] collects while walking its samples.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Tracker {
    /// Every non-ignored cell touched.
    Blocks,
    /// Every entity whose hit box contains a sample.
    Entities,
    /// The first impact-worthy cell, with impact point and normal.
    Impact,
    /// Only the first non-ignored cell.
    FirstBlock,
    /// Only the first entity hit.
    FirstEntity,
    All,
}
