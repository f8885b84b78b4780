// src/report/mod.rs
// =============================================================================
// This module holds the normalized table that the exporter and the chart
// renderer both read.
//
// Submodules:
// - row: RawRepository -> RepositoryRow mapping and timestamp parsing
// - summary: the headline numbers printed at the end of a run
// =============================================================================

mod row;
mod summary;

pub use row::{transform, RepositoryRow, DATE_FORMAT};
pub use summary::RepositorySummary;
