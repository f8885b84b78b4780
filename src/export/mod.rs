// src/export/mod.rs
// =============================================================================
// This module writes the report spreadsheet.
//
// Submodules:
// - layout: sheet name, column order and cell coordinates
// - xlsx: the rust_xlsxwriter code that fills in the workbook
// =============================================================================

mod layout;
mod xlsx;

pub use xlsx::{export_workbook, ExportOutcome};
