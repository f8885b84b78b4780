// src/export/xlsx.rs
// =============================================================================
// Writes the repository table to a single-sheet workbook.
//
// Sheet contents:
// - Header row + one row per repository, in API order
// - Autofilter over the whole table
// - Days-since-update cells above the threshold filled #FFCCCC
// - "Generated at: ..." two columns right of the table
// - Any chart PNGs that exist, stacked below the table
//
// The output file is overwritten in place.
// =============================================================================

use std::path::PathBuf;

use chrono::{DateTime, Local};
use rust_xlsxwriter::{
    Color, ConditionalFormatCell, ConditionalFormatCellRule, Format, Image, Workbook, Worksheet,
};

use super::layout::{sheet_name, SheetLayout, HEADERS};
use crate::config::ReportConfig;
use crate::error::Result;
use crate::report::{RepositoryRow, DATE_FORMAT};

const HIGHLIGHT_FILL: u32 = 0xFFCCCC;
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// What the export stage did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    Written { path: PathBuf, images: usize },
    /// The table was empty; no file was touched
    NoData,
}

// Writes `rows` to config.output_path
//
// `captured_at` is the single instant the whole run measures
// "days since update" from, and the time stamped on the sheet.
pub fn export_workbook(
    rows: &[RepositoryRow],
    config: &ReportConfig,
    captured_at: DateTime<Local>,
) -> Result<ExportOutcome> {
    if rows.is_empty() {
        tracing::warn!("no rows, skipping spreadsheet export");
        return Ok(ExportOutcome::NoData);
    }

    let layout = SheetLayout::new(rows.len());
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(sheet_name(&config.username))?;

    write_table(worksheet, rows, captured_at)?;

    let (first_row, first_col, last_row, last_col) = layout.table_range();
    worksheet.autofilter(first_row, first_col, last_row, last_col)?;

    let highlight = Format::new().set_background_color(Color::RGB(HIGHLIGHT_FILL));
    let rule = ConditionalFormatCell::new()
        .set_rule(ConditionalFormatCellRule::GreaterThan(f64::from(
            config.highlight_threshold,
        )))
        .set_format(&highlight);
    let (first_row, first_col, last_row, last_col) = layout.highlight_range();
    worksheet.add_conditional_format(first_row, first_col, last_row, last_col, &rule)?;

    let (stamp_row, stamp_col) = layout.timestamp_cell();
    worksheet.write_string(
        stamp_row,
        stamp_col,
        format!("Generated at: {}", captured_at.format(TIMESTAMP_FORMAT)),
    )?;

    let images = embed_charts(worksheet, &layout, config)?;

    workbook.save(&config.output_path)?;
    tracing::info!(
        path = %config.output_path.display(),
        rows = rows.len(),
        images,
        "spreadsheet written"
    );

    Ok(ExportOutcome::Written {
        path: config.output_path.clone(),
        images,
    })
}

fn write_table(
    worksheet: &mut Worksheet,
    rows: &[RepositoryRow],
    captured_at: DateTime<Local>,
) -> Result<()> {
    let bold = Format::new().set_bold();
    for (col, header) in (0u16..).zip(HEADERS) {
        worksheet.write_string_with_format(0, col, header, &bold)?;
    }

    let today = captured_at.date_naive();
    for (row_index, row) in (1u32..).zip(rows) {
        worksheet.write_string(row_index, 0, &row.name)?;
        worksheet.write_string(row_index, 1, &row.description)?;
        worksheet.write_string(row_index, 2, &row.language)?;
        worksheet.write_number(row_index, 3, row.stars as f64)?;
        worksheet.write_number(row_index, 4, row.forks as f64)?;
        worksheet.write_string(row_index, 5, row.created_at.format(DATE_FORMAT).to_string())?;
        worksheet.write_string(row_index, 6, row.updated_at.format(DATE_FORMAT).to_string())?;
        worksheet.write_string(row_index, 7, &row.url)?;
        worksheet.write_number(row_index, 8, row.days_since_update(today))?;
    }

    worksheet.set_column_width(0, 28)?;
    worksheet.set_column_width(1, 48)?;
    worksheet.set_column_width(7, 48)?;
    Ok(())
}

// Inserts every chart image that exists, one below the other
//
// Missing images are skipped without error. Returns how many went in.
fn embed_charts(
    worksheet: &mut Worksheet,
    layout: &SheetLayout,
    config: &ReportConfig,
) -> Result<usize> {
    let mut embedded = 0u32;

    for path in config.chart_paths() {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "chart image missing, not embedded");
            continue;
        }

        let image = Image::new(&path)?;
        worksheet.insert_image(layout.image_row(embedded), 0, &image)?;
        embedded += 1;
    }

    Ok(embedded as usize)
}
