// src/charts/mod.rs
// =============================================================================
// This module computes the analytics views and renders them as PNG charts.
//
// Submodules:
// - analytics: top repositories, language counts, creation timeline
// - render: plotters drawing code, one function per chart
//
// Outputs (all under ReportConfig::charts_dir, overwritten every run):
// - top_repos_by_stars.png
// - language_distribution.png
// - repo_creation_timeline.png
// =============================================================================

mod analytics;
mod render;

use std::path::{Path, PathBuf};

pub use analytics::{creation_timeline, language_counts, top_by_stars};

use crate::config::ReportConfig;
use crate::error::{ReportError, Result};
use crate::report::RepositoryRow;

/// What the chart stage did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChartOutcome {
    /// Paths of the images written, in embedding order
    Rendered(Vec<PathBuf>),
    /// The table was empty; nothing was created on disk
    NoData,
}

// Renders all three charts for the given table
//
// An empty table is a no-op: not even the charts directory is created.
pub fn render_charts(rows: &[RepositoryRow], config: &ReportConfig) -> Result<ChartOutcome> {
    if rows.is_empty() {
        tracing::warn!("no rows, skipping chart rendering");
        return Ok(ChartOutcome::NoData);
    }

    std::fs::create_dir_all(&config.charts_dir)?;
    let user = &config.username;
    let top_n = config.top_n.max(1);

    let top_path = config.top_repos_chart();
    let top = top_by_stars(rows, top_n);
    render::draw_top_repos(&top_path, &top_chart_title(top.len(), user), &top)
        .map_err(|e| chart_error(&top_path, e))?;

    let language_path = config.language_chart();
    render::draw_language_distribution(
        &language_path,
        &format!("Programming Languages Used by {}", user),
        &language_counts(rows),
    )
    .map_err(|e| chart_error(&language_path, e))?;

    let timeline_path = config.timeline_chart();
    render::draw_creation_timeline(
        &timeline_path,
        &format!("Repository Creation Timeline for {}", user),
        &creation_timeline(rows),
    )
    .map_err(|e| chart_error(&timeline_path, e))?;

    tracing::info!(dir = %config.charts_dir.display(), "charts rendered");
    Ok(ChartOutcome::Rendered(vec![top_path, language_path, timeline_path]))
}

// Counts the bars actually drawn, which is fewer than top_n for small accounts
fn top_chart_title(bars: usize, user: &str) -> String {
    format!("Top {} Repositories by Stars for {}", bars, user)
}

fn chart_error(path: &Path, source: Box<dyn std::error::Error>) -> ReportError {
    ReportError::Chart {
        path: path.to_path_buf(),
        message: source.to_string(),
    }
}
