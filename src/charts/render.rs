// src/charts/render.rs
// =============================================================================
// PNG rendering of the three charts with plotters' bitmap backend.
//
// Each function draws one image and overwrites whatever is at `path`.
// Callers guarantee the input is non-empty.
// =============================================================================

use std::error::Error;
use std::ops::Range;
use std::path::Path;

use chrono::{Duration, NaiveDate};
use plotters::element::Pie;
use plotters::prelude::*;

use crate::report::RepositoryRow;

pub type DrawResult = std::result::Result<(), Box<dyn Error>>;

const FONT: &str = "sans-serif";
/// Below this many days between the first and last repository, month-only
/// tick labels repeat, so full dates are shown instead.
const SHORT_SPAN_DAYS: i64 = 120;
const BAR_COLOR: RGBColor = RGBColor(31, 119, 180);
const LINE_COLOR: RGBColor = RGBColor(31, 119, 180);

const PALETTE: [RGBColor; 8] = [
    RGBColor(31, 119, 180),  // Blue
    RGBColor(255, 127, 14),  // Orange
    RGBColor(44, 160, 44),   // Green
    RGBColor(214, 39, 40),   // Red
    RGBColor(148, 103, 189), // Purple
    RGBColor(140, 86, 75),   // Brown
    RGBColor(227, 119, 194), // Pink
    RGBColor(127, 127, 127), // Gray
];

/// Bar chart: repository name on x, star count on y.
pub fn draw_top_repos(path: &Path, title: &str, top: &[&RepositoryRow]) -> DrawResult {
    let root = BitMapBackend::new(path, (1000, 600)).into_drawing_area();
    root.fill(&WHITE)?;

    let names: Vec<String> = top.iter().map(|r| r.name.clone()).collect();
    let max_stars = top.iter().map(|r| r.stars).max().unwrap_or(0);
    // 10% headroom above the tallest bar, and a non-empty range when all are 0
    let y_max = max_stars + max_stars / 10 + 1;

    let mut chart = ChartBuilder::on(&root)
        .caption(title, (FONT, 28))
        .margin(20)
        .x_label_area_size(60)
        .y_label_area_size(60)
        .build_cartesian_2d(category_range(names.len()).into_segmented(), 0u64..y_max)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_desc("Repository")
        .y_desc("Stars")
        .x_labels(names.len())
        .x_label_formatter(&|value| match value {
            SegmentValue::CenterOf(i) => names.get(*i as usize).cloned().unwrap_or_default(),
            _ => String::new(),
        })
        .draw()?;

    chart.draw_series(
        Histogram::vertical(&chart)
            .style(BAR_COLOR.filled())
            .margin(12)
            .data(top.iter().enumerate().map(|(i, r)| (i as u32, r.stars))),
    )?;

    root.present()?;
    tracing::debug!(
        path = %path.display(),
        bars = top.len(),
        "rendered top repositories chart"
    );
    Ok(())
}

/// Pie chart: one slice per language, labelled with name and percentage.
pub fn draw_language_distribution(
    path: &Path,
    title: &str,
    counts: &[(String, usize)],
) -> DrawResult {
    let root = BitMapBackend::new(path, (1000, 600)).into_drawing_area();
    root.fill(&WHITE)?;
    let root = root.titled(title, (FONT, 28))?;

    let (width, height) = root.dim_in_pixel();
    let center = (width as i32 / 2, height as i32 / 2);
    let radius = f64::from(width.min(height)) * 0.36;

    let sizes: Vec<f64> = counts.iter().map(|(_, c)| *c as f64).collect();
    let labels: Vec<String> = counts.iter().map(|(l, _)| l.clone()).collect();
    let colors: Vec<RGBColor> = (0..counts.len())
        .map(|i| PALETTE[i % PALETTE.len()])
        .collect();

    let mut pie = Pie::new(&center, &radius, &sizes, &colors, &labels);
    pie.start_angle(90.0);
    pie.label_style((FONT, 16).into_font().color(&BLACK));
    pie.percentages((FONT, 14).into_font().color(&WHITE));
    root.draw(&pie)?;

    root.present()?;
    tracing::debug!(path = %path.display(), slices = counts.len(), "rendered language chart");
    Ok(())
}

/// Line with markers: creation date on x, running repository count on y.
pub fn draw_creation_timeline(
    path: &Path,
    title: &str,
    points: &[(NaiveDate, u32)],
) -> DrawResult {
    let root = BitMapBackend::new(path, (1200, 600)).into_drawing_area();
    root.fill(&WHITE)?;

    let (first, last) = match (points.first(), points.last()) {
        (Some(first), Some(last)) => (first.0, last.0),
        _ => return Ok(()),
    };
    // Pad the date axis so a single repository still gets a non-empty range
    let x_range = (first - Duration::days(30))..(last + Duration::days(30));
    let y_max = points.len() as u32 + 1;
    let label_format = date_label_format(first, last);

    let mut chart = ChartBuilder::on(&root)
        .caption(title, (FONT, 28))
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d(x_range, 0u32..y_max)?;

    chart
        .configure_mesh()
        .x_desc("Date")
        .y_desc("Cumulative Number of Repositories")
        .x_labels(8)
        .x_label_formatter(&|date: &NaiveDate| date.format(label_format).to_string())
        .draw()?;

    chart.draw_series(LineSeries::new(points.iter().copied(), &LINE_COLOR))?;
    chart.draw_series(
        points
            .iter()
            .map(|point| Circle::new(*point, 4, LINE_COLOR.filled())),
    )?;

    root.present()?;
    tracing::debug!(
        path = %path.display(),
        points = points.len(),
        "rendered creation timeline"
    );
    Ok(())
}

// Bar positions 0..=count-1
//
// Integer coordinates include their upper bound, so ending the range at the
// last index gives exactly one segment per bar.
fn category_range(count: usize) -> Range<u32> {
    0..count.saturating_sub(1) as u32
}

// Tick label format for a timeline running from `first` to `last`
fn date_label_format(first: NaiveDate, last: NaiveDate) -> &'static str {
    if (last - first).num_days() < SHORT_SPAN_DAYS {
        "%Y-%m-%d"
    } else {
        "%Y-%m"
    }
}
