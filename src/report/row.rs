// src/report/row.rs
// =============================================================================
// This module turns raw API records into normalized report rows.
//
// Rules:
// - Missing description -> "No description"
// - Missing language    -> "Not specified"
// - Star and fork counts pass through unchanged
// - Timestamps must match %Y-%m-%dT%H:%M:%SZ exactly; anything else aborts
//   the run with ReportError::Timestamp
// - Days since update is derived later, against one capture instant, so
//   every row in a run is measured from the same "now"
// =============================================================================

use chrono::{NaiveDate, NaiveDateTime};

use crate::error::{ReportError, Result};
use crate::github::RawRepository;

pub const NO_DESCRIPTION: &str = "No description";
pub const NO_LANGUAGE: &str = "Not specified";

/// The exact format GitHub uses for created_at / updated_at
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Format used when dates are written out (spreadsheet, console)
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// One normalized repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryRow {
    pub name: String,
    pub description: String,
    pub language: String,
    pub stars: u64,
    pub forks: u64,
    pub created_at: NaiveDate,
    pub updated_at: NaiveDate,
    pub url: String,
}

impl RepositoryRow {
    /// Whole days between the last update and `today`, never negative.
    ///
    /// A repository updated "tomorrow" (clock skew between us and GitHub)
    /// counts as 0 days.
    pub fn days_since_update(&self, today: NaiveDate) -> u32 {
        let days = (today - self.updated_at).num_days();
        u32::try_from(days.max(0)).unwrap_or(u32::MAX)
    }
}

// Maps every raw record to a row, keeping the API's order
//
// Fails on the first malformed timestamp; there is no partial result.
pub fn transform(raw: &[RawRepository]) -> Result<Vec<RepositoryRow>> {
    raw.iter().map(to_row).collect()
}

fn to_row(repo: &RawRepository) -> Result<RepositoryRow> {
    Ok(RepositoryRow {
        name: repo.name.clone(),
        description: repo
            .description
            .clone()
            .unwrap_or_else(|| NO_DESCRIPTION.to_string()),
        language: repo
            .language
            .clone()
            .unwrap_or_else(|| NO_LANGUAGE.to_string()),
        stars: repo.stargazers_count,
        forks: repo.forks_count,
        created_at: parse_date("created_at", &repo.created_at)?,
        updated_at: parse_date("updated_at", &repo.updated_at)?,
        url: repo.html_url.clone(),
    })
}

/// Parses a GitHub timestamp and keeps only its calendar date.
pub fn parse_date(field: &'static str, value: &str) -> Result<NaiveDate> {
    NaiveDateTime::parse_from_str(value, TIMESTAMP_FORMAT)
        .map(|dt| dt.date())
        .map_err(|_| ReportError::Timestamp {
            field,
            value: value.to_string(),
        })
}
