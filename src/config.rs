// src/config.rs
// =============================================================================
// The explicit configuration handed to every pipeline stage.
//
// Nothing in the pipeline reads a global path or prompts the operator; the
// CLI adapter (cli.rs) builds one ReportConfig and passes it down.
// =============================================================================

use std::path::PathBuf;

pub const DEFAULT_API_BASE: &str = "https://api.github.com";
pub const DEFAULT_OUTPUT_FILE: &str = "github_repos.xlsx";
pub const DEFAULT_CHARTS_DIR: &str = "charts";
pub const DEFAULT_HIGHLIGHT_THRESHOLD: u32 = 10;
pub const DEFAULT_TOP_N: usize = 5;

pub const TOP_REPOS_CHART: &str = "top_repos_by_stars.png";
pub const LANGUAGE_CHART: &str = "language_distribution.png";
pub const TIMELINE_CHART: &str = "repo_creation_timeline.png";

#[derive(Debug, Clone)]
pub struct ReportConfig {
    /// Account whose public repositories are listed
    pub username: String,
    /// Optional personal access token, sent as a bearer credential
    pub token: Option<String>,
    /// REST API root, without a trailing slash
    pub api_base: String,
    /// Spreadsheet written by the exporter (overwritten if present)
    pub output_path: PathBuf,
    /// Directory the chart images are written to
    pub charts_dir: PathBuf,
    /// Days-since-update values strictly above this are highlighted
    pub highlight_threshold: u32,
    /// How many repositories the stars bar chart shows
    pub top_n: usize,
}

impl ReportConfig {
    /// Creates a config for `username` with every other field defaulted.
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            token: None,
            api_base: DEFAULT_API_BASE.to_string(),
            output_path: PathBuf::from(DEFAULT_OUTPUT_FILE),
            charts_dir: PathBuf::from(DEFAULT_CHARTS_DIR),
            highlight_threshold: DEFAULT_HIGHLIGHT_THRESHOLD,
            top_n: DEFAULT_TOP_N,
        }
    }

    /// Sets the credential; blank tokens count as no token.
    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty());
        self
    }

    pub fn top_repos_chart(&self) -> PathBuf {
        self.charts_dir.join(TOP_REPOS_CHART)
    }

    pub fn language_chart(&self) -> PathBuf {
        self.charts_dir.join(LANGUAGE_CHART)
    }

    pub fn timeline_chart(&self) -> PathBuf {
        self.charts_dir.join(TIMELINE_CHART)
    }

    /// The three chart paths in the order they are embedded in the sheet.
    pub fn chart_paths(&self) -> [PathBuf; 3] {
        [
            self.top_repos_chart(),
            self.language_chart(),
            self.timeline_chart(),
        ]
    }
}
