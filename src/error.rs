// src/error.rs
// =============================================================================
// Error types shared by every stage of the report pipeline.
//
// The stages (fetch, transform, chart, export) return ReportError so main.rs
// can tell an API failure apart from an unexpected one when it picks the
// process exit code.
// =============================================================================

use std::path::PathBuf;

/// Everything that can go wrong while building a repository report.
#[derive(thiserror::Error, Debug)]
pub enum ReportError {
    /// The request never produced a response (DNS, TLS, connection reset...)
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-2xx status
    #[error("GitHub API returned HTTP {status}: {body}")]
    Api { status: u16, body: String },

    /// The response body is not the JSON array of repositories we expect
    #[error("Unexpected response shape: {0}")]
    Schema(#[from] serde_json::Error),

    /// A timestamp did not match `%Y-%m-%dT%H:%M:%SZ`
    #[error("Invalid {field} timestamp '{value}'")]
    Timestamp { field: &'static str, value: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Spreadsheet error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    /// Drawing a chart image failed
    #[error("Failed to render {}: {message}", path.display())]
    Chart { path: PathBuf, message: String },

    /// Operator supplied something unusable (e.g. an empty username)
    #[error("Invalid input: {0}")]
    Input(String),
}

impl ReportError {
    /// True for failures that come from talking to GitHub rather than from
    /// this program: non-2xx answers and bodies we could not decode.
    pub fn is_api_failure(&self) -> bool {
        matches!(self, ReportError::Api { .. } | ReportError::Schema(_))
    }
}

pub type Result<T> = std::result::Result<T, ReportError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_failures_are_classified() {
        let api = ReportError::Api {
            status: 404,
            body: "Not Found".to_string(),
        };
        assert!(api.is_api_failure());
        assert_eq!(api.to_string(), "GitHub API returned HTTP 404: Not Found");

        let schema = ReportError::Schema(serde_json::from_str::<u32>("\"x\"").unwrap_err());
        assert!(schema.is_api_failure());

        let input = ReportError::Input("empty username".to_string());
        assert!(!input.is_api_failure());
    }
}
