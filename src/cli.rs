// src/cli.rs
// =============================================================================
// This file defines the command-line interface using the `clap` crate.
//
// Every flag is optional. Whatever the operator leaves out is asked for
// interactively, so running the bare binary behaves like the classic
// "enter a username, optionally a token" tool, while scripts can pass
// everything up front.
//
// The result of all of this is one ReportConfig; nothing below main.rs
// knows that a terminal exists.
// =============================================================================

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::Parser;

use crate::config::{
    ReportConfig, DEFAULT_API_BASE, DEFAULT_CHARTS_DIR, DEFAULT_HIGHLIGHT_THRESHOLD,
    DEFAULT_OUTPUT_FILE, DEFAULT_TOP_N,
};
use crate::error::{ReportError, Result};

#[derive(Parser, Debug)]
#[command(
    name = "github-repo-report",
    version,
    about = "Export a GitHub user's public repositories to a spreadsheet with charts",
    long_about = "github-repo-report lists a user's public repositories, writes them to an .xlsx \
                  sheet with highlighting and an autofilter, and renders charts of stars, \
                  languages and creation dates next to it."
)]
pub struct Cli {
    /// GitHub username (prompted for when omitted)
    #[arg(short, long)]
    pub username: Option<String>,

    /// Personal access token (prompted for when omitted, empty to skip)
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Spreadsheet to write (overwritten if it exists)
    #[arg(short, long, default_value = DEFAULT_OUTPUT_FILE)]
    pub output: PathBuf,

    /// Directory for the chart images
    #[arg(long, default_value = DEFAULT_CHARTS_DIR)]
    pub charts_dir: PathBuf,

    /// Highlight repositories not updated for more than this many days
    #[arg(long, default_value_t = DEFAULT_HIGHLIGHT_THRESHOLD)]
    pub highlight_threshold: u32,

    /// Number of repositories in the stars bar chart
    #[arg(long, default_value_t = DEFAULT_TOP_N)]
    pub top_n: usize,

    /// GitHub API root (for GitHub Enterprise or testing)
    #[arg(long, default_value = DEFAULT_API_BASE)]
    pub api_base: String,

    /// Print debug diagnostics to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    // Turns the parsed flags into a config, prompting on `input` for
    // anything missing
    pub fn into_config<R: BufRead, W: Write>(
        self,
        input: &mut R,
        output: &mut W,
    ) -> Result<ReportConfig> {
        let username = match self.username {
            Some(name) => name,
            None => prompt(input, output, "Enter GitHub username: ")?,
        };
        let username = username.trim().to_string();
        if username.is_empty() {
            return Err(ReportError::Input("a GitHub username is required".to_string()));
        }

        let token = match self.token {
            Some(token) => Some(token),
            None => Some(prompt(
                input,
                output,
                "Enter GitHub token (optional, press Enter to skip): ",
            )?),
        };

        let mut config = ReportConfig::new(username).with_token(token);
        config.api_base = self.api_base;
        config.output_path = self.output;
        config.charts_dir = self.charts_dir;
        config.highlight_threshold = self.highlight_threshold;
        config.top_n = self.top_n;
        Ok(config)
    }
}

// Prints `label` and reads one line; end of input counts as an empty answer
fn prompt<R: BufRead, W: Write>(input: &mut R, output: &mut W, label: &str) -> Result<String> {
    write!(output, "{}", label)?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim().to_string())
}

/// Builds the config from the real terminal.
pub fn config_from_terminal(cli: Cli) -> Result<ReportConfig> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();
    cli.into_config(&mut input, &mut output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn parse(args: &[&str]) -> Cli {
        let mut argv = vec!["github-repo-report"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_flags_skip_prompts() {
        let cli = parse(&["--username", "octocat", "--token", "ghp_x", "--top-n", "3"]);
        let mut input = Cursor::new(Vec::new());
        let mut output = Vec::new();

        let config = cli.into_config(&mut input, &mut output).unwrap();

        assert_eq!(config.username, "octocat");
        assert_eq!(config.token.as_deref(), Some("ghp_x"));
        assert_eq!(config.top_n, 3);
        assert_eq!(config.highlight_threshold, 10);
        assert!(output.is_empty());
    }

    #[test]
    fn test_prompts_for_missing_values() {
        let mut cli = parse(&[]);
        // GITHUB_TOKEN may be set in the environment running the tests
        cli.token = None;
        let mut input = Cursor::new(b"octocat\n\n".to_vec());
        let mut output = Vec::new();

        let config = cli.into_config(&mut input, &mut output).unwrap();

        assert_eq!(config.username, "octocat");
        assert_eq!(config.token, None);
        let shown = String::from_utf8(output).unwrap();
        assert!(shown.contains("Enter GitHub username: "));
        assert!(shown.contains("Enter GitHub token (optional, press Enter to skip): "));
    }

    #[test]
    fn test_empty_username_is_rejected() {
        let mut cli = parse(&[]);
        cli.token = None;
        let mut input = Cursor::new(b"   \n".to_vec());
        let mut output = Vec::new();

        let result = cli.into_config(&mut input, &mut output);
        assert!(matches!(result, Err(ReportError::Input(_))));
    }

    #[test]
    fn test_default_paths() {
        let mut cli = parse(&["-u", "octocat"]);
        cli.token = None;
        let mut input = Cursor::new(b"\n".to_vec());
        let config = cli.into_config(&mut input, &mut Vec::new()).unwrap();
        assert_eq!(config.output_path, PathBuf::from("github_repos.xlsx"));
        assert_eq!(config.charts_dir, PathBuf::from("charts"));
    }
}
