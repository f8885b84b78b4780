// src/github/mod.rs
// =============================================================================
// This module talks to the GitHub REST API.
//
// Currently implements:
// - Listing a user's public repositories (first page only)
// - Typed decoding of each repository record
//
// Rust concepts:
// - Modules: Organizing related functionality
// - Public API: What other parts of the app can use
// =============================================================================

mod fetch;

// Re-export the fetch entry point and the raw record type
pub use fetch::{fetch_user_repos, RawRepository};
