// src/github/mod.rs
// =============================================================================
// This module reports open activity on the fakeclock GitHub repository.
//
// Submodules:
// - fetch: unauthenticated GETs against the REST API
// - types: the response fields we read
// - report: turns responses into the printed report
// =============================================================================

mod fetch;
mod report;
mod types;

pub use fetch::{ApiSource, GithubClient, DEFAULT_API_URL, REPO};
pub use report::{format_comment_line, list_issues, list_pr_comments, list_pulls, run_report};
pub use types::{Comment, CommentKind, Issue, PullRequest, User};
