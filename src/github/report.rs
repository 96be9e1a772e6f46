// src/github/report.rs
// =============================================================================
// Prints the activity report for the repository:
//
//   Open issues:
//   - #5: Bug
//
//   Open pull requests:
//   - #7: Add timerfd support
//
//   Comments for PR #7:
//     Issue comment by alice: Looks good
//     Review comment by bob: nit: rename this
//
// Each section is written as soon as its data arrives. If a later fetch
// fails, what was already printed stays printed and the error is returned.
// =============================================================================

use std::io::Write;

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use tracing::debug;

use super::fetch::ApiSource;
use super::types::{Comment, CommentKind, Issue, PullRequest};

// Fetches `path` and decodes it as a JSON array of `T`
async fn fetch_list<S, T>(source: &S, path: &str) -> Result<Vec<T>>
where
    S: ApiSource,
    T: DeserializeOwned,
{
    let value = source.get_json(path).await?;
    serde_json::from_value(value).with_context(|| format!("Unexpected response shape for {}", path))
}

pub fn format_comment_line(kind: CommentKind, comment: &Comment) -> String {
    format!(
        "  {} comment by {}: {}",
        kind,
        comment.author(),
        comment.first_line()
    )
}

/// Prints open issues, skipping entries that are really pull requests
pub async fn list_issues<S: ApiSource, W: Write>(source: &S, out: &mut W) -> Result<()> {
    let issues: Vec<Issue> = fetch_list(source, "issues").await?;
    debug!(count = issues.len(), "fetched issues");

    writeln!(out, "Open issues:")?;
    for issue in issues.iter().filter(|i| !i.is_pull_request()) {
        writeln!(out, "- #{}: {}", issue.number, issue.title)?;
    }
    Ok(())
}

/// Prints open pull requests and returns their numbers in response order
pub async fn list_pulls<S: ApiSource, W: Write>(source: &S, out: &mut W) -> Result<Vec<u64>> {
    let pulls: Vec<PullRequest> = fetch_list(source, "pulls").await?;
    debug!(count = pulls.len(), "fetched pull requests");

    writeln!(out)?;
    writeln!(out, "Open pull requests:")?;
    let mut numbers = Vec::with_capacity(pulls.len());
    for pr in &pulls {
        numbers.push(pr.number);
        writeln!(out, "- #{}: {}", pr.number, pr.title)?;
    }
    Ok(numbers)
}

/// Prints the issue-style comments, then the review comments, of one PR
///
/// Both lists are fetched before anything is printed.
pub async fn list_pr_comments<S: ApiSource, W: Write>(
    source: &S,
    out: &mut W,
    number: u64,
) -> Result<()> {
    let issue_comments: Vec<Comment> =
        fetch_list(source, &format!("issues/{}/comments", number)).await?;
    let review_comments: Vec<Comment> =
        fetch_list(source, &format!("pulls/{}/comments", number)).await?;
    debug!(
        pr = number,
        issue_comments = issue_comments.len(),
        review_comments = review_comments.len(),
        "fetched comments"
    );

    for comment in &issue_comments {
        writeln!(out, "{}", format_comment_line(CommentKind::Issue, comment))?;
    }
    for comment in &review_comments {
        writeln!(out, "{}", format_comment_line(CommentKind::Review, comment))?;
    }
    Ok(())
}

/// The full report: issues, pull requests, then comments per PR
pub async fn run_report<S: ApiSource, W: Write>(source: &S, out: &mut W) -> Result<()> {
    list_issues(source, out).await?;
    let numbers = list_pulls(source, out).await?;
    for number in numbers {
        writeln!(out)?;
        writeln!(out, "Comments for PR #{}:", number)?;
        list_pr_comments(source, out, number).await?;
    }
    out.flush()?;
    Ok(())
}
