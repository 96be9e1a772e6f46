// src/github/types.rs
// =============================================================================
// The handful of GitHub REST v3 fields the activity report reads.
//
// Everything else in the responses is ignored by serde. `number` and `title`
// are required: a response without them is malformed and decoding fails.
// Comment authors and bodies are optional and fall back to "".
// =============================================================================

use std::fmt;

use serde::de::{Deserializer, IgnoredAny};
use serde::Deserialize;

/// An entry from `GET /repos/{owner}/{repo}/issues`
#[derive(Debug, Clone, Deserialize)]
pub struct Issue {
    pub number: u64,
    pub title: String,
    /// Whether the object carried a `pull_request` key at all
    #[serde(default, deserialize_with = "key_present")]
    pub pull_request: bool,
}

impl Issue {
    pub fn is_pull_request(&self) -> bool {
        self.pull_request
    }
}

/// An entry from `GET /repos/{owner}/{repo}/pulls`
#[derive(Debug, Clone, Deserialize)]
pub struct PullRequest {
    pub number: u64,
    pub title: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct User {
    #[serde(default)]
    pub login: Option<String>,
}

/// Issue-style and review comments share this shape
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Comment {
    #[serde(default)]
    pub user: Option<User>,
    #[serde(default)]
    pub body: Option<String>,
}

impl Comment {
    pub fn author(&self) -> &str {
        self.user
            .as_ref()
            .and_then(|u| u.login.as_deref())
            .unwrap_or("")
    }

    /// Text up to the first line break; "" for a missing or empty body
    pub fn first_line(&self) -> &str {
        self.body
            .as_deref()
            .and_then(|b| b.split(is_line_break).next())
            .unwrap_or("")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentKind {
    /// General discussion thread of the PR
    Issue,
    /// Attached to a line of the diff
    Review,
}

impl fmt::Display for CommentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommentKind::Issue => f.write_str("Issue"),
            CommentKind::Review => f.write_str("Review"),
        }
    }
}

// Everything Python's str.splitlines treats as a line boundary
fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\x0b' | '\x0c' | '\x1c' | '\x1d' | '\x1e' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

// `Option<T>` would turn `"pull_request": null` into None. We only care
// whether the key exists, so any value (null included) counts.
fn key_present<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    IgnoredAny::deserialize(deserializer)?;
    Ok(true)
}
