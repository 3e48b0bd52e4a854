//! Records exchanged with the remote blog API.

use std::fmt;

use chrono::{DateTime, FixedOffset, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identifier assigned by the remote service.
///
/// Opaque to the client: it is only displayed and echoed back in URLs.
/// Any JSON number is accepted, not just those that fit an `i64`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PostId {
    Number(serde_json::Number),
    Text(String),
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

/// A blog post as returned by the remote service.
///
/// Never constructed or modified by the client outside of tests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    pub title: String,
    pub content: String,
    /// Server-assigned creation time, as sent.
    #[serde(default)]
    pub created_at: String,
}

impl Post {
    /// Creation time rendered in `zh-CN` layout at the given offset.
    #[must_use]
    pub fn created_at_localized(&self, offset: FixedOffset) -> String {
        format_localized(&self.created_at, offset)
    }
}

/// Body of a create request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewPost<'a> {
    pub title: &'a str,
    pub content: &'a str,
}

/// Parse a server timestamp.
///
/// Accepts RFC 3339 and naive ISO 8601 (no offset, taken as UTC).
#[must_use]
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    raw.parse::<NaiveDateTime>().ok().map(|naive| naive.and_utc())
}

/// Format a server timestamp as `YYYY/M/D HH:MM:SS` at `offset`.
///
/// Unparseable input is returned unchanged.
#[must_use]
pub fn format_localized(raw: &str, offset: FixedOffset) -> String {
    parse_timestamp(raw).map_or_else(
        || raw.to_string(),
        |dt| {
            dt.with_timezone(&offset)
                .format("%Y/%-m/%-d %H:%M:%S")
                .to_string()
        },
    )
}
