//! # Article Domain Model
//!
//! Wire and domain types for the article panel: the server-owned
//! `Article`, the unsaved `Draft` form buffer, and the list query types.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

/// Opaque, backend-assigned article identifier.
///
/// The backend hands these out and they stay stable for an article's
/// lifetime; nothing client-side should derive meaning from the value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArticleId(i64);

impl ArticleId {
    pub fn new(raw: i64) -> Self {
        Self(raw)
    }
}

impl From<i64> for ArticleId {
    fn from(raw: i64) -> Self {
        Self(raw)
    }
}

impl fmt::Display for ArticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An article as the server returns it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    pub id: ArticleId,
    pub title: String,
    pub content: String,
    #[serde(deserialize_with = "lenient_bool")]
    pub is_published: bool,
}

/// Accept `0`/`1` as well as real booleans; loosely-typed backends
/// serialize tinyint columns either way.
fn lenient_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Bool(bool),
        Int(i64),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Bool(value) => value,
        Raw::Int(value) => value != 0,
    })
}

/// The in-progress, unsaved form buffer for create/edit.
///
/// Decoupled from any `Article` until submitted; submission always sends
/// the whole buffer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Draft {
    pub title: String,
    pub content: String,
    pub is_published: bool,
}

impl Draft {
    /// Copy an article's editable fields into a fresh buffer.
    pub fn from_article(article: &Article) -> Self {
        Self {
            title: article.title.clone(),
            content: article.content.clone(),
            is_published: article.is_published,
        }
    }
}

/// Publication-status filter for the list view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusFilter {
    #[default]
    All,
    Published,
    Draft,
}

impl StatusFilter {
    /// Value sent as the `filter_status` query parameter.
    pub fn query_value(self) -> &'static str {
        match self {
            StatusFilter::All => "",
            StatusFilter::Published => "published",
            StatusFilter::Draft => "draft",
        }
    }
}

impl FromStr for StatusFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" | "all" => Ok(StatusFilter::All),
            "published" => Ok(StatusFilter::Published),
            "draft" => Ok(StatusFilter::Draft),
            other => Err(format!("unknown status filter '{other}'")),
        }
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusFilter::All => write!(f, "all"),
            StatusFilter::Published => write!(f, "published"),
            StatusFilter::Draft => write!(f, "draft"),
        }
    }
}

/// Snapshot of the list filters handed to the backend.
#[derive(Debug, Clone, PartialEq)]
pub struct ListQuery {
    pub search: String,
    pub status: StatusFilter,
}

impl ListQuery {
    /// Query-string pairs for the list request.
    pub fn query_pairs(&self) -> [(&'static str, &str); 2] {
        [
            ("search", self.search.as_str()),
            ("filter_status", self.status.query_value()),
        ]
    }
}
