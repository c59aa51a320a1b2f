// Domain types - plain data, no I/O
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;

/// Server-assigned post identity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(transparent)]
pub struct PostId(pub i64);

impl PostId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn get(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Post as the API returns it.
///
/// Every field is required; a payload missing one fails to decode instead of
/// producing a half-filled post. Extra fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RawPost {
    pub id: PostId,
    pub message: String,
    pub category: String,
    pub upvotes: u32,
    pub timestamp: DateTime<Utc>,
}

/// Canonical post used by every view
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub id: PostId,
    pub message: String,
    /// Kept verbatim; filtering compares it by exact string match
    pub category: String,
    pub upvotes: u32,
    pub created_at: DateTime<Utc>,
    /// The API exposes no moderation state yet
    pub is_hidden: bool,
}

pub fn normalize(raw: RawPost) -> Post {
    Post {
        id: raw.id,
        message: raw.message,
        category: raw.category,
        upvotes: raw.upvotes,
        created_at: raw.timestamp,
        is_hidden: false,
    }
}

pub fn normalize_all(raw: Vec<RawPost>) -> Vec<Post> {
    raw.into_iter().map(normalize).collect()
}

/// The fixed set of categories a voice can be filed under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Category {
    Education,
    Corruption,
    Environment,
    Equality,
    #[serde(rename = "Mental Health")]
    MentalHealth,
    Innovation,
}

impl Category {
    /// Display order
    pub const ALL: [Category; 6] = [
        Category::Education,
        Category::Corruption,
        Category::Environment,
        Category::Equality,
        Category::MentalHealth,
        Category::Innovation,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Education => "Education",
            Category::Corruption => "Corruption",
            Category::Environment => "Environment",
            Category::Equality => "Equality",
            Category::MentalHealth => "Mental Health",
            Category::Innovation => "Innovation",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ValidationError;

    /// Case-sensitive, no trimming
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| ValidationError::UnknownCategory(s.to_string()))
    }
}

/// Which categories the dashboard shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn matches(&self, post: &Post) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => post.category == category.as_str(),
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::All => f.write_str("all"),
            CategoryFilter::Only(category) => category.fmt(f),
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "all" {
            Ok(CategoryFilter::All)
        } else {
            s.parse().map(CategoryFilter::Only)
        }
    }
}

/// Dashboard ordering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum SortBy {
    #[default]
    Recent,
    Upvotes,
}

impl fmt::Display for SortBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortBy::Recent => f.write_str("recent"),
            SortBy::Upvotes => f.write_str("upvotes"),
        }
    }
}
