use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::pagination::{PaginationLinks, PaginationMeta, PaginationView};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListingKind {
    News,
    Portfolio,
    Bookmarks,
}

impl ListingKind {
    pub const ALL: [Self; 3] = [Self::News, Self::Portfolio, Self::Bookmarks];

    /// Path segment of the backend collection for this listing.
    pub fn backend_path(self) -> &'static str {
        match self {
            Self::News => "news",
            Self::Portfolio => "portfolio",
            Self::Bookmarks => "bookmarks",
        }
    }
}

impl std::fmt::Display for ListingKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.backend_path().fmt(f)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsPost {
    pub id: u64,
    pub title: String,
    pub slug: String,
    #[serde(default)]
    pub excerpt: String,
    pub published_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioEntry {
    pub id: u64,
    pub title: String,
    pub slug: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub image_url: Option<Url>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bookmark {
    pub id: u64,
    pub post: NewsPost,
    pub created_at: DateTime<Utc>,
}

/// One page of items as returned by the backend API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemotePage<T> {
    pub items: Vec<T>,
    pub meta: PaginationMeta,
}

/// One page of items together with everything needed to render its
/// pagination control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingPage<T> {
    pub items: Vec<T>,
    pub pagination: PaginationView,
    pub links: PaginationLinks,
}
