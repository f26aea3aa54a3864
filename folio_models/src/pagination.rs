use std::sync::LazyLock;

use nutype::nutype;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// A single renderable element of a pagination control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "PageMarkerRepr", into = "PageMarkerRepr")]
pub enum PageMarker {
    /// A clickable page number.
    Page(u64),
    /// A non-clickable gap between two page numbers.
    Ellipsis,
}

#[derive(Clone, Copy, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum PageMarkerRepr {
    Page { number: u64 },
    Ellipsis,
}

impl From<PageMarker> for PageMarkerRepr {
    fn from(value: PageMarker) -> Self {
        match value {
            PageMarker::Page(number) => Self::Page { number },
            PageMarker::Ellipsis => Self::Ellipsis,
        }
    }
}

impl From<PageMarkerRepr> for PageMarker {
    fn from(value: PageMarkerRepr) -> Self {
        match value {
            PageMarkerRepr::Page { number } => Self::Page(number),
            PageMarkerRepr::Ellipsis => Self::Ellipsis,
        }
    }
}

impl PageMarker {
    pub fn page(self) -> Option<u64> {
        match self {
            Self::Page(number) => Some(number),
            Self::Ellipsis => None,
        }
    }
}

/// The markers and navigation controls to render for one page of a list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationView {
    /// The requested page, or `1` if it was out of range
    pub effective_current_page: u64,
    /// Page numbers and gaps, in ascending page order
    pub markers: Vec<PageMarker>,
    pub show_previous: bool,
    pub show_next: bool,
}

impl PaginationView {
    /// The view for a list without any pages.
    pub fn empty() -> Self {
        Self {
            effective_current_page: 1,
            markers: Vec::new(),
            show_previous: false,
            show_next: false,
        }
    }
}

/// Page information reported by the backend alongside a list of items.
///
/// Values are taken as reported. Out of range pages are handled when the
/// view is computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationMeta {
    pub current_page: i64,
    pub total_pages: i64,
}

#[nutype(
    validate(greater_or_equal = 1, less_or_equal = PaginationLimit::MAX),
    derive(Debug, Clone, Copy, PartialEq, Eq, Deref, TryFrom, Serialize, Deserialize)
)]
pub struct PaginationLimit(u64);

impl PaginationLimit {
    pub const MAX: u64 = 100;

    pub fn max() -> Self {
        Self::try_new(Self::MAX).unwrap()
    }
}

impl Default for PaginationLimit {
    fn default() -> Self {
        Self::max()
    }
}

pub static PAGE_QUERY_PARAM_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("^[A-Za-z0-9_-]{1,32}$").unwrap());

/// Name of the query parameter that carries the page number in links.
#[nutype(
    validate(regex = PAGE_QUERY_PARAM_REGEX),
    derive(Debug, Clone, PartialEq, Eq, Deref, TryFrom, Serialize, Deserialize)
)]
pub struct PageQueryParam(String);

impl Default for PageQueryParam {
    fn default() -> Self {
        Self::try_new("page").unwrap()
    }
}

/// Additional, already encoded query string appended to every page link.
#[nutype(
    sanitize(trim),
    validate(
        not_empty,
        len_char_max = 2048,
        predicate = |s| !s.starts_with(['?', '&'])
    ),
    derive(Debug, Clone, PartialEq, Eq, Deref, TryFrom, Serialize, Deserialize)
)]
pub struct QueryString(String);

impl QueryString {
    /// Parses an optional query string. Blank input means no query string.
    pub fn parse_optional(value: &str) -> Result<Option<Self>, QueryStringError> {
        if value.trim().is_empty() {
            return Ok(None);
        }
        Self::try_new(value).map(Some)
    }
}

/// Navigation links derived from a [`PaginationView`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationLinks {
    pub previous: Option<String>,
    pub pages: Vec<PageLink>,
    pub next: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PageLink {
    Page {
        number: u64,
        href: String,
        current: bool,
    },
    Ellipsis,
}
