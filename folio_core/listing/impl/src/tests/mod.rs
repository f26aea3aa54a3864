use std::sync::Arc;

use chrono::{DateTime, Utc};
use folio_core_pagination_contracts::{LinkTarget, MockPaginationFeatureService};
use folio_extern_contracts::backend::MockBackendApiService;
use folio_models::{
    listing::NewsPost,
    pagination::{PageLink, PageMarker, PaginationLinks, PaginationLimit, PaginationView},
};

use crate::{ListingBaseUrls, ListingFeatureConfig, ListingFeatureServiceImpl};


type Sut = ListingFeatureServiceImpl<MockBackendApiService, MockPaginationFeatureService>;

impl Default for Sut {
    fn default() -> Self {
        Self {
            backend: MockBackendApiService::new(),
            pagination: MockPaginationFeatureService::new(),
            config: config(),
        }
    }
}

fn config() -> ListingFeatureConfig {
    ListingFeatureConfig {
        per_page: PER_PAGE.try_into().unwrap(),
        base_urls: Arc::new(ListingBaseUrls {
            news: "/news".into(),
            portfolio: "/portfolio".into(),
            bookmarks: "/bookmarks".into(),
        }),
    }
}

const PER_PAGE: u64 = 12;

fn per_page() -> PaginationLimit {
    PER_PAGE.try_into().unwrap()
}

fn post(id: u64) -> NewsPost {
    NewsPost {
        id,
        title: format!("Post {id}"),
        slug: format!("post-{id}"),
        excerpt: String::new(),
        published_at: timestamp(),
    }
}

fn timestamp() -> DateTime<Utc> {
    "2024-05-01T12:00:00Z".parse().unwrap()
}

/// A view of page 2 out of 3 together with its links below `base_url`.
fn view_and_links(base_url: &str) -> (PaginationView, PaginationLinks) {
    let view = PaginationView {
        effective_current_page: 2,
        markers: vec![PageMarker::Page(1), PageMarker::Page(2), PageMarker::Page(3)],
        show_previous: true,
        show_next: true,
    };
    let links = PaginationLinks {
        previous: Some(format!("{base_url}?page=1")),
        pages: (1..=3)
            .map(|number| PageLink::Page {
                number,
                href: format!("{base_url}?page={number}"),
                current: number == 2,
            })
            .collect(),
        next: Some(format!("{base_url}?page=3")),
    };
    (view, links)
}

/// Pagination mock expecting one view computation and one link construction.
fn pagination(
    total_pages: i64,
    current_page: i64,
    target: LinkTarget,
) -> (MockPaginationFeatureService, PaginationView, PaginationLinks) {
    let (view, links) = view_and_links(&target.base_url);
    let mock = MockPaginationFeatureService::new()
        .with_compute_view(total_pages, current_page, view.clone())
        .with_build_links(view.clone(), target, links.clone());
    (mock, view, links)
}
