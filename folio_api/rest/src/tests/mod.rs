use chrono::{DateTime, Utc};
use folio_core_health_contracts::MockHealthFeatureService;
use folio_core_listing_contracts::MockListingFeatureService;
use folio_core_pagination_contracts::MockPaginationFeatureService;
use folio_models::{
    listing::NewsPost,
    pagination::{PageLink, PageMarker, PaginationLinks, PaginationView},
};
use tokio::net::TcpListener;

use crate::{RestServer, RestServerConfig};

mod pagination;

type Sut = RestServer<MockHealthFeatureService, MockPaginationFeatureService, MockListingFeatureService>;

impl Default for Sut {
    fn default() -> Self {
        Self {
            health: MockHealthFeatureService::new(),
            pagination: MockPaginationFeatureService::new(),
            listing: MockListingFeatureService::new(),
            config: RestServerConfig {
                error_redirect_url: ERROR_REDIRECT_URL.into(),
            },
        }
    }
}

const ERROR_REDIRECT_URL: &str = "/error";

/// Serves `sut` on a random local port and returns its base url.
async fn start(sut: Sut) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(sut.serve_on(listener));
    format!("http://{addr}")
}

fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .unwrap()
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

/// Page 1 of 2 with links below `base_url`.
fn view_and_links(base_url: &str) -> (PaginationView, PaginationLinks) {
    let view = PaginationView {
        effective_current_page: 1,
        markers: vec![PageMarker::Page(1), PageMarker::Page(2)],
        show_previous: false,
        show_next: true,
    };
    let links = PaginationLinks {
        previous: None,
        pages: (1..=2)
            .map(|number| PageLink::Page {
                number,
                href: format!("{base_url}?page={number}"),
                current: number == 1,
            })
            .collect(),
        next: Some(format!("{base_url}?page=2")),
    };
    (view, links)
}
