use std::{net::SocketAddr, time::Duration};

use axum::{
    extract::Query,
    http::{header::AUTHORIZATION, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing, Json, Router,
};
use folio_extern_contracts::backend::{BackendApiService, BackendFetchError};
use folio_extern_impl::{
    backend::{BackendApiServiceConfig, BackendApiServiceImpl},
    http::{HttpClient, USER_AGENT},
};
use folio_models::pagination::PaginationLimit;
use folio_utils::assert_matches;
use serde::Deserialize;
use serde_json::json;
use tokio::net::TcpListener;

#[tokio::test]
async fn fetch_news() {
    let sut = make_sut().await;

    let result = sut.fetch_news(2, per_page(3)).await.unwrap();

    assert_eq!(result.meta.current_page, 2);
    assert_eq!(result.meta.total_pages, 4);
    assert_eq!(
        result.items.iter().map(|x| x.id).collect::<Vec<_>>(),
        [4, 5, 6]
    );
    assert_eq!(result.items[0].slug, "post-4");
}

#[tokio::test]
async fn fetch_portfolio_server_error() {
    let sut = make_sut().await;

    let result = sut.fetch_portfolio(1, per_page(12)).await;

    assert_matches!(result, Err(BackendFetchError::Other(_)));
}

#[tokio::test]
async fn fetch_bookmarks() {
    let sut = make_sut().await;

    let result = sut
        .fetch_bookmarks(&"good-token".into(), 1, per_page(10))
        .await
        .unwrap();

    assert_eq!(result.meta.total_pages, 1);
    assert_eq!(result.items.len(), 1);
    assert_eq!(result.items[0].post.title, "Post 1");
}

#[tokio::test]
async fn fetch_bookmarks_unauthorized() {
    let sut = make_sut().await;

    let result = sut
        .fetch_bookmarks(&"bad-token".into(), 1, per_page(10))
        .await;

    assert_matches!(result, Err(BackendFetchError::Unauthorized));
}

#[tokio::test]
async fn ping() {
    let sut = make_sut().await;
    sut.ping().await.unwrap();
}

#[tokio::test]
async fn ping_unreachable() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let sut = sut_for(addr);
    assert!(sut.ping().await.is_err());
}

fn per_page(n: u64) -> PaginationLimit {
    n.try_into().unwrap()
}

async fn make_sut() -> BackendApiServiceImpl {
    let router = Router::new()
        .route("/api/news", routing::get(news))
        .route("/api/portfolio", routing::get(portfolio))
        .route("/api/bookmarks", routing::get(bookmarks))
        .route("/api/health", routing::get(|| async { Json(true) }));

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move { axum::serve(listener, router).await.unwrap() });

    sut_for(addr)
}

fn sut_for(addr: SocketAddr) -> BackendApiServiceImpl {
    let config = BackendApiServiceConfig::new(format!("http://{addr}/api").parse().unwrap());
    let http = HttpClient::new(Duration::from_secs(5)).unwrap();
    BackendApiServiceImpl::new(config, http)
}

#[derive(Deserialize)]
struct PageQuery {
    page: u64,
    per_page: u64,
}

fn post(id: u64) -> serde_json::Value {
    json!({
        "id": id,
        "title": format!("Post {id}"),
        "slug": format!("post-{id}"),
        "excerpt": "",
        "publishedAt": "2024-05-01T12:00:00Z",
    })
}

async fn news(headers: HeaderMap, Query(query): Query<PageQuery>) -> Response {
    assert_eq!(
        headers.get("user-agent").and_then(|x| x.to_str().ok()),
        Some(USER_AGENT.as_str())
    );

    let first = (query.page - 1) * query.per_page + 1;
    let items = (first..first + query.per_page).map(post).collect::<Vec<_>>();
    Json(json!({
        "items": items,
        "meta": {"currentPage": query.page, "totalPages": 4},
    }))
    .into_response()
}

async fn portfolio() -> Response {
    StatusCode::INTERNAL_SERVER_ERROR.into_response()
}

async fn bookmarks(headers: HeaderMap) -> Response {
    let authorized = headers
        .get(AUTHORIZATION)
        .is_some_and(|x| x.as_bytes() == b"Bearer good-token");
    if !authorized {
        return StatusCode::UNAUTHORIZED.into_response();
    }

    Json(json!({
        "items": [{"id": 1, "post": post(1), "createdAt": "2024-05-02T08:30:00Z"}],
        "meta": {"currentPage": 1, "totalPages": 1},
    }))
    .into_response()
}
