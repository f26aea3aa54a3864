use folio_core_pagination_contracts::{LinkTarget, MockPaginationFeatureService};
use folio_models::pagination::QueryString;
use pretty_assertions::assert_eq;
use reqwest::StatusCode;
use serde_json::json;

use super::{client, start, view_and_links, Sut};

#[tokio::test]
async fn ok() {
    // Arrange
    let query = QueryString::try_new("tag=rust").unwrap();
    let (view, links) = view_and_links("/news");
    let pagination = MockPaginationFeatureService::new()
        .with_compute_view(2, 1, view.clone())
        .with_build_links(view, LinkTarget::new("/news", Some(query)), links);
    let base = start(Sut {
        pagination,
        ..Sut::default()
    })
    .await;

    // Act
    let response = client()
        .get(format!("{base}/pagination"))
        .query(&[
            ("total_pages", "2"),
            ("current_page", "1"),
            ("base_url", "/news"),
            ("query", "tag=rust"),
        ])
        .send()
        .await
        .unwrap();

    // Assert
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.json::<serde_json::Value>().await.unwrap(),
        json!({
            "pagination": {
                "effective_current_page": 1,
                "markers": [
                    {"type": "page", "number": 1},
                    {"type": "page", "number": 2},
                ],
                "show_previous": false,
                "show_next": true,
            },
            "links": {
                "previous": null,
                "pages": [
                    {"type": "page", "number": 1, "href": "/news?page=1", "current": true},
                    {"type": "page", "number": 2, "href": "/news?page=2", "current": false},
                ],
                "next": "/news?page=2",
            },
        })
    );
}

#[tokio::test]
async fn defaults() {
    // Arrange
    let (view, links) = view_and_links("/");
    let pagination = MockPaginationFeatureService::new()
        .with_compute_view(0, 1, view.clone())
        .with_build_links(view, LinkTarget::new("/", None), links);
    let base = start(Sut {
        pagination,
        ..Sut::default()
    })
    .await;

    // Act
    let response = client()
        .get(format!("{base}/pagination?current_page=abc"))
        .send()
        .await
        .unwrap();

    // Assert
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn invalid_query_string() {
    let base = start(Sut::default()).await;

    let response = client()
        .get(format!("{base}/pagination"))
        .query(&[("total_pages", "3"), ("query", "&tag=rust")])
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        response.json::<serde_json::Value>().await.unwrap(),
        json!({"detail": "Invalid query string"})
    );
}
