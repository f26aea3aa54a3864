use std::sync::Arc;

use axum::{
    extract::{Query, State},
    response::{IntoResponse, Response},
    routing, Json, Router,
};
use folio_core_pagination_contracts::{LinkTarget, PaginationFeatureService};
use folio_models::pagination::{PaginationLinks, PaginationView};
use serde::Serialize;

use super::invalid_query_string_error;
use crate::models::ApiPaginationQuery;

pub fn router(service: Arc<impl PaginationFeatureService>) -> Router<()> {
    Router::new()
        .route("/pagination", routing::get(compute))
        .with_state(service)
}

#[derive(Serialize)]
struct PaginationResponse {
    pagination: PaginationView,
    links: PaginationLinks,
}

async fn compute(
    service: State<Arc<impl PaginationFeatureService>>,
    Query(query): Query<ApiPaginationQuery>,
) -> Response {
    let Ok(query_string) = query.query() else {
        return invalid_query_string_error();
    };

    let pagination = service.compute_view(query.total_pages(), query.current_page());
    let target = LinkTarget::new(query.base_url(), query_string);
    let links = service.build_links(&pagination, &target);

    Json(PaginationResponse { pagination, links }).into_response()
}
