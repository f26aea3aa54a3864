use std::sync::Arc;

use axum::{
    extract::{Query, State},
    response::{IntoResponse, Redirect, Response},
    routing, Json, Router,
};
use folio_core_listing_contracts::{ListingError, ListingFeatureService, ListingRequest};
use serde::Serialize;

use super::{invalid_query_string_error, invalid_token_error};
use crate::{extractors::auth::ApiToken, models::ApiPageQuery};

pub fn router<Listing: ListingFeatureService>(
    service: Listing,
    error_redirect_url: String,
) -> Router<()> {
    Router::new()
        .route("/news", routing::get(list_news))
        .route("/portfolio", routing::get(list_portfolio))
        .route("/bookmarks", routing::get(list_bookmarks))
        .with_state(Arc::new(ListingApi {
            service,
            error_redirect_url,
        }))
}

struct ListingApi<Listing> {
    service: Listing,
    /// Where to send the visitor when a list cannot be loaded
    error_redirect_url: String,
}

impl<Listing> ListingApi<Listing> {
    fn respond<T: Serialize>(&self, result: Result<T, ListingError>) -> Response {
        match result {
            Ok(page) => Json(page).into_response(),
            Err(ListingError::Unauthenticated) => invalid_token_error(),
            Err(ListingError::Other(err)) => {
                tracing::error!("failed to load list: {err:#}");
                Redirect::to(&self.error_redirect_url).into_response()
            }
        }
    }
}

async fn list_news(
    api: State<Arc<ListingApi<impl ListingFeatureService>>>,
    Query(query): Query<ApiPageQuery>,
) -> Response {
    let Ok(request) = ListingRequest::try_from(query) else {
        return invalid_query_string_error();
    };

    api.respond(api.service.list_news(request).await)
}

async fn list_portfolio(
    api: State<Arc<ListingApi<impl ListingFeatureService>>>,
    Query(query): Query<ApiPageQuery>,
) -> Response {
    let Ok(request) = ListingRequest::try_from(query) else {
        return invalid_query_string_error();
    };

    api.respond(api.service.list_portfolio(request).await)
}

async fn list_bookmarks(
    api: State<Arc<ListingApi<impl ListingFeatureService>>>,
    token: ApiToken,
    Query(query): Query<ApiPageQuery>,
) -> Response {
    let Ok(request) = ListingRequest::try_from(query) else {
        return invalid_query_string_error();
    };

    api.respond(api.service.list_bookmarks(&token.0, request).await)
}
