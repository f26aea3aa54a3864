use std::{net::IpAddr, sync::Arc};

use axum::Router;
use folio_core_health_contracts::HealthFeatureService;
use folio_core_listing_contracts::ListingFeatureService;
use folio_core_pagination_contracts::PaginationFeatureService;
use tokio::net::TcpListener;
use tracing::info;

mod extractors;
mod middlewares;
mod models;
mod routes;

#[cfg(test)]
mod tests;

#[derive(Debug, Clone)]
pub struct RestServer<Health, Pagination, Listing> {
    health: Health,
    pagination: Pagination,
    listing: Listing,
    config: RestServerConfig,
}

#[derive(Debug, Clone)]
pub struct RestServerConfig {
    /// Redirect target for list views whose items could not be loaded
    pub error_redirect_url: String,
}

impl<Health, Pagination, Listing> RestServer<Health, Pagination, Listing>
where
    Health: HealthFeatureService,
    Pagination: PaginationFeatureService,
    Listing: ListingFeatureService,
{
    pub fn new(
        health: Health,
        pagination: Pagination,
        listing: Listing,
        config: RestServerConfig,
    ) -> Self {
        Self {
            health,
            pagination,
            listing,
            config,
        }
    }

    pub async fn serve(self, host: IpAddr, port: u16) -> anyhow::Result<()> {
        let listener = TcpListener::bind((host, port)).await?;
        info!("Listening on {}", listener.local_addr()?);
        self.serve_on(listener).await
    }

    async fn serve_on(self, listener: TcpListener) -> anyhow::Result<()> {
        let router = self.router();
        axum::serve(listener, router).await.map_err(Into::into)
    }

    fn router(self) -> Router<()> {
        let router = Router::new()
            .merge(routes::health::router(Arc::new(self.health)))
            .merge(routes::pagination::router(Arc::new(self.pagination)))
            .merge(routes::listing::router(
                self.listing,
                self.config.error_redirect_url,
            ));

        let router = middlewares::panic_handler::add(router);
        let router = middlewares::trace::add(router);
        middlewares::request_id::add(router)
    }
}
