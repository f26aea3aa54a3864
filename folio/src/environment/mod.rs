use std::sync::Arc;

use folio_api_rest::RestServerConfig;
use folio_config::Config;
use folio_core_health_impl::HealthFeatureConfig;
use folio_core_listing_impl::{ListingBaseUrls, ListingFeatureConfig};
use folio_core_pagination_impl::PaginationFeatureConfig;
use folio_extern_impl::{backend::BackendApiServiceConfig, http::HttpClient};
use types::{Backend, Health, Listing, Pagination, RestServer};

pub mod types;

/// All services of the application, wired up from the config.
#[derive(Debug, Clone)]
pub struct Environment {
    pub backend: Backend,
    pub pagination: Pagination,
    pub listing: Listing,
    pub health: Health,
    rest_server_config: RestServerConfig,
}

impl Environment {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        // Extern
        let http = HttpClient::new(config.backend.timeout.into())?;
        let backend = Backend::new(BackendApiServiceConfig::new(config.backend.url.clone()), http);

        // Core
        let pagination = Pagination::new(PaginationFeatureConfig {
            page_param: config.pagination.page_param.clone(),
        });

        let listing = Listing::new(
            backend.clone(),
            pagination.clone(),
            ListingFeatureConfig {
                per_page: config.pagination.per_page,
                base_urls: Arc::new(ListingBaseUrls {
                    news: config.listing.news_url.clone(),
                    portfolio: config.listing.portfolio_url.clone(),
                    bookmarks: config.listing.bookmarks_url.clone(),
                }),
            },
        );

        let health = Health::new(
            backend.clone(),
            HealthFeatureConfig {
                cache_ttl: config.health.cache_ttl.into(),
            },
        );

        // API
        let rest_server_config = RestServerConfig {
            error_redirect_url: config.listing.error_redirect_url.clone(),
        };

        Ok(Self {
            backend,
            pagination,
            listing,
            health,
            rest_server_config,
        })
    }

    pub fn rest_server(self) -> RestServer {
        RestServer::new(
            self.health,
            self.pagination,
            self.listing,
            self.rest_server_config,
        )
    }
}
