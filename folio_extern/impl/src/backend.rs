use std::sync::Arc;

use anyhow::Context;
use folio_extern_contracts::backend::{BackendApiService, BackendFetchError};
use folio_models::{
    auth::AccessToken,
    listing::{Bookmark, ListingKind, NewsPost, PortfolioEntry, RemotePage},
    pagination::PaginationLimit,
};
use folio_utils::Apply;
use reqwest::StatusCode;
use serde::{de::DeserializeOwned, Serialize};
use tracing::debug;
use url::Url;

use crate::http::HttpClient;

#[derive(Debug, Clone)]
pub struct BackendApiServiceImpl {
    config: BackendApiServiceConfig,
    http: HttpClient,
}

#[derive(Debug, Clone)]
pub struct BackendApiServiceConfig {
    base_url: Arc<Url>,
}

impl BackendApiServiceConfig {
    /// Relative paths are resolved against `base_url`, so it is treated as a
    /// directory even without a trailing slash.
    pub fn new(mut base_url: Url) -> Self {
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }
        Self {
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }
}

impl BackendApiServiceImpl {
    pub fn new(config: BackendApiServiceConfig, http: HttpClient) -> Self {
        Self { config, http }
    }

    async fn fetch_page<T: DeserializeOwned>(
        &self,
        kind: ListingKind,
        token: Option<&AccessToken>,
        page: u64,
        per_page: PaginationLimit,
    ) -> Result<RemotePage<T>, BackendFetchError> {
        let url = self
            .config
            .base_url
            .join(kind.backend_path())
            .with_context(|| format!("Failed to build {kind} URL"))?;

        debug!(%url, page, per_page = *per_page, "fetching {kind} page");

        let response = self
            .http
            .get(url)
            .query(&PageRequest {
                page,
                per_page: *per_page,
            })
            .apply_map(token, |request, token| request.bearer_auth(&**token))
            .send()
            .await
            .with_context(|| format!("Failed to send {kind} request"))?;

        if matches!(
            response.status(),
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN
        ) {
            return Err(BackendFetchError::Unauthorized);
        }

        response
            .error_for_status()
            .with_context(|| format!("{kind} request returned an error"))?
            .json::<RemotePage<T>>()
            .await
            .with_context(|| format!("Failed to deserialize {kind} response"))
            .map_err(Into::into)
    }
}

impl BackendApiService for BackendApiServiceImpl {
    async fn fetch_news(
        &self,
        page: u64,
        per_page: PaginationLimit,
    ) -> Result<RemotePage<NewsPost>, BackendFetchError> {
        self.fetch_page(ListingKind::News, None, page, per_page)
            .await
    }

    async fn fetch_portfolio(
        &self,
        page: u64,
        per_page: PaginationLimit,
    ) -> Result<RemotePage<PortfolioEntry>, BackendFetchError> {
        self.fetch_page(ListingKind::Portfolio, None, page, per_page)
            .await
    }

    async fn fetch_bookmarks(
        &self,
        token: &AccessToken,
        page: u64,
        per_page: PaginationLimit,
    ) -> Result<RemotePage<Bookmark>, BackendFetchError> {
        self.fetch_page(ListingKind::Bookmarks, Some(token), page, per_page)
            .await
    }

    async fn ping(&self) -> anyhow::Result<()> {
        let url = self
            .config
            .base_url
            .join("health")
            .context("Failed to build health URL")?;

        self.http
            .get(url)
            .send()
            .await
            .context("Failed to send health request")?
            .error_for_status()
            .context("Health request returned an error")
            .map(|_| ())
    }
}

#[derive(Serialize)]
struct PageRequest {
    page: u64,
    per_page: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_is_treated_as_directory() {
        for base_url in ["http://backend.local/api", "http://backend.local/api/"] {
            let config = BackendApiServiceConfig::new(base_url.parse().unwrap());
            assert_eq!(
                config.base_url().join("news").unwrap().as_str(),
                "http://backend.local/api/news"
            );
        }
    }
}
