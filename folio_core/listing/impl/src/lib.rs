use std::sync::Arc;

use folio_core_listing_contracts::{ListingError, ListingFeatureService, ListingRequest};
use folio_core_pagination_contracts::{LinkTarget, PaginationFeatureService};
use folio_extern_contracts::backend::{BackendApiService, BackendFetchError};
use folio_models::{
    auth::AccessToken,
    listing::{Bookmark, ListingKind, ListingPage, NewsPost, PortfolioEntry, RemotePage},
    pagination::PaginationLimit,
};
use tracing::{debug, warn};

#[cfg(test)]
mod tests;

#[derive(Debug, Clone)]
pub struct ListingFeatureServiceImpl<Backend, Pagination> {
    backend: Backend,
    pagination: Pagination,
    config: ListingFeatureConfig,
}

#[derive(Debug, Clone)]
pub struct ListingFeatureConfig {
    pub per_page: PaginationLimit,
    pub base_urls: Arc<ListingBaseUrls>,
}

/// Public URLs of the list views, used as the base of pagination links.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingBaseUrls {
    pub news: String,
    pub portfolio: String,
    pub bookmarks: String,
}

impl ListingBaseUrls {
    pub fn get(&self, kind: ListingKind) -> &str {
        match kind {
            ListingKind::News => &self.news,
            ListingKind::Portfolio => &self.portfolio,
            ListingKind::Bookmarks => &self.bookmarks,
        }
    }
}

impl<Backend, Pagination> ListingFeatureServiceImpl<Backend, Pagination> {
    pub fn new(backend: Backend, pagination: Pagination, config: ListingFeatureConfig) -> Self {
        Self {
            backend,
            pagination,
            config,
        }
    }
}

impl<Backend, Pagination> ListingFeatureServiceImpl<Backend, Pagination>
where
    Pagination: PaginationFeatureService,
{
    fn assemble<T>(
        &self,
        kind: ListingKind,
        request: ListingRequest,
        remote: RemotePage<T>,
    ) -> ListingPage<T> {
        let RemotePage { items, meta } = remote;

        let pagination = self
            .pagination
            .compute_view(meta.total_pages, meta.current_page);
        debug!(
            %kind,
            total_pages = meta.total_pages,
            current_page = meta.current_page,
            effective_current_page = pagination.effective_current_page,
            "computed pagination view"
        );

        let target = LinkTarget::new(self.config.base_urls.get(kind), request.query);
        let links = self.pagination.build_links(&pagination, &target);

        ListingPage {
            items,
            pagination,
            links,
        }
    }
}

impl<Backend, Pagination> ListingFeatureService for ListingFeatureServiceImpl<Backend, Pagination>
where
    Backend: BackendApiService,
    Pagination: PaginationFeatureService,
{
    async fn list_news(
        &self,
        request: ListingRequest,
    ) -> Result<ListingPage<NewsPost>, ListingError> {
        let kind = ListingKind::News;
        let remote = self
            .backend
            .fetch_news(requested_page(request.page), self.config.per_page)
            .await
            .map_err(|err| fetch_error(kind, err))?;

        Ok(self.assemble(kind, request, remote))
    }

    async fn list_portfolio(
        &self,
        request: ListingRequest,
    ) -> Result<ListingPage<PortfolioEntry>, ListingError> {
        let kind = ListingKind::Portfolio;
        let remote = self
            .backend
            .fetch_portfolio(requested_page(request.page), self.config.per_page)
            .await
            .map_err(|err| fetch_error(kind, err))?;

        Ok(self.assemble(kind, request, remote))
    }

    async fn list_bookmarks(
        &self,
        token: &AccessToken,
        request: ListingRequest,
    ) -> Result<ListingPage<Bookmark>, ListingError> {
        if token.is_empty() {
            return Err(ListingError::Unauthenticated);
        }

        let kind = ListingKind::Bookmarks;
        let remote = self
            .backend
            .fetch_bookmarks(token, requested_page(request.page), self.config.per_page)
            .await
            .map_err(|err| fetch_error(kind, err))?;

        Ok(self.assemble(kind, request, remote))
    }
}

/// The page to ask the backend for. Pages below `1` are requested as `1`.
fn requested_page(page: i64) -> u64 {
    u64::try_from(page).ok().filter(|&p| p >= 1).unwrap_or(1)
}

fn fetch_error(kind: ListingKind, err: BackendFetchError) -> ListingError {
    match err {
        BackendFetchError::Unauthorized => ListingError::Unauthenticated,
        BackendFetchError::Other(err) => {
            warn!(%kind, "failed to fetch listing: {err:#}");
            ListingError::Other(err.context(format!("Failed to fetch {kind}")))
        }
    }
}
