use std::future::Future;

use folio_models::{
    auth::AccessToken,
    listing::{Bookmark, NewsPost, PortfolioEntry, RemotePage},
    pagination::PaginationLimit,
};
use thiserror::Error;

/// Client for the external backend API that owns all content.
#[cfg_attr(feature = "mock", mockall::automock)]
pub trait BackendApiService: Send + Sync + 'static {
    /// Fetch one page of published news posts.
    fn fetch_news(
        &self,
        page: u64,
        per_page: PaginationLimit,
    ) -> impl Future<Output = Result<RemotePage<NewsPost>, BackendFetchError>> + Send;

    /// Fetch one page of portfolio entries.
    fn fetch_portfolio(
        &self,
        page: u64,
        per_page: PaginationLimit,
    ) -> impl Future<Output = Result<RemotePage<PortfolioEntry>, BackendFetchError>> + Send;

    /// Fetch one page of the bookmarks of the user the token belongs to.
    fn fetch_bookmarks(
        &self,
        token: &AccessToken,
        page: u64,
        per_page: PaginationLimit,
    ) -> impl Future<Output = Result<RemotePage<Bookmark>, BackendFetchError>> + Send;

    /// Check whether the backend API is reachable.
    fn ping(&self) -> impl Future<Output = anyhow::Result<()>> + Send;
}

#[derive(Debug, Error)]
pub enum BackendFetchError {
    #[error("The backend rejected the access token.")]
    Unauthorized,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[cfg(feature = "mock")]
impl MockBackendApiService {
    pub fn with_fetch_news(
        mut self,
        page: u64,
        per_page: PaginationLimit,
        result: Result<RemotePage<NewsPost>, BackendFetchError>,
    ) -> Self {
        self.expect_fetch_news()
            .once()
            .with(
                mockall::predicate::eq(page),
                mockall::predicate::eq(per_page),
            )
            .return_once(|_, _| Box::pin(std::future::ready(result)));
        self
    }

    pub fn with_fetch_portfolio(
        mut self,
        page: u64,
        per_page: PaginationLimit,
        result: Result<RemotePage<PortfolioEntry>, BackendFetchError>,
    ) -> Self {
        self.expect_fetch_portfolio()
            .once()
            .with(
                mockall::predicate::eq(page),
                mockall::predicate::eq(per_page),
            )
            .return_once(|_, _| Box::pin(std::future::ready(result)));
        self
    }

    pub fn with_fetch_bookmarks(
        mut self,
        token: AccessToken,
        page: u64,
        per_page: PaginationLimit,
        result: Result<RemotePage<Bookmark>, BackendFetchError>,
    ) -> Self {
        self.expect_fetch_bookmarks()
            .once()
            .with(
                mockall::predicate::eq(token),
                mockall::predicate::eq(page),
                mockall::predicate::eq(per_page),
            )
            .return_once(|_, _, _| Box::pin(std::future::ready(result)));
        self
    }

    pub fn with_ping(mut self, ok: bool) -> Self {
        self.expect_ping().once().return_once(move || {
            Box::pin(std::future::ready(if ok {
                Ok(())
            } else {
                Err(anyhow::anyhow!("connection refused"))
            }))
        });
        self
    }
}
