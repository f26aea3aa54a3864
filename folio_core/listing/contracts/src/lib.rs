use std::future::Future;

use folio_models::{
    auth::AccessToken,
    listing::{Bookmark, ListingPage, NewsPost, PortfolioEntry},
    pagination::QueryString,
};
use thiserror::Error;

/// The paginated list views of the site.
#[cfg_attr(feature = "mock", mockall::automock)]
pub trait ListingFeatureService: Send + Sync + 'static {
    /// Return one page of news posts.
    fn list_news(
        &self,
        request: ListingRequest,
    ) -> impl Future<Output = Result<ListingPage<NewsPost>, ListingError>> + Send;

    /// Return one page of portfolio entries.
    fn list_portfolio(
        &self,
        request: ListingRequest,
    ) -> impl Future<Output = Result<ListingPage<PortfolioEntry>, ListingError>> + Send;

    /// Return one page of the bookmarks of the user the token belongs to.
    fn list_bookmarks(
        &self,
        token: &AccessToken,
        request: ListingRequest,
    ) -> impl Future<Output = Result<ListingPage<Bookmark>, ListingError>> + Send;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingRequest {
    /// The requested page. Anything below `1` requests the first page.
    pub page: i64,
    /// Carried over into every pagination link
    pub query: Option<QueryString>,
}

impl Default for ListingRequest {
    fn default() -> Self {
        Self {
            page: 1,
            query: None,
        }
    }
}

#[derive(Debug, Error)]
pub enum ListingError {
    #[error("The access token is missing or has been rejected.")]
    Unauthenticated,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[cfg(feature = "mock")]
impl MockListingFeatureService {
    pub fn with_list_news(
        mut self,
        request: ListingRequest,
        result: Result<ListingPage<NewsPost>, ListingError>,
    ) -> Self {
        self.expect_list_news()
            .once()
            .with(mockall::predicate::eq(request))
            .return_once(|_| Box::pin(std::future::ready(result)));
        self
    }

    pub fn with_list_portfolio(
        mut self,
        request: ListingRequest,
        result: Result<ListingPage<PortfolioEntry>, ListingError>,
    ) -> Self {
        self.expect_list_portfolio()
            .once()
            .with(mockall::predicate::eq(request))
            .return_once(|_| Box::pin(std::future::ready(result)));
        self
    }

    pub fn with_list_bookmarks(
        mut self,
        token: AccessToken,
        request: ListingRequest,
        result: Result<ListingPage<Bookmark>, ListingError>,
    ) -> Self {
        self.expect_list_bookmarks()
            .once()
            .with(
                mockall::predicate::eq(token),
                mockall::predicate::eq(request),
            )
            .return_once(|_, _| Box::pin(std::future::ready(result)));
        self
    }
}
