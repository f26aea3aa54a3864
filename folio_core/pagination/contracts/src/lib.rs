use folio_models::pagination::{PaginationLinks, PaginationView, QueryString};

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait PaginationFeatureService: Send + Sync + 'static {
    /// Computes the markers and navigation controls for the given page.
    ///
    /// Never fails: a `current_page` outside of `1..=total_pages` is treated
    /// as page `1`, and a non-positive `total_pages` yields an empty view.
    fn compute_view(&self, total_pages: i64, current_page: i64) -> PaginationView;

    /// Builds the navigation links for a previously computed view.
    fn build_links(&self, view: &PaginationView, target: &LinkTarget) -> PaginationLinks;
}

/// Where the links of a pagination control point to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkTarget {
    pub base_url: String,
    /// Appended to every link after the page parameter
    pub query: Option<QueryString>,
}

impl LinkTarget {
    pub fn new(base_url: impl Into<String>, query: Option<QueryString>) -> Self {
        Self {
            base_url: base_url.into(),
            query,
        }
    }
}

#[cfg(feature = "mock")]
impl MockPaginationFeatureService {
    pub fn with_compute_view(
        mut self,
        total_pages: i64,
        current_page: i64,
        result: PaginationView,
    ) -> Self {
        self.expect_compute_view()
            .once()
            .with(
                mockall::predicate::eq(total_pages),
                mockall::predicate::eq(current_page),
            )
            .return_once(|_, _| result);
        self
    }

    pub fn with_build_links(
        mut self,
        view: PaginationView,
        target: LinkTarget,
        result: PaginationLinks,
    ) -> Self {
        self.expect_build_links()
            .once()
            .with(mockall::predicate::eq(view), mockall::predicate::eq(target))
            .return_once(|_, _| result);
        self
    }
}
