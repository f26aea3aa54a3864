use folio_core_pagination_contracts::{LinkTarget, PaginationFeatureService};
use folio_models::pagination::{PageQueryParam, PaginationLinks, PaginationView};

pub mod links;
pub mod window;

#[derive(Debug, Clone, Default)]
pub struct PaginationFeatureServiceImpl {
    config: PaginationFeatureConfig,
}

#[derive(Debug, Clone, Default)]
pub struct PaginationFeatureConfig {
    pub page_param: PageQueryParam,
}

impl PaginationFeatureServiceImpl {
    pub fn new(config: PaginationFeatureConfig) -> Self {
        Self { config }
    }
}

impl PaginationFeatureService for PaginationFeatureServiceImpl {
    fn compute_view(&self, total_pages: i64, current_page: i64) -> PaginationView {
        window::compute(total_pages, current_page)
    }

    fn build_links(&self, view: &PaginationView, target: &LinkTarget) -> PaginationLinks {
        links::build(view, target, &self.config.page_param)
    }
}

#[cfg(test)]
mod tests {
    use folio_models::pagination::{PageLink, PageMarker};

    use super::*;

    #[test]
    fn compute_view() {
        // Arrange
        let sut = PaginationFeatureServiceImpl::default();

        // Act
        let result = sut.compute_view(10, 10);

        // Assert
        assert_eq!(
            result.markers,
            [
                PageMarker::Page(1),
                PageMarker::Ellipsis,
                PageMarker::Page(9),
                PageMarker::Page(10)
            ]
        );
        assert!(result.show_previous);
        assert!(!result.show_next);
    }

    #[test]
    fn build_links_uses_configured_param() {
        // Arrange
        let sut = PaginationFeatureServiceImpl::new(PaginationFeatureConfig {
            page_param: "seite".try_into().unwrap(),
        });
        let view = sut.compute_view(2, 2);

        // Act
        let result = sut.build_links(&view, &LinkTarget::new("/bookmarks", None));

        // Assert
        assert_eq!(result.previous.as_deref(), Some("/bookmarks?seite=1"));
        assert_eq!(result.next, None);
        assert_eq!(
            result.pages[1],
            PageLink::Page {
                number: 2,
                href: "/bookmarks?seite=2".into(),
                current: true
            }
        );
    }
}
