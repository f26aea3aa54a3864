use folio_core_pagination_contracts::LinkTarget;
use folio_models::pagination::{
    PageLink, PageMarker, PageQueryParam, PaginationLinks, PaginationView,
};
use folio_utils::Apply;

pub fn build(view: &PaginationView, target: &LinkTarget, param: &PageQueryParam) -> PaginationLinks {
    let current = view.effective_current_page;
    let href = |page| page_href(target, param, page);

    PaginationLinks {
        previous: view.show_previous.then(|| href(current - 1)),
        pages: view
            .markers
            .iter()
            .map(|&marker| match marker {
                PageMarker::Page(number) => PageLink::Page {
                    number,
                    href: href(number),
                    current: number == current,
                },
                PageMarker::Ellipsis => PageLink::Ellipsis,
            })
            .collect(),
        next: view.show_next.then(|| href(current + 1)),
    }
}

fn page_href(target: &LinkTarget, param: &PageQueryParam, page: u64) -> String {
    let base_url = target.base_url.as_str();
    let separator = match base_url.chars().last() {
        Some('?' | '&') => "",
        _ if base_url.contains('?') => "&",
        _ => "?",
    };

    format!("{base_url}{separator}{}={page}", **param)
        .apply_map(target.query.as_ref(), |href, query| {
            format!("{href}&{}", **query)
        })
}
