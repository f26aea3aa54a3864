use std::ops::RangeInclusive;

use folio_models::pagination::{PageMarker, PaginationView};

/// Lists with at most this many pages show every page number.
const ALL_PAGES_THRESHOLD: u64 = 5;

/// Length of the leading window shown while the current page is near the start.
const LEADING_WINDOW: u64 = 4;

/// Computes the pagination view for `current_page` out of `total_pages`.
pub fn compute(total_pages: i64, current_page: i64) -> PaginationView {
    let Some(total) = u64::try_from(total_pages).ok().filter(|&t| t > 0) else {
        return PaginationView::empty();
    };

    let current = u64::try_from(current_page)
        .ok()
        .filter(|p| (1..=total).contains(p))
        .unwrap_or(1);

    let window = main_window(total, current);
    let includes_first = window.contains(&1);
    let includes_last = window.contains(&total);

    let mut markers = Vec::new();
    if !includes_first {
        markers.push(PageMarker::Page(1));
        if current > 3 {
            markers.push(PageMarker::Ellipsis);
        }
    }
    markers.extend(window.filter(|&p| p <= total).map(PageMarker::Page));
    if !includes_last {
        if current + 2 < total {
            markers.push(PageMarker::Ellipsis);
        }
        markers.push(PageMarker::Page(total));
    }

    PaginationView {
        effective_current_page: current,
        markers,
        show_previous: current > 1,
        show_next: current < total,
    }
}

/// The raw window around `current`. It may extend one page past `total`.
fn main_window(total: u64, current: u64) -> RangeInclusive<u64> {
    if total <= ALL_PAGES_THRESHOLD {
        1..=total
    } else if current > 2 {
        current - 1..=current + 1
    } else {
        1..=LEADING_WINDOW.min(total)
    }
}
