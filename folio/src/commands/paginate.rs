use anyhow::Context;
use clap::Args;
use folio_config::Config;
use folio_core_pagination_contracts::{LinkTarget, PaginationFeatureService};
use folio_core_pagination_impl::{PaginationFeatureConfig, PaginationFeatureServiceImpl};
use folio_models::pagination::{PageLink, PageMarker, PaginationLinks, PaginationView, QueryString};
use serde_json::json;

#[derive(Debug, Args)]
pub struct PaginateCommand {
    /// The total number of pages of the list
    #[arg(long, allow_negative_numbers = true)]
    total_pages: i64,
    /// The requested page
    #[arg(long, allow_negative_numbers = true, default_value = "1")]
    current_page: i64,
    /// The url the page links point to
    #[arg(long, default_value = "/")]
    base_url: String,
    /// Additional query string appended to every page link
    #[arg(long)]
    query: Option<String>,
    /// Print the result as json
    #[arg(long)]
    json: bool,
}

impl PaginateCommand {
    pub fn invoke(self, config: &Config) -> anyhow::Result<()> {
        let query = self
            .query
            .as_deref()
            .map(QueryString::parse_optional)
            .transpose()
            .context("Invalid query string")?
            .flatten();

        let service = PaginationFeatureServiceImpl::new(PaginationFeatureConfig {
            page_param: config.pagination.page_param.clone(),
        });
        let view = service.compute_view(self.total_pages, self.current_page);
        let links = service.build_links(&view, &LinkTarget::new(self.base_url, query));

        if self.json {
            let output = json!({"pagination": view, "links": links});
            println!("{}", serde_json::to_string_pretty(&output)?);
        } else {
            println!("{}", render(&view));
            for line in render_links(&links) {
                println!("{line}");
            }
        }

        Ok(())
    }
}

/// Renders the pagination control as a single line, e.g. `< 1 ... 4 [5] 6 ... 10 >`.
fn render(view: &PaginationView) -> String {
    if view.markers.is_empty() {
        return "(no pages)".into();
    }

    let previous = view.show_previous.then_some("<".to_owned());
    let next = view.show_next.then_some(">".to_owned());
    let markers = view.markers.iter().map(|marker| match *marker {
        PageMarker::Page(n) if n == view.effective_current_page => format!("[{n}]"),
        PageMarker::Page(n) => n.to_string(),
        PageMarker::Ellipsis => "...".into(),
    });

    previous
        .into_iter()
        .chain(markers)
        .chain(next)
        .collect::<Vec<_>>()
        .join(" ")
}

fn render_links(links: &PaginationLinks) -> Vec<String> {
    let previous = links.previous.iter().map(|href| format!("previous: {href}"));
    let pages = links.pages.iter().filter_map(|link| match link {
        PageLink::Page { number, href, .. } => Some(format!("{number}: {href}")),
        PageLink::Ellipsis => None,
    });
    let next = links.next.iter().map(|href| format!("next: {href}"));

    previous.chain(pages).chain(next).collect()
}
