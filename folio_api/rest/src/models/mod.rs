use folio_core_listing_contracts::ListingRequest;
use folio_models::pagination::{QueryString, QueryStringError};
use serde::{Deserialize, Serialize};

#[derive(Serialize)]
pub struct ApiError {
    pub detail: &'static str,
}

/// Query parameters of the list views.
///
/// The page number is parsed leniently: anything that is not an integer
/// requests the first page.
#[derive(Debug, Default, Deserialize)]
pub struct ApiPageQuery {
    #[serde(default)]
    pub page: Option<String>,
    #[serde(default)]
    pub query: Option<String>,
}

impl ApiPageQuery {
    pub fn page(&self) -> i64 {
        parse_number(self.page.as_deref()).unwrap_or(1)
    }
}

impl TryFrom<ApiPageQuery> for ListingRequest {
    type Error = QueryStringError;

    fn try_from(value: ApiPageQuery) -> Result<Self, Self::Error> {
        Ok(Self {
            page: value.page(),
            query: parse_query_string(value.query.as_deref())?,
        })
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct ApiPaginationQuery {
    #[serde(default)]
    pub total_pages: Option<String>,
    #[serde(default)]
    pub current_page: Option<String>,
    #[serde(default)]
    pub base_url: Option<String>,
    #[serde(default)]
    pub query: Option<String>,
}

impl ApiPaginationQuery {
    pub fn total_pages(&self) -> i64 {
        parse_number(self.total_pages.as_deref()).unwrap_or(0)
    }

    pub fn current_page(&self) -> i64 {
        parse_number(self.current_page.as_deref()).unwrap_or(1)
    }

    pub fn base_url(&self) -> &str {
        self.base_url
            .as_deref()
            .filter(|x| !x.is_empty())
            .unwrap_or("/")
    }

    pub fn query(&self) -> Result<Option<QueryString>, QueryStringError> {
        parse_query_string(self.query.as_deref())
    }
}

fn parse_number(value: Option<&str>) -> Option<i64> {
    value?.trim().parse().ok()
}

fn parse_query_string(value: Option<&str>) -> Result<Option<QueryString>, QueryStringError> {
    value.map_or(Ok(None), QueryString::parse_optional)
}
