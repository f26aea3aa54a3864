use folio_core_health_impl::HealthFeatureServiceImpl;
use folio_core_listing_impl::ListingFeatureServiceImpl;
use folio_core_pagination_impl::PaginationFeatureServiceImpl;
use folio_extern_impl::backend::BackendApiServiceImpl;

// API
pub type RestServer = folio_api_rest::RestServer<Health, Pagination, Listing>;

// Extern
pub type Backend = BackendApiServiceImpl;

// Core
pub type Health = HealthFeatureServiceImpl<Backend>;
pub type Listing = ListingFeatureServiceImpl<Backend, Pagination>;
pub type Pagination = PaginationFeatureServiceImpl;
