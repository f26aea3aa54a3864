pub mod auth;
pub mod listing;
pub mod pagination;
