pub mod paginate;
pub mod serve;
