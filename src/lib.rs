pub mod alert;
pub mod feed;
pub mod filter;
pub mod model;
pub mod notify;
pub mod summary;
pub mod utils;
pub mod valuation;
