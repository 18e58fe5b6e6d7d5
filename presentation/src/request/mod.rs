//! Request-side helpers: query string parsing and local link building

pub mod links;
pub mod query;

pub use links::LinkBuilder;
pub use query::RequestQuery;
