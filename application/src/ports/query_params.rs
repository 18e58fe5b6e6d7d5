//! Request query parameter port

use std::collections::{BTreeMap, HashMap};

/// Name of the query parameter that overrides the render engine.
pub const USE_PARSOID_PARAM: &str = "useparsoid";

/// Read access to the current request's query parameters.
pub trait QueryParams: Send + Sync {
    fn get(&self, name: &str) -> Option<&str>;
}

impl QueryParams for HashMap<String, String> {
    fn get(&self, name: &str) -> Option<&str> {
        HashMap::get(self, name).map(String::as_str)
    }
}

impl QueryParams for BTreeMap<String, String> {
    fn get(&self, name: &str) -> Option<&str> {
        BTreeMap::get(self, name).map(String::as_str)
    }
}

/// A request without query parameters.
pub struct NoQueryParams;

impl QueryParams for NoQueryParams {
    fn get(&self, _name: &str) -> Option<&str> {
        None
    }
}
