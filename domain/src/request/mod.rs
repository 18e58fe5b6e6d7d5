//! Request flag parsing.

pub mod flags;

pub use flags::{fuzzy_bool, parse_bool};
