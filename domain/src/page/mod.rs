//! Page identity and content.

pub mod content;
pub mod identity;
