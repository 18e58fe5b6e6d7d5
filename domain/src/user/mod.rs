//! User identity and migration preferences.

pub mod identity;
pub mod preference;
