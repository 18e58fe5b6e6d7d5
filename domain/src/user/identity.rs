//! User identity reference.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque reference to the user a request is made for.
///
/// The policy layer only passes this through to the preference store,
/// enablement hooks and renderers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserIdentity {
    /// Local user id; `0` for anonymous users
    pub id: u64,
    pub name: String,
}

impl UserIdentity {
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    /// An anonymous (logged-out) user identified by IP or session name.
    pub fn anonymous(name: impl Into<String>) -> Self {
        Self::new(0, name)
    }

    pub fn is_registered(&self) -> bool {
        self.id != 0
    }
}

impl fmt::Display for UserIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
