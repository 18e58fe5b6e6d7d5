//! Infrastructure layer for parser-migration
//!
//! This crate contains adapters that implement the ports defined in the
//! application layer, configuration file loading, tracing setup and the
//! service wiring hosts start from.

pub mod config;
pub mod logging;
pub mod mobile;
pub mod pages;
pub mod preferences;
pub mod wiring;

// Re-export commonly used types
pub use config::{
    ConfigError, ConfigLoader, FileConfig, FileContentModelsConfig, FileNoticeConfig,
    FileParsoidConfig, FileQueryStringConfig,
};
pub use logging::{filter_for_verbosity, init_tracing};
pub use mobile::{HostnameMobileDetector, StaticMobileView};
pub use pages::InMemoryPageStore;
pub use preferences::InMemoryPreferenceStore;
pub use wiring::{ServiceWiring, load_site_configuration, validate_site_configuration};
