//! Configuration file loading for parser-migration
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `PARSER_MIGRATION_*` environment variables
//! 2. Explicitly given file
//! 3. Project root: `./parser-migration.toml` or `./.parser-migration.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/parser-migration/config.toml`
//! 5. Default values

mod error;
mod file_config;
mod loader;

pub use error::ConfigError;
pub use file_config::{
    FileConfig, FileContentModelsConfig, FileNoticeConfig, FileParsoidConfig,
    FileQueryStringConfig,
};
pub use loader::{ConfigLoader, ENV_PREFIX};
