//! Configuration management.
//!
//! Settings are loaded from a TOML file and can be overridden by
//! command line arguments and environment variables.

pub mod loader;
pub mod modes;
pub mod validation;

pub use loader::{Config, CredentialsConfig, OptionsConfig, QueryConfig};
pub use modes::{SortOrder, TimeFilter};
pub use validation::{config_warnings, parse_source, validate_config};
