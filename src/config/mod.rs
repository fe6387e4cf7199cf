//! Configuration module for wordlist-dedup.
//!
//! This module handles:
//! - Loading configuration from TOML files
//! - CLI argument merging (see `cli::Args`)
//! - Configuration validation

pub mod loader;
pub mod modes;
pub mod validation;

pub use loader::{Config, CONFIG_FILE_NAME};
pub use modes::ScanMode;
pub use validation::validate_config;
