//! Configuration module for seo-lens
//!
//! This module handles loading, parsing, and validating TOML configuration files.
//! Every key has a default, so running without a file is the common case.
//!
//! # Example
//!
//! ```no_run
//! use seo_lens::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("seo-lens.toml")).unwrap();
//! println!("Reports go to: {}", config.report.output_dir);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{Config, FetcherConfig, PageSpeedConfig, ReportConfig};

// Re-export parser functions
pub use parser::{load_config, load_config_or_default, parse_config};
