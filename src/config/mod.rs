//! Configuration module for Pubtrawl
//!
//! This module handles loading, parsing, and validating TOML configuration files.
//! Every table falls back to defaults targeting the Coventry University
//! research portal.
//!
//! # Example
//!
//! ```no_run
//! use pubtrawl::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("pubtrawl.toml")).unwrap();
//! println!("Crawler will fetch at most {} pages", config.crawler.max_pages);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{
    Config, CrawlerConfig, OutputConfig, SelectorConfig, SiteConfig, UserAgentConfig,
};

// Re-export parser functions
pub use parser::{compute_config_hash, load_config, load_config_with_hash};
pub use validation::validate;
