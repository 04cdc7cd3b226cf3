//! Configuration module for Buybox-Parser
//!
//! This module handles loading, parsing, and validating TOML configuration
//! files. A configuration is mostly a locale marker table: every literal the
//! classifiers look for (condition markers, currency symbol, month names...).
//!
//! # Example
//!
//! ```no_run
//! use buybox_parser::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("locale.toml")).unwrap();
//! println!("Delivery keyword: {}", config.locale.delivery_keyword);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{Config, LocaleConfig, OrphanPolicy, ParserConfig};

// Re-export parser functions
pub use parser::{compute_config_hash, load_config, load_config_with_hash, parse_config};
pub use validation::validate_locale;
