//! Buybox-Parser: structured offers from scraped buybox text
//!
//! This crate turns the ordered stream of visible text fragments scraped from a
//! merchant listing's buybox into one typed offer record per product condition
//! (new, or a used grade). Fragments carry no field tags; each one is classified
//! by its content and by its position relative to its neighbours.

pub mod challenge;
pub mod classify;
pub mod config;
pub mod fragment;
pub mod offer;
pub mod output;
pub mod parser;

use thiserror::Error;

/// Main error type for Buybox-Parser operations
#[derive(Debug, Error)]
pub enum BuyboxError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("Fragment input error: {0}")]
    Fragment(#[from] fragment::FragmentError),

    #[error("Output error: {0}")]
    Output(#[from] output::OutputError),

    #[error("Challenge error: {0}")]
    Challenge(#[from] challenge::ChallengeError),

    #[error("Verification challenge detected in fragment #{index} ({label}); page is not a listing")]
    ChallengeDetected { index: usize, label: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Unknown locale preset: {0}")]
    UnknownPreset(String),
}

/// Errors raised by the fragment-stream parser
///
/// Classifiers never fail; the only hard error is a fragment that carries
/// offer data while no condition has been announced yet.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("fragment #{index} ({label}) carries offer data but no condition is active: {text:?}")]
    NoActiveCondition {
        index: usize,
        label: String,
        text: String,
    },
}

/// Result type alias for Buybox-Parser operations
pub type Result<T> = std::result::Result<T, BuyboxError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Result type alias for parse operations
pub type ParseResult<T> = std::result::Result<T, ParseError>;

// Re-export commonly used types
pub use config::{Config, LocaleConfig, OrphanPolicy};
pub use fragment::Fragment;
pub use offer::{ConditionKind, DeliveryOption, DeliveryType, OfferRecord};
pub use parser::{parse_fragments, parse_report, Controller, ParseReport, ParseStats};
