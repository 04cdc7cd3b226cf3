use crate::config::types::Config;
use crate::config::validation::validate;
use crate::ConfigError;
use sha2::{Digest, Sha256};
use std::path::Path;

/// Loads and parses a configuration file from the given path
///
/// # Arguments
///
/// * `path` - Path to the TOML configuration file
///
/// # Returns
///
/// * `Ok(Config)` - Successfully loaded and validated configuration
/// * `Err(ConfigError)` - Failed to load, parse, or validate the configuration
///
/// # Example
///
/// ```no_run
/// use std::path::Path;
/// use buybox_parser::config::load_config;
///
/// let config = load_config(Path::new("locale.toml")).unwrap();
/// println!("Locale: {}", config.locale.name);
/// ```
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    parse_config(&content)
}

/// Parses and validates configuration from TOML text
pub fn parse_config(content: &str) -> Result<Config, ConfigError> {
    let config: Config = toml::from_str(content)?;

    validate(&config)?;

    Ok(config)
}

/// Computes a SHA-256 hash of the configuration file content
///
/// Reports carry this hash so that results produced with different marker
/// tables can be told apart.
///
/// # Arguments
///
/// * `path` - Path to the TOML configuration file
///
/// # Returns
///
/// * `Ok(String)` - Hex-encoded SHA-256 hash of the file content
/// * `Err(ConfigError)` - Failed to read the file
pub fn compute_config_hash(path: &Path) -> Result<String, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    Ok(hash_content(&content))
}

fn hash_content(content: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    hex::encode(hasher.finalize())
}

/// Loads a configuration and returns both the config and its hash
pub fn load_config_with_hash(path: &Path) -> Result<(Config, String), ConfigError> {
    let content = std::fs::read_to_string(path)?;
    let config = parse_config(&content)?;
    Ok((config, hash_content(&content)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OrphanPolicy;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    const GERMAN: &str = r#"
[locale]
name = "de"
new-marker = "Neu:"
new-label = "Neu"
used-marker = "Gebraucht"
grade-delimiter = " – "
currency-symbol = "€"
thousands-separator = "."
delivery-keyword = "Lieferung"
free-marker = "GRATIS"
expedited-marker = "Express"
returns-marker = "KOSTENLOSE Rücksendungen"
ship-from-marker = "Versand durch"
sold-by-marker = "Verkauf durch"
in-stock-marker = "Auf Lager"
in-stock-label = "Auf Lager"
months = ["Januar", "Februar", "März", "April", "Mai", "Juni",
          "Juli", "August", "September", "Oktober", "November", "Dezember"]

[parser]
orphan-policy = "skip"
"#;

    #[test]
    fn test_load_valid_config() {
        let file = create_temp_config(GERMAN);
        let config = load_config(file.path()).unwrap();

        assert_eq!(config.locale.name, "de");
        assert_eq!(config.locale.months.len(), 12);
        assert!(config.locale.ignored_chars.is_empty());
        assert!(config.locale.challenge_marker.is_none());
        assert_eq!(config.parser.orphan_policy, OrphanPolicy::Skip);
    }

    #[test]
    fn test_missing_sections_fall_back_to_defaults() {
        let config = parse_config("").unwrap();
        assert_eq!(config.locale.name, "en");
        assert_eq!(config.parser.orphan_policy, OrphanPolicy::Reject);
    }

    #[test]
    fn test_load_config_with_invalid_path() {
        let result = load_config(Path::new("/nonexistent/locale.toml"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn test_load_config_with_invalid_toml() {
        let file = create_temp_config("this is not valid TOML {{{");
        let result = load_config(file.path());
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_unknown_orphan_policy_is_a_parse_error() {
        let result = parse_config("[parser]\norphan-policy = \"ignore\"\n");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_load_config_with_validation_error() {
        let content = GERMAN.replace("\"Dezember\"", "");
        let file = create_temp_config(&content);
        let result = load_config(file.path());
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }

    #[test]
    fn test_compute_config_hash() {
        let file = create_temp_config("test content");

        let hash1 = compute_config_hash(file.path()).unwrap();
        let hash2 = compute_config_hash(file.path()).unwrap();

        assert_eq!(hash1, hash2);
        assert_eq!(hash1.len(), 64);
    }

    #[test]
    fn test_different_content_different_hash() {
        let file1 = create_temp_config("content 1");
        let file2 = create_temp_config("content 2");

        let hash1 = compute_config_hash(file1.path()).unwrap();
        let hash2 = compute_config_hash(file2.path()).unwrap();

        assert_ne!(hash1, hash2);
    }

    #[test]
    fn test_load_config_with_hash_matches_file_hash() {
        let file = create_temp_config(GERMAN);
        let (config, hash) = load_config_with_hash(file.path()).unwrap();
        assert_eq!(config.locale.name, "de");
        assert_eq!(hash, compute_config_hash(file.path()).unwrap());
    }
}
