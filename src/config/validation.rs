use crate::config::types::{Config, LocaleConfig};
use crate::ConfigError;
use std::collections::HashSet;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_locale(&config.locale)?;
    Ok(())
}

/// Validates a locale marker table
pub fn validate_locale(locale: &LocaleConfig) -> Result<(), ConfigError> {
    let required = [
        ("name", &locale.name),
        ("new_marker", &locale.new_marker),
        ("new_label", &locale.new_label),
        ("used_marker", &locale.used_marker),
        ("grade_delimiter", &locale.grade_delimiter),
        ("currency_symbol", &locale.currency_symbol),
        ("thousands_separator", &locale.thousands_separator),
        ("delivery_keyword", &locale.delivery_keyword),
        ("free_marker", &locale.free_marker),
        ("expedited_marker", &locale.expedited_marker),
        ("returns_marker", &locale.returns_marker),
        ("ship_from_marker", &locale.ship_from_marker),
        ("sold_by_marker", &locale.sold_by_marker),
        ("in_stock_marker", &locale.in_stock_marker),
        ("in_stock_label", &locale.in_stock_label),
    ];

    for (field, value) in required {
        if value.is_empty() {
            return Err(ConfigError::Validation(format!(
                "{} cannot be empty (locale '{}')",
                field, locale.name
            )));
        }
    }

    if let Some(marker) = &locale.challenge_marker {
        if marker.is_empty() {
            return Err(ConfigError::Validation(
                "challenge_marker cannot be empty when set".to_string(),
            ));
        }
    }

    if locale.ignored_chars.iter().any(|c| c.is_empty()) {
        return Err(ConfigError::Validation(
            "ignored_chars cannot contain empty entries".to_string(),
        ));
    }

    // The free marker is matched against upper-cased text
    if locale.free_marker != locale.free_marker.to_uppercase() {
        return Err(ConfigError::Validation(format!(
            "free_marker must be upper-case, got '{}'",
            locale.free_marker
        )));
    }

    if locale.free_marker == locale.expedited_marker {
        return Err(ConfigError::Validation(
            "free_marker and expedited_marker must differ".to_string(),
        ));
    }

    if locale.currency_symbol == locale.thousands_separator {
        return Err(ConfigError::Validation(format!(
            "currency_symbol and thousands_separator must differ, both are '{}'",
            locale.currency_symbol
        )));
    }

    validate_months(&locale.months)?;

    Ok(())
}

/// Validates the month-name list
///
/// Month names are matched against single whitespace-separated tokens, so
/// each must be one word.
fn validate_months(months: &[String]) -> Result<(), ConfigError> {
    if months.len() != 12 {
        return Err(ConfigError::Validation(format!(
            "months must list exactly 12 names, got {}",
            months.len()
        )));
    }

    let mut seen = HashSet::new();
    for month in months {
        if month.is_empty() || month.chars().any(char::is_whitespace) {
            return Err(ConfigError::Validation(format!(
                "month name '{}' must be a single non-empty word",
                month
            )));
        }

        if !seen.insert(month.to_lowercase()) {
            return Err(ConfigError::Validation(format!(
                "month name '{}' is listed twice",
                month
            )));
        }
    }

    Ok(())
}
