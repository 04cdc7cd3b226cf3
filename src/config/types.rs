use crate::{ConfigError, ConfigResult};
use serde::Deserialize;

/// Main configuration structure for Buybox-Parser
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub locale: LocaleConfig,
    #[serde(default)]
    pub parser: ParserConfig,
}

/// Literal text markers for one storefront locale
///
/// Every string the classifiers look for lives here, so a new storefront
/// language is a new table rather than new control flow.
#[derive(Debug, Clone, Deserialize)]
pub struct LocaleConfig {
    /// Short locale identifier (e.g., "en", "fr")
    pub name: String,

    /// Text announcing the "new" condition (e.g., "New:")
    #[serde(rename = "new-marker")]
    pub new_marker: String,

    /// Condition label recorded for new offers
    #[serde(rename = "new-label")]
    pub new_label: String,

    /// Text announcing a used condition, followed by its grade
    #[serde(rename = "used-marker")]
    pub used_marker: String,

    /// Separator between the used marker and the grade (e.g., " – ")
    #[serde(rename = "grade-delimiter")]
    pub grade_delimiter: String,

    #[serde(rename = "currency-symbol")]
    pub currency_symbol: String,

    /// Thousands separator stripped from the integer part of a price
    #[serde(rename = "thousands-separator")]
    pub thousands_separator: String,

    /// Characters removed from every fragment before classification
    #[serde(rename = "ignored-chars", default)]
    pub ignored_chars: Vec<String>,

    #[serde(rename = "delivery-keyword")]
    pub delivery_keyword: String,

    /// Upper-case marker of a free delivery option
    #[serde(rename = "free-marker")]
    pub free_marker: String,

    #[serde(rename = "expedited-marker")]
    pub expedited_marker: String,

    #[serde(rename = "returns-marker")]
    pub returns_marker: String,

    /// Marker whose *next* fragment names the shipper
    #[serde(rename = "ship-from-marker")]
    pub ship_from_marker: String,

    /// Marker whose *next* fragment names the seller
    #[serde(rename = "sold-by-marker")]
    pub sold_by_marker: String,

    #[serde(rename = "in-stock-marker")]
    pub in_stock_marker: String,

    /// Stock status recorded when the in-stock marker is seen
    #[serde(rename = "in-stock-label")]
    pub in_stock_label: String,

    /// Text that only appears on verification (captcha) pages
    #[serde(rename = "challenge-marker", default)]
    pub challenge_marker: Option<String>,

    /// The twelve month names, January first
    pub months: Vec<String>,
}

impl LocaleConfig {
    /// Markers for English-language storefronts
    pub fn english() -> Self {
        Self {
            name: "en".to_string(),
            new_marker: "New:".to_string(),
            new_label: "New".to_string(),
            used_marker: "Used".to_string(),
            grade_delimiter: " – ".to_string(),
            currency_symbol: "€".to_string(),
            thousands_separator: ",".to_string(),
            ignored_chars: vec!["\u{202f}".to_string()],
            delivery_keyword: "Delivery".to_string(),
            free_marker: "FREE".to_string(),
            expedited_marker: "expedited".to_string(),
            returns_marker: "Returns FREE".to_string(),
            ship_from_marker: "Dispatched".to_string(),
            sold_by_marker: "Sold by".to_string(),
            in_stock_marker: "In stock".to_string(),
            in_stock_label: "In stock".to_string(),
            challenge_marker: Some("Enter the characters you see below".to_string()),
            months: to_strings(&[
                "January",
                "February",
                "March",
                "April",
                "May",
                "June",
                "July",
                "August",
                "September",
                "October",
                "November",
                "December",
            ]),
        }
    }

    /// Markers for French-language storefronts
    pub fn french() -> Self {
        Self {
            name: "fr".to_string(),
            new_marker: "Neuf :".to_string(),
            new_label: "Neuf".to_string(),
            used_marker: "D’occasion".to_string(),
            grade_delimiter: " – ".to_string(),
            currency_symbol: "€".to_string(),
            thousands_separator: "\u{202f}".to_string(),
            ignored_chars: vec!["\u{202f}".to_string()],
            delivery_keyword: "Livraison".to_string(),
            free_marker: "GRATUITE".to_string(),
            expedited_marker: "accélérée".to_string(),
            returns_marker: "Retours GRATUITS".to_string(),
            ship_from_marker: "Expédié".to_string(),
            sold_by_marker: "Vendu par".to_string(),
            in_stock_marker: "En stock".to_string(),
            in_stock_label: "En stock".to_string(),
            challenge_marker: Some("Enter the characters you see below".to_string()),
            months: to_strings(&[
                "janvier",
                "février",
                "mars",
                "avril",
                "mai",
                "juin",
                "juillet",
                "août",
                "septembre",
                "octobre",
                "novembre",
                "décembre",
            ]),
        }
    }

    /// Looks up a built-in locale by name
    ///
    /// Accepts both the short identifier and the language name.
    pub fn preset(name: &str) -> ConfigResult<Self> {
        match name.to_lowercase().as_str() {
            "en" | "english" => Ok(Self::english()),
            "fr" | "french" => Ok(Self::french()),
            _ => Err(ConfigError::UnknownPreset(name.to_string())),
        }
    }

    /// Returns true if `token` is one of this locale's month names
    pub fn is_month(&self, token: &str) -> bool {
        let token = token.to_lowercase();
        self.months.iter().any(|m| m.to_lowercase() == token)
    }
}

impl Default for LocaleConfig {
    fn default() -> Self {
        Self::english()
    }
}

/// Parser behaviour configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ParserConfig {
    /// What to do with offer data seen before any condition marker
    #[serde(rename = "orphan-policy", default)]
    pub orphan_policy: OrphanPolicy,
}

/// Handling of field-bearing fragments that arrive with no active condition
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrphanPolicy {
    /// Abort the parse with `ParseError::NoActiveCondition`
    #[default]
    Reject,

    /// Log a warning and drop the fragment
    Skip,
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
