use crate::config::LocaleConfig;
use crate::offer::{DeliveryOption, DeliveryType};

/// ETA recorded when a delivery fragment names no month
pub const ETA_NOT_FOUND: &str = "Date not found";

/// Parses a delivery promise
///
/// Returns None unless the text contains the locale's delivery keyword.
///
/// # Example
///
/// ```
/// use buybox_parser::classify::classify_delivery;
/// use buybox_parser::{DeliveryType, LocaleConfig};
///
/// let locale = LocaleConfig::english();
/// let option = classify_delivery("FREE Delivery Friday 12 January", &locale).unwrap();
/// assert_eq!(option.kind, DeliveryType::Free);
/// assert_eq!(option.eta, "12 January");
/// ```
pub fn classify_delivery(text: &str, locale: &LocaleConfig) -> Option<DeliveryOption> {
    if !text.contains(locale.delivery_keyword.as_str()) {
        return None;
    }

    Some(DeliveryOption::new(
        delivery_type(text, locale),
        extract_eta(text, locale),
    ))
}

/// Determines the delivery type, free taking precedence over expedited
pub fn delivery_type(text: &str, locale: &LocaleConfig) -> DeliveryType {
    if text.to_uppercase().contains(locale.free_marker.as_str()) {
        DeliveryType::Free
    } else if text.contains(locale.expedited_marker.as_str()) {
        DeliveryType::Expedited
    } else {
        DeliveryType::Standard
    }
}

/// Extracts the delivery estimate around the first month name
///
/// The estimate is the token preceding the month joined with the month
/// ("12 January"). A month in first position yields the month alone.
pub fn extract_eta(text: &str, locale: &LocaleConfig) -> String {
    let tokens: Vec<&str> = text.split_whitespace().collect();

    match tokens.iter().position(|token| locale.is_month(token)) {
        Some(index) => tokens[index.saturating_sub(1)..=index].join(" "),
        None => ETA_NOT_FOUND.to_string(),
    }
}
