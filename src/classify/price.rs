use crate::config::LocaleConfig;

/// Extracts a price from a two-line price fragment
///
/// Storefronts render the whole part and the fraction as separate lines of
/// one node, the currency symbol sitting on the fraction line ("1,049\n€99").
/// The result is `"<whole>.<fraction>"` with the thousands separator and the
/// currency symbol removed.
///
/// Returns None unless there are at least two lines and the second one
/// carries the currency symbol.
pub fn classify_price(text: &str, locale: &LocaleConfig) -> Option<String> {
    let mut lines = text.split('\n');
    let whole = lines.next()?;
    let fraction = lines.next()?;

    if !fraction.contains(locale.currency_symbol.as_str()) {
        return None;
    }

    let whole = whole.replace(locale.thousands_separator.as_str(), "");
    let fraction = fraction.replace(locale.currency_symbol.as_str(), "");

    Some(format!("{}.{}", whole.trim(), fraction.trim()))
}
