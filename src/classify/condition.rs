use crate::config::LocaleConfig;
use crate::offer::Condition;

/// Decides whether a fragment announces a product condition
///
/// - Text containing the new marker announces the locale's new label.
/// - Text containing the used marker announces a used grade: the text must
///   split on the grade delimiter into exactly two segments, the second being
///   the grade (e.g., "Used – Very good" → "Very good").
///
/// # Example
///
/// ```
/// use buybox_parser::classify::classify_condition;
/// use buybox_parser::LocaleConfig;
///
/// let locale = LocaleConfig::english();
/// let condition = classify_condition("Used – Like new", &locale).unwrap();
/// assert_eq!(condition.label, "Like new");
/// ```
pub fn classify_condition(text: &str, locale: &LocaleConfig) -> Option<Condition> {
    if text.contains(locale.new_marker.as_str()) {
        return Some(Condition::new_offer(locale.new_label.as_str()));
    }

    if text.contains(locale.used_marker.as_str()) {
        let segments: Vec<&str> = text.split(locale.grade_delimiter.as_str()).collect();
        if let [_, grade] = segments.as_slice() {
            let grade = grade.trim();
            if !grade.is_empty() {
                return Some(Condition::used(grade));
            }
        }
    }

    None
}
