//! Fragment stream types
//!
//! A fragment is one trimmed piece of visible text scraped from the buybox,
//! in document order. Its label is an opaque descriptor of the node it came
//! from and only ever shows up in diagnostics.

mod source;

pub use source::{load_fragments, prepare_fragments, read_fragments, FragmentError, FragmentResult};

use crate::config::LocaleConfig;
use serde::{Deserialize, Serialize};

/// Label used when the collector could not describe the source node
pub const UNNAMED_LABEL: &str = "UnnamedElement";

/// One labelled text fragment from the buybox
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fragment {
    /// Descriptor of the source node (e.g., "span>a-price-whole")
    #[serde(alias = "name", default = "unnamed_label")]
    pub label: String,

    /// Trimmed visible text; may span several lines
    pub text: String,
}

fn unnamed_label() -> String {
    UNNAMED_LABEL.to_string()
}

impl Fragment {
    /// Creates a fragment from a label and its text
    pub fn new(label: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            text: text.into(),
        }
    }

    /// Creates a fragment with the placeholder label
    pub fn unlabeled(text: impl Into<String>) -> Self {
        Self::new(UNNAMED_LABEL, text)
    }

    /// Creates a fragment labelled after the node it was read from
    ///
    /// The label joins the non-empty parts of tag, class list and id with
    /// `>`; classes are dot-joined the way a CSS selector writes them.
    ///
    /// # Example
    ///
    /// ```
    /// use buybox_parser::Fragment;
    ///
    /// let fragment = Fragment::from_node("span", "a-price a-text-bold", "", "49\n€99");
    /// assert_eq!(fragment.label, "span>a-price.a-text-bold");
    /// ```
    pub fn from_node(tag: &str, class_attr: &str, id: &str, text: impl Into<String>) -> Self {
        let classes = class_attr.split_whitespace().collect::<Vec<_>>().join(".");
        let parts: Vec<&str> = [tag.trim(), classes.as_str(), id.trim()]
            .into_iter()
            .filter(|part| !part.is_empty())
            .collect();

        if parts.is_empty() {
            Self::unlabeled(text)
        } else {
            Self::new(parts.join(">"), text)
        }
    }

    /// Returns the text with the locale's ignorable characters removed, trimmed
    ///
    /// Storefronts pad amounts and punctuation with narrow no-break spaces;
    /// classifiers always see the text in this form.
    pub fn normalized_text(&self, locale: &LocaleConfig) -> String {
        let mut text = self.text.clone();
        for ignored in &locale.ignored_chars {
            text = text.replace(ignored.as_str(), "");
        }
        text.trim().to_string()
    }
}
