//! Fragment loading from JSON
//!
//! Collectors hand fragments over as a JSON array of `{label, text}` objects
//! in document order. Loading trims every text and drops the empty ones so
//! that the parser only ever sees visible text.

use super::Fragment;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use thiserror::Error;

/// Errors that can occur while reading a fragment stream
#[derive(Debug, Error)]
pub enum FragmentError {
    #[error("Failed to read fragments: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid fragment JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for fragment loading
pub type FragmentResult<T> = Result<T, FragmentError>;

/// Reads a fragment stream from any JSON source
///
/// # Example
///
/// ```
/// use buybox_parser::fragment::read_fragments;
///
/// let json = r#"[{"label": "span", "text": " New: "}, {"label": "span", "text": "  "}]"#;
/// let fragments = read_fragments(json.as_bytes()).unwrap();
/// assert_eq!(fragments.len(), 1);
/// assert_eq!(fragments[0].text, "New:");
/// ```
pub fn read_fragments<R: Read>(reader: R) -> FragmentResult<Vec<Fragment>> {
    let raw: Vec<Fragment> = serde_json::from_reader(reader)?;
    Ok(prepare_fragments(raw))
}

/// Loads a fragment stream from a JSON file
pub fn load_fragments(path: &Path) -> FragmentResult<Vec<Fragment>> {
    let file = File::open(path)?;
    let fragments = read_fragments(BufReader::new(file))?;
    tracing::debug!(
        "Loaded {} fragments from {}",
        fragments.len(),
        path.display()
    );
    Ok(fragments)
}

/// Trims fragment texts and drops fragments left empty, keeping order
pub fn prepare_fragments(raw: Vec<Fragment>) -> Vec<Fragment> {
    let total = raw.len();
    let fragments: Vec<Fragment> = raw
        .into_iter()
        .filter_map(|fragment| {
            let text = fragment.text.trim();
            if text.is_empty() {
                None
            } else {
                Some(Fragment::new(fragment.label, text))
            }
        })
        .collect();

    if fragments.len() < total {
        tracing::trace!("Dropped {} empty fragments", total - fragments.len());
    }

    fragments
}
