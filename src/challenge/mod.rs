//! Verification-challenge handling
//!
//! Storefronts sometimes answer with a verification page (a captcha image and
//! an input box) instead of the listing. Such a page must not be parsed as a
//! buybox. This module:
//! - detects challenge pages from their fragment stream
//! - defines the seam to an external image-recognition service
//!
//! Fetching the image, running recognition and submitting the answer belong
//! to the page collector; no recognizer implementation ships with this crate.

use crate::config::LocaleConfig;
use crate::fragment::Fragment;
use thiserror::Error;

/// Errors reported by challenge recognition
#[derive(Debug, Error)]
pub enum ChallengeError {
    #[error("Challenge image is empty")]
    EmptyImage,

    #[error("Recognition failed: {0}")]
    Recognition(String),

    #[error("Recognizer returned no text")]
    EmptyGuess,
}

/// Result type for challenge operations
pub type ChallengeResult<T> = Result<T, ChallengeError>;

/// External service reading the text of a challenge image
pub trait ChallengeRecognizer {
    /// Returns a best-effort reading of the characters in `image`
    fn recognize(&self, image: &[u8]) -> ChallengeResult<String>;
}

/// Returns the first fragment showing the page is a verification challenge
///
/// Always None when the locale defines no challenge marker.
pub fn detect_challenge<'f>(
    fragments: &'f [Fragment],
    locale: &LocaleConfig,
) -> Option<(usize, &'f Fragment)> {
    let marker = locale.challenge_marker.as_deref()?;
    fragments
        .iter()
        .enumerate()
        .find(|(_, fragment)| fragment.normalized_text(locale).contains(marker))
}

/// Runs a recognizer on a challenge image and cleans up its guess
///
/// # Errors
///
/// * `ChallengeError::EmptyImage` - no image bytes were supplied
/// * `ChallengeError::EmptyGuess` - the recognizer produced only whitespace
/// * any error returned by the recognizer itself
pub fn solve_challenge(
    recognizer: &dyn ChallengeRecognizer,
    image: &[u8],
) -> ChallengeResult<String> {
    if image.is_empty() {
        return Err(ChallengeError::EmptyImage);
    }

    let guess = match recognizer.recognize(image) {
        Ok(guess) => guess,
        Err(e) => {
            tracing::warn!("Challenge recognition failed: {}", e);
            return Err(e);
        }
    };

    let guess = guess.trim();
    if guess.is_empty() {
        return Err(ChallengeError::EmptyGuess);
    }

    tracing::info!("Challenge read as {:?}", guess);
    Ok(guess.to_string())
}
