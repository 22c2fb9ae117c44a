//! Class-label recovery from the extracted document text.
//!
//! Labels are short alphanumeric section codes: one year digit, one track
//! letter from a constrained set and one to four trailing section letters
//! (e.g. `3TB`, `1IAB`). The track set is calibration, like the cell
//! geometry, and comes from the runtime configuration.

use crate::error::ScanError;
use regex::Regex;

/// Track letters of the reference document.
pub const DEFAULT_TRACK_LETTERS: &str = "TIME";

/// Matches class labels in document order.
pub struct LabelMatcher {
    pattern: Regex,
}

impl LabelMatcher {
    /// Build the matcher for a set of track letters.
    pub fn from_track_letters(letters: &str) -> Result<Self, ScanError> {
        let pattern = format!("[0-9][{letters}][A-Za-z]{{1,4}}");
        let pattern = Regex::new(&pattern).map_err(|source| ScanError::LabelPattern {
            letters: letters.to_string(),
            source,
        })?;
        Ok(Self { pattern })
    }

    /// Every label occurrence in `text`, in document order.
    ///
    /// The caller is responsible for checking that the count aligns 1:1
    /// with the rasterized pages before attributing any schedule.
    pub fn extract(&self, text: &str) -> Vec<String> {
        self.pattern
            .find_iter(text)
            .map(|m| m.as_str().to_string())
            .collect()
    }
}
