//! Occupation text normalization
//!
//! Normalized text is the raw answer lowercased with surrounding whitespace
//! removed. Umlauts, punctuation and inner whitespace are kept verbatim:
//! the rule table lists literal surface variants instead of relying on
//! folding.

use std::fmt;

/// Lowercased occupation text, the only input the classifier accepts
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NormalizedText(String);

impl NormalizedText {
    /// The normalized text
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for NormalizedText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NormalizedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Normalize a raw occupation answer
///
/// Returns `None` for absent, empty or whitespace-only answers; such
/// answers are "no data" and never reach the classifier.
#[must_use]
pub fn normalize(raw: Option<&str>) -> Option<NormalizedText> {
    let trimmed = raw?.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(NormalizedText(trimmed.to_lowercase()))
}
