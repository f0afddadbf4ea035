use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One guessed value for a category, with its provenance span.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GuessedValue {
    pub canonical_form: String,
    /// Confidence of the contributing pattern entry, unmodified.
    pub confidence: f64,
    /// Byte range of the contributing hit within the scanned text.
    pub span: (usize, usize),
}

/// The outcome of one matching pass over a text span.
///
/// A single pass may populate several categories at once (one filename
/// fragment can yield `format=BluRay` and `other=Screener` together).
/// When a category has several surviving non-overlapping hits they are all
/// retained in hit order; the first is the primary value and the caller
/// disambiguates the rest through quality rating.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Guess {
    /// The scanned text, kept for provenance attribution.
    pub text: String,
    #[serde(skip_serializing_if = "BTreeMap::is_empty", default)]
    pub properties: BTreeMap<String, Vec<GuessedValue>>,
}

impl Guess {
    /// Primary canonical form for a category, if guessed.
    pub fn value(&self, category: &str) -> Option<&str> {
        self.properties
            .get(category)
            .and_then(|v| v.first())
            .map(|v| v.canonical_form.as_str())
    }

    /// Confidence of the primary value for a category.
    pub fn confidence(&self, category: &str) -> Option<f64> {
        self.properties
            .get(category)
            .and_then(|v| v.first())
            .map(|v| v.confidence)
    }

    /// All surviving values for a category, in hit order.
    pub fn values(&self, category: &str) -> &[GuessedValue] {
        self.properties
            .get(category)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Categories populated by this guess.
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.properties.keys().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}
