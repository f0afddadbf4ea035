use std::collections::BTreeMap;

use tracing::debug;

use crate::error::GuessError;
use crate::guess::Guess;

/// Mutable registration stage of the quality registry.
#[derive(Debug, Default)]
pub struct QualitiesBuilder {
    scores: BTreeMap<String, BTreeMap<String, i32>>,
}

impl QualitiesBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Upsert the score for `(category, canonical_form)`. Re-registering the
    /// same key overwrites the earlier score; no duplicates accumulate.
    pub fn register_quality(&mut self, category: &str, canonical_form: &str, quality: i32) {
        self.scores
            .entry(category.to_string())
            .or_default()
            .insert(canonical_form.to_string(), quality);
    }

    /// Finalize into an immutable, thread-shareable container.
    pub fn build(self) -> QualitiesContainer {
        QualitiesContainer {
            scores: self.scores,
        }
    }
}

/// Immutable (category, canonical form) → score table.
///
/// Scores are a relative ranking signal: higher means a more authoritative
/// release attribute, and they are only comparable within one category.
#[derive(Debug)]
pub struct QualitiesContainer {
    scores: BTreeMap<String, BTreeMap<String, i32>>,
}

impl QualitiesContainer {
    pub fn quality(&self, category: &str, canonical_form: &str) -> Option<i32> {
        self.scores.get(category)?.get(canonical_form).copied()
    }

    /// Sum the scores of the guess's primary values.
    ///
    /// With explicit `categories`, a category absent from the guess is
    /// skipped, but a present value with no registered score is an error —
    /// the gap is signalled, never papered over with a default. With no
    /// categories named, every category on the guess is rated and unscored
    /// values are skipped silently.
    pub fn rate_quality(&self, guess: &Guess, categories: &[&str]) -> Result<i32, GuessError> {
        let mut total = 0;
        if categories.is_empty() {
            for category in guess.categories() {
                let Some(form) = guess.value(category) else {
                    continue;
                };
                match self.quality(category, form) {
                    Some(score) => total += score,
                    None => {
                        debug!(category, canonical_form = form, "no quality registered, skipping");
                    }
                }
            }
        } else {
            for &category in categories {
                let Some(form) = guess.value(category) else {
                    continue;
                };
                let score =
                    self.quality(category, form)
                        .ok_or_else(|| GuessError::UnknownQuality {
                            category: category.to_string(),
                            canonical_form: form.to_string(),
                        })?;
                total += score;
            }
        }
        Ok(total)
    }
}
