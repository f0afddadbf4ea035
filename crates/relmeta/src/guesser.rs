use std::collections::{BTreeMap, BTreeSet};

use relmeta_props::{Guess, GuessError, PropertiesContainer, QualitiesContainer};

use crate::registry;

/// Façade owning one pattern registry and one quality registry, populated
/// from the built-in vocabulary at construction time.
///
/// Both registries are immutable after construction; `guess_properties` and
/// `rate_quality` are pure reads and the whole value is `Send + Sync`, so
/// it can be shared behind an `Arc` without synchronization.
pub struct GuessProperties {
    container: PropertiesContainer,
    qualities: QualitiesContainer,
}

impl GuessProperties {
    /// Build the registries. Fails only when a vocabulary pattern source
    /// does not compile, which is a programming error in the vocabulary
    /// and must abort initialization.
    pub fn new() -> Result<Self, GuessError> {
        let (container, qualities) = registry::build_registries()?;
        Ok(Self {
            container,
            qualities,
        })
    }

    /// Scan a text span and synthesize a guess from the surviving hits.
    pub fn guess_properties(&self, text: &str) -> Guess {
        let found = self.container.find_properties(text);
        self.container.as_guess(&found, text)
    }

    /// Sum quality scores for the guess's values; see
    /// [`QualitiesContainer::rate_quality`] for the explicit/implicit
    /// category semantics.
    pub fn rate_quality(&self, guess: &Guess, categories: &[&str]) -> Result<i32, GuessError> {
        self.qualities.rate_quality(guess, categories)
    }

    /// Category → known canonical forms, for documentation surfaces.
    pub fn supported_properties(&self) -> BTreeMap<String, BTreeSet<String>> {
        self.container.supported_properties()
    }

    pub fn container(&self) -> &PropertiesContainer {
        &self.container
    }

    pub fn qualities(&self) -> &QualitiesContainer {
        &self.qualities
    }
}
