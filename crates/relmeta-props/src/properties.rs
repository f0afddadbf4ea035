use std::collections::{BTreeMap, BTreeSet};
use std::ops::Range;

use tracing::{debug, trace};

use crate::error::GuessError;
use crate::guess::{Guess, GuessedValue};
use crate::pattern::PatternEntry;
use crate::validator::Validator;

/// A surviving pattern hit produced by [`PropertiesContainer::find_properties`].
#[derive(Debug, Clone)]
pub struct PropertyMatch {
    pub category: String,
    pub canonical_form: String,
    pub span: Range<usize>,
    pub confidence: f64,
}

/// Mutable registration stage of the pattern registry.
///
/// All registration happens here, once, at initialization; [`build`]
/// finalizes into an immutable [`PropertiesContainer`]. Derived categories
/// must be registered after their base category so composition sees the
/// complete base pattern set.
///
/// [`build`]: PropertiesBuilder::build
#[derive(Debug, Default)]
pub struct PropertiesBuilder {
    entries: Vec<PatternEntry>,
}

impl PropertiesBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Compile each source into an entry under `category`, all mapping to
    /// `canonical_form` with the same confidence and validator.
    pub fn register_property(
        &mut self,
        category: &str,
        sources: &[&str],
        canonical_form: &str,
        confidence: f64,
        validator: Validator,
    ) -> Result<(), GuessError> {
        for source in sources {
            let entry =
                PatternEntry::compile(category, source, canonical_form, confidence, validator)?;
            trace!(category, source, canonical_form, "registered pattern");
            self.entries.push(entry);
        }
        Ok(())
    }

    /// Identity registration: each canonical form matches its own literal
    /// text, case-insensitively (e.g. "Proper", "3D").
    pub fn register_canonical(
        &mut self,
        category: &str,
        canonical_forms: &[&str],
        validator: Validator,
    ) -> Result<(), GuessError> {
        for form in canonical_forms {
            let source = regex::escape(form);
            let entry = PatternEntry::compile(category, &source, form, 1.0, validator)?;
            trace!(category, canonical_form = form, "registered canonical");
            self.entries.push(entry);
        }
        Ok(())
    }

    /// Two-sided derived composition. Every base entry (optionally filtered
    /// to one base canonical form) combined with every token variant yields
    /// the compound sources `base(-token)` and `(token-)base`, both
    /// canonicalized to the *token's* form, not the base's. Generation
    /// order is deterministic: base entries in registration order, then
    /// token variants in declaration order.
    pub fn register_derived(
        &mut self,
        derived_category: &str,
        base_category: &str,
        base_canonical: Option<&str>,
        canonical_form: &str,
        token_variants: &[&str],
    ) -> Result<(), GuessError> {
        let base_sources: Vec<String> = self
            .entries
            .iter()
            .filter(|e| {
                e.category == base_category
                    && base_canonical.map_or(true, |c| e.canonical_form == c)
            })
            .map(|e| e.source.clone())
            .collect();

        for base in &base_sources {
            for token in token_variants {
                let compounds = [format!("{base}(-{token})"), format!("({token}-){base}")];
                for source in &compounds {
                    let entry = PatternEntry::compile(
                        derived_category,
                        source,
                        canonical_form,
                        1.0,
                        Validator::Strict,
                    )?;
                    self.entries.push(entry);
                }
            }
        }
        trace!(
            derived_category,
            base_category,
            canonical_form,
            bases = base_sources.len(),
            "registered derived patterns"
        );
        Ok(())
    }

    /// Suffix composition: every base entry extended with `suffix_source`,
    /// registered under `category` with a fixed canonical form. Used for
    /// compounds like `format` + "-Screener".
    pub fn register_derived_suffix(
        &mut self,
        category: &str,
        base_category: &str,
        suffix_source: &str,
        canonical_form: &str,
    ) -> Result<(), GuessError> {
        let base_sources: Vec<String> = self
            .entries
            .iter()
            .filter(|e| e.category == base_category)
            .map(|e| e.source.clone())
            .collect();

        for base in &base_sources {
            let source = format!("{base}({suffix_source})");
            let entry =
                PatternEntry::compile(category, &source, canonical_form, 1.0, Validator::Strict)?;
            self.entries.push(entry);
        }
        Ok(())
    }

    /// Finalize into an immutable, thread-shareable container.
    pub fn build(self) -> PropertiesContainer {
        let mut by_category: BTreeMap<String, Vec<usize>> = BTreeMap::new();
        for (i, entry) in self.entries.iter().enumerate() {
            by_category.entry(entry.category.clone()).or_default().push(i);
        }
        debug!(
            entries = self.entries.len(),
            categories = by_category.len(),
            "properties registry built"
        );
        PropertiesContainer {
            entries: self.entries,
            by_category,
        }
    }
}

/// Immutable registry of property patterns.
///
/// All queries are pure, re-entrant reads; the container is safely shared
/// across threads behind an `Arc` with no synchronization.
#[derive(Debug)]
pub struct PropertiesContainer {
    /// Every entry across all categories, in registration order.
    entries: Vec<PatternEntry>,
    by_category: BTreeMap<String, Vec<usize>>,
}

impl PropertiesContainer {
    /// Entries for `category`, preserving registration order.
    pub fn properties(&self, category: &str) -> Vec<&PatternEntry> {
        self.by_category
            .get(category)
            .map(|indices| indices.iter().map(|&i| &self.entries[i]).collect())
            .unwrap_or_default()
    }

    /// Entries for `category` restricted to one canonical form.
    pub fn properties_with_form(&self, category: &str, canonical_form: &str) -> Vec<&PatternEntry> {
        self.properties(category)
            .into_iter()
            .filter(|e| e.canonical_form == canonical_form)
            .collect()
    }

    /// Scan `text` against every registered entry and return the surviving
    /// hits.
    ///
    /// Each raw regex hit is checked by the entry's validator; rejected hits
    /// are dropped. Within one category, overlapping spans keep only the
    /// higher-confidence hit (ties keep the first-registered entry). Across
    /// categories overlapping spans are all retained: one token may feed
    /// several categories at once, which is what derived profile patterns
    /// rely on.
    pub fn find_properties(&self, text: &str) -> Vec<PropertyMatch> {
        let mut kept: Vec<PropertyMatch> = Vec::new();
        for entry in &self.entries {
            for hit in entry.pattern.find_iter(text) {
                let span = hit.range();
                if !entry.validator.validate(text, &span) {
                    trace!(
                        category = %entry.category,
                        hit = hit.as_str(),
                        "hit rejected by validator"
                    );
                    continue;
                }
                let candidate = PropertyMatch {
                    category: entry.category.clone(),
                    canonical_form: entry.canonical_form.clone(),
                    span,
                    confidence: entry.confidence,
                };
                retain_best(&mut kept, candidate);
            }
        }
        kept
    }

    /// Convert surviving hits into a [`Guess`]. Multiple non-overlapping
    /// values within a category are all retained; collapsing them is the
    /// caller's job, via quality rating.
    pub fn as_guess(&self, matches: &[PropertyMatch], text: &str) -> Guess {
        let mut guess = Guess {
            text: text.to_string(),
            properties: BTreeMap::new(),
        };
        for m in matches {
            guess
                .properties
                .entry(m.category.clone())
                .or_default()
                .push(GuessedValue {
                    canonical_form: m.canonical_form.clone(),
                    confidence: m.confidence,
                    span: (m.span.start, m.span.end),
                });
        }
        guess
    }

    /// Category → distinct canonical forms, for documentation/help surfaces.
    /// Not used in matching.
    pub fn supported_properties(&self) -> BTreeMap<String, BTreeSet<String>> {
        let mut supported: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
        for entry in &self.entries {
            supported
                .entry(entry.category.clone())
                .or_default()
                .insert(entry.canonical_form.clone());
        }
        supported
    }
}

/// Same-category overlap resolution. Candidates arrive in registration
/// order, so dropping an equal-confidence candidate keeps the
/// first-registered hit.
fn retain_best(kept: &mut Vec<PropertyMatch>, candidate: PropertyMatch) {
    let overlapping: Vec<usize> = kept
        .iter()
        .enumerate()
        .filter(|(_, m)| m.category == candidate.category && overlaps(&m.span, &candidate.span))
        .map(|(i, _)| i)
        .collect();

    if overlapping.is_empty() {
        kept.push(candidate);
        return;
    }

    let best_existing = overlapping
        .iter()
        .map(|&i| kept[i].confidence)
        .fold(f64::MIN, f64::max);
    if candidate.confidence > best_existing {
        for &i in overlapping.iter().rev() {
            kept.remove(i);
        }
        kept.push(candidate);
    }
}

fn overlaps(a: &Range<usize>, b: &Range<usize>) -> bool {
    a.start < b.end && b.start < a.end
}

#[cfg(test)]
mod tests {
    use super::*;

    fn builder() -> PropertiesBuilder {
        PropertiesBuilder::new()
    }

    #[test]
    fn test_invalid_pattern_aborts_registration() {
        let mut b = builder();
        let err = b
            .register_property("format", &["(unclosed"], "Broken", 1.0, Validator::Strict)
            .expect_err("must fail at registration time");
        assert!(matches!(err, GuessError::InvalidPattern { .. }));
    }

    #[test]
    fn test_registration_order_is_preserved() {
        let mut b = builder();
        b.register_property("format", &["AAA"], "First", 1.0, Validator::Strict)
            .unwrap();
        b.register_property("format", &["BBB", "CCC"], "Second", 0.5, Validator::Strict)
            .unwrap();
        let container = b.build();
        let sources: Vec<_> = container
            .properties("format")
            .iter()
            .map(|e| e.source.clone())
            .collect();
        assert_eq!(sources, vec!["AAA", "BBB", "CCC"]);
    }

    #[test]
    fn test_properties_with_form_filters() {
        let mut b = builder();
        b.register_property("format", &["AAA"], "First", 1.0, Validator::Strict)
            .unwrap();
        b.register_property("format", &["BBB"], "Second", 1.0, Validator::Strict)
            .unwrap();
        let container = b.build();
        let filtered = container.properties_with_form("format", "Second");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].source, "BBB");
    }

    #[test]
    fn test_same_category_overlap_prefers_confidence() {
        let mut b = builder();
        b.register_property("format", &["LONGTOKEN"], "Low", 0.2, Validator::Strict)
            .unwrap();
        b.register_property("format", &["LONG"], "High", 1.0, Validator::weak())
            .unwrap();
        let container = b.build();
        let found = container.find_properties(".LONGTOKEN.");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].canonical_form, "High");
    }

    #[test]
    fn test_same_category_overlap_tie_keeps_first_registered() {
        let mut b = builder();
        b.register_property("format", &["TOKEN"], "First", 1.0, Validator::Strict)
            .unwrap();
        b.register_property(
            "format",
            &["TOK"],
            "Second",
            1.0,
            Validator::Weak { min_length: 1 },
        )
        .unwrap();
        let container = b.build();
        let found = container.find_properties(".TOKEN.");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].canonical_form, "First");
    }

    #[test]
    fn test_cross_category_overlap_keeps_both() {
        let mut b = builder();
        b.register_property("format", &["TOKEN"], "Fmt", 1.0, Validator::Strict)
            .unwrap();
        b.register_property("other", &["TOKEN"], "Tag", 1.0, Validator::Strict)
            .unwrap();
        let container = b.build();
        let found = container.find_properties(".TOKEN.");
        assert_eq!(found.len(), 2);
    }

    #[test]
    fn test_as_guess_keeps_multiple_values_per_category() {
        let mut b = builder();
        b.register_property("format", &["AAA"], "First", 1.0, Validator::Strict)
            .unwrap();
        b.register_property("format", &["BBB"], "Second", 0.7, Validator::Strict)
            .unwrap();
        let container = b.build();
        let text = ".AAA.BBB.";
        let found = container.find_properties(text);
        let guess = container.as_guess(&found, text);
        assert_eq!(guess.value("format"), Some("First"));
        assert_eq!(guess.values("format").len(), 2);
        assert_eq!(guess.values("format")[1].canonical_form, "Second");
        assert_eq!(guess.text, text);
    }

    #[test]
    fn test_derived_registration_composes_both_sides() {
        let mut b = builder();
        b.register_property("videoCodec", &["XCODEC"], "XCodec", 1.0, Validator::Strict)
            .unwrap();
        b.register_derived("videoProfile", "videoCodec", None, "PRO", &["PRO"])
            .unwrap();
        let container = b.build();
        let profiles = container.properties("videoProfile");
        assert_eq!(profiles.len(), 2);
        assert_eq!(profiles[0].source, "XCODEC(-PRO)");
        assert_eq!(profiles[1].source, "(PRO-)XCODEC");
        assert!(profiles.iter().all(|e| e.canonical_form == "PRO"));
    }

    #[test]
    fn test_derived_registration_respects_base_filter() {
        let mut b = builder();
        b.register_property("audioCodec", &["DTS"], "DTS", 1.0, Validator::Strict)
            .unwrap();
        b.register_property("audioCodec", &["AAC"], "AAC", 1.0, Validator::Strict)
            .unwrap();
        b.register_derived("audioProfile", "audioCodec", Some("DTS"), "HD", &["HD"])
            .unwrap();
        let container = b.build();
        let profiles = container.properties("audioProfile");
        assert_eq!(profiles.len(), 2);
        assert!(profiles.iter().all(|e| e.source.contains("DTS")));
    }

    #[test]
    fn test_suffix_registration() {
        let mut b = builder();
        b.register_property("format", &["DVD"], "DVD", 1.0, Validator::Strict)
            .unwrap();
        b.register_derived_suffix("other", "format", "-Scr(?:eener)?", "Screener")
            .unwrap();
        let container = b.build();
        let found = container.find_properties(".DVD-Screener.");
        let guess = container.as_guess(&found, ".DVD-Screener.");
        assert_eq!(guess.value("other"), Some("Screener"));
        assert_eq!(guess.value("format"), Some("DVD"));
    }

    #[test]
    fn test_supported_properties() {
        let mut b = builder();
        b.register_property("format", &["AAA"], "First", 1.0, Validator::Strict)
            .unwrap();
        b.register_canonical("other", &["Proper", "Repack"], Validator::Strict)
            .unwrap();
        let container = b.build();
        let supported = container.supported_properties();
        assert_eq!(supported["format"], BTreeSet::from(["First".to_string()]));
        assert_eq!(supported["other"].len(), 2);
    }

    #[test]
    fn test_canonical_registration_matches_case_insensitively() {
        let mut b = builder();
        b.register_canonical("other", &["Proper"], Validator::Strict)
            .unwrap();
        let container = b.build();
        let found = container.find_properties("movie.PROPER.mkv");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].canonical_form, "Proper");
    }
}
