use regex::{Regex, RegexBuilder};

use crate::error::GuessError;
use crate::validator::Validator;

/// One compiled pattern bound to a property category and canonical value.
///
/// Created once at registry build time and immutable thereafter. The same
/// canonical form may be produced by several entries with independent
/// confidence and validator (e.g. "Telesync" via TELESYNC at 1.0 and via
/// the ambiguous "TS" at 0.2).
#[derive(Debug, Clone)]
pub struct PatternEntry {
    pub category: String,
    /// Raw pattern source as declared in the vocabulary. Kept because
    /// derived categories compose new sources out of it.
    pub source: String,
    /// Compiled, case-insensitive form of the enhanced source.
    pub pattern: Regex,
    pub canonical_form: String,
    /// Match reliability in (0, 1].
    pub confidence: f64,
    pub validator: Validator,
}

impl PatternEntry {
    pub(crate) fn compile(
        category: &str,
        source: &str,
        canonical_form: &str,
        confidence: f64,
        validator: Validator,
    ) -> Result<Self, GuessError> {
        let pattern = RegexBuilder::new(&enhance(source))
            .case_insensitive(true)
            .build()
            .map_err(|e| GuessError::InvalidPattern {
                category: category.to_string(),
                canonical_form: canonical_form.to_string(),
                source_pattern: source.to_string(),
                source: e,
            })?;
        Ok(Self {
            category: category.to_string(),
            source: source.to_string(),
            pattern,
            canonical_form: canonical_form.to_string(),
            confidence,
            validator,
        })
    }
}

/// Hyphens in pattern sources are soft separators: `Blu-ray` matches both
/// "Blu-ray" and "BluRay", but never "Blu ray".
fn enhance(source: &str) -> String {
    source.replace('-', "-?")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hyphen_is_optional() {
        let entry =
            PatternEntry::compile("format", "Blu-ray", "BluRay", 1.0, Validator::Strict).unwrap();
        assert!(entry.pattern.is_match("BluRay"));
        assert!(entry.pattern.is_match("blu-ray"));
        assert!(!entry.pattern.is_match("Blu ray"));
    }

    #[test]
    fn test_source_is_kept_raw() {
        let entry =
            PatternEntry::compile("format", "WEB-DL", "WEB-DL", 1.0, Validator::Strict).unwrap();
        assert_eq!(entry.source, "WEB-DL");
    }

    #[test]
    fn test_invalid_source_is_reported() {
        let err = PatternEntry::compile("format", "[", "Broken", 1.0, Validator::Strict)
            .expect_err("must not compile");
        match err {
            GuessError::InvalidPattern { source_pattern, .. } => {
                assert_eq!(source_pattern, "[");
            }
            other => panic!("Expected InvalidPattern, got {other:?}"),
        }
    }
}
