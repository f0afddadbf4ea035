use std::ops::Range;

/// Default minimum hit length (in chars) for [`Validator::Weak`].
pub const WEAK_MIN_LENGTH: usize = 3;

/// Boundary-acceptance predicate applied to every raw pattern hit.
///
/// Rejects spurious substring matches, e.g. the widescreen tag "WS"
/// inside "WStation".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Validator {
    /// Both neighbouring characters must be absent or non-alphanumeric.
    Strict,
    /// Tolerates one alphanumeric neighbour when the hit is longer than
    /// `min_length` chars. Used for short canonical tokens ("LiNE",
    /// "Limited") that would otherwise be over-rejected.
    Weak { min_length: usize },
}

impl Default for Validator {
    fn default() -> Self {
        Validator::Strict
    }
}

impl Validator {
    /// Weak validator with the default length threshold.
    pub fn weak() -> Self {
        Validator::Weak {
            min_length: WEAK_MIN_LENGTH,
        }
    }

    /// Decide whether the hit at `span` (a byte range into `text`) is
    /// acceptable. Pure function of the text and span.
    pub fn validate(&self, text: &str, span: &Range<usize>) -> bool {
        let before = text[..span.start].chars().next_back();
        let after = text[span.end..].chars().next();
        let bad_before = before.is_some_and(char::is_alphanumeric);
        let bad_after = after.is_some_and(char::is_alphanumeric);

        match *self {
            Validator::Strict => !bad_before && !bad_after,
            Validator::Weak { min_length } => {
                let bad_sides = usize::from(bad_before) + usize::from(bad_after);
                bad_sides == 0
                    || (bad_sides == 1 && text[span.clone()].chars().count() > min_length)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn span_of(text: &str, token: &str) -> Range<usize> {
        let start = text.find(token).expect("token present");
        start..start + token.len()
    }

    #[test]
    fn test_strict_accepts_delimited_token() {
        let text = "Movie.WS.XviD";
        assert!(Validator::Strict.validate(text, &span_of(text, "WS")));
    }

    #[test]
    fn test_strict_accepts_string_edges() {
        let text = "WS";
        assert!(Validator::Strict.validate(text, &(0..2)));
    }

    #[test]
    fn test_strict_rejects_embedded_token() {
        let text = "The.WStation.Movie";
        assert!(!Validator::Strict.validate(text, &span_of(text, "WS")));
    }

    #[test]
    fn test_weak_rejects_short_embedded_token() {
        // "WS" has only 2 chars, below the default threshold.
        let text = "The.WStation.Movie";
        assert!(!Validator::weak().validate(text, &span_of(text, "WS")));
    }

    #[test]
    fn test_weak_accepts_long_token_with_one_bad_side() {
        let text = "MovieLiNE.2010";
        assert!(Validator::weak().validate(text, &span_of(text, "LiNE")));
        assert!(!Validator::Strict.validate(text, &span_of(text, "LiNE")));
    }

    #[test]
    fn test_weak_rejects_both_sides_alphanumeric() {
        let text = "xLiNEx";
        assert!(!Validator::weak().validate(text, &span_of(text, "LiNE")));
    }

    #[test]
    fn test_weak_threshold_is_configurable() {
        let text = "The.WStation.Movie";
        let lax = Validator::Weak { min_length: 1 };
        assert!(lax.validate(text, &span_of(text, "WS")));
    }

    #[test]
    fn test_multibyte_neighbours() {
        // CJK neighbours are alphanumeric per char classification.
        let text = "劇WS場";
        let span = span_of(text, "WS");
        assert!(!Validator::Strict.validate(text, &span));
    }
}
