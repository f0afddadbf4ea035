use thiserror::Error;

#[derive(Debug, Error)]
pub enum GuessError {
    /// A pattern source in the vocabulary failed to compile. Raised at
    /// registry build time; a broken vocabulary aborts initialization.
    #[error("invalid pattern {source_pattern:?} for {category}/{canonical_form}: {source}")]
    InvalidPattern {
        category: String,
        canonical_form: String,
        source_pattern: String,
        #[source]
        source: regex::Error,
    },

    /// A quality rating was requested for a guessed value that has no
    /// registered score. The caller may treat this as "no preference".
    #[error("no quality registered for {category}/{canonical_form}")]
    UnknownQuality {
        category: String,
        canonical_form: String,
    },
}
