//! Error types and handling for addrgrep.

/// Result type alias for addrgrep operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for addrgrep operations.
///
/// Every configuration error carries a human-readable message (via
/// [`std::fmt::Display`]) plus an auxiliary detail payload describing the
/// offending input.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// No country was selected when constructing a parser.
    #[error("no country selected: {details}")]
    NoCountrySelected {
        /// Detail about what was (not) supplied
        details: String,
    },

    /// A selected country has no grammar in the registry.
    #[error("address grammar not found for country: {details}")]
    CountryDetectionMissing {
        /// The country code that has no registered grammar
        details: String,
    },

    /// A registered country was requested from a parser that was not
    /// configured with it.
    #[error("country not selected for this parser: {details}")]
    CountryNotSelected {
        /// The country code missing from the parser's selection
        details: String,
    },

    /// A registered grammar failed to compile.
    ///
    /// This indicates a defect in the grammar data itself, not a normal
    /// runtime condition; it is propagated rather than masked.
    #[error("failed to compile address grammar for {country}: {source}")]
    GrammarCompilation {
        /// The country whose grammar failed to compile
        country: String,
        /// The underlying regex compilation error
        source: regex::Error,
    },
}

impl Error {
    /// Create a new "no country selected" error
    pub fn no_country_selected(details: impl Into<String>) -> Self {
        Self::NoCountrySelected {
            details: details.into(),
        }
    }

    /// Create a new "country detection missing" error
    pub fn country_detection_missing(details: impl Into<String>) -> Self {
        Self::CountryDetectionMissing {
            details: details.into(),
        }
    }

    /// Create a new "country not selected" error
    pub fn country_not_selected(details: impl Into<String>) -> Self {
        Self::CountryNotSelected {
            details: details.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_carry_details() {
        let err = Error::no_country_selected("nothing supplied");
        assert_eq!(err.to_string(), "no country selected: nothing supplied");

        let err = Error::country_detection_missing("TheMoon");
        assert_eq!(
            err.to_string(),
            "address grammar not found for country: TheMoon"
        );

        let err = Error::country_not_selected("CA");
        assert_eq!(
            err.to_string(),
            "country not selected for this parser: CA"
        );
    }
}
