//! Extract postal addresses from free-form text.
//!
//! `addrgrep` scans unstructured text for addresses using per-country
//! grammars and returns each match as a structured [`Address`] with the
//! street, occupancy, region, postal code and other components broken out.
//! The United States, Canada and the United Kingdom are supported; see
//! [`grammar::supported_countries`].
//!
//! Input is canonicalized first ([`normalize`]), so addresses may span
//! multiple lines and use irregular spacing. Matching is case-insensitive.
//! Results never overlap, even when grammars of different countries claim
//! intersecting spans of the same text.
//!
//! # Example
//!
//! ```rust
//! use addrgrep::AddressParser;
//!
//! let parser = AddressParser::new(["US", "GB"])?;
//! let found = parser.parse(
//!     "US office: 2400 Jefferson Davis Hwy, Arlington, Virginia 22202; \
//!      UK office: 32 London Bridge St, London SE1 9SG.",
//! )?;
//!
//! assert_eq!(found.len(), 2);
//! assert_eq!(found[0].country_id.as_deref(), Some("US"));
//! assert_eq!(found[1].postal_code.as_deref(), Some("SE1 9SG"));
//! # Ok::<(), addrgrep::Error>(())
//! ```
//!
//! For one-off use, [`parse`] builds a throwaway parser:
//!
//! ```rust
//! let found = addrgrep::parse("PO box 1070, Golden Square, W1C 1JT", &["GB"])?;
//! assert_eq!(found[0].po_box.as_deref(), Some("PO box 1070"));
//! # Ok::<(), addrgrep::Error>(())
//! ```
//!
//! # Features
//!
//! - `serde`: `Serialize`/`Deserialize` on [`Address`].
//! - `parallel`: [`AddressParser::parse_parallel`], matching the selected
//!   countries on a rayon thread pool.

#![deny(missing_docs)]
#![warn(rust_2018_idioms)]

pub mod address;
pub mod error;
pub mod grammar;
mod matcher;
pub mod normalizer;
pub mod parser;

pub use address::Address;
pub use error::{Error, Result};
pub use grammar::supported_countries;
pub use matcher::CompiledCountryPattern;
pub use normalizer::normalize;
pub use parser::AddressParser;

/// Extract every address in `text` for the given countries.
///
/// Convenience wrapper that builds an [`AddressParser`] per call; hold a
/// parser instead when processing many texts, so grammars compile once.
///
/// # Errors
///
/// As for [`AddressParser::new`] and [`AddressParser::parse`].
pub fn parse(text: &str, countries: &[&str]) -> Result<Vec<Address>> {
    AddressParser::new(countries)?.parse(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crate_level_parse() {
        let found = parse(
            "Our office moved to 455 Larkspur Dr., Victoria, British Columbia V8T 4J5.",
            &["CA"],
        )
        .unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].street_type.as_deref(), Some("Dr"));
        assert_eq!(found[0].region1.as_deref(), Some("British Columbia"));
        assert_eq!(found[0].country_id.as_deref(), Some("CA"));
    }

    #[test]
    fn test_crate_level_parse_rejects_empty_selection() {
        assert!(parse("2400 Jefferson Davis Hwy", &[]).is_err());
    }
}
