//! The parsing façade: country selection, lazy grammar compilation and
//! multi-country match merging.

use log::debug;
use once_cell::sync::OnceCell;

use crate::address::Address;
use crate::error::{Error, Result};
use crate::grammar;
use crate::matcher::{self, CompiledCountryPattern};
use crate::normalizer::normalize;

/// One selected country and its lazily compiled pattern.
#[derive(Debug)]
struct CountrySlot {
    code: String,
    compiled: OnceCell<CompiledCountryPattern>,
}

/// Extracts addresses from free-form text for a fixed set of countries.
///
/// Country selection is validated eagerly at construction; the grammars
/// themselves compile on first use and stay cached for the parser's
/// lifetime, so repeated calls pay compilation once per country. The parser
/// is immutable after construction and can be shared across threads.
///
/// # Example
///
/// ```rust
/// use addrgrep::AddressParser;
///
/// let parser = AddressParser::new(["US"])?;
/// let found = parser.parse("Visit us at 2400 Jefferson Davis Hwy, Arlington, Virginia 22202.")?;
/// assert_eq!(
///     found[0].full_address.as_deref(),
///     Some("2400 Jefferson Davis Hwy, Arlington, Virginia 22202"),
/// );
/// # Ok::<(), addrgrep::Error>(())
/// ```
#[derive(Debug)]
pub struct AddressParser {
    countries: Vec<CountrySlot>,
}

impl AddressParser {
    /// Create a parser for the given country codes.
    ///
    /// Codes are case-insensitive and deduplicated; their order is kept and
    /// decides tie-breaking between countries whose matches start at the
    /// same offset.
    ///
    /// # Errors
    ///
    /// [`Error::NoCountrySelected`] when `countries` is empty, and
    /// [`Error::CountryDetectionMissing`] when a code has no registered
    /// grammar. Both are construction-time errors: a parser that exists can
    /// always attempt a parse.
    pub fn new<I, S>(countries: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut slots: Vec<CountrySlot> = Vec::new();
        for code in countries {
            let code = code.as_ref().trim();
            let canonical = code.to_ascii_uppercase();
            if !grammar::is_supported(&canonical) {
                return Err(Error::country_detection_missing(code));
            }
            if slots.iter().any(|slot| slot.code == canonical) {
                continue;
            }
            slots.push(CountrySlot {
                code: canonical,
                compiled: OnceCell::new(),
            });
        }
        if slots.is_empty() {
            return Err(Error::no_country_selected(
                "at least one country code is required",
            ));
        }
        Ok(Self { countries: slots })
    }

    /// The selected country codes, canonicalized, in selection order.
    pub fn countries(&self) -> Vec<&str> {
        self.countries.iter().map(|slot| slot.code.as_str()).collect()
    }

    /// Extract every address in `text` across all selected countries.
    ///
    /// The input is normalized once, each country's grammar runs over the
    /// normalized text independently, and the per-country results merge into
    /// one list ordered by match start offset. No two returned addresses
    /// overlap: when grammars of different countries claim intersecting
    /// spans, the earlier-starting match wins (the longer one at equal
    /// starts) and the other is dropped. Text without a single address
    /// yields an empty list, not an error.
    ///
    /// # Errors
    ///
    /// [`Error::GrammarCompilation`] when a selected grammar fails to
    /// compile on first use.
    pub fn parse(&self, text: &str) -> Result<Vec<Address>> {
        let normalized = normalize(text);
        let mut found = Vec::new();
        for slot in &self.countries {
            found.extend(self.extract(slot, &normalized)?);
        }
        Ok(merge_matches(found))
    }

    /// Extract addresses for a single selected country.
    ///
    /// # Errors
    ///
    /// [`Error::CountryNotSelected`] when `country` is not among the
    /// countries this parser was constructed with, whether or not the
    /// registry knows it; [`Error::GrammarCompilation`] as for
    /// [`Self::parse`].
    pub fn parse_country(&self, text: &str, country: &str) -> Result<Vec<Address>> {
        let canonical = country.trim().to_ascii_uppercase();
        let slot = self
            .countries
            .iter()
            .find(|slot| slot.code == canonical)
            .ok_or_else(|| Error::country_not_selected(country.trim()))?;
        self.extract(slot, &normalize(text))
    }

    /// Extract every address in `text`, matching the selected countries in
    /// parallel. Output order is identical to [`Self::parse`].
    ///
    /// # Errors
    ///
    /// As for [`Self::parse`].
    #[cfg(feature = "parallel")]
    pub fn parse_parallel(&self, text: &str) -> Result<Vec<Address>> {
        use rayon::prelude::*;

        let normalized = normalize(text);
        let per_country = self
            .countries
            .par_iter()
            .map(|slot| self.extract(slot, &normalized))
            .collect::<Result<Vec<_>>>()?;
        let found: Vec<Address> = per_country.into_iter().flatten().collect();
        Ok(merge_matches(found))
    }

    fn extract(&self, slot: &CountrySlot, normalized: &str) -> Result<Vec<Address>> {
        let compiled = slot
            .compiled
            .get_or_try_init(|| CompiledCountryPattern::compile(&slot.code))?;
        let addresses: Vec<Address> = matcher::find_matches(compiled, normalized)
            .map(|found| {
                let fields = matcher::combine_fields(&found.fields);
                Address::from_match(&fields, compiled.country(), found.start, found.end)
            })
            .collect();
        debug!(
            "{}: {} address(es) extracted",
            slot.code,
            addresses.len()
        );
        Ok(addresses)
    }
}

/// Order matches by start offset and drop any match that overlaps an already
/// accepted one. Within a single country the extractor never produces
/// overlaps, but grammars of different countries can claim intersecting
/// spans of the same text; the earliest start wins, and at equal starts the
/// longest match.
fn merge_matches(mut found: Vec<Address>) -> Vec<Address> {
    found.sort_by_key(|address| (address.match_start, std::cmp::Reverse(address.match_end)));
    let mut merged: Vec<Address> = Vec::with_capacity(found.len());
    for address in found {
        let overlapping = merged
            .last()
            .is_some_and(|kept| match (kept.match_end, address.match_start) {
                (Some(end), Some(start)) => start < end,
                _ => false,
            });
        if !overlapping {
            merged.push(address);
        }
    }
    merged
}
