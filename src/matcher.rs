//! Compiled country patterns, match extraction and capture-group combination.

use std::collections::BTreeMap;

use log::debug;
use regex::{Regex, RegexBuilder};

use crate::error::{Error, Result};
use crate::grammar;

/// Compiled size allowance; the region alternations are wide and the default
/// limit is too tight for the case-insensitive GB grammar.
const PATTERN_SIZE_LIMIT: usize = 1 << 25;

/// One country's compiled full-address matcher.
///
/// Immutable once built and safe to share across threads for concurrent
/// matching. Built once per (parser, country) pair and cached for the
/// lifetime of the owning [`crate::AddressParser`].
#[derive(Debug)]
pub struct CompiledCountryPattern {
    country: String,
    regex: Regex,
}

impl CompiledCountryPattern {
    /// Compile the registered grammar for `country`.
    ///
    /// The grammar text is free-spacing, so structural whitespace and
    /// comments in the registry data are not literal match content; matching
    /// is case-insensitive and fully Unicode-aware.
    ///
    /// # Errors
    ///
    /// [`Error::CountryDetectionMissing`] when the registry has no grammar
    /// for `country`; [`Error::GrammarCompilation`] when the grammar text
    /// itself is defective.
    pub fn compile(country: &str) -> Result<Self> {
        let grammar = grammar::full_address(country)
            .ok_or_else(|| Error::country_detection_missing(country))?;
        let regex = RegexBuilder::new(&grammar)
            .case_insensitive(true)
            .ignore_whitespace(true)
            .size_limit(PATTERN_SIZE_LIMIT)
            .build()
            .map_err(|source| Error::GrammarCompilation {
                country: country.to_string(),
                source,
            })?;
        debug!("compiled address grammar for {country}");
        Ok(Self {
            country: country.to_string(),
            regex,
        })
    }

    /// The country code this pattern serves.
    pub fn country(&self) -> &str {
        &self.country
    }
}

/// Transient result of one pattern match: the matched span plus every capture
/// group, keyed by its (possibly suffixed) name, in declaration order.
#[derive(Debug)]
pub(crate) struct RawMatch {
    pub(crate) start: usize,
    pub(crate) end: usize,
    pub(crate) fields: Vec<(String, Option<String>)>,
}

/// Find all matches of `compiled` in `text`, left to right.
///
/// Matches never overlap: once a match is accepted, scanning resumes strictly
/// after its end offset, so a shorter candidate contained in an accepted
/// match is never separately reported. The grammar's own precedence (earliest
/// position, then alternation order) decides between competing candidates at
/// a given start; an input with no match yields an empty sequence, which is a
/// normal outcome rather than an error.
pub(crate) fn find_matches<'a>(
    compiled: &'a CompiledCountryPattern,
    text: &'a str,
) -> impl Iterator<Item = RawMatch> + 'a {
    compiled.regex.captures_iter(text).map(|caps| {
        let overall = caps.get(0).expect("capture group 0 always participates");
        let fields = compiled
            .regex
            .capture_names()
            .flatten()
            .map(|name| {
                (
                    name.to_string(),
                    caps.name(name).map(|m| m.as_str().to_string()),
                )
            })
            .collect();
        RawMatch {
            start: overall.start(),
            end: overall.end(),
            fields,
        }
    })
}

/// Collapse duplicate/suffixed capture names into one canonical field each.
///
/// Composing alternative sub-grammars forces distinct capture names for the
/// same semantic field (a base name plus a single-character suffix, e.g.
/// `street_type` and `street_type_b`). Names are grouped by the portion
/// before the suffix; within a group the first non-empty value in
/// declaration order wins, and groups with no non-empty member are omitted.
pub(crate) fn combine_fields(fields: &[(String, Option<String>)]) -> BTreeMap<String, String> {
    let mut combined = BTreeMap::new();
    for (name, value) in fields {
        let Some(value) = value.as_deref().filter(|v| !v.is_empty()) else {
            continue;
        };
        combined
            .entry(canonical_name(name).to_string())
            .or_insert_with(|| value.to_string());
    }
    combined
}

/// Strip a single-character disambiguating suffix (`_a`, `_b`, `_2`, ...)
/// from a capture name. Base names like `region1` or `po_box` are untouched.
fn canonical_name(name: &str) -> &str {
    let bytes = name.as_bytes();
    if bytes.len() > 2
        && bytes[bytes.len() - 2] == b'_'
        && bytes[bytes.len() - 1].is_ascii_alphanumeric()
    {
        &name[..name.len() - 2]
    } else {
        name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn raw(pairs: &[(&str, Option<&str>)]) -> Vec<(String, Option<String>)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.map(str::to_string)))
            .collect()
    }

    #[test]
    fn test_combine_fixed_contract() {
        let combined = combine_fields(&raw(&[
            ("test_one", None),
            ("test_one_a", Some("1")),
            ("test_two", None),
            ("test_two_b", Some("2")),
        ]));
        let expected: BTreeMap<String, String> = [
            ("test_one".to_string(), "1".to_string()),
            ("test_two".to_string(), "2".to_string()),
        ]
        .into();
        assert_eq!(combined, expected);
    }

    #[test]
    fn test_combine_prefers_earliest_declared_alternative() {
        let combined = combine_fields(&raw(&[
            ("street_type", Some("Street")),
            ("street_type_b", Some("Ave")),
        ]));
        assert_eq!(combined["street_type"], "Street");
    }

    #[test]
    fn test_combine_omits_empty_groups() {
        let combined = combine_fields(&raw(&[("street_type", None), ("street_type_b", None)]));
        assert!(combined.is_empty());
    }

    #[test]
    fn test_canonical_name_suffix_boundary() {
        assert_eq!(canonical_name("street_type_b"), "street_type");
        assert_eq!(canonical_name("route_id_2"), "route_id");
        assert_eq!(canonical_name("region1"), "region1");
        assert_eq!(canonical_name("po_box"), "po_box");
        assert_eq!(canonical_name("street_name"), "street_name");
    }

    #[test]
    fn test_compile_unknown_country() {
        assert_matches!(
            CompiledCountryPattern::compile("TheMoon"),
            Err(Error::CountryDetectionMissing { details }) if details == "TheMoon"
        );
    }

    #[test]
    fn test_compile_is_country_tagged() {
        let compiled = CompiledCountryPattern::compile("US").unwrap();
        assert_eq!(compiled.country(), "US");
    }

    #[test]
    fn test_find_matches_no_overlap() {
        let compiled = CompiledCountryPattern::compile("US").unwrap();
        let text = "a: 225 E. John Carpenter Freeway, Suite 1500 Irving, Texas 75062; \
                    b: 2400 Jefferson Davis Hwy, Arlington, Virginia 22202;";
        let matches: Vec<RawMatch> = find_matches(&compiled, text).collect();
        assert_eq!(matches.len(), 2);
        assert!(matches[0].end <= matches[1].start);
        assert!(matches[0].start < matches[1].start);
    }

    #[test]
    fn test_find_matches_empty_on_no_match() {
        let compiled = CompiledCountryPattern::compile("US").unwrap();
        assert_eq!(find_matches(&compiled, "No address here").count(), 0);
    }
}
