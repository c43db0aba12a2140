//! Per-country address grammar registry.
//!
//! Each supported country contributes one composed full-address pattern,
//! assembled from named sub-patterns. Grammar text is written for
//! free-spacing, case-insensitive matching and compiled lazily by the
//! parser; this module only hands out pattern text.

mod ca;
mod gb;
mod parts;
mod us;

/// Country codes with a registered grammar, in registry order.
const SUPPORTED: [&str; 3] = ["US", "CA", "GB"];

/// The composed full-address grammar for `country`, or `None` when the
/// registry has no entry. Lookup is case-insensitive.
pub(crate) fn full_address(country: &str) -> Option<String> {
    match country.to_ascii_uppercase().as_str() {
        "US" => Some(us::full_address()),
        "CA" => Some(ca::full_address()),
        "GB" => Some(gb::full_address()),
        _ => None,
    }
}

/// Whether `country` has a registered grammar.
pub(crate) fn is_supported(country: &str) -> bool {
    full_address(country).is_some()
}

/// Country codes with a registered grammar.
pub fn supported_countries() -> &'static [&'static str] {
    &SUPPORTED
}

/// The named sub-patterns a country's grammar is assembled from, in
/// composition order: useful for matching address fragments or inspecting
/// the registry. Returns `None` for an unregistered country.
pub fn sub_patterns(country: &str) -> Option<Vec<(&'static str, String)>> {
    match country.to_ascii_uppercase().as_str() {
        "US" => Some(vec![
            ("street_number", parts::street_number()),
            ("street_type", parts::street_type()),
            ("post_direction", parts::POST_DIRECTION.to_string()),
            ("floor", parts::floor()),
            ("building_id", parts::building()),
            ("occupancy", parts::occupancy()),
            ("po_box", parts::PO_BOX.to_string()),
            ("full_street", parts::full_street()),
            ("region1", us::region1()),
            ("postal_code", us::POSTAL_CODE.to_string()),
            ("country", us::COUNTRY.to_string()),
            ("full_address", us::full_address()),
        ]),
        "CA" => Some(vec![
            ("street_number", parts::street_number()),
            ("street_type", parts::street_type()),
            ("post_direction", parts::POST_DIRECTION.to_string()),
            ("floor", parts::floor()),
            ("building_id", parts::building()),
            ("occupancy", parts::occupancy()),
            ("po_box", parts::PO_BOX.to_string()),
            ("full_street", parts::full_street()),
            ("region1", ca::REGION1.to_string()),
            ("postal_code", ca::POSTAL_CODE.to_string()),
            ("country", ca::COUNTRY.to_string()),
            ("full_address", ca::full_address()),
        ]),
        "GB" => Some(vec![
            ("street_number", parts::street_number()),
            ("street_type", gb::STREET_TYPES.to_string()),
            ("floor", parts::floor()),
            ("building_id", parts::building()),
            ("occupancy", parts::occupancy()),
            ("po_box", parts::PO_BOX.to_string()),
            ("full_street", gb::full_street()),
            ("region1", gb::region1()),
            ("postal_code", gb::POSTAL_CODE.to_string()),
            ("country", gb::COUNTRY.to_string()),
            ("full_address", gb::full_address()),
        ]),
        _ => None,
    }
}

/// Anchor `pattern` at the start of `input` and require it to consume the
/// whole string. Grammar data tests match fragments exactly rather than
/// scanning.
#[cfg(test)]
pub(crate) fn matches_exactly(pattern: &str, input: &str) -> bool {
    let re = regex::RegexBuilder::new(&format!("^(?:{pattern})"))
        .case_insensitive(true)
        .ignore_whitespace(true)
        .size_limit(1 << 25)
        .build()
        .expect("grammar fragment must compile");
    re.find(input).is_some_and(|m| m.end() == input.len())
}
