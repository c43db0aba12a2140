//! The structured address record produced by the parser.

use std::collections::BTreeMap;
use std::fmt;

/// Names of the string-valued schema fields, in declaration order.
const STRING_FIELDS: [&str; 15] = [
    "full_address",
    "full_street",
    "street_number",
    "street_name",
    "street_type",
    "post_direction",
    "occupancy",
    "floor",
    "building_id",
    "po_box",
    "postal_code",
    "region1",
    "country",
    "country_id",
    "route_id",
];

/// Characters stripped from both ends of every assigned field value.
const TRIM_CHARS: [char; 4] = [' ', ',', ';', ':'];

/// Structured representation of one matched address.
///
/// The schema is a closed, enumerated set of optional fields; every field
/// defaults to absent. An `Address` is an immutable snapshot built by the
/// parser — it is rebuilt, never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Address {
    /// The full matched address text
    pub full_address: Option<String>,
    /// The street portion of the match (number, name, type, occupancy...)
    pub full_street: Option<String>,
    /// House/street number (e.g., "225", "11-59", "Two Hundred")
    pub street_number: Option<String>,
    /// Street name (e.g., "E. John Carpenter")
    pub street_name: Option<String>,
    /// Street type (e.g., "Freeway", "Ave")
    pub street_type: Option<String>,
    /// Directional after the street (e.g., "NW", "South")
    pub post_direction: Option<String>,
    /// Occupancy marker (e.g., "Suite 1500", "Apt 1B")
    pub occupancy: Option<String>,
    /// Floor marker (e.g., "2nd floor")
    pub floor: Option<String>,
    /// Building marker (e.g., "Building 2")
    pub building_id: Option<String>,
    /// Post office box (e.g., "PO Box 2243")
    pub po_box: Option<String>,
    /// Postal code (e.g., "75062", "LS29 8BL")
    pub postal_code: Option<String>,
    /// First-level region: state, province or county
    pub region1: Option<String>,
    /// Country name as written in the text (e.g., "Canada", "UK")
    pub country: Option<String>,
    /// ISO code of the grammar that produced this match (e.g., "US")
    pub country_id: Option<String>,
    /// Route number for numbered routes (e.g., "66" in "Route 66")
    pub route_id: Option<String>,
    /// Byte offset of the match start within the normalized text
    pub match_start: Option<usize>,
    /// Byte offset of the match end within the normalized text
    pub match_end: Option<usize>,
}

impl Address {
    /// Build an `Address` from combined capture fields and a match span.
    ///
    /// Field names the schema does not recognize are dropped, which keeps the
    /// builder forward-compatible with grammar evolution. Assigned values are
    /// trimmed of surrounding spaces, commas, semicolons and colons. This
    /// constructor never fails, whatever subset of fields is supplied.
    pub(crate) fn from_match(
        fields: &BTreeMap<String, String>,
        country_id: &str,
        match_start: usize,
        match_end: usize,
    ) -> Self {
        let mut address = Address::default();
        for (name, value) in fields {
            let slot = match name.as_str() {
                "full_address" => &mut address.full_address,
                "full_street" => &mut address.full_street,
                "street_number" => &mut address.street_number,
                "street_name" => &mut address.street_name,
                "street_type" => &mut address.street_type,
                "post_direction" => &mut address.post_direction,
                "occupancy" => &mut address.occupancy,
                "floor" => &mut address.floor,
                "building_id" => &mut address.building_id,
                "po_box" => &mut address.po_box,
                "postal_code" => &mut address.postal_code,
                "region1" => &mut address.region1,
                "country" => &mut address.country,
                "route_id" => &mut address.route_id,
                _ => continue,
            };
            *slot = Some(value.trim_matches(&TRIM_CHARS[..]).to_string());
        }
        address.country_id = Some(country_id.to_string());
        address.match_start = Some(match_start);
        address.match_end = Some(match_end);
        address
    }

    /// Return every declared schema field as a map.
    ///
    /// Unset fields are present with a `None` value; the match offsets are
    /// rendered as decimal strings when set.
    pub fn as_dict(&self) -> BTreeMap<&'static str, Option<String>> {
        let mut map = BTreeMap::new();
        for (name, value) in STRING_FIELDS.iter().zip([
            &self.full_address,
            &self.full_street,
            &self.street_number,
            &self.street_name,
            &self.street_type,
            &self.post_direction,
            &self.occupancy,
            &self.floor,
            &self.building_id,
            &self.po_box,
            &self.postal_code,
            &self.region1,
            &self.country,
            &self.country_id,
            &self.route_id,
        ]) {
            map.insert(*name, value.clone());
        }
        map.insert("match_start", self.match_start.map(|v| v.to_string()));
        map.insert("match_end", self.match_end.map(|v| v.to_string()));
        map
    }

    /// Check whether any field of the address is set.
    pub fn is_empty(&self) -> bool {
        self.as_dict().values().all(|v| v.is_none())
    }
}

impl fmt::Display for Address {
    /// An address renders as its full matched text, or nothing when unset.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.full_address.as_deref().unwrap_or(""))
    }
}
