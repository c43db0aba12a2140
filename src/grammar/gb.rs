//! United Kingdom address grammar.
//!
//! UK street naming is too open-ended to require a type from a fixed list,
//! so the street name is matched generically and the postcode anchors the
//! address instead. The street-type and region vocabularies are still kept
//! as registry data for callers that match address fragments.

use super::{parts, us};

/// Street-type vocabulary. Not required by the composed grammar; exposed for
/// fragment matching.
pub(crate) const STREET_TYPES: &str = "arcade|avenue|ave|boulevard|blvd|close|common\
    |court|ct|cove|crescent|cres|croft|drive|dr|esplanade|estate|fields|field\
    |gardens|garden|gate|glens|glen|green|grove|heath|heights|hills|hill|hollow\
    |island|isle|junction|lane|ln|lawns|lawn|lights|light|lodge|loop|lp|mall\
    |manor|meadows|meadow|mead|mews|mount|orchard|paddock|parade|parkway|park\
    |pkwy|passage|path|place|pl|plaza|quay|ridge|rise|roads|road|rd|row\
    |shores|shore|square|sq|street|st|terrace|ter|trail|vale|views|view|walk\
    |way|wharf|woods|wood|circle|cir|ctr|highway|hwy";

/// First-level regions: historic and ceremonial counties, plus US states and
/// territories, which appear in UK-routed forwarding addresses.
pub(crate) fn region1() -> String {
    format!(
        r"(?:{counties}|{us_names}|{us_abbrevs})",
        counties = r"bedfordshire|berkshire|bristol|buckinghamshire
            |cambridgeshire|cheshire|cornwall|cumbria|derbyshire|devon|dorset
            |durham|east\ sussex|essex|gloucestershire|greater\ london
            |greater\ manchester|hampshire|herefordshire|hertfordshire|kent
            |lancashire|leicestershire|lincolnshire|merseyside|middlesex
            |norfolk|north\ yorkshire|northamptonshire|northumberland
            |nottinghamshire|oxfordshire|rutland|shropshire|somerset
            |south\ yorkshire|staffordshire|suffolk|surrey|tyne\ and\ wear
            |warwickshire|west\ midlands|west\ sussex|west\ yorkshire
            |wiltshire|worcestershire",
        us_names = us::STATE_NAMES,
        us_abbrevs = us::STATE_ABBREVS,
    )
}

/// Postcode: outward code (area letters, district digit, optional trailing
/// letter or digit) plus inward code, with the interior space optional.
pub(crate) const POSTAL_CODE: &str = r"\b[a-z]{1,2}\d[a-z0-9]?\ ?\d[a-z]{2}\b";

/// Country designations, from the full formal style down to "UK".
pub(crate) const COUNTRY: &str = r"(?:
        (?:the\ )?united\ kingdom(?:\ of\ great\ britain(?:\ and\ northern\ ireland)?)?
        |(?:great\ )?britain(?:\ and\ northern\ ireland)?
        |northern\ ireland|england|scotland|wales|cymru|uk|gb
    )\b|u\.k\.";

/// The street portion: optional occupancy, floor, building and PO box
/// prefixes, an optional street number, then a generic street name.
pub(crate) fn full_street() -> String {
    format!(
        r"(?P<full_street>
            (?:(?P<occupancy>{occupancy})[\,\.]?\ )?
            (?:(?P<floor>{floor})[\,\.]?\ )?
            (?:(?P<building_id>{building})[\,\.]?\ )?
            (?:{po_box}[\,\.]?\ )?
            (?:{street_number}\ ?)?
            (?P<street_name>\w[\w\ \.\-']{{2,30}})
        )",
        occupancy = parts::OCCUPANCY_CORE,
        floor = parts::FLOOR_CORE,
        building = parts::BUILDING_CORE,
        po_box = parts::PO_BOX,
        street_number = parts::street_number(),
    )
}

/// The complete GB address grammar.
///
/// Up to two generic comma-separated segments (city, then region) may sit
/// between the street and the postcode; the postcode is mandatory and the
/// country designation optional.
pub(crate) fn full_address() -> String {
    format!(
        r"(?P<full_address>
            {full_street}
            (?:[\,\ ]\ ?(?P<city>[a-z][a-z\ \.\-']{{0,30}}?))?
            (?:[\,\ ]\ ?(?P<region1>[a-z][a-z\ \.\-']{{0,30}}?))?
            [\,\ ]\ ?
            (?P<postal_code>{POSTAL_CODE})
            (?:[\,\ ]\ ?(?P<country>{COUNTRY}))?
        )",
        full_street = full_street(),
    )
}
