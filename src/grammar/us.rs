//! United States address grammar.

use super::parts;

/// State and territory names. Also used as first-level regions by the GB
/// grammar, which accepts US regions in forwarding addresses.
pub(crate) const STATE_NAMES: &str = r"alabama|alaska|arizona|arkansas|california|colorado
    |connecticut|delaware|district\ of\ columbia|florida|georgia|hawaii|idaho
    |illinois|indiana|iowa|kansas|kentucky|louisiana|maine|maryland
    |massachusetts|michigan|minnesota|mississippi|missouri|montana|nebraska
    |nevada|new\ hampshire|new\ jersey|new\ mexico|new\ york|north\ carolina
    |north\ dakota|ohio|oklahoma|oregon|pennsylvania|puerto\ rico
    |rhode\ island|south\ carolina|south\ dakota|tennessee|texas|utah|vermont
    |virginia|washington|west\ virginia|wisconsin|wyoming";

/// Two-letter state abbreviations, plus the dotted capital form.
pub(crate) const STATE_ABBREVS: &str = r"al|ak|az|ar|ca|co|ct|de|dc|d\.c\.|fl
    |ga|hi|id|il|in|ia|ks|ky|la|me|md|ma|mi|mn|ms|mo|mt|ne|nv|nh|nj|nm|ny|nc
    |nd|oh|ok|or|pa|pr|ri|sc|sd|tn|tx|ut|vt|va|wa|wv|wi|wy";

/// Five-digit ZIP with optional plus-four extension.
pub(crate) const POSTAL_CODE: &str = r"\b\d{5}(?:\-\d{4})?\b";

/// Country designations. Forms ending in a letter carry their own word
/// boundary; dotted forms are self-delimiting.
pub(crate) const COUNTRY: &str =
    r"(?:united\ states\ of\ america|united\ states|usa|us)\b|u\.s\.a\.|u\.s\.";

/// First-level region: a state name or abbreviation. The composed grammar
/// relies on the following separator to delimit the region, so dotted
/// abbreviations need no trailing boundary of their own.
pub(crate) fn region1() -> String {
    format!("(?:{STATE_NAMES}|{STATE_ABBREVS})")
}

/// The complete US address grammar.
///
/// A match requires street, city, region and postal code; the trailing
/// country designation is optional. The city is captured for delimiting but
/// is not part of the output schema.
pub(crate) fn full_address() -> String {
    format!(
        r"(?P<full_address>
            {full_street}
            [\,\ ]\ ?
            (?P<city>[a-z][a-z\ \.\-']{{0,25}}?)
            \,\ ?
            (?P<region1>{region})
            [\,\ ]\ ?
            (?P<postal_code>{postal})
            (?:\,?\ (?P<country>{country}))?
        )",
        full_street = parts::full_street(),
        region = region1(),
        postal = POSTAL_CODE,
        country = COUNTRY,
    )
}
