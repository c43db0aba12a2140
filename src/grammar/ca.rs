//! Canada address grammar.

use super::parts;

/// Province and territory names, English and French, plus postal
/// abbreviations.
pub(crate) const REGION1: &str = r"alberta|british\ columbia|colombie\-britannique
    |manitoba|new\ brunswick|nouveau\-brunswick|newfoundland\ and\ labrador
    |terre\-neuve\-et\-labrador|northwest\ territories
    |territoires\ du\ nord\-ouest|nova\ scotia|nouvelle\-écosse|nunavut
    |ontario|prince\ edward\ island|île\-du\-prince\-édouard|quebec|québec
    |saskatchewan|yukon
    |ab|bc|mb|nb|nl|nt|ns|nu|on|pe|qc|sk|yt";

/// Postal code in the `A1A 1A1` format; the first letter is restricted to
/// the forward sortation area alphabet and the interior space is optional.
pub(crate) const POSTAL_CODE: &str = r"\b[abceghj-nprstvxy]\d[a-z]\ ?\d[a-z]\d\b";

pub(crate) const COUNTRY: &str = r"canada\b";

/// The complete CA address grammar. Street composition is shared with the
/// US grammar; region vocabulary and the postal code shape differ.
pub(crate) fn full_address() -> String {
    format!(
        r"(?P<full_address>
            {full_street}
            [\,\ ]\ ?
            (?P<city>[a-z][a-z\ \.\-']{{0,25}}?)
            \,\ ?
            (?P<region1>{REGION1})
            [\,\ ]\ ?
            (?P<postal_code>{POSTAL_CODE})
            (?:\,?\ (?P<country>{COUNTRY}))?
        )",
        full_street = parts::full_street(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grammar::matches_exactly;

    #[test]
    fn test_region1() {
        for input in [
            "Ontario",
            "Quebec",
            "Québec",
            "Nova Scotia",
            "Colombie-Britannique",
            "New Brunswick",
            "Territoires Du Nord-Ouest",
            "BC",
            "yt",
        ] {
            assert!(matches_exactly(REGION1, input), "{input:?}");
        }
        for input in ["Texas", "Ontari0", "Yorkshire"] {
            assert!(!matches_exactly(REGION1, input), "{input:?}");
        }
    }

    #[test]
    fn test_postal_code() {
        for input in ["T2P 1H3", "T2P1H3", "L1W3E6", "L4N 8G1", "J8Y 3G5", "J9A 1L8"] {
            assert!(matches_exactly(POSTAL_CODE, input), "{input:?}");
        }
        for input in ["1A1 A1A", "75062", "Z2P 1H3", "T2P 1H"] {
            assert!(!matches_exactly(POSTAL_CODE, input), "{input:?}");
        }
    }

    #[test]
    fn test_full_address() {
        let pattern = full_address();
        for input in [
            "18 Yonge Street, Suite 1201, Toronto, Ontario M5E 1Z8",
            "18 Yonge Street, Suite 1201, Toronto, Ontario M5E 1Z8, Canada",
            "455 Larkspur Dr., Victoria, British Columbia V8T 4J5",
            "4510 50 Ave, Red Deer, Alberta T4N 3Z6",
            "918 16 Avenue NW, Calgary, AB T2M 0K3",
            "PO box 1070, Niagara Falls, ON L2E 6V9",
        ] {
            assert!(matches_exactly(&pattern, input), "{input:?}");
        }
        for input in [
            "No address here",
            "Ontario M5E 1Z8",
            "2400 Jefferson Davis Hwy, Arlington, Virginia 22202",
        ] {
            assert!(!matches_exactly(&pattern, input), "{input:?}");
        }
    }
}
