//! Grammar building blocks shared between country modules.
//!
//! All patterns are written for free-spacing, case-insensitive, Unicode
//! matching: literal spaces appear as `\ `, structural whitespace is
//! insignificant. None of the patterns use look-around or backreferences.

/// Number words 0-9, each consuming its trailing separator.
pub(crate) const ZERO_TO_NINE: &str =
    r"\b(?:zero|one|two|three|four|five|six|seven|eight|nine)[\-\ ]";

/// Number words for tens, including the common "fourty" misspelling.
pub(crate) const TEN_TO_NINETY: &str =
    r"\b(?:ten|twenty|thirty|fou?rty|fifty|sixty|seventy|eighty|ninety)[\-\ ]";

pub(crate) const HUNDRED: &str = r"\bhundred[\-\ ]";

pub(crate) const THOUSAND: &str = r"\bthousand[\-\ ]";

/// A street number: spelled-out numerals ("Two Hundred And Fifty"), or
/// digits with an optional range ("11-59") or unit letter ("9C"), with an
/// optional "No."/"Num."/"Number" prefix.
pub(crate) fn street_number() -> String {
    format!(
        r"(?P<street_number>
            (?:(?:number|no\.?|num\.?)\ )?
            (?:
                (?:{ZERO_TO_NINE}|{TEN_TO_NINETY}|{HUNDRED}|{THOUSAND}|and\ )+
                |
                \d{{1,5}}(?:\ ?\-\ ?\d{{1,5}})?[a-z]?\ ?
            )
        )"
    )
}

/// Directional after a street, for use inside a composed street pattern.
/// Two-letter forms are bare; a period is only valid after a single letter.
pub(crate) const POST_DIRECTION_CORE: &str = r"(?:northeast|northwest|southeast|southwest
                                                |north|south|east|west|ne|nw|se|sw)\b
                                              |[nsew]\b\.?";

/// Standalone post-direction sub-grammar, separator included.
pub(crate) const POST_DIRECTION: &str = r"(?P<post_direction>
    (?:northeast|northwest|southeast|southwest|north|south|east|west)\ |
    (?:ne|nw|se|sw)\ |
    [nsew]\.?\ )";

/// Occupancy marker: a unit keyword plus an identifier ("Suite 1500",
/// "Apt 1B", "Flat 81b", "Suite#2").
pub(crate) const OCCUPANCY_CORE: &str = r"(?:apartment|apt|suite|ste|studio|room|rm|unit|flat)
                                          [\.\:]?\ ?\#?\ ?
                                          [0-9a-z][0-9a-z\&\-\/\#]{0,6}";

/// Standalone occupancy sub-grammar.
pub(crate) fn occupancy() -> String {
    format!(r"(?P<occupancy>{OCCUPANCY_CORE}\ ?)")
}

/// Floor marker: "floor 3", "2nd floor", "16th. floor".
pub(crate) const FLOOR_CORE: &str =
    r"(?:\d{1,3}(?:st|nd|rd|th)?\.?\ )?(?:floor|fl)\.?(?:\ \d{1,3})?";

/// Standalone floor sub-grammar.
pub(crate) fn floor() -> String {
    format!(r"(?P<floor>{FLOOR_CORE}\ ?)")
}

/// Building marker: "Building 2", "bldg m", "building one".
pub(crate) const BUILDING_CORE: &str = r"(?:building|bldg)\.?
    (?:\ (?:\d{1,4}[a-z]?|[a-z]\b|zero|one|two|three|four|five|six|seven|eight|nine))?";

/// Standalone building sub-grammar, separator included.
pub(crate) fn building() -> String {
    format!(r"(?P<building_id>{BUILDING_CORE}\ )")
}

/// Post office box, tolerating missing periods and spaces ("PO box 1070",
/// "P.O. box119", "PoBox53485").
pub(crate) const PO_BOX: &str = r"(?P<po_box>\bp\.?\ ?o\.?\ ?box\ ?\d{1,8})";

/// Street-type vocabulary shared by the US and CA grammars.
pub(crate) const STREET_TYPES: &str = "alley|aly|annex|anex|anx|arcade|arc|avenue|ave\
    |bayou|beach|bend|bluffs?|boulevard|blvd|bottom|branch|bridge|brooks?|burgs?|bypass\
    |camp|canyon|cape|causeway|centers?|ctr|circles?|cir|cliffs?|club|commons?|corners?\
    |course|courts?|ct|coves?|creek|crescent|cres|crest|crossing|crossroads?|curve\
    |dale|dam|divide|drives?|dr|estates?|expressway|expy|extensions?|ext\
    |falls?|ferry|fields?|flats?|fords?|forest|forges?|forks?|fort|freeway|fwy\
    |gardens?|gdns|gateway|glens?|greens?|groves?|harbors?|haven|heights|hts\
    |highway|hwy|hills?|hollow|inlet|islands?|isle|junctions?|jct|keys?|knolls?\
    |lakes?|landing|lanes?|ln|lights?|loaf|locks?|lodge|loop|mall|manors?|meadows?\
    |mews|mills?|mission|motorway|mount|mountains?|mt|neck|orchard|oval|overpass\
    |parks?|parkways?|pkwy|passage|pass|paths?|pike|pines?|places?|pl|plains?|plaza\
    |points?|pt|ports?|prairie|radial|ramp|ranch|rapids?|rest|ridges?|rivers?\
    |roads?|rd|route|rte|rows?|rue|run|shoals?|shores?|skyway|springs?|spgs|spurs?\
    |squares?|sq|stations?|streams?|streets?|st|summit|terrace|ter|throughway\
    |trace|track|trail|trl|tunnel|turnpike|tpke|underpass|unions?\
    |valleys?|viaduct|views?|villages?|ville|vista|walks?|ways?|wy|wells?";

/// Standalone street-type sub-grammar with the optional numbered-route
/// designation ("Street route 5").
pub(crate) fn street_type() -> String {
    format!(r"(?P<street_type>{STREET_TYPES})\b\.?(?:\ route\ (?P<route_id>\d{{1,5}}))?\ ?")
}

/// The full street composition shared by the US and CA grammars.
///
/// Three alternatives follow the street number: a named street with a typed
/// suffix ("E. John Carpenter Freeway"), the type-first "Avenue A" form, and
/// numbered routes ("State Route 30"). The latter two must use suffixed
/// capture names; the group combiner folds them back onto the base names.
/// A PO box can stand in for the street entirely.
///
/// The street name is greedy: a name containing a type word ("Timber Ridge
/// Lane", "N Court Sq") extends to the last type token instead of stopping
/// at the first.
pub(crate) fn full_street() -> String {
    format!(
        r"(?P<full_street>
            (?:
                {po_box}
                |
                {street_number}
                (?:
                    (?P<street_name>\w[\w\ \.\-']{{0,30}})
                    \ (?P<street_type>{types})\b\.?
                    (?:\ route\ (?P<route_id>\d{{1,5}}))?
                    (?:\,?\ (?P<post_direction>{dir}))?
                    |
                    (?P<street_type_b>avenue|ave)\.?
                    \ (?P<street_name_b>[a-z]\b|\d{{1,2}}(?:st|nd|rd|th)?\b)
                    |
                    (?P<street_name_c>
                        (?:(?:state|us|u\.s\.|county|old)\ )?
                        (?P<street_type_c>highway|hwy|route|rte)
                    )\ (?P<route_id_b>\d{{1,5}})\b
                )
            )
            (?:\,?\ (?P<floor>{floor}))?
            (?:\,?\ (?P<building_id>{building}))?
            (?:\,?\ (?P<occupancy>{occupancy}))?
        )",
        po_box = PO_BOX,
        street_number = street_number(),
        types = STREET_TYPES,
        dir = POST_DIRECTION_CORE,
        floor = FLOOR_CORE,
        building = BUILDING_CORE,
        occupancy = OCCUPANCY_CORE,
    )
}
