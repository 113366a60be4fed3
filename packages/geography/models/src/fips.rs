//! US state FIPS code utilities.
//!
//! Maps two-digit FIPS codes to full names for the 50 US states, DC, and
//! the inhabited territories.

/// FIPS codes for the 50 states + DC.
pub const STATE_FIPS: &[&str] = &[
    "01", "02", "04", "05", "06", "08", "09", "10", "11", "12", "13", "15", "16", "17", "18", "19",
    "20", "21", "22", "23", "24", "25", "26", "27", "28", "29", "30", "31", "32", "33", "34", "35",
    "36", "37", "38", "39", "40", "41", "42", "44", "45", "46", "47", "48", "49", "50", "51", "53",
    "54", "55", "56",
];

/// FIPS codes for US territories and minor outlying islands.
pub const TERRITORY_FIPS: &[&str] = &["60", "66", "69", "72", "74", "78"];

/// Two-digit FIPS code for Colorado.
pub const COLORADO_FIPS: &str = "08";

/// Maps a two-digit FIPS code to the full state or territory name.
///
/// Returns `None` for unrecognized codes so callers can choose their own
/// fallback label.
#[must_use]
pub fn state_name(fips: &str) -> Option<&'static str> {
    let name = match fips {
        "01" => "Alabama",
        "02" => "Alaska",
        "04" => "Arizona",
        "05" => "Arkansas",
        "06" => "California",
        "08" => "Colorado",
        "09" => "Connecticut",
        "10" => "Delaware",
        "11" => "District of Columbia",
        "12" => "Florida",
        "13" => "Georgia",
        "15" => "Hawaii",
        "16" => "Idaho",
        "17" => "Illinois",
        "18" => "Indiana",
        "19" => "Iowa",
        "20" => "Kansas",
        "21" => "Kentucky",
        "22" => "Louisiana",
        "23" => "Maine",
        "24" => "Maryland",
        "25" => "Massachusetts",
        "26" => "Michigan",
        "27" => "Minnesota",
        "28" => "Mississippi",
        "29" => "Missouri",
        "30" => "Montana",
        "31" => "Nebraska",
        "32" => "Nevada",
        "33" => "New Hampshire",
        "34" => "New Jersey",
        "35" => "New Mexico",
        "36" => "New York",
        "37" => "North Carolina",
        "38" => "North Dakota",
        "39" => "Ohio",
        "40" => "Oklahoma",
        "41" => "Oregon",
        "42" => "Pennsylvania",
        "44" => "Rhode Island",
        "45" => "South Carolina",
        "46" => "South Dakota",
        "47" => "Tennessee",
        "48" => "Texas",
        "49" => "Utah",
        "50" => "Vermont",
        "51" => "Virginia",
        "53" => "Washington",
        "54" => "West Virginia",
        "55" => "Wisconsin",
        "56" => "Wyoming",
        "60" => "American Samoa",
        "66" => "Guam",
        "69" => "Northern Mariana Islands",
        "72" => "Puerto Rico",
        "74" => "U.S. Minor Outlying Islands",
        "78" => "U.S. Virgin Islands",
        _ => return None,
    };
    Some(name)
}

/// Reverse lookup: full state or territory name to its FIPS code.
///
/// Matching is case-insensitive.
#[must_use]
pub fn state_fips_for_name(name: &str) -> Option<&'static str> {
    STATE_FIPS
        .iter()
        .chain(TERRITORY_FIPS)
        .copied()
        .find(|fips| state_name(fips).is_some_and(|n| n.eq_ignore_ascii_case(name)))
}

/// Canonical spelling of a state or territory name typed by a user, e.g.
/// `"colorado"` to `"Colorado"`.
#[must_use]
pub fn canonical_state_name(name: &str) -> Option<&'static str> {
    state_fips_for_name(name.trim()).and_then(state_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fips_count() {
        assert_eq!(STATE_FIPS.len(), 51);
        assert_eq!(TERRITORY_FIPS.len(), 6);
    }

    #[test]
    fn name_coverage() {
        for fips in STATE_FIPS.iter().chain(TERRITORY_FIPS) {
            assert!(state_name(fips).is_some(), "no name for FIPS: {fips}");
        }
    }

    #[test]
    fn colorado() {
        assert_eq!(state_name(COLORADO_FIPS), Some("Colorado"));
        assert_eq!(state_fips_for_name("colorado"), Some(COLORADO_FIPS));
    }

    #[test]
    fn unknown_fips() {
        assert_eq!(state_name("99"), None);
        assert_eq!(state_name("03"), None);
        assert_eq!(state_name(""), None);
        assert_eq!(state_fips_for_name("Atlantis"), None);
    }

    #[test]
    fn territories() {
        assert_eq!(state_name("72"), Some("Puerto Rico"));
        assert_eq!(state_fips_for_name("Guam"), Some("66"));
    }

    #[test]
    fn canonical_names() {
        assert_eq!(canonical_state_name("  COLORADO "), Some("Colorado"));
        assert_eq!(canonical_state_name("puerto rico"), Some("Puerto Rico"));
        assert_eq!(canonical_state_name("Atlantis"), None);
    }
}
