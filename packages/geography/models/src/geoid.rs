//! Precinct GEOID parsing.
//!
//! A precinct GEOID has the shape `SSCCC-PPPP...`: a two-digit state FIPS
//! code, a three-digit county FIPS code, a hyphen, and a precinct
//! identifier of arbitrary length (e.g. `08001-8134801173`).

use std::sync::LazyLock;

use regex::Regex;

use crate::{DecodedLocation, UNKNOWN, counties, fips};

static GEOID_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]{2})([0-9]{3})-(?s:(.+))$").unwrap_or_else(|_| unreachable!())
});

/// The raw components of a well-formed GEOID, borrowed from the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeoidParts<'a> {
    /// Two-digit state FIPS code.
    pub state_fips: &'a str,
    /// Three-digit county FIPS code.
    pub county_fips: &'a str,
    /// Everything after the hyphen, verbatim.
    pub precinct: &'a str,
}

/// Splits a GEOID into its codes without resolving any names.
///
/// Returns `None` unless the whole string matches `SSCCC-P+`.
#[must_use]
pub fn split(geoid: &str) -> Option<GeoidParts<'_>> {
    let caps = GEOID_PATTERN.captures(geoid)?;
    Some(GeoidParts {
        state_fips: caps.get(1)?.as_str(),
        county_fips: caps.get(2)?.as_str(),
        precinct: caps.get(3)?.as_str(),
    })
}

/// Decodes a GEOID into human-readable state, county, and precinct names.
///
/// Never fails. Codes missing from the lookup tables become
/// `"State {code}"` / `"County {code}"`, and a string that does not match
/// the GEOID shape at all decodes to `"Unknown"` / `"Unknown"` with the
/// original input as the precinct.
#[must_use]
pub fn decode(geoid: &str) -> DecodedLocation {
    let Some(parts) = split(geoid) else {
        return DecodedLocation {
            state: UNKNOWN.to_string(),
            county: UNKNOWN.to_string(),
            precinct: geoid.to_string(),
        };
    };

    let state = fips::state_name(parts.state_fips).map_or_else(
        || format!("State {}", parts.state_fips),
        ToString::to_string,
    );
    let county = counties::county_name(parts.county_fips).map_or_else(
        || format!("County {}", parts.county_fips),
        ToString::to_string,
    );

    DecodedLocation {
        state,
        county,
        precinct: parts.precinct.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn location(state: &str, county: &str, precinct: &str) -> DecodedLocation {
        DecodedLocation {
            state: state.to_string(),
            county: county.to_string(),
            precinct: precinct.to_string(),
        }
    }

    #[test]
    fn decodes_adams_county_precinct() {
        assert_eq!(
            decode("08001-8134801173"),
            location("Colorado", "Adams", "8134801173")
        );
    }

    #[test]
    fn unknown_codes_fall_back_to_labels() {
        assert_eq!(decode("99999-X"), location("State 99", "County 999", "X"));
    }

    #[test]
    fn county_table_is_colorado_only() {
        // 201 is Harris County, TX: the state resolves but the county code
        // is outside the Colorado table.
        assert_eq!(
            decode("48201-0001"),
            location("Texas", "County 201", "0001")
        );
        // County codes are looked up in the Colorado table whatever the
        // state, so 037 reads as Eagle even under California.
        assert_eq!(
            decode("06037-0001"),
            location("California", "Eagle", "0001")
        );
    }

    #[test]
    fn malformed_input_decodes_to_unknown() {
        for input in [
            "not-a-geoid",
            "",
            "08001",
            "08001-",
            "0801-123",
            "080011-123",
            "08001_123",
            "a8001-123",
            " 08001-123",
        ] {
            assert_eq!(
                decode(input),
                location("Unknown", "Unknown", input),
                "input: {input:?}"
            );
        }
    }

    #[test]
    fn precinct_suffix_is_verbatim() {
        let decoded = decode("08031-Denver Ward 7 / Pct-12");
        assert_eq!(decoded.county, "Denver");
        assert_eq!(decoded.precinct, "Denver Ward 7 / Pct-12");
    }

    #[test]
    fn split_borrows_codes() {
        let parts = split("08014-42").unwrap();
        assert_eq!(parts.state_fips, "08");
        assert_eq!(parts.county_fips, "014");
        assert_eq!(parts.precinct, "42");
        assert!(split("0814-42").is_none());
    }

    #[test]
    fn non_ascii_digits_are_rejected() {
        assert_eq!(decode("٠٨٠٠١-1").state, "Unknown");
    }
}
