#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Administrative geography for election precincts.
//!
//! Static FIPS lookup tables and the GEOID decoder that turns a precinct
//! identifier into the state, county, and precinct names shown in the
//! sidebar breadcrumbs.

pub mod counties;
pub mod fips;
pub mod geoid;

use serde::{Deserialize, Serialize};

pub use geoid::decode;

/// Sentinel used for both state and county when a GEOID cannot be parsed.
pub const UNKNOWN: &str = "Unknown";

/// The administrative location a precinct GEOID decodes to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecodedLocation {
    /// Full state name (e.g. "Colorado"), a `"State {code}"` fallback, or
    /// [`UNKNOWN`].
    pub state: String,
    /// County name (e.g. "Adams"), a `"County {code}"` fallback, or
    /// [`UNKNOWN`].
    pub county: String,
    /// Precinct identifier, or the whole input when it did not parse.
    pub precinct: String,
}

impl DecodedLocation {
    /// Whether the GEOID failed to parse.
    #[must_use]
    pub fn is_unknown(&self) -> bool {
        self.state == UNKNOWN && self.county == UNKNOWN
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_detection() {
        assert!(decode("garbage").is_unknown());
        assert!(!decode("99999-1").is_unknown());
    }
}
