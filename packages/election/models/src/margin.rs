//! Margin-to-color bucketing for the choropleth fill.

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

use crate::PrecinctRecord;

/// Fill color for precincts with no recorded votes.
pub const NO_DATA_COLOR: &str = "#cccccc";

/// Which party a margin favors.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum Party {
    /// Positive margin.
    Democratic,
    /// Zero or negative margin.
    Republican,
}

/// Magnitude band of an absolute margin.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum MarginBand {
    /// Below 15 points.
    Tilt,
    /// 15 to 30 points.
    Lean,
    /// 30 to 50 points.
    Solid,
    /// 50 points or more.
    Strong,
}

impl MarginBand {
    /// Inclusive lower bound of the band, as a fraction.
    #[must_use]
    pub const fn threshold(self) -> f64 {
        match self {
            Self::Strong => 0.50,
            Self::Solid => 0.30,
            Self::Lean => 0.15,
            Self::Tilt => 0.0,
        }
    }

    /// Bands an absolute margin. NaN lands in [`Self::Tilt`].
    #[must_use]
    pub fn from_abs_margin(abs_margin: f64) -> Self {
        if abs_margin >= Self::Strong.threshold() {
            Self::Strong
        } else if abs_margin >= Self::Solid.threshold() {
            Self::Solid
        } else if abs_margin >= Self::Lean.threshold() {
            Self::Lean
        } else {
            Self::Tilt
        }
    }
}

/// One of the eight choropleth color buckets.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum MarginBucket {
    DemocraticStrong,
    DemocraticSolid,
    DemocraticLean,
    DemocraticTilt,
    RepublicanStrong,
    RepublicanSolid,
    RepublicanLean,
    RepublicanTilt,
}

impl MarginBucket {
    /// Classifies a signed margin (Democratic share minus Republican
    /// share).
    ///
    /// Only a strictly positive margin is Democratic. An exact `0.0` (and
    /// NaN) falls on the Republican side.
    #[must_use]
    pub fn classify(pct_dem_lead: f64) -> Self {
        let party = if pct_dem_lead > 0.0 {
            Party::Democratic
        } else {
            Party::Republican
        };
        Self::from_parts(party, MarginBand::from_abs_margin(pct_dem_lead.abs()))
    }

    /// Classifies a record, or `None` when it has no recorded votes.
    #[must_use]
    pub fn for_record(record: &PrecinctRecord) -> Option<Self> {
        record.has_votes().then(|| Self::classify(record.pct_dem_lead))
    }

    #[must_use]
    pub const fn from_parts(party: Party, band: MarginBand) -> Self {
        match (party, band) {
            (Party::Democratic, MarginBand::Strong) => Self::DemocraticStrong,
            (Party::Democratic, MarginBand::Solid) => Self::DemocraticSolid,
            (Party::Democratic, MarginBand::Lean) => Self::DemocraticLean,
            (Party::Democratic, MarginBand::Tilt) => Self::DemocraticTilt,
            (Party::Republican, MarginBand::Strong) => Self::RepublicanStrong,
            (Party::Republican, MarginBand::Solid) => Self::RepublicanSolid,
            (Party::Republican, MarginBand::Lean) => Self::RepublicanLean,
            (Party::Republican, MarginBand::Tilt) => Self::RepublicanTilt,
        }
    }

    #[must_use]
    pub const fn party(self) -> Party {
        match self {
            Self::DemocraticStrong
            | Self::DemocraticSolid
            | Self::DemocraticLean
            | Self::DemocraticTilt => Party::Democratic,
            Self::RepublicanStrong
            | Self::RepublicanSolid
            | Self::RepublicanLean
            | Self::RepublicanTilt => Party::Republican,
        }
    }

    #[must_use]
    pub const fn band(self) -> MarginBand {
        match self {
            Self::DemocraticStrong | Self::RepublicanStrong => MarginBand::Strong,
            Self::DemocraticSolid | Self::RepublicanSolid => MarginBand::Solid,
            Self::DemocraticLean | Self::RepublicanLean => MarginBand::Lean,
            Self::DemocraticTilt | Self::RepublicanTilt => MarginBand::Tilt,
        }
    }

    /// Hex fill color for this bucket.
    #[must_use]
    pub const fn color(self) -> &'static str {
        match self {
            Self::DemocraticStrong => "#08519c",
            Self::DemocraticSolid => "#3182bd",
            Self::DemocraticLean => "#6baed6",
            Self::DemocraticTilt => "#bdd7e7",
            Self::RepublicanStrong => "#a50f15",
            Self::RepublicanSolid => "#de2d26",
            Self::RepublicanLean => "#fb6a4a",
            Self::RepublicanTilt => "#fcae91",
        }
    }

    /// Returns all variants of this enum, strongest Democratic first.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::DemocraticStrong,
            Self::DemocraticSolid,
            Self::DemocraticLean,
            Self::DemocraticTilt,
            Self::RepublicanStrong,
            Self::RepublicanSolid,
            Self::RepublicanLean,
            Self::RepublicanTilt,
        ]
    }
}

/// Fill color for a record: [`NO_DATA_COLOR`] when no votes were recorded,
/// otherwise the color of its margin bucket.
#[must_use]
pub fn fill_color(record: &PrecinctRecord) -> &'static str {
    MarginBucket::for_record(record).map_or(NO_DATA_COLOR, MarginBucket::color)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strong_threshold_is_inclusive() {
        assert_eq!(MarginBucket::classify(0.5), MarginBucket::DemocraticStrong);
        assert_eq!(
            MarginBucket::classify(0.50001),
            MarginBucket::DemocraticStrong
        );
        assert_eq!(
            MarginBucket::classify(0.499_999),
            MarginBucket::DemocraticSolid
        );
        assert_eq!(MarginBucket::classify(-0.5), MarginBucket::RepublicanStrong);
    }

    #[test]
    fn band_edges() {
        assert_eq!(MarginBucket::classify(0.30), MarginBucket::DemocraticSolid);
        assert_eq!(MarginBucket::classify(0.15), MarginBucket::DemocraticLean);
        assert_eq!(MarginBucket::classify(0.149), MarginBucket::DemocraticTilt);
        assert_eq!(MarginBucket::classify(-0.3), MarginBucket::RepublicanSolid);
        assert_eq!(MarginBucket::classify(-0.15), MarginBucket::RepublicanLean);
        assert_eq!(MarginBucket::classify(-0.01), MarginBucket::RepublicanTilt);
        assert_eq!(MarginBucket::classify(1.0), MarginBucket::DemocraticStrong);
        assert_eq!(MarginBucket::classify(-1.0), MarginBucket::RepublicanStrong);
    }

    #[test]
    fn zero_margin_is_republican_side() {
        assert_eq!(MarginBucket::classify(0.0), MarginBucket::RepublicanTilt);
        assert_eq!(MarginBucket::classify(-0.0), MarginBucket::RepublicanTilt);
        assert_eq!(MarginBucket::classify(f64::NAN), MarginBucket::RepublicanTilt);
    }

    #[test]
    fn every_margin_lands_in_a_defined_bucket() {
        for i in -1000..=1000 {
            let m = f64::from(i) / 1000.0;
            let bucket = MarginBucket::classify(m);
            assert!(MarginBucket::all().contains(&bucket), "margin {m}");
            assert_eq!(bucket.party() == Party::Democratic, m > 0.0, "margin {m}");
        }
    }

    #[test]
    fn parts_roundtrip() {
        for bucket in MarginBucket::all() {
            assert_eq!(
                MarginBucket::from_parts(bucket.party(), bucket.band()),
                *bucket
            );
        }
    }

    #[test]
    fn colors_are_distinct() {
        let mut colors: Vec<&str> = MarginBucket::all().iter().map(|b| b.color()).collect();
        colors.push(NO_DATA_COLOR);
        colors.sort_unstable();
        colors.dedup();
        assert_eq!(colors.len(), 9);
    }

    #[test]
    fn no_votes_is_gray_regardless_of_margin() {
        let record = PrecinctRecord {
            geoid: "08001-1".to_string(),
            votes_dem: 0,
            votes_rep: 0,
            votes_total: 0,
            pct_dem_lead: 0.9,
        };
        assert_eq!(MarginBucket::for_record(&record), None);
        assert_eq!(fill_color(&record), NO_DATA_COLOR);

        let voted = PrecinctRecord {
            votes_total: 10,
            ..record
        };
        assert_eq!(fill_color(&voted), MarginBucket::DemocraticStrong.color());
    }

    #[test]
    fn bucket_names() {
        assert_eq!(
            MarginBucket::DemocraticStrong.to_string(),
            "DEMOCRATIC_STRONG"
        );
        assert_eq!(
            "REPUBLICAN_LEAN".parse::<MarginBucket>().unwrap(),
            MarginBucket::RepublicanLean
        );
    }
}
