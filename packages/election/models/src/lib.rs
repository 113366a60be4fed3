#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Precinct election result types.
//!
//! Per-precinct vote records as read from the map's `GeoJSON` properties,
//! the margin color buckets, rollup scopes and summaries, and the sidebar
//! selection model.

pub mod margin;
pub mod selection;

use precinct_map_geography_models::DecodedLocation;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub use margin::{MarginBand, MarginBucket, Party};
pub use selection::{Breadcrumb, BreadcrumbTarget, Selection};

/// `GeoJSON` property names for a precinct feature.
pub mod properties {
    pub const GEOID: &str = "GEOID";
    pub const VOTES_DEM: &str = "votes_dem";
    pub const VOTES_REP: &str = "votes_rep";
    pub const VOTES_TOTAL: &str = "votes_total";
    pub const PCT_DEM_LEAD: &str = "pct_dem_lead";
}

/// Vote results for a single precinct.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrecinctRecord {
    /// Precinct GEOID (e.g. "08001-8134801173").
    pub geoid: String,
    /// Democratic votes.
    pub votes_dem: u64,
    /// Republican votes.
    pub votes_rep: u64,
    /// All votes cast. Not necessarily `votes_dem + votes_rep`.
    pub votes_total: u64,
    /// Democratic share minus Republican share, in `[-1, 1]`.
    pub pct_dem_lead: f64,
}

impl PrecinctRecord {
    /// Reads a record from a feature's property map.
    ///
    /// Missing or unreadable vote counts become `0`, a missing margin
    /// becomes `0.0`, and a missing GEOID becomes the empty string.
    #[must_use]
    pub fn from_properties(props: &Map<String, Value>) -> Self {
        let geoid = match props.get(properties::GEOID) {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Number(n)) => n.to_string(),
            _ => String::new(),
        };

        Self {
            geoid,
            votes_dem: count_property(props, properties::VOTES_DEM),
            votes_rep: count_property(props, properties::VOTES_REP),
            votes_total: count_property(props, properties::VOTES_TOTAL),
            pct_dem_lead: margin_property(props, properties::PCT_DEM_LEAD),
        }
    }

    /// Whether any votes were recorded. `votes_total` is authoritative.
    #[must_use]
    pub const fn has_votes(&self) -> bool {
        self.votes_total > 0
    }
}

#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
fn count_property(props: &Map<String, Value>, key: &str) -> u64 {
    match props.get(key) {
        Some(Value::Number(n)) => n.as_u64().unwrap_or_else(|| {
            n.as_f64()
                .filter(|v| v.is_finite() && *v > 0.0)
                .map_or(0, |v| v.round() as u64)
        }),
        Some(Value::String(s)) => s.trim().parse().unwrap_or(0),
        _ => 0,
    }
}

fn margin_property(props: &Map<String, Value>, key: &str) -> f64 {
    match props.get(key) {
        Some(Value::Number(n)) => n.as_f64().filter(|v| v.is_finite()).unwrap_or(0.0),
        Some(Value::String(s)) => s
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .unwrap_or(0.0),
        _ => 0.0,
    }
}

/// The administrative scope of a rollup.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "level", rename_all = "camelCase")]
pub enum AggregateScope {
    /// Every precinct in a state.
    State {
        /// Full state name (e.g. "Colorado").
        state: String,
    },
    /// Every precinct in one county of a state.
    County {
        /// Full state name.
        state: String,
        /// County name (e.g. "Adams").
        county: String,
    },
}

impl AggregateScope {
    #[must_use]
    pub fn state(state: impl Into<String>) -> Self {
        Self::State {
            state: state.into(),
        }
    }

    #[must_use]
    pub fn county(state: impl Into<String>, county: impl Into<String>) -> Self {
        Self::County {
            state: state.into(),
            county: county.into(),
        }
    }

    /// Display name: the state name or the county name.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::State { state } => state,
            Self::County { county, .. } => county,
        }
    }

    /// The state this scope lies in.
    #[must_use]
    pub fn state_name(&self) -> &str {
        match self {
            Self::State { state } | Self::County { state, .. } => state,
        }
    }

    /// Whether a decoded location falls inside this scope.
    #[must_use]
    pub fn contains(&self, location: &DecodedLocation) -> bool {
        match self {
            Self::State { state } => location.state == *state,
            Self::County { state, county } => {
                location.state == *state && location.county == *county
            }
        }
    }

    /// The enclosing scope, if any (county -> state).
    #[must_use]
    pub fn parent(&self) -> Option<Self> {
        match self {
            Self::State { .. } => None,
            Self::County { state, .. } => Some(Self::state(state.clone())),
        }
    }
}

/// Vote totals summed over every precinct in an [`AggregateScope`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregateSummary {
    /// Name of the scope (state or county name).
    pub name: String,
    /// Summed Democratic votes.
    pub votes_dem: u64,
    /// Summed Republican votes.
    pub votes_rep: u64,
    /// Summed total votes.
    pub votes_total: u64,
    /// Margin recomputed from the summed totals, `0.0` when there are no
    /// votes.
    pub pct_dem_lead: f64,
    /// Number of precincts in the scope.
    pub precinct_count: u64,
}

impl AggregateSummary {
    /// An all-zero summary for a scope with no matching precincts.
    #[must_use]
    pub fn empty(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            votes_dem: 0,
            votes_rep: 0,
            votes_total: 0,
            pct_dem_lead: 0.0,
            precinct_count: 0,
        }
    }

    /// Color bucket for the rollup, or `None` when no votes were recorded.
    #[must_use]
    pub fn bucket(&self) -> Option<MarginBucket> {
        (self.votes_total > 0).then(|| MarginBucket::classify(self.pct_dem_lead))
    }
}

/// Sidebar card contents for a single clicked precinct.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrecinctDetail {
    /// The precinct's vote record.
    pub record: PrecinctRecord,
    /// Decoded state, county, and precinct names.
    pub location: DecodedLocation,
    /// Color bucket, or `None` when no votes were recorded.
    pub bucket: Option<MarginBucket>,
}

impl PrecinctDetail {
    #[must_use]
    pub fn new(record: PrecinctRecord, location: DecodedLocation) -> Self {
        let bucket = MarginBucket::for_record(&record);
        Self {
            record,
            location,
            bucket,
        }
    }
}
