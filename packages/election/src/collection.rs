//! The in-memory precinct collection.
//!
//! Built once from the loaded `FeatureCollection` and never mutated.
//! Each feature keeps its original geometry (for re-emitting styled
//! `GeoJSON`), its decoded location, and a bounding box the renderer can
//! fit the view to.

use std::collections::BTreeSet;

use geo::BoundingRect;
use precinct_map_election_models::{AggregateScope, AggregateSummary, PrecinctRecord};
use precinct_map_geography_models::{DecodedLocation, decode};
use serde::{Deserialize, Serialize};

use crate::aggregate;

/// Geographic bounding box in WGS84 degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bounds {
    pub west: f64,
    pub south: f64,
    pub east: f64,
    pub north: f64,
}

impl Bounds {
    /// Smallest box covering both `self` and `other`.
    #[must_use]
    pub fn union(self, other: Self) -> Self {
        Self {
            west: self.west.min(other.west),
            south: self.south.min(other.south),
            east: self.east.max(other.east),
            north: self.north.max(other.north),
        }
    }

    /// Bounding box of a `GeoJSON` geometry, or `None` for empty or
    /// unconvertible geometry.
    #[must_use]
    pub fn of_geometry(geometry: &geojson::Geometry) -> Option<Self> {
        let geom: geo::Geometry<f64> = geometry.clone().try_into().ok()?;
        geom.bounding_rect().map(|rect| Self {
            west: rect.min().x,
            south: rect.min().y,
            east: rect.max().x,
            north: rect.max().y,
        })
    }
}

/// One precinct: vote record, decoded location, and geometry.
#[derive(Debug, Clone)]
pub struct PrecinctFeature {
    pub record: PrecinctRecord,
    pub location: DecodedLocation,
    pub geometry: Option<geojson::Geometry>,
    pub bounds: Option<Bounds>,
}

impl PrecinctFeature {
    /// Builds a feature, decoding its GEOID and measuring its geometry.
    #[must_use]
    pub fn new(record: PrecinctRecord, geometry: Option<geojson::Geometry>) -> Self {
        let location = decode(&record.geoid);
        let bounds = geometry.as_ref().and_then(Bounds::of_geometry);
        Self {
            record,
            location,
            geometry,
            bounds,
        }
    }

    /// Reads a `GeoJSON` feature. Properties that are missing or malformed
    /// read as zero; see [`PrecinctRecord::from_properties`].
    #[must_use]
    pub fn from_geojson(feature: geojson::Feature) -> Self {
        let record = PrecinctRecord::from_properties(&feature.properties.unwrap_or_default());
        Self::new(record, feature.geometry)
    }
}

/// Every precinct loaded for the session.
#[derive(Debug, Clone, Default)]
pub struct PrecinctCollection {
    features: Vec<PrecinctFeature>,
}

impl PrecinctCollection {
    #[must_use]
    pub const fn new(features: Vec<PrecinctFeature>) -> Self {
        Self { features }
    }

    #[must_use]
    pub fn features(&self) -> &[PrecinctFeature] {
        &self.features
    }

    pub fn records(&self) -> impl Iterator<Item = &PrecinctRecord> {
        self.features.iter().map(|f| &f.record)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.features.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    /// Finds a precinct by exact GEOID.
    #[must_use]
    pub fn find(&self, geoid: &str) -> Option<&PrecinctFeature> {
        self.features.iter().find(|f| f.record.geoid == geoid)
    }

    /// Distinct decoded state names, sorted. Unparseable GEOIDs are
    /// skipped.
    #[must_use]
    pub fn states(&self) -> Vec<String> {
        self.features
            .iter()
            .filter(|f| !f.location.is_unknown())
            .map(|f| f.location.state.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Distinct county names within `state`, sorted.
    #[must_use]
    pub fn counties(&self, state: &str) -> Vec<String> {
        self.features
            .iter()
            .filter(|f| f.location.state == state && !f.location.is_unknown())
            .map(|f| f.location.county.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Precincts inside `scope`.
    pub fn in_scope<'a>(
        &'a self,
        scope: &'a AggregateScope,
    ) -> impl Iterator<Item = &'a PrecinctFeature> + 'a {
        self.features
            .iter()
            .filter(move |f| scope.contains(&f.location))
    }

    /// GEOIDs of every precinct inside `scope`.
    #[must_use]
    pub fn geoids_in(&self, scope: &AggregateScope) -> BTreeSet<String> {
        self.in_scope(scope).map(|f| f.record.geoid.clone()).collect()
    }

    /// Bounding box covering every precinct inside `scope`, or `None` if
    /// none of them has geometry.
    #[must_use]
    pub fn bounds(&self, scope: &AggregateScope) -> Option<Bounds> {
        self.in_scope(scope)
            .filter_map(|f| f.bounds)
            .reduce(Bounds::union)
    }

    /// Bounding box of a single precinct.
    #[must_use]
    pub fn feature_bounds(&self, geoid: &str) -> Option<Bounds> {
        self.find(geoid).and_then(|f| f.bounds)
    }

    /// Rolls up every precinct inside `scope`.
    #[must_use]
    pub fn summary_for(&self, scope: &AggregateScope) -> AggregateSummary {
        aggregate(self.records(), scope)
    }
}
