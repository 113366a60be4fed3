//! Per-feature fill styling and styled `GeoJSON` export.

use std::collections::BTreeSet;

use precinct_map_election_models::{PrecinctRecord, margin};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::{PrecinctCollection, PrecinctFeature};

const FILL_OPACITY: f64 = 0.7;
const HIGHLIGHT_FILL_OPACITY: f64 = 0.9;
const STROKE_WEIGHT: f64 = 0.5;
const HIGHLIGHT_STROKE_WEIGHT: f64 = 2.5;
const STROKE_COLOR: &str = "#ffffff";
const HIGHLIGHT_STROKE_COLOR: &str = "#222222";

/// Style the renderer applies to one precinct polygon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureStyle {
    /// Fill color (hex).
    pub fill_color: String,
    /// Fill opacity in `[0, 1]`.
    pub fill_opacity: f64,
    /// Stroke width in pixels.
    pub weight: f64,
    /// Stroke color (hex).
    pub color: String,
}

/// Decides the style for one precinct.
///
/// Precincts with no recorded votes are gray; everything else is colored
/// by margin bucket. Highlighted precincts get a heavier, darker outline.
#[must_use]
pub fn style_feature(record: &PrecinctRecord, highlighted: bool) -> FeatureStyle {
    let (fill_opacity, weight, color) = if highlighted {
        (
            HIGHLIGHT_FILL_OPACITY,
            HIGHLIGHT_STROKE_WEIGHT,
            HIGHLIGHT_STROKE_COLOR,
        )
    } else {
        (FILL_OPACITY, STROKE_WEIGHT, STROKE_COLOR)
    };

    FeatureStyle {
        fill_color: margin::fill_color(record).to_string(),
        fill_opacity,
        weight,
        color: color.to_string(),
    }
}

/// Re-emits the collection as a `FeatureCollection` whose properties
/// carry the original vote fields, the decoded names, and the style
/// decision. Precincts whose GEOID is in `highlighted` get the highlight
/// style.
#[must_use]
pub fn styled_collection(
    collection: &PrecinctCollection,
    highlighted: &BTreeSet<String>,
) -> geojson::FeatureCollection {
    let features = collection
        .features()
        .iter()
        .map(|f| styled_feature(f, highlighted.contains(&f.record.geoid)))
        .collect();

    geojson::FeatureCollection {
        bbox: None,
        features,
        foreign_members: None,
    }
}

fn styled_feature(feature: &PrecinctFeature, highlighted: bool) -> geojson::Feature {
    let record = &feature.record;
    let style = style_feature(record, highlighted);

    let mut props = Map::new();
    props.insert("GEOID".to_string(), Value::from(record.geoid.clone()));
    props.insert("votes_dem".to_string(), Value::from(record.votes_dem));
    props.insert("votes_rep".to_string(), Value::from(record.votes_rep));
    props.insert("votes_total".to_string(), Value::from(record.votes_total));
    props.insert("pct_dem_lead".to_string(), Value::from(record.pct_dem_lead));
    props.insert("state".to_string(), Value::from(feature.location.state.clone()));
    props.insert("county".to_string(), Value::from(feature.location.county.clone()));
    props.insert(
        "precinct".to_string(),
        Value::from(feature.location.precinct.clone()),
    );
    props.insert("highlighted".to_string(), Value::from(highlighted));
    props.insert("fillColor".to_string(), Value::from(style.fill_color));
    props.insert("fillOpacity".to_string(), Value::from(style.fill_opacity));
    props.insert("weight".to_string(), Value::from(style.weight));
    props.insert("color".to_string(), Value::from(style.color));

    geojson::Feature {
        bbox: None,
        geometry: feature.geometry.clone(),
        id: Some(geojson::feature::Id::String(record.geoid.clone())),
        properties: Some(props),
        foreign_members: None,
    }
}
