#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Precinct map core.
//!
//! Loads the precinct `GeoJSON` collection once, rolls precinct results
//! up to county and state totals, decides each feature's fill style, and
//! implements the click contract the map renderer drives.

pub mod aggregate;
pub mod collection;
pub mod load;
pub mod progress;
pub mod state;
pub mod style;

use thiserror::Error;

pub use aggregate::aggregate;
pub use collection::{Bounds, PrecinctCollection, PrecinctFeature};
pub use load::DataSource;
pub use state::{RestyleRequest, SelectionState};
pub use style::{FeatureStyle, style_feature};

/// Errors that can occur while loading the precinct collection.
#[derive(Debug, Error)]
pub enum LoadError {
    /// Reading the data file failed.
    #[error("Failed to read {path}: {source}")]
    Io {
        /// The path that was read.
        path: String,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("Request to {url} failed with status {status}")]
    Status {
        /// The requested URL.
        url: String,
        /// HTTP status code.
        status: u16,
    },

    /// The body was not valid `GeoJSON`.
    #[error("GeoJSON error: {0}")]
    GeoJson(Box<geojson::Error>),

    /// The `GeoJSON` parsed but was not a `FeatureCollection`.
    #[error("Expected a FeatureCollection, found a {found}")]
    NotFeatureCollection {
        /// The `GeoJSON` object type that was found.
        found: &'static str,
    },
}

impl From<geojson::Error> for LoadError {
    fn from(e: geojson::Error) -> Self {
        Self::GeoJson(Box::new(e))
    }
}
