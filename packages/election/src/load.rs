//! One-shot load of the precinct `FeatureCollection`.
//!
//! The collection is read once at startup from a local file or an HTTP
//! URL. There is no retry: a failed load is reported to the caller, which
//! decides how to surface it.

use std::fmt;
use std::path::PathBuf;

use geojson::GeoJson;

use crate::progress::ProgressCallback;
use crate::{LoadError, PrecinctCollection, PrecinctFeature};

/// Environment variable naming the data file path or URL.
pub const DATA_ENV_VAR: &str = "PRECINCT_MAP_DATA";

/// Default location of the precinct collection.
pub const DEFAULT_DATA_PATH: &str = "data/precincts.geojson";

/// Where the precinct collection is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    /// A local file.
    Path(PathBuf),
    /// An `http://` or `https://` URL.
    Url(String),
}

impl DataSource {
    /// Interprets `s` as a URL if it has an HTTP scheme, otherwise as a
    /// file path.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        let trimmed = s.trim();
        if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
            Self::Url(trimmed.to_string())
        } else {
            Self::Path(PathBuf::from(trimmed))
        }
    }

    /// Reads [`DATA_ENV_VAR`], falling back to [`DEFAULT_DATA_PATH`].
    #[must_use]
    pub fn from_env() -> Self {
        std::env::var(DATA_ENV_VAR)
            .ok()
            .filter(|s| !s.trim().is_empty())
            .map_or_else(|| Self::parse(DEFAULT_DATA_PATH), |s| Self::parse(&s))
    }

    /// Loads and parses the collection from this source. The progress
    /// reporter is finished on failure as well as on success.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError`] if the file cannot be read, the request fails
    /// or returns a non-success status, or the body is not a `GeoJSON`
    /// `FeatureCollection`.
    pub async fn load(
        &self,
        progress: &dyn ProgressCallback,
    ) -> Result<PrecinctCollection, LoadError> {
        match self.read_and_parse(progress).await {
            Ok(collection) => {
                progress.finish(format!("Loaded {} precincts", collection.len()));
                Ok(collection)
            }
            Err(e) => {
                progress.finish(format!("Failed to load {self}: {e}"));
                Err(e)
            }
        }
    }

    async fn read_and_parse(
        &self,
        progress: &dyn ProgressCallback,
    ) -> Result<PrecinctCollection, LoadError> {
        progress.set_message(format!("Reading {self}"));
        let body = match self {
            Self::Path(path) => {
                tokio::fs::read_to_string(path)
                    .await
                    .map_err(|source| LoadError::Io {
                        path: path.display().to_string(),
                        source,
                    })?
            }
            Self::Url(url) => fetch(url).await?,
        };

        log::info!("Read {} bytes from {self}", body.len());
        progress.set_message("Parsing precincts".to_string());

        parse_collection(&body, progress)
    }
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Path(path) => write!(f, "{}", path.display()),
            Self::Url(url) => f.write_str(url),
        }
    }
}

async fn fetch(url: &str) -> Result<String, LoadError> {
    let resp = reqwest::get(url).await?;
    if !resp.status().is_success() {
        return Err(LoadError::Status {
            url: url.to_string(),
            status: resp.status().as_u16(),
        });
    }
    Ok(resp.text().await?)
}

/// Parses a `GeoJSON` `FeatureCollection` body into a
/// [`PrecinctCollection`].
///
/// Individual features never fail to parse: missing properties read as
/// zero and malformed GEOIDs decode to the `Unknown` sentinel.
///
/// # Errors
///
/// Returns [`LoadError`] if the body is not valid `GeoJSON` or is not a
/// `FeatureCollection`.
pub fn parse_collection(
    body: &str,
    progress: &dyn ProgressCallback,
) -> Result<PrecinctCollection, LoadError> {
    let fc = match body.parse::<GeoJson>()? {
        GeoJson::FeatureCollection(fc) => fc,
        GeoJson::Feature(_) => return Err(LoadError::NotFeatureCollection { found: "Feature" }),
        GeoJson::Geometry(_) => return Err(LoadError::NotFeatureCollection { found: "Geometry" }),
    };

    progress.set_total(fc.features.len() as u64);

    let mut features = Vec::with_capacity(fc.features.len());
    let mut unknown = 0usize;
    for feature in fc.features {
        let precinct = PrecinctFeature::from_geojson(feature);
        if precinct.location.is_unknown() {
            unknown += 1;
        }
        features.push(precinct);
        progress.inc(1);
    }

    if unknown > 0 {
        log::warn!("{unknown} precincts have GEOIDs that could not be decoded");
    }

    Ok(PrecinctCollection::new(features))
}
