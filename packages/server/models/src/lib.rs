#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! API request and response types for the precinct map server.
//!
//! These types are serialized to JSON for the REST API consumed by the
//! map frontend. They wrap the core election types so the API contract
//! can evolve independently.

use chrono::{DateTime, Utc};
use precinct_map_election::{RestyleRequest, SelectionState};
use precinct_map_election_models::{AggregateScope, Breadcrumb, Selection};
use precinct_map_geography_models::fips::canonical_state_name;
use serde::{Deserialize, Serialize};

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiHealth {
    /// Whether the server is up.
    pub healthy: bool,
    /// Server crate version.
    pub version: String,
}

/// Result of the one-shot data load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum ApiDataStatus {
    /// The collection loaded.
    Loaded {
        /// Where it was loaded from.
        source: String,
        /// Number of precincts.
        precinct_count: usize,
        /// When the load finished.
        loaded_at: DateTime<Utc>,
    },
    /// The load failed. `message` is shown as a persistent banner.
    Failed {
        /// Where the load was attempted from.
        source: String,
        /// Human-readable error.
        message: String,
    },
    /// The renderer credential is missing, so nothing was loaded.
    Unconfigured {
        /// Instructions for supplying the credential.
        setup_instructions: String,
    },
}

/// Renderer configuration handed to the frontend.
///
/// When `configured` is false the frontend renders `setup_instructions`
/// instead of mounting the map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiRendererConfig {
    /// Whether the map SDK credential is present.
    pub configured: bool,
    /// Access token for the map SDK.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,
    /// Instructions for supplying the credential.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub setup_instructions: Option<String>,
}

impl ApiRendererConfig {
    #[must_use]
    pub const fn ready(access_token: String) -> Self {
        Self {
            configured: true,
            access_token: Some(access_token),
            setup_instructions: None,
        }
    }

    #[must_use]
    pub const fn unconfigured(setup_instructions: String) -> Self {
        Self {
            configured: false,
            access_token: None,
            setup_instructions: Some(setup_instructions),
        }
    }
}

/// Query parameters for the rollup endpoint.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryQueryParams {
    /// Full state name. Defaults to "Colorado".
    pub state: Option<String>,
    /// County name. When absent the whole state is rolled up.
    pub county: Option<String>,
}

impl SummaryQueryParams {
    /// Resolves the parameters into a rollup scope. State names are
    /// matched case-insensitively; unrecognized names pass through as
    /// given.
    #[must_use]
    pub fn scope(&self, default_state: &str) -> AggregateScope {
        let state = resolve_state(self.state.as_deref(), default_state);
        match self.county.as_deref().filter(|c| !c.trim().is_empty()) {
            Some(county) => AggregateScope::county(state, county),
            None => AggregateScope::state(state),
        }
    }
}

/// Resolves an optional user-supplied state name, falling back to
/// `default_state` when it is missing or blank.
#[must_use]
pub fn resolve_state(state: Option<&str>, default_state: &str) -> String {
    match state.map(str::trim).filter(|s| !s.is_empty()) {
        Some(name) => canonical_state_name(name).map_or_else(|| name.to_string(), str::to_string),
        None => default_state.to_string(),
    }
}

/// Query parameters for the styled precincts endpoint.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrecinctsQueryParams {
    /// Highlight every precinct in this state (or county, with `county`).
    pub state: Option<String>,
    /// Highlight every precinct in this county.
    pub county: Option<String>,
    /// Highlight a single precinct.
    pub geoid: Option<String>,
}

/// Query parameters for the counties endpoint.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountiesQueryParams {
    /// Full state name. Defaults to "Colorado".
    pub state: Option<String>,
}

/// Counties available for breadcrumb menus.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiCounties {
    /// The state the counties belong to.
    pub state: String,
    /// County names, sorted.
    pub counties: Vec<String>,
}

/// Response to a click on a precinct or breadcrumb.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiSelection {
    /// The new sidebar selection.
    pub selection: Selection,
    /// Breadcrumb trail for the selection.
    pub breadcrumbs: Vec<Breadcrumb>,
    /// What the renderer should highlight and fit to.
    pub restyle: RestyleRequest,
}

impl ApiSelection {
    #[must_use]
    pub fn new(state: &SelectionState, restyle: RestyleRequest) -> Self {
        Self {
            selection: state.selection().clone(),
            breadcrumbs: state.breadcrumbs(),
            restyle,
        }
    }
}

/// Error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Human-readable error.
    pub error: String,
}

impl ApiError {
    #[must_use]
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_params_default_to_state_scope() {
        let params = SummaryQueryParams {
            state: None,
            county: Some("  ".to_string()),
        };
        assert_eq!(params.scope("Colorado"), AggregateScope::state("Colorado"));

        let params = SummaryQueryParams {
            state: Some("Colorado".to_string()),
            county: Some("Adams".to_string()),
        };
        assert_eq!(
            params.scope("Utah"),
            AggregateScope::county("Colorado", "Adams")
        );
    }

    #[test]
    fn state_names_are_case_insensitive() {
        let params = SummaryQueryParams {
            state: Some(" colorado ".to_string()),
            county: Some("Adams".to_string()),
        };
        assert_eq!(
            params.scope("Utah"),
            AggregateScope::county("Colorado", "Adams")
        );
        assert_eq!(resolve_state(Some("Atlantis"), "Colorado"), "Atlantis");
        assert_eq!(resolve_state(None, "Colorado"), "Colorado");
    }

    #[test]
    fn renderer_config_wire_format() {
        let ready = serde_json::to_value(ApiRendererConfig::ready("pk.test".to_string())).unwrap();
        assert_eq!(
            ready,
            serde_json::json!({ "configured": true, "accessToken": "pk.test" })
        );

        let missing =
            serde_json::to_value(ApiRendererConfig::unconfigured("Set it".to_string())).unwrap();
        assert_eq!(
            missing,
            serde_json::json!({ "configured": false, "setupInstructions": "Set it" })
        );
    }

    #[test]
    fn failed_status_wire_format() {
        let value = serde_json::to_value(ApiDataStatus::Failed {
            source: "data/precincts.geojson".to_string(),
            message: "not found".to_string(),
        })
        .unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "status": "failed",
                "source": "data/precincts.geojson",
                "message": "not found",
            })
        );
    }
}
