//! HTTP handler functions for the precinct map API.

use std::collections::BTreeSet;
use std::sync::Arc;

use actix_web::{HttpResponse, web};
use precinct_map_election::style::styled_collection;
use precinct_map_election::{PrecinctCollection, SelectionState};
use precinct_map_server_models::{
    ApiCounties, ApiError, ApiHealth, ApiRendererConfig, ApiSelection, CountiesQueryParams,
    PrecinctsQueryParams, SummaryQueryParams, resolve_state,
};

use crate::config::SETUP_INSTRUCTIONS;
use crate::{AppState, LoadedData};

/// `GET /api/health`
pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(ApiHealth {
        healthy: true,
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// `GET /api/status`
///
/// Reports whether the precinct collection loaded. A failure message is
/// meant to be shown as a persistent banner.
pub async fn status(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(state.data.status())
}

/// `GET /api/config`
///
/// Hands the map access token to the frontend, or setup instructions when
/// it is missing.
pub async fn renderer_config(state: web::Data<AppState>) -> HttpResponse {
    let config = state.access_token.clone().map_or_else(
        || ApiRendererConfig::unconfigured(SETUP_INSTRUCTIONS.to_string()),
        ApiRendererConfig::ready,
    );
    HttpResponse::Ok().json(config)
}

/// `GET /api/precincts`
///
/// Returns every precinct as a styled `GeoJSON` `FeatureCollection`.
/// `geoid` highlights one precinct; otherwise `state`/`county` highlight a
/// rollup scope. With no parameters nothing is highlighted.
pub async fn precincts(
    state: web::Data<AppState>,
    params: web::Query<PrecinctsQueryParams>,
) -> HttpResponse {
    let collection = match loaded_collection(&state) {
        Ok(c) => c,
        Err(resp) => return resp,
    };

    let highlighted: BTreeSet<String> = if let Some(geoid) = params.geoid.as_deref() {
        std::iter::once(geoid.to_string()).collect()
    } else if params.state.is_some() || params.county.is_some() {
        let scope = SummaryQueryParams {
            state: params.state.clone(),
            county: params.county.clone(),
        }
        .scope(&state.default_state);
        collection.geoids_in(&scope)
    } else {
        BTreeSet::new()
    };

    HttpResponse::Ok().json(styled_collection(&collection, &highlighted))
}

/// `GET /api/precincts/{geoid}`
///
/// Click on a single precinct: selects it and returns the sidebar detail,
/// breadcrumbs, and highlight set.
pub async fn precinct(state: web::Data<AppState>, geoid: web::Path<String>) -> HttpResponse {
    let collection = match loaded_collection(&state) {
        Ok(c) => c,
        Err(resp) => return resp,
    };

    let mut selection = SelectionState::new();
    match selection.click_feature(&collection, &geoid) {
        Some(restyle) => HttpResponse::Ok().json(ApiSelection::new(&selection, restyle)),
        None => HttpResponse::NotFound().json(ApiError::new(format!(
            "No precinct with GEOID {}",
            geoid.as_str()
        ))),
    }
}

/// `GET /api/summary`
///
/// Click on a breadcrumb: rolls up a state or county and returns the
/// aggregate selection, breadcrumbs, and highlight set. An unknown scope
/// yields an all-zero summary rather than an error.
pub async fn summary(
    state: web::Data<AppState>,
    params: web::Query<SummaryQueryParams>,
) -> HttpResponse {
    let collection = match loaded_collection(&state) {
        Ok(c) => c,
        Err(resp) => return resp,
    };

    let scope = params.scope(&state.default_state);
    let mut selection = SelectionState::new();
    let restyle = selection.select_scope(&collection, scope);
    HttpResponse::Ok().json(ApiSelection::new(&selection, restyle))
}

/// `GET /api/counties`
///
/// Lists the counties present in the collection for a state.
pub async fn counties(
    state: web::Data<AppState>,
    params: web::Query<CountiesQueryParams>,
) -> HttpResponse {
    let collection = match loaded_collection(&state) {
        Ok(c) => c,
        Err(resp) => return resp,
    };

    let state_name = resolve_state(params.state.as_deref(), &state.default_state);
    HttpResponse::Ok().json(ApiCounties {
        counties: collection.counties(&state_name),
        state: state_name,
    })
}

/// Returns the loaded collection, or the `503` response explaining why
/// there is none.
fn loaded_collection(state: &AppState) -> Result<Arc<PrecinctCollection>, HttpResponse> {
    match &state.data {
        LoadedData::Ready { collection, .. } => Ok(Arc::clone(collection)),
        LoadedData::Failed { message, .. } => {
            Err(HttpResponse::ServiceUnavailable().json(ApiError::new(message.clone())))
        }
        LoadedData::Unconfigured => {
            Err(HttpResponse::ServiceUnavailable().json(ApiError::new(SETUP_INSTRUCTIONS)))
        }
    }
}

#[cfg(test)]
mod tests {
    use actix_web::{App, http::StatusCode, test};
    use precinct_map_election::PrecinctFeature;
    use precinct_map_election_models::{PrecinctRecord, Selection};
    use precinct_map_server_models::ApiDataStatus;
    use serde_json::Value;

    use super::*;
    use crate::configure_api;

    fn record(geoid: &str, dem: u64, rep: u64, total: u64) -> PrecinctRecord {
        PrecinctRecord {
            geoid: geoid.to_string(),
            votes_dem: dem,
            votes_rep: rep,
            votes_total: total,
            pct_dem_lead: 0.0,
        }
    }

    fn ready_state() -> AppState {
        let collection = PrecinctCollection::new(vec![
            PrecinctFeature::new(record("08001-1", 100, 50, 150), None),
            PrecinctFeature::new(record("08001-2", 20, 80, 100), None),
            PrecinctFeature::new(record("08031-1", 10, 10, 20), None),
        ]);
        AppState::new(
            LoadedData::ready(Arc::new(collection), "test".to_string()),
            Some("pk.test".to_string()),
        )
    }

    macro_rules! app {
        ($state:expr) => {
            test::init_service(
                App::new()
                    .app_data(web::Data::new($state))
                    .configure(configure_api),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn county_summary() {
        let app = app!(ready_state());
        let req = test::TestRequest::get()
            .uri("/api/summary?state=Colorado&county=Adams")
            .to_request();
        let body: ApiSelection = test::call_and_read_body_json(&app, req).await;

        let Selection::Aggregate { summary, .. } = body.selection else {
            panic!("expected an aggregate selection");
        };
        assert_eq!(summary.votes_dem, 120);
        assert_eq!(summary.votes_rep, 130);
        assert_eq!(summary.votes_total, 250);
        assert_eq!(summary.precinct_count, 2);
        assert!((summary.pct_dem_lead - (-0.04)).abs() < 1e-12);
        assert_eq!(body.restyle.highlighted.len(), 2);
        assert_eq!(body.breadcrumbs.len(), 2);
    }

    #[actix_web::test]
    async fn state_summary_defaults_to_colorado() {
        let app = app!(ready_state());
        let req = test::TestRequest::get().uri("/api/summary").to_request();
        let body: ApiSelection = test::call_and_read_body_json(&app, req).await;

        let Selection::Aggregate { summary, .. } = body.selection else {
            panic!("expected an aggregate selection");
        };
        assert_eq!(summary.name, "Colorado");
        assert_eq!(summary.precinct_count, 3);
    }

    #[actix_web::test]
    async fn precinct_click() {
        let app = app!(ready_state());
        let req = test::TestRequest::get()
            .uri("/api/precincts/08031-1")
            .to_request();
        let body: ApiSelection = test::call_and_read_body_json(&app, req).await;

        let Selection::Feature(detail) = body.selection else {
            panic!("expected a feature selection");
        };
        assert_eq!(detail.location.county, "Denver");
        assert_eq!(body.breadcrumbs.len(), 3);
    }

    #[actix_web::test]
    async fn unknown_precinct_is_404() {
        let app = app!(ready_state());
        let req = test::TestRequest::get()
            .uri("/api/precincts/08031-999")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn styled_precincts_highlight_scope() {
        let app = app!(ready_state());
        let req = test::TestRequest::get()
            .uri("/api/precincts?county=Adams")
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        let features = body["features"].as_array().unwrap();
        assert_eq!(features.len(), 3);
        let lit = features
            .iter()
            .filter(|f| f["properties"]["highlighted"] == Value::Bool(true))
            .count();
        assert_eq!(lit, 2);
    }

    #[actix_web::test]
    async fn counties_listing() {
        let app = app!(ready_state());
        let req = test::TestRequest::get().uri("/api/counties").to_request();
        let body: ApiCounties = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body.state, "Colorado");
        assert_eq!(body.counties, vec!["Adams".to_string(), "Denver".to_string()]);

        let req = test::TestRequest::get()
            .uri("/api/counties?state=COLORADO")
            .to_request();
        let body: ApiCounties = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body.state, "Colorado");
        assert_eq!(body.counties.len(), 2);
    }

    #[actix_web::test]
    async fn failed_load_is_reported() {
        let state = AppState::new(
            LoadedData::Failed {
                source: "data/precincts.geojson".to_string(),
                message: "Could not load precinct data: file not found".to_string(),
            },
            Some("pk.test".to_string()),
        );
        let app = app!(state);

        let req = test::TestRequest::get().uri("/api/summary").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
        let body: ApiError = test::read_body_json(resp).await;
        assert!(body.error.contains("file not found"));

        let req = test::TestRequest::get().uri("/api/status").to_request();
        let status: ApiDataStatus = test::call_and_read_body_json(&app, req).await;
        assert!(matches!(status, ApiDataStatus::Failed { .. }));
    }

    #[actix_web::test]
    async fn missing_token_serves_setup_instructions() {
        let app = app!(AppState::new(LoadedData::Unconfigured, None));

        let req = test::TestRequest::get().uri("/api/config").to_request();
        let config: ApiRendererConfig = test::call_and_read_body_json(&app, req).await;
        assert!(!config.configured);
        assert_eq!(
            config.setup_instructions.as_deref(),
            Some(SETUP_INSTRUCTIONS)
        );

        let req = test::TestRequest::get().uri("/api/precincts").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
    }
}
