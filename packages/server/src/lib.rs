#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Actix-Web API server for the precinct map.
//!
//! Loads the precinct `GeoJSON` collection once at startup and serves the
//! styled collection, click handling, and county/state rollups to the
//! map frontend, plus the frontend's static files. A failed load does not
//! stop the server: the error is kept and reported on every data request
//! so the frontend can show it as a banner.

pub mod config;
mod handlers;
pub mod interactive;

use std::sync::Arc;

use actix_cors::Cors;
use actix_files::Files;
use actix_web::{App, HttpServer, middleware, web};
use chrono::{DateTime, Utc};
use precinct_map_election::progress::NullProgress;
use precinct_map_election::{DataSource, PrecinctCollection};
use precinct_map_geography_models::fips::{COLORADO_FIPS, state_name};
use precinct_map_server_models::ApiDataStatus;

use crate::config::{SETUP_INSTRUCTIONS, ServerConfig};

/// Outcome of the startup load.
#[derive(Debug, Clone)]
pub enum LoadedData {
    /// The collection is available.
    Ready {
        /// The immutable collection shared by all workers.
        collection: Arc<PrecinctCollection>,
        /// Where it was loaded from.
        source: String,
        /// When the load finished.
        loaded_at: DateTime<Utc>,
    },
    /// The load failed; `message` is reported on every data request.
    Failed {
        /// Where the load was attempted from.
        source: String,
        /// Human-readable error.
        message: String,
    },
    /// No access token was configured, so nothing was loaded.
    Unconfigured,
}

impl LoadedData {
    /// Loads `source`, capturing any failure instead of returning it.
    pub async fn load(source: &DataSource) -> Self {
        log::info!("Loading precincts from {source}...");
        match source.load(&NullProgress).await {
            Ok(collection) => {
                log::info!("Loaded {} precincts", collection.len());
                Self::ready(Arc::new(collection), source.to_string())
            }
            Err(e) => {
                log::error!("Failed to load precincts from {source}: {e}");
                Self::Failed {
                    source: source.to_string(),
                    message: format!("Could not load precinct data: {e}"),
                }
            }
        }
    }

    #[must_use]
    pub fn ready(collection: Arc<PrecinctCollection>, source: String) -> Self {
        Self::Ready {
            collection,
            source,
            loaded_at: Utc::now(),
        }
    }

    /// API view of the load outcome.
    #[must_use]
    pub fn status(&self) -> ApiDataStatus {
        match self {
            Self::Ready {
                collection,
                source,
                loaded_at,
            } => ApiDataStatus::Loaded {
                source: source.clone(),
                precinct_count: collection.len(),
                loaded_at: *loaded_at,
            },
            Self::Failed { source, message } => ApiDataStatus::Failed {
                source: source.clone(),
                message: message.clone(),
            },
            Self::Unconfigured => ApiDataStatus::Unconfigured {
                setup_instructions: SETUP_INSTRUCTIONS.to_string(),
            },
        }
    }
}

/// Shared application state.
pub struct AppState {
    /// The startup load outcome.
    pub data: LoadedData,
    /// Map SDK access token handed to the frontend.
    pub access_token: Option<String>,
    /// State used when a request names none.
    pub default_state: String,
}

impl AppState {
    #[must_use]
    pub fn new(data: LoadedData, access_token: Option<String>) -> Self {
        Self {
            data,
            access_token,
            default_state: state_name(COLORADO_FIPS).unwrap_or("Colorado").to_string(),
        }
    }
}

/// Registers the `/api` routes.
pub fn configure_api(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .route("/health", web::get().to(handlers::health))
            .route("/status", web::get().to(handlers::status))
            .route("/config", web::get().to(handlers::renderer_config))
            .route("/precincts", web::get().to(handlers::precincts))
            .route("/precincts/{geoid}", web::get().to(handlers::precinct))
            .route("/summary", web::get().to(handlers::summary))
            .route("/counties", web::get().to(handlers::counties)),
    );
}

/// Starts the precinct map API server.
///
/// Checks for the map access token first; without it nothing is loaded
/// and every data endpoint answers with setup instructions. Otherwise the
/// precinct collection is loaded once, then the Actix-Web HTTP server
/// starts. The caller provides the async runtime and the logger.
///
/// # Errors
///
/// Returns an `std::io::Result` error if the HTTP server fails to bind or
/// encounters a runtime error.
#[allow(clippy::future_not_send)]
pub async fn run_server(config: ServerConfig) -> std::io::Result<()> {
    let data = if config.access_token.is_some() {
        LoadedData::load(&config.data_source).await
    } else {
        log::warn!("{SETUP_INSTRUCTIONS}");
        LoadedData::Unconfigured
    };

    let state = web::Data::new(AppState::new(data, config.access_token.clone()));
    let static_dir = config.static_dir.clone();

    log::info!("Starting server on {}:{}", config.bind_addr, config.port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .app_data(state.clone())
            .configure(configure_api)
            // Serve frontend static files (production)
            .service(Files::new("/", static_dir.clone()).index_file("index.html"))
    })
    .bind((config.bind_addr, config.port))?
    .run()
    .await
}
