//! Server configuration from environment variables.

use std::path::PathBuf;

use precinct_map_election::DataSource;

/// Environment variable holding the map SDK access token.
pub const TOKEN_ENV_VAR: &str = "MAPBOX_TOKEN";

/// Environment variable naming the frontend bundle directory.
pub const STATIC_DIR_ENV_VAR: &str = "PRECINCT_MAP_STATIC_DIR";

/// Shown in place of the map when the access token is missing.
pub const SETUP_INSTRUCTIONS: &str = "The map needs a Mapbox access token. \
Create one at https://account.mapbox.com/access-tokens/, export it as \
MAPBOX_TOKEN (or put it in your shell profile), and restart the server.";

/// Everything the server needs to start.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind (`BIND_ADDR`, default `127.0.0.1`).
    pub bind_addr: String,
    /// Port to bind (`PORT`, default `8080`).
    pub port: u16,
    /// Where to load precincts from (`PRECINCT_MAP_DATA`).
    pub data_source: DataSource,
    /// Map SDK access token (`MAPBOX_TOKEN`). `None` when unset or blank.
    pub access_token: Option<String>,
    /// Frontend bundle directory (`PRECINCT_MAP_STATIC_DIR`, default
    /// `app/dist`).
    pub static_dir: PathBuf,
}

impl ServerConfig {
    /// Reads the configuration from the environment, applying defaults.
    #[must_use]
    pub fn from_env() -> Self {
        let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port: u16 = std::env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(8080);
        let static_dir = std::env::var(STATIC_DIR_ENV_VAR)
            .map_or_else(|_| PathBuf::from("app/dist"), PathBuf::from);

        Self {
            bind_addr,
            port,
            data_source: DataSource::from_env(),
            access_token: normalize_token(std::env::var(TOKEN_ENV_VAR).ok()),
            static_dir,
        }
    }
}

/// Treats a blank token the same as a missing one.
#[must_use]
pub fn normalize_token(token: Option<String>) -> Option<String> {
    token
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
}
