#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Standalone entry point for the precinct map server.
//!
//! Configuration comes entirely from the environment; see
//! [`precinct_map_server::config::ServerConfig::from_env`].

use precinct_map_server::config::ServerConfig;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    pretty_env_logger::init_custom_env("RUST_LOG");

    precinct_map_server::run_server(ServerConfig::from_env()).await
}
