//! Interactive mode for the server.
//!
//! Prompts for the bind address, port, and data source before starting
//! the server. Defaults come from the environment.

use dialoguer::{Confirm, Input};
use precinct_map_election::DataSource;

use crate::config::ServerConfig;

/// Runs the server in interactive mode, prompting for configuration.
///
/// Starts from [`ServerConfig::from_env`], lets the user override the
/// bind address, port, and data source, then delegates to
/// [`super::run_server`].
///
/// # Errors
///
/// Returns an `std::io::Result` error if the underlying server fails to
/// start.
#[allow(clippy::future_not_send)]
pub async fn run() -> std::io::Result<()> {
    println!("Precinct Map Server");
    println!();

    let mut config = ServerConfig::from_env();

    config.bind_addr = Input::new()
        .with_prompt("Bind address")
        .default(config.bind_addr.clone())
        .interact_text()
        .unwrap_or_else(|_| config.bind_addr.clone());

    let port_str: String = Input::new()
        .with_prompt("Port")
        .default(config.port.to_string())
        .interact_text()
        .unwrap_or_else(|_| config.port.to_string());
    config.port = port_str.trim().parse().unwrap_or(config.port);

    let data: String = Input::new()
        .with_prompt("Precinct data (path or URL)")
        .default(config.data_source.to_string())
        .interact_text()
        .unwrap_or_else(|_| config.data_source.to_string());
    config.data_source = DataSource::parse(&data);

    if config.access_token.is_none() {
        println!();
        println!("Warning: {}", crate::config::SETUP_INSTRUCTIONS);
        println!();
    }

    if !Confirm::new()
        .with_prompt(format!(
            "Start server on {}:{}?",
            config.bind_addr, config.port
        ))
        .default(true)
        .interact()
        .unwrap_or(true)
    {
        println!("Cancelled.");
        return Ok(());
    }

    super::run_server(config).await
}
